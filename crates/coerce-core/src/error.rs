//! Error types for value normalization
//!
//! All fallible operations return `Result<T, Error>`.
//! Every error carries the offending argument so callers can inspect
//! what was rejected and pick their own fallback.

use crate::value::Value;

/// Normalization error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The argument cannot be normalized into the requested shape
    #[error("Invalid argument: {message} (got {})", .argument.type_name())]
    InvalidArgument {
        /// Human-readable reason, already passed through the translator
        message: String,
        /// Optional machine-readable code
        code: Option<i64>,
        /// Underlying failure, if this one wraps another
        #[source]
        previous: Option<Box<Error>>,
        /// The original input that was rejected
        argument: Value,
    },
}

impl Error {
    /// Create an invalid-argument error for `argument`
    pub fn invalid_argument(message: impl Into<String>, argument: impl Into<Value>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
            code: None,
            previous: None,
            argument: argument.into(),
        }
    }

    /// Attach a machine-readable code
    pub fn with_code(mut self, value: i64) -> Self {
        match &mut self {
            Error::InvalidArgument { code, .. } => *code = Some(value),
        }
        self
    }

    /// Chain an underlying error, exposed through `source()`
    pub fn with_previous(mut self, error: Error) -> Self {
        match &mut self {
            Error::InvalidArgument { previous, .. } => *previous = Some(Box::new(error)),
        }
        self
    }

    pub fn message(&self) -> &str {
        match self {
            Error::InvalidArgument { message, .. } => message,
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Error::InvalidArgument { code, .. } => *code,
        }
    }

    pub fn previous(&self) -> Option<&Error> {
        match self {
            Error::InvalidArgument { previous, .. } => previous.as_deref(),
        }
    }

    /// The rejected input
    pub fn argument(&self) -> &Value {
        match self {
            Error::InvalidArgument { argument, .. } => argument,
        }
    }

    /// Take back ownership of the rejected input
    pub fn into_argument(self) -> Value {
        match self {
            Error::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// Result type alias for normalization operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_message_and_type() {
        let err = Error::invalid_argument("Not a number", Value::Boolean(true));
        assert_eq!(err.to_string(), "Invalid argument: Not a number (got Boolean)");
    }

    #[test]
    fn test_argument_is_preserved() {
        let err = Error::invalid_argument("Not an iterable", "plain text");
        assert_eq!(err.argument(), &Value::String("plain text".into()));
        assert_eq!(err.into_argument(), Value::String("plain text".into()));
    }

    #[test]
    fn test_code_and_previous() {
        let inner = Error::invalid_argument("Not a stringable", Value::Null);
        let err = Error::invalid_argument("Not a number", Value::Null)
            .with_code(22)
            .with_previous(inner);

        assert_eq!(err.code(), Some(22));
        assert_eq!(err.previous().map(Error::message), Some("Not a stringable"));
        let source = err.source().expect("previous error is the source");
        assert!(source.to_string().contains("Not a stringable"));
    }

    #[test]
    fn test_defaults_have_no_code_or_source() {
        let err = Error::invalid_argument("Not a number", 1.5);
        assert_eq!(err.code(), None);
        assert!(err.previous().is_none());
        assert!(err.source().is_none());
    }
}
