//! Normalizers: coerce loosely-typed values into precise types
//!
//! A [`Normalizer`] bundles the five normalization operations with the
//! collaborator they share: the [`Translator`] every failure message
//! passes through. Each operation lives in its own submodule:
//!
//! | Operation              | Accepts                                   | Produces |
//! |------------------------|-------------------------------------------|----------|
//! | `normalize_string`     | scalars, stringable objects               | `String` |
//! | `normalize_int`        | whole numbers, numeric text, stringables  | `i64`    |
//! | `normalize_stringable` | scalars, stringable objects               | same value |
//! | `normalize_array`      | arrays, traversables, objects             | `Array`  |
//! | `normalize_iterable`   | arrays, traversables, objects             | same value |
//!
//! Every failure is an [`Error::InvalidArgument`] holding the original
//! input. Operations are pure and hold no state between calls.

mod array;
mod int;
mod iterable;
mod string;
mod stringable;

use std::fmt::Display;

use crate::translate::{Passthrough, Translator};
use crate::value::Value;
use crate::Error;

/// Normalization component with an injected translator
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer<T = Passthrough> {
    translator: T,
}

impl Normalizer {
    /// A normalizer with the passthrough translator
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Translator> Normalizer<T> {
    pub fn with_translator(translator: T) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Build the error for a rejected argument
    fn reject(
        &self,
        operation: &'static str,
        message: &str,
        args: &[&dyn Display],
        argument: Value,
    ) -> Error {
        let message = self.translator.translate(message, args);
        tracing::debug!(
            operation,
            kind = argument.type_name(),
            reason = %message,
            "rejected argument"
        );
        Error::invalid_argument(message, argument)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Display;

    /// Prefixes every message, to observe that failures pass through it
    #[derive(Debug, Default)]
    struct Shouting;

    impl Translator for Shouting {
        fn translate(&self, format: &str, args: &[&dyn Display]) -> String {
            crate::translate::format_message(format, args).to_uppercase()
        }
    }

    #[test]
    fn test_messages_pass_through_translator() {
        let normalizer = Normalizer::with_translator(Shouting);
        let err = normalizer.normalize_int("abc").unwrap_err();
        assert_eq!(err.message(), "NOT A NUMBER");
        assert_eq!(err.argument(), &Value::from("abc"));
    }

    #[test]
    fn test_borrowed_translator() {
        let shouting = Shouting;
        let normalizer = Normalizer::with_translator(&shouting);
        let err = normalizer.normalize_iterable(Value::Null).unwrap_err();
        assert_eq!(err.message(), "NOT AN ITERABLE");
    }

    #[test]
    fn test_default_normalizer_uses_passthrough() {
        let normalizer = Normalizer::new();
        let err = normalizer.normalize_string(Value::Null).unwrap_err();
        assert_eq!(err.message(), "Not a stringable");
    }
}
