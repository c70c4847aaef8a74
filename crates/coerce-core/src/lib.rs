//! Coerce Core - normalization of loosely-typed values
//!
//! Defensive helpers that turn a loosely-typed [`Value`] into the
//! precise shape a caller needs, or fail with an
//! [`Error::InvalidArgument`] that carries the offending input.
//!
//! # Architecture
//!
//! ```text
//! Value ──→ Normalizer<Translator> ──→ String | i64 | Array | Value
//!                 │
//!                 └─ on failure: translate(message) → Error::InvalidArgument
//! ```
//!
//! # Guarantees
//!
//! - **Pure**: no shared state, no I/O; safe to call from any thread
//! - **Idempotent**: normalizing an operation's own output is a no-op
//! - **Strict**: whole-number checks are exact, never tolerance-based
//! - **Lazy where promised**: iterable validation never consumes a source
//!
//! # Example
//!
//! ```rust
//! use coerce_core::{normalize_array, normalize_int, Object, Value};
//!
//! assert_eq!(normalize_int("42").unwrap(), 42);
//! assert!(normalize_int(4.000000000000002).is_err());
//!
//! let point = Object::builder("Point").property("x", 1).property("y", 2).build();
//! let array = normalize_array(point).unwrap();
//! assert_eq!(array.get("y"), Some(&Value::Integer(2)));
//! ```

pub mod error;
pub mod normalizer;
pub mod numeric;
pub mod translate;
pub mod value;

pub use error::{Error, Result};
pub use normalizer::Normalizer;
pub use translate::{Passthrough, Translator};
pub use value::{Array, Key, Object, ObjectBuilder, Stringable, Traversable, Traverse, Value};

/// Normalize to text with the default normalizer
pub fn normalize_string(value: impl Into<Value>) -> Result<String> {
    Normalizer::new().normalize_string(value)
}

/// Normalize to a whole-number integer with the default normalizer
pub fn normalize_int(value: impl Into<Value>) -> Result<i64> {
    Normalizer::new().normalize_int(value)
}

/// Validate a stringable value with the default normalizer
pub fn normalize_stringable(value: impl Into<Value>) -> Result<Value> {
    Normalizer::new().normalize_stringable(value)
}

/// Normalize to a concrete array with the default normalizer
pub fn normalize_array(value: impl Into<Value>) -> Result<Array> {
    Normalizer::new().normalize_array(value)
}

/// Validate an iterable value with the default normalizer
pub fn normalize_iterable(value: impl Into<Value>) -> Result<Value> {
    Normalizer::new().normalize_iterable(value)
}
