//! String normalization

use super::Normalizer;
use crate::translate::Translator;
use crate::value::Value;
use crate::Result;

pub(super) const NOT_A_STRINGABLE: &str = "Not a stringable";

impl<T: Translator> Normalizer<T> {
    /// Normalize a value to its text representation
    ///
    /// Stringable objects are rendered through their text capability.
    /// Scalars convert directly: `true` is `"1"`, `false` is `""`,
    /// integers are decimal and floats use their shortest round-trip
    /// form (`4.0` renders as `"4"`).
    ///
    /// # Errors
    /// `InvalidArgument("Not a stringable")` for null, arrays,
    /// traversables and objects without text capability.
    pub fn normalize_string(&self, value: impl Into<Value>) -> Result<String> {
        let value = value.into();
        if let Value::Object(object) = &value {
            if let Some(text) = object.to_text() {
                return Ok(text);
            }
        }

        match value {
            Value::String(text) => Ok(text),
            Value::Boolean(flag) => Ok(if flag { "1" } else { "" }.to_string()),
            Value::Integer(integer) => Ok(integer.to_string()),
            Value::Float(float) => Ok(float.to_string()),
            other => Err(self.reject("string", NOT_A_STRINGABLE, &[], other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::value::{Array, Traversable};

    fn normalizer() -> Normalizer {
        Normalizer::new()
    }

    #[test]
    fn test_string_is_unchanged() {
        assert_eq!(normalizer().normalize_string("string-5f1a").unwrap(), "string-5f1a");
        assert_eq!(normalizer().normalize_string("").unwrap(), "");
    }

    #[test]
    fn test_stringable_object_is_rendered() {
        let object = fixtures::stringable("rendered");
        assert_eq!(normalizer().normalize_string(object).unwrap(), "rendered");
    }

    #[test]
    fn test_integer() {
        assert_eq!(normalizer().normalize_string(57).unwrap(), "57");
        assert_eq!(normalizer().normalize_string(-3).unwrap(), "-3");
    }

    #[test]
    fn test_float() {
        assert_eq!(normalizer().normalize_string(42.37).unwrap(), "42.37");
        assert_eq!(normalizer().normalize_string(4.0).unwrap(), "4");
        assert_eq!(normalizer().normalize_string(-0.5).unwrap(), "-0.5");
    }

    #[test]
    fn test_boolean() {
        assert_eq!(normalizer().normalize_string(true).unwrap(), "1");
        assert_eq!(normalizer().normalize_string(false).unwrap(), "");
    }

    #[test]
    fn test_null_fails() {
        let err = normalizer().normalize_string(Value::Null).unwrap_err();
        assert_eq!(err.message(), NOT_A_STRINGABLE);
        assert!(err.argument().is_null());
    }

    #[test]
    fn test_opaque_object_fails() {
        let object = fixtures::opaque();
        let err = normalizer().normalize_string(object.clone()).unwrap_err();
        assert_eq!(err.argument(), &Value::Object(object));
    }

    #[test]
    fn test_array_fails() {
        let array: Array = (0..10).map(Value::Integer).collect();
        let err = normalizer().normalize_string(array.clone()).unwrap_err();
        assert_eq!(err.argument(), &Value::Array(array));
    }

    #[test]
    fn test_traversable_fails() {
        let traversable = Traversable::new(Array::from(vec!["a"]));
        assert!(normalizer().normalize_string(traversable).is_err());
    }

    #[test]
    fn test_idempotent() {
        let once = normalizer().normalize_string(12.5).unwrap();
        let twice = normalizer().normalize_string(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
