//! Stringable validation

use super::string::NOT_A_STRINGABLE;
use super::Normalizer;
use crate::translate::Translator;
use crate::value::Value;
use crate::Result;

impl<T: Translator> Normalizer<T> {
    /// Return the value unchanged if it can be treated as a string
    ///
    /// Scalars (boolean, integer, float, text) and objects with text
    /// capability qualify. Nothing is converted.
    ///
    /// # Errors
    /// `InvalidArgument("Not a stringable")` for null, arrays,
    /// traversables and objects without text capability.
    pub fn normalize_stringable(&self, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        if value.is_stringable() {
            Ok(value)
        } else {
            Err(self.reject("stringable", NOT_A_STRINGABLE, &[], value))
        }
    }
}
