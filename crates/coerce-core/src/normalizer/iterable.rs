//! Iterable validation

use super::Normalizer;
use crate::translate::Translator;
use crate::value::Value;
use crate::Result;

pub(super) const NOT_AN_ITERABLE: &str = "Not an iterable";

impl<T: Translator> Normalizer<T> {
    /// Return the value unchanged if it can be iterated
    ///
    /// Arrays, traversables and objects (iterable over their
    /// properties) qualify. The value is handed back as is: objects and
    /// traversables keep their identity and no traversal is started,
    /// so lazy sources are left for the caller to consume.
    ///
    /// # Errors
    /// `InvalidArgument("Not an iterable")` for null and scalars.
    pub fn normalize_iterable(&self, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        if value.is_iterable() {
            Ok(value)
        } else {
            Err(self.reject("iterable", NOT_AN_ITERABLE, &[], value))
        }
    }
}
