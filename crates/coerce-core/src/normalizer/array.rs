//! Array normalization

use super::iterable::NOT_AN_ITERABLE;
use super::Normalizer;
use crate::translate::Translator;
use crate::value::{Array, Key, Value};
use crate::Result;

impl<T: Translator> Normalizer<T> {
    /// Normalize a value into a concrete ordered array
    ///
    /// - arrays are returned as they are
    /// - traversables are drained completely, keeping keys and order
    ///   (a later duplicate key overwrites the earlier value in place)
    /// - objects yield their properties, `name => value`, in
    ///   declaration order
    ///
    /// The result never defers to the source: one-shot traversables
    /// are consumed by this call.
    ///
    /// # Errors
    /// `InvalidArgument("Not an iterable")` for null and scalars.
    pub fn normalize_array(&self, value: impl Into<Value>) -> Result<Array> {
        match value.into() {
            Value::Array(array) => Ok(array),
            Value::Traversable(traversable) => {
                let array: Array = traversable.iter().collect();
                tracing::trace!(entries = array.len(), "drained traversable");
                Ok(array)
            }
            Value::Object(object) => Ok(object
                .properties()
                .map(|(name, value)| (Key::from(name), value.clone()))
                .collect()),
            other => Err(self.reject("array", NOT_AN_ITERABLE, &[], other)),
        }
    }
}
