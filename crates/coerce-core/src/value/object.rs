//! Objects: named properties plus an optional text capability

use std::fmt;
use std::sync::Arc;

use super::Value;

/// Capability of rendering an object as text
///
/// Implement this for any type that should be accepted wherever a
/// string is expected, then attach it to an [`Object`] with
/// [`ObjectBuilder::text`].
pub trait Stringable: fmt::Debug + Send + Sync {
    fn to_text(&self) -> String;
}

#[derive(Debug)]
struct ObjectData {
    class: String,
    properties: Vec<(String, Value)>,
    text: Option<Box<dyn Stringable>>,
}

/// A shared object
///
/// Cloning an `Object` yields another handle to the same object, and
/// two objects compare equal only when they are the same object.
/// An object with neither properties nor text capability is opaque:
/// it is iterable (over nothing) but not stringable.
#[derive(Debug, Clone)]
pub struct Object {
    inner: Arc<ObjectData>,
}

impl Object {
    /// An opaque object of the given class
    pub fn new(class: impl Into<String>) -> Self {
        Self::builder(class).build()
    }

    pub fn builder(class: impl Into<String>) -> ObjectBuilder {
        ObjectBuilder {
            data: ObjectData {
                class: class.into(),
                properties: Vec::new(),
                text: None,
            },
        }
    }

    pub fn class(&self) -> &str {
        &self.inner.class
    }

    /// Properties in declaration order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.inner
            .properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties()
            .find(|(property, _)| *property == name)
            .map(|(_, value)| value)
    }

    pub fn property_count(&self) -> usize {
        self.inner.properties.len()
    }

    pub fn is_stringable(&self) -> bool {
        self.inner.text.is_some()
    }

    /// Render through the text capability; `None` when the object has none
    pub fn to_text(&self) -> Option<String> {
        self.inner.text.as_ref().map(|text| text.to_text())
    }

    /// True when both handles refer to the same object
    pub fn ptr_eq(a: &Object, b: &Object) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Object::ptr_eq(self, other)
    }
}

/// Builds an [`Object`] before it becomes shared
#[derive(Debug)]
pub struct ObjectBuilder {
    data: ObjectData,
}

impl ObjectBuilder {
    /// Declare a property; redeclaring a name replaces its value in place
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .data
            .properties
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            Some((_, slot)) => *slot = value,
            None => self.data.properties.push((name, value)),
        }
        self
    }

    /// Attach the text capability
    pub fn text(mut self, text: impl Stringable + 'static) -> Self {
        self.data.text = Some(Box::new(text));
        self
    }

    pub fn build(self) -> Object {
        Object {
            inner: Arc::new(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::fixtures;

    #[test]
    fn test_properties_keep_declaration_order() {
        let object = Object::builder("stdClass")
            .property("b", 2)
            .property("a", 1)
            .build();
        let names: Vec<_> = object.properties().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(object.property("a"), Some(&Value::Integer(1)));
        assert_eq!(object.property("missing"), None);
    }

    #[test]
    fn test_redeclared_property_replaces_value() {
        let object = Object::builder("stdClass")
            .property("a", 1)
            .property("b", 2)
            .property("a", 3)
            .build();
        assert_eq!(object.property_count(), 2);
        assert_eq!(object.property("a"), Some(&Value::Integer(3)));
    }

    #[test]
    fn test_text_capability() {
        let plain = fixtures::opaque();
        assert!(!plain.is_stringable());
        assert_eq!(plain.to_text(), None);

        let label = fixtures::stringable("hello");
        assert!(label.is_stringable());
        assert_eq!(label.to_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_equality_is_identity() {
        let first = Object::new("Same");
        let second = Object::new("Same");
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
