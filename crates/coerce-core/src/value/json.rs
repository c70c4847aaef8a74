//! Bridge between `Value` and `serde_json::Value`

use super::{Array, Object, Value};

/// Class given to objects decoded from JSON objects
pub const PLAIN_CLASS: &str = "stdClass";

impl Value {
    /// Decode a JSON document
    ///
    /// JSON objects become property-bag objects (class `stdClass`),
    /// JSON arrays become index-keyed arrays, and numbers become
    /// integers when they fit in `i64`.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => {
                let object = map
                    .iter()
                    .fold(Object::builder(PLAIN_CLASS), |builder, (name, value)| {
                        builder.property(name.clone(), Value::from_json(value))
                    })
                    .build();
                Value::Object(object)
            }
        }
    }

    /// Encode as JSON
    ///
    /// Arrays keyed `0..n` encode as JSON arrays, other arrays and
    /// objects as JSON objects. Traversables are drained. Non-finite
    /// floats encode as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::json!(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(array) => array_to_json(array),
            Value::Object(object) => {
                let map = object
                    .properties()
                    .map(|(name, value)| (name.to_string(), value.to_json()))
                    .collect();
                serde_json::Value::Object(map)
            }
            Value::Traversable(traversable) => {
                let drained: Array = traversable.iter().collect();
                array_to_json(&drained)
            }
        }
    }
}

fn array_to_json(array: &Array) -> serde_json::Value {
    if array.is_list() {
        serde_json::Value::Array(array.values().map(Value::to_json).collect())
    } else {
        let map = array
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}
