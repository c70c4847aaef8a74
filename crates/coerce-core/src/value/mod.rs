//! Runtime values accepted by the normalizers
//!
//! `Value` is a closed union over every input shape the normalizers
//! understand. Shapes are told apart by variant, never by probing an
//! object for methods at runtime.
//!
//! | Variant       | Shape                                                  |
//! |---------------|--------------------------------------------------------|
//! | `Null`        | absent value                                           |
//! | `Boolean`     | scalar                                                 |
//! | `Integer`     | scalar (`i64`)                                         |
//! | `Float`       | scalar (`f64`)                                         |
//! | `String`      | scalar text                                            |
//! | `Array`       | concrete, insertion-ordered key-value container        |
//! | `Object`      | named properties plus an optional text capability      |
//! | `Traversable` | external iteration source, consumed only on demand     |

mod array;
mod json;
mod object;
mod traversable;

pub use array::{Array, Key};
pub use json::PLAIN_CLASS;
pub use object::{Object, ObjectBuilder, Stringable};
pub use traversable::{Traversable, Traverse};

/// A loosely-typed input value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null / absent
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value (i64)
    Integer(i64),
    /// Float value (f64)
    Float(f64),
    /// Text value
    String(String),
    /// Ordered key-value container
    Array(Array),
    /// Object (shared; equality is identity)
    Object(Object),
    /// Generic enumerable (shared; equality is identity)
    Traversable(Traversable),
}

impl Value {
    /// Stable name of the variant, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
            Value::Traversable(_) => "Traversable",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean, integer, float or text
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Boolean(_) | Value::Integer(_) | Value::Float(_) | Value::String(_)
        )
    }

    /// A scalar, or an object carrying the text capability
    pub fn is_stringable(&self) -> bool {
        match self {
            Value::Object(object) => object.is_stringable(),
            other => other.is_scalar(),
        }
    }

    /// An array, an object (iterable over its properties) or a traversable
    pub fn is_iterable(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Traversable(_)
        )
    }
}

// ── Conversions ───────────────────────────────────────────

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

macro_rules! integer_conversions {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_conversions!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Traversable> for Value {
    fn from(value: Traversable) -> Self {
        Value::Traversable(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
