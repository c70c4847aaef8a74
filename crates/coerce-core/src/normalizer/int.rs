//! Integer normalization
//!
//! The whole-number check is exact: a float passes only when `f % 1.0`
//! is exactly zero. Values that are "almost" whole because of binary
//! representation error, like `4.000000000000002`, are rejected.
//! Callers that want tolerance must round before normalizing.

use super::Normalizer;
use crate::numeric::{self, Number};
use crate::translate::Translator;
use crate::value::Value;
use crate::Result;

const NOT_A_NUMBER: &str = "Not a number";
const NOT_A_WHOLE_NUMBER: &str = "Not a whole number";
const OUT_OF_RANGE: &str = "Number %s is out of the integer range";

// -2^63 converts exactly; 2^63 is the first float past i64::MAX.
const MIN_FLOAT: f64 = i64::MIN as f64;
const MAX_FLOAT_EXCLUSIVE: f64 = -MIN_FLOAT;

impl<T: Translator> Normalizer<T> {
    /// Normalize a value to a whole-number integer
    ///
    /// Accepts integers, whole floats, numeric strings and stringable
    /// objects whose text is a numeric string. Booleans are not numbers.
    ///
    /// # Errors
    /// - `"Not a number"` for null, booleans, arrays, traversables,
    ///   non-stringable objects and non-numeric text
    /// - `"Not a whole number"` for any nonzero fractional part, NaN
    ///   and infinities
    /// - `"Number … is out of the integer range"` beyond `i64`
    ///
    /// The error always carries the original input.
    pub fn normalize_int(&self, value: impl Into<Value>) -> Result<i64> {
        let value = value.into();
        let number = match &value {
            Value::Integer(integer) => Some(Number::Integer(*integer)),
            Value::Float(float) => Some(Number::Float(*float)),
            Value::String(text) => numeric::parse_numeric(text),
            Value::Object(object) if object.is_stringable() => {
                let text = self.normalize_string(object.clone())?;
                numeric::parse_numeric(&text)
            }
            _ => None,
        };

        match number {
            Some(Number::Integer(integer)) => Ok(integer),
            Some(Number::Float(float)) => self.whole_float(float, value),
            Some(Number::Overflow(nearest)) => Err(self.out_of_range(nearest, value)),
            None => Err(self.reject("int", NOT_A_NUMBER, &[], value)),
        }
    }

    fn whole_float(&self, float: f64, original: Value) -> Result<i64> {
        if float % 1.0 != 0.0 {
            return Err(self.reject("int", NOT_A_WHOLE_NUMBER, &[], original));
        }
        if !(MIN_FLOAT..MAX_FLOAT_EXCLUSIVE).contains(&float) {
            return Err(self.out_of_range(float, original));
        }
        Ok(float as i64)
    }

    fn out_of_range(&self, float: f64, original: Value) -> crate::Error {
        let shown = format!("{:e}", float);
        self.reject("int", OUT_OF_RANGE, &[&shown], original)
    }
}
