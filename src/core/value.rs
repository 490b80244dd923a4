//! Scalar values exchanged with the host engine
//!
//! [`ScalarValue`] is the tagged union a host passes into a function and
//! receives back. Host bindings project the tag onto their own value
//! representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{Result, UdfError};
use super::error_code::{UDF0003, UDF0004};

/// SQL type tag of a [`ScalarValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Null,
    Text,
    Boolean,
    Int,
    BigInt,
    Real,
    Double,
}

impl ScalarType {
    /// SQL spelling used in signature tables
    pub fn sql_name(&self) -> &'static str {
        match self {
            ScalarType::Null => "null",
            ScalarType::Text => "text",
            ScalarType::Boolean => "boolean",
            ScalarType::Int => "int",
            ScalarType::BigInt => "bigint",
            ScalarType::Real => "real",
            ScalarType::Double => "double",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// Nullable, typed scalar payload
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScalarValue {
    #[default]
    Null,
    Text(String),
    Boolean(bool),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    BigInt(i64),
    /// Single-precision float
    Real(f32),
    /// Double-precision float
    Double(f64),
}

impl ScalarValue {
    pub fn text(value: impl Into<String>) -> Self {
        ScalarValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::Null => ScalarType::Null,
            ScalarValue::Text(_) => ScalarType::Text,
            ScalarValue::Boolean(_) => ScalarType::Boolean,
            ScalarValue::Int(_) => ScalarType::Int,
            ScalarValue::BigInt(_) => ScalarType::BigInt,
            ScalarValue::Real(_) => ScalarType::Real,
            ScalarValue::Double(_) => ScalarType::Double,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload widened to 64 bits
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int(i) => Some(i64::from(*i)),
            ScalarValue::BigInt(i) => Some(*i),
            _ => None,
        }
    }

    /// Float payload widened to 64 bits
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Real(f) => Some(f64::from(*f)),
            ScalarValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Consume the value, returning the owned text if it is one
    pub fn into_string(self) -> Option<String> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Read a `text` parameter at `position`. Null maps to `None`.
    pub fn text_arg(&self, position: usize) -> Result<Option<&str>> {
        match self {
            ScalarValue::Null => Ok(None),
            ScalarValue::Text(s) => Ok(Some(s)),
            other => Err(type_mismatch(ScalarType::Text, other.scalar_type(), position)),
        }
    }

    /// Read an `int` parameter at `position`. A `bigint` is accepted when it
    /// fits in 32 bits.
    pub fn int_arg(&self, position: usize) -> Result<Option<i32>> {
        match self {
            ScalarValue::Null => Ok(None),
            ScalarValue::Int(i) => Ok(Some(*i)),
            ScalarValue::BigInt(i) => i32::try_from(*i).map(Some).map_err(|_| {
                UdfError::argument_error(
                    UDF0004,
                    format!("Argument {} value {} does not fit in int", position + 1, i),
                )
                .at_position(position)
            }),
            other => Err(type_mismatch(ScalarType::Int, other.scalar_type(), position)),
        }
    }
}

fn type_mismatch(expected: ScalarType, actual: ScalarType, position: usize) -> UdfError {
    UdfError::argument_error(
        UDF0003,
        format!(
            "Argument {} expects {}, got {}",
            position + 1,
            expected,
            actual
        ),
    )
    .at_position(position)
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("NULL"),
            ScalarValue::Text(s) => write!(f, "'{}'", s),
            ScalarValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::BigInt(i) => write!(f, "{}", i),
            ScalarValue::Real(v) => write!(f, "{}", v),
            ScalarValue::Double(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::BigInt(value)
    }
}

impl From<f32> for ScalarValue {
    fn from(value: f32) -> Self {
        ScalarValue::Real(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Double(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        assert_eq!(ScalarValue::from(None::<String>), ScalarValue::Null);
        assert_eq!(ScalarValue::from(Some("a")), ScalarValue::text("a"));
        assert_eq!(ScalarValue::from(Some(3)), ScalarValue::Int(3));
    }

    #[test]
    fn test_scalar_type_tags() {
        assert_eq!(ScalarValue::Null.scalar_type(), ScalarType::Null);
        assert_eq!(ScalarValue::from(1i64).scalar_type(), ScalarType::BigInt);
        assert_eq!(ScalarValue::from(1.5f32).scalar_type(), ScalarType::Real);
        assert_eq!(ScalarType::BigInt.to_string(), "bigint");
    }

    #[test]
    fn test_text_arg() {
        assert_eq!(ScalarValue::text("x").text_arg(0).unwrap(), Some("x"));
        assert_eq!(ScalarValue::Null.text_arg(0).unwrap(), None);

        let err = ScalarValue::Int(1).text_arg(1).unwrap_err();
        assert_eq!(err.error_code(), &UDF0003);
        assert_eq!(err.message(), "Argument 2 expects text, got int");
    }

    #[test]
    fn test_int_arg_narrows_bigint() {
        assert_eq!(ScalarValue::BigInt(7).int_arg(0).unwrap(), Some(7));
        assert_eq!(ScalarValue::Null.int_arg(0).unwrap(), None);

        let err = ScalarValue::BigInt(i64::MAX).int_arg(2).unwrap_err();
        assert_eq!(err.error_code(), &UDF0004);
        assert!(ScalarValue::text("1").int_arg(0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ScalarValue::Null.to_string(), "NULL");
        assert_eq!(ScalarValue::text("a").to_string(), "'a'");
        assert_eq!(ScalarValue::Boolean(true).to_string(), "TRUE");
    }
}
