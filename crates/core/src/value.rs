//! Accumulator values.
//!
//! `Value` is what an accumulator hands back after folding a cell. The
//! reduction engine only turns integer and double values into cells, the
//! other variants exist so that a misbehaving accumulator is reported rather
//! than silently coerced.

use crate::cell::Cell;
use crate::literal::Literal;
use alloc::string::String;
use core::fmt;

/// A value produced by an accumulator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Float64(f64),
    /// UTF-8 string
    Text(String),
}

impl Value {
    /// Returns the i64 value if this is an Int64, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 value if this is a Float64, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Converts a numeric value into a literal cell. Non-numeric values
    /// are handed back unchanged.
    pub fn into_numeric_cell(self) -> core::result::Result<Cell, Value> {
        match self {
            Value::Int64(v) => Ok(Cell::Literal(Literal::Int64(v))),
            Value::Float64(v) => Ok(Cell::Literal(Literal::Float64(v))),
            other => Err(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}
