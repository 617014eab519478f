//! Typed literal values.
//!
//! Literals are the only cell kind that carries numeric data. They render as
//! `"<value>"^^type:<kind>` and expose a separate comparable form used by
//! sorting so that numbers order by magnitude rather than digit count.

use crate::error::{Error, Result};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The kind of a literal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralType {
    /// Boolean literal.
    Bool,
    /// 64-bit signed integer literal.
    Int64,
    /// 64-bit floating point literal.
    Float64,
    /// UTF-8 text literal.
    Text,
    /// Opaque byte literal.
    Blob,
}

impl LiteralType {
    /// Returns the type name used in rendered literals.
    pub fn name(&self) -> &'static str {
        match self {
            LiteralType::Bool => "bool",
            LiteralType::Int64 => "int64",
            LiteralType::Float64 => "float64",
            LiteralType::Text => "text",
            LiteralType::Blob => "blob",
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Literal {
    /// Returns the literal's type.
    pub fn literal_type(&self) -> LiteralType {
        match self {
            Literal::Bool(_) => LiteralType::Bool,
            Literal::Int64(_) => LiteralType::Int64,
            Literal::Float64(_) => LiteralType::Float64,
            Literal::Text(_) => LiteralType::Text,
            Literal::Blob(_) => LiteralType::Blob,
        }
    }

    /// Coerces the literal into an `i64`. Only integer literals coerce.
    pub fn to_int64(&self) -> Result<i64> {
        match self {
            Literal::Int64(v) => Ok(*v),
            other => Err(Error::not_coercible(format!("{}", other), "int64")),
        }
    }

    /// Coerces the literal into an `f64`. Only float literals coerce.
    pub fn to_float64(&self) -> Result<f64> {
        match self {
            Literal::Float64(v) => Ok(*v),
            other => Err(Error::not_coercible(format!("{}", other), "float64")),
        }
    }

    /// Returns a rendering whose lexicographic order follows numeric order,
    /// negative numbers included. Non-numeric literals render as `Display`.
    ///
    /// Numbers are mapped onto an order-preserving `u64` and zero-padded to
    /// 20 digits. Floats keep every bit, so two floats share a comparable
    /// form exactly when they share a `Display` form (NaN payloads aside).
    pub fn to_comparable_string(&self) -> String {
        match self {
            Literal::Int64(v) => {
                format!("\"{:020}\"^^type:{}", ordered_i64(*v), LiteralType::Int64)
            }
            Literal::Float64(v) => {
                format!("\"{:020}\"^^type:{}", ordered_f64(*v), LiteralType::Float64)
            }
            other => format!("{}", other),
        }
    }
}

const SIGN_BIT: u64 = 1 << 63;

#[inline]
fn ordered_i64(v: i64) -> u64 {
    (v as u64) ^ SIGN_BIT
}

#[inline]
fn ordered_f64(v: f64) -> u64 {
    let bits = v.to_bits();
    if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits | SIGN_BIT
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.literal_type();
        match self {
            Literal::Bool(v) => write!(f, "\"{}\"^^type:{}", v, ty),
            Literal::Int64(v) => write!(f, "\"{}\"^^type:{}", v, ty),
            Literal::Float64(v) => write!(f, "\"{}\"^^type:{}", v, ty),
            Literal::Text(v) => write!(f, "\"{}\"^^type:{}", v, ty),
            Literal::Blob(v) => write!(f, "\"{:?}\"^^type:{}", v, ty),
        }
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Int64(v)
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float64(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Text(v.into())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::Text(v)
    }
}
