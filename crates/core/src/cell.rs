//! Cell definitions.
//!
//! A `Cell` occupies one (binding, row) slot of a result table. Ordering never
//! looks at cells structurally; every comparison and serialization path goes
//! through their canonical string rendering.

use crate::literal::Literal;
use crate::node::{format_timestamp, Node, Predicate};
use crate::Timestamp;
use alloc::string::{String, ToString};
use core::fmt;

/// Rendering used for an empty cell or a binding missing from a row.
pub const NULL_CELL: &str = "<NULL>";

/// The variant tag of a cell.
///
/// The declaration order doubles as the rank used when two cells of
/// different kinds meet in a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKind {
    Null,
    Text,
    Node,
    Predicate,
    Literal,
    Timestamp,
}

/// A value held by a table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// No value
    Null,
    /// Plain text
    Text(String),
    /// Graph node
    Node(Node),
    /// Predicate
    Predicate(Predicate),
    /// Typed literal
    Literal(Literal),
    /// Point in time
    Timestamp(Timestamp),
}

impl Cell {
    /// Returns the variant tag of this cell.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Null => CellKind::Null,
            Cell::Text(_) => CellKind::Text,
            Cell::Node(_) => CellKind::Node,
            Cell::Predicate(_) => CellKind::Predicate,
            Cell::Literal(_) => CellKind::Literal,
            Cell::Timestamp(_) => CellKind::Timestamp,
        }
    }

    /// Returns true if this cell holds no value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Returns the literal if this is a Literal cell, None otherwise.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Cell::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the text if this is a Text cell, None otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the rendering used by the ordering engine.
    ///
    /// Identical to `Display` except for literals, which use their
    /// comparable form.
    pub fn comparable_string(&self) -> String {
        match self {
            Cell::Literal(l) => l.to_comparable_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str(NULL_CELL),
            Cell::Text(s) => f.write_str(s),
            Cell::Node(n) => write!(f, "{}", n),
            Cell::Predicate(p) => write!(f, "{}", p),
            Cell::Literal(l) => write!(f, "{}", l),
            Cell::Timestamp(t) => f.write_str(&format_timestamp(t)),
        }
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.into())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<Node> for Cell {
    fn from(v: Node) -> Self {
        Cell::Node(v)
    }
}

impl From<Predicate> for Cell {
    fn from(v: Predicate) -> Self {
        Cell::Predicate(v)
    }
}

impl From<Literal> for Cell {
    fn from(v: Literal) -> Self {
        Cell::Literal(v)
    }
}

impl From<Timestamp> for Cell {
    fn from(v: Timestamp) -> Self {
        Cell::Timestamp(v)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Cell::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Null.to_string(), "<NULL>");
        assert_eq!(Cell::from("hello").to_string(), "hello");
        assert_eq!(Cell::from(Node::new("/u", "bob")).to_string(), "/u<bob>");
        assert_eq!(Cell::from(Literal::Int64(3)).to_string(), "\"3\"^^type:int64");

        let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Cell::from(ts).to_string(), "2020-01-02T03:04:05Z");
    }

    #[test]
    fn test_cell_kind() {
        assert_eq!(Cell::Null.kind(), CellKind::Null);
        assert_eq!(Cell::from("x").kind(), CellKind::Text);
        assert_eq!(Cell::from(Predicate::immutable("p")).kind(), CellKind::Predicate);
        assert!(CellKind::Null < CellKind::Timestamp);
    }

    #[test]
    fn test_comparable_string() {
        let lit = Cell::from(Literal::Int64(5));
        assert_ne!(lit.comparable_string(), lit.to_string());

        let text = Cell::from("abc");
        assert_eq!(text.comparable_string(), "abc");
    }

    #[test]
    fn test_cell_from_option() {
        let c: Cell = None::<&str>.into();
        assert!(c.is_null());
        let c: Cell = Some("v").into();
        assert_eq!(c.as_text(), Some("v"));
    }
}
