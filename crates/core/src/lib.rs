//! Tabulon Core - Cell, row and value types for the tabulon result-table engine.
//!
//! This crate provides the leaf types every table operation is built on:
//!
//! - `Cell`: Tagged union over the value kinds a query can bind (text, node,
//!   predicate, literal, timestamp) plus null
//! - `Row`: A sparse mapping from binding name to cell
//! - `Literal`, `Node`, `Predicate`: The value kinds held by cells
//! - `Value`: What accumulators produce while reducing groups
//! - `Error`: Error types for table operations
//!
//! # Example
//!
//! ```rust
//! use tabulon_core::{Cell, Literal, Node, Row};
//!
//! let row = Row::from_cells([
//!     ("?person", Cell::from(Node::new("/user", "alice"))),
//!     ("?age", Cell::from(Literal::Int64(30))),
//! ]);
//!
//! assert_eq!(row.get("?person").unwrap().to_string(), "/user<alice>");
//! assert_eq!(row.get("?age").unwrap().to_string(), "\"30\"^^type:int64");
//! assert!(row.get("?city").is_none());
//! ```

#![no_std]

extern crate alloc;

mod cell;
mod error;
mod literal;
mod node;
mod row;
mod value;

pub use cell::{Cell, CellKind, NULL_CELL};
pub use error::{Error, Result};
pub use literal::{Literal, LiteralType};
pub use node::{format_timestamp, Node, Predicate};
pub use row::Row;
pub use value::Value;

/// Point in time held by timestamp cells and temporal predicates.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
