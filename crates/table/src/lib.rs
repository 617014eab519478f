//! Tabulon Table - In-memory result table for query execution.
//!
//! A `Table` holds the rows a query produced over a named set of bindings
//! and provides the operations an executor applies after row generation:
//!
//! - binding management: `add_bindings`, `project_bindings`
//! - row mutation: `add_row`, `delete_row`, `truncate`, `limit`, `filter`
//! - composition: `append_table`, `dot_product`
//! - ordering: `sort` with a multi-key `SortConfig`
//! - group-by reduction: `reduce` with `AliasAccPair` and `Accumulator`s
//!
//! Tables are plain single-owner values. Every operation takes `&mut self`
//! and runs synchronously; sharing a table across threads needs an external
//! lock.
//!
//! # Example
//!
//! ```rust
//! use tabulon_core::{Cell, Literal, Row};
//! use tabulon_table::{AliasAccPair, SortConfig, SortKey, SumInt64, Table};
//!
//! let mut table = Table::new(["?g", "?val"]).unwrap();
//! for (g, v) in [(1, 3), (1, 4), (2, 5)] {
//!     table.add_row(Row::from_cells([
//!         ("?g", Cell::Literal(Literal::Int64(g))),
//!         ("?val", Cell::Literal(Literal::Int64(v))),
//!     ]));
//! }
//!
//! let config = SortConfig::new(vec![SortKey::asc("?g")]);
//! let mut pairs = vec![
//!     AliasAccPair::keep("?g", "?g"),
//!     AliasAccPair::aggregate("?val", "?total", SumInt64::new(0)),
//! ];
//! table.reduce(&config, &mut pairs).unwrap();
//!
//! assert_eq!(table.bindings(), &["?g".to_string(), "?total".to_string()][..]);
//! assert_eq!(table.num_rows(), 2);
//! assert_eq!(
//!     table.row(0).unwrap().get("?total"),
//!     Some(&Cell::Literal(Literal::Int64(7)))
//! );
//! ```

#![no_std]

extern crate alloc;

mod accumulator;
mod bindings;
mod join;
mod reduce;
mod sort;
mod table;
mod text;

pub use accumulator::{Accumulator, Count, CountDistinct, SumFloat64, SumInt64};
pub use bindings::BindingDirectory;
pub use join::merge_rows;
pub use reduce::AliasAccPair;
pub use sort::{compare_cells, SortConfig, SortKey};
pub use table::Table;
