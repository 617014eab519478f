//! Row structure for tabulon result tables.
//!
//! A `Row` maps binding names to cells. Rows are sparse: a row does not need
//! to carry every binding of its table, and missing cells render as
//! `<NULL>`. Cells are reference counted so that merging rows during a
//! cross product shares them instead of copying.

use crate::cell::{Cell, NULL_CELL};
use alloc::rc::Rc;
use alloc::string::String;
use core::fmt::Write;
use hashbrown::HashMap;

/// A sparse mapping from binding name to cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, Rc<Cell>>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a row from `(binding, cell)` pairs.
    pub fn from_cells<I, B, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = (B, C)>,
        B: Into<String>,
        C: Into<Cell>,
    {
        let mut row = Self::new();
        for (binding, cell) in cells {
            row.insert(binding, cell.into());
        }
        row
    }

    /// Sets the cell for `binding`, returning the previous one if any.
    pub fn insert(&mut self, binding: impl Into<String>, cell: Cell) -> Option<Rc<Cell>> {
        self.cells.insert(binding.into(), Rc::new(cell))
    }

    /// Sets an already shared cell for `binding`.
    pub fn insert_shared(&mut self, binding: impl Into<String>, cell: Rc<Cell>) -> Option<Rc<Cell>> {
        self.cells.insert(binding.into(), cell)
    }

    /// Gets the cell for `binding`.
    #[inline]
    pub fn get(&self, binding: &str) -> Option<&Cell> {
        self.cells.get(binding).map(|c| c.as_ref())
    }

    /// Gets the shared handle of the cell for `binding`.
    #[inline]
    pub fn get_shared(&self, binding: &str) -> Option<&Rc<Cell>> {
        self.cells.get(binding)
    }

    /// Returns true if the row carries `binding`.
    #[inline]
    pub fn contains(&self, binding: &str) -> bool {
        self.cells.contains_key(binding)
    }

    /// Returns the number of cells in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if this row has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the bindings carried by this row, in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(|k| k.as_str())
    }

    /// Iterates over `(binding, cell)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<Cell>)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `rows` into a new row. On key collision the later row wins.
    pub fn merge(rows: &[&Row]) -> Row {
        let capacity = rows.iter().map(|r| r.len()).sum();
        let mut cells = HashMap::with_capacity(capacity);
        for row in rows {
            for (k, v) in &row.cells {
                cells.insert(k.clone(), Rc::clone(v));
            }
        }
        Row { cells }
    }

    /// Renders the row as a single text line following `bindings` order.
    ///
    /// Missing cells render as `<NULL>`; an empty separator means tab.
    pub fn to_text_line(&self, bindings: &[String], sep: &str) -> String {
        let sep = if sep.is_empty() { "\t" } else { sep };
        let mut line = String::new();
        for (i, binding) in bindings.iter().enumerate() {
            if i > 0 {
                line.push_str(sep);
            }
            match self.cells.get(binding) {
                Some(cell) => {
                    let _ = write!(line, "{}", cell);
                }
                None => line.push_str(NULL_CELL),
            }
        }
        line
    }
}

impl<B: Into<String>, C: Into<Cell>> FromIterator<(B, C)> for Row {
    fn from_iter<I: IntoIterator<Item = (B, C)>>(iter: I) -> Self {
        Row::from_cells(iter)
    }
}

impl core::fmt::Display for Row {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut keys: alloc::vec::Vec<&String> = self.cells.keys().collect();
        keys.sort();
        f.write_str("{")?;
        for (i, k) in keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", k, self.cells[*k])?;
        }
        f.write_str("}")
    }
}
