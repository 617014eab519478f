//! Result table.
//!
//! A `Table` owns a binding directory and an ordered sequence of rows. Rows
//! do not have to carry every binding; they are not validated against the
//! directory on insertion. All operations mutate the table in place and
//! assume the caller holds it exclusively.

use crate::bindings::BindingDirectory;
use alloc::string::String;
use alloc::vec::Vec;
use tabulon_core::{Error, Result, Row};

/// In-memory result table of a query.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub(crate) directory: BindingDirectory,
    pub(crate) rows: Vec<Row>,
}

impl Table {
    /// Creates a table for `bindings`.
    ///
    /// Fails with `DuplicateBinding` if a name repeats.
    pub fn new<I, S>(bindings: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bindings: Vec<String> = bindings.into_iter().map(Into::into).collect();
        let directory = BindingDirectory::from_list(bindings)?;
        Ok(Self {
            directory,
            rows: Vec::new(),
        })
    }

    /// Returns the bindings in output order.
    #[inline]
    pub fn bindings(&self) -> &[String] {
        self.directory.as_slice()
    }

    /// Returns true if `binding` is currently bound.
    #[inline]
    pub fn has_binding(&self, binding: &str) -> bool {
        self.directory.contains(binding)
    }

    /// Adds the bindings not yet present, after the existing ones.
    pub fn add_bindings<I, S>(&mut self, bindings: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.directory.add(bindings);
    }

    /// Replaces the bindings with `bindings`, in the given order.
    ///
    /// Every requested name must already be bound; otherwise the table is left
    /// unmodified and `UnknownBindingProjection` is returned. Row data is not
    /// dropped, cells of unprojected bindings stay reachable through `row`.
    pub fn project_bindings<S: AsRef<str>>(&mut self, bindings: &[S]) -> Result<()> {
        let before = self.directory.len();
        match self.directory.project(bindings) {
            Ok(()) => {
                tracing::debug!(before, after = self.directory.len(), "bindings projected");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(%err, "projection rejected");
                Err(err)
            }
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`, or None if out of range.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the row at `index`, failing with `RowIndexOutOfRange`.
    pub fn row_checked(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or_else(|| Error::row_index_out_of_range(index, self.rows.len()))
    }

    /// Returns all rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Appends `row` at the end. Empty rows are dropped.
    pub fn add_row(&mut self, row: Row) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }

    /// Removes the row at `index`.
    pub fn delete_row(&mut self, index: usize) -> Result<Row> {
        if index >= self.rows.len() {
            return Err(Error::row_index_out_of_range(index, self.rows.len()));
        }
        Ok(self.rows.remove(index))
    }

    /// Drops every row, keeping the bindings.
    pub fn truncate(&mut self) {
        self.rows.clear();
    }

    /// Keeps only the first `limit` rows.
    ///
    /// A limit at or above the row count is a no-op; a negative limit fails
    /// with `NegativeLimit`.
    pub fn limit(&mut self, limit: i64) -> Result<()> {
        if limit < 0 {
            return Err(Error::NegativeLimit { limit });
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        if limit < self.rows.len() {
            self.rows.truncate(limit);
            self.rows.shrink_to_fit();
        }
        Ok(())
    }

    /// Removes every row for which `drop_row` returns true, preserving the
    /// order of the remaining rows.
    pub fn filter<F>(&mut self, mut drop_row: F)
    where
        F: FnMut(&Row) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| !drop_row(row));
        tracing::debug!(before, after = self.rows.len(), "table filtered");
    }
}
