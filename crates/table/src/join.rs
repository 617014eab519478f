//! Whole-table composition: append and cross product.

use crate::table::Table;
use alloc::vec::Vec;
use tabulon_core::{Error, Result, Row};

/// Merges `rows` into a new row; on a binding collision the later row wins.
pub fn merge_rows(rows: &[&Row]) -> Row {
    Row::merge(rows)
}

impl Table {
    /// Appends the rows of `other` after the receiver's.
    ///
    /// `None` is a no-op. A receiver without bindings adopts `other`'s
    /// bindings; otherwise both binding sets must be equal or the call fails
    /// with `BindingSetMismatch` and nothing changes.
    pub fn append_table(&mut self, other: Option<&Table>) -> Result<()> {
        let Some(other) = other else {
            return Ok(());
        };
        if !self.directory.is_empty() && !self.directory.same_set(&other.directory) {
            let err = Error::binding_set_mismatch(self.bindings(), other.bindings());
            tracing::debug!(%err, "append rejected");
            return Err(err);
        }
        if self.directory.is_empty() {
            self.directory = other.directory.clone();
        }
        self.rows.extend(other.rows.iter().cloned());
        tracing::debug!(appended = other.rows.len(), rows = self.rows.len(), "table appended");
        Ok(())
    }

    /// Replaces the table with its cross product with `other`.
    ///
    /// The binding sets must be disjoint, otherwise the call fails with
    /// `NonDisjointBindings` and nothing changes. The resulting bindings are
    /// the receiver's followed by `other`'s, and the rows are every
    /// `(self_row, other_row)` pair merged, receiver rows in the outer loop.
    ///
    /// Time and memory are `O(n1 * n2)`: all rows are materialized eagerly,
    /// so callers must bound the input sizes themselves.
    pub fn dot_product(&mut self, other: &Table) -> Result<()> {
        let shared = self.directory.shared_with(&other.directory);
        if !shared.is_empty() {
            let err = Error::NonDisjointBindings { shared };
            tracing::debug!(%err, "dot product rejected");
            return Err(err);
        }

        self.directory = self.directory.union(&other.directory);

        let size = self.rows.len() * other.rows.len();
        let mut result = Vec::with_capacity(size);
        for left in &self.rows {
            for right in &other.rows {
                result.push(merge_rows(&[left, right]));
            }
        }
        tracing::debug!(
            left = self.rows.len(),
            right = other.rows.len(),
            rows = result.len(),
            bindings = self.directory.len(),
            "dot product computed"
        );
        self.rows = result;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use tabulon_core::Cell;

    fn table(bindings: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(bindings.iter().copied()).unwrap();
        for values in rows {
            t.add_row(
                bindings
                    .iter()
                    .zip(values.iter())
                    .map(|(b, v)| (*b, Cell::from(*v)))
                    .collect(),
            );
        }
        t
    }

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_append_table() {
        let mut t1 = table(&["?a", "?b"], &[&["1", "2"]]);
        let t2 = table(&["?b", "?a"], &[&["4", "3"], &["6", "5"]]);
        t1.append_table(Some(&t2)).unwrap();
        assert_eq!(t1.num_rows(), 3);
        assert_eq!(t1.bindings(), &names(&["?a", "?b"])[..]);
        assert_eq!(t1.row(2).unwrap().get("?a").unwrap().as_text(), Some("5"));
    }

    #[test]
    fn test_append_none_is_noop() {
        let mut t = table(&["?a"], &[&["1"]]);
        t.append_table(None).unwrap();
        assert_eq!(t.num_rows(), 1);
    }

    #[test]
    fn test_append_into_unbound_adopts_bindings() {
        let mut t = Table::default();
        let other = table(&["?x", "?y"], &[&["1", "2"]]);
        t.append_table(Some(&other)).unwrap();
        assert_eq!(t.bindings(), &names(&["?x", "?y"])[..]);
        assert!(t.has_binding("?y"));
        assert_eq!(t.num_rows(), 1);
    }

    #[test]
    fn test_append_mismatch_fails() {
        let mut t1 = table(&["?a"], &[&["1"]]);
        let t2 = table(&["?b"], &[&["2"]]);
        let err = t1.append_table(Some(&t2)).unwrap_err();
        assert!(matches!(err, Error::BindingSetMismatch { .. }));
        assert_eq!(t1.num_rows(), 1);
        assert_eq!(t1.bindings(), &names(&["?a"])[..]);
    }

    #[test]
    fn test_dot_product() {
        let mut t1 = table(&["?a", "?b"], &[&["a1", "b1"], &["a2", "b2"], &["a3", "b3"]]);
        let t2 = table(&["?c"], &[&["c1"], &["c2"]]);
        t1.dot_product(&t2).unwrap();

        assert_eq!(t1.bindings(), &names(&["?a", "?b", "?c"])[..]);
        assert_eq!(t1.num_rows(), 6);
        for row in t1.rows() {
            assert_eq!(row.len(), 3);
        }
        let first = t1.row(0).unwrap();
        assert_eq!(first.get("?a").unwrap().as_text(), Some("a1"));
        assert_eq!(first.get("?c").unwrap().as_text(), Some("c1"));
        let second = t1.row(1).unwrap();
        assert_eq!(second.get("?a").unwrap().as_text(), Some("a1"));
        assert_eq!(second.get("?c").unwrap().as_text(), Some("c2"));
    }

    #[test]
    fn test_dot_product_with_empty_side() {
        let mut t1 = table(&["?a"], &[&["1"], &["2"]]);
        let t2 = table(&["?b"], &[]);
        t1.dot_product(&t2).unwrap();
        assert_eq!(t1.num_rows(), 0);
        assert_eq!(t1.bindings(), &names(&["?a", "?b"])[..]);
    }

    #[test]
    fn test_dot_product_requires_disjoint() {
        let mut t1 = table(&["?a", "?b"], &[&["1", "2"]]);
        let t2 = table(&["?c", "?a"], &[&["3", "4"]]);
        let err = t1.dot_product(&t2).unwrap_err();
        assert_eq!(
            err,
            Error::NonDisjointBindings {
                shared: vec!["?a".to_string()]
            }
        );
        assert_eq!(t1.bindings(), &names(&["?a", "?b"])[..]);
        assert_eq!(t1.num_rows(), 1);
    }
}
