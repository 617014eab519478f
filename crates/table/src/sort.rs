//! Ordering engine.
//!
//! Rows are ordered by a `SortConfig`: an ordered list of bindings, each
//! ascending or descending. Cells of the same kind compare by their trimmed
//! comparable rendering; the first key that tells two rows apart decides,
//! and rows tied on every key compare equal.

use crate::table::Table;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use tabulon_core::{Cell, CellKind, Error, Result, Row};

/// Sort direction of a binding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Binding to read from each row.
    pub binding: String,
    /// Whether the order is reversed.
    pub desc: bool,
}

impl SortKey {
    /// Ascending key on `binding`.
    pub fn asc(binding: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            desc: false,
        }
    }

    /// Descending key on `binding`.
    pub fn desc(binding: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            desc: true,
        }
    }
}

/// Ordered list of sort keys, first key has the highest priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortConfig {
    keys: Vec<SortKey>,
}

/// Pre-rendered sort key of one row: one entry per configured binding.
type RenderedKey = Vec<(CellKind, String)>;

impl SortConfig {
    /// Creates a sort configuration from `keys`.
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    /// Returns the configured keys.
    #[inline]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no key is configured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the configured binding names.
    pub fn bindings(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.binding.as_str())
    }

    /// Compares two rows.
    ///
    /// Fails with `MissingSortBindingOnOperand` if either row lacks a
    /// configured binding; `a` is the left row and `b` the right one.
    pub fn compare_rows(&self, a: &Row, b: &Row) -> Result<Ordering> {
        for key in &self.keys {
            let ca = a
                .get(&key.binding)
                .ok_or_else(|| Error::missing_sort_operand(key.binding.as_str(), "left"))?;
            let cb = b
                .get(&key.binding)
                .ok_or_else(|| Error::missing_sort_operand(key.binding.as_str(), "right"))?;
            let cmp = directed(compare_cells(ca, cb), key.desc);
            if cmp != Ordering::Equal {
                return Ok(cmp);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Renders the sort key of `row`, the `index`th row of its table.
    fn render(&self, row: &Row, index: usize) -> Result<RenderedKey> {
        self.keys
            .iter()
            .map(|key| {
                row.get(&key.binding)
                    .map(|cell| (cell.kind(), cell.comparable_string()))
                    .ok_or_else(|| Error::missing_sort_binding(key.binding.as_str(), index))
            })
            .collect()
    }

    fn compare_rendered(&self, a: &RenderedKey, b: &RenderedKey) -> Ordering {
        for (key, ((ka, sa), (kb, sb))) in self.keys.iter().zip(a.iter().zip(b.iter())) {
            let cmp = if ka == kb {
                sa.trim().cmp(sb.trim())
            } else {
                ka.cmp(kb)
            };
            let cmp = directed(cmp, key.desc);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    }
}

impl From<Vec<SortKey>> for SortConfig {
    fn from(keys: Vec<SortKey>) -> Self {
        Self::new(keys)
    }
}

impl FromIterator<SortKey> for SortConfig {
    fn from_iter<I: IntoIterator<Item = SortKey>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for SortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for key in &self.keys {
            let dir = if key.desc { "DESC" } else { "ASC" };
            write!(f, "{}->{} ", key.binding, dir)?;
        }
        f.write_str("]")
    }
}

/// Compares two cells.
///
/// Cells of the same kind compare by trimmed comparable rendering. Cells of
/// different kinds order by kind so that the comparison stays total.
pub fn compare_cells(a: &Cell, b: &Cell) -> Ordering {
    if a.kind() != b.kind() {
        return a.kind().cmp(&b.kind());
    }
    let sa = a.comparable_string();
    let sb = b.comparable_string();
    sa.trim().cmp(sb.trim())
}

#[inline]
fn directed(cmp: Ordering, desc: bool) -> Ordering {
    if desc {
        cmp.reverse()
    } else {
        cmp
    }
}

/// Computes the sorted order of `rows` without moving them.
///
/// Returns row indices, first index first. Every row must carry every
/// configured binding. Ties keep their input order.
pub(crate) fn sorted_order(rows: &[Row], config: &SortConfig) -> Result<Vec<usize>> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if config.is_empty() {
        return Ok(order);
    }
    let rendered = rows
        .iter()
        .enumerate()
        .map(|(i, row)| config.render(row, i))
        .collect::<Result<Vec<_>>>()?;
    order.sort_by(|&a, &b| config.compare_rendered(&rendered[a], &rendered[b]));
    Ok(order)
}

/// Sorts `rows` in place.
///
/// Every row must carry every configured binding; the first row that does
/// not fails the call and `rows` is left as it was.
pub(crate) fn sort_rows(rows: &mut Vec<Row>, config: &SortConfig) -> Result<()> {
    if config.is_empty() {
        return Ok(());
    }
    let order = sorted_order(rows, config)?;
    let mut slots: Vec<Option<Row>> = rows.drain(..).map(Some).collect();
    rows.extend(order.into_iter().filter_map(|i| slots[i].take()));
    Ok(())
}

impl Table {
    /// Sorts the rows of the table in place.
    ///
    /// An empty configuration is a no-op. Fails with
    /// `MissingSortBindingOnRow`, leaving the table untouched, if a row
    /// lacks one of the configured bindings. Rows tied on every key may end
    /// up in any relative order.
    pub fn sort(&mut self, config: &SortConfig) -> Result<()> {
        let result = sort_rows(&mut self.rows, config);
        match &result {
            Ok(()) => tracing::debug!(rows = self.rows.len(), keys = config.len(), "table sorted"),
            Err(err) => tracing::debug!(%err, "table sort rejected"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use tabulon_core::{Literal, Node};

    fn int_row(g: i64, v: i64) -> Row {
        Row::from_cells([
            ("?g", Cell::Literal(Literal::Int64(g))),
            ("?v", Cell::Literal(Literal::Int64(v))),
        ])
    }

    fn ints(rows: &[Row], binding: &str) -> Vec<i64> {
        rows.iter()
            .map(|r| r.get(binding).and_then(|c| c.as_literal()).unwrap().to_int64().unwrap())
            .collect()
    }

    #[test]
    fn test_sort_multi_key() {
        let mut rows = vec![int_row(1, 5), int_row(2, 3), int_row(1, 2)];
        let config = SortConfig::new(vec![SortKey::asc("?g"), SortKey::asc("?v")]);
        sort_rows(&mut rows, &config).unwrap();
        assert_eq!(ints(&rows, "?g"), vec![1, 1, 2]);
        assert_eq!(ints(&rows, "?v"), vec![2, 5, 3]);
    }

    #[test]
    fn test_sort_desc() {
        let mut rows = vec![int_row(1, 5), int_row(3, 3), int_row(2, 2)];
        let config = SortConfig::new(vec![SortKey::desc("?g")]);
        sort_rows(&mut rows, &config).unwrap();
        assert_eq!(ints(&rows, "?g"), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_mixed_directions() {
        let mut rows = vec![int_row(1, 1), int_row(2, 1), int_row(1, 9), int_row(2, 4)];
        let config = SortConfig::new(vec![SortKey::asc("?g"), SortKey::desc("?v")]);
        sort_rows(&mut rows, &config).unwrap();
        assert_eq!(ints(&rows, "?g"), vec![1, 1, 2, 2]);
        assert_eq!(ints(&rows, "?v"), vec![9, 1, 4, 1]);
    }

    #[test]
    fn test_sort_numeric_by_magnitude() {
        let mut rows = vec![int_row(10, 0), int_row(9, 0), int_row(100, 0)];
        let config = SortConfig::new(vec![SortKey::asc("?g")]);
        sort_rows(&mut rows, &config).unwrap();
        assert_eq!(ints(&rows, "?g"), vec![9, 10, 100]);
    }

    #[test]
    fn test_sort_negative_numbers() {
        let mut rows: Vec<Row> = [-1, -10, 5, -2].iter().map(|g| int_row(*g, 0)).collect();
        let config = SortConfig::new(vec![SortKey::asc("?g")]);
        sort_rows(&mut rows, &config).unwrap();
        assert_eq!(ints(&rows, "?g"), vec![-10, -2, -1, 5]);

        let mut rows: Vec<Row> = [-1.5, 2.25, -30.0, 0.0]
            .iter()
            .map(|v| Row::from_cells([("?f", Cell::Literal(Literal::Float64(*v)))]))
            .collect();
        let config = SortConfig::new(vec![SortKey::desc("?f")]);
        sort_rows(&mut rows, &config).unwrap();
        let floats: Vec<f64> = rows
            .iter()
            .map(|r| r.get("?f").and_then(|c| c.as_literal()).unwrap().to_float64().unwrap())
            .collect();
        assert_eq!(floats, vec![2.25, 0.0, -1.5, -30.0]);
    }

    #[test]
    fn test_sort_trims_text() {
        let mut rows = vec![
            Row::from_cells([("?t", "  b")]),
            Row::from_cells([("?t", "a  ")]),
        ];
        let config = SortConfig::new(vec![SortKey::asc("?t")]);
        sort_rows(&mut rows, &config).unwrap();
        assert_eq!(rows[0].get("?t").unwrap().as_text(), Some("a  "));
    }

    #[test]
    fn test_sort_missing_binding_leaves_rows() {
        let mut rows = vec![int_row(2, 0), Row::from_cells([("?v", "x")]), int_row(1, 0)];
        let config = SortConfig::new(vec![SortKey::asc("?g")]);
        let err = sort_rows(&mut rows, &config).unwrap_err();
        assert_eq!(err, Error::missing_sort_binding("?g", 1));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], int_row(2, 0));
    }

    #[test]
    fn test_sort_empty_config_is_noop() {
        let mut rows = vec![int_row(2, 0), Row::from_cells([("?x", "y")])];
        sort_rows(&mut rows, &SortConfig::default()).unwrap();
        assert_eq!(rows[0], int_row(2, 0));
    }

    #[test]
    fn test_sorted_order_does_not_move_rows() {
        let rows = vec![int_row(3, 0), int_row(1, 0), int_row(2, 0)];
        let config = SortConfig::new(vec![SortKey::asc("?g")]);
        assert_eq!(sorted_order(&rows, &config).unwrap(), vec![1, 2, 0]);
        assert_eq!(ints(&rows, "?g"), vec![3, 1, 2]);
        assert_eq!(sorted_order(&rows, &SortConfig::default()).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_compare_rows() {
        let config = SortConfig::new(vec![SortKey::asc("?g"), SortKey::asc("?v")]);
        assert_eq!(config.compare_rows(&int_row(1, 1), &int_row(1, 1)), Ok(Ordering::Equal));
        assert_eq!(config.compare_rows(&int_row(1, 1), &int_row(1, 2)), Ok(Ordering::Less));
        assert_eq!(
            config.compare_rows(&int_row(1, 1), &Row::new()),
            Err(Error::missing_sort_operand("?g", "right"))
        );
        assert_eq!(
            config.compare_rows(&Row::from_cells([("?v", "x")]), &int_row(1, 1)),
            Err(Error::missing_sort_operand("?g", "left"))
        );
    }

    #[test]
    fn test_compare_cells_across_kinds() {
        let text = Cell::from("zzz");
        let node = Cell::from(Node::new("/u", "a"));
        assert_eq!(compare_cells(&text, &node), Ordering::Less);
        assert_eq!(compare_cells(&node, &text), Ordering::Greater);
        assert_eq!(compare_cells(&Cell::Null, &Cell::Null), Ordering::Equal);
    }

    #[test]
    fn test_sort_config_display() {
        let config: SortConfig = vec![SortKey::asc("?a"), SortKey::desc("?b")].into();
        assert_eq!(config.to_string(), "[ ?a->ASC ?b->DESC ]");
        assert_eq!(config.bindings().collect::<Vec<_>>(), vec!["?a", "?b"]);
    }
}
