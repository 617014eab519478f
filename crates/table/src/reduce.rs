//! Group-by reduction.
//!
//! Reduction sorts the table by a `SortConfig`, splits the sorted rows into
//! contiguous groups sharing the same group key, and folds every group into
//! a single row through the accumulators of an `AliasAccPair` list.
//!
//! The group key of a row is the concatenated rendering of its sort-key
//! cells. Two key tuples whose renderings concatenate to the same string
//! (e.g. `("ab", "c")` and `("a", "bc")`) therefore fall into the same group
//! when they end up adjacent.

use crate::accumulator::Accumulator;
use crate::bindings::BindingDirectory;
use crate::sort::{sorted_order, SortConfig};
use crate::table::Table;
use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;
use hashbrown::HashSet;
use tabulon_core::{Cell, Error, Result, Row, Value};

/// Cell fed to accumulators for rows that lack the input binding.
static MISSING: Cell = Cell::Null;

/// Maps an input binding to an output binding, optionally through an
/// accumulator.
///
/// Without an accumulator the output takes the cell of the group's first
/// row; with one it takes the accumulator's final value.
#[derive(Debug)]
pub struct AliasAccPair {
    /// Binding read from the input rows.
    pub in_alias: String,
    /// Binding written to the reduced rows.
    pub out_alias: String,
    /// Accumulator folding the group, if any.
    pub acc: Option<Box<dyn Accumulator>>,
}

impl AliasAccPair {
    /// Creates a pair.
    pub fn new(
        in_alias: impl Into<String>,
        out_alias: impl Into<String>,
        acc: Option<Box<dyn Accumulator>>,
    ) -> Self {
        Self {
            in_alias: in_alias.into(),
            out_alias: out_alias.into(),
            acc,
        }
    }

    /// Creates a pair that copies the first cell of each group.
    pub fn keep(in_alias: impl Into<String>, out_alias: impl Into<String>) -> Self {
        Self::new(in_alias, out_alias, None)
    }

    /// Creates a pair that folds each group through `acc`.
    pub fn aggregate<A>(in_alias: impl Into<String>, out_alias: impl Into<String>, acc: A) -> Self
    where
        A: Accumulator + 'static,
    {
        Self::new(in_alias, out_alias, Some(Box::new(acc)))
    }
}

/// Renders the group key of `row`.
fn group_key(row: &Row, config: &SortConfig) -> String {
    let mut key = String::new();
    for binding in config.bindings() {
        let cell = row.get(binding).unwrap_or(&MISSING);
        let _ = write!(key, "{}", cell);
    }
    key
}

/// Folds `rows[start..end]` into a single row.
fn reduce_range(
    rows: &[&Row],
    start: usize,
    end: usize,
    pairs: &mut [AliasAccPair],
) -> Result<Row> {
    if start >= end {
        return Err(Error::EmptyAggregationRange { start, end });
    }
    let group = &rows[start..end];

    for pair in pairs.iter_mut() {
        if let Some(acc) = pair.acc.as_mut() {
            acc.reset();
        }
    }

    let mut results: Vec<Option<Value>> = vec![None; pairs.len()];
    for row in group {
        for (pair, result) in pairs.iter_mut().zip(results.iter_mut()) {
            if let Some(acc) = pair.acc.as_mut() {
                let cell = row.get(&pair.in_alias).unwrap_or(&MISSING);
                *result = Some(acc.accumulate(cell)?);
            }
        }
    }

    let first = group[0];
    let mut reduced = Row::new();
    for (pair, result) in pairs.iter().zip(results) {
        match result {
            Some(value) => {
                let cell = value.into_numeric_cell().map_err(|got| {
                    Error::UnsupportedAccumulatorResultType {
                        binding: pair.in_alias.clone(),
                        got: got.to_string(),
                    }
                })?;
                reduced.insert(pair.out_alias.as_str(), cell);
            }
            None => {
                if let Some(cell) = first.get_shared(&pair.in_alias) {
                    reduced.insert_shared(pair.out_alias.as_str(), Rc::clone(cell));
                }
            }
        }
    }

    if reduced.is_empty() {
        return Err(Error::EmptyReducedRow { start, end });
    }
    Ok(reduced)
}

impl Table {
    /// Checks that `pairs` cover the current bindings exactly.
    fn validate_reduction(&self, pairs: &[AliasAccPair]) -> Result<()> {
        let inputs: HashSet<&str> = pairs.iter().map(|p| p.in_alias.as_str()).collect();
        if inputs.len() != self.directory.len() {
            return Err(Error::reduction_coverage(format!(
                "cannot project bindings; current {:?}, requested inputs {:?}",
                self.bindings(),
                pairs.iter().map(|p| p.in_alias.as_str()).collect::<Vec<_>>()
            )));
        }
        if let Some(missing) = self.bindings().iter().find(|b| !inputs.contains(b.as_str())) {
            return Err(Error::missing_accumulator_alias(missing.as_str()));
        }
        if let Some(unknown) = pairs.iter().find(|p| !self.has_binding(&p.in_alias)) {
            return Err(Error::reduction_coverage(format!(
                "unknown reducer binding {}; available bindings {:?}",
                unknown.in_alias,
                self.bindings()
            )));
        }
        Ok(())
    }

    /// Groups and reduces the table.
    ///
    /// The table is sorted by `config`, split into contiguous runs with the
    /// same group key, and each run becomes one row built from `pairs`. The
    /// bindings become the pairs' output aliases, in pair order. Every current
    /// binding must be the input of at least one pair and every pair input
    /// must be bound.
    ///
    /// Rows are only replaced once every group has been reduced, so a failing
    /// call leaves the table as it was. An empty table is left as is, and an
    /// empty `config` reduces all rows into one group.
    pub fn reduce(&mut self, config: &SortConfig, pairs: &mut [AliasAccPair]) -> Result<()> {
        if let Err(err) = self.validate_reduction(pairs) {
            tracing::debug!(%err, %config, "reduce rejected");
            return Err(err);
        }
        if self.rows.is_empty() {
            return Ok(());
        }

        let order = sorted_order(&self.rows, config)?;
        let sorted: Vec<&Row> = order.iter().map(|&i| &self.rows[i]).collect();
        let keys: Vec<String> = sorted.iter().map(|row| group_key(row, config)).collect();

        let mut reduced = Vec::new();
        let mut start = 0;
        for idx in 1..=sorted.len() {
            if idx < sorted.len() && keys[idx] == keys[start] {
                continue;
            }
            tracing::trace!(start, end = idx, key = %keys[start], "reducing group");
            reduced.push(reduce_range(&sorted, start, idx, pairs)?);
            start = idx;
        }

        let mut directory = BindingDirectory::new();
        directory.add(pairs.iter().map(|p| p.out_alias.as_str()));

        tracing::debug!(
            rows_in = self.rows.len(),
            groups = reduced.len(),
            bindings = directory.len(),
            %config,
            "table reduced"
        );
        self.directory = directory;
        self.rows = reduced;
        Ok(())
    }
}
