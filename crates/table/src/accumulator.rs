//! Accumulators used by group-by reduction.
//!
//! An accumulator folds the cells of one binding across the rows of a group.
//! The reduction engine calls `reset` once before each group and then
//! `accumulate` once per row; the value returned by the last call is the
//! group's result.

use alloc::string::{String, ToString};
use core::fmt::Debug;
use hashbrown::HashSet;
use tabulon_core::{Cell, Error, Literal, Result, Value};

/// Stateful fold over the cells of a group.
pub trait Accumulator: Debug {
    /// Folds `cell` into the current state and returns the new state.
    fn accumulate(&mut self, cell: &Cell) -> Result<Value>;

    /// Restores the initial state.
    fn reset(&mut self);
}

fn literal_of<'a>(cell: &'a Cell, target: &'static str) -> Result<&'a Literal> {
    cell.as_literal()
        .ok_or_else(|| Error::not_coercible(cell.to_string(), target))
}

/// Sums integer literals.
#[derive(Clone, Debug)]
pub struct SumInt64 {
    initial: i64,
    state: i64,
}

impl SumInt64 {
    /// Creates a sum starting at `initial`.
    pub fn new(initial: i64) -> Self {
        Self {
            initial,
            state: initial,
        }
    }

    /// Returns the current sum.
    #[inline]
    pub fn get(&self) -> i64 {
        self.state
    }
}

impl Accumulator for SumInt64 {
    fn accumulate(&mut self, cell: &Cell) -> Result<Value> {
        let v = literal_of(cell, "int64")?.to_int64()?;
        self.state = self
            .state
            .checked_add(v)
            .ok_or(Error::IntegerOverflow {
                state: self.state,
                value: v,
            })?;
        Ok(Value::Int64(self.state))
    }

    fn reset(&mut self) {
        self.state = self.initial;
    }
}

/// Sums floating point literals.
#[derive(Clone, Debug)]
pub struct SumFloat64 {
    initial: f64,
    state: f64,
}

impl SumFloat64 {
    /// Creates a sum starting at `initial`.
    pub fn new(initial: f64) -> Self {
        Self {
            initial,
            state: initial,
        }
    }

    /// Returns the current sum.
    #[inline]
    pub fn get(&self) -> f64 {
        self.state
    }
}

impl Accumulator for SumFloat64 {
    fn accumulate(&mut self, cell: &Cell) -> Result<Value> {
        let v = literal_of(cell, "float64")?.to_float64()?;
        self.state += v;
        Ok(Value::Float64(self.state))
    }

    fn reset(&mut self) {
        self.state = self.initial;
    }
}

/// Counts accumulated cells, whatever they hold.
#[derive(Clone, Debug, Default)]
pub struct Count {
    count: i64,
}

impl Count {
    /// Creates a count starting at 0.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Returns the current count.
    #[inline]
    pub fn get(&self) -> i64 {
        self.count
    }
}

impl Accumulator for Count {
    fn accumulate(&mut self, _cell: &Cell) -> Result<Value> {
        self.count += 1;
        Ok(Value::Int64(self.count))
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}

/// Counts distinct cells, keyed by their rendering.
///
/// Keeps every distinct rendering seen since the last reset, so memory grows
/// with the number of distinct values in a group.
#[derive(Clone, Debug, Default)]
pub struct CountDistinct {
    seen: HashSet<String>,
}

impl CountDistinct {
    /// Creates an empty distinct count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct values seen.
    #[inline]
    pub fn get(&self) -> i64 {
        self.seen.len() as i64
    }
}

impl Accumulator for CountDistinct {
    fn accumulate(&mut self, cell: &Cell) -> Result<Value> {
        self.seen.insert(cell.to_string());
        Ok(Value::Int64(self.get()))
    }

    fn reset(&mut self) {
        self.seen.clear();
    }
}
