//! Error types for tabulon table operations.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Result type alias for tabulon operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for result-table operations.
///
/// Every failing operation returns one of these before touching the table,
/// so a caller that receives an error still holds the table it passed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Table construction with repeated binding names.
    DuplicateBinding {
        bindings: Vec<String>,
    },
    /// Projection onto a binding the table does not carry.
    UnknownBindingProjection {
        binding: String,
        known: Vec<String>,
    },
    /// Appending a table whose bindings differ from the receiver's.
    BindingSetMismatch {
        current: Vec<String>,
        other: Vec<String>,
    },
    /// Cross product of tables sharing at least one binding.
    NonDisjointBindings {
        shared: Vec<String>,
    },
    /// Row access or deletion outside `[0, len)`.
    RowIndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// Group construction produced an empty `[start, end)` range.
    EmptyAggregationRange {
        start: usize,
        end: usize,
    },
    /// A table binding has no alias/accumulator pair in a reduction.
    MissingAccumulatorAlias {
        binding: String,
    },
    /// The reduction pairs do not cover the table bindings exactly once.
    ReductionBindingCoverageMismatch {
        message: String,
    },
    /// An accumulator produced something other than an integer or a double.
    UnsupportedAccumulatorResultType {
        binding: String,
        got: String,
    },
    /// A reduced group produced an empty row.
    EmptyReducedRow {
        start: usize,
        end: usize,
    },
    /// A table row lacks a binding named by the active sort configuration.
    /// `row` is the row's index in the table.
    MissingSortBindingOnRow {
        binding: String,
        row: usize,
    },
    /// One of two rows compared directly lacks a sort binding. `side` is
    /// `"left"` or `"right"`.
    MissingSortBindingOnOperand {
        binding: String,
        side: &'static str,
    },
    /// `limit` called with a negative row count.
    NegativeLimit {
        limit: i64,
    },
    /// A value could not be coerced into the requested numeric type.
    NotCoercible {
        value: String,
        target: &'static str,
    },
    /// An integer sum left the `i64` range.
    IntegerOverflow {
        state: i64,
        value: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateBinding { bindings } => {
                write!(f, "Duplicated bindings are not allowed: {:?}", bindings)
            }
            Error::UnknownBindingProjection { binding, known } => {
                write!(
                    f,
                    "Cannot project against unknown binding {}; known bindings are {:?}",
                    binding, known
                )
            }
            Error::BindingSetMismatch { current, other } => {
                write!(
                    f,
                    "Can only append to an empty or equally bound table; got {:?} and {:?}",
                    current, other
                )
            }
            Error::NonDisjointBindings { shared } => {
                write!(f, "Dot product requires disjoint bindings; shared {:?}", shared)
            }
            Error::RowIndexOutOfRange { index, len } => {
                write!(f, "Row {} out of range for a table with {} rows", index, len)
            }
            Error::EmptyAggregationRange { start, end } => {
                write!(f, "Cannot aggregate empty range [{}, {})", start, end)
            }
            Error::MissingAccumulatorAlias { binding } => {
                write!(f, "Reduce missing binding alias for {}", binding)
            }
            Error::ReductionBindingCoverageMismatch { message } => {
                write!(f, "Invalid reduce configuration: {}", message)
            }
            Error::UnsupportedAccumulatorResultType { binding, got } => {
                write!(
                    f,
                    "Aggregation of binding {} returned unsupported value {}",
                    binding, got
                )
            }
            Error::EmptyReducedRow { start, end } => {
                write!(f, "Reducing range [{}, {}) returned an empty row", start, end)
            }
            Error::MissingSortBindingOnRow { binding, row } => {
                write!(f, "Row {} does not carry sort binding {}", row, binding)
            }
            Error::MissingSortBindingOnOperand { binding, side } => {
                write!(f, "The {} row does not carry sort binding {}", side, binding)
            }
            Error::NegativeLimit { limit } => {
                write!(f, "Limit must not be negative, got {}", limit)
            }
            Error::NotCoercible { value, target } => {
                write!(f, "Cannot coerce {} into {}", value, target)
            }
            Error::IntegerOverflow { state, value } => {
                write!(f, "Integer overflow adding {} to {}", value, state)
            }
        }
    }
}

impl Error {
    /// Creates a duplicate binding error.
    pub fn duplicate_binding(bindings: &[String]) -> Self {
        Error::DuplicateBinding {
            bindings: bindings.to_vec(),
        }
    }

    /// Creates an unknown binding projection error.
    pub fn unknown_binding_projection(binding: impl Into<String>, known: &[String]) -> Self {
        Error::UnknownBindingProjection {
            binding: binding.into(),
            known: known.to_vec(),
        }
    }

    /// Creates a binding set mismatch error.
    pub fn binding_set_mismatch(current: &[String], other: &[String]) -> Self {
        Error::BindingSetMismatch {
            current: current.to_vec(),
            other: other.to_vec(),
        }
    }

    /// Creates a row index out of range error.
    pub fn row_index_out_of_range(index: usize, len: usize) -> Self {
        Error::RowIndexOutOfRange { index, len }
    }

    /// Creates a missing accumulator alias error.
    pub fn missing_accumulator_alias(binding: impl Into<String>) -> Self {
        Error::MissingAccumulatorAlias {
            binding: binding.into(),
        }
    }

    /// Creates a reduction coverage error.
    pub fn reduction_coverage(message: impl Into<String>) -> Self {
        Error::ReductionBindingCoverageMismatch {
            message: message.into(),
        }
    }

    /// Creates a missing sort binding error.
    pub fn missing_sort_binding(binding: impl Into<String>, row: usize) -> Self {
        Error::MissingSortBindingOnRow {
            binding: binding.into(),
            row,
        }
    }

    /// Creates a missing sort binding error for a directly compared row.
    pub fn missing_sort_operand(binding: impl Into<String>, side: &'static str) -> Self {
        Error::MissingSortBindingOnOperand {
            binding: binding.into(),
            side,
        }
    }

    /// Creates a coercion error.
    pub fn not_coercible(value: impl Into<String>, target: &'static str) -> Self {
        Error::NotCoercible {
            value: value.into(),
            target,
        }
    }
}
