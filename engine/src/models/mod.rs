//! Domain types shared across the engine
//!
//! - `MacroState`: one-period snapshot of the modeled economy
//! - `ValidationError`: structural invariant violations on inputs
//!
//! All input validation happens before any computation starts: a call
//! either produces a complete result or fails here, never a partial one.

pub mod state;

pub use state::MacroState;

use thiserror::Error;

/// Errors raised when an input violates a structural invariant.
///
/// Every variant carries enough payload to reconstruct what was rejected.
/// Validation is deterministic: the same input always produces the same
/// error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field is NaN or infinite
    #[error("field '{field}' is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A numeric field is outside its allowed range
    #[error("field '{field}' out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A field that must be strictly positive is zero or negative
    #[error("field '{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// An exposure matrix row has the wrong length
    #[error("exposure matrix row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An exposure matrix entry is negative or non-finite
    #[error("exposure [{row}][{col}] is invalid: {value}")]
    InvalidExposure { row: usize, col: usize, value: f64 },

    /// A node index addresses a node the graph does not have
    #[error("node index {index} out of bounds for graph of {node_count} institutions")]
    NodeOutOfBounds { index: usize, node_count: usize },
}

/// Check that `value` is finite, returning a `NonFinite` error otherwise.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

/// Check that `value` lies in `[min, max]` (and is finite).
pub(crate) fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check that `value` is strictly positive (and finite).
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}
