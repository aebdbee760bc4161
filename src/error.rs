//! Error types shared by every solver.
//!
//! All failures are detected before any table is filled, except for
//! [`KnapsackError::Overflow`], which can only surface while values are being
//! accumulated.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;

/// Failure of a single solve call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// The call was rejected up front; no work was performed.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// Summing item values exceeded the range of `i64`.
    #[error("value overflow while taking item {item} at capacity {capacity}")]
    Overflow { item: usize, capacity: usize },

    /// The DP table for this call cannot be sized or allocated.
    #[error("dp table of {rows} x {cols} cells cannot be allocated")]
    TableTooLarge { rows: usize, cols: usize },
}

/// Reasons a solve call is rejected before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("capacity {0} is negative")]
    NegativeCapacity(i64),

    #[error("item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },
}

impl KnapsackError {
    /// True for every variant raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, KnapsackError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = KnapsackError::from(InvalidArgument::NegativeCapacity(-3));
        assert_eq!(err.to_string(), "invalid argument: capacity -3 is negative");
        assert!(err.is_invalid_argument());

        let err = KnapsackError::from(InvalidArgument::NegativeWeight {
            index: 2,
            weight: -1,
        });
        assert_eq!(
            err.to_string(),
            "invalid argument: item 2 has negative weight -1"
        );
    }

    #[test]
    fn table_too_large_names_dimensions() {
        let err = KnapsackError::TableTooLarge { rows: 2, cols: 9 };
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "dp table of 2 x 9 cells cannot be allocated"
        );
    }

    #[test]
    fn overflow_is_not_an_argument_error() {
        let err = KnapsackError::Overflow {
            item: 0,
            capacity: 7,
        };
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "value overflow while taking item 0 at capacity 7"
        );
    }
}
