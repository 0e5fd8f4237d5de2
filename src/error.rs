//! Error type shared by every fallible operation in the crate.

/// Errors raised while configuring, seeding or stepping the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// Construction parameters were rejected (zero dimensions, zero interval,
    /// unparsable environment override).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the parameters.
        reason: String,
    },

    /// A text pattern could not be turned into a grid.
    #[error("bad pattern at line {line}: {reason}")]
    Pattern {
        /// 1-based line of the offending row.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// A mutation map was applied to a grid of different dimensions.
    #[error("mutation map is {found:?} but the grid is {expected:?}")]
    MapMismatch {
        /// `(rows, cols)` of the grid.
        expected: (usize, usize),
        /// `(rows, cols)` of the map.
        found: (usize, usize),
    },
}

impl LifeError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
