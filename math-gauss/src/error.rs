//! Error types for the Gauss-Jordan solver.
//!
//! Every variant describes malformed input or configuration. An inconsistent
//! system is not an error: it is reported as [`crate::Solution::NoSolution`].

use thiserror::Error;

/// Errors that can occur while setting up or evaluating a linear system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaussError {
    /// The coefficient matrix has no rows or no unknowns.
    #[error("empty system: {rows} rows and {cols} unknowns (both must be >= 1)")]
    EmptyMatrix {
        /// Number of equations
        rows: usize,
        /// Number of unknowns
        cols: usize,
    },

    /// The right-hand side length does not match the number of equations.
    #[error("right-hand side dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Number of rows of the coefficient matrix
        expected: usize,
        /// Length of the right-hand side
        got: usize,
    },

    /// `evaluate` received the wrong number of free-variable coefficients.
    #[error("coefficient count mismatch: expected {expected} free-variable values, got {got}")]
    CoefficientCountMismatch {
        /// Degrees of freedom of the solution space
        expected: usize,
        /// Number of coefficients supplied
        got: usize,
    },

    /// An entry of the augmented system is NaN or infinite.
    #[error("non-finite entry at row {row}, column {col}")]
    NonFiniteEntry {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry (the last column is the right-hand side)
        col: usize,
    },

    /// A tolerance is not a finite, strictly positive number.
    #[error("invalid {name}: {value} (must be finite and > 0)")]
    InvalidTolerance {
        /// Name of the tolerance field
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, GaussError>;

impl GaussError {
    /// Returns `true` if the error comes from malformed input data.
    ///
    /// This covers shape problems, wrong coefficient counts and non-finite
    /// entries.
    pub fn is_input_error(&self) -> bool {
        !self.is_config_error()
    }

    /// Returns `true` if this is a shape-related error.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            GaussError::EmptyMatrix { .. }
                | GaussError::DimensionMismatch { .. }
                | GaussError::CoefficientCountMismatch { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, GaussError::InvalidTolerance { .. })
    }
}
