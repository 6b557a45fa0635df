//! Consistency and rank analysis of a reduced system

use crate::reduce::PivotInfo;
use crate::traits::RealField;
use ndarray::Array2;

/// What a reduced augmented system says about its solutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<T> {
    /// A row without pivot still carries a right-hand side value.
    Inconsistent {
        /// First offending row of the reduced matrix
        row: usize,
        /// Its right-hand side value
        residual: T,
    },
    /// Every unknown is bound.
    Unique,
    /// Consistent with at least one free unknown.
    Underdetermined {
        /// Number of free unknowns
        degrees_of_freedom: usize,
    },
}

impl<T> Classification<T> {
    /// True unless the system is inconsistent
    pub fn is_solvable(&self) -> bool {
        !matches!(self, Classification::Inconsistent { .. })
    }

    /// Degrees of freedom, `None` for an inconsistent system
    pub fn degrees_of_freedom(&self) -> Option<usize> {
        match self {
            Classification::Inconsistent { .. } => None,
            Classification::Unique => Some(0),
            Classification::Underdetermined { degrees_of_freedom } => Some(*degrees_of_freedom),
        }
    }
}

/// Classify a matrix produced by [`crate::row_reduce`].
///
/// Rows at or after `pivots.rank` have zero coefficients (up to the pivot
/// tolerance), so any right-hand side entry there with magnitude
/// `>= consistency_tolerance` makes the system unsolvable.
pub fn classify<T: RealField>(
    reduced: &Array2<T>,
    pivots: &PivotInfo,
    consistency_tolerance: T,
) -> Classification<T> {
    let n = reduced.nrows();
    if let Some(rhs) = reduced.ncols().checked_sub(1) {
        for row in pivots.rank..n {
            let residual = reduced[[row, rhs]];
            if residual.magnitude() >= consistency_tolerance {
                return Classification::Inconsistent { row, residual };
            }
        }
    }

    match pivots.mask.free_count() {
        0 => Classification::Unique,
        degrees_of_freedom => Classification::Underdetermined { degrees_of_freedom },
    }
}
