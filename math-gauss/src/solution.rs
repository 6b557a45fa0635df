//! Parametrized solution set of a consistent linear system
//!
//! A [`SolutionSpace`] describes every `x` with `A·x = b` as
//!
//! ```text
//! x[bound] = particular[bound] - basis[bound, :] · c
//! x[free]  = c
//! ```
//!
//! where `c` holds one value per free unknown, in left-to-right column order.
//! Rows of `basis` that belong to free unknowns hold `-e_f`, so
//! `x = particular - basis · c` also holds for the full vector and the
//! columns of `-basis` span the null space of `A`.

use crate::blas_helpers::dot;
use crate::error::{GaussError, Result};
use crate::parallel::parallel_map_indexed;
use crate::reduce::{PivotInfo, PivotMask};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Immutable description of the solution family of `A·x = b`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionSpace<T: RealField> {
    particular: Array1<T>,
    basis: Option<Array2<T>>,
    free_mask: Option<PivotMask>,
    degrees_of_freedom: usize,
    rank: usize,
}

impl<T: RealField> SolutionSpace<T> {
    /// Build the space from a consistent matrix in reduced row-echelon form.
    pub(crate) fn from_reduced(reduced: &Array2<T>, pivots: &PivotInfo) -> Self {
        let unknowns = pivots.mask.len();
        let rhs = reduced.ncols() - 1;

        let particular = Array1::from_iter(
            pivots
                .pivot_rows
                .iter()
                .map(|r| r.map_or(T::zero(), |row| reduced[[row, rhs]])),
        );

        let degrees_of_freedom = pivots.mask.free_count();
        if degrees_of_freedom == 0 {
            return Self {
                particular,
                basis: None,
                free_mask: None,
                degrees_of_freedom,
                rank: pivots.rank,
            };
        }

        let free_cols = pivots.mask.free_indices();
        let mut basis = Array2::from_elem((unknowns, degrees_of_freedom), T::zero());
        let mut next_free = 0;
        for (j, pivot_row) in pivots.pivot_rows.iter().enumerate() {
            match pivot_row {
                Some(row) => {
                    for (f, &col) in free_cols.iter().enumerate() {
                        basis[[j, f]] = reduced[[*row, col]];
                    }
                }
                None => {
                    basis[[j, next_free]] = -T::one();
                    next_free += 1;
                }
            }
        }

        Self {
            particular,
            basis: Some(basis),
            free_mask: Some(pivots.mask.clone()),
            degrees_of_freedom,
            rank: pivots.rank,
        }
    }

    /// True when the system has exactly one solution
    pub fn is_unique(&self) -> bool {
        self.degrees_of_freedom == 0
    }

    /// Number of free unknowns (0 iff unique)
    pub fn degrees_of_freedom(&self) -> usize {
        self.degrees_of_freedom
    }

    /// Rank of the coefficient matrix
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of unknowns
    pub fn num_unknowns(&self) -> usize {
        self.particular.len()
    }

    /// Free/bound mask (`true` = free), `None` for a unique solution
    pub fn free_variable_mask(&self) -> Option<&PivotMask> {
        self.free_mask.as_ref()
    }

    /// Solution obtained with every free unknown set to zero
    pub fn particular_solution(&self) -> &Array1<T> {
        &self.particular
    }

    /// `(unknowns, degrees_of_freedom)` basis, `None` for a unique solution
    pub fn basis_matrix(&self) -> Option<&Array2<T>> {
        self.basis.as_ref()
    }

    /// Columns spanning the null space of `A` (fundamental solution system).
    ///
    /// Column `f` is the change in `x` when free coefficient `f` grows by one.
    pub fn null_space(&self) -> Option<Array2<T>> {
        self.basis.as_ref().map(|b| b.mapv(|v| -v))
    }

    /// Evaluate the solution for the given free-variable coefficients.
    ///
    /// For a unique solution the coefficients are ignored and the stored
    /// solution is returned. Otherwise exactly `degrees_of_freedom()` values
    /// are required, one per free unknown from left to right.
    pub fn evaluate(&self, coefficients: &Array1<T>) -> Result<Array1<T>> {
        let (basis, mask) = match (&self.basis, &self.free_mask) {
            (Some(basis), Some(mask)) => (basis, mask),
            _ => return Ok(self.particular.clone()),
        };

        if coefficients.len() != self.degrees_of_freedom {
            return Err(GaussError::CoefficientCountMismatch {
                expected: self.degrees_of_freedom,
                got: coefficients.len(),
            });
        }

        let mut x = Array1::from_elem(self.num_unknowns(), T::zero());
        let mut next_free = 0;
        for j in 0..x.len() {
            if mask.is_free(j) {
                x[j] = coefficients[next_free];
                next_free += 1;
            } else {
                x[j] = self.particular[j] - dot(basis.row(j), coefficients.view());
            }
        }
        Ok(x)
    }

    /// Evaluate every row of `coefficients` as a separate coefficient vector.
    ///
    /// Row `i` of the result is `evaluate(coefficients.row(i))`. Rows are
    /// processed in parallel when the `parallel` feature is enabled.
    pub fn evaluate_batch(&self, coefficients: &Array2<T>) -> Result<Array2<T>> {
        if !self.is_unique() && coefficients.ncols() != self.degrees_of_freedom {
            return Err(GaussError::CoefficientCountMismatch {
                expected: self.degrees_of_freedom,
                got: coefficients.ncols(),
            });
        }

        let rows = parallel_map_indexed(coefficients.nrows(), |i| {
            self.evaluate(&coefficients.row(i).to_owned())
        })
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

        Ok(Array2::from_shape_fn(
            (rows.len(), self.num_unknowns()),
            |(i, j)| rows[i][j],
        ))
    }
}
