//! Entry points: validate, reduce, classify, build the solution space
//!
//! Inputs are never mutated. The augmented matrix `[A|b]` is assembled into
//! a fresh working copy that the row reducer owns.

use crate::config::GaussConfig;
use crate::error::{GaussError, Result};
use crate::rank::{Classification, classify};
use crate::reduce::row_reduce;
use crate::solution::SolutionSpace;
use crate::traits::RealField;
use ndarray::{Array1, Array2, s};

/// Result of a solve: either no solution or the full solution family.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<T: RealField> {
    /// The system is inconsistent.
    NoSolution,
    /// The system is consistent; every solution is described by the space.
    Space(SolutionSpace<T>),
}

impl<T: RealField> Solution<T> {
    /// True when at least one solution exists
    pub fn is_solvable(&self) -> bool {
        matches!(self, Solution::Space(_))
    }

    /// Borrow the solution space, if any
    pub fn space(&self) -> Option<&SolutionSpace<T>> {
        match self {
            Solution::Space(space) => Some(space),
            Solution::NoSolution => None,
        }
    }

    /// Take the solution space, if any
    pub fn into_space(self) -> Option<SolutionSpace<T>> {
        match self {
            Solution::Space(space) => Some(space),
            Solution::NoSolution => None,
        }
    }

    /// Take the solution space of a system known to be consistent.
    ///
    /// # Panics
    ///
    /// Panics on [`Solution::NoSolution`].
    pub fn unwrap_space(self) -> SolutionSpace<T> {
        match self {
            Solution::Space(space) => space,
            Solution::NoSolution => {
                panic!("called `Solution::unwrap_space()` on an inconsistent system")
            }
        }
    }
}

/// Solve `A·x = b` with the default tolerances.
///
/// # Example
///
/// ```
/// use math_audio_gauss::solve;
/// use ndarray::array;
///
/// let a = array![[2.0_f64, 0.0], [0.0, 2.0]];
/// let b = array![4.0_f64, 6.0];
/// let space = solve(&a, &b).unwrap().unwrap_space();
/// assert!(space.is_unique());
/// assert_eq!(space.particular_solution(), &array![2.0, 3.0]);
/// ```
pub fn solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Solution<T>> {
    solve_with_config(a, b, &GaussConfig::default())
}

/// Solve `A·x = b` with explicit tolerances.
///
/// `A` must have at least one row and one column and `b` one entry per row
/// of `A`. Entries must be finite.
pub fn solve_with_config<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussConfig,
) -> Result<Solution<T>> {
    let (n, k) = a.dim();
    if n == 0 || k == 0 {
        return Err(GaussError::EmptyMatrix { rows: n, cols: k });
    }
    if b.len() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let mut augmented = Array2::from_elem((n, k + 1), T::zero());
    augmented.slice_mut(s![.., ..k]).assign(a);
    augmented.column_mut(k).assign(b);

    solve_owned(augmented, config)
}

/// Solve a system given as an augmented matrix `[A|b]`.
///
/// The last column is the right-hand side. At least one row and two columns
/// are required. The input is copied before reduction.
pub fn solve_augmented<T: RealField>(
    augmented: &Array2<T>,
    config: &GaussConfig,
) -> Result<Solution<T>> {
    let (n, m) = augmented.dim();
    if n == 0 || m < 2 {
        return Err(GaussError::EmptyMatrix {
            rows: n,
            cols: m.saturating_sub(1),
        });
    }
    solve_owned(augmented.clone(), config)
}

fn check_finite<T: RealField>(augmented: &Array2<T>) -> Result<()> {
    match augmented.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), _)) => Err(GaussError::NonFiniteEntry { row, col }),
        None => Ok(()),
    }
}

fn solve_owned<T: RealField>(mut augmented: Array2<T>, config: &GaussConfig) -> Result<Solution<T>> {
    config.validate()?;
    check_finite(&augmented)?;

    let pivot_tolerance = T::from_tolerance(config.pivot_tolerance);
    let consistency_tolerance = T::from_tolerance(config.consistency_tolerance);

    let pivots = row_reduce(&mut augmented, pivot_tolerance);
    match classify(&augmented, &pivots, consistency_tolerance) {
        Classification::Inconsistent { row, residual } => {
            log::debug!(
                "system is inconsistent: reduced row {} has right-hand side {:e}",
                row,
                residual
            );
            Ok(Solution::NoSolution)
        }
        classification => {
            log::debug!("system is solvable: {:?}", classification);
            Ok(Solution::Space(SolutionSpace::from_reduced(
                &augmented, &pivots,
            )))
        }
    }
}
