//! Gauss-Jordan row reduction
//!
//! Reduces an augmented matrix `[A|b]` to reduced row-echelon form with
//! partial pivoting. Every pivot is scaled to one and is the only nonzero
//! entry of its column, above and below.

use crate::traits::RealField;
use ndarray::Array2;

/// Free/bound classification of the unknowns.
///
/// Entry `j` is `true` when unknown `j` is free (no pivot in its column) and
/// `false` when it is bound to a pivot row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotMask {
    free: Vec<bool>,
}

impl PivotMask {
    /// Mask with every one of `unknowns` columns marked free.
    pub fn all_free(unknowns: usize) -> Self {
        Self {
            free: vec![true; unknowns],
        }
    }

    pub(crate) fn mark_bound(&mut self, col: usize) {
        self.free[col] = false;
    }

    /// Number of unknowns covered by the mask
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// True when the system has no unknowns
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Whether unknown `col` is free
    pub fn is_free(&self, col: usize) -> bool {
        self.free[col]
    }

    /// Number of free unknowns (degrees of freedom)
    pub fn free_count(&self) -> usize {
        self.free.iter().filter(|&&f| f).count()
    }

    /// Number of bound unknowns (rank)
    pub fn bound_count(&self) -> usize {
        self.len() - self.free_count()
    }

    /// Free column indices, left to right
    pub fn free_indices(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Bound column indices, left to right
    pub fn bound_indices(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    /// Raw mask, `true` = free
    pub fn as_slice(&self) -> &[bool] {
        &self.free
    }

    fn indices_where(&self, free: bool) -> Vec<usize> {
        self.free
            .iter()
            .enumerate()
            .filter_map(|(j, &f)| (f == free).then_some(j))
            .collect()
    }
}

/// Outcome of [`row_reduce`] besides the reduced matrix itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotInfo {
    /// Final row pointer: number of pivots found
    pub rank: usize,
    /// Free/bound classification of the unknowns
    pub mask: PivotMask,
    /// For each unknown, the row holding its pivot (`None` when free)
    pub pivot_rows: Vec<Option<usize>>,
}

/// Index of the row in `start_row..nrows` with the largest |entry| in `col`.
///
/// Ties go to the earliest row so the reduction is reproducible.
pub fn select_pivot_row<T: RealField>(matrix: &Array2<T>, start_row: usize, col: usize) -> usize {
    let mut max_val = matrix[[start_row, col]].magnitude();
    let mut max_row = start_row;

    for i in (start_row + 1)..matrix.nrows() {
        let val = matrix[[i, col]].magnitude();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }

    max_row
}

fn swap_rows<T: RealField>(matrix: &mut Array2<T>, a: usize, b: usize) {
    for j in 0..matrix.ncols() {
        matrix.swap([a, j], [b, j]);
    }
}

/// Reduce the augmented matrix in place to reduced row-echelon form.
///
/// The last column is the right-hand side and is never used as a pivot
/// column. Columns whose best remaining candidate is smaller than
/// `pivot_tolerance` are left free. Rows at index `>= rank` keep whatever
/// residual values elimination left in them.
pub fn row_reduce<T: RealField>(augmented: &mut Array2<T>, pivot_tolerance: T) -> PivotInfo {
    let n = augmented.nrows();
    let m = augmented.ncols();
    let unknowns = m.saturating_sub(1);

    let mut mask = PivotMask::all_free(unknowns);
    let mut pivot_rows = vec![None; unknowns];
    let mut row = 0;

    for col in 0..unknowns {
        if row >= n {
            break;
        }

        let max_row = select_pivot_row(augmented, row, col);
        if max_row != row {
            swap_rows(augmented, row, max_row);
        }

        let pivot = augmented[[row, col]];
        if pivot.is_negligible(pivot_tolerance) {
            log::trace!(
                "column {} is free: best pivot {:e} below tolerance",
                col,
                pivot
            );
            continue;
        }

        for j in 0..m {
            augmented[[row, j]] /= pivot;
        }
        augmented[[row, col]] = T::one();

        // Eliminate above and below
        for i in 0..n {
            if i == row {
                continue;
            }
            let factor = augmented[[i, col]];
            if factor == T::zero() {
                continue;
            }
            for j in 0..m {
                let update = factor * augmented[[row, j]];
                augmented[[i, j]] -= update;
            }
            augmented[[i, col]] = T::zero();
        }

        log::trace!("column {} bound to row {} (pivot {:e})", col, row, pivot);
        mask.mark_bound(col);
        pivot_rows[col] = Some(row);
        row += 1;
    }

    log::debug!(
        "row reduction of {}x{} augmented system: rank {}, {} free unknowns",
        n,
        m,
        row,
        mask.free_count()
    );

    PivotInfo {
        rank: row,
        mask,
        pivot_rows,
    }
}
