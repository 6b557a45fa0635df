//! Small dense kernels
//!
//! Generic matrix-vector and norm helpers over [`RealField`]. They are used to
//! verify solutions (residuals) and by the solution space to combine the
//! basis with free-variable coefficients.

use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Compute y = A * x
#[inline]
pub fn mat_vec<T: RealField>(a: ArrayView2<T>, x: ArrayView1<T>) -> Array1<T> {
    assert_eq!(
        a.ncols(),
        x.len(),
        "Matrix columns must match vector length for mat-vec"
    );
    let mut y = Array1::from_elem(a.nrows(), T::zero());
    for (row, yi) in a.outer_iter().zip(y.iter_mut()) {
        *yi = dot(row, x);
    }
    y
}

/// Compute the dot product Σ x_i * y_i
#[inline]
pub fn dot<T: RealField>(x: ArrayView1<T>, y: ArrayView1<T>) -> T {
    assert_eq!(x.len(), y.len(), "Vector lengths must match for dot product");
    let mut sum = T::zero();
    for (xi, yi) in x.iter().zip(y.iter()) {
        sum += *xi * *yi;
    }
    sum
}

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<T: RealField>(x: ArrayView1<T>) -> T {
    let mut sum = T::zero();
    for xi in x.iter() {
        sum += *xi * *xi;
    }
    sum.sqrt()
}

/// Largest entry of |A * x - b|
///
/// Returns zero for empty systems.
pub fn max_abs_residual<T: RealField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> T {
    assert_eq!(a.nrows(), b.len(), "Matrix rows must match right-hand side");
    let ax = mat_vec(a.view(), x.view());
    ax.iter()
        .zip(b.iter())
        .map(|(l, r)| (*l - *r).magnitude())
        .fold(T::zero(), T::max)
}
