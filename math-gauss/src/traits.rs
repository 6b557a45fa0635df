//! Scalar abstraction for the solver
//!
//! [`RealField`] is the set of operations the row reducer and the solution
//! space need from a matrix entry. It is implemented for `f64` and `f32`.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display, LowerExp};

/// Trait for real scalar types usable as matrix entries.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default)
/// - `f32` (for memory-constrained applications; tolerances are rounded)
pub trait RealField:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + Copy
    + Send
    + Sync
    + Debug
    + Display
    + LowerExp
    + 'static
{
    /// Convert an `f64` tolerance to this type.
    ///
    /// Values below the smallest positive number of the type are clamped to
    /// it, so a tolerance never silently becomes zero.
    fn from_tolerance(tol: f64) -> Self;

    /// Magnitude |x|
    fn magnitude(&self) -> Self;

    /// Check if this is approximately zero
    fn is_negligible(&self, tol: Self) -> bool {
        self.magnitude() < tol
    }
}

impl RealField for f64 {
    #[inline]
    fn from_tolerance(tol: f64) -> Self {
        tol
    }

    #[inline]
    fn magnitude(&self) -> Self {
        self.abs()
    }
}

impl RealField for f32 {
    #[inline]
    fn from_tolerance(tol: f64) -> Self {
        let t = tol as f32;
        if t > 0.0 { t } else { f32::MIN_POSITIVE }
    }

    #[inline]
    fn magnitude(&self) -> Self {
        self.abs()
    }
}
