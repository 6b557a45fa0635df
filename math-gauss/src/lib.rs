//! Complete solution sets of dense real linear systems
//!
//! This crate solves `A·x = b` by Gauss-Jordan elimination with partial
//! pivoting and returns every solution, not just one.
//!
//! # Features
//!
//! - **Row reduction**: reduced row-echelon form with deterministic pivoting
//! - **Rank analysis**: inconsistent, unique or underdetermined systems
//! - **Solution spaces**: particular solution plus a basis of the free
//!   directions, evaluable for any choice of free variables
//! - **Generic scalar types**: works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_audio_gauss::{Solution, solve};
//! use ndarray::array;
//!
//! let a = array![[1.0_f64, 1.0, 1.0], [2.0, 2.0, 2.0]];
//! let b = array![3.0_f64, 6.0];
//!
//! match solve(&a, &b).unwrap() {
//!     Solution::NoSolution => unreachable!(),
//!     Solution::Space(space) => {
//!         assert_eq!(space.degrees_of_freedom(), 2);
//!         let x = space.evaluate(&array![1.0, 1.0]).unwrap();
//!         assert!((x.sum() - 3.0).abs() < 1e-12);
//!     }
//! }
//! ```

pub mod blas_helpers;
pub mod config;
pub mod error;
pub mod parallel;
pub mod rank;
pub mod reduce;
pub mod solution;
pub mod solver;
pub mod traits;

// Re-export main types
pub use config::{
    DEFAULT_CONSISTENCY_TOLERANCE, DEFAULT_PIVOT_TOLERANCE, GaussConfig, GaussConfigBuilder,
};
pub use error::{GaussError, Result};
pub use rank::{Classification, classify};
pub use reduce::{PivotInfo, PivotMask, row_reduce, select_pivot_row};
pub use solution::SolutionSpace;
pub use solver::{Solution, solve, solve_augmented, solve_with_config};
pub use traits::RealField;
