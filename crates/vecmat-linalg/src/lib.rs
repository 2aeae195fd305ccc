#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! All routines take a [`Matrix`](vecmat_core::Matrix) by reference, reduce a
//! private copy with Gauss-Jordan elimination and return fresh results. The
//! numeric thresholds live in [`ReductionTolerance`]; the plain functions use
//! its defaults and the `*_with_tol` variants accept custom ones.
//!
//! ```rust
//! use vecmat_core::Matrix;
//! use vecmat_linalg::{inverse, rank, row_echelon};
//!
//! let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(rank(&m), 2);
//! assert!(row_echelon(&m).unwrap().approx_eq(&Matrix::identity(2).unwrap()));
//! assert!(m.mul_mat(&inverse(&m).unwrap()).unwrap().approx_eq(&Matrix::identity(2).unwrap()));
//! ```

/// Determinant by cofactor expansion.
pub mod determinant;

/// Reduced row-echelon form and rank.
pub mod echelon;

/// Error types for the reduction engine.
pub mod error;

/// Inverse by elimination of the augmented matrix `[A | I]`.
pub mod inverse;

/// Row-operation primitives and the elimination loop.
pub mod reducer;

/// The [`MatrixReduction`] extension trait.
pub mod reduction;

/// Numeric tolerances.
pub mod tolerance;

pub use determinant::{determinant, determinant_with_tol};
pub use echelon::{rank, rank_with_tol, row_echelon, row_echelon_with_tol};
pub use error::LinalgError;
pub use inverse::{inverse, inverse_with_tol};
pub use reducer::RowReducer;
pub use reduction::MatrixReduction;
pub use tolerance::{ReductionTolerance, COFACTOR_EPSILON, MAX_DETERMINANT_SIZE, PIVOT_EPSILON};
