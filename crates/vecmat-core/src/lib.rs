#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `vecmat-core` holds the data model shared by the rest of the workspace: a
//! [`Scalar`] abstraction over real and complex numbers, and the [`Vector`] and
//! [`Matrix`] value types built on it.
//!
//! # Architecture
//!
//! - **Scalar**: arithmetic plus conjugate, modulus and real part, implemented for `f64`
//!   and `Complex64`
//! - **Vector**: non-empty ordered sequence of scalars
//! - **Matrix**: non-empty row-major grid of scalars with a fixed `(rows, cols)` shape
//! - **CoreError**: construction and dimension failures, categorised by [`ErrorKind`]
//!
//! Both value types validate their input once at construction and never
//! change afterwards; every operation returns a new value.
//!
//! # Quick Start
//!
//! ```rust
//! use vecmat_core::{Matrix, Vector};
//!
//! let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
//! let v = Vector::from_vec(vec![1.0, -1.0]).unwrap();
//!
//! let mv = m.mul_vec(&v).unwrap();
//! assert_eq!(mv.as_slice(), &[2.0, -2.0]);
//!
//! let flat = m.to_vector();
//! assert_eq!(flat.to_matrix(2, 2).unwrap(), m);
//! ```
//!
//! Complex scalars use the Hermitian inner product:
//!
//! ```rust
//! use num_complex::Complex64;
//! use vecmat_core::Vector;
//!
//! let u = Vector::from_vec(vec![Complex64::new(0.0, 1.0)]).unwrap();
//! assert_eq!(u.dot(&u).unwrap(), Complex64::new(1.0, 0.0));
//! ```

/// Error module containing [`CoreError`] and the shared [`ErrorKind`].
pub mod error;

/// Matrix module containing the dense [`Matrix`] type.
pub mod matrix;

/// Scalar module containing the [`Scalar`] trait and its implementations.
pub mod scalar;

/// Serde module for JSON/other format serialization and deserialization.
///
/// Deserialized values go through the same validation as the constructors.
#[cfg(feature = "serde")]
pub mod serde;

/// Vector module containing the [`Vector`] type.
pub mod vector;

pub use crate::error::{CoreError, ErrorKind};
pub use crate::matrix::Matrix;
pub use crate::scalar::Scalar;
pub use crate::vector::Vector;
pub use num_complex::Complex64;

/// Tolerance used by [`Vector::approx_eq`] and [`Matrix::approx_eq`].
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
