#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for linear operations.
pub mod error;

/// Angle and cross product of vectors.
pub mod geometry;

/// Linear combination and interpolation.
pub mod linear;

/// The [`VectorSpace`] abstraction shared by vectors, matrices and scalars.
pub mod space;

pub use error::OpsError;
pub use geometry::{angle_cos, cross_product};
pub use linear::{lerp, linear_combination};
pub use space::VectorSpace;
