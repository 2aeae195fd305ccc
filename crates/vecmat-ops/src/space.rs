use vecmat_core::{Complex64, Matrix, Scalar, Vector};

use crate::error::OpsError;

/// A value that can be added to another of its kind and scaled by a field element.
///
/// Implemented for [`Vector`] and [`Matrix`] over any [`Scalar`], and for the
/// scalars `f64` and `Complex64` themselves.
pub trait VectorSpace: Sized {
    /// The scalar field the value is scaled by.
    type Field: Scalar;

    /// Element-wise sum; fails when the operands have different shapes.
    fn checked_add(&self, other: &Self) -> Result<Self, OpsError>;

    /// Multiplies every element by `k`.
    fn scale_by(&self, k: Self::Field) -> Self;
}

impl<T: Scalar> VectorSpace for Vector<T> {
    type Field = T;

    fn checked_add(&self, other: &Self) -> Result<Self, OpsError> {
        Ok(self.add(other)?)
    }

    fn scale_by(&self, k: T) -> Self {
        self.scale(k)
    }
}

impl<T: Scalar> VectorSpace for Matrix<T> {
    type Field = T;

    fn checked_add(&self, other: &Self) -> Result<Self, OpsError> {
        Ok(self.add(other)?)
    }

    fn scale_by(&self, k: T) -> Self {
        self.scale(k)
    }
}

impl VectorSpace for f64 {
    type Field = f64;

    fn checked_add(&self, other: &Self) -> Result<Self, OpsError> {
        Ok(*self + *other)
    }

    fn scale_by(&self, k: f64) -> Self {
        k * *self
    }
}

impl VectorSpace for Complex64 {
    type Field = Complex64;

    fn checked_add(&self, other: &Self) -> Result<Self, OpsError> {
        Ok(*self + *other)
    }

    fn scale_by(&self, k: Complex64) -> Self {
        k * *self
    }
}
