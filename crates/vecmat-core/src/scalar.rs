use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::error::CoreError;

/// Element type of vectors and matrices.
///
/// Covers real floats (`f64`) and complex numbers (`Complex64`). Magnitudes and
/// real parts are always reported as `f64` so that norms and tolerances compare
/// the same way for both.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Absolute value for reals, modulus `sqrt(re² + im²)` for complex numbers.
    fn modulus(self) -> f64;

    /// Real part.
    fn re(self) -> f64;

    /// Promote a real value into `Self`.
    fn from_real(r: f64) -> Self;

    /// Whether every component is neither NaN nor infinite.
    fn is_finite(self) -> bool;
}

impl Scalar for f64 {
    #[inline]
    fn conj(self) -> f64 {
        self
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn re(self) -> f64 {
        self
    }

    #[inline]
    fn from_real(r: f64) -> f64 {
        r
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn conj(self) -> Self {
        Complex64::conj(&self)
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn re(self) -> f64 {
        self.re
    }

    #[inline]
    fn from_real(r: f64) -> Self {
        Complex64::new(r, 0.0)
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// Rejects data holding NaN or infinite values, reporting the first offender.
pub(crate) fn check_finite<T: Scalar>(data: &[T]) -> Result<(), CoreError> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CoreError::NonFiniteElement { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn real_scalar() {
        assert_eq!(Scalar::conj(-2.5f64), -2.5);
        assert_eq!((-2.5f64).modulus(), 2.5);
        assert_eq!(<f64 as Scalar>::from_real(3.0), 3.0);
        assert!(!Scalar::is_finite(f64::NAN));
    }

    #[test]
    fn complex_scalar() {
        let z = Complex64::new(3.0, -4.0);
        assert_eq!(Scalar::conj(z), Complex64::new(3.0, 4.0));
        assert_relative_eq!(z.modulus(), 5.0);
        assert_eq!(Scalar::re(z), 3.0);
        assert_eq!(Complex64::from_real(2.0), Complex64::new(2.0, 0.0));
        assert!(!Scalar::is_finite(Complex64::new(0.0, f64::INFINITY)));
    }

    #[test]
    fn finite_check() {
        assert_eq!(check_finite(&[1.0, 2.0]), Ok(()));
        assert_eq!(
            check_finite(&[1.0, f64::NAN, f64::INFINITY]),
            Err(CoreError::NonFiniteElement { index: 1 })
        );
    }
}
