use std::fmt;
use std::ops::Index;

use crate::{
    error::CoreError,
    matrix::Matrix,
    scalar::{check_finite, Scalar},
    DEFAULT_TOLERANCE,
};

/// A fixed-length, non-empty sequence of scalars.
///
/// Vectors are value objects: every operation returns a new vector and the
/// operands are never modified. Only the constructors reject NaN and infinite
/// elements; arithmetic results follow IEEE 754 and are not re-checked.
///
/// # Examples
///
/// ```rust
/// use vecmat_core::Vector;
///
/// let u = Vector::from_vec(vec![2.0, 3.0, 4.0]).unwrap();
/// let v = Vector::from_vec(vec![5.0, 6.0, 7.0]).unwrap();
/// assert_eq!(u.dot(&v).unwrap(), 56.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Creates a new `Vector` taking ownership of the given data.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyInput`] if `data` is empty and
    /// [`CoreError::NonFiniteElement`] if an element is NaN or infinite.
    pub fn from_vec(data: Vec<T>) -> Result<Self, CoreError> {
        if data.is_empty() {
            return Err(CoreError::EmptyInput("vector"));
        }
        check_finite(&data)?;
        Ok(Self { data })
    }

    /// Creates a new `Vector` copying the given slice.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Vector::from_vec`].
    pub fn from_slice(data: &[T]) -> Result<Self, CoreError> {
        Self::from_vec(data.to_vec())
    }

    /// Creates a vector of `size` zeros.
    pub fn zeros(size: usize) -> Result<Self, CoreError> {
        Self::from_vec(vec![T::zero(); size])
    }

    // NOTE: arithmetic results skip the finiteness checks.
    pub(crate) fn from_vec_unchecked(data: Vec<T>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the vector and returns its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    fn check_same_size(&self, other: &Self, message: &str) -> Result<(), CoreError> {
        if self.size() != other.size() {
            return Err(CoreError::dimension_mismatch(
                message,
                &[self.size()],
                &[other.size()],
            ));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, message: &str, op: F) -> Result<Self, CoreError>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_size(other, message)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self::from_vec_unchecked(data))
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the sizes differ.
    pub fn add(&self, other: &Self) -> Result<Self, CoreError> {
        self.zip_with(other, "Vectors must be the same size to be added", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the sizes differ.
    pub fn sub(&self, other: &Self) -> Result<Self, CoreError> {
        self.zip_with(other, "Vectors must be the same size to be subtracted", |a, b| {
            a - b
        })
    }

    /// Multiplies every element by `scalar`.
    ///
    /// A non-finite `scalar` or an overflowing product yields non-finite
    /// elements.
    pub fn scale(&self, scalar: T) -> Self {
        Self::from_vec_unchecked(self.data.iter().map(|&x| scalar * x).collect())
    }

    /// Hermitian inner product `Σ conj(self[i]) * other[i]`.
    ///
    /// For real vectors this is the usual dot product.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the sizes differ.
    pub fn dot(&self, other: &Self) -> Result<T, CoreError> {
        self.check_same_size(other, "Vectors must be the same size for a dot product")?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a.conj() * b))
    }

    /// Manhattan norm, the sum of the element magnitudes.
    pub fn norm_1(&self) -> f64 {
        self.data.iter().map(|x| x.modulus()).sum()
    }

    /// Euclidean norm `sqrt(Σ x * conj(x))`.
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|&x| (x * x.conj()).re())
            .sum::<f64>()
            .sqrt()
    }

    /// Supremum norm, the largest element magnitude.
    pub fn norm_inf(&self) -> f64 {
        self.data
            .iter()
            .map(|x| x.modulus())
            .fold(0.0, f64::max)
    }

    /// Whether both vectors have the same size and every pair of elements
    /// differs by at most `tolerance` in magnitude.
    pub fn equals(&self, other: &Self, tolerance: f64) -> bool {
        self.size() == other.size()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).modulus() <= tolerance)
    }

    /// [`Vector::equals`] with the default tolerance of `1e-6`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, DEFAULT_TOLERANCE)
    }

    /// Reinterprets the vector as a `rows x cols` matrix, filling row by row.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ReshapeMismatch`] unless `rows * cols == self.size()`.
    pub fn to_matrix(&self, rows: usize, cols: usize) -> Result<Matrix<T>, CoreError> {
        if rows.checked_mul(cols) != Some(self.size()) {
            return Err(CoreError::ReshapeMismatch {
                size: self.size(),
                rows,
                cols,
            });
        }
        Ok(Matrix::from_shape_vec_unchecked(
            [rows, cols],
            self.data.clone(),
        ))
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = CoreError;

    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn constructor() -> Result<(), CoreError> {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0])?;
        assert_eq!(v.size(), 3);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(v[1], 2.0);
        assert_eq!(v.get(3), None);
        Ok(())
    }

    #[test]
    fn constructor_errors() {
        let err = Vector::<f64>::from_vec(vec![]).unwrap_err();
        assert_eq!(err, CoreError::EmptyInput("vector"));
        assert_eq!(err.kind(), ErrorKind::Construction);

        let err = Vector::from_vec(vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, CoreError::NonFiniteElement { index: 1 });
    }

    #[test]
    fn add_sub() -> Result<(), CoreError> {
        let u = Vector::from_vec(vec![2.0, 3.0])?;
        let v = Vector::from_vec(vec![5.0, 7.0])?;
        assert_eq!(u.add(&v)?.as_slice(), &[7.0, 10.0]);
        assert_eq!(u.sub(&v)?.as_slice(), &[-3.0, -4.0]);

        let w = Vector::from_vec(vec![1.0, 2.0, 3.0])?;
        let err = u.add(&w).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dimension);
        assert!(u.sub(&w).is_err());
        Ok(())
    }

    #[test]
    fn scale() -> Result<(), CoreError> {
        let u = Vector::from_vec(vec![2.0, 3.0])?;
        assert_eq!(u.scale(2.0).as_slice(), &[4.0, 6.0]);
        assert!(u.scale(4.0).scale(0.25).approx_eq(&u));

        let inf = u.scale(f64::INFINITY);
        assert_eq!(inf.as_slice(), &[f64::INFINITY, f64::INFINITY]);
        assert!(Vector::from_vec(inf.into_vec()).is_err());
        assert!(u.scale(f64::NAN).iter().all(|x| x.is_nan()));
        Ok(())
    }

    #[test]
    fn dot_real() -> Result<(), CoreError> {
        let u = Vector::from_vec(vec![2.0, 3.0, 4.0])?;
        let v = Vector::from_vec(vec![5.0, 6.0, 7.0])?;
        assert_eq!(u.dot(&v)?, 56.0);

        let z = Vector::from_vec(vec![0.0, 0.0])?;
        let o = Vector::from_vec(vec![1.0, 1.0])?;
        assert_eq!(z.dot(&o)?, 0.0);
        assert!(u.dot(&o).is_err());
        Ok(())
    }

    #[test]
    fn dot_complex_conjugates_first_argument() -> Result<(), CoreError> {
        let u = Vector::from_vec(vec![Complex64::new(0.0, 1.0), Complex64::new(2.0, 0.0)])?;
        let v = Vector::from_vec(vec![Complex64::new(0.0, 1.0), Complex64::new(1.0, 1.0)])?;
        // conj(i) * i + 2 * (1 + i) = 1 + 2 + 2i
        assert_eq!(u.dot(&v)?, Complex64::new(3.0, 2.0));
        // the inner product of a vector with itself is real
        assert_eq!(u.dot(&u)?, Complex64::new(5.0, 0.0));
        Ok(())
    }

    #[test]
    fn norms() -> Result<(), CoreError> {
        let u = Vector::from_vec(vec![1.0, -2.0, 3.0])?;
        assert_relative_eq!(u.norm_1(), 6.0);
        assert_relative_eq!(u.norm(), 14f64.sqrt());
        assert_relative_eq!(u.norm_inf(), 3.0);

        let z = Vector::from_vec(vec![0.0, 0.0, 0.0])?;
        assert_eq!(z.norm_1(), 0.0);
        assert_eq!(z.norm(), 0.0);
        assert_eq!(z.norm_inf(), 0.0);

        let c = Vector::from_vec(vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, -1.0)])?;
        assert_relative_eq!(c.norm_1(), 6.0);
        assert_relative_eq!(c.norm(), 26f64.sqrt());
        assert_relative_eq!(c.norm_inf(), 5.0);
        Ok(())
    }

    #[test]
    fn equals_tolerance() -> Result<(), CoreError> {
        let u = Vector::from_vec(vec![1.0, 2.0])?;
        let v = Vector::from_vec(vec![1.0 + 1e-8, 2.0 - 1e-8])?;
        let w = Vector::from_vec(vec![1.0, 2.0, 3.0])?;
        assert!(u.approx_eq(&v));
        assert!(!u.equals(&v, 1e-10));
        assert!(!u.approx_eq(&w));
        Ok(())
    }

    #[test]
    fn to_matrix() -> Result<(), CoreError> {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let m = v.to_matrix(2, 3)?;
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 0), Some(&4.0));

        let err = v.to_matrix(4, 2).unwrap_err();
        assert_eq!(
            err,
            CoreError::ReshapeMismatch {
                size: 6,
                rows: 4,
                cols: 2
            }
        );
        assert!(v.to_matrix(0, 6).is_err());
        Ok(())
    }

    #[test]
    fn display() -> Result<(), CoreError> {
        let v = Vector::from_vec(vec![1.0, 2.5, -3.0])?;
        assert_eq!(v.to_string(), "[1, 2.5, -3]");
        Ok(())
    }
}
