use vecmat_core::{Matrix, Scalar};

use crate::{determinant, echelon, error::LinalgError, inverse};

/// Method-style access to the reduction engine.
///
/// Every method leaves `self` untouched and works on a private copy.
///
/// # Example
///
/// ```
/// use vecmat_core::Matrix;
/// use vecmat_linalg::MatrixReduction;
///
/// let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
/// assert_eq!(m.rank(), 2);
/// assert_eq!(m.determinant().unwrap(), 8.0);
/// assert_eq!(m.inverse().unwrap().as_slice(), &[0.5, 0.0, 0.0, 0.25]);
/// ```
pub trait MatrixReduction<T: Scalar> {
    /// See [`echelon::row_echelon`].
    fn row_echelon(&self) -> Result<Matrix<T>, LinalgError>;

    /// See [`echelon::rank`].
    fn rank(&self) -> usize;

    /// See [`determinant::determinant`].
    fn determinant(&self) -> Result<T, LinalgError>;

    /// See [`inverse::inverse`].
    fn inverse(&self) -> Result<Matrix<T>, LinalgError>;
}

impl<T: Scalar> MatrixReduction<T> for Matrix<T> {
    fn row_echelon(&self) -> Result<Matrix<T>, LinalgError> {
        echelon::row_echelon(self)
    }

    fn rank(&self) -> usize {
        echelon::rank(self)
    }

    fn determinant(&self) -> Result<T, LinalgError> {
        determinant::determinant(self)
    }

    fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        inverse::inverse(self)
    }
}
