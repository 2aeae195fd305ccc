use vecmat_core::{Matrix, Scalar};

use crate::{error::LinalgError, reducer::RowReducer, tolerance::ReductionTolerance};

/// Compute the reduced row-echelon form of a matrix.
///
/// Uses Gauss-Jordan elimination with partial pivoting by magnitude (see
/// [`RowReducer::reduce`]). The input is not modified.
///
/// # Arguments
///
/// * `matrix` - The matrix to reduce.
///
/// # Returns
///
/// A new matrix of the same shape in reduced row-echelon form.
///
/// # Example
///
/// ```
/// use vecmat_core::Matrix;
/// use vecmat_linalg::row_echelon;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
/// let r = row_echelon(&m).unwrap();
/// assert!(r.approx_eq(&Matrix::from_rows(vec![vec![1.0, 2.0], vec![0.0, 0.0]]).unwrap()));
/// ```
pub fn row_echelon<T: Scalar>(matrix: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    row_echelon_with_tol(matrix, &ReductionTolerance::default())
}

/// [`row_echelon`] with explicit tolerances.
pub fn row_echelon_with_tol<T: Scalar>(
    matrix: &Matrix<T>,
    tol: &ReductionTolerance,
) -> Result<Matrix<T>, LinalgError> {
    let mut reducer = RowReducer::new(matrix);
    reducer.reduce(matrix.cols(), tol);
    reducer.into_matrix()
}

/// Compute the rank of a matrix, the number of pivot rows of its row-echelon form.
///
/// Defined for any shape; the zero matrix has rank 0.
///
/// # Example
///
/// ```
/// use vecmat_core::Matrix;
/// use vecmat_linalg::rank;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]]).unwrap();
/// assert_eq!(rank(&m), 1);
/// ```
pub fn rank<T: Scalar>(matrix: &Matrix<T>) -> usize {
    rank_with_tol(matrix, &ReductionTolerance::default())
}

/// [`rank`] with explicit tolerances.
pub fn rank_with_tol<T: Scalar>(matrix: &Matrix<T>, tol: &ReductionTolerance) -> usize {
    let mut reducer = RowReducer::new(matrix);
    reducer.reduce(matrix.cols(), tol).len()
}
