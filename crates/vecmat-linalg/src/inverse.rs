use vecmat_core::{CoreError, Matrix, Scalar};

use crate::{error::LinalgError, reducer::RowReducer, tolerance::ReductionTolerance};

/// Compute the inverse of a square matrix by Gauss-Jordan elimination.
///
/// The augmented matrix `[A | I]` is reduced with pivots taken from the left
/// block only; the same row operations turn the right block into `A⁻¹`.
///
/// # Errors
///
/// * Dimension error if the matrix is not square.
/// * [`LinalgError::Singular`] if a column of `A` has no pivot above tolerance.
///
/// # Example
///
/// ```
/// use vecmat_core::Matrix;
/// use vecmat_linalg::inverse;
///
/// let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
/// let expected = Matrix::from_rows(vec![vec![0.6, -0.7], vec![-0.2, 0.4]]).unwrap();
/// assert!(inverse(&m).unwrap().approx_eq(&expected));
/// ```
pub fn inverse<T: Scalar>(matrix: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    inverse_with_tol(matrix, &ReductionTolerance::default())
}

/// [`inverse`] with explicit tolerances.
pub fn inverse_with_tol<T: Scalar>(
    matrix: &Matrix<T>,
    tol: &ReductionTolerance,
) -> Result<Matrix<T>, LinalgError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(CoreError::not_square("Inverse", rows, cols).into());
    }
    let n = rows;

    let identity = Matrix::identity(n)?;
    let mut reducer = RowReducer::augmented(matrix, &identity)?;
    let pivots = reducer.reduce(n, tol);

    // pivot columns are strictly increasing, so the first gap is the first
    // column without a pivot
    if pivots.len() < n {
        let column = pivots
            .iter()
            .enumerate()
            .find(|&(k, &c)| k != c)
            .map_or(pivots.len(), |(k, _)| k);
        log::debug!("singular {n}x{n} matrix: no pivot in column {column}");
        return Err(LinalgError::Singular { column });
    }

    reducer.columns(n, 2 * n)
}
