use vecmat_core::{CoreError, Matrix, Scalar};

use crate::{
    error::LinalgError,
    tolerance::{ReductionTolerance, MAX_DETERMINANT_SIZE},
};

/// Compute the determinant of a square matrix.
///
/// Sizes 1 and 2 use the closed forms; sizes 3 and 4 use cofactor expansion
/// along the first column, skipping entries whose magnitude is below the
/// cofactor tolerance.
///
/// # Errors
///
/// * Dimension error if the matrix is not square.
/// * [`LinalgError::UnsupportedSize`] for matrices larger than 4x4.
///
/// # Example
///
/// ```
/// use vecmat_core::Matrix;
/// use vecmat_linalg::determinant;
///
/// let m = Matrix::from_rows(vec![
///     vec![8.0, 5.0, -2.0],
///     vec![4.0, 7.0, 20.0],
///     vec![7.0, 6.0, 1.0],
/// ])
/// .unwrap();
/// assert!((determinant(&m).unwrap() + 174.0).abs() < 1e-9);
/// ```
pub fn determinant<T: Scalar>(matrix: &Matrix<T>) -> Result<T, LinalgError> {
    determinant_with_tol(matrix, &ReductionTolerance::default())
}

/// [`determinant`] with explicit tolerances.
pub fn determinant_with_tol<T: Scalar>(
    matrix: &Matrix<T>,
    tol: &ReductionTolerance,
) -> Result<T, LinalgError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(CoreError::not_square("Determinant", rows, cols).into());
    }
    if rows > MAX_DETERMINANT_SIZE {
        return Err(LinalgError::UnsupportedSize {
            operation: "Determinant",
            size: rows,
            max: MAX_DETERMINANT_SIZE,
        });
    }
    Ok(cofactor_det(matrix.as_slice(), rows, tol.cofactor))
}

// `data` is a row-major n x n block with 1 <= n <= MAX_DETERMINANT_SIZE.
fn cofactor_det<T: Scalar>(data: &[T], n: usize, eps: f64) -> T {
    match n {
        1 => data[0],
        2 => data[0] * data[3] - data[1] * data[2],
        _ => {
            let mut det = T::zero();
            for r in 0..n {
                let elem = data[r * n];
                if elem.modulus() < eps {
                    continue;
                }
                let sub = minor(data, n, r, 0);
                let term = elem * cofactor_det(&sub, n - 1, eps);
                det = if r % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

/// Row-major copy of `data` without row `skip_row` and column `skip_col`.
fn minor<T: Scalar>(data: &[T], n: usize, skip_row: usize, skip_col: usize) -> Vec<T> {
    data.chunks_exact(n)
        .enumerate()
        .filter(|(r, _)| *r != skip_row)
        .flat_map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(move |(c, _)| *c != skip_col)
                .map(|(_, &v)| v)
        })
        .collect()
}
