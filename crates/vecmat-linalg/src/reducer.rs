use vecmat_core::{CoreError, Matrix, Scalar};

use crate::{error::LinalgError, tolerance::ReductionTolerance};

/// A private, mutable working copy of a matrix for Gauss-Jordan elimination.
///
/// The caller's matrix is copied on construction and never touched again; all
/// row operations happen on the copy.
#[derive(Debug, Clone)]
pub struct RowReducer<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> RowReducer<T> {
    /// Copies `matrix` into a new working buffer.
    pub fn new(matrix: &Matrix<T>) -> Self {
        Self {
            data: matrix.as_slice().to_vec(),
            rows: matrix.rows(),
            cols: matrix.cols(),
        }
    }

    /// Builds the augmented matrix `[left | right]`.
    ///
    /// # Errors
    ///
    /// Returns a dimension error if the row counts differ.
    pub fn augmented(left: &Matrix<T>, right: &Matrix<T>) -> Result<Self, LinalgError> {
        if left.rows() != right.rows() {
            return Err(CoreError::dimension_mismatch(
                "Augmented blocks must have the same number of rows",
                &[left.rows()],
                &[right.rows()],
            )
            .into());
        }
        let cols = left.cols() + right.cols();
        let data = left
            .row_iter()
            .zip(right.row_iter())
            .flat_map(|(l, r)| l.iter().chain(r.iter()).copied())
            .collect();
        Ok(Self {
            data,
            rows: left.rows(),
            cols,
        })
    }

    /// The `(rows, cols)` pair of the working copy.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    fn check_row(&self, row: usize) -> Result<(), LinalgError> {
        if row >= self.rows {
            return Err(CoreError::index_out_of_bounds(row, self.rows).into());
        }
        Ok(())
    }

    /// Swaps rows `i` and `j` in place.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), LinalgError> {
        self.check_row(i)?;
        self.check_row(j)?;
        self.swap(i, j);
        Ok(())
    }

    /// Multiplies row `i` by `scalar` in place.
    pub fn scale_row(&mut self, i: usize, scalar: T) -> Result<(), LinalgError> {
        self.check_row(i)?;
        self.scale(i, scalar);
        Ok(())
    }

    /// Adds `scalar` times row `source` to row `target` in place.
    pub fn add_multiple_of_row(
        &mut self,
        target: usize,
        source: usize,
        scalar: T,
    ) -> Result<(), LinalgError> {
        self.check_row(target)?;
        self.check_row(source)?;
        self.add_multiple(target, source, scalar);
        Ok(())
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (lo, hi) = (i.min(j), i.max(j));
        let (head, tail) = self.data.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    fn scale(&mut self, i: usize, scalar: T) {
        let cols = self.cols;
        self.data[i * cols..(i + 1) * cols]
            .iter_mut()
            .for_each(|v| *v = scalar * *v);
    }

    fn add_multiple(&mut self, target: usize, source: usize, scalar: T) {
        let cols = self.cols;
        for c in 0..cols {
            let s = self.data[source * cols + c];
            let t = &mut self.data[target * cols + c];
            *t = *t + scalar * s;
        }
    }

    /// Gauss-Jordan elimination with partial pivoting by magnitude.
    ///
    /// Columns `0..pivot_cols` are processed left to right. For each column
    /// the row with the largest magnitude at or below the current pivot row
    /// is chosen; a candidate only wins if it beats the current best by more
    /// than `tol.pivot`, so the topmost row wins ties. Columns whose
    /// candidates are all below `tol.pivot` are skipped. The pivot row is
    /// scaled to a unit pivot and the column is cleared in every other row.
    /// Row operations span the full width, so an augmented block follows
    /// along.
    ///
    /// Returns the columns in which a pivot was placed, in order; the
    /// `k`-th entry is the pivot column of row `k`.
    pub fn reduce(&mut self, pivot_cols: usize, tol: &ReductionTolerance) -> Vec<usize> {
        let pivot_cols = pivot_cols.min(self.cols);
        let mut pivots = Vec::with_capacity(self.rows.min(pivot_cols));
        let mut pivot_row = 0;

        for col in 0..pivot_cols {
            let mut best: Option<usize> = None;
            let mut max_val = 0.0;
            for r in pivot_row..self.rows {
                let val = self.data[r * self.cols + col].modulus();
                if val > max_val + tol.pivot {
                    max_val = val;
                    best = Some(r);
                }
            }

            let Some(pivot) = best else {
                log::debug!("no pivot in column {col} below row {pivot_row}, skipping");
                continue;
            };

            self.swap(pivot_row, pivot);

            let pivot_val = self.data[pivot_row * self.cols + col];
            self.scale(pivot_row, T::one() / pivot_val);
            self.data[pivot_row * self.cols + col] = T::one();

            for r in 0..self.rows {
                if r == pivot_row {
                    continue;
                }
                let factor = self.data[r * self.cols + col];
                if factor.modulus() > tol.pivot {
                    self.add_multiple(r, pivot_row, -factor);
                    self.data[r * self.cols + col] = T::zero();
                }
            }

            pivots.push(col);
            pivot_row += 1;
            if pivot_row >= self.rows {
                break;
            }
        }

        pivots
    }

    /// Copies the columns `start..end` into a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or exceeds the column count, or
    /// if elimination produced a non-finite value.
    pub fn columns(&self, start: usize, end: usize) -> Result<Matrix<T>, LinalgError> {
        if end > self.cols {
            return Err(CoreError::index_out_of_bounds(end, self.cols).into());
        }
        let width = end.saturating_sub(start);
        let data = self
            .data
            .chunks_exact(self.cols)
            .flat_map(|row| row[start.min(end)..end].iter().copied())
            .collect();
        Ok(Matrix::from_shape_vec([self.rows, width], data)?)
    }

    /// Converts the working copy back into a matrix.
    pub fn into_matrix(self) -> Result<Matrix<T>, LinalgError> {
        Ok(Matrix::from_shape_vec([self.rows, self.cols], self.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn row_operations() -> Result<(), LinalgError> {
        let m = mat(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let mut r = RowReducer::new(&m);
        r.swap_rows(0, 2)?;
        r.scale_row(1, 2.0)?;
        r.add_multiple_of_row(2, 0, -1.0)?;
        assert_eq!(
            r.clone().into_matrix()?,
            mat(&[&[5.0, 6.0], &[6.0, 8.0], &[-4.0, -4.0]])
        );
        // the caller's matrix is untouched
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        r.swap_rows(1, 1)?;
        assert_eq!(r.get(1, 1), Some(&8.0));
        Ok(())
    }

    #[test]
    fn row_operations_out_of_bounds() {
        let mut r = RowReducer::new(&mat(&[&[1.0, 2.0]]));
        assert_eq!(
            r.swap_rows(0, 1),
            Err(LinalgError::Core(CoreError::IndexOutOfBounds { index: 1, size: 1 }))
        );
        assert!(r.scale_row(3, 1.0).is_err());
        assert!(r.add_multiple_of_row(0, 2, 1.0).is_err());
    }

    #[test]
    fn augmented_blocks() -> Result<(), LinalgError> {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let i = Matrix::identity(2)?;
        let r = RowReducer::augmented(&a, &i)?;
        assert_eq!(r.shape(), (2, 4));
        assert_eq!(r.columns(0, 2)?, a);
        assert_eq!(r.columns(2, 4)?, i);
        assert!(r.columns(2, 5).is_err());

        let tall = mat(&[&[1.0], &[2.0], &[3.0]]);
        assert!(RowReducer::augmented(&a, &tall).is_err());
        Ok(())
    }

    #[test]
    fn reduce_reports_pivot_columns() {
        let m = mat(&[&[0.0, 2.0, 4.0], &[0.0, 2.0, 4.0]]);
        let mut r = RowReducer::new(&m);
        let pivots = r.reduce(3, &ReductionTolerance::default());
        assert_eq!(pivots, vec![1]);
    }

    #[test]
    fn reduce_tie_break_keeps_topmost_row() {
        // both rows have magnitude 2 in the first column; no swap happens
        let m = mat(&[&[2.0, 0.0], &[-2.0, 1.0]]);
        let mut r = RowReducer::new(&m);
        r.reduce(1, &ReductionTolerance::default());
        assert_eq!(r.get(0, 0), Some(&1.0));
        assert_eq!(r.get(0, 1), Some(&0.0));
        assert_eq!(r.get(1, 1), Some(&1.0));
    }
}
