use std::fmt;
use std::ops::Index;

use crate::{
    error::CoreError,
    scalar::{check_finite, Scalar},
    vector::Vector,
    DEFAULT_TOLERANCE,
};

/// A dense two-dimensional grid of scalars.
///
/// Elements are stored in row-major order: the element at `(row, col)` lives
/// at offset `row * cols + col`. A matrix always has at least one row and one
/// column.
///
/// Non-finite elements are rejected by the constructors only. Arithmetic
/// follows IEEE 754, so results such as an overflowing product or a scale by
/// NaN may hold infinite or NaN elements.
///
/// # Examples
///
/// ```rust
/// use vecmat_core::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.trace().unwrap(), 5.0);
/// assert_eq!(m.transpose().get(0, 1), Some(&3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    shape: [usize; 2],
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// * [`CoreError::EmptyInput`] if there are no rows or the rows are empty.
    /// * [`CoreError::RaggedRows`] if a row length differs from the first row.
    /// * [`CoreError::NonFiniteElement`] if an element is NaN or infinite.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CoreError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(CoreError::EmptyInput("matrix"));
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(CoreError::RaggedRows {
                row,
                expected,
                actual: r.len(),
            });
        }
        let shape = [rows.len(), expected];
        let data: Vec<T> = rows.into_iter().flatten().collect();
        check_finite(&data)?;
        Ok(Self { data, shape })
    }

    /// Creates a matrix with the given `[rows, cols]` shape from row-major data.
    ///
    /// # Errors
    ///
    /// * [`CoreError::EmptyInput`] if either dimension is zero.
    /// * [`CoreError::InvalidShape`] if `data.len() != rows * cols` or the
    ///   element count overflows `usize`.
    /// * [`CoreError::NonFiniteElement`] if an element is NaN or infinite.
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self, CoreError> {
        let numel = Self::checked_numel(shape, data.len())?;
        if numel != data.len() {
            return Err(CoreError::invalid_shape(numel, data.len()));
        }
        check_finite(&data)?;
        Ok(Self { data, shape })
    }

    /// Creates a matrix by evaluating `f(row, col)` for every position.
    pub fn from_shape_fn<F>(shape: [usize; 2], mut f: F) -> Result<Self, CoreError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let numel = Self::checked_numel(shape, 0)?;
        let cols = shape[1];
        let data = (0..numel).map(|i| f(i / cols, i % cols)).collect();
        Self::from_shape_vec(shape, data)
    }

    // `actual` is only reported when `rows * cols` overflows.
    fn checked_numel(shape: [usize; 2], actual: usize) -> Result<usize, CoreError> {
        if shape[0] == 0 || shape[1] == 0 {
            return Err(CoreError::EmptyInput("matrix"));
        }
        shape[0]
            .checked_mul(shape[1])
            .ok_or(CoreError::invalid_shape(usize::MAX, actual))
    }

    // Shape is trusted; elements are not re-checked for finiteness.
    pub(crate) fn from_shape_vec_unchecked(shape: [usize; 2], data: Vec<T>) -> Self {
        debug_assert_eq!(shape[0] * shape[1], data.len());
        Self { data, shape }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, CoreError> {
        Self::from_shape_fn([n, n], |r, c| if r == c { T::one() } else { T::zero() })
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, CoreError> {
        Self::from_shape_fn([rows, cols], |_, _| T::zero())
    }

    /// The `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.shape[0], self.shape[1])
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape[0] == self.shape[1]
    }

    /// Row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.data.get(row * self.cols() + col)
    }

    /// Returns row `row` as a slice, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.data.chunks_exact(self.cols()).nth(row)
    }

    /// Iterator over the rows.
    pub fn row_iter(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.cols())
    }

    /// Copies the elements into a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(<[T]>::to_vec).collect()
    }

    fn check_same_shape(&self, other: &Self, message: &str) -> Result<(), CoreError> {
        if self.shape != other.shape {
            return Err(CoreError::dimension_mismatch(
                message,
                &self.shape,
                &other.shape,
            ));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, message: &str, op: F) -> Result<Self, CoreError>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other, message)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self::from_shape_vec_unchecked(self.shape, data))
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, CoreError> {
        self.zip_with(other, "Matrices must have the same shape to be added", |a, b| {
            a + b
        })
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self, CoreError> {
        self.zip_with(
            other,
            "Matrices must have the same shape to be subtracted",
            |a, b| a - b,
        )
    }

    /// Multiplies every element by `scalar`.
    ///
    /// The result is not re-validated: a non-finite `scalar` or an overflowing
    /// product yields non-finite elements.
    pub fn scale(&self, scalar: T) -> Self {
        Self::from_shape_vec_unchecked(
            self.shape,
            self.data.iter().map(|&x| scalar * x).collect(),
        )
    }

    /// Matrix-vector product: an `m x n` matrix times a size `n` vector gives a
    /// size `m` vector with `result[i] = Σ_j self[i][j] * v[j]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if `v.size() != self.cols()`.
    pub fn mul_vec(&self, v: &Vector<T>) -> Result<Vector<T>, CoreError> {
        if v.size() != self.cols() {
            return Err(CoreError::dimension_mismatch(
                "Vector size must match the number of matrix columns",
                &[self.cols()],
                &[v.size()],
            ));
        }
        let data = self
            .row_iter()
            .map(|row| {
                row.iter()
                    .zip(v.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect();
        Ok(Vector::from_vec_unchecked(data))
    }

    /// Matrix product `A(m x n) · B(n x p) = C(m x p)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DimensionMismatch`] if the inner dimensions differ.
    pub fn mul_mat(&self, other: &Self) -> Result<Self, CoreError> {
        let (m, n) = self.shape();
        let (n2, p) = other.shape();
        if n != n2 {
            return Err(CoreError::dimension_mismatch(
                "Inner dimensions must agree for a matrix product",
                &[m, n],
                &[n2, p],
            ));
        }
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for j in 0..p {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.data[i * n + k] * other.data[k * p + j];
                }
                data[i * p + j] = acc;
            }
        }
        Ok(Self::from_shape_vec_unchecked([m, p], data))
    }

    /// Swaps the roles of rows and columns.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let data = (0..rows * cols)
            .map(|i| self.data[(i % rows) * cols + i / rows])
            .collect();
        Self::from_shape_vec_unchecked([cols, rows], data)
    }

    /// Sum of the diagonal elements.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotSquare`] for non-square matrices.
    pub fn trace(&self) -> Result<T, CoreError> {
        if !self.is_square() {
            return Err(CoreError::not_square("Trace", self.rows(), self.cols()));
        }
        let n = self.rows();
        Ok((0..n).fold(T::zero(), |acc, i| acc + self.data[i * n + i]))
    }

    /// Flattens the matrix into a vector in row-major reading order.
    pub fn to_vector(&self) -> Vector<T> {
        Vector::from_vec_unchecked(self.data.clone())
    }

    /// Whether both matrices have the same shape and every pair of elements
    /// differs by at most `tolerance` in magnitude.
    pub fn equals(&self, other: &Self, tolerance: f64) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).modulus() <= tolerance)
    }

    /// [`Matrix::equals`] with the default tolerance of `1e-6`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.equals(other, DEFAULT_TOLERANCE)
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows(),
            self.cols()
        );
        &self.data[row * self.cols() + col]
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.row_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}
