use thiserror::Error;

/// Broad category of a failure, shared by every crate of the workspace.
///
/// Callers that only need to know *what kind* of thing went wrong can match on
/// the kind instead of the concrete error enum of each crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input data could not be turned into a vector or matrix.
    Construction,
    /// Operand sizes or shapes are not compatible with the operation.
    Dimension,
    /// The operands are well formed but the operation is undefined for them.
    Domain,
    /// The operation is deliberately not implemented for this input size.
    Capability,
    /// Reading or writing an external resource failed.
    Io,
}

/// Error type for the vector and matrix data model.
///
/// Every fallible constructor and operation of [`crate::Vector`] and
/// [`crate::Matrix`] reports one of these variants. None of them leave the
/// operands modified.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// No elements were provided.
    ///
    /// Vectors need at least one element and matrices at least one row and
    /// one column.
    #[error("Cannot build a {0} from empty data")]
    EmptyInput(&'static str),

    /// A row of a row-major literal does not have the same length as the first row.
    #[error("Row {row} has {actual} elements, expected {expected} like the first row")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// An element is NaN or infinite.
    #[error("Element at flat index {index} is not a finite number")]
    NonFiniteElement {
        /// Row-major index of the offending element
        index: usize,
    },

    /// The number of elements does not match the requested shape.
    #[error("Shape mismatch: expected {expected} elements for shape, got {actual} in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// Operand dimensions are incompatible for the requested operation.
    ///
    /// # Examples
    /// - Adding vectors of different sizes
    /// - Matrix multiplication with incompatible inner dimensions
    /// - Matrix-vector product where the vector size differs from the column count
    #[error("Dimension mismatch: {message}. Expected shape: {expected}, got: {actual}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },

    /// The operation requires a square matrix.
    #[error("{operation} is only defined for square matrices, got a {rows}x{cols} matrix")]
    NotSquare {
        /// Name of the operation that was attempted
        operation: &'static str,
        /// Number of rows of the operand
        rows: usize,
        /// Number of columns of the operand
        cols: usize,
    },

    /// A vector cannot be reinterpreted with the requested dimensions.
    #[error("Cannot reshape a vector of size {size} into a {rows}x{cols} matrix")]
    ReshapeMismatch {
        /// Size of the vector
        size: usize,
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// Index exceeds the bounds of a dimension.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },
}

impl CoreError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// Creates a NotSquare error for the given operation and shape.
    pub fn not_square(operation: &'static str, rows: usize, cols: usize) -> Self {
        Self::NotSquare {
            operation,
            rows,
            cols,
        }
    }

    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput(_) | Self::RaggedRows { .. } | Self::NonFiniteElement { .. } => {
                ErrorKind::Construction
            }
            Self::InvalidShape { .. }
            | Self::DimensionMismatch { .. }
            | Self::NotSquare { .. }
            | Self::ReshapeMismatch { .. }
            | Self::IndexOutOfBounds { .. } => ErrorKind::Dimension,
        }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::EmptyInput(_) => {
                "Provide at least one element (one row and one column for matrices)"
            }
            Self::RaggedRows { .. } => "Make every row the same length as the first one",
            Self::NonFiniteElement { .. } => {
                "Replace NaN or infinite values before building the value"
            }
            Self::InvalidShape { .. } => {
                "Ensure the product of shape dimensions equals the number of data elements"
            }
            Self::DimensionMismatch { .. } => "Check the operand shapes with `shape()` or `size()`",
            Self::NotSquare { .. } => "Use a matrix with as many rows as columns",
            Self::ReshapeMismatch { .. } => {
                "Pick rows and cols whose product equals the vector size"
            }
            Self::IndexOutOfBounds { .. } => {
                "Verify indices are within bounds (0 <= index < dimension_size)"
            }
        }
    }
}
