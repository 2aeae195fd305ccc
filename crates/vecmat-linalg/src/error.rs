use thiserror::Error;
use vecmat_core::{CoreError, ErrorKind};

/// An error type for the reduction engine.
#[derive(Error, Debug, PartialEq)]
pub enum LinalgError {
    /// Error with the operand itself (shape, square-ness, row index).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No usable pivot exists in a column, so the matrix has no inverse.
    #[error("Matrix is singular: no pivot above tolerance in column {column}")]
    Singular {
        /// First column of the left block that could not be reduced to a unit pivot.
        column: usize,
    },

    /// The operation is intentionally limited to small matrices.
    #[error("{operation} is only implemented for matrices up to {max}x{max}, got {size}x{size}")]
    UnsupportedSize {
        /// Name of the operation
        operation: &'static str,
        /// Size of the square operand
        size: usize,
        /// Largest supported size
        max: usize,
    },
}

impl LinalgError {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            Self::Singular { .. } => ErrorKind::Domain,
            Self::UnsupportedSize { .. } => ErrorKind::Capability,
        }
    }
}
