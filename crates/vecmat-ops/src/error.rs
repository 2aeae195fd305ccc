use thiserror::Error;
use vecmat_core::{CoreError, ErrorKind};

/// An error type for linear operations.
#[derive(Error, Debug, PartialEq)]
pub enum OpsError {
    /// Error with the operands (sizes, shapes).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A linear combination needs at least one term.
    #[error("Cannot build a linear combination of zero objects")]
    EmptyCombination,

    /// The number of coefficients differs from the number of objects.
    #[error("Got {coefficients} coefficients for {objects} objects")]
    MismatchedCoefficients {
        /// Number of objects
        objects: usize,
        /// Number of coefficients
        coefficients: usize,
    },

    /// The interpolation factor is not a finite number in `[0, 1]`.
    #[error("Interpolation factor must be within [0, 1], got {0}")]
    InvalidInterpolationFactor(f64),

    /// The angle with a zero-length vector is undefined.
    #[error("Cannot compute an angle with a zero-length vector")]
    ZeroLengthVector,
}

impl OpsError {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            Self::EmptyCombination => ErrorKind::Construction,
            Self::MismatchedCoefficients { .. } => ErrorKind::Dimension,
            Self::InvalidInterpolationFactor(_) | Self::ZeroLengthVector => ErrorKind::Domain,
        }
    }
}
