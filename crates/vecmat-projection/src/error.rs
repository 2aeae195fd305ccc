use vecmat_core::{CoreError, ErrorKind};

/// Error types for the projection module.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// Error reading or writing file
    #[error("error reading or writing file")]
    IoError(#[from] std::io::Error),

    /// Error building the matrix
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The clipping planes do not satisfy `0 < near < far`.
    #[error("Invalid clipping planes: near = {near}, far = {far}")]
    InvalidClippingPlanes {
        /// Distance to the near plane
        near: f64,
        /// Distance to the far plane
        far: f64,
    },

    /// The aspect ratio is not a positive finite number.
    #[error("Invalid aspect ratio {0}")]
    InvalidAspectRatio(f64),

    /// The field of view is not within `(0, π)`.
    #[error("Invalid field of view {0} rad")]
    InvalidFieldOfView(f64),

    /// Parse error
    #[error("Parse error {0}")]
    ParseError(String),
}

impl ProjectionError {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IoError(_) => ErrorKind::Io,
            Self::Core(e) => e.kind(),
            Self::InvalidClippingPlanes { .. }
            | Self::InvalidAspectRatio(_)
            | Self::InvalidFieldOfView(_) => ErrorKind::Domain,
            Self::ParseError(_) => ErrorKind::Construction,
        }
    }
}
