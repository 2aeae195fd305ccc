#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the projection module.
pub mod error;

/// Perspective projection builder.
pub mod perspective;

/// Plain-text matrix reader and writer.
pub mod text;

pub use error::ProjectionError;
pub use perspective::projection;
pub use text::{read_matrix_txt, write_matrix_txt};
