#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use vecmat_core as types;

#[doc(inline)]
pub use vecmat_linalg as linalg;

#[doc(inline)]
pub use vecmat_ops as ops;

#[doc(inline)]
pub use vecmat_projection as projection;

pub use vecmat_core::{Complex64, Matrix, Scalar, Vector};
pub use vecmat_linalg::MatrixReduction;
