use std::f64::consts::PI;

use vecmat_core::Matrix;

use crate::error::ProjectionError;

/// Build a 4x4 perspective projection matrix.
///
/// With `f = 1 / tan(fov / 2)` the matrix is
///
/// ```text
/// | f/ratio  0  0               0                      |
/// | 0        f  0               0                      |
/// | 0        0  far/(far-near)  -(far*near)/(far-near) |
/// | 0        0  1               0                      |
/// ```
///
/// It maps view-space depth `near` to 0 and `far` to 1 after the perspective
/// divide, with `w` taken from the view-space `z`.
///
/// # Arguments
///
/// * `fov` - Vertical field of view in radians, within `(0, π)`.
/// * `ratio` - Aspect ratio, width over height.
/// * `near` - Distance to the near clipping plane.
/// * `far` - Distance to the far clipping plane.
///
/// # Example
///
/// ```
/// use vecmat_projection::projection;
///
/// let p = projection(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 2.0).unwrap();
/// assert!((p.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
/// assert_eq!(p.get(3, 2), Some(&1.0));
/// ```
pub fn projection(
    fov: f64,
    ratio: f64,
    near: f64,
    far: f64,
) -> Result<Matrix<f64>, ProjectionError> {
    if !(fov > 0.0 && fov < PI) {
        return Err(ProjectionError::InvalidFieldOfView(fov));
    }
    if !(ratio > 0.0 && ratio.is_finite()) {
        return Err(ProjectionError::InvalidAspectRatio(ratio));
    }
    if !(near > 0.0 && near < far && far.is_finite()) {
        return Err(ProjectionError::InvalidClippingPlanes { near, far });
    }

    let f = 1.0 / (fov / 2.0).tan();
    let depth = far - near;

    Ok(Matrix::from_rows(vec![
        vec![f / ratio, 0.0, 0.0, 0.0],
        vec![0.0, f, 0.0, 0.0],
        vec![0.0, 0.0, far / depth, -(far * near) / depth],
        vec![0.0, 0.0, 1.0, 0.0],
    ])?)
}
