use vecmat_core::{CoreError, Scalar, Vector};

use crate::error::OpsError;

/// Cosine of the angle between two vectors.
///
/// For complex vectors the real part of the Hermitian inner product is used,
/// so the result is always a real number in `[-1, 1]`.
///
/// # Errors
///
/// * A dimension error if the vectors differ in size.
/// * [`OpsError::ZeroLengthVector`] if either vector has norm zero.
pub fn angle_cos<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<f64, OpsError> {
    let inner = u.dot(v)?;
    let (nu, nv) = (u.norm(), v.norm());
    if nu == 0.0 || nv == 0.0 {
        return Err(OpsError::ZeroLengthVector);
    }
    Ok(inner.re() / (nu * nv))
}

/// Cross product of two 3-vectors.
///
/// # Example
///
/// ```
/// use vecmat_core::Vector;
/// use vecmat_ops::cross_product;
///
/// let x = Vector::from_vec(vec![1.0, 0.0, 0.0]).unwrap();
/// let y = Vector::from_vec(vec![0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(cross_product(&x, &y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
/// ```
pub fn cross_product<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<Vector<T>, OpsError> {
    let (a, b) = match (u.as_slice(), v.as_slice()) {
        (&[a0, a1, a2], &[b0, b1, b2]) => ([a0, a1, a2], [b0, b1, b2]),
        _ => {
            return Err(CoreError::dimension_mismatch(
                "Cross product is only defined for 3-dimensional vectors",
                &[3, 3],
                &[u.size(), v.size()],
            )
            .into())
        }
    };
    Ok(Vector::from_vec(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])?)
}
