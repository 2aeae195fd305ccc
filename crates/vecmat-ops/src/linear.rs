use vecmat_core::Scalar;

use crate::{error::OpsError, space::VectorSpace};

/// Compute `Σ coefficients[i] * objects[i]`.
///
/// # Arguments
///
/// * `objects` - The vectors, matrices or scalars to combine.
/// * `coefficients` - One coefficient per object.
///
/// # Errors
///
/// * [`OpsError::EmptyCombination`] if `objects` is empty.
/// * [`OpsError::MismatchedCoefficients`] if the two slices differ in length.
/// * A dimension error if the objects do not all share one shape.
///
/// # Example
///
/// ```
/// use vecmat_core::Vector;
/// use vecmat_ops::linear_combination;
///
/// let e1 = Vector::from_vec(vec![1.0, 0.0, 0.0]).unwrap();
/// let e2 = Vector::from_vec(vec![0.0, 1.0, 0.0]).unwrap();
/// let e3 = Vector::from_vec(vec![0.0, 0.0, 1.0]).unwrap();
/// let v = linear_combination(&[e1, e2, e3], &[10.0, -2.0, 0.5]).unwrap();
/// assert_eq!(v.as_slice(), &[10.0, -2.0, 0.5]);
/// ```
pub fn linear_combination<V: VectorSpace>(
    objects: &[V],
    coefficients: &[V::Field],
) -> Result<V, OpsError> {
    if objects.len() != coefficients.len() {
        return Err(OpsError::MismatchedCoefficients {
            objects: objects.len(),
            coefficients: coefficients.len(),
        });
    }
    let mut terms = objects.iter().zip(coefficients.iter());
    let Some((first, &k)) = terms.next() else {
        return Err(OpsError::EmptyCombination);
    };
    terms.try_fold(first.scale_by(k), |acc, (obj, &k)| {
        acc.checked_add(&obj.scale_by(k))
    })
}

/// Linear interpolation `(1 - t)·u + t·v`.
///
/// # Errors
///
/// * [`OpsError::InvalidInterpolationFactor`] unless `t` is finite and in `[0, 1]`.
/// * A dimension error if `u` and `v` differ in shape.
///
/// # Example
///
/// ```
/// use vecmat_ops::lerp;
///
/// assert!((lerp(&21.0, &42.0, 0.3).unwrap() - 27.3).abs() < 1e-9);
/// assert!(lerp(&0.0, &1.0, 1.5).is_err());
/// ```
pub fn lerp<V: VectorSpace>(u: &V, v: &V, t: f64) -> Result<V, OpsError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(OpsError::InvalidInterpolationFactor(t));
    }
    u.scale_by(V::Field::from_real(1.0 - t))
        .checked_add(&v.scale_by(V::Field::from_real(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vecmat_core::{Complex64, CoreError, ErrorKind, Matrix, Vector};

    fn vec(data: &[f64]) -> Vector<f64> {
        Vector::from_slice(data).unwrap()
    }

    fn mat(rows: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn linear_combination_vectors() -> Result<(), OpsError> {
        let e1 = vec(&[1.0, 0.0, 0.0]);
        let e2 = vec(&[0.0, 1.0, 0.0]);
        let e3 = vec(&[0.0, 0.0, 1.0]);
        let v1 = vec(&[1.0, 2.0, 3.0]);
        let v2 = vec(&[0.0, 10.0, -100.0]);

        let r = linear_combination(&[e1, e2, e3], &[10.0, -2.0, 0.5])?;
        assert_eq!(r, vec(&[10.0, -2.0, 0.5]));

        let r = linear_combination(&[v1, v2], &[10.0, -2.0])?;
        assert_eq!(r, vec(&[10.0, 0.0, 230.0]));

        let single = linear_combination(&[vec(&[2.0, -1.0])], &[3.0])?;
        assert_eq!(single, vec(&[6.0, -3.0]));
        Ok(())
    }

    #[test]
    fn linear_combination_matrices_and_scalars() -> Result<(), OpsError> {
        let a = mat(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let b = mat(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let r = linear_combination(&[a, b], &[2.0, 3.0])?;
        assert_eq!(r, mat(&[&[2.0, 3.0], &[3.0, 2.0]]));

        let r = linear_combination(&[1.5, 2.0, -4.0], &[2.0, 0.5, 0.25])?;
        assert_relative_eq!(r, 3.0);

        let i = Complex64::new(0.0, 1.0);
        let r = linear_combination(&[i, Complex64::new(1.0, 0.0)], &[i, i])?;
        assert_eq!(r, Complex64::new(-1.0, 1.0));
        Ok(())
    }

    #[test]
    fn linear_combination_errors() {
        let empty: [Vector<f64>; 0] = [];
        let err = linear_combination(&empty, &[]).unwrap_err();
        assert_eq!(err, OpsError::EmptyCombination);
        assert_eq!(err.kind(), ErrorKind::Construction);

        let err = linear_combination(&[vec(&[1.0]), vec(&[2.0])], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            OpsError::MismatchedCoefficients {
                objects: 2,
                coefficients: 1
            }
        );
        assert_eq!(err.kind(), ErrorKind::Dimension);

        let err = linear_combination(&[vec(&[1.0, 2.0]), vec(&[1.0])], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, OpsError::Core(CoreError::DimensionMismatch { .. })));
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }

    #[test]
    fn lerp_scalars() -> Result<(), OpsError> {
        assert_relative_eq!(lerp(&0.0, &1.0, 0.0)?, 0.0);
        assert_relative_eq!(lerp(&0.0, &1.0, 1.0)?, 1.0);
        assert_relative_eq!(lerp(&0.0, &1.0, 0.5)?, 0.5);
        assert_relative_eq!(lerp(&21.0, &42.0, 0.3)?, 27.3, epsilon = 1e-9);

        let z = lerp(&Complex64::new(0.0, 0.0), &Complex64::new(2.0, -4.0), 0.25)?;
        assert_eq!(z, Complex64::new(0.5, -1.0));
        Ok(())
    }

    #[test]
    fn lerp_vectors_and_matrices() -> Result<(), OpsError> {
        let r = lerp(&vec(&[2.0, 1.0]), &vec(&[4.0, 2.0]), 0.3)?;
        assert!(r.approx_eq(&vec(&[2.6, 1.3])));

        let r = lerp(
            &mat(&[&[2.0, 1.0], &[3.0, 4.0]]),
            &mat(&[&[20.0, 10.0], &[30.0, 40.0]]),
            0.5,
        )?;
        assert!(r.approx_eq(&mat(&[&[11.0, 5.5], &[16.5, 22.0]])));
        Ok(())
    }

    #[test]
    fn lerp_rejects_bad_factor() {
        for t in [-0.1, 1.0001, f64::NAN, f64::INFINITY] {
            let err = lerp(&0.0, &1.0, t).unwrap_err();
            assert!(matches!(err, OpsError::InvalidInterpolationFactor(_)));
            assert_eq!(err.kind(), ErrorKind::Domain);
        }
        assert!(lerp(&vec(&[1.0]), &vec(&[1.0, 2.0]), 0.5).is_err());
    }
}
