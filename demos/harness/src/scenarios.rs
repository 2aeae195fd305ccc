use std::f64::consts::FRAC_PI_2;

use vecmat::{
    linalg::{determinant, inverse, rank, row_echelon},
    ops::{angle_cos, cross_product, lerp, linear_combination},
    projection::projection,
    types::ErrorKind,
    Complex64, Matrix, Vector,
};

pub type ScenarioResult = Result<bool, Box<dyn std::error::Error>>;

/// A named check with a closure returning whether it passed.
pub struct Scenario {
    pub group: &'static str,
    pub name: &'static str,
    pub run: fn() -> ScenarioResult,
}

fn mat(rows: &[&[f64]]) -> Result<Matrix<f64>, vecmat::types::CoreError> {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect())
}

fn cmat(rows: &[&[(f64, f64)]]) -> Result<Matrix<Complex64>, vecmat::types::CoreError> {
    Matrix::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&(re, im)| Complex64::new(re, im)).collect())
            .collect(),
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            group: "vector",
            name: "add, sub and scale",
            run: || {
                let u = Vector::from_vec(vec![2.0, 3.0])?;
                let v = Vector::from_vec(vec![5.0, 7.0])?;
                Ok(u.add(&v)?.as_slice() == [7.0, 10.0]
                    && u.sub(&v)?.as_slice() == [-3.0, -4.0]
                    && u.scale(2.0).as_slice() == [4.0, 6.0])
            },
        },
        Scenario {
            group: "vector",
            name: "norms",
            run: || {
                let v = Vector::from_vec(vec![-1.0, -2.0])?;
                Ok(close(v.norm_1(), 3.0)
                    && close(v.norm(), 5f64.sqrt())
                    && close(v.norm_inf(), 2.0))
            },
        },
        Scenario {
            group: "vector",
            name: "size mismatch is rejected",
            run: || {
                let u = Vector::from_vec(vec![1.0, 2.0])?;
                let v = Vector::from_vec(vec![1.0, 2.0, 3.0])?;
                Ok(u.add(&v).is_err_and(|e| e.kind() == ErrorKind::Dimension))
            },
        },
        Scenario {
            group: "ops",
            name: "linear combination",
            run: || {
                let e = [
                    Vector::from_vec(vec![1.0, 0.0, 0.0])?,
                    Vector::from_vec(vec![0.0, 1.0, 0.0])?,
                    Vector::from_vec(vec![0.0, 0.0, 1.0])?,
                ];
                let r = linear_combination(&e, &[10.0, -2.0, 0.5])?;
                Ok(r.as_slice() == [10.0, -2.0, 0.5])
            },
        },
        Scenario {
            group: "ops",
            name: "lerp",
            run: || {
                let m = lerp(
                    &mat(&[&[2.0, 1.0], &[3.0, 4.0]])?,
                    &mat(&[&[20.0, 10.0], &[30.0, 40.0]])?,
                    0.5,
                )?;
                Ok(close(lerp(&21.0, &42.0, 0.3)?, 27.3)
                    && m.approx_eq(&mat(&[&[11.0, 5.5], &[16.5, 22.0]])?))
            },
        },
        Scenario {
            group: "ops",
            name: "angle cosine and cross product",
            run: || {
                let u = Vector::from_vec(vec![1.0, 2.0, 3.0])?;
                let v = Vector::from_vec(vec![4.0, 5.0, 6.0])?;
                Ok(close(angle_cos(&u, &v)?, 0.9746318461970762)
                    && cross_product(&u, &v)?.as_slice() == [-3.0, 6.0, -3.0])
            },
        },
        Scenario {
            group: "matrix",
            name: "products and transpose",
            run: || {
                let a = mat(&[&[2.0, 1.0], &[4.0, 2.0]])?;
                let b = mat(&[&[2.0, -2.0], &[-2.0, 2.0]])?;
                let v = Vector::from_vec(vec![4.0, 2.0])?;
                Ok(a.mul_vec(&v)?.as_slice() == [10.0, 20.0]
                    && a.mul_mat(&b)? == mat(&[&[2.0, -2.0], &[4.0, -4.0]])?
                    && a.transpose() == mat(&[&[2.0, 4.0], &[1.0, 2.0]])?)
            },
        },
        Scenario {
            group: "matrix",
            name: "trace",
            run: || {
                let m = mat(&[&[-2.0, -8.0, 4.0], &[1.0, -23.0, 4.0], &[0.0, 6.0, 4.0]])?;
                Ok(close(m.trace()?, -21.0))
            },
        },
        Scenario {
            group: "reduction",
            name: "row echelon form",
            run: || {
                let m = mat(&[
                    &[8.0, 5.0, -2.0, 4.0, 28.0],
                    &[4.0, 2.5, 20.0, 4.0, -4.0],
                    &[8.0, 5.0, 1.0, 4.0, 17.0],
                ])?;
                let expected = mat(&[
                    &[1.0, 0.625, 0.0, 0.0, -12.1666667],
                    &[0.0, 0.0, 1.0, 0.0, -3.6666667],
                    &[0.0, 0.0, 0.0, 1.0, 29.5],
                ])?;
                Ok(row_echelon(&m)?.approx_eq(&expected))
            },
        },
        Scenario {
            group: "reduction",
            name: "complex row echelon form",
            run: || {
                let m = cmat(&[&[(1.0, 1.0), (2.0, 0.0)], &[(3.0, 0.0), (4.0, 0.0)]])?;
                Ok(row_echelon(&m)?.approx_eq(&Matrix::identity(2)?))
            },
        },
        Scenario {
            group: "reduction",
            name: "determinant",
            run: || {
                let m3 = mat(&[&[8.0, 5.0, -2.0], &[4.0, 7.0, 20.0], &[7.0, 6.0, 1.0]])?;
                let m4 = mat(&[
                    &[8.0, 5.0, -2.0, 4.0],
                    &[4.0, 2.5, 20.0, 4.0],
                    &[8.0, 5.0, 1.0, 4.0],
                    &[28.0, -4.0, 17.0, 1.0],
                ])?;
                Ok(close(determinant(&m3)?, -174.0) && close(determinant(&m4)?, 1032.0))
            },
        },
        Scenario {
            group: "reduction",
            name: "determinant above 4x4 is unsupported",
            run: || {
                let m = Matrix::<f64>::identity(5)?;
                Ok(determinant(&m).is_err_and(|e| e.kind() == ErrorKind::Capability))
            },
        },
        Scenario {
            group: "reduction",
            name: "inverse",
            run: || {
                let m = mat(&[&[8.0, 5.0, -2.0], &[4.0, 7.0, 20.0], &[7.0, 6.0, 1.0]])?;
                let expected = mat(&[
                    &[0.649425287, 0.097701149, -0.655172414],
                    &[-0.781609195, -0.126436782, 0.965517241],
                    &[0.143678161, 0.074712644, -0.206896552],
                ])?;
                Ok(inverse(&m)?.approx_eq(&expected))
            },
        },
        Scenario {
            group: "reduction",
            name: "singular matrix has no inverse",
            run: || {
                let m = mat(&[&[1.0, 2.0], &[2.0, 4.0]])?;
                Ok(inverse(&m).is_err_and(|e| e.kind() == ErrorKind::Domain))
            },
        },
        Scenario {
            group: "reduction",
            name: "rank",
            run: || {
                let m = mat(&[
                    &[1.0, 2.0, 0.0, 0.0],
                    &[2.0, 4.0, 0.0, 0.0],
                    &[-1.0, 2.0, 1.0, 1.0],
                ])?;
                Ok(rank(&m) == 2 && rank(&Matrix::<f64>::zeros(3, 3)?) == 0)
            },
        },
        Scenario {
            group: "projection",
            name: "perspective matrix",
            run: || {
                let p = projection(FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0)?;
                Ok(close(p[(1, 1)], 1.0) && close(p[(0, 0)], 9.0 / 16.0) && p[(3, 2)] == 1.0)
            },
        },
    ]
}
