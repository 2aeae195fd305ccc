use crate::{Matrix, Scalar, Vector};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T> serde::Serialize for Vector<T>
where
    T: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Vector", 1)?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Vector<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct VectorData<T> {
            data: Vec<T>,
        }

        let VectorData { data } = VectorData::deserialize(deserializer)?;
        Vector::from_vec(data).map_err(serde::de::Error::custom)
    }
}

impl<T> serde::Serialize for Matrix<T>
where
    T: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let (rows, cols) = self.shape();
        let mut state = serializer.serialize_struct("Matrix", 2)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("shape", &[rows, cols])?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            data: Vec<T>,
            shape: Vec<usize>,
        }

        let MatrixData { data, shape } = MatrixData::deserialize(deserializer)?;

        let shape_array: [usize; 2] = shape
            .try_into()
            .map_err(|_| serde::de::Error::custom("Invalid shape"))?;

        Matrix::from_shape_vec(shape_array, data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_serde_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
        let serialized = serde_json::to_string(&m)?;
        assert_eq!(serialized, r#"{"data":[1.0,2.0,3.0,4.0,5.0,6.0],"shape":[2,3]}"#);
        let deserialized: Matrix<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(m, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_vector_complex() -> Result<(), Box<dyn std::error::Error>> {
        let v = Vector::from_vec(vec![Complex64::new(1.0, -1.0), Complex64::new(0.0, 2.0)])?;
        let serialized = serde_json::to_string(&v)?;
        let deserialized: Vector<Complex64> = serde_json::from_str(&serialized)?;
        assert_eq!(v, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let bad_shape =
            serde_json::from_str::<Matrix<f64>>(r#"{"data":[1.0,2.0,3.0],"shape":[2,2]}"#);
        assert!(bad_shape.is_err());
        let empty = serde_json::from_str::<Vector<f64>>(r#"{"data":[]}"#);
        assert!(empty.is_err());
    }
}
