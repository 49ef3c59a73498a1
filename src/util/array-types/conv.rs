/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions to and from plain data.

use crate::types::*;

impl<X, const N: usize, S, D> AsRef<[X]> for Matrix<X, N, S, D> {
    #[inline(always)]
    fn as_ref(&self) -> &[X]
    { self.as_flat() }
}

impl<X, const N: usize, F> AsRef<[X]> for Vector<X, N, F> {
    #[inline(always)]
    fn as_ref(&self) -> &[X]
    { &self.data[..] }
}

impl<X, const N: usize, F> AsRef<[X; N]> for Vector<X, N, F> {
    #[inline(always)]
    fn as_ref(&self) -> &[X; N]
    { &self.data }
}

/// Matrices serialize as `N * N` scalars in column-major order, the same
/// layout as `as_flat`. Vectors serialize as `N` scalars.
///
/// Frame tags are not serialized.
#[cfg(feature = "serde-support")]
mod serde_impls {
    use super::*;

    use serde::{Serialize, Serializer, Deserialize, Deserializer};
    use serde::de::Error;
    use serde::ser::SerializeTuple;

    impl<X: Serialize, const N: usize, S, D> Serialize for Matrix<X, N, S, D> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            let flat = self.as_flat();
            let mut tup = serializer.serialize_tuple(flat.len())?;
            for x in flat {
                tup.serialize_element(x)?;
            }
            tup.end()
        }
    }

    impl<X: Serialize, const N: usize, F> Serialize for Vector<X, N, F> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            let mut tup = serializer.serialize_tuple(N)?;
            for x in &self.data {
                tup.serialize_element(x)?;
            }
            tup.end()
        }
    }

    // serde only implements Deserialize for arrays up to 32 elements with
    // no const generics, so go through a Vec.
    fn deserialize_exact<'de, De, X>(deserializer: De, len: usize) -> Result<Vec<X>, De::Error>
    where
        De: Deserializer<'de>,
        X: Deserialize<'de>,
    {
        let vec = Vec::<X>::deserialize(deserializer)?;
        if vec.len() != len {
            let expected = format!("a sequence of {} scalars", len);
            return Err(De::Error::invalid_length(vec.len(), &&expected[..]));
        }
        Ok(vec)
    }

    impl<'de, X: Deserialize<'de> + Copy, const N: usize, S, D> Deserialize<'de> for Matrix<X, N, S, D> {
        fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
            let flat = deserialize_exact(deserializer, N * N)?;
            Ok(Matrix::from_col_major_slice(&flat))
        }
    }

    impl<'de, X: Deserialize<'de> + Copy, const N: usize, F> Deserialize<'de> for Vector<X, N, F> {
        fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
            let vec = deserialize_exact::<_, X>(deserializer, N)?;
            Ok(Vector::from_fn(|i| vec[i]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_ref() {
        let m = M22::<f32>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let flat: &[f32] = m.as_ref();
        assert_eq!(flat, &[1.0, 3.0, 2.0, 4.0]);

        let v = V3::<i32>::new([1, 2, 3]);
        let slice: &[i32] = v.as_ref();
        assert_eq!(slice, &[1, 2, 3]);
    }

    #[cfg(feature = "serde-support")]
    #[test]
    fn serde() {
        let m = M22::<f64>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[1.0,3.0,2.0,4.0]");
        assert_eq!(serde_json::from_str::<M22<f64>>(&json).unwrap(), m);

        let v: V3<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(v.into_array(), [1, 2, 3]);

        assert!(serde_json::from_str::<M22<f64>>("[1.0,2.0,3.0]").is_err());
        assert!(serde_json::from_str::<V2<f64>>("[1.0,2.0,3.0]").is_err());
    }
}
