// This file is part of static-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`StaticVec`](crate::StaticVec) and
//! [`EmptyStaticVec`](crate::EmptyStaticVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence of at most `N` elements. Elements are
//!   written straight into the uninitialized buffer as they are decoded, so
//!   `T` needs no `Default`.
//!
//! `EmptyStaticVec<T>` serializes as `[]` and only accepts an empty sequence.

// Crate imports
use crate::{empty::EmptyStaticVec, vec::StaticVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize, const N: usize> Serialize for StaticVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = StaticVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = StaticVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            if !out.push_truncated(elem) {
                return Err(de::Error::custom(format_args!("too many elements (capacity {N})")));
            }
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for StaticVec<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}

impl<T> Serialize for EmptyStaticVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        s.serialize_seq(Some(0))?.end()
    }
}

impl<'de, T> Deserialize<'de> for EmptyStaticVec<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        StaticVec::<T, 0>::deserialize(d).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{EmptyStaticVec, StaticVec};
    use alloc::string::String;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: StaticVec<i32, 5> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: StaticVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<StaticVec<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
    }

    #[test]
    fn test_deserialize_owned_non_default_elements() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Named(String);

        let v: StaticVec<Named, 4> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(v.as_slice(), &[Named(String::from("a")), Named(String::from("b"))]);
    }

    #[test]
    fn test_serde_zst_roundtrip() {
        let v: StaticVec<(), 3> = StaticVec::from_slice_truncated(&[(), ()]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[null,null]");
        let back: StaticVec<(), 3> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        let err = serde_json::from_str::<StaticVec<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }

    #[test]
    fn test_empty_static_vec_serde() {
        let e: EmptyStaticVec<i32> = EmptyStaticVec::new();
        assert_eq!(serde_json::to_string(&e).unwrap(), "[]");
        let back: EmptyStaticVec<i32> = serde_json::from_str("[]").unwrap();
        assert_eq!(back, e);
        assert!(serde_json::from_str::<EmptyStaticVec<i32>>("[1]").is_err());
    }
}
