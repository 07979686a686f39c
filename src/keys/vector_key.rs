use num_traits::{ToBytes, Unsigned};

use crate::keys::KeyTrait;
use crate::Symbol;

/// Owns variable sized key data.
///
/// Text converts to `VectorKey<char>`, one symbol per `char`. Integers convert to
/// `VectorKey<u8>` as big-endian bytes; signed integers have their sign bit flipped first so
/// that byte order matches numeric order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorKey<S> {
    data: Vec<S>,
}

impl<S: Symbol> VectorKey<S> {
    pub fn from_slice(data: &[S]) -> Self {
        Self {
            data: Vec::from(data),
        }
    }

    pub fn from_vec(data: Vec<S>) -> Self {
        Self { data }
    }
}

impl VectorKey<char> {
    pub fn from_str(s: &str) -> Self {
        Self {
            data: s.chars().collect(),
        }
    }
}

impl VectorKey<u8> {
    pub fn from_unsigned<T: Unsigned + ToBytes>(un: T) -> Self {
        Self::from_slice(un.to_be_bytes().as_ref())
    }
}

impl<S: Symbol> KeyTrait<S> for VectorKey<S> {
    fn partial_after(&self, pos: usize) -> &[S] {
        &self.data[pos..]
    }
}

impl<S: Symbol> From<&[S]> for VectorKey<S> {
    fn from(data: &[S]) -> Self {
        Self::from_slice(data)
    }
}

impl<S: Symbol, const N: usize> From<&[S; N]> for VectorKey<S> {
    fn from(data: &[S; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<S: Symbol> From<Vec<S>> for VectorKey<S> {
    fn from(data: Vec<S>) -> Self {
        Self::from_vec(data)
    }
}

impl<S: Symbol> From<&VectorKey<S>> for VectorKey<S> {
    fn from(key: &VectorKey<S>) -> Self {
        key.clone()
    }
}

impl From<&str> for VectorKey<char> {
    fn from(data: &str) -> Self {
        Self::from_str(data)
    }
}

impl From<String> for VectorKey<char> {
    fn from(data: String) -> Self {
        Self::from_str(&data)
    }
}

impl From<&String> for VectorKey<char> {
    fn from(data: &String) -> Self {
        Self::from_str(data)
    }
}

macro_rules! unsigned_key {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VectorKey<u8> {
                fn from(data: $t) -> Self {
                    Self::from_unsigned(data)
                }
            }
        )*
    };
}

unsigned_key!(u8, u16, u32, u64, u128, usize);

// Flipping the sign bit maps MIN..=MAX onto 0..=unsigned MAX monotonically:
// -128 => 0, -1 => 127, 0 => 128, 127 => 255.
macro_rules! signed_key {
    ($($t:ty => $u:ty),*) => {
        $(
            impl From<$t> for VectorKey<u8> {
                fn from(val: $t) -> Self {
                    let flipped = (val as $u) ^ (1 << (<$u>::BITS - 1));
                    Self::from_unsigned(flipped)
                }
            }
        )*
    };
}

signed_key!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
