//! Key/value pair used to attach a priority to an unordered payload
//!
//! The heap orders associations by key only, so the payload never needs to
//! be comparable.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Keys that have a total order suitable for heap priorities.
///
/// Floating-point keys use IEEE 754 `totalOrder`, which places `+inf` after
/// every finite distance.
pub trait PriorityKey {
    fn key_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_priority_key_ord {
    ($($ty:ty),*) => {
        $(impl PriorityKey for $ty {
            fn key_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

impl_priority_key_ord!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PriorityKey for f32 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl PriorityKey for f64 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// A mutable `{ key, value }` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Association<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Association<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PriorityKey, V> Association<K, V> {
    /// Comparer that looks at keys only; pass it to `Heap::new`
    pub fn compare_keys(a: &Self, b: &Self) -> Ordering {
        a.key.key_cmp(&b.key)
    }
}

impl<K, V> From<(K, V)> for Association<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
