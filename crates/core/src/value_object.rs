//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal and
//! hash alike.

use core::fmt::Debug;
use core::hash::Hash;

use crate::hash::HashCombiner;
use crate::value_array::ValueArray;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A struct that
/// derives `PartialEq`, `Eq` and `Hash` composes its equality from its
/// fields, so a [`ValueArray`] field keeps the aggregate comparable by
/// content (a `Vec` would too, but could be mutated through `&mut`, and a
/// `Box<[T]>` re-hashes every element on every lookup).
///
/// ```
/// use valuearrays_core::{ValueArray, ValueObject};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Line {
///     points: ValueArray<String>,
/// }
///
/// impl ValueObject for Line {}
///
/// let a = Line { points: ValueArray::from(vec!["a".to_string(), "b".to_string()]) };
/// let b = Line { points: ValueArray::from(vec!["a".to_string(), "b".to_string()]) };
/// assert_eq!(a, b);
/// assert_eq!(a.value_hash(), b.value_hash());
/// ```
pub trait ValueObject: Clone + Eq + Hash + Debug {
    /// Deterministic content hash, stable within a process.
    fn value_hash(&self) -> u64 {
        HashCombiner::combine([self])
    }
}

impl<T> ValueObject for ValueArray<T> where T: Clone + Eq + Hash + Debug {}
