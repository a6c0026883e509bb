//! Immutable, fixed-length arrays compared by content.
//!
//! A [`ValueArray`] copies its input once, hashes it once, and never changes
//! afterwards. Equality is structural and order-sensitive, which makes the
//! type usable as a field of larger value objects that derive `PartialEq`,
//! `Eq` and `Hash`.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ValueArrayError, ValueArrayResult};
use crate::hash::HashCombiner;

/// Read-only, order-sensitive container with value semantics.
///
/// Two arrays are equal when they have the same length and equal elements at
/// every position. Absent elements are expressed as `Option<U>`; two `None`s
/// in the same position compare equal.
///
/// ```
/// use valuearrays_core::ValueArray;
///
/// let array = ValueArray::from(vec!["one", "two", "three"]);
/// let copy: ValueArray<_> = array.iter().copied().collect();
/// let other = ValueArray::from(vec!["two", "one", "three"]);
///
/// assert_eq!(array, copy);
/// assert_eq!(array.hash_code(), copy.hash_code());
/// assert_ne!(array, other);
/// ```
#[derive(Clone)]
pub struct ValueArray<T> {
    values: Box<[T]>,
    hash: u64,
}

impl<T: Hash> ValueArray<T> {
    fn from_boxed(values: Box<[T]>) -> Self {
        let hash = HashCombiner::combine(values.iter());
        tracing::trace!(length = values.len(), hash, "value array constructed");
        Self { values, hash }
    }
}

impl<T: Clone + Hash> ValueArray<T> {
    /// Build an array from an optional source sequence.
    ///
    /// The elements are cloned into storage owned by the array (a shallow
    /// copy: `Rc`/`Arc` elements still share their pointee). Fails with
    /// [`ValueArrayError::InvalidArgument`] when `source` is absent.
    pub fn try_new(source: Option<&[T]>) -> ValueArrayResult<Self> {
        let Some(source) = source else {
            tracing::debug!("rejected value array construction: source is absent");
            return Err(ValueArrayError::invalid_argument("source sequence is absent"));
        };
        Ok(Self::from_slice(source))
    }

    /// Build an array from a borrowed slice, copying its elements.
    pub fn from_slice(source: &[T]) -> Self {
        Self::from_boxed(source.into())
    }
}

impl<T> ValueArray<T> {
    /// Number of elements, fixed at construction.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The combined hash computed at construction.
    pub fn hash_code(&self) -> u64 {
        self.hash
    }

    /// Element at `index`, failing for negative or too-large positions.
    pub fn at(&self, index: isize) -> ValueArrayResult<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.values.get(i))
            .ok_or_else(|| {
                tracing::debug!(index, length = self.len(), "value array index out of range");
                ValueArrayError::index_out_of_range(index, self.len())
            })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterate the elements in stored order.
    ///
    /// Every call starts a fresh pass from the first element.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.contains(value)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.to_vec()
    }

    /// Equality against an optional right-hand side; absent is never equal.
    pub fn equals_opt(&self, other: Option<&Self>) -> bool
    where
        T: PartialEq,
    {
        other.is_some_and(|other| self == other)
    }

    /// Equality against a value of unknown type.
    ///
    /// Returns false unless `other` is a `ValueArray` with the same element
    /// type and equal content.
    pub fn equals_any(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// `==` over possibly absent arrays: two absent arrays are equal, one
    /// absent and one present are not.
    pub fn eq_nullable(left: Option<&Self>, right: Option<&Self>) -> bool
    where
        T: PartialEq,
    {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

impl<T: PartialEq> PartialEq for ValueArray<T> {
    fn eq(&self, other: &Self) -> bool {
        // Matching hashes may still collide, so elements are always compared.
        self.values.len() == other.values.len()
            && self.hash == other.hash
            && self.values.iter().zip(other.values.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for ValueArray<T> {}

impl<T> Hash for ValueArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T> Default for ValueArray<T> {
    fn default() -> Self {
        Self {
            values: Vec::new().into_boxed_slice(),
            hash: HashCombiner::with_len(0).finish(),
        }
    }
}

impl<T> Index<usize> for ValueArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.values.get(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                ValueArrayError::index_out_of_range(
                    isize::try_from(index).unwrap_or(isize::MAX),
                    self.len()
                )
            ),
        }
    }
}

impl<T> AsRef<[T]> for ValueArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T: Hash> From<Vec<T>> for ValueArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_boxed(values.into_boxed_slice())
    }
}

impl<T: Hash, const N: usize> From<[T; N]> for ValueArray<T> {
    fn from(values: [T; N]) -> Self {
        let values: Box<[T]> = Box::new(values);
        Self::from_boxed(values)
    }
}

impl<T: Clone + Hash> From<&[T]> for ValueArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Hash> FromIterator<T> for ValueArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_boxed(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ValueArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> IntoIterator for ValueArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_vec().into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ValueArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

// The hash is derived data: only elements go over the wire.
impl<T: Serialize> Serialize for ValueArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

impl<'de, T: Deserialize<'de> + Hash> Deserialize<'de> for ValueArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
