//! Order-sensitive hash combination.

use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

/// Folds a sequence of hashable values into a single code.
///
/// The result depends on every value and on the order values were added.
/// `DefaultHasher::new()` is unkeyed, so codes are stable for a given
/// toolchain and can be compared across instances within a process.
#[derive(Debug, Clone)]
pub struct HashCombiner {
    state: DefaultHasher,
}

impl HashCombiner {
    /// Start a combination for a sequence of `len` values.
    ///
    /// Seeding with the length keeps `[]` and `[x]` style prefixes apart
    /// even when an element hashes to nothing.
    pub fn with_len(len: usize) -> Self {
        let mut state = DefaultHasher::new();
        state.write_usize(len);
        Self { state }
    }

    pub fn add<H: Hash + ?Sized>(&mut self, value: &H) {
        value.hash(&mut self.state);
    }

    pub fn finish(self) -> u64 {
        self.state.finish()
    }

    /// Combine every item of `values` in order.
    pub fn combine<'a, H, I>(values: I) -> u64
    where
        H: Hash + 'a,
        I: IntoIterator<Item = &'a H>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let mut combiner = Self::with_len(values.len());
        for value in values {
            combiner.add(value);
        }
        combiner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_produce_different_codes() {
        let a = HashCombiner::combine(&[1, 2, 5, 8, 13]);
        let b = HashCombiner::combine(&[1, 5, 2, 13, 8]);
        assert_ne!(a, b);
    }

    #[test]
    fn same_sequence_same_code() {
        let a = HashCombiner::combine(&["one", "two"]);
        let owned = vec!["one", "two"];
        let b = HashCombiner::combine(&owned);
        assert_eq!(a, b);
    }

    #[test]
    fn absent_elements_contribute() {
        let with_none = HashCombiner::combine(&[Some(1), None, Some(3)]);
        let with_zero = HashCombiner::combine(&[Some(1), Some(0), Some(3)]);
        assert_ne!(with_none, with_zero);
    }

    #[test]
    fn empty_sequences_agree() {
        let empty: [u8; 0] = [];
        assert_eq!(HashCombiner::combine(&empty), HashCombiner::with_len(0).finish());
    }
}
