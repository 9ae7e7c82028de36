//! Splitting a stream into consecutive groups.

use std::iter::{Fuse, Peekable};

// =============================================================================
// Chunks
// =============================================================================

/// Splits an iterator into consecutive groups of a fixed size.
///
/// Built with [`Chunks::exact`] the trailing short group is dropped; built
/// with [`Chunks::all`] it is kept as a shorter final group. No padding is
/// ever inserted.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::Chunks;
///
/// let exact: Vec<Vec<i32>> = Chunks::exact(0..10, 3).collect();
/// assert_eq!(exact, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
///
/// let all: Vec<Vec<i32>> = Chunks::all(0..10, 4).collect();
/// assert_eq!(all, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]]);
/// ```
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    iterator: Fuse<I>,
    size: usize,
    keep_remainder: bool,
}

impl<I: Iterator> Chunks<I> {
    /// Groups of exactly `size` elements; a short trailing group is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn exact(iterator: I, size: usize) -> Self {
        Self::build(iterator, size, false)
    }

    /// Groups of `size` elements; a short trailing group is kept.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn all(iterator: I, size: usize) -> Self {
        Self::build(iterator, size, true)
    }

    fn build(iterator: I, size: usize, keep_remainder: bool) -> Self {
        assert!(size != 0, "chunk size must be non-zero");
        Self {
            iterator: iterator.fuse(),
            size,
            keep_remainder,
        }
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.iterator.by_ref().take(self.size).collect();
        if chunk.is_empty() || (chunk.len() < self.size && !self.keep_remainder) {
            None
        } else {
            Some(chunk)
        }
    }
}

// =============================================================================
// PartitionBy
// =============================================================================

/// Splits an iterator into runs of consecutive elements sharing a key.
///
/// A new group starts every time the key function returns a value different
/// from the previous element's key.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::PartitionBy;
///
/// let runs: Vec<Vec<i32>> = PartitionBy::new([1, 3, 2, 4, 5].into_iter(), |value| value % 2)
///     .collect();
/// assert_eq!(runs, vec![vec![1, 3], vec![2, 4], vec![5]]);
/// ```
pub struct PartitionBy<I: Iterator, F> {
    iterator: Peekable<I>,
    key_function: F,
}

impl<I: Iterator, F> PartitionBy<I, F> {
    /// Creates a run splitter over `iterator` keyed by `key_function`.
    pub fn new<K>(iterator: I, key_function: F) -> Self
    where
        F: FnMut(&I::Item) -> K,
        K: PartialEq,
    {
        Self {
            iterator: iterator.peekable(),
            key_function,
        }
    }
}

impl<I, F, K> Iterator for PartitionBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iterator.next()?;
        let key = (self.key_function)(&first);
        let mut run = vec![first];
        while let Some(element) = self
            .iterator
            .next_if(|candidate| (self.key_function)(candidate) == key)
        {
            run.push(element);
        }
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 3, vec![])]
    #[case(2, 3, vec![])]
    #[case(3, 3, vec![vec![0, 1, 2]])]
    #[case(10, 3, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]])]
    fn test_exact_chunks_drop_remainder(
        #[case] length: i32,
        #[case] size: usize,
        #[case] expected: Vec<Vec<i32>>,
    ) {
        let chunks: Vec<Vec<i32>> = Chunks::exact(0..length, size).collect();
        assert_eq!(chunks, expected);
    }

    #[rstest]
    #[case(0, 4, vec![])]
    #[case(2, 4, vec![vec![0, 1]])]
    #[case(10, 4, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]])]
    fn test_all_chunks_keep_remainder(
        #[case] length: i32,
        #[case] size: usize,
        #[case] expected: Vec<Vec<i32>>,
    ) {
        let chunks: Vec<Vec<i32>> = Chunks::all(0..length, size).collect();
        assert_eq!(chunks, expected);
    }

    #[rstest]
    fn test_chunks_on_infinite_source() {
        let chunks: Vec<Vec<u64>> = Chunks::exact(0_u64.., 2).take(3).collect();
        assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    }

    #[rstest]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn test_chunks_zero_size_panics() {
        let _ = Chunks::all(0..3, 0);
    }

    #[rstest]
    fn test_partition_by_single_run() {
        let runs: Vec<Vec<&str>> = PartitionBy::new(["a", "b"].into_iter(), |_| ()).collect();
        assert_eq!(runs, vec![vec!["a", "b"]]);
    }

    #[rstest]
    fn test_partition_by_untyped_closure() {
        let runs: Vec<Vec<i32>> = PartitionBy::new([1, 3, 2, 4, 5].into_iter(), |value| value % 2).collect();
        assert_eq!(runs, vec![vec![1, 3], vec![2, 4], vec![5]]);
    }

    #[rstest]
    fn test_partition_by_empty() {
        let runs: Vec<Vec<i32>> = PartitionBy::new(std::iter::empty(), |value: &i32| *value).collect();
        assert!(runs.is_empty());
    }
}
