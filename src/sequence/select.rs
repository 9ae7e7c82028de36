//! Positional and key-based selection.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::error::{ChainError, Result};
use crate::hashing::HashBuilder;

/// Keeps the first element seen for each key, preserving order.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::unique_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let firsts: Vec<&str> = unique_by(words.into_iter(), |word| word.chars().next()).collect();
/// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
/// ```
pub fn unique_by<I, F, K>(iterator: I, mut key_function: F) -> impl Iterator<Item = I::Item>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    let mut seen: HashSet<K, HashBuilder> = HashSet::default();
    iterator.filter(move |element| seen.insert(key_function(element)))
}

/// Returns the `k` elements with the largest keys, in descending key order.
///
/// Elements with equal keys keep their original relative order.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::top_k_by;
///
/// let scores = vec![("ann", 3), ("bob", 9), ("cid", 3), ("dee", 7)];
/// let best = top_k_by(scores, 3, |entry| entry.1);
/// assert_eq!(best, vec![("bob", 9), ("dee", 7), ("ann", 3)]);
/// ```
pub fn top_k_by<I, F, K>(iterator: I, k: usize, mut key_function: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    if k == 0 {
        return Vec::new();
    }
    let mut decorated: Vec<(K, I::Item)> = iterator
        .into_iter()
        .map(|element| (key_function(&element), element))
        .collect();
    decorated.sort_by(|left, right| right.0.cmp(&left.0));
    decorated.truncate(k);
    decorated.into_iter().map(|(_, element)| element).collect()
}

/// Returns the last `count` elements.
///
/// At most `count` elements are buffered while the source is walked.
pub fn tail<I: IntoIterator>(iterator: I, count: usize) -> Vec<I::Item> {
    if count == 0 {
        return Vec::new();
    }
    let mut buffer = VecDeque::with_capacity(count);
    for element in iterator {
        if buffer.len() == count {
            buffer.pop_front();
        }
        buffer.push_back(element);
    }
    buffer.into()
}

/// Returns the element at `index`, naming `operation` in the error.
///
/// # Errors
///
/// - [`ChainError::EmptySequence`] if the source yields nothing.
/// - [`ChainError::IndexOutOfRange`] if the source is shorter than `index + 1`.
///
/// # Examples
///
/// ```rust
/// use chaincollections::ChainError;
/// use chaincollections::sequence::nth;
///
/// assert_eq!(nth(10..20, 3, "nth"), Ok(13));
/// assert_eq!(
///     nth(10..12, 5, "nth"),
///     Err(ChainError::IndexOutOfRange { index: 5, length: 2 })
/// );
/// assert_eq!(
///     nth(std::iter::empty::<i32>(), 0, "first"),
///     Err(ChainError::EmptySequence { operation: "first" })
/// );
/// ```
pub fn nth<I: IntoIterator>(iterator: I, index: usize, operation: &'static str) -> Result<I::Item> {
    let mut length = 0;
    for element in iterator {
        if length == index {
            return Ok(element);
        }
        length += 1;
    }
    if length == 0 {
        Err(ChainError::EmptySequence { operation })
    } else {
        Err(ChainError::IndexOutOfRange { index, length })
    }
}

/// Clones the field at `index` out of a row.
///
/// # Errors
///
/// Returns [`ChainError::IndexOutOfRange`] if the row is too short.
pub fn pluck<R, U>(row: &R, index: usize) -> Result<U>
where
    R: AsRef<[U]> + ?Sized,
    U: Clone,
{
    let fields = row.as_ref();
    fields
        .get(index)
        .cloned()
        .ok_or(ChainError::IndexOutOfRange {
            index,
            length: fields.len(),
        })
}

/// Returns `true` if no element occurs twice.
pub fn is_distinct<I>(iterator: I) -> bool
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut seen: HashSet<I::Item, HashBuilder> = HashSet::default();
    iterator.into_iter().all(|element| seen.insert(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![8, 9])]
    #[case(20, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9])]
    fn test_tail(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(tail(0..10, count), expected);
    }

    #[rstest]
    fn test_top_k_ties_keep_original_order() {
        let ranked = top_k_by(vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')], 4, |pair| pair.0);
        assert_eq!(ranked, vec![(2, 'b'), (2, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[rstest]
    fn test_top_k_zero() {
        assert!(top_k_by(0..5, 0, |value| *value).is_empty());
    }

    #[rstest]
    fn test_pluck_out_of_range() {
        let row = [1, 2];
        assert_eq!(
            pluck(&row, 2),
            Err(ChainError::IndexOutOfRange { index: 2, length: 2 })
        );
        assert_eq!(pluck(&row, 1), Ok(2));
    }

    #[rstest]
    #[case(vec![], true)]
    #[case(vec![1, 2, 3], true)]
    #[case(vec![1, 2, 1], false)]
    fn test_is_distinct(#[case] values: Vec<i32>, #[case] expected: bool) {
        assert_eq!(is_distinct(values), expected);
    }

    #[rstest]
    fn test_unique_by_on_infinite_source() {
        let firsts: Vec<u32> = unique_by(0_u32.., |value| value / 10).take(3).collect();
        assert_eq!(firsts, vec![0, 10, 20]);
    }
}
