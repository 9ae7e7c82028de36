//! Combinators that merge, separate or accumulate elements.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::iter::Peekable;

use crate::hashing::HashBuilder;

// =============================================================================
// Interleave / ZipWith / Diff
// =============================================================================

/// Alternates elements of two iterators, stopping at the shorter one.
///
/// With `swap` set the right-hand iterator leads. The output always contains
/// `2 * min(left, right)` elements; a trailing unmatched element is dropped.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::interleave;
///
/// let merged: Vec<i32> = interleave([1, 2, 3].into_iter(), [10, 20].into_iter(), false).collect();
/// assert_eq!(merged, vec![1, 10, 2, 20]);
///
/// let swapped: Vec<i32> = interleave([1, 2].into_iter(), [10, 20].into_iter(), true).collect();
/// assert_eq!(swapped, vec![10, 1, 20, 2]);
/// ```
pub fn interleave<I, J>(left: I, right: J, swap: bool) -> impl Iterator<Item = I::Item>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    left.zip(right).flat_map(move |(first, second)| {
        if swap {
            [second, first]
        } else {
            [first, second]
        }
    })
}

/// Combines two iterators element-wise, stopping at the shorter one.
pub fn zip_with<I, J, F, U>(left: I, right: J, mut function: F) -> impl Iterator<Item = U>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(I::Item, J::Item) -> U,
{
    left.zip(right)
        .map(move |(first, second)| function(first, second))
}

/// Yields the pairs at positions where two iterators disagree.
///
/// Comparison stops at the shorter iterator.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::diff;
///
/// let differences: Vec<(i32, i32)> = diff([1, 2, 3].into_iter(), [1, 5, 3].into_iter()).collect();
/// assert_eq!(differences, vec![(2, 5)]);
/// ```
pub fn diff<I, J>(left: I, right: J) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    I::Item: PartialEq,
{
    left.zip(right).filter(|(first, second)| first != second)
}

// =============================================================================
// Interpose
// =============================================================================

/// Inserts a separator between consecutive elements.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::Interpose;
///
/// let spaced: String = Interpose::new("abc".chars(), '-').collect();
/// assert_eq!(spaced, "a-b-c");
/// ```
#[derive(Debug, Clone)]
pub struct Interpose<I: Iterator> {
    iterator: Peekable<I>,
    separator: I::Item,
    separator_due: bool,
}

impl<I: Iterator> Interpose<I> {
    /// Creates an adapter placing `separator` between elements of `iterator`.
    pub fn new(iterator: I, separator: I::Item) -> Self {
        Self {
            iterator: iterator.peekable(),
            separator,
            separator_due: false,
        }
    }
}

impl<I> Iterator for Interpose<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.separator_due {
            self.iterator.peek()?;
            self.separator_due = false;
            Some(self.separator.clone())
        } else {
            let element = self.iterator.next()?;
            self.separator_due = true;
            Some(element)
        }
    }
}

// =============================================================================
// Accumulate
// =============================================================================

/// Running reduction over a stream.
///
/// Without a seed the first element starts the accumulation and is emitted
/// unchanged. With a seed the seed itself is not emitted; the first output is
/// `function(seed, first)`.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::Accumulate;
///
/// let sums: Vec<i32> = Accumulate::new(1..=4, None, |left, right| left + right).collect();
/// assert_eq!(sums, vec![1, 3, 6, 10]);
///
/// let products: Vec<i32> = Accumulate::new(1..=5, Some(1), |left, right| left * right).collect();
/// assert_eq!(products, vec![1, 2, 6, 24, 120]);
/// ```
#[derive(Debug, Clone)]
pub struct Accumulate<I: Iterator, F> {
    iterator: I,
    state: Option<I::Item>,
    function: F,
}

impl<I: Iterator, F> Accumulate<I, F> {
    /// Creates a running reduction, optionally seeded.
    pub const fn new(iterator: I, seed: Option<I::Item>, function: F) -> Self {
        Self {
            iterator,
            state: seed,
            function,
        }
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.iterator.next()?;
        let accumulated = match self.state.take() {
            Some(previous) => (self.function)(previous, element),
            None => element,
        };
        self.state = Some(accumulated.clone());
        Some(accumulated)
    }
}

// =============================================================================
// Join
// =============================================================================

/// Inner join of two streams on derived keys.
///
/// The left stream is indexed on the first call to `next`; the right stream
/// is then walked in order, emitting one `(left, right)` pair for every left
/// element with a matching key. Unmatched elements on either side are dropped.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::Join;
///
/// let people = vec![(1, "alice"), (2, "bob")];
/// let orders = vec![(2, "book"), (1, "pen"), (3, "cup")];
///
/// let joined: Vec<_> = Join::new(
///     people.into_iter(),
///     orders.into_iter(),
///     |person: &(i32, &str)| person.0,
///     |order: &(i32, &str)| order.0,
/// )
/// .map(|(person, order)| (person.1, order.1))
/// .collect();
///
/// assert_eq!(joined, vec![("bob", "book"), ("alice", "pen")]);
/// ```
pub struct Join<L: Iterator, R: Iterator, LF, RF, K> {
    left: Option<L>,
    index: HashMap<K, Vec<L::Item>, HashBuilder>,
    right: R,
    left_key: LF,
    right_key: RF,
    pending: VecDeque<(L::Item, R::Item)>,
}

impl<L, R, LF, RF, K> Join<L, R, LF, RF, K>
where
    L: Iterator,
    R: Iterator,
{
    /// Creates a join of `left` and `right` on `left_key` / `right_key`.
    pub fn new(left: L, right: R, left_key: LF, right_key: RF) -> Self {
        Self {
            left: Some(left),
            index: HashMap::default(),
            right,
            left_key,
            right_key,
            pending: VecDeque::new(),
        }
    }
}

impl<L, R, LF, RF, K> Iterator for Join<L, R, LF, RF, K>
where
    L: Iterator,
    L::Item: Clone,
    R: Iterator,
    R::Item: Clone,
    LF: FnMut(&L::Item) -> K,
    RF: FnMut(&R::Item) -> K,
    K: Hash + Eq,
{
    type Item = (L::Item, R::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(left) = self.left.take() {
            for element in left {
                let key = (self.left_key)(&element);
                self.index.entry(key).or_default().push(element);
            }
        }
        loop {
            if let Some(pair) = self.pending.pop_front() {
                return Some(pair);
            }
            let candidate = self.right.next()?;
            let key = (self.right_key)(&candidate);
            if let Some(matches) = self.index.get(&key) {
                self.pending.extend(
                    matches
                        .iter()
                        .map(|element| (element.clone(), candidate.clone())),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_interleave_empty_side() {
        let merged: Vec<i32> = interleave([1, 2].into_iter(), std::iter::empty(), false).collect();
        assert!(merged.is_empty());
    }

    #[rstest]
    fn test_interpose_empty_and_single() {
        let empty: Vec<i32> = Interpose::new(std::iter::empty(), 0).collect();
        assert!(empty.is_empty());

        let single: Vec<i32> = Interpose::new(std::iter::once(7), 0).collect();
        assert_eq!(single, vec![7]);
    }

    #[rstest]
    fn test_accumulate_empty_source() {
        let sums: Vec<i32> = Accumulate::new(std::iter::empty(), Some(10), |left, right| left + right)
            .collect();
        assert!(sums.is_empty());
    }

    #[rstest]
    fn test_zip_with_stops_at_shorter() {
        let sums: Vec<i32> = zip_with(1..=4, [10, 20].into_iter(), |left, right| left + right).collect();
        assert_eq!(sums, vec![11, 22]);
    }

    #[rstest]
    fn test_join_emits_every_match() {
        let left = vec![(0, 'a'), (1, 'b'), (0, 'c')];
        let right = vec![0];
        let joined: Vec<(char, i32)> = Join::new(
            left.into_iter(),
            right.into_iter(),
            |element: &(i32, char)| element.0,
            |element: &i32| *element,
        )
        .map(|(matched, key)| (matched.1, key))
        .collect();
        assert_eq!(joined, vec![('a', 0), ('c', 0)]);
    }
}
