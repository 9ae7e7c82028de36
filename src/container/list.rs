//! The eager sequence container.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, Index, RangeBounds};

use super::{ChainIter, ChainMap, ChainSet, Container, ContainerKind, WrapMode};
use crate::error::{ChainError, Result};
use crate::hashing::OrderedSet;
use crate::sequence::{self, Accumulate, Chunks, Interpose, Join, PartitionBy, SlidingWindow};

/// Eager, ordered, indexable chainable sequence.
///
/// Kind-preserving methods consume the list and return a new `ChainList`
/// that inherits its [`WrapMode`]. Methods with copy semantics
/// ([`append`](Self::append), [`sort`](Self::sort), [`reverse`](Self::reverse))
/// borrow the list and leave it untouched.
///
/// Equality and hashing look at the elements only, not at the wrap mode.
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
///
/// let words = ChainList::from(vec!["apple", "bob", "cat", "dormouse"]);
/// let lengths = words.clone().map(str::len).filter(|length| *length > 3);
/// assert_eq!(lengths, vec![5, 8]);
///
/// let by_length = words.group_by(|word| word.len());
/// assert_eq!(by_length[&3], vec!["bob", "cat"]);
/// ```
#[derive(Clone)]
pub struct ChainList<T> {
    elements: Vec<T>,
    mode: WrapMode,
}

impl<T> ChainList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            mode: WrapMode::Plain,
        }
    }

    pub(crate) fn with_elements<I>(elements: I, mode: WrapMode) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: elements.into_iter().collect(),
            mode,
        }
    }

    /// Returns the list with its wrap mode replaced.
    #[must_use]
    pub fn with_mode(mut self, mode: WrapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the list in [`WrapMode::Recursive`].
    #[must_use]
    pub fn recursive(self) -> Self {
        self.with_mode(WrapMode::Recursive)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrowing iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Element at `index`, or `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::IndexOutOfRange`] past the end.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or(ChainError::IndexOutOfRange {
            index,
            length: self.elements.len(),
        })
    }

    /// `true` if `element` is in the list.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    /// Copies the elements in `range`. Out-of-range bounds are clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let letters = ChainList::from(['a', 'b', 'c', 'd']);
    /// assert_eq!(letters.slice(1..3), vec!['b', 'c']);
    /// assert_eq!(letters.slice(2..), vec!['c', 'd']);
    /// assert_eq!(letters.slice(3..10), vec!['d']);
    /// ```
    pub fn slice<R>(&self, range: R) -> Self
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        let length = self.elements.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(length);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        }
        .clamp(start, length);
        Self::with_elements(self.elements[start..end].iter().cloned(), self.mode)
    }

    /// A copy of the list with `element` appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let original = ChainList::from(vec![1, 2]);
    /// let extended = original.append(3);
    /// assert_eq!(original, vec![1, 2]);
    /// assert_eq!(extended, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn append(&self, element: T) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.push(element);
        Self::with_elements(elements, self.mode)
    }

    /// A sorted copy.
    #[must_use]
    pub fn sort(&self) -> Self
    where
        T: Clone + Ord,
    {
        let mut elements = self.elements.clone();
        elements.sort();
        Self::with_elements(elements, self.mode)
    }

    /// A copy sorted by a derived key. The sort is stable.
    #[must_use]
    pub fn sort_by_key<K, F>(&self, key_function: F) -> Self
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut elements = self.elements.clone();
        elements.sort_by_key(key_function);
        Self::with_elements(elements, self.mode)
    }

    /// A copy sorted with a comparator. The sort is stable.
    #[must_use]
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        let mut elements = self.elements.clone();
        elements.sort_by(compare);
        Self::with_elements(elements, self.mode)
    }

    /// A reversed copy.
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        Self::with_elements(self.elements.iter().rev().cloned(), self.mode)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Unwraps into the backing `Vec`.
    pub fn to_vec(self) -> Vec<T> {
        self.elements
    }

    /// Converts into a lazy sequence over the same elements.
    pub fn to_iter(self) -> ChainIter<T>
    where
        T: 'static,
    {
        ChainIter::new(self.elements)
    }

    /// Converts into a set, keeping first occurrences.
    pub fn to_set(self) -> ChainSet<T>
    where
        T: Hash + Eq,
    {
        self.elements.into_iter().collect()
    }

    // =========================================================================
    // Kind-preserving
    // =========================================================================

    /// Applies `function` to every element.
    pub fn map<S, F>(self, function: F) -> ChainList<S>
    where
        F: FnMut(T) -> S,
    {
        ChainList::with_elements(self.elements.into_iter().map(function), self.mode)
    }

    /// Keeps the elements matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::with_elements(self.elements.into_iter().filter(predicate), self.mode)
    }

    /// Drops the elements matching `predicate`.
    pub fn remove<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::with_elements(
            self.elements
                .into_iter()
                .filter(|element| !predicate(element)),
            self.mode,
        )
    }

    /// Maps every element to an iterable and concatenates the results.
    pub fn mapcat<I, F>(self, function: F) -> ChainList<I::Item>
    where
        I: IntoIterator,
        F: FnMut(T) -> I,
    {
        ChainList::with_elements(self.elements.into_iter().flat_map(function), self.mode)
    }

    /// Keeps at most the first `count` elements.
    pub fn take(mut self, count: usize) -> Self {
        self.elements.truncate(count);
        self
    }

    /// Skips the first `count` elements.
    pub fn drop(self, count: usize) -> Self {
        Self::with_elements(self.elements.into_iter().skip(count), self.mode)
    }

    /// Keeps elements while `predicate` holds.
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::with_elements(self.elements.into_iter().take_while(predicate), self.mode)
    }

    /// Skips elements while `predicate` holds.
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::with_elements(self.elements.into_iter().skip_while(predicate), self.mode)
    }

    /// The last `count` elements.
    pub fn tail(self, count: usize) -> Self {
        Self::with_elements(sequence::tail(self.elements, count), self.mode)
    }

    /// Groups of exactly `size`; the short remainder is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let groups = crange(0..10).partition(3);
    /// assert_eq!(groups.len(), 3);
    /// assert_eq!(groups[2], vec![6, 7, 8]);
    /// ```
    pub fn partition(self, size: usize) -> ChainList<Self> {
        let mode = self.mode;
        ChainList::with_elements(
            Chunks::exact(self.elements.into_iter(), size)
                .map(|group| Self::with_elements(group, mode)),
            mode,
        )
    }

    /// Groups of `size`; the last group may be shorter. No padding is added.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn partition_all(self, size: usize) -> ChainList<Self> {
        let mode = self.mode;
        ChainList::with_elements(
            Chunks::all(self.elements.into_iter(), size)
                .map(|group| Self::with_elements(group, mode)),
            mode,
        )
    }

    /// Alias of [`ChainList::partition_all`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunk(self, size: usize) -> ChainList<Self> {
        self.partition_all(size)
    }

    /// Splits into runs of consecutive elements with equal keys.
    pub fn partition_by<K, F>(self, key_function: F) -> ChainList<Self>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let mode = self.mode;
        ChainList::with_elements(
            PartitionBy::new(self.elements.into_iter(), key_function)
                .map(|group| Self::with_elements(group, mode)),
            mode,
        )
    }

    /// Keeps the first occurrence of each element.
    pub fn unique(self) -> Self
    where
        T: Hash + Eq,
    {
        let unique: OrderedSet<T> = self.elements.into_iter().collect();
        Self::with_elements(unique, self.mode)
    }

    /// Keeps the first element seen for each key.
    pub fn unique_by<K, F>(self, key_function: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        Self::with_elements(
            sequence::unique_by(self.elements.into_iter(), key_function),
            self.mode,
        )
    }

    /// The `k` largest elements in descending order.
    pub fn top_k(mut self, k: usize) -> Self
    where
        T: Ord,
    {
        self.elements.sort_by(|left, right| right.cmp(left));
        self.elements.truncate(k);
        self
    }

    /// The `k` elements with the largest keys, ties in original order.
    pub fn top_k_by<K, F>(self, k: usize, key_function: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Self::with_elements(sequence::top_k_by(self.elements, k, key_function), self.mode)
    }

    /// Every `step`-th element starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn stride_by(self, step: usize) -> Self {
        Self::with_elements(self.elements.into_iter().step_by(step), self.mode)
    }

    /// Alternates with `other`, stopping at the shorter input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let merged = ChainList::from(vec![1, 2, 3]).interleave(vec![10, 20], false);
    /// assert_eq!(merged, vec![1, 10, 2, 20]);
    /// ```
    pub fn interleave<I>(self, other: I, swap: bool) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_elements(
            sequence::interleave(self.elements.into_iter(), other.into_iter(), swap),
            self.mode,
        )
    }

    /// Places `separator` between consecutive elements.
    pub fn interpose(self, separator: T) -> Self
    where
        T: Clone,
    {
        Self::with_elements(Interpose::new(self.elements.into_iter(), separator), self.mode)
    }

    /// Inner join against `other`, emitted in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let users = ChainList::from(vec![(1, "ada"), (2, "linus")]);
    /// let posts = vec![(2, "kernel"), (1, "engine"), (2, "git")];
    /// let authored = users
    ///     .join(posts, |user| user.0, |post| post.0)
    ///     .map(|(user, post)| (user.1, post.1));
    /// assert_eq!(authored, vec![("linus", "kernel"), ("ada", "engine"), ("linus", "git")]);
    /// ```
    pub fn join<U, I, K, LF, RF>(self, other: I, left_key: LF, right_key: RF) -> ChainList<(T, U)>
    where
        T: Clone,
        U: Clone,
        I: IntoIterator<Item = U>,
        K: Hash + Eq,
        LF: FnMut(&T) -> K,
        RF: FnMut(&U) -> K,
    {
        ChainList::with_elements(
            Join::new(self.elements.into_iter(), other.into_iter(), left_key, right_key),
            self.mode,
        )
    }

    /// Pairs each element with its position counted from `start`, wrapping
    /// around at `usize::MAX`.
    pub fn enumerate(self, start: usize) -> ChainList<(usize, T)> {
        ChainList::with_elements(
            self.elements
                .into_iter()
                .enumerate()
                .map(|(position, element)| (start.wrapping_add(position), element)),
            self.mode,
        )
    }

    /// Combines with `other` element-wise, stopping at the shorter input.
    pub fn zip_with<U, S, I, F>(self, other: I, function: F) -> ChainList<S>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(T, U) -> S,
    {
        ChainList::with_elements(
            sequence::zip_with(self.elements.into_iter(), other.into_iter(), function),
            self.mode,
        )
    }

    /// Pairs at positions where this list and `other` differ.
    pub fn diff<I>(self, other: I) -> ChainList<(T, T)>
    where
        T: PartialEq,
        I: IntoIterator<Item = T>,
    {
        ChainList::with_elements(
            sequence::diff(self.elements.into_iter(), other.into_iter()),
            self.mode,
        )
    }

    /// Running reduction; the first element is emitted unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let totals = ChainList::from(vec![1, 2, 3, 4]).accumulate(|left, right| left + right);
    /// assert_eq!(totals, vec![1, 3, 6, 10]);
    ///
    /// let seeded = ChainList::from(vec![1, 2, 3]).accumulate_from(100, |left, right| left + right);
    /// assert_eq!(seeded, vec![101, 103, 106]);
    /// ```
    pub fn accumulate<F>(self, function: F) -> Self
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        Self::with_elements(
            Accumulate::new(self.elements.into_iter(), None, function),
            self.mode,
        )
    }

    /// Running reduction from `seed`; the seed itself is not emitted.
    pub fn accumulate_from<F>(self, seed: T, function: F) -> Self
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        Self::with_elements(
            Accumulate::new(self.elements.into_iter(), Some(seed), function),
            self.mode,
        )
    }

    /// Runs each element through `functions` in order.
    pub fn pipe_map<F, I>(self, functions: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(T) -> T,
    {
        let functions: Vec<F> = functions.into_iter().collect();
        self.map(|element| {
            functions
                .iter()
                .fold(element, |accumulator, function| function(accumulator))
        })
    }

    /// Field `index` of every row.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::IndexOutOfRange`] for the first row that is too
    /// short.
    pub fn pluck<U>(self, index: usize) -> Result<ChainList<U>>
    where
        T: AsRef<[U]>,
        U: Clone,
    {
        let fields = self
            .elements
            .iter()
            .map(|row| sequence::pluck(row, index))
            .collect::<Result<Vec<U>>>()?;
        Ok(ChainList::with_elements(fields, self.mode))
    }

    /// Fields `indices` of every row, one list per row.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::IndexOutOfRange`] for the first short row.
    pub fn pluck_many<U>(self, indices: &[usize]) -> Result<ChainList<ChainList<U>>>
    where
        T: AsRef<[U]>,
        U: Clone,
    {
        let mode = self.mode;
        let rows = self
            .elements
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|index| sequence::pluck(row, *index))
                    .collect::<Result<Vec<U>>>()
                    .map(|fields| ChainList::with_elements(fields, mode))
            })
            .collect::<Result<Vec<ChainList<U>>>>()?;
        Ok(ChainList::with_elements(rows, mode))
    }

    /// Calls `function` with the list and returns the list unchanged.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self),
    {
        function(&self);
        self
    }

    /// Passes the whole list to `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let total: i32 = ChainList::from(vec![1, 2, 3]).pipe(|list| list.iter().sum());
    /// assert_eq!(total, 6);
    /// ```
    pub fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    // =========================================================================
    // Always-lazy
    // =========================================================================

    /// Overlapping windows of `size` elements as a lazy sequence.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn sliding_window(self, size: usize) -> ChainIter<Self>
    where
        T: Clone + 'static,
    {
        ChainIter::new(SlidingWindow::new(self.elements.into_iter(), size).map(Self::from))
    }

    // =========================================================================
    // Always-mapping
    // =========================================================================

    /// Groups elements by key.
    pub fn group_by<K, F>(self, key_function: F) -> ChainMap<K, Self>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mode = self.mode;
        sequence::group_by(self.elements, key_function)
            .into_iter()
            .map(|(key, group)| (key, Self::with_elements(group, mode)))
            .collect()
    }

    /// Reduces each key's group with `function`.
    pub fn reduce_by<K, F, G>(self, key_function: F, function: G) -> ChainMap<K, T>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
        G: FnMut(T, T) -> T,
    {
        ChainMap::from(sequence::reduce_by(self.elements, key_function, function))
    }

    /// Counts elements per key.
    pub fn count_by<K, F>(self, key_function: F) -> ChainMap<K, usize>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        ChainMap::from(sequence::count_by(self.elements, key_function))
    }

    /// Counts occurrences of each element.
    pub fn frequencies(self) -> ChainMap<T, usize>
    where
        T: Hash + Eq,
    {
        ChainMap::from(sequence::frequencies(self.elements))
    }

    // =========================================================================
    // Scalar
    // =========================================================================

    /// Reduces with `function`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] on an empty list.
    pub fn reduce<F>(self, function: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.elements
            .into_iter()
            .reduce(function)
            .ok_or(ChainError::EmptySequence {
                operation: "reduce",
            })
    }

    /// Folds from `initial` with `function`.
    pub fn fold<S, F>(self, initial: S, function: F) -> S
    where
        F: FnMut(S, T) -> S,
    {
        self.elements.into_iter().fold(initial, function)
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] on an empty list.
    pub fn first(&self) -> Result<&T> {
        sequence::nth(&self.elements, 0, "first")
    }

    /// The second element.
    ///
    /// # Errors
    ///
    /// [`ChainError::EmptySequence`] when empty, [`ChainError::IndexOutOfRange`]
    /// with a single element.
    pub fn second(&self) -> Result<&T> {
        sequence::nth(&self.elements, 1, "second")
    }

    /// The last element.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] on an empty list.
    pub fn last(&self) -> Result<&T> {
        self.elements
            .last()
            .ok_or(ChainError::EmptySequence { operation: "last" })
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`ChainError::EmptySequence`] when empty, [`ChainError::IndexOutOfRange`]
    /// when too short.
    pub fn nth(&self, index: usize) -> Result<&T> {
        sequence::nth(&self.elements, index, "nth")
    }

    /// First element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().find(|element| predicate(element))
    }

    /// `true` if any element matches; stops at the first match.
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// `true` if every element matches; stops at the first mismatch.
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// `true` if no element occurs twice.
    pub fn is_distinct(&self) -> bool
    where
        T: Hash + Eq,
    {
        sequence::is_distinct(&self.elements)
    }
}

// =============================================================================
// Element-shape specific
// =============================================================================

impl<T: IntoIterator> ChainList<T> {
    /// Concatenates the nested iterables one level deep.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let nested = ChainList::from(vec![vec![1, 2], vec![], vec![3]]);
    /// assert_eq!(nested.concat(), vec![1, 2, 3]);
    /// ```
    pub fn concat(self) -> ChainList<T::Item> {
        ChainList::with_elements(self.elements.into_iter().flatten(), self.mode)
    }

    /// Alias of [`ChainList::concat`].
    pub fn flatten(self) -> ChainList<T::Item> {
        self.concat()
    }
}

impl<K: Hash + Eq, V> ChainList<(K, V)> {
    /// Builds a map from key-value pairs; later keys win.
    pub fn to_map(self) -> ChainMap<K, V> {
        ChainMap::from_pairs(self.elements).with_mode(self.mode)
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<T> Container for ChainList<T> {
    const KIND: ContainerKind = ContainerKind::Sequence;

    fn wrap_mode(&self) -> WrapMode {
        self.mode
    }
}

impl<T> Default for ChainList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ChainList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements,
            mode: WrapMode::Plain,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ChainList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> From<ChainList<T>> for Vec<T> {
    fn from(list: ChainList<T>) -> Self {
        list.elements
    }
}

impl<T> FromIterator<T> for ChainList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for ChainList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ChainList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ChainList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> Index<usize> for ChainList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> AsRef<[T]> for ChainList<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: PartialEq> PartialEq for ChainList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ChainList<T> {}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for ChainList<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        &self.elements == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<ChainList<U>> for Vec<T> {
    fn eq(&self, other: &ChainList<U>) -> bool {
        self == &other.elements
    }
}

impl<T: Hash> Hash for ChainList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ChainList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Dynamic values
// =============================================================================

#[cfg(feature = "dynamic")]
impl ChainList<crate::value::Value> {
    /// The element at `index`, wrapped according to the list's mode.
    pub fn nested(&self, index: usize) -> Option<super::Wrapped> {
        self.elements
            .get(index)
            .map(|element| super::Wrapped::from_value(element, self.mode))
    }

    /// Flattens nested lists and sets `depth` levels deep.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TypeMismatch`] if an element to be flattened is
    /// not a list or set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let nested = ChainList::from(vec![
    ///     Value::list([Value::list([1, 2]), Value::list([3])]),
    ///     Value::list([Value::list([4])]),
    /// ]);
    /// let flat = nested.flatten_depth(2).unwrap();
    /// assert_eq!(flat, vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
    /// ```
    pub fn flatten_depth(self, depth: usize) -> Result<Self> {
        use crate::value::Value;

        let mode = self.mode;
        let mut elements = self.elements;
        for _ in 0..depth {
            let mut flattened = Vec::with_capacity(elements.len());
            for element in elements {
                match element {
                    Value::List(items) => flattened.extend(items),
                    Value::Set(items) => flattened.extend(items),
                    other => {
                        return Err(ChainError::TypeMismatch {
                            expected: "list or set",
                            found: other.type_name(),
                        });
                    }
                }
            }
            elements = flattened;
        }
        Ok(Self::with_elements(elements, mode))
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ChainList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.elements.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for ChainList<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_first_second_last_errors() {
        let empty: ChainList<i32> = ChainList::new();
        assert_eq!(
            empty.first(),
            Err(ChainError::EmptySequence { operation: "first" })
        );
        assert_eq!(
            empty.last(),
            Err(ChainError::EmptySequence { operation: "last" })
        );

        let single = ChainList::from(vec![9]);
        assert_eq!(single.first(), Ok(&9));
        assert_eq!(
            single.second(),
            Err(ChainError::IndexOutOfRange { index: 1, length: 1 })
        );
    }

    #[rstest]
    fn test_at_out_of_range() {
        let list = ChainList::from(vec![1, 2, 3]);
        assert_eq!(list.at(2), Ok(&3));
        assert_eq!(
            list.at(3),
            Err(ChainError::IndexOutOfRange { index: 3, length: 3 })
        );
    }

    #[rstest]
    fn test_mode_propagates_through_kind_preserving_calls() {
        let list = ChainList::from(vec![1, 2, 3, 4, 5]).recursive();
        let chunks = list.map(|value| value * 2).filter(|value| *value > 2).partition_all(2);
        assert!(chunks.wrap_mode().is_recursive());
        assert!(chunks.iter().all(|chunk| chunk.wrap_mode().is_recursive()));
    }

    #[rstest]
    fn test_grouping_results_are_plain() {
        let groups = ChainList::from(vec![1, 2, 3]).recursive().group_by(|value| value % 2);
        assert_eq!(groups.wrap_mode(), WrapMode::Plain);
        assert!(groups.values().iter().all(|group| group.wrap_mode().is_recursive()));
    }

    #[rstest]
    fn test_equality_ignores_mode() {
        let plain = ChainList::from(vec![1, 2]);
        let flagged = plain.clone().recursive();
        assert_eq!(plain, flagged);
    }

    #[rstest]
    fn test_pluck_short_row() {
        let rows = ChainList::from(vec![vec![1, 2, 3], vec![4]]);
        assert_eq!(
            rows.clone().pluck(1),
            Err(ChainError::IndexOutOfRange { index: 1, length: 1 })
        );
        assert_eq!(rows.pluck(0), Ok(ChainList::from(vec![1, 4])));
    }

    #[rstest]
    fn test_pluck_many() {
        let rows = ChainList::from(vec![[1, 2, 3], [4, 5, 6]]);
        let picked = rows.pluck_many(&[2, 0]);
        assert_eq!(
            picked,
            Ok(ChainList::from(vec![ChainList::from(vec![3, 1]), ChainList::from(vec![6, 4])]))
        );
    }

    #[rstest]
    fn test_copy_semantics_leave_original() {
        let original = ChainList::from(vec![3, 1, 2]);
        assert_eq!(original.sort(), vec![1, 2, 3]);
        assert_eq!(original.reverse(), vec![2, 1, 3]);
        assert_eq!(original.sort_by_key(|value| -value), vec![3, 2, 1]);
        assert_eq!(original, vec![3, 1, 2]);
    }

    #[rstest]
    #[case((Bound::Unbounded, Bound::Unbounded), vec![0, 1, 2, 3])]
    #[case((Bound::Included(1), Bound::Included(2)), vec![1, 2])]
    #[case((Bound::Excluded(0), Bound::Excluded(2)), vec![1])]
    #[case((Bound::Included(5), Bound::Unbounded), vec![])]
    fn test_slice(#[case] range: (Bound<usize>, Bound<usize>), #[case] expected: Vec<i32>) {
        assert_eq!(ChainList::from(vec![0, 1, 2, 3]).slice(range), expected);
    }

    #[rstest]
    fn test_pipe_map_applies_in_order() {
        let steps: Vec<fn(i32) -> i32> = vec![|value| value + 1, |value| value * 2];
        assert_eq!(ChainList::from(vec![1, 2]).pipe_map(steps), vec![4, 6]);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(ChainList::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(ChainList::<i32>::new().to_string(), "[]");
    }

    #[rstest]
    fn test_top_k_and_tail() {
        let list = ChainList::from(vec![4, 8, 1, 8, 3]);
        assert_eq!(list.clone().top_k(3), vec![8, 8, 4]);
        assert_eq!(list.tail(2), vec![8, 3]);
    }

    #[cfg(feature = "dynamic")]
    #[rstest]
    fn test_flatten_depth_rejects_scalars() {
        use crate::value::Value;

        let mixed = ChainList::from(vec![Value::list([1]), Value::from(2)]);
        assert_eq!(
            mixed.flatten_depth(1),
            Err(ChainError::TypeMismatch { expected: "list or set", found: "integer" })
        );
    }
}
