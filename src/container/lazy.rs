//! The lazy sequence container.
//!
//! [`ChainIter`] wraps any iterator in a shared, one-shot source. Chaining
//! builds a new boxed iterator on top of the old one and never pulls an
//! element. Elements are produced only when the chain is iterated, converted,
//! reduced or indexed.
//!
//! # One-shot semantics
//!
//! Clones of a `ChainIter` share the same source. Elements consumed through
//! one handle are gone for every other handle, and iterating an exhausted
//! chain yields nothing:
//!
//! ```rust
//! use chaincollections::prelude::*;
//!
//! let numbers = ChainIter::new(vec![1, 2, 3]);
//! let alias = numbers.clone();
//!
//! assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
//! assert!(alias.to_vec().is_empty());
//! ```
//!
//! # Indexing
//!
//! Positional access ([`ChainIter::get`], [`ChainIter::first`],
//! [`ChainIter::last`], [`ChainIter::len`], ...) pulls elements into an
//! internal buffer instead of discarding them. Later iteration drains the
//! buffer first, so indexing never loses data.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use super::{ChainList, ChainMap, ChainSet, Container, ContainerKind, ReferenceCounter};
use crate::error::{ChainError, Result};
use crate::sequence::{
    self, Accumulate, Chunks, Interpose, Join, PartitionBy, SlidingWindow,
};

type BoxedIterator<T> = Box<dyn Iterator<Item = T>>;

// =============================================================================
// LazySource
// =============================================================================

/// Buffered front of a pending iterator.
struct LazySource<T> {
    buffer: VecDeque<T>,
    pending: Option<BoxedIterator<T>>,
}

impl<T> LazySource<T> {
    fn pull(&mut self) -> Option<T> {
        if let Some(element) = self.buffer.pop_front() {
            return Some(element);
        }
        let element = self.pending.as_mut()?.next();
        if element.is_none() {
            self.pending = None;
        }
        element
    }

    /// Buffers until `count` elements are available or the source ends.
    fn fill(&mut self, count: usize) -> usize {
        while self.buffer.len() < count {
            let Some(pending) = self.pending.as_mut() else {
                break;
            };
            if let Some(element) = pending.next() {
                self.buffer.push_back(element);
            } else {
                self.pending = None;
            }
        }
        self.buffer.len()
    }

    /// Buffers every remaining element.
    fn realize(&mut self) -> usize {
        if let Some(pending) = self.pending.take() {
            self.buffer.extend(pending);
            tracing::trace!(buffered = self.buffer.len(), "realized lazy source");
        }
        self.buffer.len()
    }

    fn is_exhausted(&self) -> bool {
        self.pending.is_none() && self.buffer.is_empty()
    }
}

// =============================================================================
// ChainIter
// =============================================================================

/// Deferred, single-pass chainable sequence.
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
///
/// // Works on unbounded sources because nothing is evaluated up front.
/// let firsts = ChainIter::new(0_u64..)
///     .map(|value| value * 3)
///     .filter(|value| value % 2 == 0)
///     .take(5)
///     .to_vec();
/// assert_eq!(firsts, vec![0, 6, 12, 18, 24]);
/// ```
pub struct ChainIter<T> {
    source: ReferenceCounter<RefCell<LazySource<T>>>,
}

static_assertions::assert_not_impl_any!(ChainIter<i32>: Send, Sync);

impl<T> Clone for ChainIter<T> {
    /// Returns another handle to the same one-shot source.
    fn clone(&self) -> Self {
        Self {
            source: ReferenceCounter::clone(&self.source),
        }
    }
}

impl<T> fmt::Debug for ChainIter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("ChainIter");
        if let Ok(source) = self.source.try_borrow() {
            debug
                .field("buffered", &source.buffer.len())
                .field("pending", &source.pending.is_some());
        }
        debug.finish_non_exhaustive()
    }
}

impl<T> Container for ChainIter<T> {
    const KIND: ContainerKind = ContainerKind::LazySequence;
}

impl<T: 'static> ChainIter<T> {
    /// Wraps an iterable without evaluating it.
    pub fn new<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            source: ReferenceCounter::new(RefCell::new(LazySource {
                buffer: VecDeque::new(),
                pending: Some(Box::new(iterable.into_iter())),
            })),
        }
    }

    /// Lazy sequence driven by a generator closure; ends when it returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let mut state = 1;
    /// let powers = ChainIter::from_fn(move || {
    ///     state *= 2;
    ///     (state <= 32).then_some(state)
    /// });
    /// assert_eq!(powers.to_vec(), vec![2, 4, 8, 16, 32]);
    /// ```
    pub fn from_fn<F>(generator: F) -> Self
    where
        F: FnMut() -> Option<T> + 'static,
    {
        Self::new(std::iter::from_fn(generator))
    }

    /// An empty lazy sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Returns `true` once every element has been consumed.
    ///
    /// Only elements that were already pulled are known about: a source that
    /// has not been polled since it ran dry still reports `false`.
    pub fn is_exhausted(&self) -> bool {
        self.source.borrow().is_exhausted()
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Drains the remaining elements into a `Vec`.
    pub fn to_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Drains the remaining elements into an eager sequence.
    pub fn to_list(self) -> ChainList<T> {
        self.into_iter().collect()
    }

    /// Drains the remaining elements into a set.
    pub fn to_set(self) -> ChainSet<T>
    where
        T: Hash + Eq,
    {
        self.into_iter().collect()
    }

    // =========================================================================
    // Kind-preserving
    // =========================================================================

    /// Applies `function` to every element.
    pub fn map<S, F>(self, function: F) -> ChainIter<S>
    where
        S: 'static,
        F: FnMut(T) -> S + 'static,
    {
        ChainIter::new(self.into_iter().map(function))
    }

    /// Keeps the elements matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::new(self.into_iter().filter(predicate))
    }

    /// Drops the elements matching `predicate`.
    pub fn remove<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::new(self.into_iter().filter(move |element| !predicate(element)))
    }

    /// Maps every element to an iterable and concatenates the results.
    pub fn mapcat<I, F>(self, function: F) -> ChainIter<I::Item>
    where
        I: IntoIterator + 'static,
        I::Item: 'static,
        F: FnMut(T) -> I + 'static,
    {
        ChainIter::new(self.into_iter().flat_map(function))
    }

    /// Keeps at most the first `count` elements.
    pub fn take(self, count: usize) -> Self {
        Self::new(self.into_iter().take(count))
    }

    /// Skips the first `count` elements.
    pub fn drop(self, count: usize) -> Self {
        Self::new(self.into_iter().skip(count))
    }

    /// Keeps elements while `predicate` holds.
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::new(self.into_iter().take_while(predicate))
    }

    /// Skips elements while `predicate` holds.
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::new(self.into_iter().skip_while(predicate))
    }

    /// The last `count` elements.
    ///
    /// The source is walked only when the result is first pulled from.
    pub fn tail(self, count: usize) -> Self {
        let source = self.into_iter();
        Self::new(std::iter::once_with(move || sequence::tail(source, count)).flatten())
    }

    /// Groups of exactly `size`; the short remainder is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn partition(self, size: usize) -> ChainIter<ChainList<T>> {
        ChainIter::new(Chunks::exact(self.into_iter(), size).map(ChainList::from))
    }

    /// Groups of `size`; the last group may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn partition_all(self, size: usize) -> ChainIter<ChainList<T>> {
        ChainIter::new(Chunks::all(self.into_iter(), size).map(ChainList::from))
    }

    /// Alias of [`ChainIter::partition_all`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunk(self, size: usize) -> ChainIter<ChainList<T>> {
        self.partition_all(size)
    }

    /// Splits into runs of consecutive elements with equal keys.
    pub fn partition_by<K, F>(self, key_function: F) -> ChainIter<ChainList<T>>
    where
        K: PartialEq + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        ChainIter::new(PartitionBy::new(self.into_iter(), key_function).map(ChainList::from))
    }

    /// Keeps the first element seen for each key.
    pub fn unique_by<K, F>(self, key_function: F) -> Self
    where
        K: Hash + Eq + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        Self::new(sequence::unique_by(self.into_iter(), key_function))
    }

    /// Keeps the first occurrence of each element.
    pub fn unique(self) -> Self
    where
        T: Hash + Eq + Clone,
    {
        self.unique_by(T::clone)
    }

    /// The `k` largest elements in descending order.
    pub fn top_k(self, k: usize) -> Self
    where
        T: Ord,
    {
        let source = self.into_iter();
        Self::new(
            std::iter::once_with(move || {
                let mut elements: Vec<T> = source.collect();
                elements.sort_by(|left, right| right.cmp(left));
                elements.truncate(k);
                elements
            })
            .flatten(),
        )
    }

    /// The `k` elements with the largest keys in descending key order.
    pub fn top_k_by<K, F>(self, k: usize, key_function: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K + 'static,
    {
        let source = self.into_iter();
        Self::new(
            std::iter::once_with(move || sequence::top_k_by(source, k, key_function)).flatten(),
        )
    }

    /// Every `step`-th element starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn stride_by(self, step: usize) -> Self {
        Self::new(self.into_iter().step_by(step))
    }

    /// Alternates with `other`, stopping at the shorter input.
    pub fn interleave<I>(self, other: I, swap: bool) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::new(sequence::interleave(self.into_iter(), other.into_iter(), swap))
    }

    /// Places `separator` between consecutive elements.
    pub fn interpose(self, separator: T) -> Self
    where
        T: Clone,
    {
        Self::new(Interpose::new(self.into_iter(), separator))
    }

    /// Inner join against `other`, emitted in `other`'s order.
    pub fn join<U, I, K, LF, RF>(self, other: I, left_key: LF, right_key: RF) -> ChainIter<(T, U)>
    where
        T: Clone,
        U: Clone + 'static,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'static,
        K: Hash + Eq + 'static,
        LF: FnMut(&T) -> K + 'static,
        RF: FnMut(&U) -> K + 'static,
    {
        ChainIter::new(Join::new(
            self.into_iter(),
            other.into_iter(),
            left_key,
            right_key,
        ))
    }

    /// Pairs each element with its position counted from `start`, wrapping
    /// around at `usize::MAX`.
    pub fn enumerate(self, start: usize) -> ChainIter<(usize, T)> {
        ChainIter::new(
            self.into_iter()
                .enumerate()
                .map(move |(position, element)| (start.wrapping_add(position), element)),
        )
    }

    /// Combines with `other` element-wise, stopping at the shorter input.
    pub fn zip_with<U, S, I, F>(self, other: I, function: F) -> ChainIter<S>
    where
        U: 'static,
        S: 'static,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'static,
        F: FnMut(T, U) -> S + 'static,
    {
        ChainIter::new(sequence::zip_with(self.into_iter(), other.into_iter(), function))
    }

    /// Pairs at positions where this sequence and `other` differ.
    pub fn diff<I>(self, other: I) -> ChainIter<(T, T)>
    where
        T: PartialEq,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        ChainIter::new(sequence::diff(self.into_iter(), other.into_iter()))
    }

    /// Running reduction; the first element is emitted unchanged.
    pub fn accumulate<F>(self, function: F) -> Self
    where
        T: Clone,
        F: FnMut(T, T) -> T + 'static,
    {
        Self::new(Accumulate::new(self.into_iter(), None, function))
    }

    /// Running reduction from `seed`; the seed itself is not emitted.
    pub fn accumulate_from<F>(self, seed: T, function: F) -> Self
    where
        T: Clone,
        F: FnMut(T, T) -> T + 'static,
    {
        Self::new(Accumulate::new(self.into_iter(), Some(seed), function))
    }

    /// Runs each element through `functions` in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let steps: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|value| value + 1), Box::new(|value| value * 10)];
    /// assert_eq!(ChainIter::new(0..3).pipe_map(steps).to_vec(), vec![10, 20, 30]);
    /// ```
    pub fn pipe_map<F, I>(self, functions: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(T) -> T + 'static,
    {
        let functions: Vec<F> = functions.into_iter().collect();
        Self::new(self.into_iter().map(move |element| {
            functions
                .iter()
                .fold(element, |accumulator, function| function(accumulator))
        }))
    }

    /// Calls `function` with the chain and returns the chain unchanged.
    ///
    /// `function` must not consume elements through the borrowed handle if
    /// the caller still needs them.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self),
    {
        function(&self);
        self
    }

    /// Passes the whole chain to `function`.
    pub fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    // =========================================================================
    // Always-lazy
    // =========================================================================

    /// Overlapping windows of `size` elements.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn sliding_window(self, size: usize) -> ChainIter<ChainList<T>>
    where
        T: Clone,
    {
        ChainIter::new(SlidingWindow::new(self.into_iter(), size).map(ChainList::from))
    }

    // =========================================================================
    // Always-mapping
    // =========================================================================

    /// Groups elements by key.
    pub fn group_by<K, F>(self, key_function: F) -> ChainMap<K, ChainList<T>>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        sequence::group_by(self, key_function)
            .into_iter()
            .map(|(key, group)| (key, ChainList::from(group)))
            .collect()
    }

    /// Reduces each key's group with `function`.
    pub fn reduce_by<K, F, G>(self, key_function: F, function: G) -> ChainMap<K, T>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
        G: FnMut(T, T) -> T,
    {
        ChainMap::from(sequence::reduce_by(self, key_function, function))
    }

    /// Counts elements per key.
    pub fn count_by<K, F>(self, key_function: F) -> ChainMap<K, usize>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        ChainMap::from(sequence::count_by(self, key_function))
    }

    /// Counts occurrences of each element.
    pub fn frequencies(self) -> ChainMap<T, usize>
    where
        T: Hash + Eq,
    {
        ChainMap::from(sequence::frequencies(self))
    }

    // =========================================================================
    // Scalar
    // =========================================================================

    /// Reduces with `function`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] if nothing is left to reduce.
    pub fn reduce<F>(self, function: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.into_iter()
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
        self.into_iter().fold(initial, function)
    }

    /// First element matching `predicate`; consumes up to and including it.
    pub fn find<P>(self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().find(|element| predicate(element))
    }

    /// `true` if any element matches; stops at the first match.
    pub fn any_match<P>(self, predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.into_iter().any(predicate)
    }

    /// `true` if every element matches; stops at the first mismatch.
    pub fn all_match<P>(self, predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.into_iter().all(predicate)
    }

    /// `true` if no element occurs twice.
    pub fn is_distinct(self) -> bool
    where
        T: Hash + Eq,
    {
        sequence::is_distinct(self)
    }

    // =========================================================================
    // Buffered access
    // =========================================================================

    /// Element at `index`, buffering up to it. `None` if the source is shorter.
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        let mut source = self.source.borrow_mut();
        source.fill(index.saturating_add(1));
        source.buffer.get(index).cloned()
    }

    /// Element at `index`, buffering up to it.
    ///
    /// # Errors
    ///
    /// - [`ChainError::EmptySequence`] if no element is left.
    /// - [`ChainError::IndexOutOfRange`] if fewer than `index + 1` are left.
    pub fn nth(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.buffered_at(index, "nth")
    }

    /// The first remaining element, without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] if no element is left.
    pub fn first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.buffered_at(0, "first")
    }

    /// The second remaining element, without consuming it.
    ///
    /// # Errors
    ///
    /// See [`ChainIter::nth`].
    pub fn second(&self) -> Result<T>
    where
        T: Clone,
    {
        self.buffered_at(1, "second")
    }

    /// The last element. Realizes the whole source.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] if no element is left.
    pub fn last(&self) -> Result<T>
    where
        T: Clone,
    {
        let mut source = self.source.borrow_mut();
        source.realize();
        source
            .buffer
            .back()
            .cloned()
            .ok_or(ChainError::EmptySequence { operation: "last" })
    }

    /// The next element without consuming it.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.get(0)
    }

    /// Number of remaining elements. Realizes the whole source.
    pub fn len(&self) -> usize {
        self.source.borrow_mut().realize()
    }

    /// `true` if no element is left. Buffers at most one element.
    pub fn is_empty(&self) -> bool {
        self.source.borrow_mut().fill(1) == 0
    }

    /// `true` if `element` occurs among the remaining elements.
    ///
    /// Realizes the whole source; the elements stay available.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let mut source = self.source.borrow_mut();
        source.realize();
        source.buffer.contains(element)
    }

    fn buffered_at(&self, index: usize, operation: &'static str) -> Result<T>
    where
        T: Clone,
    {
        let mut source = self.source.borrow_mut();
        let length = source.fill(index.saturating_add(1));
        if let Some(element) = source.buffer.get(index) {
            Ok(element.clone())
        } else if length == 0 {
            Err(ChainError::EmptySequence { operation })
        } else {
            Err(ChainError::IndexOutOfRange { index, length })
        }
    }
}

// =============================================================================
// Element-shape specific
// =============================================================================

impl<T> ChainIter<T>
where
    T: IntoIterator + 'static,
    T::Item: 'static,
{
    /// Concatenates the nested iterables one level deep.
    pub fn concat(self) -> ChainIter<T::Item> {
        ChainIter::new(self.into_iter().flatten())
    }

    /// Alias of [`ChainIter::concat`].
    pub fn flatten(self) -> ChainIter<T::Item> {
        self.concat()
    }
}

impl<T: 'static> ChainIter<T> {
    /// Field `index` of every row. Short rows yield an error item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let rows = ChainIter::new(vec![vec![1, 2], vec![3]]);
    /// let seconds = rows.pluck(1).to_vec();
    /// assert_eq!(seconds[0], Ok(2));
    /// assert_eq!(seconds[1], Err(ChainError::IndexOutOfRange { index: 1, length: 1 }));
    /// ```
    pub fn pluck<U>(self, index: usize) -> ChainIter<Result<U>>
    where
        T: AsRef<[U]>,
        U: Clone + 'static,
    {
        ChainIter::new(
            self.into_iter()
                .map(move |row| sequence::pluck(&row, index)),
        )
    }

    /// Fields `indices` of every row as a list.
    pub fn pluck_many<U>(self, indices: Vec<usize>) -> ChainIter<Result<ChainList<U>>>
    where
        T: AsRef<[U]>,
        U: Clone + 'static,
    {
        ChainIter::new(self.into_iter().map(move |row| {
            indices
                .iter()
                .map(|index| sequence::pluck(&row, *index))
                .collect::<Result<ChainList<U>>>()
        }))
    }
}

impl<K, V> ChainIter<(K, V)>
where
    K: Hash + Eq + 'static,
    V: 'static,
{
    /// Drains key-value pairs into a map; later keys win.
    pub fn to_map(self) -> ChainMap<K, V> {
        self.into_iter().collect()
    }
}

// =============================================================================
// Drain
// =============================================================================

/// Iterator pulling from a [`ChainIter`]'s shared source.
pub struct Drain<T> {
    source: ReferenceCounter<RefCell<LazySource<T>>>,
}

impl<T> Iterator for Drain<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.borrow_mut().pull()
    }
}

impl<T> fmt::Debug for Drain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Drain").finish_non_exhaustive()
    }
}

impl<T> IntoIterator for ChainIter<T> {
    type Item = T;
    type IntoIter = Drain<T>;

    fn into_iter(self) -> Self::IntoIter {
        Drain {
            source: self.source,
        }
    }
}

impl<T> IntoIterator for &ChainIter<T> {
    type Item = T;
    type IntoIter = Drain<T>;

    /// Iterating by reference still consumes from the shared source.
    fn into_iter(self) -> Self::IntoIter {
        Drain {
            source: ReferenceCounter::clone(&self.source),
        }
    }
}

impl<T: 'static> FromIterator<T> for ChainIter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: 'static> Default for ChainIter<T> {
    fn default() -> Self {
        Self::empty()
    }
}
