//! The set container.
//!
//! [`ChainSet`] keeps unique elements in insertion order. Sequence methods
//! collect their output back into a set, so duplicates produced by a
//! transformation collapse. Set algebra never mutates: every algebraic method
//! returns a new set.

use std::fmt;
use std::hash::Hash;

use super::{ChainIter, ChainList, ChainMap, Container, ContainerKind};
use crate::error::{ChainError, Result};
use crate::hashing::OrderedSet;
use crate::sequence::{self, Accumulate, Chunks, Interpose, Join, PartitionBy, SlidingWindow};

/// Unique elements in insertion order.
///
/// Equality ignores order, as set equality does.
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
///
/// let left = ChainSet::from([1, 2, 3]);
/// let right = ChainSet::from([2, 3, 4]);
///
/// assert_eq!(left.union(&right), ChainSet::from([1, 2, 3, 4]));
/// assert_eq!(left.intersection(&right), ChainSet::from([2, 3]));
/// assert_eq!(left.difference(&right), ChainSet::from([1]));
/// assert_eq!(left.symmetric_difference(&right), ChainSet::from([1, 4]));
/// ```
#[derive(Clone)]
pub struct ChainSet<T> {
    elements: OrderedSet<T>,
}

impl<T: Hash + Eq> ChainSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: OrderedSet::default(),
        }
    }

    fn collect_from<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.elements.iter()
    }

    /// `true` if `element` is in the set.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// A copy of the set with `element` added.
    #[must_use]
    pub fn insert(&self, element: T) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.insert(element);
        Self { elements }
    }

    // =========================================================================
    // Set algebra
    // =========================================================================

    /// Elements in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::collect_from(self.elements.union(&other.elements).cloned())
    }

    /// Elements in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::collect_from(self.elements.intersection(&other.elements).cloned())
    }

    /// Elements in this set but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::collect_from(self.elements.difference(&other.elements).cloned())
    }

    /// Elements in exactly one of the sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::collect_from(
            self.elements
                .symmetric_difference(&other.elements)
                .cloned(),
        )
    }

    /// `true` if every element is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// `true` if every element of `other` is also here.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.elements.is_superset(&other.elements)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Elements in insertion order.
    pub fn to_vec(self) -> Vec<T> {
        self.elements.into_iter().collect()
    }

    /// Elements in insertion order as an eager sequence.
    pub fn to_list(self) -> ChainList<T> {
        self.elements.into_iter().collect()
    }

    /// Elements in insertion order as a lazy sequence.
    pub fn to_iter(self) -> ChainIter<T>
    where
        T: 'static,
    {
        ChainIter::new(self.elements)
    }

    // =========================================================================
    // Kind-preserving
    // =========================================================================

    /// Applies `function` to every element; equal results collapse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let parities = ChainSet::from([1, 2, 3, 4]).map(|value| value % 2);
    /// assert_eq!(parities.len(), 2);
    /// ```
    pub fn map<S, F>(self, function: F) -> ChainSet<S>
    where
        S: Hash + Eq,
        F: FnMut(T) -> S,
    {
        ChainSet::collect_from(self.elements.into_iter().map(function))
    }

    /// Keeps the elements matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::collect_from(self.elements.into_iter().filter(predicate))
    }

    /// Drops the elements matching `predicate`.
    pub fn remove<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::collect_from(
            self.elements
                .into_iter()
                .filter(|element| !predicate(element)),
        )
    }

    /// Maps every element to an iterable and unites the results.
    pub fn mapcat<I, F>(self, function: F) -> ChainSet<I::Item>
    where
        I: IntoIterator,
        I::Item: Hash + Eq,
        F: FnMut(T) -> I,
    {
        ChainSet::collect_from(self.elements.into_iter().flat_map(function))
    }

    /// The first `count` elements in insertion order.
    pub fn take(self, count: usize) -> Self {
        Self::collect_from(self.elements.into_iter().take(count))
    }

    /// All but the first `count` elements in insertion order.
    pub fn drop(self, count: usize) -> Self {
        Self::collect_from(self.elements.into_iter().skip(count))
    }

    /// Keeps elements while `predicate` holds.
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::collect_from(self.elements.into_iter().take_while(predicate))
    }

    /// Skips elements while `predicate` holds.
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::collect_from(self.elements.into_iter().skip_while(predicate))
    }

    /// The last `count` elements in insertion order.
    pub fn tail(self, count: usize) -> Self {
        Self::collect_from(sequence::tail(self.elements, count))
    }

    /// Groups of exactly `size`; the short remainder is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn partition(self, size: usize) -> ChainSet<ChainList<T>> {
        ChainSet::collect_from(Chunks::exact(self.elements.into_iter(), size).map(ChainList::from))
    }

    /// Groups of `size`; the last group may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn partition_all(self, size: usize) -> ChainSet<ChainList<T>> {
        ChainSet::collect_from(Chunks::all(self.elements.into_iter(), size).map(ChainList::from))
    }

    /// Alias of [`ChainSet::partition_all`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunk(self, size: usize) -> ChainSet<ChainList<T>> {
        self.partition_all(size)
    }

    /// Splits into runs of consecutive elements with equal keys.
    pub fn partition_by<K, F>(self, key_function: F) -> ChainSet<ChainList<T>>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        ChainSet::collect_from(
            PartitionBy::new(self.elements.into_iter(), key_function).map(ChainList::from),
        )
    }

    /// Already unique; returns the set unchanged.
    #[must_use]
    pub fn unique(self) -> Self {
        self
    }

    /// Keeps the first element seen for each key.
    pub fn unique_by<K, F>(self, key_function: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        Self::collect_from(sequence::unique_by(self.elements.into_iter(), key_function))
    }

    /// The `k` largest elements in descending order.
    pub fn top_k(self, k: usize) -> Self
    where
        T: Ord,
    {
        let mut elements: Vec<T> = self.elements.into_iter().collect();
        elements.sort_by(|left, right| right.cmp(left));
        elements.truncate(k);
        Self::collect_from(elements)
    }

    /// The `k` elements with the largest keys.
    pub fn top_k_by<K, F>(self, k: usize, key_function: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Self::collect_from(sequence::top_k_by(self.elements, k, key_function))
    }

    /// Every `step`-th element in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn stride_by(self, step: usize) -> Self {
        Self::collect_from(self.elements.into_iter().step_by(step))
    }

    /// Alternates with `other`, stopping at the shorter input.
    pub fn interleave<I>(self, other: I, swap: bool) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::collect_from(sequence::interleave(
            self.elements.into_iter(),
            other.into_iter(),
            swap,
        ))
    }

    /// Places `separator` between consecutive elements.
    pub fn interpose(self, separator: T) -> Self
    where
        T: Clone,
    {
        Self::collect_from(Interpose::new(self.elements.into_iter(), separator))
    }

    /// Inner join against `other`.
    pub fn join<U, I, K, LF, RF>(self, other: I, left_key: LF, right_key: RF) -> ChainSet<(T, U)>
    where
        T: Clone,
        U: Clone + Hash + Eq,
        I: IntoIterator<Item = U>,
        K: Hash + Eq,
        LF: FnMut(&T) -> K,
        RF: FnMut(&U) -> K,
    {
        ChainSet::collect_from(Join::new(
            self.elements.into_iter(),
            other.into_iter(),
            left_key,
            right_key,
        ))
    }

    /// Pairs each element with its position counted from `start`, wrapping
    /// around at `usize::MAX`.
    pub fn enumerate(self, start: usize) -> ChainSet<(usize, T)> {
        ChainSet::collect_from(
            self.elements
                .into_iter()
                .enumerate()
                .map(|(position, element)| (start.wrapping_add(position), element)),
        )
    }

    /// Combines with `other` element-wise, stopping at the shorter input.
    pub fn zip_with<U, S, I, F>(self, other: I, function: F) -> ChainSet<S>
    where
        S: Hash + Eq,
        I: IntoIterator<Item = U>,
        F: FnMut(T, U) -> S,
    {
        ChainSet::collect_from(sequence::zip_with(
            self.elements.into_iter(),
            other.into_iter(),
            function,
        ))
    }

    /// Pairs at positions where this set and `other` differ.
    pub fn diff<I>(self, other: I) -> ChainSet<(T, T)>
    where
        I: IntoIterator<Item = T>,
    {
        ChainSet::collect_from(sequence::diff(self.elements.into_iter(), other.into_iter()))
    }

    /// Running reduction; the first element is emitted unchanged.
    pub fn accumulate<F>(self, function: F) -> Self
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        Self::collect_from(Accumulate::new(self.elements.into_iter(), None, function))
    }

    /// Running reduction from `seed`; the seed itself is not emitted.
    pub fn accumulate_from<F>(self, seed: T, function: F) -> Self
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        Self::collect_from(Accumulate::new(
            self.elements.into_iter(),
            Some(seed),
            function,
        ))
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
    /// Returns [`ChainError::IndexOutOfRange`] for the first short row.
    pub fn pluck<U>(self, index: usize) -> Result<ChainSet<U>>
    where
        T: AsRef<[U]>,
        U: Clone + Hash + Eq,
    {
        self.elements
            .iter()
            .map(|row| sequence::pluck(row, index))
            .collect()
    }

    /// Fields `indices` of every row, one list per row.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::IndexOutOfRange`] for the first short row.
    pub fn pluck_many<U>(self, indices: &[usize]) -> Result<ChainSet<ChainList<U>>>
    where
        T: AsRef<[U]>,
        U: Clone + Hash + Eq,
    {
        self.elements
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|index| sequence::pluck(row, *index))
                    .collect::<Result<ChainList<U>>>()
            })
            .collect()
    }

    /// Calls `function` with the set and returns the set unchanged.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self),
    {
        function(&self);
        self
    }

    /// Passes the whole set to `function`.
    pub fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    // =========================================================================
    // Always-lazy
    // =========================================================================

    /// Overlapping windows in insertion order, each window a set.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn sliding_window(self, size: usize) -> ChainIter<Self>
    where
        T: Clone + 'static,
    {
        ChainIter::new(SlidingWindow::new(self.elements.into_iter(), size).map(Self::collect_from))
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
        sequence::group_by(self.elements, key_function)
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

    /// One count per element; every count is 1.
    pub fn frequencies(self) -> ChainMap<T, usize> {
        ChainMap::from(sequence::frequencies(self.elements))
    }

    // =========================================================================
    // Scalar
    // =========================================================================

    /// Reduces in insertion order with `function`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] on an empty set.
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

    /// Folds in insertion order from `initial`.
    pub fn fold<S, F>(self, initial: S, function: F) -> S
    where
        F: FnMut(S, T) -> S,
    {
        self.elements.into_iter().fold(initial, function)
    }

    /// The first element in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] on an empty set.
    pub fn first(&self) -> Result<&T> {
        sequence::nth(&self.elements, 0, "first")
    }

    /// The second element in insertion order.
    ///
    /// # Errors
    ///
    /// See [`ChainSet::nth`].
    pub fn second(&self) -> Result<&T> {
        sequence::nth(&self.elements, 1, "second")
    }

    /// The last element in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptySequence`] on an empty set.
    pub fn last(&self) -> Result<&T> {
        self.elements
            .last()
            .ok_or(ChainError::EmptySequence { operation: "last" })
    }

    /// The element at insertion position `index`.
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

    /// Always `true`.
    pub const fn is_distinct(&self) -> bool {
        true
    }
}

impl<T> ChainSet<T>
where
    T: IntoIterator + Hash + Eq,
    T::Item: Hash + Eq,
{
    /// Unites the nested iterables one level deep.
    pub fn concat(self) -> ChainSet<T::Item> {
        ChainSet::collect_from(self.elements.into_iter().flatten())
    }

    /// Alias of [`ChainSet::concat`].
    pub fn flatten(self) -> ChainSet<T::Item> {
        self.concat()
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<T> Container for ChainSet<T> {
    const KIND: ContainerKind = ContainerKind::Set;
}

impl<T: Hash + Eq> Default for ChainSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for ChainSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::collect_from(iter)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for ChainSet<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::collect_from(elements)
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for ChainSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::collect_from(elements)
    }
}

impl<T> From<OrderedSet<T>> for ChainSet<T> {
    fn from(elements: OrderedSet<T>) -> Self {
        Self { elements }
    }
}

impl<T: Hash + Eq> Extend<T> for ChainSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ChainSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ChainSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Hash + Eq> PartialEq for ChainSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Hash + Eq> Eq for ChainSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ChainSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(&self.elements).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ChainSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ChainSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ChainSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ChainSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ChainSetVisitor<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = ChainSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = ChainSet::new();
        while let Some(element) = seq.next_element()? {
            set.elements.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ChainSet<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ChainSetVisitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_algebra_returns_new_sets() {
        let left = ChainSet::from([1, 2, 3]);
        let right = ChainSet::from([2, 3, 4]);
        let _ = left.union(&right);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
    }

    #[rstest]
    fn test_subset_and_superset() {
        let small = ChainSet::from([1, 2]);
        let large = ChainSet::from([1, 2, 3]);
        assert!(small.is_subset(&large));
        assert!(large.is_superset(&small));
        assert!(!large.is_subset(&small));
    }

    #[rstest]
    fn test_insert_copies() {
        let base = ChainSet::from(["a"]);
        let grown = base.insert("b");
        assert!(!base.contains(&"b"));
        assert!(grown.contains(&"b"));
    }

    #[rstest]
    fn test_insertion_order_is_kept() {
        let set: ChainSet<i32> = vec![3, 1, 3, 2].into_iter().collect();
        assert_eq!(set.clone().to_vec(), vec![3, 1, 2]);
        assert_eq!(set.first(), Ok(&3));
        assert_eq!(set.last(), Ok(&2));
    }

    #[rstest]
    fn test_sliding_window_yields_sets() {
        let windows = ChainSet::from([1, 2, 3]).sliding_window(2).to_vec();
        assert_eq!(windows, vec![ChainSet::from([1, 2]), ChainSet::from([2, 3])]);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(ChainSet::from([1, 2]).to_string(), "{1, 2}");
        assert_eq!(ChainSet::<i32>::new().to_string(), "{}");
    }

    #[rstest]
    fn test_reduce_empty() {
        let empty: ChainSet<i32> = ChainSet::new();
        assert_eq!(
            empty.reduce(|left, right| left + right),
            Err(ChainError::EmptySequence { operation: "reduce" })
        );
    }
}
