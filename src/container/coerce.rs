//! Coercion of ordinary collections into chainable containers.
//!
//! [`chain`] picks the container kind from the input's static type:
//!
//! | Input | Container |
//! |---|---|
//! | `Vec`, arrays, slices, `VecDeque` | [`ChainList`] |
//! | `HashMap`, `BTreeMap`, `IndexMap` | [`ChainMap`] |
//! | `HashSet`, `BTreeSet`, `IndexSet` | [`ChainSet`] |
//! | integer ranges, owning iterators, `map`/`filter`/`take`/... adapters, `from_fn`, `successors` | [`ChainIter`] |
//! | `Value` (feature `dynamic`) | [`Chained`], decided at runtime |
//!
//! Iterator adapters are covered one by one: a blanket impl over every
//! `Iterator` would overlap with the collection impls. Anything else that
//! iterates can go through [`ChainIter::new`].
//!
//! Containers that are already chainable come back unchanged, except that
//! [`chain_recursive`] upgrades a plain `ChainList` or `ChainMap` to
//! [`WrapMode::Recursive`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};

use super::{ChainIter, ChainList, ChainMap, ChainSet, Container, WrapMode};

#[cfg(feature = "dynamic")]
pub use dynamic::Chained;

// =============================================================================
// IntoChain
// =============================================================================

/// Conversion into the matching chainable container.
///
/// Implement this for your own collection types to make them usable with
/// [`chain`] and [`chain_recursive`].
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
/// use std::collections::BTreeSet;
///
/// let set: ChainSet<i32> = BTreeSet::from([3, 1, 2]).into_chain(WrapMode::Plain);
/// assert_eq!(set.to_vec(), vec![1, 2, 3]);
/// ```
pub trait IntoChain {
    /// The container this value converts into.
    type Chain;

    /// Converts `self`, applying `mode` where the container supports it.
    fn into_chain(self, mode: WrapMode) -> Self::Chain;
}

/// Wraps `source` in its matching container, without recursive wrapping.
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
/// use std::collections::HashMap;
///
/// let list = chain(vec![1, 2, 3]).map(|value| value + 1);
/// assert_eq!(list, vec![2, 3, 4]);
///
/// let totals = chain(HashMap::from([("a", 1), ("b", 2)])).valmap(|value| value * 10);
/// assert_eq!(totals.get("b"), Some(&20));
///
/// let lazy = chain(0_i64..).map(|value| value * 3).take(3);
/// assert_eq!(lazy.to_vec(), vec![0, 3, 6]);
/// ```
pub fn chain<S: IntoChain>(source: S) -> S::Chain {
    source.into_chain(WrapMode::Plain)
}

/// Wraps `source` with [`WrapMode::Recursive`] where the container supports it.
///
/// Sets and lazy sequences do not carry a mode and are returned as plain
/// containers.
pub fn chain_recursive<S: IntoChain>(source: S) -> S::Chain {
    source.into_chain(WrapMode::Recursive)
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> IntoChain for Vec<T> {
    type Chain = ChainList<T>;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        ChainList::from(self).with_mode(mode)
    }
}

impl<T, const N: usize> IntoChain for [T; N] {
    type Chain = ChainList<T>;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        ChainList::from(self).with_mode(mode)
    }
}

impl<T: Clone> IntoChain for &[T] {
    type Chain = ChainList<T>;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        ChainList::from(self.to_vec()).with_mode(mode)
    }
}

impl<T> IntoChain for VecDeque<T> {
    type Chain = ChainList<T>;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        ChainList::from(Vec::from(self)).with_mode(mode)
    }
}

impl<T> IntoChain for ChainList<T> {
    type Chain = Self;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        if mode.is_recursive() && !self.wrap_mode().is_recursive() {
            tracing::debug!(length = self.len(), "upgrading list to recursive wrapping");
            return self.with_mode(mode);
        }
        self
    }
}

// =============================================================================
// Mappings
// =============================================================================

impl<K: Hash + Eq, V, S> IntoChain for HashMap<K, V, S> {
    type Chain = ChainMap<K, V>;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        ChainMap::from_pairs(self).with_mode(mode)
    }
}

impl<K: Hash + Eq, V> IntoChain for BTreeMap<K, V> {
    type Chain = ChainMap<K, V>;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        ChainMap::from_pairs(self).with_mode(mode)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> IntoChain for IndexMap<K, V, S> {
    type Chain = ChainMap<K, V>;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        ChainMap::from_pairs(self).with_mode(mode)
    }
}

impl<K: Hash + Eq, V> IntoChain for ChainMap<K, V> {
    type Chain = Self;

    fn into_chain(self, mode: WrapMode) -> Self::Chain {
        if mode.is_recursive() && !self.wrap_mode().is_recursive() {
            tracing::debug!(length = self.len(), "upgrading map to recursive wrapping");
            return self.with_mode(mode);
        }
        self
    }
}

// =============================================================================
// Sets
// =============================================================================

impl<T: Hash + Eq, S> IntoChain for HashSet<T, S> {
    type Chain = ChainSet<T>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        self.into_iter().collect()
    }
}

impl<T: Hash + Eq> IntoChain for BTreeSet<T> {
    type Chain = ChainSet<T>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        self.into_iter().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> IntoChain for IndexSet<T, S> {
    type Chain = ChainSet<T>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        self.into_iter().collect()
    }
}

impl<T> IntoChain for ChainSet<T> {
    type Chain = Self;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        self
    }
}

// =============================================================================
// Lazy sequences
// =============================================================================

impl<T> IntoChain for ChainIter<T> {
    type Chain = Self;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        self
    }
}

macro_rules! impl_into_chain_for_ranges {
    ($($integer:ty),* $(,)?) => {
        $(
            impl IntoChain for std::ops::Range<$integer> {
                type Chain = ChainIter<$integer>;

                fn into_chain(self, _mode: WrapMode) -> Self::Chain {
                    ChainIter::new(self)
                }
            }

            impl IntoChain for std::ops::RangeInclusive<$integer> {
                type Chain = ChainIter<$integer>;

                fn into_chain(self, _mode: WrapMode) -> Self::Chain {
                    ChainIter::new(self)
                }
            }

            impl IntoChain for std::ops::RangeFrom<$integer> {
                type Chain = ChainIter<$integer>;

                fn into_chain(self, _mode: WrapMode) -> Self::Chain {
                    ChainIter::new(self)
                }
            }
        )*
    };
}

impl_into_chain_for_ranges!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_into_chain_for_owning_iterators {
    ($($iterator:ident)::+) => {
        impl<T: 'static> IntoChain for $($iterator)::+<T> {
            type Chain = ChainIter<T>;

            fn into_chain(self, _mode: WrapMode) -> Self::Chain {
                ChainIter::new(self)
            }
        }
    };
}

impl_into_chain_for_owning_iterators!(std::vec::IntoIter);
impl_into_chain_for_owning_iterators!(std::collections::vec_deque::IntoIter);
impl_into_chain_for_owning_iterators!(std::iter::Empty);
impl_into_chain_for_owning_iterators!(std::iter::Once);

macro_rules! impl_into_chain_for_adapters {
    ($($adapter:ident)::+) => {
        impl<I> IntoChain for $($adapter)::+<I>
        where
            I: Iterator + 'static,
        {
            type Chain = ChainIter<I::Item>;

            fn into_chain(self, _mode: WrapMode) -> Self::Chain {
                ChainIter::new(self)
            }
        }
    };
}

impl_into_chain_for_adapters!(std::iter::Take);
impl_into_chain_for_adapters!(std::iter::Skip);
impl_into_chain_for_adapters!(std::iter::StepBy);
impl_into_chain_for_adapters!(std::iter::Peekable);
impl_into_chain_for_adapters!(std::iter::Fuse);

impl<B, I, F> IntoChain for std::iter::Map<I, F>
where
    B: 'static,
    I: Iterator + 'static,
    F: FnMut(I::Item) -> B + 'static,
{
    type Chain = ChainIter<B>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        ChainIter::new(self)
    }
}

impl<I, P> IntoChain for std::iter::Filter<I, P>
where
    I: Iterator + 'static,
    P: FnMut(&I::Item) -> bool + 'static,
{
    type Chain = ChainIter<I::Item>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        ChainIter::new(self)
    }
}

impl<B, I, F> IntoChain for std::iter::FilterMap<I, F>
where
    B: 'static,
    I: Iterator + 'static,
    F: FnMut(I::Item) -> Option<B> + 'static,
{
    type Chain = ChainIter<B>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        ChainIter::new(self)
    }
}

impl<T, F> IntoChain for std::iter::FromFn<F>
where
    T: 'static,
    F: FnMut() -> Option<T> + 'static,
{
    type Chain = ChainIter<T>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        ChainIter::new(self)
    }
}

impl<T, F> IntoChain for std::iter::Successors<T, F>
where
    F: FnMut(&T) -> Option<T> + 'static,
    T: 'static,
{
    type Chain = ChainIter<T>;

    fn into_chain(self, _mode: WrapMode) -> Self::Chain {
        ChainIter::new(self)
    }
}

// =============================================================================
// Dynamic values
// =============================================================================

#[cfg(feature = "dynamic")]
mod dynamic {
    use super::IntoChain;
    use crate::container::{ChainIter, ChainList, ChainMap, ChainSet, ContainerKind, WrapMode};
    use crate::value::Value;

    /// A chainable container whose kind was chosen at runtime.
    ///
    /// Produced by coercing a [`Value`]. Lists become sequences, maps become
    /// mappings, sets stay sets and any scalar becomes a one-element sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let chained = chain(Value::map([("a", 1)]));
    /// assert_eq!(chained.kind(), ContainerKind::Mapping);
    ///
    /// let single = chain(Value::from(7)).into_sequence();
    /// assert_eq!(single.map(|list| list.len()), Some(1));
    /// ```
    #[derive(Debug, Clone)]
    pub enum Chained {
        /// An eager sequence.
        Sequence(ChainList<Value>),
        /// A lazy sequence.
        Lazy(ChainIter<Value>),
        /// A mapping.
        Mapping(ChainMap<Value, Value>),
        /// A set.
        Set(ChainSet<Value>),
    }

    impl Chained {
        /// The kind of the wrapped container.
        #[must_use]
        pub const fn kind(&self) -> ContainerKind {
            match self {
                Self::Sequence(_) => ContainerKind::Sequence,
                Self::Lazy(_) => ContainerKind::LazySequence,
                Self::Mapping(_) => ContainerKind::Mapping,
                Self::Set(_) => ContainerKind::Set,
            }
        }

        /// The sequence, if this is one.
        #[must_use]
        pub fn into_sequence(self) -> Option<ChainList<Value>> {
            match self {
                Self::Sequence(list) => Some(list),
                _ => None,
            }
        }

        /// The lazy sequence, if this is one.
        #[must_use]
        pub fn into_lazy(self) -> Option<ChainIter<Value>> {
            match self {
                Self::Lazy(lazy) => Some(lazy),
                _ => None,
            }
        }

        /// The mapping, if this is one.
        #[must_use]
        pub fn into_mapping(self) -> Option<ChainMap<Value, Value>> {
            match self {
                Self::Mapping(map) => Some(map),
                _ => None,
            }
        }

        /// The set, if this is one.
        #[must_use]
        pub fn into_set(self) -> Option<ChainSet<Value>> {
            match self {
                Self::Set(set) => Some(set),
                _ => None,
            }
        }

        /// Drains any kind into a list of values; mapping entries become
        /// two-element lists.
        #[must_use]
        pub fn into_values(self) -> Vec<Value> {
            match self {
                Self::Sequence(list) => list.to_vec(),
                Self::Lazy(lazy) => lazy.to_vec(),
                Self::Mapping(map) => map
                    .into_iter()
                    .map(|(key, value)| Value::List(vec![key, value]))
                    .collect(),
                Self::Set(set) => set.to_vec(),
            }
        }
    }

    impl From<ChainList<Value>> for Chained {
        fn from(list: ChainList<Value>) -> Self {
            Self::Sequence(list)
        }
    }

    impl From<ChainIter<Value>> for Chained {
        fn from(lazy: ChainIter<Value>) -> Self {
            Self::Lazy(lazy)
        }
    }

    impl From<ChainMap<Value, Value>> for Chained {
        fn from(map: ChainMap<Value, Value>) -> Self {
            Self::Mapping(map)
        }
    }

    impl From<ChainSet<Value>> for Chained {
        fn from(set: ChainSet<Value>) -> Self {
            Self::Set(set)
        }
    }

    impl IntoChain for Value {
        type Chain = Chained;

        fn into_chain(self, mode: WrapMode) -> Self::Chain {
            let found = self.type_name();
            let chained = match self {
                Self::List(elements) => Chained::Sequence(elements.into_chain(mode)),
                Self::Map(entries) => Chained::Mapping(ChainMap::from(entries).with_mode(mode)),
                Self::Set(elements) => Chained::Set(ChainSet::from(elements)),
                scalar => Chained::Sequence(vec![scalar].into_chain(mode)),
            };
            tracing::debug!(found, kind = %chained.kind(), recursive = mode.is_recursive(), "coerced value");
            chained
        }
    }

    impl IntoChain for Chained {
        type Chain = Self;

        fn into_chain(self, mode: WrapMode) -> Self::Chain {
            match self {
                Self::Sequence(list) => Self::Sequence(list.into_chain(mode)),
                Self::Mapping(map) => Self::Mapping(map.into_chain(mode)),
                other => other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerKind;
    use rstest::rstest;

    #[rstest]
    fn test_vec_becomes_plain_list() {
        let list = chain(vec![1, 2, 3]);
        assert_eq!(list, vec![1, 2, 3]);
        assert_eq!(list.wrap_mode(), WrapMode::Plain);
    }

    #[rstest]
    fn test_slice_and_deque_become_lists() {
        let slice: &[i32] = &[4, 5];
        assert_eq!(chain(slice), vec![4, 5]);
        assert_eq!(chain(VecDeque::from([6, 7])), vec![6, 7]);
    }

    #[rstest]
    fn test_btree_map_keeps_sorted_insertion_order() {
        let map = chain(BTreeMap::from([("b", 2), ("a", 1)]));
        assert_eq!(map.keys(), vec!["a", "b"]);
    }

    #[rstest]
    fn test_sets_deduplicate() {
        let set = chain(HashSet::from([1, 1, 2]));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    #[case(0..4, vec![0, 1, 2, 3])]
    #[case(5..5, vec![])]
    fn test_range_becomes_lazy(#[case] range: std::ops::Range<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(chain(range).to_vec(), expected);
    }

    #[rstest]
    fn test_inclusive_and_open_ranges() {
        assert_eq!(chain(1..=3_u8).to_vec(), vec![1, 2, 3]);
        assert_eq!(chain(10_usize..).take(2).to_vec(), vec![10, 11]);
    }

    #[rstest]
    fn test_iterator_adapters_become_lazy() {
        let doubled = chain(vec![1, 2, 3].into_iter().map(|value| value * 2));
        assert_eq!(doubled.kind(), ContainerKind::LazySequence);
        assert_eq!(doubled.to_vec(), vec![2, 4, 6]);

        let odd = chain((0..10).filter(|value| value % 2 == 1).take(3));
        assert_eq!(odd.to_vec(), vec![1, 3, 5]);

        let powers = chain(std::iter::successors(Some(1_u32), |value| value.checked_mul(2)));
        assert_eq!(powers.take(4).to_vec(), vec![1, 2, 4, 8]);
    }

    #[rstest]
    fn test_adapter_coercion_stays_deferred() {
        let pulled = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&pulled);
        let lazy = chain(vec![1, 2, 3].into_iter().map(move |value| {
            counter.set(counter.get() + 1);
            value
        }));
        assert_eq!(pulled.get(), 0);
        assert_eq!(lazy.first(), Ok(1));
        assert_eq!(pulled.get(), 1);
    }

    #[rstest]
    fn test_wrapped_list_is_returned_unchanged() {
        let list = ChainList::from(vec![1, 2]).recursive();
        let rechained = chain(list.clone());
        assert_eq!(rechained.wrap_mode(), WrapMode::Recursive);
        assert_eq!(rechained, list);
    }

    #[rstest]
    fn test_recursive_request_upgrades_plain_containers() {
        let list = chain_recursive(ChainList::from(vec![1]));
        assert!(list.wrap_mode().is_recursive());

        let map = chain_recursive(ChainMap::from([("a", 1)]));
        assert!(map.wrap_mode().is_recursive());
    }

    #[rstest]
    fn test_sets_ignore_recursive_request() {
        let set = chain_recursive(vec![1, 2]).to_set();
        assert_eq!(set.wrap_mode(), WrapMode::Plain);
    }

    #[cfg(feature = "dynamic")]
    mod dynamic {
        use super::*;
        use crate::value::Value;

        #[rstest]
        #[case(Value::list([1, 2]), ContainerKind::Sequence)]
        #[case(Value::map([("a", 1)]), ContainerKind::Mapping)]
        #[case(Value::set([1, 2]), ContainerKind::Set)]
        #[case(Value::from("scalar"), ContainerKind::Sequence)]
        #[case(Value::Null, ContainerKind::Sequence)]
        fn test_value_coercion_kind(#[case] value: Value, #[case] expected: ContainerKind) {
            assert_eq!(chain(value).kind(), expected);
        }

        #[rstest]
        fn test_scalar_becomes_singleton() {
            let list = chain(Value::from(5)).into_sequence();
            assert_eq!(list, Some(ChainList::from(vec![Value::from(5)])));
        }

        #[rstest]
        fn test_recursive_value_coercion_flags_mapping() {
            let chained = chain_recursive(Value::map([("a", Value::list([1]))]));
            let map = chained.into_mapping();
            assert!(map.is_some_and(|map| map.wrap_mode().is_recursive()));
        }

        #[rstest]
        fn test_into_values_flattens_entries() {
            let values = chain(Value::map([("a", 1)])).into_values();
            assert_eq!(values, vec![Value::list([Value::from("a"), Value::from(1)])]);
        }
    }
}
