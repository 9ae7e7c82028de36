//! The mapping container.
//!
//! [`ChainMap`] iterates in insertion order. Re-inserting an existing key
//! keeps its original position and replaces the value.
//!
//! Besides the key, value and item views, a mapping offers the pair-shaped
//! subset of the sequence methods: `map`, `filter`, `take`, `drop`, `find`,
//! `any_match`, `all_match`, `fold`, `tap` and `pipe`. Each works on
//! `(key, value)` pairs.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use super::{ChainList, Container, ContainerKind, WrapMode};
use crate::error::{ChainError, Result};
use crate::hashing::OrderedMap;

/// Key to value store in insertion order.
///
/// Equality ignores both order and wrap mode.
///
/// # Examples
///
/// ```rust
/// use chaincollections::prelude::*;
///
/// let stock = ChainMap::from_pairs([("apples", 3), ("pears", 0), ("plums", 7)]);
///
/// let available = stock.clone().valfilter(|count| *count > 0);
/// assert_eq!(available.keys(), vec!["apples", "plums"]);
///
/// let doubled = stock.valmap(|count| count * 2);
/// assert_eq!(doubled[&"plums"], 14);
/// ```
#[derive(Clone)]
pub struct ChainMap<K, V> {
    entries: OrderedMap<K, V>,
    mode: WrapMode,
}

impl<K: Hash + Eq, V> ChainMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: OrderedMap::default(),
            mode: WrapMode::Plain,
        }
    }

    fn with_entries<I>(entries: I, mode: WrapMode) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            mode,
        }
    }

    /// Builds a map from pairs; later duplicates replace earlier values.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_entries(pairs, WrapMode::Plain)
    }

    /// Maps every key in `keys` to a clone of `value`.
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        Self::from_pairs(keys.into_iter().map(|key| (key, value.clone())))
    }

    /// Returns the map with its wrap mode replaced.
    #[must_use]
    pub fn with_mode(mut self, mode: WrapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the map in [`WrapMode::Recursive`].
    #[must_use]
    pub fn recursive(self) -> Self {
        self.with_mode(WrapMode::Recursive)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowing iterator over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Unwraps into the backing map.
    pub fn into_inner(self) -> OrderedMap<K, V> {
        self.entries
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The keys as a sequence.
    pub fn keys(&self) -> ChainList<K>
    where
        K: Clone,
    {
        ChainList::with_elements(self.entries.keys().cloned(), self.mode)
    }

    /// The values as a sequence.
    pub fn values(&self) -> ChainList<V>
    where
        V: Clone,
    {
        ChainList::with_elements(self.entries.values().cloned(), self.mode)
    }

    /// The entries as a sequence of pairs.
    pub fn items(&self) -> ChainList<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        ChainList::with_elements(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
            self.mode,
        )
    }

    /// Consumes the map into its entries, in insertion order.
    pub fn to_pairs(self) -> Vec<(K, V)> {
        self.entries.into_iter().collect()
    }

    // =========================================================================
    // Key / value transforms
    // =========================================================================

    /// Applies `function` to every key. Colliding keys keep the later value.
    pub fn keymap<K2, F>(self, mut function: F) -> ChainMap<K2, V>
    where
        K2: Hash + Eq,
        F: FnMut(K) -> K2,
    {
        ChainMap::with_entries(
            self.entries
                .into_iter()
                .map(|(key, value)| (function(key), value)),
            self.mode,
        )
    }

    /// Applies `function` to every value.
    pub fn valmap<V2, F>(self, mut function: F) -> ChainMap<K, V2>
    where
        F: FnMut(V) -> V2,
    {
        ChainMap::with_entries(
            self.entries
                .into_iter()
                .map(|(key, value)| (key, function(value))),
            self.mode,
        )
    }

    /// Applies `function` to every entry.
    pub fn itemmap<K2, V2, F>(self, function: F) -> ChainMap<K2, V2>
    where
        K2: Hash + Eq,
        F: FnMut((K, V)) -> (K2, V2),
    {
        ChainMap::with_entries(self.entries.into_iter().map(function), self.mode)
    }

    /// Keeps entries whose key matches `predicate`.
    pub fn keyfilter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&K) -> bool,
    {
        self.entries.retain(|key, _| predicate(key));
        self
    }

    /// Keeps entries whose value matches `predicate`.
    pub fn valfilter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.entries.retain(|_, value| predicate(value));
        self
    }

    /// Keeps entries matching `predicate`.
    pub fn itemfilter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|key, value| predicate(key, value));
        self
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Merges `others` into this map; later maps win on shared keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let defaults = ChainMap::from_pairs([("color", "red"), ("size", "m")]);
    /// let chosen = ChainMap::from_pairs([("size", "xl")]);
    /// let merged = defaults.merge([chosen]);
    /// assert_eq!(merged.to_pairs(), vec![("color", "red"), ("size", "xl")]);
    /// ```
    #[must_use]
    pub fn merge<I>(mut self, others: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        for other in others {
            self.entries.extend(other.entries);
        }
        self
    }

    /// Merges `others` into this map, combining shared keys with `function`.
    ///
    /// `function` receives the accumulated value first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let monday = ChainMap::from_pairs([("tea", 2), ("coffee", 1)]);
    /// let tuesday = ChainMap::from_pairs([("coffee", 3), ("water", 5)]);
    /// let total = monday.merge_with([tuesday], |left, right| left + right);
    /// assert_eq!(total.to_pairs(), vec![("tea", 2), ("coffee", 4), ("water", 5)]);
    /// ```
    #[must_use]
    pub fn merge_with<I, F>(self, others: I, mut function: F) -> Self
    where
        I: IntoIterator<Item = Self>,
        F: FnMut(V, V) -> V,
    {
        let mode = self.mode;
        let mut running: OrderedMap<K, Option<V>> = self
            .entries
            .into_iter()
            .map(|(key, value)| (key, Some(value)))
            .collect();
        for other in others {
            for (key, value) in other.entries {
                let slot = running.entry(key).or_insert(None);
                *slot = Some(match slot.take() {
                    Some(previous) => function(previous, value),
                    None => value,
                });
            }
        }
        Self::with_entries(
            running
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value))),
            mode,
        )
    }

    /// A copy with `key` set to `value`.
    #[must_use]
    pub fn assoc(&self, key: K, value: V) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut entries = self.entries.clone();
        entries.insert(key, value);
        Self {
            entries,
            mode: self.mode,
        }
    }

    /// A copy without `keys`. Remaining entries keep their order.
    #[must_use]
    pub fn dissoc<I>(&self, keys: I) -> Self
    where
        K: Clone,
        V: Clone,
        I: IntoIterator<Item = K>,
    {
        let mut entries = self.entries.clone();
        for key in keys {
            entries.shift_remove(&key);
        }
        Self {
            entries,
            mode: self.mode,
        }
    }

    // =========================================================================
    // Pair-shaped sequence methods
    // =========================================================================

    /// Applies `function` to every `(key, value)` pair.
    pub fn map<K2, V2, F>(self, function: F) -> ChainMap<K2, V2>
    where
        K2: Hash + Eq,
        F: FnMut((K, V)) -> (K2, V2),
    {
        self.itemmap(function)
    }

    /// Keeps entries matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.itemfilter(predicate)
    }

    /// The first `count` entries in insertion order.
    pub fn take(mut self, count: usize) -> Self {
        self.entries.truncate(count);
        self
    }

    /// All but the first `count` entries in insertion order.
    pub fn drop(self, count: usize) -> Self {
        let mode = self.mode;
        Self::with_entries(self.entries.into_iter().skip(count), mode)
    }

    /// First entry matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<(&K, &V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries.iter().find(|(key, value)| predicate(key, value))
    }

    /// `true` if any entry matches; stops at the first match.
    pub fn any_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries.iter().any(|(key, value)| predicate(key, value))
    }

    /// `true` if every entry matches; stops at the first mismatch.
    pub fn all_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries.iter().all(|(key, value)| predicate(key, value))
    }

    /// Folds entries in insertion order.
    pub fn fold<S, F>(self, initial: S, function: F) -> S
    where
        F: FnMut(S, (K, V)) -> S,
    {
        self.entries.into_iter().fold(initial, function)
    }

    /// Calls `function` with the map and returns the map unchanged.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self),
    {
        function(&self);
        self
    }

    /// Passes the whole map to `function`.
    pub fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }
}

// =============================================================================
// Flat key / value arguments
// =============================================================================

impl<T: Hash + Eq> ChainMap<T, T> {
    /// Builds a map from alternating keys and values.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidArity`] for an odd number of arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chaincollections::prelude::*;
    ///
    /// let pairs = ChainMap::from_flat(["a", "1", "b", "2"]).unwrap();
    /// assert_eq!(pairs[&"b"], "2");
    ///
    /// assert_eq!(
    ///     ChainMap::from_flat(["a", "1", "b"]).map(|map| map.len()),
    ///     Err(ChainError::InvalidArity { count: 3 })
    /// );
    /// ```
    pub fn from_flat<I>(arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new().assoc_pairs(arguments)
    }

    /// Inserts alternating keys and values.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidArity`] for an odd number of arguments.
    pub fn assoc_pairs<I>(mut self, arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let arguments: Vec<T> = arguments.into_iter().collect();
        if arguments.len() % 2 != 0 {
            return Err(ChainError::InvalidArity {
                count: arguments.len(),
            });
        }
        let mut arguments = arguments.into_iter();
        while let (Some(key), Some(value)) = (arguments.next(), arguments.next()) {
            self.entries.insert(key, value);
        }
        Ok(self)
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<K, V> Container for ChainMap<K, V> {
    const KIND: ContainerKind = ContainerKind::Mapping;

    fn wrap_mode(&self) -> WrapMode {
        self.mode
    }
}

impl<K: Hash + Eq, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K, V> From<OrderedMap<K, V>> for ChainMap<K, V> {
    fn from(entries: OrderedMap<K, V>) -> Self {
        Self {
            entries,
            mode: WrapMode::Plain,
        }
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for ChainMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for ChainMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V> IntoIterator for ChainMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a ChainMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V, Q> Index<&Q> for ChainMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is absent.
    fn index(&self, key: &Q) -> &Self::Output {
        &self.entries[key]
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for ChainMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for ChainMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ChainMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(&self.entries).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for ChainMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Dynamic values
// =============================================================================

#[cfg(feature = "dynamic")]
mod dynamic {
    use std::borrow::Borrow;
    use std::hash::Hash;

    use super::ChainMap;
    use crate::container::Wrapped;
    use crate::error::{ChainError, Result};
    use crate::value::Value;

    impl<K: Hash + Eq> ChainMap<K, Value> {
        /// The value under `key`, wrapped according to the map's mode.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use chaincollections::prelude::*;
        ///
        /// let config = ChainMap::from_pairs([("ports", Value::list([80, 443]))]).recursive();
        /// let Some(Wrapped::Sequence(ports)) = config.nested("ports") else {
        ///     panic!("expected a wrapped sequence");
        /// };
        /// assert_eq!(ports.len(), 2);
        /// ```
        pub fn nested<Q>(&self, key: &Q) -> Option<Wrapped>
        where
            K: Borrow<Q>,
            Q: Hash + Eq + ?Sized,
        {
            self.entries
                .get(key)
                .map(|value| Wrapped::from_value(value, self.mode))
        }
    }

    impl ChainMap<Value, Value> {
        /// Builds a map from values that must each be a two-element list.
        ///
        /// # Errors
        ///
        /// Returns [`ChainError::TypeMismatch`] for the first element that is
        /// not a `[key, value]` list.
        pub fn try_from_values<I>(values: I) -> Result<Self>
        where
            I: IntoIterator<Item = Value>,
        {
            values
                .into_iter()
                .map(|value| match value {
                    Value::List(pair) if pair.len() == 2 => {
                        let mut pair = pair.into_iter();
                        match (pair.next(), pair.next()) {
                            (Some(key), Some(value)) => Ok((key, value)),
                            _ => Err(ChainError::TypeMismatch {
                                expected: "key-value pair",
                                found: "list",
                            }),
                        }
                    }
                    other => Err(ChainError::TypeMismatch {
                        expected: "key-value pair",
                        found: other.type_name(),
                    }),
                })
                .collect()
        }

        /// Follows `path` through nested maps and lists.
        ///
        /// Map levels are looked up by key, list levels by a non-negative
        /// integer index. Returns `None` as soon as a step does not resolve.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use chaincollections::prelude::*;
        ///
        /// let document = ChainMap::from_pairs([(
        ///     Value::from("servers"),
        ///     Value::list([Value::map([("host", "alpha")]), Value::map([("host", "beta")])]),
        /// )]);
        ///
        /// let path = [Value::from("servers"), Value::from(1), Value::from("host")];
        /// assert_eq!(document.get_in(&path), Some(&Value::from("beta")));
        /// assert_eq!(document.get_in(&[Value::from("missing")]), None);
        /// ```
        pub fn get_in(&self, path: &[Value]) -> Option<&Value> {
            let (head, rest) = path.split_first()?;
            let mut current = self.entries.get(head)?;
            for step in rest {
                current = match (current, step) {
                    (Value::Map(entries), key) => entries.get(key)?,
                    (Value::List(elements), Value::Integer(index)) => {
                        elements.get(usize::try_from(*index).ok()?)?
                    }
                    _ => return None,
                };
            }
            Some(current)
        }

        /// Like [`ChainMap::get_in`], falling back to `default`.
        pub fn get_in_or<'a>(&'a self, path: &[Value], default: &'a Value) -> &'a Value {
            self.get_in(path).unwrap_or(default)
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for ChainMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ChainMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<K, V> ChainMapVisitor<K, V> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for ChainMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    type Value = ChainMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = ChainMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.entries.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ChainMap<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ChainMapVisitor::new())
    }
}
