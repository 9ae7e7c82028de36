//! Hasher selection for hash-based containers and combinators.
//!
//! `ChainMap`, `ChainSet` and the grouping combinators all hash with
//! [`HashBuilder`]. The default is the standard library's `RandomState`;
//! the `fxhash` and `ahash` features swap in faster, non-DoS-resistant
//! hashers. When both features are enabled, `fxhash` wins.

#[cfg(feature = "fxhash")]
/// Build hasher used by every hash-based structure in the crate.
pub type HashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Build hasher used by every hash-based structure in the crate.
pub type HashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Build hasher used by every hash-based structure in the crate.
pub type HashBuilder = std::collections::hash_map::RandomState;

/// Insertion-ordered map keyed with [`HashBuilder`].
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V, HashBuilder>;

/// Insertion-ordered set keyed with [`HashBuilder`].
pub type OrderedSet<T> = indexmap::IndexSet<T, HashBuilder>;
