//! Older names for the chainable containers.
//!
//! Earlier generations of this library shipped the same containers under
//! `C*` and `F*` prefixes. They are kept here as plain aliases so existing
//! code keeps compiling; there is exactly one implementation behind each.
//!
//! ```rust
//! use chaincollections::compat::{CList, FDict, frange};
//!
//! let list: CList<i64> = frange(0..3);
//! let dict: FDict<&str, i64> = FDict::from_pairs([("total", list.iter().sum())]);
//! assert_eq!(dict.get("total"), Some(&3));
//! ```

use crate::container::{ChainIter, ChainList, ChainMap, ChainSet};

pub use crate::container::{crange as frange, cxrange as fxrange};

/// Alias of [`ChainList`].
pub type CList<T> = ChainList<T>;
/// Alias of [`ChainList`].
pub type FList<T> = ChainList<T>;
/// Alias of [`ChainIter`].
pub type CGenerator<T> = ChainIter<T>;
/// Alias of [`ChainIter`].
pub type FGenerator<T> = ChainIter<T>;
/// Alias of [`ChainMap`].
pub type CDict<K, V> = ChainMap<K, V>;
/// Alias of [`ChainMap`].
pub type FDict<K, V> = ChainMap<K, V>;
/// Alias of [`ChainSet`].
pub type CSet<T> = ChainSet<T>;
/// Alias of [`ChainSet`].
pub type FSet<T> = ChainSet<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_aliases_share_one_implementation() {
        let list: FList<i64> = CList::from(vec![1, 2]);
        let set: CSet<i64> = list.clone().to_set();
        let lazy: FGenerator<i64> = list.to_iter();

        assert_eq!(lazy.to_vec(), vec![1, 2]);
        assert_eq!(set, FSet::from(vec![2, 1]));
    }

    #[rstest]
    fn test_range_aliases() {
        assert_eq!(frange(0..3), vec![0, 1, 2]);
        let generator: CGenerator<i64> = fxrange(5..7);
        assert_eq!(generator.to_vec(), vec![5, 6]);
    }

    #[rstest]
    fn test_dict_aliases() {
        let dict: CDict<&str, i32> = FDict::from_pairs([("a", 1)]);
        assert_eq!(dict.len(), 1);
    }
}
