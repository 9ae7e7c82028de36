//! Key-based aggregation into insertion-ordered maps.
//!
//! Keys appear in the result in the order they are first seen.

use std::hash::Hash;

use crate::hashing::OrderedMap;

/// Groups elements by key, preserving element order inside each group.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::group_by;
///
/// let groups = group_by(0..6, |value| value % 2 == 0);
/// assert_eq!(groups[&true], vec![0, 2, 4]);
/// assert_eq!(groups[&false], vec![1, 3, 5]);
/// ```
pub fn group_by<I, F, K>(iterator: I, mut key_function: F) -> OrderedMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    let mut groups: OrderedMap<K, Vec<I::Item>> = OrderedMap::default();
    for element in iterator {
        groups.entry(key_function(&element)).or_default().push(element);
    }
    groups
}

/// Reduces each group with a binary operator.
///
/// The first element of a group seeds its reduction, so no initial value is
/// needed and single-element groups map to that element.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::reduce_by;
///
/// let products = reduce_by(0..10, |value| value % 2 == 0, |left, right| left * right);
/// assert_eq!(products[&true], 0);
/// assert_eq!(products[&false], 945);
/// ```
pub fn reduce_by<I, F, G, K>(iterator: I, mut key_function: F, mut function: G) -> OrderedMap<K, I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    G: FnMut(I::Item, I::Item) -> I::Item,
    K: Hash + Eq,
{
    let mut running: OrderedMap<K, Option<I::Item>> = OrderedMap::default();
    for element in iterator {
        let slot = running.entry(key_function(&element)).or_insert(None);
        *slot = Some(match slot.take() {
            Some(previous) => function(previous, element),
            None => element,
        });
    }
    running
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

/// Counts elements per key.
pub fn count_by<I, F, K>(iterator: I, mut key_function: F) -> OrderedMap<K, usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    let mut counts: OrderedMap<K, usize> = OrderedMap::default();
    for element in iterator {
        *counts.entry(key_function(&element)).or_insert(0) += 1;
    }
    counts
}

/// Counts occurrences of each distinct element.
///
/// # Examples
///
/// ```rust
/// use chaincollections::sequence::frequencies;
///
/// let counts = frequencies("abracadabra".chars());
/// assert_eq!(counts[&'a'], 5);
/// assert_eq!(counts[&'c'], 1);
/// ```
pub fn frequencies<I>(iterator: I) -> OrderedMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut counts: OrderedMap<I::Item, usize> = OrderedMap::default();
    for element in iterator {
        *counts.entry(element).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_group_by_key_order_is_first_seen() {
        let groups = group_by(["pear", "apple", "plum", "avocado"], |word| word.chars().next());
        let keys: Vec<Option<char>> = groups.keys().copied().collect();
        assert_eq!(keys, vec![Some('p'), Some('a')]);
        assert_eq!(groups[&Some('p')], vec!["pear", "plum"]);
    }

    #[rstest]
    fn test_reduce_by_single_element_group() {
        let reduced = reduce_by([5], |_| "only", |left, right| left + right);
        assert_eq!(reduced["only"], 5);
    }

    #[rstest]
    fn test_count_by_empty() {
        let counts = count_by(Vec::<i32>::new(), |value| *value);
        assert!(counts.is_empty());
    }

    #[rstest]
    fn test_count_by_parity() {
        let counts = count_by(1..=5, |value| value % 2);
        assert_eq!(counts[&1], 3);
        assert_eq!(counts[&0], 2);
    }
}
