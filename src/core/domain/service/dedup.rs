//! Order-preserving de-duplication of record lists.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the records whose key has not been seen before, in their original order.
///
/// Only the first occurrence of each key is kept. The input is left untouched;
/// kept records are cloned into the returned vector.
pub fn dedup_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}
