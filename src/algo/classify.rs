//! Boundary trimming and middle classification
//!
//! The two analysis passes that run before move planning:
//!
//! 1. **Boundary trim**: double pointers strip the matching head and tail
//!    runs, so prepends, appends and no-op updates never reach the deeper
//!    machinery.
//! 2. **Middle classification**: a key-indexed sweep over the remaining
//!    middle partitions it into fresh items (inserts), vanished items
//!    (removes) and reusable items, recording for each reusable item the
//!    old position it came from.
//!
//! Both passes compare exact identities; there is no ordering or fuzzy
//! matching involved. Complexity O(n + m) with hashed key lookup.

use rustc_hash::FxHashMap;

use crate::error::ReconcileError;
use crate::item::{Identity, Item};

// =============================================================================
// KeyIndex
// =============================================================================

/// Identity → position lookup over one item sequence.
///
/// Duplicate identities fail fast with [`ReconcileError::DuplicateKey`]
/// instead of letting a later item shadow an earlier one.
#[derive(Debug)]
pub(crate) struct KeyIndex<'a> {
    map: FxHashMap<&'a Identity, usize>,
}

impl<'a> KeyIndex<'a> {
    /// Build the index, rejecting duplicate identities.
    pub(crate) fn build<T>(items: &'a [Item<T>]) -> Result<Self, ReconcileError> {
        let mut map =
            FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
        for (position, item) in items.iter().enumerate() {
            if let Some(first) = map.insert(&item.identity, position) {
                return Err(ReconcileError::DuplicateKey {
                    identity: item.identity.clone(),
                    first,
                    second: position,
                });
            }
        }
        Ok(Self { map })
    }

    /// Position of the item with this identity, if present.
    #[inline]
    pub(crate) fn get(&self, identity: &Identity) -> Option<usize> {
        self.map.get(identity).copied()
    }

    #[inline]
    pub(crate) fn contains(&self, identity: &Identity) -> bool {
        self.map.contains_key(identity)
    }
}

// =============================================================================
// Boundary trim
// =============================================================================

/// Lengths of the matching head and tail runs of two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrimmedBounds {
    /// Matching items at the front of both sequences.
    pub(crate) head: usize,
    /// Matching items at the back of both sequences, disjoint from `head`.
    pub(crate) tail: usize,
}

/// Strip the matching head and tail runs.
///
/// Walks a pointer from the front while identities agree, then a second,
/// independent pointer inward from both backs. Either walk stops at the
/// first mismatch or when the ranges are exhausted; the tail walk is
/// bounded so the two runs never overlap.
pub(crate) fn trim_matching_ends<T>(old: &[Item<T>], new: &[Item<T>]) -> TrimmedBounds {
    let limit = old.len().min(new.len());

    let mut head = 0;
    while head < limit && old[head].identity == new[head].identity {
        head += 1;
    }

    let mut tail = 0;
    while tail < limit - head
        && old[old.len() - 1 - tail].identity == new[new.len() - 1 - tail].identity
    {
        tail += 1;
    }

    TrimmedBounds { head, tail }
}

// =============================================================================
// Middle classification
// =============================================================================

/// Partition of the reordered middle region.
///
/// `position_sequence` and `sequence_to_new_index` are parallel arrays over
/// the reusable subset, in new-sequence order: the old-middle position each
/// reusable item came from, and the new-middle index it now occupies.
#[derive(Debug, Default)]
pub(crate) struct MiddleClassification {
    /// New-middle indices of items absent from the old middle.
    pub(crate) insertions: Vec<usize>,
    /// Old-middle indices of items absent from the new middle.
    pub(crate) removals: Vec<usize>,
    /// Old-middle positions of the reusable items, in new order.
    pub(crate) position_sequence: Vec<usize>,
    /// New-middle index of each reusable item, parallel to
    /// `position_sequence`.
    pub(crate) sequence_to_new_index: Vec<usize>,
}

/// Classify the middle regions into insertions, removals and reusable items.
pub(crate) fn classify_middle<T>(
    old_mid: &[Item<T>],
    new_mid: &[Item<T>],
) -> Result<MiddleClassification, ReconcileError> {
    let old_index = KeyIndex::build(old_mid)?;
    let new_index = KeyIndex::build(new_mid)?;

    let mut classification = MiddleClassification::default();

    for (new_idx, item) in new_mid.iter().enumerate() {
        if let Some(old_idx) = old_index.get(&item.identity) {
            classification.position_sequence.push(old_idx);
            classification.sequence_to_new_index.push(new_idx);
        } else {
            classification.insertions.push(new_idx);
        }
    }

    for (old_idx, item) in old_mid.iter().enumerate() {
        if !new_index.contains(&item.identity) {
            classification.removals.push(old_idx);
        }
    }

    debug_assert_eq!(
        classification.position_sequence.len(),
        classification.sequence_to_new_index.len(),
        "reusable-item arrays diverged"
    );

    Ok(classification)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items(keys: &[&str]) -> Vec<Item<()>> {
        keys.iter().map(|&k| Item::keyed((), k)).collect()
    }

    #[test]
    fn test_key_index_lookup() {
        let seq = items(&["a", "b", "c"]);
        let index = KeyIndex::build(&seq).unwrap();

        assert_eq!(index.get(&Identity::Key("b".into())), Some(1));
        assert_eq!(index.get(&Identity::Key("z".into())), None);
        assert!(index.contains(&Identity::Key("c".into())));
    }

    #[test]
    fn test_key_index_rejects_duplicates() {
        let seq = items(&["a", "b", "a"]);
        let err = KeyIndex::build(&seq).unwrap_err();

        match err {
            ReconcileError::DuplicateKey { identity, first, second } => {
                assert_eq!(identity, Identity::Key("a".into()));
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
        }
    }

    #[test]
    fn test_key_index_duplicate_type_tags() {
        // Unkeyed items are indexed by type tag; two equal tags collide.
        let seq = vec![Item::typed((), "li"), Item::typed((), "li")];
        assert!(KeyIndex::build(&seq).is_err());
    }

    #[test]
    fn test_trim_identical() {
        let old = items(&["a", "b", "c"]);
        let new = items(&["a", "b", "c"]);

        let bounds = trim_matching_ends(&old, &new);
        assert_eq!(bounds.head, 3);
        assert_eq!(bounds.tail, 0);
    }

    #[test]
    fn test_trim_append() {
        let old = items(&["a", "b"]);
        let new = items(&["a", "b", "c"]);

        let bounds = trim_matching_ends(&old, &new);
        assert_eq!(bounds.head, 2);
        assert_eq!(bounds.tail, 0);
    }

    #[test]
    fn test_trim_prepend() {
        let old = items(&["a", "b"]);
        let new = items(&["x", "a", "b"]);

        let bounds = trim_matching_ends(&old, &new);
        assert_eq!(bounds.head, 0);
        assert_eq!(bounds.tail, 2);
    }

    #[test]
    fn test_trim_head_and_tail() {
        let old = items(&["a", "b", "c", "d"]);
        let new = items(&["a", "c", "b", "d"]);

        let bounds = trim_matching_ends(&old, &new);
        assert_eq!(bounds.head, 1);
        assert_eq!(bounds.tail, 1);
    }

    #[test]
    fn test_trim_no_overlap() {
        let old = items(&["a"]);
        let new = items(&["a", "a"]);

        // The single shared item is consumed by the head walk; the tail
        // walk must not claim it again.
        let bounds = trim_matching_ends(&old, &new);
        assert_eq!(bounds.head, 1);
        assert_eq!(bounds.tail, 0);
    }

    #[test]
    fn test_trim_disjoint() {
        let old = items(&["a", "b"]);
        let new = items(&["c", "d"]);

        let bounds = trim_matching_ends(&old, &new);
        assert_eq!(bounds.head, 0);
        assert_eq!(bounds.tail, 0);
    }

    #[test]
    fn test_classify_reusable_order() {
        let old = items(&["a", "b", "c", "d", "e"]);
        let new = items(&["b", "e", "a", "d", "f", "c"]);

        let c = classify_middle(&old, &new).unwrap();
        assert_eq!(c.position_sequence, vec![1, 4, 0, 3, 2]);
        assert_eq!(c.sequence_to_new_index, vec![0, 1, 2, 3, 5]);
        assert_eq!(c.insertions, vec![4]); // f
        assert!(c.removals.is_empty());
    }

    #[test]
    fn test_classify_removals() {
        let old = items(&["a", "b", "c", "d"]);
        let new = items(&["d", "a", "b"]);

        let c = classify_middle(&old, &new).unwrap();
        assert_eq!(c.position_sequence, vec![3, 0, 1]);
        assert_eq!(c.removals, vec![2]); // c
        assert!(c.insertions.is_empty());
    }

    #[test]
    fn test_classify_empty_sides() {
        let none: Vec<Item<()>> = Vec::new();
        let some = items(&["a", "b"]);

        let c = classify_middle(&none, &some).unwrap();
        assert_eq!(c.insertions, vec![0, 1]);
        assert!(c.removals.is_empty());
        assert!(c.position_sequence.is_empty());

        let c = classify_middle(&some, &none).unwrap();
        assert_eq!(c.removals, vec![0, 1]);
        assert!(c.insertions.is_empty());
    }

    #[test]
    fn test_classify_duplicate_in_new() {
        let old = items(&["a", "b"]);
        let new = items(&["b", "a", "b"]);

        assert!(classify_middle(&old, &new).is_err());
    }
}
