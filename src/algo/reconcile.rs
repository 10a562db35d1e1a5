//! Keyed list reconciliation
//!
//! Computes the structural edits that transform one keyed sequence into
//! another: which items stay, which move, which appear and which vanish.
//! This is a **pure planning module**: it never touches whatever the items
//! represent, it only classifies and orders them.
//!
//! # Pipeline
//!
//! ```text
//! trim_matching_ends  -> matching head/tail runs become Keeps
//! classify_middle     -> inserts, removes, reusable items + old positions
//! find_stable_indices -> largest already-ordered subset (no move needed)
//! schedule_ops        -> ordered edit script
//! ```
//!
//! # Operation order
//!
//! The emitted script has a documented, deterministic order: head `Keep`s
//! ascending, then `Remove`s ascending by old position, then the middle
//! walked from its highest new index down to its lowest, then tail `Keep`s
//! ascending. Walking the middle backwards lets every emitted item anchor
//! against already-placed items at higher indices, so an applier never
//! recomputes positions mid-script. A consumer that needs a different
//! application order re-sorts by the position fields each operation
//! carries.
//!
//! # Complexity
//!
//! - Time: O(n + m log m) where m is the reusable middle size
//! - Space: O(n + m) for the plan

use rustc_hash::FxHashSet;

use crate::error::ReconcileError;
use crate::item::{Identity, Item};

use super::classify::{classify_middle, trim_matching_ends, MiddleClassification};
use super::lis::find_stable_indices;

// =============================================================================
// Operations
// =============================================================================

/// One structural edit in a reconciliation plan.
///
/// Every variant carries the item it concerns plus its absolute position
/// in the full input sequences, so the ops stay meaningful when re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp<T> {
    /// Item present in both sequences, relative order already correct.
    Keep {
        item: Item<T>,
        old_index: usize,
        new_index: usize,
    },
    /// Item only present in the new sequence.
    Insert { item: Item<T>, new_index: usize },
    /// Item only present in the old sequence.
    Remove { item: Item<T>, old_index: usize },
    /// Item present in both sequences but outside the stable set.
    Move {
        item: Item<T>,
        old_index: usize,
        new_index: usize,
    },
}

impl<T> ListOp<T> {
    /// Check if this is a Keep operation.
    pub fn is_keep(&self) -> bool {
        matches!(self, ListOp::Keep { .. })
    }

    /// Check if this is a Move operation.
    pub fn is_move(&self) -> bool {
        matches!(self, ListOp::Move { .. })
    }

    /// Identity of the item this operation concerns.
    pub fn identity(&self) -> &Identity {
        match self {
            ListOp::Keep { item, .. }
            | ListOp::Insert { item, .. }
            | ListOp::Remove { item, .. }
            | ListOp::Move { item, .. } => &item.identity,
        }
    }
}

// =============================================================================
// Plan and statistics
// =============================================================================

/// Statistics from one reconciliation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ReconcileStats {
    /// Items left in place.
    pub kept: usize,
    /// Items newly inserted.
    pub inserted: usize,
    /// Items removed.
    pub removed: usize,
    /// Items repositioned.
    pub moved: usize,
}

impl ReconcileStats {
    /// Total number of structural edits (not counting keeps).
    pub fn edit_count(&self) -> usize {
        self.inserted + self.removed + self.moved
    }

    /// Check if the sequences were already identical.
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

/// Result of reconciling two sequences: the ordered edit script plus
/// summary counters.
#[derive(Debug)]
#[must_use]
pub struct ReconcilePlan<T> {
    /// Edit script in emission order (see module docs).
    pub ops: Vec<ListOp<T>>,
    /// Summary counters over `ops`.
    pub stats: ReconcileStats,
}

impl<T> ReconcilePlan<T> {
    /// Check if any structural change was detected.
    pub fn has_changes(&self) -> bool {
        !self.stats.is_empty()
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Reconcile two keyed sequences into an ordered edit script.
///
/// Items are matched by [`Identity`]: explicit key against explicit key,
/// type tag against type tag, never across. Within each analyzed region an
/// identity may appear only once; duplicates are rejected with
/// [`ReconcileError::DuplicateKey`].
///
/// The move count is minimal for a move-only edit policy: exactly the
/// reusable items outside the longest already-ordered subsequence are
/// moved.
///
/// # Example
///
/// ```ignore
/// let old = vec![Item::keyed("alpha", "a"), Item::keyed("beta", "b")];
/// let new = vec![Item::keyed("beta", "b"), Item::keyed("alpha", "a")];
/// let plan = reconcile(&old, &new)?;
/// assert_eq!(plan.stats.moved, 1);
/// ```
pub fn reconcile<T: Clone>(
    old: &[Item<T>],
    new: &[Item<T>],
) -> Result<ReconcilePlan<T>, ReconcileError> {
    let bounds = trim_matching_ends(old, new);
    let old_mid = &old[bounds.head..old.len() - bounds.tail];
    let new_mid = &new[bounds.head..new.len() - bounds.tail];

    let classification = classify_middle(old_mid, new_mid)?;
    let stable = find_stable_indices(&classification.position_sequence);

    Ok(schedule_ops(old, new, bounds.head, bounds.tail, &classification, &stable))
}

// =============================================================================
// Scheduling
// =============================================================================

/// Convert classification + stable set into the ordered edit script.
fn schedule_ops<T: Clone>(
    old: &[Item<T>],
    new: &[Item<T>],
    head: usize,
    tail: usize,
    classification: &MiddleClassification,
    stable: &[usize],
) -> ReconcilePlan<T> {
    debug_assert_eq!(
        classification.position_sequence.len(),
        classification.sequence_to_new_index.len(),
        "reusable-item arrays diverged"
    );

    let new_mid_len = new.len() - tail - head;
    debug_assert_eq!(
        classification.insertions.len() + classification.position_sequence.len(),
        new_mid_len,
        "classification does not cover the new middle"
    );
    let mut ops = Vec::with_capacity(new.len() + classification.removals.len());
    let mut stats = ReconcileStats::default();

    // Head keeps, original order.
    for index in 0..head {
        ops.push(ListOp::Keep {
            item: new[index].clone(),
            old_index: index,
            new_index: index,
        });
        stats.kept += 1;
    }

    // Removals reference independent old positions; emit them as one block
    // ascending so the script order stays fully deterministic.
    for &old_mid_idx in &classification.removals {
        let old_index = head + old_mid_idx;
        ops.push(ListOp::Remove {
            item: old[old_index].clone(),
            old_index,
        });
        stats.removed += 1;
    }

    // Reusable slot for each new-middle index, `None` meaning fresh.
    let mut slot_of_new: Vec<Option<usize>> = vec![None; new_mid_len];
    for (seq, &new_mid_idx) in classification.sequence_to_new_index.iter().enumerate() {
        slot_of_new[new_mid_idx] = Some(seq);
    }
    let stable_set: FxHashSet<usize> = stable.iter().copied().collect();

    // Middle region from highest new index down: items placed earlier in
    // the script sit at higher indices and anchor the ones below them.
    for new_mid_idx in (0..new_mid_len).rev() {
        let new_index = head + new_mid_idx;
        match slot_of_new[new_mid_idx] {
            None => {
                ops.push(ListOp::Insert {
                    item: new[new_index].clone(),
                    new_index,
                });
                stats.inserted += 1;
            }
            Some(seq) => {
                let old_index = head + classification.position_sequence[seq];
                if stable_set.contains(&seq) {
                    ops.push(ListOp::Keep {
                        item: new[new_index].clone(),
                        old_index,
                        new_index,
                    });
                    stats.kept += 1;
                } else {
                    ops.push(ListOp::Move {
                        item: new[new_index].clone(),
                        old_index,
                        new_index,
                    });
                    stats.moved += 1;
                }
            }
        }
    }

    // Tail keeps, original order.
    for offset in 0..tail {
        let old_index = old.len() - tail + offset;
        let new_index = new.len() - tail + offset;
        ops.push(ListOp::Keep {
            item: new[new_index].clone(),
            old_index,
            new_index,
        });
        stats.kept += 1;
    }

    ReconcilePlan { ops, stats }
}

// =============================================================================
// Tests
// =============================================================================
