//! keyed-reconcile - Keyed List Reconciliation with LIS-minimal Moves
//!
//! Given an old and a new ordered sequence of identifiable items, the
//! engine computes the structural edits (keep, insert, remove, move) that
//! transform one into the other, moving as few items as possible. A
//! companion hydration matcher aligns an already-materialized tree against
//! an expected tree without rebuilding it.
//!
//! ## Core Concepts
//!
//! **Identity over position**: every item carries an [`Identity`] - an
//! explicit key, or a structural type tag when no key is given - resolved
//! once at construction. Matching is identity equality, never positional
//! guessing.
//!
//! **Minimal moves**: after double-pointer boundary trimming and
//! key-indexed classification, the longest strictly increasing subsequence
//! of old positions marks the items already in relative order; only the
//! rest move. Move count is provably minimal for a move-only edit policy.
//!
//! **Hydration is not diffing**: the tree matcher assumes near-identical
//! inputs and uses a linear double-pointer scan with one-sided lookahead
//! per child list, falling back to replacement for out-of-order children
//! instead of computing a reordering.
//!
//! ## Modules
//! - `item`: item identity (`Key`, `Tag`, `Identity`, `Item`)
//! - `algo`: reconciliation pipeline and the LIS stable-set engine
//! - `node`: tree node types for hydration (`Node`, `Element`, `Text`)
//! - `attr`: attribute storage
//! - `hydrate`: hydration matcher
//! - `error`: error types
//!
//! ## Usage
//!
//! ```ignore
//! use keyed_reconcile::{reconcile, Item, ListOp};
//!
//! let old = vec![Item::keyed("A", "a"), Item::keyed("B", "b"), Item::keyed("C", "c")];
//! let new = vec![Item::keyed("C", "c"), Item::keyed("A", "a"), Item::keyed("B", "b")];
//!
//! let plan = reconcile(&old, &new)?;
//! assert_eq!(plan.stats.moved, 1); // only C moves; A and B keep their order
//! for op in &plan.ops {
//!     match op {
//!         ListOp::Move { item, new_index, .. } => place(item, *new_index),
//!         // ...
//!     }
//! }
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Item identity: Key, Tag, Identity, Item
pub mod item;

/// Algorithms: reconciliation pipeline, LIS stable-set engine
pub mod algo;

/// Node types for hydration: Node, Element, Text
pub mod node;

/// Attribute storage
pub mod attr;

/// Hydration matcher
pub mod hydrate;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Identity
pub use item::{Identity, Item, Key, Tag};

// Reconciliation
pub use algo::{find_stable_indices, reconcile, ListOp, ReconcilePlan, ReconcileStats};

// Node types
pub use node::{Children, Element, Node, Text};

// Attributes
pub use attr::{Attrs, AttrsExt};

// Hydration
pub use hydrate::{
    align_children, align_children_with_config, hydrate, hydrate_with_config, HydrateConfig,
    HydrateOp, HydrateResult, HydrateStats, NodePath,
};

// Error types
pub use error::{ReconcileError, ReconcileResult};

// =============================================================================
// Tests
// =============================================================================
