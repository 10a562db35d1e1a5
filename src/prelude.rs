//! Prelude module for common imports.
//!
//! ```ignore
//! use keyed_reconcile::prelude::*;
//! ```

// Identity
pub use crate::item::{Identity, Item, Key, Tag};

// Reconciliation
pub use crate::algo::{find_stable_indices, reconcile, ListOp, ReconcilePlan, ReconcileStats};

// Node types
pub use crate::node::{Children, Element, Node, Text};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Hydration
pub use crate::hydrate::{
    align_children, align_children_with_config, hydrate, hydrate_with_config, HydrateConfig,
    HydrateOp, HydrateResult, HydrateStats, NodePath,
};

// Error
pub use crate::error::{ReconcileError, ReconcileResult};
