//! Error types for keyed reconciliation.
//!
//! Malformed but well-keyed input is never an error: unknown keys classify
//! as inserts or removes. The only recoverable failure is a violated key
//! uniqueness precondition.

use thiserror::Error;

use crate::item::Identity;

/// Errors that can occur during reconciliation.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Two items in the same sequence share an identity.
    ///
    /// The engine rejects this case instead of letting a later lookup
    /// silently shadow an earlier item. Positions are indices into the
    /// middle region that was being indexed when the duplicate surfaced.
    #[error("duplicate {identity} in sequence at positions {first} and {second}")]
    DuplicateKey {
        /// The identity shared by both items.
        identity: Identity,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the duplicate.
        second: usize,
    },
}

/// Result type alias for reconciliation operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;
