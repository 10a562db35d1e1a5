//! Item identity for keyed reconciliation
//!
//! Every item entering the engine carries an [`Identity`] resolved once at
//! construction time:
//! - **`Identity::Key`**: an explicit stable key, unique within a sequence
//! - **`Identity::Type`**: a structural type tag, used when no key is given
//!
//! # Matching
//!
//! Two items match iff their identities are equal: equal keys match, equal
//! type tags match, and a keyed item never matches an unkeyed one. Because
//! the strategy is a tagged enum, `Identity` equality *is* the matching
//! contract; nothing is inspected per comparison.

use std::fmt;

use compact_str::CompactString;

/// Explicit stable key assigned to an item.
///
/// Detects identity across two sequences independent of position.
pub type Key = CompactString;

/// Structural type tag used for matching when no key is assigned.
pub type Tag = CompactString;

// =============================================================================
// Identity
// =============================================================================

/// How an item is recognized across sequences.
///
/// Resolved once when the item is constructed; equality of two identities
/// is exactly the engine's matching contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Match by explicit key.
    Key(Key),
    /// Match by structural type tag.
    Type(Tag),
}

impl Identity {
    /// Check if this identity carries an explicit key.
    #[inline]
    pub fn is_keyed(&self) -> bool {
        matches!(self, Identity::Key(_))
    }

    /// Get the explicit key, if any.
    #[inline]
    pub fn key(&self) -> Option<&Key> {
        match self {
            Identity::Key(k) => Some(k),
            Identity::Type(_) => None,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Key(k) => write!(f, "key `{k}`"),
            Identity::Type(t) => write!(f, "type `{t}`"),
        }
    }
}

// =============================================================================
// Item<T>
// =============================================================================

/// An opaque payload plus the identity used to recognize it.
///
/// The engine never inspects `payload`; it only classifies and orders items
/// by identity. Payloads travel unchanged into the emitted operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    /// Consumer data carried through reconciliation untouched.
    pub payload: T,
    /// Match strategy for this item.
    pub identity: Identity,
}

impl<T> Item<T> {
    /// Create an item matched by explicit key.
    pub fn keyed(payload: T, key: impl Into<Key>) -> Self {
        Self {
            payload,
            identity: Identity::Key(key.into()),
        }
    }

    /// Create an item matched by structural type tag.
    pub fn typed(payload: T, tag: impl Into<Tag>) -> Self {
        Self {
            payload,
            identity: Identity::Type(tag.into()),
        }
    }

    /// Check whether this item matches another under the identity contract.
    #[inline]
    pub fn matches(&self, other: &Item<T>) -> bool {
        self.identity == other.identity
    }
}

// =============================================================================
// Tests
// =============================================================================
