//! Node types for hydration alignment.
//!
//! This module provides the `Element`, `Text` and `Node` types the
//! hydration matcher aligns: a realized server-side tree against the
//! structure the client expects. Trees are read-only inputs; the matcher
//! reports operations, it never mutates nodes.

mod element;
mod text;

pub use element::Element;
pub use text::Text;

use smallvec::SmallVec;

use crate::item::Key;

/// Type tag reported for text nodes.
pub const TEXT_TAG: &str = "#text";

/// Node in a tree - either Element or Text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

impl Node {
    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Explicit key, if one was assigned.
    #[inline]
    pub fn key(&self) -> Option<&Key> {
        match self {
            Node::Element(e) => e.key.as_ref(),
            Node::Text(t) => t.key.as_ref(),
        }
    }

    /// Structural type tag: the element tag, or [`TEXT_TAG`] for text.
    #[inline]
    pub fn type_tag(&self) -> &str {
        match self {
            Node::Element(e) => &e.tag,
            Node::Text(_) => TEXT_TAG,
        }
    }

    /// Check whether two nodes match for alignment purposes.
    ///
    /// Key equality decides when either side carries a key (a keyed node
    /// never matches an unkeyed one); otherwise the type tags decide.
    /// Matching is about identity only - matched nodes may still differ in
    /// content or attributes, which the matcher reconciles afterwards.
    pub fn matches(&self, other: &Node) -> bool {
        match (self.key(), other.key()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.type_tag() == other.type_tag(),
            _ => false,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(Box::new(element))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}
