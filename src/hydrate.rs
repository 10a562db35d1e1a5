//! Hydration alignment
//!
//! Aligns an already-materialized tree (the "server" side) against the
//! structure a consumer expects (the "client" side) without rebuilding it.
//! The matcher walks both trees together and reports, per node, whether
//! the realized node can be reused as-is, needs its text or attributes
//! brought up to date, or must be replaced.
//!
//! This is deliberately **not** the reconciliation engine from
//! [`crate::algo`]: hydration operates on trees that are expected to be
//! nearly identical, so a linear double-pointer scan per child list is
//! enough. On a mismatch the scan looks ahead on one side to decide
//! between insertion and removal; when both sides have a plausible future
//! match it falls back to replacing at the current positions rather than
//! computing an optimal reordering.
//!
//! # Complexity
//!
//! - Aligned trees: O(n) in the node count
//! - Worst case (heavily reordered children): O(n*m) per child list from
//!   the lookahead scans; see [`HydrateConfig::bounded`] to cap this
//!
//! # Operations
//!
//! Each [`HydrateOp`] carries a [`NodePath`] of child-slot indices so a
//! consumer can locate the affected node without the matcher holding any
//! reference into either tree after the call returns.

use smallvec::SmallVec;
use std::fmt;

use crate::attr::AttrsExt;
use crate::node::{Element, Node};

// =============================================================================
// NodePath
// =============================================================================

/// Address of a node in the realized tree: child-slot indices from the
/// root down.
///
/// The root is the empty path and displays as `/`; the second child of the
/// root's first child displays as `/0/1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(SmallVec<[usize; 8]>);

impl NodePath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the child at `index` under this path.
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }

    /// Child-slot indices from the root down.
    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    /// Number of segments (0 for the root).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the hydration matcher.
///
/// The only knob is the mismatch lookahead: how far past the current
/// pointer the matcher scans the opposite list when deciding whether a
/// mismatched node was inserted or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrateConfig {
    /// Maximum number of nodes the mismatch scan examines past the
    /// current pointer. `None` scans the whole remaining list, which
    /// matches trees of any shape but degrades to O(n*m) when child lists
    /// are heavily reordered. With a cap, matches beyond the horizon are
    /// treated as absent and resolve as forced replacement instead.
    pub max_lookahead: Option<usize>,
}

impl Default for HydrateConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl HydrateConfig {
    /// Scan the entire remaining child list on each mismatch (default).
    pub fn unbounded() -> Self {
        Self { max_lookahead: None }
    }

    /// Cap the mismatch scan at `cap` nodes past the current pointer.
    pub fn bounded(cap: usize) -> Self {
        Self {
            max_lookahead: Some(cap),
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// One alignment operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateOp {
    /// No realized counterpart: materialize this node and all its
    /// descendants at `path`. One operation covers the whole subtree.
    Create { path: NodePath, node: Node },

    /// Realized node (and its subtree) has no expected counterpart.
    Remove { path: NodePath },

    /// Realized element matches the expected one and stays.
    Reuse { path: NodePath },

    /// Realized text node matches the expected content and stays.
    ReuseText { path: NodePath },

    /// Realized text node stays but its content changes.
    UpdateText { path: NodePath, text: String },

    /// Set or update one attribute on the element at `path`.
    SetAttr {
        path: NodePath,
        name: String,
        value: String,
    },

    /// Remove one attribute from the element at `path`.
    RemoveAttr { path: NodePath, name: String },
}

impl HydrateOp {
    /// The path this operation targets.
    pub fn path(&self) -> &NodePath {
        match self {
            Self::Create { path, .. }
            | Self::Remove { path }
            | Self::Reuse { path }
            | Self::ReuseText { path }
            | Self::UpdateText { path, .. }
            | Self::SetAttr { path, .. }
            | Self::RemoveAttr { path, .. } => path,
        }
    }

    /// Check if this operation changes tree structure (create or remove).
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Create { .. } | Self::Remove { .. })
    }
}

// =============================================================================
// Result and statistics
// =============================================================================

/// Statistics from one hydration pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct HydrateStats {
    /// Elements reused in place.
    pub reused: usize,
    /// Text nodes reused with identical content.
    pub text_reused: usize,
    /// Text nodes reused with updated content.
    pub text_updated: usize,
    /// Subtrees materialized (one per `Create`).
    pub created: usize,
    /// Subtrees discarded (one per `Remove`).
    pub removed: usize,
    /// Attributes set or updated.
    pub attrs_set: usize,
    /// Attributes removed.
    pub attrs_removed: usize,
}

impl HydrateStats {
    /// Number of operations that change tree structure.
    pub fn structural_changes(&self) -> usize {
        self.created + self.removed
    }

    /// Check if the realized tree already matched exactly: nothing
    /// created, removed or updated, only reuse.
    pub fn is_clean(&self) -> bool {
        self.structural_changes() == 0
            && self.text_updated == 0
            && self.attrs_set == 0
            && self.attrs_removed == 0
    }
}

/// Result of aligning a realized tree against an expected tree.
#[derive(Debug)]
#[must_use]
pub struct HydrateResult {
    /// Alignment operations in tree order.
    pub ops: Vec<HydrateOp>,
    /// Summary counters over `ops`.
    pub stats: HydrateStats,
}

// =============================================================================
// Public API
// =============================================================================

/// Align a realized tree against the expected tree.
///
/// Returns the operation list describing how the realized tree is brought
/// in line: reuses, text and attribute updates, subtree creations and
/// removals. Neither input is mutated.
///
/// # Example
///
/// ```ignore
/// let server: Node = Element::new("ul").child(Element::new("li").text("a")).into();
/// let client: Node = Element::new("ul").child(Element::new("li").text("a")).into();
/// let result = hydrate(&server, &client);
/// assert!(result.stats.is_clean());
/// ```
pub fn hydrate(server: &Node, client: &Node) -> HydrateResult {
    hydrate_with_config(server, client, HydrateConfig::default())
}

/// Align a realized tree against the expected tree with a custom
/// lookahead configuration.
pub fn hydrate_with_config(
    server: &Node,
    client: &Node,
    config: HydrateConfig,
) -> HydrateResult {
    let mut ctx = HydrateContext::new(config);
    ctx.hydrate_pair(server, client, &NodePath::root());
    ctx.into_result()
}

/// Align two child lists directly, without a common parent node.
///
/// This is the double-pointer scan the matcher runs per element; exposed
/// for consumers that hold sibling lists rather than full trees. Paths in
/// the returned operations are rooted at the list itself.
pub fn align_children(server_children: &[Node], client_children: &[Node]) -> HydrateResult {
    align_children_with_config(server_children, client_children, HydrateConfig::default())
}

/// [`align_children`] with a custom lookahead configuration.
pub fn align_children_with_config(
    server_children: &[Node],
    client_children: &[Node],
    config: HydrateConfig,
) -> HydrateResult {
    let mut ctx = HydrateContext::new(config);
    ctx.align(server_children, client_children, &NodePath::root());
    ctx.into_result()
}

// =============================================================================
// Internal Context
// =============================================================================

struct HydrateContext {
    ops: Vec<HydrateOp>,
    stats: HydrateStats,
    config: HydrateConfig,
}

impl HydrateContext {
    fn new(config: HydrateConfig) -> Self {
        Self {
            ops: Vec::new(),
            stats: HydrateStats::default(),
            config,
        }
    }

    fn into_result(self) -> HydrateResult {
        HydrateResult {
            ops: self.ops,
            stats: self.stats,
        }
    }

    /// Align one realized/expected node pair.
    fn hydrate_pair(&mut self, server: &Node, client: &Node, path: &NodePath) {
        match (server, client) {
            (Node::Text(server_text), Node::Text(client_text)) => {
                if server_text.content != client_text.content {
                    self.ops.push(HydrateOp::UpdateText {
                        path: path.clone(),
                        text: client_text.content.clone(),
                    });
                    self.stats.text_updated += 1;
                } else {
                    self.ops.push(HydrateOp::ReuseText { path: path.clone() });
                    self.stats.text_reused += 1;
                }
            }
            (Node::Element(server_elem), Node::Element(client_elem))
                if server_elem.tag == client_elem.tag =>
            {
                self.ops.push(HydrateOp::Reuse { path: path.clone() });
                self.stats.reused += 1;
                self.diff_attrs(server_elem, client_elem, path);
                self.align(&server_elem.children, &client_elem.children, path);
            }
            // Node types (or element tags) differ: replace the whole
            // subtree, descending into neither side.
            _ => {
                self.remove(path);
                self.create(client, path);
            }
        }
    }

    fn create(&mut self, node: &Node, path: &NodePath) {
        self.ops.push(HydrateOp::Create {
            path: path.clone(),
            node: node.clone(),
        });
        self.stats.created += 1;
    }

    fn remove(&mut self, path: &NodePath) {
        self.ops.push(HydrateOp::Remove { path: path.clone() });
        self.stats.removed += 1;
    }

    /// Bring the realized element's attributes in line with the expected
    /// ones: set what differs or is missing, remove what is surplus.
    fn diff_attrs(&mut self, server: &Element, client: &Element, path: &NodePath) {
        for (name, value) in &client.attrs {
            if server.get_attr(name) != Some(value.as_str()) {
                self.ops.push(HydrateOp::SetAttr {
                    path: path.clone(),
                    name: name.clone(),
                    value: value.clone(),
                });
                self.stats.attrs_set += 1;
            }
        }

        for (name, _) in &server.attrs {
            if client.attrs.get_attr(name).is_none() {
                self.ops.push(HydrateOp::RemoveAttr {
                    path: path.clone(),
                    name: name.clone(),
                });
                self.stats.attrs_removed += 1;
            }
        }
    }

    /// Double-pointer child alignment with one-sided lookahead.
    ///
    /// Matched pairs recurse; on a mismatch the scan checks whether each
    /// side's current node reappears later on the other side:
    /// - only the client node has a later match -> the server node is
    ///   surplus, remove it and advance the server pointer
    /// - only the server node has a later match -> the client node is
    ///   new, create it and advance the client pointer
    /// - otherwise -> forced replacement at the current positions; this
    ///   covers out-of-order children without attempting a minimal
    ///   reordering
    fn align(&mut self, server: &[Node], client: &[Node], parent: &NodePath) {
        let mut server_idx = 0;
        let mut client_idx = 0;

        while server_idx < server.len() || client_idx < client.len() {
            let slot = parent.child(server_idx.max(client_idx));
            match (server.get(server_idx), client.get(client_idx)) {
                (Some(server_node), Some(client_node)) if server_node.matches(client_node) => {
                    self.hydrate_pair(server_node, client_node, &slot);
                    server_idx += 1;
                    client_idx += 1;
                }
                (None, Some(client_node)) => {
                    self.create(client_node, &slot);
                    client_idx += 1;
                }
                (Some(_), None) => {
                    self.remove(&slot);
                    server_idx += 1;
                }
                (Some(server_node), Some(client_node)) => {
                    let server_reappears =
                        self.appears_ahead(server_node, &client[client_idx + 1..]);
                    let client_reappears =
                        self.appears_ahead(client_node, &server[server_idx + 1..]);

                    if client_reappears && !server_reappears {
                        self.remove(&slot);
                        server_idx += 1;
                    } else if server_reappears && !client_reappears {
                        self.create(client_node, &slot);
                        client_idx += 1;
                    } else {
                        self.remove(&slot);
                        self.create(client_node, &slot);
                        server_idx += 1;
                        client_idx += 1;
                    }
                }
                (None, None) => break,
            }
        }
    }

    /// Check whether `node` has a match within the lookahead horizon of
    /// `rest` (the list past the opposite pointer).
    fn appears_ahead(&self, node: &Node, rest: &[Node]) -> bool {
        let horizon = match self.config.max_lookahead {
            Some(cap) => cap.min(rest.len()),
            None => rest.len(),
        };
        rest[..horizon].iter().any(|candidate| node.matches(candidate))
    }
}

// =============================================================================
// Tests
// =============================================================================
