//! Taxonomy nodes
//!
//! Nodes live in an arena owned by the taxonomy and refer to each other by
//! [`NodeId`]. The parent link is a plain index, so there is no ownership
//! cycle between a node and its children.

use super::status::Status;

/// Stable index of a node inside a taxonomy arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw arena index
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One class in the taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Class name
    name: String,
    /// Current trust level
    status: Status,
    /// Parent link, `None` only for the root
    parent: Option<NodeId>,
    /// Children in insertion order
    children: Vec<NodeId>,
}

impl Node {
    /// Create the root node
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Valid,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a node below `parent`
    #[must_use]
    pub fn with_parent(name: impl Into<String>, parent: NodeId) -> Self {
        Self {
            name: name.into(),
            status: Status::Valid,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Class name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Parent link
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node is the root
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Link a new child. Children are never removed.
    pub fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Mark this node as refined by a new child.
    ///
    /// Only a `Valid` node moves to `GranularityStaged`; any other status is
    /// already at least as severe and is kept. Returns whether the status
    /// changed.
    pub fn stage_granularity(&mut self) -> bool {
        if self.status == Status::Valid {
            self.status = Status::GranularityStaged;
            true
        } else {
            false
        }
    }

    /// Mark this node's sibling set as incomplete, overwriting any status
    pub fn stage_coverage(&mut self) {
        self.status = Status::CoverageStaged;
    }
}
