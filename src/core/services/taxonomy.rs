//! Taxonomy database
//!
//! Owns the node arena and the name table, grows the tree from
//! `(child, parent)` pairs and answers per-item status queries for an
//! attached extract.
//!
//! Status work happens on the write path: every insertion made after the
//! extract is attached re-stages the parent and its children right away, so
//! a read only resolves labels and aggregates.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use taxostage::core::models::Status;
//! use taxostage::core::services::Taxonomy;
//!
//! let mut taxonomy = Taxonomy::new("food");
//! taxonomy.add_nodes(&[("fruit", "food")]).unwrap();
//!
//! let extract = BTreeMap::from([("img1".to_string(), vec!["fruit".to_string()])]);
//! taxonomy.add_extract(extract).unwrap();
//! taxonomy.add_nodes(&[("apple", "fruit")]).unwrap();
//!
//! let report = taxonomy.get_extract_status().unwrap();
//! assert_eq!(report["img1"], Status::GranularityStaged);
//! ```

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::core::error::TaxonomyError;
use crate::core::models::{
    BatchMode, Extract, Node, NodeId, SiblingScope, Status, StatusReport, TaxonomyOptions,
};

/// A class taxonomy with per-node status tracking
#[derive(Debug, Clone)]
pub struct Taxonomy {
    /// Node arena; index 0 is the root
    nodes: Vec<Node>,
    /// Class name to arena index
    index: HashMap<String, NodeId>,
    /// Attached extract, set at most once
    extract: Option<Extract>,
    /// Propagation policy
    options: TaxonomyOptions,
}

impl Taxonomy {
    /// Create a taxonomy holding only the root class
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::with_options(root_name, TaxonomyOptions::default())
    }

    /// Create a taxonomy with explicit propagation options
    #[must_use]
    pub fn with_options(root_name: impl Into<String>, options: TaxonomyOptions) -> Self {
        let root = Node::root(root_name);
        let root_id = NodeId::new(0);
        let mut index = HashMap::new();
        index.insert(root.name().to_string(), root_id);

        Self {
            nodes: vec![root],
            index,
            extract: None,
            options,
        }
    }

    /// Propagation options in effect
    #[must_use]
    pub const fn options(&self) -> TaxonomyOptions {
        self.options
    }

    /// The root node
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Number of classes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `name` is a known class
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a node by class name
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|id| &self.nodes[id.index()])
    }

    /// Current status of a known class
    #[must_use]
    pub fn status_of(&self, name: &str) -> Option<Status> {
        self.node(name).map(Node::status)
    }

    /// Status a label resolves to; unknown names are `Invalid`
    #[must_use]
    pub fn label_status(&self, name: &str) -> Status {
        self.status_of(name).unwrap_or(Status::Invalid)
    }

    /// Name of the parent of a known class (`None` for the root or unknown names)
    #[must_use]
    pub fn parent_name(&self, name: &str) -> Option<&str> {
        self.node(name)
            .and_then(Node::parent)
            .map(|id| self.nodes[id.index()].name())
    }

    /// Names of the children of a known class, in insertion order
    #[must_use]
    pub fn children_names(&self, name: &str) -> Option<Vec<&str>> {
        self.node(name).map(|node| {
            node.children()
                .iter()
                .map(|id| self.nodes[id.index()].name())
                .collect()
        })
    }

    /// Whether an extract is attached
    #[must_use]
    pub const fn has_extract(&self) -> bool {
        self.extract.is_some()
    }

    /// The attached extract, if any
    #[must_use]
    pub const fn extract(&self) -> Option<&Extract> {
        self.extract.as_ref()
    }

    /// Add `(child, parent)` pairs in order.
    ///
    /// Once an extract is attached, each insertion also re-stages the parent
    /// and its existing children.
    ///
    /// In [`BatchMode::Atomic`] the whole batch is checked before anything is
    /// applied; a pair may name as parent a child introduced earlier in the
    /// same batch. In [`BatchMode::Sequential`] pairs preceding a failing one
    /// stay applied.
    pub fn add_nodes<C, P>(&mut self, elements: &[(C, P)]) -> Result<(), TaxonomyError>
    where
        C: AsRef<str>,
        P: AsRef<str>,
    {
        if self.options.batch_mode == BatchMode::Atomic {
            self.validate_batch(elements)?;
        }

        for (child, parent) in elements {
            self.add_node(child.as_ref(), parent.as_ref())?;
        }

        Ok(())
    }

    /// Attach the extract. Allowed once per taxonomy.
    pub fn add_extract(&mut self, extract: Extract) -> Result<(), TaxonomyError> {
        if self.extract.is_some() {
            return Err(TaxonomyError::ExtractAlreadySet);
        }

        if extract.is_empty() {
            return Err(TaxonomyError::InvalidInput("extract has no items".to_string()));
        }

        if let Some((item, _)) = extract.iter().find(|(_, labels)| labels.is_empty()) {
            return Err(TaxonomyError::InvalidInput(format!(
                "item '{item}' has no class labels"
            )));
        }

        debug!("attached extract with {} item(s)", extract.len());
        self.extract = Some(extract);
        Ok(())
    }

    /// Aggregated status of every item in the extract.
    ///
    /// Pure read: repeated calls without insertions in between return the same
    /// report.
    pub fn get_extract_status(&self) -> Result<StatusReport, TaxonomyError> {
        let extract = self.extract.as_ref().ok_or(TaxonomyError::NoExtract)?;

        extract
            .iter()
            .map(|(item, labels)| {
                let status = Status::aggregate(labels.iter().map(|l| self.label_status(l)))
                    .ok_or_else(|| {
                        TaxonomyError::InvalidInput(format!("item '{item}' has no class labels"))
                    })?;
                Ok((item.clone(), status))
            })
            .collect()
    }

    /// Insert a single node and propagate if an extract is attached
    fn add_node(&mut self, child: &str, parent: &str) -> Result<NodeId, TaxonomyError> {
        let parent_id = *self
            .index
            .get(parent)
            .ok_or_else(|| TaxonomyError::UnknownParent {
                child: child.to_string(),
                parent: parent.to_string(),
            })?;

        if self.index.contains_key(child) {
            return Err(TaxonomyError::DuplicateName(child.to_string()));
        }

        let child_id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::with_parent(child, parent_id));
        self.nodes[parent_id.index()].push_child(child_id);
        self.index.insert(child.to_string(), child_id);
        debug!("added class '{child}' under '{parent}'");

        if self.has_extract() {
            self.update_status_new_child(parent_id, child_id);
        }

        Ok(child_id)
    }

    /// Re-stage a parent that just gained `new_child`.
    ///
    /// The parent moves from `Valid` to `GranularityStaged` (never from a
    /// worse status), then its children are overwritten with
    /// `CoverageStaged`. Whether `new_child` itself is included depends on
    /// [`SiblingScope`]: excluded by default, included under the legacy
    /// [`SiblingScope::All`] rule. Nothing beyond the parent and its direct
    /// children is touched.
    fn update_status_new_child(&mut self, parent: NodeId, new_child: NodeId) {
        let include_new = self.options.sibling_scope == SiblingScope::All;
        let parent_node = &mut self.nodes[parent.index()];

        if parent_node.stage_granularity() {
            debug!("'{}' is now {}", parent_node.name(), parent_node.status());
        }

        let siblings: Vec<NodeId> = parent_node
            .children()
            .iter()
            .copied()
            .filter(|&id| include_new || id != new_child)
            .collect();

        for id in siblings {
            let sibling = &mut self.nodes[id.index()];
            sibling.stage_coverage();
            trace!("'{}' is now {}", sibling.name(), sibling.status());
        }
    }

    /// Check a batch against the table without mutating anything
    fn validate_batch<C, P>(&self, elements: &[(C, P)]) -> Result<(), TaxonomyError>
    where
        C: AsRef<str>,
        P: AsRef<str>,
    {
        let mut pending: HashSet<&str> = HashSet::new();

        for (child, parent) in elements {
            let (child, parent) = (child.as_ref(), parent.as_ref());

            if !self.contains(parent) && !pending.contains(parent) {
                return Err(TaxonomyError::UnknownParent {
                    child: child.to_string(),
                    parent: parent.to_string(),
                });
            }

            if self.contains(child) || !pending.insert(child) {
                return Err(TaxonomyError::DuplicateName(child.to_string()));
            }
        }

        Ok(())
    }
}
