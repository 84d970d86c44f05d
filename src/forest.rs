// SPDX-FileCopyrightText: The rooted-forest authors
// SPDX-License-Identifier: MPL-2.0

use std::{collections::VecDeque, fmt};

use thiserror::Error;

use crate::{Approach, HashMap, Hierarchical, Node, NodeId, TreePath, Visit};

/// A relation query was asked to derive parent-hood from a root that cannot
/// reach the node at all.
///
/// This signals a caller invariant violation (disconnected component, wrong
/// root supplied), not a runtime condition to recover from. It should not
/// be caught and retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("node {node} is unreachable from root {root}")]
pub struct UnreachableNodeError {
    pub node: NodeId,
    pub root: NodeId,
}

/// The tree engine: an arena of payload-carrying nodes.
///
/// The arena holds every node of every connected component, attached or
/// detached alike. Nodes are addressed by [`NodeId`] handles and own only
/// their child sets; all derived relations (parent, ancestors, root) are
/// computed by [`Self::find_path`] from an explicitly supplied root, which
/// is what the [`Hierarchical`] contract captures.
///
/// Cheaply clonable when the `im` feature is enabled.
#[derive(Debug, Clone)]
pub struct Forest<P> {
    nodes: HashMap<NodeId, Node<P>>,
}

impl<P> Default for Forest<P>
where
    P: Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Forest<P>
where
    P: Clone + fmt::Debug,
{
    /// Create an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Create a standalone node, the root of its own single-node tree.
    pub fn insert(&mut self, payload: Option<P>) -> NodeId {
        let node_id = NodeId::new();
        debug_assert!(!self.contains_node(node_id));
        self.nodes.insert(node_id, Node::new(payload));
        log::debug!("Inserted standalone node {node_id}");
        node_id
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[must_use]
    pub fn lookup_node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(&id)
    }

    /// Resolve an existing node by its id.
    ///
    /// Only used internally for node ids that must exist. If the node does
    /// not exist the caller passed a handle that was never issued by this
    /// forest!
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist.
    fn resolve_node(&self, id: NodeId) -> &Node<P> {
        self.nodes.get(&id).expect("node exists")
    }

    fn resolve_node_mut(&mut self, id: NodeId) -> &mut Node<P> {
        self.nodes.get_mut(&id).expect("node exists")
    }

    /// Total number of nodes in the arena, across all components.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<P>)> + '_ {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    #[must_use]
    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.resolve_node(id).payload()
    }

    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    pub fn payload_mut(&mut self, id: NodeId) -> Option<&mut P> {
        self.resolve_node_mut(id).payload_mut()
    }

    /// Replace the payload of `id`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    pub fn set_payload(&mut self, id: NodeId, payload: Option<P>) -> Option<P> {
        self.resolve_node_mut(id).set_payload(payload)
    }

    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    pub fn take_payload(&mut self, id: NodeId) -> Option<P> {
        self.resolve_node_mut(id).take_payload()
    }

    /// Direct children of `node` in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    pub fn children_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.resolve_node(node).children()
    }

    /// Number of direct children of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn child_count(&self, node: NodeId) -> usize {
        self.resolve_node(node).child_count()
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.resolve_node(node).is_leaf()
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn is_parent(&self, node: NodeId) -> bool {
        self.resolve_node(node).is_parent()
    }

    /// Direct membership test on the child set of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn has_child(&self, node: NodeId, target: NodeId) -> bool {
        self.resolve_node(node).has_child(target)
    }

    /// Whether `target` lies strictly below `node`.
    ///
    /// A node is never its own descendant.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn has_descendant(&self, node: NodeId, target: NodeId) -> bool {
        if node == target {
            return false;
        }
        self.traverse(node, Approach::BreadthFirst, |visit| visit.node() == target)
    }

    /// Whether `target` is a leaf and is `node` itself or one of its
    /// descendants.
    ///
    /// # Panics
    ///
    /// Panics if `node` or `target` was never issued by this forest.
    #[must_use]
    pub fn has_leaf(&self, node: NodeId, target: NodeId) -> bool {
        self.resolve_node(target).is_leaf()
            && (node == target || self.has_descendant(node, target))
    }

    /// All nodes strictly below `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn descendants_of(&self, node: NodeId) -> Vec<NodeId> {
        let mut descendants = Vec::new();
        self.traverse(node, Approach::BreadthFirst, |visit| {
            if visit.depth() > 0 {
                descendants.push(visit.node());
            }
            false
        });
        descendants
    }

    /// All leaves of the subtree rooted at `node`, `node` included if it is
    /// itself a leaf.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn leaves_of(&self, node: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        self.traverse(node, Approach::BreadthFirst, |visit| {
            if self.resolve_node(visit.node()).is_leaf() {
                leaves.push(visit.node());
            }
            false
        });
        leaves
    }

    /// Visit every node reachable from `start`.
    ///
    /// Maintains a work-list of [`TreePath`]s seeded with the single-element
    /// path of `start`. One path is removed per step, from the front for
    /// [`Approach::BreadthFirst`] and from the back for
    /// [`Approach::DepthFirst`]. Its terminal node is visited, and unless
    /// the visitor returns `true` one extended path per child is appended
    /// at the back.
    ///
    /// Returns `true` as soon as the visitor does ("found"), `false` after
    /// the work-list runs dry.
    ///
    /// The forest is borrowed shared for the whole call, so the visitor
    /// cannot structurally mutate it; stale paths from mid-traversal
    /// mutation cannot occur.
    ///
    /// # Panics
    ///
    /// Panics if `start` was never issued by this forest.
    pub fn traverse(
        &self,
        start: NodeId,
        approach: Approach,
        mut visit: impl FnMut(Visit<'_>) -> bool,
    ) -> bool {
        // The seed path is visited before its node is ever resolved for
        // expansion, so validate the start handle eagerly.
        assert!(self.contains_node(start), "node exists");
        let mut frontier = VecDeque::new();
        frontier.push_back(TreePath::new(start));
        loop {
            let path = match approach {
                Approach::BreadthFirst => frontier.pop_front(),
                Approach::DepthFirst => frontier.pop_back(),
            };
            let Some(path) = path else {
                return false;
            };
            if visit(Visit::new(&path)) {
                return true;
            }
            for child in self.resolve_node(path.last()).children() {
                frontier.push_back(path.appended(child));
            }
        }
    }

    /// Find the path from `from` down to `to`.
    ///
    /// One [`Self::traverse`] call with an early-exit visitor. Returns
    /// `None` when `to` is unreachable from `from`; otherwise the returned
    /// path starts at `from`, ends at `to` and has length `depth + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `from` was never issued by this forest.
    #[must_use]
    pub fn find_path(&self, from: NodeId, to: NodeId) -> Option<TreePath> {
        let mut found = None;
        self.traverse(from, Approach::BreadthFirst, |visit| {
            if visit.node() == to {
                found = Some(visit.path().clone());
                return true;
            }
            false
        });
        found
    }

    /// Prune several direct children of `node` at once.
    ///
    /// Returns the subset of `targets` that was actually removed, so
    /// callers can detect partial failure.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    pub fn prune_all(
        &mut self,
        node: NodeId,
        targets: impl IntoIterator<Item = NodeId>,
    ) -> Vec<NodeId> {
        targets
            .into_iter()
            .filter(|&target| self.prune(node, target))
            .collect()
    }

    fn path_from(&self, root: NodeId, node: NodeId) -> Result<TreePath, UnreachableNodeError> {
        self.find_path(root, node)
            .ok_or(UnreachableNodeError { node, root })
    }
}

impl<P> Hierarchical for Forest<P>
where
    P: Clone + fmt::Debug,
{
    type Payload = P;

    fn attach(
        &mut self,
        node: NodeId,
        target: NodeId,
        root: NodeId,
        target_root: NodeId,
    ) -> bool {
        if node == target {
            log::debug!("Not attaching {target} to itself");
            return false;
        }
        if self.is_child(target, target_root) {
            log::debug!("Not attaching {target} to {node}: already attached under {target_root}");
            return false;
        }
        if self.has_relative(node, target, root) {
            log::debug!("Not attaching {target} to {node}: related within the component of {root}");
            return false;
        }
        self.resolve_node_mut(node).insert_child(target);
        log::debug!("Attached {target} to {node}");
        true
    }

    fn delete(&mut self, node: NodeId, target: NodeId) -> bool {
        if !self.resolve_node_mut(node).remove_child(target) {
            return false;
        }
        let grandchildren: Vec<_> = self.resolve_node(target).children().collect();
        for &grandchild in &grandchildren {
            self.resolve_node_mut(target).remove_child(grandchild);
            // Set insertion skips duplicates, promotion is best-effort.
            self.resolve_node_mut(node).insert_child(grandchild);
        }
        log::debug!(
            "Deleted {target} from {node}, promoted {count} grandchildren",
            count = grandchildren.len()
        );
        true
    }

    fn prune(&mut self, node: NodeId, target: NodeId) -> bool {
        if !self.resolve_node_mut(node).remove_child(target) {
            return false;
        }
        log::debug!("Pruned {target} from {node}");
        true
    }

    fn create(&mut self, node: NodeId, payload: Option<Self::Payload>) -> NodeId {
        let child = self.insert(payload);
        // A fresh node cannot be related to anything, attach unconditionally.
        self.resolve_node_mut(node).insert_child(child);
        log::debug!("Created {child} under {node}");
        child
    }

    fn is_child(&self, node: NodeId, root: NodeId) -> bool {
        self.find_path(root, node).map_or(false, |path| path.len() > 1)
    }

    fn is_root(&self, node: NodeId, root: NodeId) -> bool {
        self.find_path(root, node).map_or(false, |path| path.len() == 1)
    }

    fn has_parent(&self, node: NodeId, target: NodeId, root: NodeId) -> bool {
        self.find_path(root, node)
            .and_then(|path| path.parent())
            .map_or(false, |parent| parent == target)
    }

    fn has_ancestor(&self, node: NodeId, target: NodeId, root: NodeId) -> bool {
        self.find_path(root, node)
            .map_or(false, |path| path.ancestors().contains(&target))
    }

    fn has_root(&self, node: NodeId, target: NodeId, root: NodeId) -> bool {
        self.find_path(root, node)
            .map_or(false, |path| path.first() == target)
    }

    fn has_relative(&self, node: NodeId, target: NodeId, root: NodeId) -> bool {
        let mut node_found = false;
        let mut target_found = false;
        self.traverse(root, Approach::BreadthFirst, |visit| {
            if visit.node() == node {
                node_found = true;
            }
            if visit.node() == target {
                target_found = true;
            }
            node_found && target_found
        });
        node_found && target_found
    }

    fn parent_of(
        &self,
        node: NodeId,
        root: NodeId,
    ) -> Result<Option<NodeId>, UnreachableNodeError> {
        self.path_from(root, node).map(|path| path.parent())
    }

    fn ancestors_of(
        &self,
        node: NodeId,
        root: NodeId,
    ) -> Result<Vec<NodeId>, UnreachableNodeError> {
        self.path_from(root, node).map(|path| path.ancestors())
    }

    fn root_of(&self, node: NodeId, root: NodeId) -> Result<NodeId, UnreachableNodeError> {
        self.path_from(root, node).map(|path| path.first())
    }

    fn relatives_of(
        &self,
        node: NodeId,
        root: NodeId,
    ) -> Result<Vec<NodeId>, UnreachableNodeError> {
        let mut node_found = false;
        let mut relatives = Vec::new();
        self.traverse(root, Approach::BreadthFirst, |visit| {
            if visit.node() == node {
                node_found = true;
            } else {
                relatives.push(visit.node());
            }
            false
        });
        if !node_found {
            return Err(UnreachableNodeError { node, root });
        }
        Ok(relatives)
    }
}
