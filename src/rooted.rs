// SPDX-FileCopyrightText: The rooted-forest authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::{
    Approach, Forest, HashMap, Hierarchical, Node, NodeId, RootAware, TreePath,
    UnreachableNodeError, Visit,
};

/// Root-aware decorator over the tree engine.
///
/// Holds a [`Forest`] by composition and additionally tracks, per node, the
/// current topological root of its connected component. Every node is its
/// own root until attached elsewhere. The decorator never reimplements an
/// algorithm: it resolves the "which root" argument from its bookkeeping,
/// delegates to the engine, and re-establishes the bookkeeping across the
/// affected subtree after each structural change.
///
/// Invariant: for every node, the tracked root equals the tracked root of
/// every node on the path from that root down to the node. This is not
/// structurally guaranteed and is re-established after every mutation.
#[derive(Debug, Clone)]
pub struct RootedForest<P> {
    engine: Forest<P>,
    roots: HashMap<NodeId, NodeId>,
}

impl<P> Default for RootedForest<P>
where
    P: Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> RootedForest<P>
where
    P: Clone + fmt::Debug,
{
    /// Create an empty rooted forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Forest::new(),
            roots: HashMap::new(),
        }
    }

    /// Create a standalone, self-rooted node.
    pub fn insert(&mut self, payload: Option<P>) -> NodeId {
        let node_id = self.engine.insert(payload);
        self.roots.insert(node_id, node_id);
        node_id
    }

    /// Read-only access to the underlying engine.
    #[must_use]
    pub fn forest(&self) -> &Forest<P> {
        &self.engine
    }

    /// The tracked root of `node`'s component.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn tracked_root(&self, node: NodeId) -> NodeId {
        *self.roots.get(&node).expect("node exists")
    }

    /// Rewrite the tracked root of every node in `start`'s subtree.
    fn propagate_root(&mut self, start: NodeId, new_root: NodeId) {
        let Self { engine, roots } = self;
        engine.traverse(start, Approach::BreadthFirst, |visit| {
            roots.insert(visit.node(), new_root);
            false
        });
        log::debug!("Re-rooted the subtree of {start} at {new_root}");
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.engine.contains_node(id)
    }

    #[must_use]
    pub fn lookup_node(&self, id: NodeId) -> Option<&Node<P>> {
        self.engine.lookup_node(id)
    }

    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    #[must_use]
    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.engine.payload(id)
    }

    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    pub fn payload_mut(&mut self, id: NodeId) -> Option<&mut P> {
        self.engine.payload_mut(id)
    }

    /// Replace the payload of `id`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    pub fn set_payload(&mut self, id: NodeId, payload: Option<P>) -> Option<P> {
        self.engine.set_payload(id, payload)
    }

    /// # Panics
    ///
    /// Panics if `id` was never issued by this forest.
    pub fn take_payload(&mut self, id: NodeId) -> Option<P> {
        self.engine.take_payload(id)
    }

    /// Direct children of `node` in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    pub fn children_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.engine.children_of(node)
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn child_count(&self, node: NodeId) -> usize {
        self.engine.child_count(node)
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.engine.is_leaf(node)
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn is_parent(&self, node: NodeId) -> bool {
        self.engine.is_parent(node)
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn has_child(&self, node: NodeId, target: NodeId) -> bool {
        self.engine.has_child(node, target)
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn has_descendant(&self, node: NodeId, target: NodeId) -> bool {
        self.engine.has_descendant(node, target)
    }

    /// # Panics
    ///
    /// Panics if `node` or `target` was never issued by this forest.
    #[must_use]
    pub fn has_leaf(&self, node: NodeId, target: NodeId) -> bool {
        self.engine.has_leaf(node, target)
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn descendants_of(&self, node: NodeId) -> Vec<NodeId> {
        self.engine.descendants_of(node)
    }

    /// # Panics
    ///
    /// Panics if `node` was never issued by this forest.
    #[must_use]
    pub fn leaves_of(&self, node: NodeId) -> Vec<NodeId> {
        self.engine.leaves_of(node)
    }

    /// See [`Forest::traverse`].
    ///
    /// # Panics
    ///
    /// Panics if `start` was never issued by this forest.
    pub fn traverse(
        &self,
        start: NodeId,
        approach: Approach,
        visit: impl FnMut(Visit<'_>) -> bool,
    ) -> bool {
        self.engine.traverse(start, approach, visit)
    }

    /// See [`Forest::find_path`].
    ///
    /// # Panics
    ///
    /// Panics if `from` was never issued by this forest.
    #[must_use]
    pub fn find_path(&self, from: NodeId, to: NodeId) -> Option<TreePath> {
        self.engine.find_path(from, to)
    }

    /// Prune several direct children of `node` at once, re-rooting each
    /// detached subtree.
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
            .filter(|&target| RootAware::prune(self, node, target))
            .collect()
    }
}

impl<P> RootAware for RootedForest<P>
where
    P: Clone + fmt::Debug,
{
    type Payload = P;

    fn attach(&mut self, node: NodeId, target: NodeId) -> bool {
        let root = self.tracked_root(node);
        let target_root = self.tracked_root(target);
        if !self.engine.attach(node, target, root, target_root) {
            return false;
        }
        self.propagate_root(target, root);
        debug_assert_eq!(self.tracked_root(target), self.tracked_root(node));
        true
    }

    fn force_attach(&mut self, node: NodeId, target: NodeId) -> bool {
        let target_root = self.tracked_root(target);
        let parent = self
            .engine
            .parent_of(target, target_root)
            .expect("tracked root reaches its node");
        if let Some(parent) = parent {
            let pruned = self.prune(parent, target);
            debug_assert!(pruned);
        }
        self.attach(node, target)
    }

    fn delete(&mut self, node: NodeId, target: NodeId) -> bool {
        if !self.engine.has_child(node, target) {
            return false;
        }
        let grandchildren: Vec<_> = self.engine.children_of(target).collect();
        for grandchild in grandchildren {
            // Promotion cannot cycle: the grandchild already sits below `node`.
            self.force_attach(node, grandchild);
        }
        self.prune(node, target)
    }

    fn prune(&mut self, node: NodeId, target: NodeId) -> bool {
        if !self.engine.prune(node, target) {
            return false;
        }
        self.propagate_root(target, target);
        true
    }

    fn create(&mut self, node: NodeId, payload: Option<Self::Payload>) -> NodeId {
        let root = self.tracked_root(node);
        let child = self.engine.create(node, payload);
        self.roots.insert(child, root);
        child
    }

    fn is_child(&self, node: NodeId) -> bool {
        self.engine.is_child(node, self.tracked_root(node))
    }

    fn is_root(&self, node: NodeId) -> bool {
        self.engine.is_root(node, self.tracked_root(node))
    }

    fn has_parent(&self, node: NodeId, target: NodeId) -> bool {
        self.engine.has_parent(node, target, self.tracked_root(node))
    }

    fn has_ancestor(&self, node: NodeId, target: NodeId) -> bool {
        self.engine.has_ancestor(node, target, self.tracked_root(node))
    }

    fn has_root(&self, node: NodeId, target: NodeId) -> bool {
        self.engine.has_root(node, target, self.tracked_root(node))
    }

    fn has_relative(&self, node: NodeId, target: NodeId) -> bool {
        self.engine.has_relative(node, target, self.tracked_root(node))
    }

    fn parent_of(&self, node: NodeId) -> Result<Option<NodeId>, UnreachableNodeError> {
        self.engine.parent_of(node, self.tracked_root(node))
    }

    fn ancestors_of(&self, node: NodeId) -> Result<Vec<NodeId>, UnreachableNodeError> {
        self.engine.ancestors_of(node, self.tracked_root(node))
    }

    fn root_of(&self, node: NodeId) -> Result<NodeId, UnreachableNodeError> {
        self.engine.root_of(node, self.tracked_root(node))
    }

    fn relatives_of(&self, node: NodeId) -> Result<Vec<NodeId>, UnreachableNodeError> {
        self.engine.relatives_of(node, self.tracked_root(node))
    }
}
