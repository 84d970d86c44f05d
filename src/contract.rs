// SPDX-FileCopyrightText: The rooted-forest authors
// SPDX-License-Identifier: MPL-2.0

use crate::{NodeId, UnreachableNodeError};

/// Root-agnostic tree contract.
///
/// Implementations do not assume they know which node heads a connected
/// component, so every topology operation is parameterized by an explicit
/// root (and `attach` additionally by the target's root). Parent-hood and
/// all derived relations are computed by path search from the supplied
/// root.
///
/// Every operation panics when handed a [`NodeId`] that was never issued
/// by the implementation.
pub trait Hierarchical {
    type Payload;

    /// Attach `target` as a direct child of `node`.
    ///
    /// Fails without mutating anything when `target` already has a parent
    /// under `target_root`, or when `target` is related to `node` within
    /// `root`'s component (which covers self-attachment and cycles).
    fn attach(
        &mut self,
        node: NodeId,
        target: NodeId,
        root: NodeId,
        target_root: NodeId,
    ) -> bool;

    /// Detach the direct child `target` and re-attach each of its former
    /// children directly under `node`.
    ///
    /// Grandchildren are promoted one level, best-effort: a grandchild that
    /// cannot be re-attached is skipped. Returns whether `target` itself
    /// was removed. `target`'s child set is empty afterwards.
    fn delete(&mut self, node: NodeId, target: NodeId) -> bool;

    /// Detach the direct child `target` together with its whole subtree.
    ///
    /// Returns whether `target` was removed. `target`'s own child set is
    /// untouched; the detached subtree becomes an independent tree.
    fn prune(&mut self, node: NodeId, target: NodeId) -> bool;

    /// Construct a new node and attach it as a child of `node`.
    ///
    /// Always succeeds: a freshly constructed node cannot be related to
    /// anything, so the relation checks of [`Self::attach`] are vacuous
    /// and skipped.
    fn create(&mut self, node: NodeId, payload: Option<Self::Payload>) -> NodeId;

    /// Whether a parent of `node` exists when searching from `root`.
    fn is_child(&self, node: NodeId, root: NodeId) -> bool;

    /// Whether `node` heads the component, as computed from `root`.
    fn is_root(&self, node: NodeId, root: NodeId) -> bool;

    /// Whether `target` is the direct parent of `node` under `root`.
    fn has_parent(&self, node: NodeId, target: NodeId, root: NodeId) -> bool;

    /// Whether `target` lies on the path from `root` to `node`, exclusive
    /// of `node` itself.
    fn has_ancestor(&self, node: NodeId, target: NodeId, root: NodeId) -> bool;

    /// Whether `target` is the root of `node`'s component under `root`.
    fn has_root(&self, node: NodeId, target: NodeId, root: NodeId) -> bool;

    /// Whether both `node` and `target` are found when traversing from
    /// `root`.
    ///
    /// This tests common component membership only; no particular
    /// ancestor/descendant relation is required. By this rule a component
    /// member is its own relative.
    fn has_relative(&self, node: NodeId, target: NodeId, root: NodeId) -> bool;

    /// The direct parent of `node` under `root`, or `None` if `node` is the
    /// root itself.
    ///
    /// # Errors
    ///
    /// Fails when `root` cannot reach `node` at all. This signals a caller
    /// invariant violation (wrong root supplied), not a condition to
    /// recover from.
    fn parent_of(
        &self,
        node: NodeId,
        root: NodeId,
    ) -> Result<Option<NodeId>, UnreachableNodeError>;

    /// All nodes on the path from `root` to `node`, excluding `node`.
    ///
    /// # Errors
    ///
    /// Fails when `root` cannot reach `node`; see [`Self::parent_of`].
    fn ancestors_of(
        &self,
        node: NodeId,
        root: NodeId,
    ) -> Result<Vec<NodeId>, UnreachableNodeError>;

    /// The root of `node`'s component, as computed from `root`.
    ///
    /// # Errors
    ///
    /// Fails when `root` cannot reach `node`; see [`Self::parent_of`].
    fn root_of(&self, node: NodeId, root: NodeId) -> Result<NodeId, UnreachableNodeError>;

    /// Every other node of the component reachable from `root`.
    ///
    /// The queried node itself is not included, although it does satisfy
    /// the membership test of [`Self::has_relative`].
    ///
    /// # Errors
    ///
    /// Fails when `root` cannot reach `node`; see [`Self::parent_of`].
    fn relatives_of(
        &self,
        node: NodeId,
        root: NodeId,
    ) -> Result<Vec<NodeId>, UnreachableNodeError>;
}

/// Root-aware extension of the [`Hierarchical`] behavior contract.
///
/// Same operations without the root parameters: the implementation is
/// expected to track the current root of every node's component and
/// resolve the "which root" argument internally.
///
/// Every operation panics when handed a [`NodeId`] that was never issued
/// by the implementation.
pub trait RootAware {
    type Payload;

    /// Attach `target` as a direct child of `node`, resolving both roots
    /// from the tracked bookkeeping.
    ///
    /// On success the tracked root of every node in `target`'s subtree is
    /// rewritten to `node`'s root.
    fn attach(&mut self, node: NodeId, target: NodeId) -> bool;

    /// Unconditional attach: first detaches `target` from wherever it
    /// currently lives, then attaches it under `node`.
    ///
    /// Cycle prevention still applies; only the single-attachment check is
    /// side-stepped by detaching first.
    fn force_attach(&mut self, node: NodeId, target: NodeId) -> bool;

    /// See [`Hierarchical::delete`]. `target` ends up self-rooted and
    /// childless; the promoted grandchildren stay in `node`'s component.
    fn delete(&mut self, node: NodeId, target: NodeId) -> bool;

    /// See [`Hierarchical::prune`]. Every node of the detached subtree is
    /// re-rooted at `target`.
    fn prune(&mut self, node: NodeId, target: NodeId) -> bool;

    /// See [`Hierarchical::create`]. The new node inherits `node`'s tracked
    /// root.
    fn create(&mut self, node: NodeId, payload: Option<Self::Payload>) -> NodeId;

    fn is_child(&self, node: NodeId) -> bool;

    fn is_root(&self, node: NodeId) -> bool;

    fn has_parent(&self, node: NodeId, target: NodeId) -> bool;

    fn has_ancestor(&self, node: NodeId, target: NodeId) -> bool;

    fn has_root(&self, node: NodeId, target: NodeId) -> bool;

    fn has_relative(&self, node: NodeId, target: NodeId) -> bool;

    /// See [`Hierarchical::parent_of`].
    ///
    /// # Errors
    ///
    /// Fails when the tracked root cannot reach `node`, which indicates
    /// corrupted bookkeeping and is not expected to happen.
    fn parent_of(&self, node: NodeId) -> Result<Option<NodeId>, UnreachableNodeError>;

    /// See [`Hierarchical::ancestors_of`].
    ///
    /// # Errors
    ///
    /// See [`Self::parent_of`].
    fn ancestors_of(&self, node: NodeId) -> Result<Vec<NodeId>, UnreachableNodeError>;

    /// See [`Hierarchical::root_of`].
    ///
    /// # Errors
    ///
    /// See [`Self::parent_of`].
    fn root_of(&self, node: NodeId) -> Result<NodeId, UnreachableNodeError>;

    /// See [`Hierarchical::relatives_of`].
    ///
    /// # Errors
    ///
    /// See [`Self::parent_of`].
    fn relatives_of(&self, node: NodeId) -> Result<Vec<NodeId>, UnreachableNodeError>;
}
