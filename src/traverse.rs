// SPDX-FileCopyrightText: The rooted-forest authors
// SPDX-License-Identifier: MPL-2.0

use crate::{NodeId, TreePath};

/// Work-list removal discipline of [`Forest::traverse`](crate::Forest::traverse).
///
/// Both approaches run the same algorithm: the work-list is seeded with the
/// single-element path of the start node, and expanding a path appends one
/// extended path per child at the back of the list. Only the side paths are
/// removed from differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// Remove from the front (FIFO). Visits nodes by ascending depth.
    BreadthFirst,

    /// Remove from the back (LIFO). Dives into the most recently expanded
    /// branch first, visiting siblings in reverse child-set order.
    DepthFirst,
}

/// Metadata handed to the visitor for each visited node.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    path: &'a TreePath,
}

impl<'a> Visit<'a> {
    pub(crate) const fn new(path: &'a TreePath) -> Self {
        Self { path }
    }

    /// The node being visited, i.e. the terminal node of [`Self::path`].
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.path.last()
    }

    /// Number of edges between the traversal's start node and this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// The full path from the traversal's start node to this node.
    #[must_use]
    pub const fn path(&self) -> &'a TreePath {
        self.path
    }
}
