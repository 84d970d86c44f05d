// SPDX-FileCopyrightText: The rooted-forest authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::NodeId;

#[cfg(feature = "im")]
type PathVec = im::Vector<NodeId>;

#[cfg(not(feature = "im"))]
type PathVec = Vec<NodeId>;

/// Ordered, non-empty sequence of nodes.
///
/// The first element is always the root the traversal started from and the
/// last element is the node being described. A path of length 1 describes
/// the root itself.
///
/// Paths are snapshotted once per branch point during a traversal. With the
/// `im` feature enabled the snapshots share structure, so branching does not
/// copy the whole prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
    nodes: PathVec,
}

#[allow(clippy::len_without_is_empty)] // Paths are never empty
impl TreePath {
    /// Create a single-element path describing `root` itself.
    #[must_use]
    pub fn new(root: NodeId) -> Self {
        let mut nodes = PathVec::new();
        #[cfg(feature = "im")]
        nodes.push_back(root);
        #[cfg(not(feature = "im"))]
        nodes.push(root);
        Self { nodes }
    }

    /// Snapshot of this path extended by one more node.
    #[must_use]
    pub(crate) fn appended(&self, next: NodeId) -> Self {
        let mut nodes = self.nodes.clone();
        #[cfg(feature = "im")]
        nodes.push_back(next);
        #[cfg(not(feature = "im"))]
        nodes.push(next);
        Self { nodes }
    }

    /// The root the path starts from.
    #[must_use]
    pub fn first(&self) -> NodeId {
        #[cfg(feature = "im")]
        let first = self.nodes.front();
        #[cfg(not(feature = "im"))]
        let first = self.nodes.first();
        first.copied().expect("path is never empty")
    }

    /// The node the path describes.
    #[must_use]
    pub fn last(&self) -> NodeId {
        #[cfg(feature = "im")]
        let last = self.nodes.back();
        #[cfg(not(feature = "im"))]
        let last = self.nodes.last();
        last.copied().expect("path is never empty")
    }

    /// The direct parent of the described node.
    ///
    /// `None` if the path has length 1, i.e. the described node is the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.len().checked_sub(2).and_then(|i| self.get(i))
    }

    /// All nodes on the path except the described node, root first.
    #[must_use]
    pub fn ancestors(&self) -> Vec<NodeId> {
        self.iter().take(self.len() - 1).collect()
    }

    /// Number of nodes on the path, always >= 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges on the path: `len() - 1`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.iter().any(|id| id == node)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
