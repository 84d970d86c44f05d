// SPDX-FileCopyrightText: The rooted-forest authors
// SPDX-License-Identifier: MPL-2.0

//! Generic hierarchical tree engine with tracked-root bookkeeping.
//!
//! A [`Forest`] is an arena of payload-carrying nodes addressed by
//! [`NodeId`] handles. Nodes own their child sets; parent-hood is never
//! stored and is instead derived by searching a path from a designated
//! root. [`RootedForest`] decorates the engine with a per-node record of
//! the current component root, so that every root-parameterized operation
//! can be invoked without spelling the root out.

mod contract;
pub use self::contract::{Hierarchical, RootAware};

mod forest;
pub use self::forest::{Forest, UnreachableNodeError};

mod node;
pub use self::node::Node;

mod node_id;
pub use self::node_id::NodeId;

mod path;
pub use self::path::TreePath;

mod rooted;
pub use self::rooted::RootedForest;

mod traverse;
pub use self::traverse::{Approach, Visit};

#[cfg(feature = "im")]
type HashMap<K, V> = im::HashMap<K, V>;

#[cfg(not(feature = "im"))]
type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "im")]
type OrdSet<T> = im::OrdSet<T>;

#[cfg(not(feature = "im"))]
type OrdSet<T> = std::collections::BTreeSet<T>;

#[cfg(test)]
mod tests;
