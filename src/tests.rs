// SPDX-FileCopyrightText: The rooted-forest authors
// SPDX-License-Identifier: MPL-2.0

use crate::{
    Approach, Forest, Hierarchical as _, NodeId, RootAware as _, RootedForest, TreePath,
    UnreachableNodeError,
};

type TestForest = Forest<&'static str>;
type TestRootedForest = RootedForest<&'static str>;

// <https://github.com/rust-lang/api-guidelines/issues/223#issuecomment-683346783>
const _: () = {
    const fn assert_send<T: Send>() {}
    let _ = assert_send::<TestForest>;
    let _ = assert_send::<TestRootedForest>;
};

// <https://github.com/rust-lang/api-guidelines/issues/223#issuecomment-683346783>
const _: () = {
    const fn assert_sync<T: Sync>() {}
    let _ = assert_sync::<TestForest>;
    let _ = assert_sync::<TestRootedForest>;
};

#[test]
fn tree_path() {
    let a = NodeId::new();
    let b = NodeId::new();
    let c = NodeId::new();

    let path = TreePath::new(a);
    assert_eq!(1, path.len());
    assert_eq!(0, path.depth());
    assert_eq!(a, path.first());
    assert_eq!(a, path.last());
    assert_eq!(None, path.parent());
    assert!(path.ancestors().is_empty());

    let path = path.appended(b).appended(c);
    assert_eq!(3, path.len());
    assert_eq!(2, path.depth());
    assert_eq!(a, path.first());
    assert_eq!(c, path.last());
    assert_eq!(Some(b), path.parent());
    assert_eq!(vec![a, b], path.ancestors());
    assert!(path.contains(b));
    assert!(!path.contains(NodeId::new()));
    assert_eq!(vec![a, b, c], path.to_vec());
    assert_eq!(format!("{a}/{b}/{c}"), path.to_string());
}

#[test]
fn standalone_node_is_a_self_rooted_leaf() {
    let mut forest = TestForest::new();
    let node = forest.insert(Some("standalone"));

    assert!(forest.contains_node(node));
    assert!(forest.is_leaf(node));
    assert!(!forest.is_parent(node));
    assert_eq!(0, forest.child_count(node));
    assert!(forest.is_root(node, node));
    assert!(!forest.is_child(node, node));

    let mut rooted = TestRootedForest::new();
    let node = rooted.insert(Some("standalone"));
    assert_eq!(node, rooted.tracked_root(node));
    assert!(rooted.is_root(node));
    assert!(!rooted.is_child(node));
    assert!(rooted.is_leaf(node));
}

#[test]
fn create_always_attaches_a_fresh_child() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let child = forest.create(root, Some("child"));

    assert!(forest.has_child(root, child));
    assert!(forest.is_parent(root));
    assert!(forest.is_leaf(child));
    assert_eq!(Some(&"child"), forest.payload(child));
    assert_eq!(None, forest.payload(root));
    assert_eq!(2, forest.node_count());
}

#[test]
fn payload_can_be_replaced_and_taken() {
    let mut forest = TestForest::new();
    let node = forest.insert(Some("before"));

    assert_eq!(Some("before"), forest.set_payload(node, Some("after")));
    assert_eq!(Some(&"after"), forest.payload(node));

    if let Some(payload) = forest.payload_mut(node) {
        *payload = "mutated";
    }
    assert_eq!(Some("mutated"), forest.take_payload(node));
    assert_eq!(None, forest.payload(node));
}

#[test]
fn attach_rejects_self_attachment() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let node = forest.create(root, None);

    assert!(!forest.attach(node, node, root, root));
    assert!(!forest.has_child(node, node));
}

#[test]
fn attach_rejects_an_already_attached_target() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let b = forest.create(root, None);

    let other = forest.insert(None);
    let stray = forest.create(other, None);

    // `stray` already has a parent in `other`'s tree.
    assert!(!forest.attach(a, stray, root, other));
    assert!(!forest.has_child(a, stray));
    assert!(forest.has_child(other, stray));

    // Both trees keep their shape.
    assert_eq!(vec![a, b], forest.children_of(root).collect::<Vec<_>>());
    assert_eq!(vec![stray], forest.children_of(other).collect::<Vec<_>>());
}

#[test]
fn attach_rejects_an_ancestor_of_the_node() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let b = forest.create(a, None);

    // Attaching the component root below one of its descendants would
    // close a cycle.
    assert!(!forest.attach(b, root, root, root));
    assert!(!forest.has_child(b, root));
    assert!(forest.has_child(root, a));
    assert!(forest.has_child(a, b));
}

#[test]
fn attach_links_two_detached_trees() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);

    let other = forest.insert(None);
    let other_child = forest.create(other, None);

    assert!(forest.attach(a, other, root, other));
    assert!(forest.has_child(a, other));
    assert!(forest.has_descendant(root, other_child));
}

#[test]
fn rooted_attach_propagates_the_root_across_the_subtree() {
    let mut rooted = TestRootedForest::new();
    let root = rooted.insert(None);
    let a = rooted.create(root, None);

    let other = rooted.insert(None);
    let other_child = rooted.create(other, None);
    let other_grandchild = rooted.create(other_child, None);
    assert_eq!(other, rooted.tracked_root(other_grandchild));

    assert!(rooted.attach(a, other));
    for node in [other, other_child, other_grandchild] {
        assert_eq!(root, rooted.tracked_root(node));
        assert_eq!(Ok(root), rooted.root_of(node));
    }

    // The failed attach leaves all bookkeeping untouched.
    assert!(!rooted.attach(other_child, root));
    assert_eq!(root, rooted.tracked_root(root));
    assert!(rooted.has_child(a, other));
}

#[test]
fn delete_promotes_the_grandchildren() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let aa = forest.create(a, None);
    let ab = forest.create(a, None);

    assert!(forest.delete(root, a));
    assert!(!forest.has_child(root, a));
    assert!(forest.has_child(root, aa));
    assert!(forest.has_child(root, ab));
    assert_eq!(0, forest.child_count(a));

    // Deleting a non-child is a no-op.
    assert!(!forest.delete(root, a));
}

#[test]
fn rooted_delete_leaves_the_target_self_rooted() {
    let mut rooted = TestRootedForest::new();
    let root = rooted.insert(None);
    let a = rooted.create(root, None);
    let aa = rooted.create(a, None);
    let ab = rooted.create(a, None);

    assert!(rooted.delete(root, a));
    assert!(!rooted.has_child(root, a));
    assert!(rooted.has_child(root, aa));
    assert!(rooted.has_child(root, ab));
    assert!(rooted.is_leaf(a));
    assert!(rooted.is_root(a));
    assert_eq!(a, rooted.tracked_root(a));
    assert_eq!(root, rooted.tracked_root(aa));
    assert_eq!(root, rooted.tracked_root(ab));
}

#[test]
fn prune_detaches_the_whole_subtree() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let aa = forest.create(a, None);

    assert!(forest.prune(root, a));
    assert!(!forest.has_child(root, a));
    // The pruned subtree is intact.
    assert!(forest.has_child(a, aa));

    assert!(!forest.prune(root, a));
}

#[test]
fn rooted_prune_re_roots_the_detached_subtree() {
    let mut rooted = TestRootedForest::new();
    let root = rooted.insert(None);
    let a = rooted.create(root, None);
    let _b = rooted.create(root, None);
    let aa = rooted.create(a, None);

    assert!(rooted.prune(root, a));
    assert_eq!(1, rooted.child_count(root));
    assert_eq!(a, rooted.tracked_root(a));
    assert_eq!(vec![aa], rooted.children_of(a).collect::<Vec<_>>());
    assert_eq!(Ok(a), rooted.root_of(a));
    assert_eq!(Ok(a), rooted.root_of(aa));
    assert!(rooted.is_root(a));
}

#[test]
fn prune_all_reports_the_actually_removed_subset() {
    let mut rooted = TestRootedForest::new();
    let root = rooted.insert(None);
    let a = rooted.create(root, None);
    let b = rooted.create(root, None);
    let stranger = rooted.insert(None);

    let removed = rooted.prune_all(root, [a, stranger, b]);
    assert_eq!(vec![a, b], removed);
    assert_eq!(0, rooted.child_count(root));
    assert!(rooted.is_root(a));
    assert!(rooted.is_root(b));
}

#[test]
fn force_attach_moves_a_subtree_between_parents() {
    let mut rooted = TestRootedForest::new();
    let root = rooted.insert(None);
    let a = rooted.create(root, None);
    let b = rooted.create(root, None);
    let aa = rooted.create(a, None);
    let aaa = rooted.create(aa, None);

    // A plain attach is rejected, `aa` already has a parent.
    assert!(!rooted.attach(b, aa));

    assert!(rooted.force_attach(b, aa));
    assert!(!rooted.has_child(a, aa));
    assert!(rooted.has_child(b, aa));
    assert!(rooted.has_child(aa, aaa));
    assert_eq!(root, rooted.tracked_root(aaa));

    // Cycle prevention still applies.
    assert!(!rooted.force_attach(aa, root));
}

#[test]
fn find_path_returns_none_for_unreachable_targets() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let other = forest.insert(None);

    assert!(forest.find_path(root, other).is_none());
}

#[test]
fn find_path_spans_from_the_start_to_the_target() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let aa = forest.create(a, None);

    let path = forest.find_path(root, aa).expect("reachable");
    assert_eq!(root, path.first());
    assert_eq!(aa, path.last());
    assert_eq!(3, path.len());
    assert_eq!(2, path.depth());

    let path = forest.find_path(root, root).expect("reachable");
    assert_eq!(1, path.len());
}

#[test]
fn chain_queries_derive_parent_ancestors_and_root() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let b = forest.create(a, None);
    let c = forest.create(b, None);

    assert_eq!(Ok(root), forest.root_of(c, root));
    assert_eq!(Ok(Some(b)), forest.parent_of(c, root));
    assert_eq!(Ok(vec![root, a, b]), forest.ancestors_of(c, root));

    assert_eq!(Ok(None), forest.parent_of(root, root));
    assert_eq!(Ok(vec![]), forest.ancestors_of(root, root));

    assert!(forest.has_parent(c, b, root));
    assert!(!forest.has_parent(c, a, root));
    assert!(forest.has_ancestor(c, root, root));
    assert!(forest.has_ancestor(c, a, root));
    assert!(!forest.has_ancestor(c, c, root));
    assert!(forest.has_root(c, root, root));
    assert!(!forest.has_root(c, a, root));
}

#[test]
fn queries_fail_when_the_root_cannot_reach_the_node() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let _a = forest.create(root, None);
    let other = forest.insert(None);

    let unreachable = UnreachableNodeError { node: other, root };
    assert_eq!(Err(unreachable), forest.parent_of(other, root));
    assert_eq!(Err(unreachable), forest.ancestors_of(other, root));
    assert_eq!(Err(unreachable), forest.root_of(other, root));
    assert_eq!(Err(unreachable), forest.relatives_of(other, root));
}

#[test]
fn relatives_share_a_component_but_not_necessarily_a_lineage() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let b = forest.create(root, None);
    let aa = forest.create(a, None);
    let other = forest.insert(None);

    // Cousins count, no ancestor/descendant relation required.
    assert!(forest.has_relative(aa, b, root));
    // A component member is its own relative by the membership rule.
    assert!(forest.has_relative(aa, aa, root));
    assert!(!forest.has_relative(aa, other, root));

    assert_eq!(Ok(vec![root, a, b]), forest.relatives_of(aa, root));
}

#[test]
fn leaves_and_descendants_are_collected_by_traversal() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let b = forest.create(root, None);
    let aa = forest.create(a, None);

    assert_eq!(vec![a, b, aa], forest.descendants_of(root));
    assert_eq!(vec![b, aa], forest.leaves_of(root));
    assert!(forest.descendants_of(b).is_empty());
    // A standalone leaf is its own single leaf.
    assert_eq!(vec![b], forest.leaves_of(b));

    assert!(forest.has_descendant(root, aa));
    assert!(!forest.has_descendant(root, root));
    assert!(!forest.has_descendant(aa, root));

    assert!(forest.has_leaf(root, aa));
    assert!(forest.has_leaf(aa, aa));
    assert!(!forest.has_leaf(root, a));
    assert!(!forest.has_leaf(root, root));
}

#[test]
fn sibling_creation_scenario() {
    let mut rooted = TestRootedForest::new();
    let root = rooted.insert(None);
    let a = rooted.create(root, None);
    let b = rooted.create(root, None);
    let aa = rooted.create(a, None);

    assert_eq!(2, rooted.child_count(root));
    assert_eq!(1, rooted.child_count(a));
    assert_eq!(vec![b, aa], rooted.leaves_of(root));
    assert!(rooted.has_descendant(root, aa));
    assert_eq!(Ok(root), rooted.root_of(aa));
    assert_eq!(root, rooted.tracked_root(aa));
}

#[test]
fn traversal_orders_are_pinned() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let b = forest.create(root, None);
    let aa = forest.create(a, None);
    let ab = forest.create(a, None);
    let ba = forest.create(b, None);
    let bb = forest.create(b, None);
    let aaa = forest.create(aa, None);
    let aab = forest.create(aa, None);

    let mut order = Vec::new();
    let found = forest.traverse(root, Approach::BreadthFirst, |visit| {
        order.push(visit.node());
        false
    });
    assert!(!found);
    // Strictly ascending depth, siblings in child-set order.
    assert_eq!(vec![root, a, b, aa, ab, ba, bb, aaa, aab], order);

    let mut order = Vec::new();
    forest.traverse(root, Approach::DepthFirst, |visit| {
        order.push(visit.node());
        false
    });
    // Dives into the most recently expanded branch first, which visits
    // siblings in reverse child-set order.
    assert_eq!(vec![root, b, bb, ba, a, ab, aa, aab, aaa], order);
}

#[test]
fn traversal_reports_depth_and_path_metadata() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let aa = forest.create(a, None);

    let mut depths = Vec::new();
    forest.traverse(root, Approach::BreadthFirst, |visit| {
        assert_eq!(root, visit.path().first());
        assert_eq!(visit.node(), visit.path().last());
        assert_eq!(visit.depth() + 1, visit.path().len());
        depths.push((visit.node(), visit.depth()));
        false
    });
    assert_eq!(vec![(root, 0), (a, 1), (aa, 2)], depths);
}

#[test]
fn traversal_stops_as_soon_as_the_visitor_signals() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let _b = forest.create(root, None);

    let mut visited = Vec::new();
    let found = forest.traverse(root, Approach::BreadthFirst, |visit| {
        visited.push(visit.node());
        visit.node() == a
    });
    assert!(found);
    assert_eq!(vec![root, a], visited);
}

#[test]
fn cloning_snapshots_the_forest() {
    let mut forest = TestForest::new();
    let root = forest.insert(None);
    let a = forest.create(root, None);
    let _aa = forest.create(a, None);

    let snapshot = forest.clone();
    assert!(forest.prune(root, a));

    assert!(!forest.has_child(root, a));
    assert!(snapshot.has_child(root, a));
    assert_eq!(forest.node_count(), snapshot.node_count());
}

#[test]
fn rooted_forest_exposes_the_engine_read_only() {
    let mut rooted = TestRootedForest::new();
    let root = rooted.insert(Some("root"));
    let a = rooted.create(root, Some("a"));

    assert!(rooted.forest().has_child(root, a));
    assert_eq!(2, rooted.forest().node_count());
    assert_eq!(Some(&"a"), rooted.payload(a));
    assert_eq!(Some("a"), rooted.set_payload(a, Some("renamed")));
    assert_eq!(Some("renamed"), rooted.take_payload(a));
    assert!(rooted.lookup_node(a).is_some());

    let path = rooted.find_path(root, a).expect("reachable");
    assert_eq!(vec![root, a], path.to_vec());
    assert!(rooted.traverse(root, Approach::DepthFirst, |visit| visit.node() == a));
}
