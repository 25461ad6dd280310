use super::*;
use crate::graph::model::{ContainerShape, ContainerVisual, NodeKind, ShapeVisual};

#[test]
fn shared_node_is_yielded_once() {
    let mut g = SceneGraph::new();
    let shared = g.add_kind(NodeKind::ContainerShape(ContainerShape::default()));
    let left = g.add_kind(NodeKind::ShapeVisual(ShapeVisual {
        shapes: vec![shared],
        ..ShapeVisual::default()
    }));
    let right = g.add_kind(NodeKind::ShapeVisual(ShapeVisual {
        shapes: vec![shared],
        ..ShapeVisual::default()
    }));
    let root = g.add_kind(NodeKind::ContainerVisual(ContainerVisual {
        children: vec![left, right],
        ..ContainerVisual::default()
    }));

    let order = distinct_nodes(&g, root);
    assert_eq!(order, vec![root, left, shared, right]);
}

#[test]
fn unreachable_nodes_are_not_visited() {
    let mut g = SceneGraph::new();
    let orphan = g.add_kind(NodeKind::ContainerVisual(ContainerVisual::default()));
    let root = g.add_kind(NodeKind::ContainerVisual(ContainerVisual::default()));
    let order = distinct_nodes(&g, root);
    assert_eq!(order, vec![root]);
    assert!(!order.contains(&orphan));
}

#[test]
fn dangling_handles_are_skipped() {
    let mut g = SceneGraph::new();
    let root = g.add_kind(NodeKind::ContainerVisual(ContainerVisual {
        children: vec![NodeId(5)],
        ..ContainerVisual::default()
    }));
    assert_eq!(distinct_nodes(&g, root), vec![root]);
    assert!(distinct_nodes(&g, NodeId(9)).is_empty());
}
