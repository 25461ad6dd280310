//! Distinct-node enumeration over a shared (DAG) scene graph.

use crate::graph::model::{NodeId, SceneGraph};

/// Every node reachable from `root`, each exactly once, in depth-first preorder.
///
/// Nodes with several parents are yielded on first encounter only. Dangling handles are
/// skipped rather than followed.
pub fn distinct_nodes(graph: &SceneGraph, root: NodeId) -> Vec<NodeId> {
    let mut seen = vec![false; graph.len()];
    let mut order = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        let Some(node) = graph.node(id) else {
            tracing::warn!(%id, "skipping dangling node handle");
            continue;
        };
        if std::mem::replace(&mut seen[id.idx()], true) {
            continue;
        }
        order.push(id);

        let first_child = stack.len();
        node.push_references(&mut stack);
        stack[first_child..].reverse();
    }

    order
}

#[cfg(test)]
#[path = "../../tests/unit/graph/traverse.rs"]
mod tests;
