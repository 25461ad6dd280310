//! The property-value optimization pass over a whole scene graph.

use crate::graph::model::{NodeId, NodeKind, SceneGraph};
use crate::graph::traverse::distinct_nodes;
use crate::optimize::canonicalize::{canonicalize_shape, canonicalize_visual};
use crate::optimize::stroke::reduce_stroke;
use crate::transform::MatrixComparison;

/// Options for [`optimize_property_values_with`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimizeOpts {
    /// Append a note describing each fold to the node's short and long descriptions.
    pub annotate: bool,
    /// How folded matrices are tested for identity and for change.
    pub matrix_comparison: MatrixComparison,
}

impl Default for OptimizeOpts {
    fn default() -> Self {
        Self {
            annotate: true,
            matrix_comparison: MatrixComparison::Exact,
        }
    }
}

/// Counters describing what a pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct OptimizeStats {
    /// Distinct nodes reached from the root.
    pub nodes_visited: usize,
    /// Nodes whose transform matrix now differs from its prior value.
    pub transforms_folded: usize,
    /// Nodes whose non-identity prior matrix folded away to nothing.
    pub transforms_dropped: usize,
    /// Center points and rotation axes removed because nothing used them.
    pub pivots_cleared: usize,
    /// Stroke caps, miter limits and line joins removed.
    pub stroke_properties_cleared: usize,
    /// Animator bindings removed along with the properties they drove.
    pub animators_stopped: usize,
}

/// Result of [`optimize_property_values_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptimizeOutcome {
    /// The root that was passed in; the graph is mutated in place.
    pub root: NodeId,
    /// What the pass changed.
    pub stats: OptimizeStats,
}

/// Optimize every node reachable from `root` with default options and return `root`.
pub fn optimize_property_values(graph: &mut SceneGraph, root: NodeId) -> NodeId {
    optimize_property_values_with(graph, root, &OptimizeOpts::default()).root
}

/// Optimize every node reachable from `root`.
///
/// Each distinct node is visited once, however many parents share it. Visuals get their
/// transforms folded; shapes get their transforms folded and, for sprite shapes, their stroke
/// reduced against the attached geometry. Geometries, brushes and animations are left as they
/// are.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.len()))]
pub fn optimize_property_values_with(
    graph: &mut SceneGraph,
    root: NodeId,
    opts: &OptimizeOpts,
) -> OptimizeOutcome {
    let mut stats = OptimizeStats::default();

    for id in distinct_nodes(graph, root) {
        stats.nodes_visited += 1;
        optimize_node(graph, id, opts, &mut stats);
    }

    tracing::debug!(?stats, "property values optimized");
    OptimizeOutcome { root, stats }
}

#[derive(Clone, Copy)]
enum Treatment {
    Visual,
    ContainerShape,
    SpriteShape,
    Untouched,
}

fn optimize_node(
    graph: &mut SceneGraph,
    id: NodeId,
    opts: &OptimizeOpts,
    stats: &mut OptimizeStats,
) {
    let Some(node) = graph.node_mut(id) else {
        return;
    };

    let treatment = match &node.kind {
        NodeKind::ContainerVisual(_) | NodeKind::SpriteVisual(_) | NodeKind::ShapeVisual(_) => {
            Treatment::Visual
        }
        NodeKind::ContainerShape(_) => Treatment::ContainerShape,
        NodeKind::SpriteShape(_) => Treatment::SpriteShape,
        NodeKind::EllipseGeometry(_)
        | NodeKind::RectangleGeometry(_)
        | NodeKind::RoundedRectangleGeometry(_)
        | NodeKind::PathGeometry(_)
        | NodeKind::ColorBrush(_)
        | NodeKind::KeyFrameAnimation(_)
        | NodeKind::ExpressionAnimation(_) => Treatment::Untouched,
    };

    match treatment {
        Treatment::Visual => canonicalize_visual(node, opts, stats),
        Treatment::ContainerShape => canonicalize_shape(node, opts, stats),
        Treatment::SpriteShape => {
            // Stroke reduction may unbind the last animator, which lets the transform fold now
            // rather than on a later pass.
            reduce_stroke(graph, id, stats);
            if let Some(node) = graph.node_mut(id) {
                canonicalize_shape(node, opts, stats);
            }
        }
        Treatment::Untouched => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/pass.rs"]
mod tests;
