//! Removal of stroke properties the attached geometry can never show.

use crate::graph::defaults;
use crate::graph::model::{NodeId, NodeKind, SceneGraph, StrokeStyle};
use crate::graph::property::{Property, PropertyId};
use crate::optimize::classify::non_default_properties;
use crate::optimize::pass::OptimizeStats;

const TRIM_WINDOW: PropertyId = PropertyId::TRIM_START.union(PropertyId::TRIM_END);
const JOIN_STYLE: PropertyId = PropertyId::STROKE_MITER_LIMIT.union(PropertyId::STROKE_LINE_JOIN);
const END_CAPS: PropertyId = PropertyId::STROKE_START_CAP.union(PropertyId::STROKE_END_CAP);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outline {
    Ellipse,
    Rectangle,
    RoundedRectangle,
    Path,
}

impl Outline {
    fn of(kind: &NodeKind) -> Option<Self> {
        match kind {
            NodeKind::EllipseGeometry(_) => Some(Self::Ellipse),
            NodeKind::RectangleGeometry(_) => Some(Self::Rectangle),
            NodeKind::RoundedRectangleGeometry(_) => Some(Self::RoundedRectangle),
            NodeKind::PathGeometry(_) => Some(Self::Path),
            _ => None,
        }
    }

    // Path data may or may not close; treat it as open.
    fn is_closed(self) -> bool {
        matches!(self, Self::Ellipse | Self::Rectangle | Self::RoundedRectangle)
    }
}

/// Normalize the caps of sprite shape `id` and drop stroke properties its geometry hides.
pub(crate) fn reduce_stroke(graph: &mut SceneGraph, id: NodeId, stats: &mut OptimizeStats) {
    let geometry = match graph.node(id).map(|n| &n.kind) {
        Some(NodeKind::SpriteShape(sprite)) => sprite.geometry,
        _ => return,
    };

    // (outline, trimmed) of the attached geometry, if it can be classified.
    let outline = geometry.and_then(|g| match graph.node(g) {
        Some(geometry_node) => {
            let outline = Outline::of(&geometry_node.kind);
            if outline.is_none() {
                tracing::warn!(
                    %id,
                    geometry = %g,
                    kind = geometry_node.kind.name(),
                    "sprite shape geometry is not a geometry; leaving stroke alone"
                );
            }
            let trimmed = non_default_properties(geometry_node).intersects(TRIM_WINDOW);
            outline.map(|o| (o, trimmed))
        }
        None => {
            tracing::warn!(%id, geometry = %g, "dangling geometry handle; leaving stroke alone");
            None
        }
    });

    let Some(node) = graph.node_mut(id) else {
        return;
    };
    let NodeKind::SpriteShape(sprite) = &mut node.kind else {
        return;
    };

    for cap in [
        &mut sprite.stroke.start_cap,
        &mut sprite.stroke.dash_cap,
        &mut sprite.stroke.end_cap,
    ] {
        if *cap == Some(defaults::STROKE_CAP) {
            *cap = None;
            stats.stroke_properties_cleared += 1;
        }
    }

    let Some((outline, trimmed)) = outline else {
        return;
    };

    let non_default = non_default_properties(node);
    let mut invisible = PropertyId::empty();
    if outline == Outline::Ellipse {
        // An ellipse outline never changes direction abruptly, so joins never render.
        invisible |= non_default & JOIN_STYLE;
    }
    if outline.is_closed() && !trimmed {
        // A closed, untrimmed outline has no ends to cap.
        invisible |= non_default & END_CAPS;
    }

    for p in invisible.properties() {
        if let NodeKind::SpriteShape(sprite) = &mut node.kind
            && clear(&mut sprite.stroke, p)
        {
            stats.stroke_properties_cleared += 1;
        }
        stats.animators_stopped += node.stop_animation(p);
    }
}

fn clear(stroke: &mut StrokeStyle, property: Property) -> bool {
    match property {
        Property::StrokeStartCap => stroke.start_cap.take().is_some(),
        Property::StrokeEndCap => stroke.end_cap.take().is_some(),
        Property::StrokeMiterLimit => stroke.miter_limit.take().is_some(),
        Property::StrokeLineJoin => stroke.line_join.take().is_some(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/stroke.rs"]
mod tests;
