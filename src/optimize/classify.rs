//! Which tracked properties of a node currently hold something other than the default.

use crate::graph::defaults;
use crate::graph::model::{Node, NodeKind, ShapeTransform, StrokeStyle, Trim, VisualTransform};
use crate::graph::property::PropertyId;

const VISUAL: PropertyId = PropertyId::CENTER_POINT
    .union(PropertyId::SCALE)
    .union(PropertyId::ROTATION_ANGLE_IN_DEGREES)
    .union(PropertyId::ROTATION_AXIS)
    .union(PropertyId::OFFSET)
    .union(PropertyId::TRANSFORM_MATRIX);

const SHAPE: PropertyId = PropertyId::CENTER_POINT
    .union(PropertyId::SCALE)
    .union(PropertyId::ROTATION_ANGLE_IN_DEGREES)
    .union(PropertyId::OFFSET)
    .union(PropertyId::TRANSFORM_MATRIX);

const STROKE: PropertyId = PropertyId::STROKE_START_CAP
    .union(PropertyId::STROKE_DASH_CAP)
    .union(PropertyId::STROKE_END_CAP)
    .union(PropertyId::STROKE_MITER_LIMIT)
    .union(PropertyId::STROKE_LINE_JOIN)
    .union(PropertyId::STROKE_THICKNESS);

const TRIM: PropertyId = PropertyId::TRIM_START
    .union(PropertyId::TRIM_END)
    .union(PropertyId::TRIM_OFFSET);

/// Properties of `kind` that the classifier reports on.
pub fn tracked_properties(kind: &NodeKind) -> PropertyId {
    match kind {
        NodeKind::ContainerVisual(_) | NodeKind::SpriteVisual(_) | NodeKind::ShapeVisual(_) => {
            VISUAL
        }
        NodeKind::ContainerShape(_) => SHAPE,
        NodeKind::SpriteShape(_) => SHAPE.union(STROKE),
        NodeKind::EllipseGeometry(_)
        | NodeKind::RectangleGeometry(_)
        | NodeKind::RoundedRectangleGeometry(_)
        | NodeKind::PathGeometry(_) => TRIM,
        NodeKind::ColorBrush(_)
        | NodeKind::KeyFrameAnimation(_)
        | NodeKind::ExpressionAnimation(_) => PropertyId::empty(),
    }
}

/// The set of tracked properties on `node` that are present with a non-default value.
///
/// A property with an animator bound to it is always reported, whatever its current value:
/// that value is only a snapshot of what the animation will produce.
pub fn non_default_properties(node: &Node) -> PropertyId {
    let mut set = match &node.kind {
        NodeKind::ContainerVisual(v) => visual_flags(&v.transform),
        NodeKind::SpriteVisual(v) => visual_flags(&v.transform),
        NodeKind::ShapeVisual(v) => visual_flags(&v.transform),
        NodeKind::ContainerShape(s) => shape_flags(&s.transform),
        NodeKind::SpriteShape(s) => shape_flags(&s.transform) | stroke_flags(&s.stroke),
        NodeKind::EllipseGeometry(g) => trim_flags(&g.trim),
        NodeKind::RectangleGeometry(g) => trim_flags(&g.trim),
        NodeKind::RoundedRectangleGeometry(g) => trim_flags(&g.trim),
        NodeKind::PathGeometry(g) => trim_flags(&g.trim),
        NodeKind::ColorBrush(_)
        | NodeKind::KeyFrameAnimation(_)
        | NodeKind::ExpressionAnimation(_) => PropertyId::empty(),
    };

    if !node.animators.is_empty() {
        for p in tracked_properties(&node.kind).properties() {
            if node.is_animated(p) {
                set |= p.flag();
            }
        }
    }

    set
}

#[inline]
fn differs<T: PartialEq + Copy>(value: Option<T>, default: T) -> bool {
    value.is_some_and(|v| v != default)
}

fn visual_flags(t: &VisualTransform) -> PropertyId {
    let mut set = PropertyId::empty();
    set.set(
        PropertyId::CENTER_POINT,
        differs(t.center_point, defaults::CENTER_POINT_3D),
    );
    set.set(PropertyId::SCALE, differs(t.scale, defaults::SCALE_3D));
    set.set(
        PropertyId::ROTATION_ANGLE_IN_DEGREES,
        differs(
            t.rotation_angle_in_degrees,
            defaults::ROTATION_ANGLE_IN_DEGREES,
        ),
    );
    set.set(
        PropertyId::ROTATION_AXIS,
        differs(t.rotation_axis, defaults::ROTATION_AXIS),
    );
    set.set(PropertyId::OFFSET, differs(t.offset, defaults::OFFSET_3D));
    set.set(
        PropertyId::TRANSFORM_MATRIX,
        differs(t.transform_matrix, defaults::TRANSFORM_3D),
    );
    set
}

fn shape_flags(t: &ShapeTransform) -> PropertyId {
    let mut set = PropertyId::empty();
    set.set(
        PropertyId::CENTER_POINT,
        differs(t.center_point, defaults::CENTER_POINT_2D),
    );
    set.set(PropertyId::SCALE, differs(t.scale, defaults::SCALE_2D));
    set.set(
        PropertyId::ROTATION_ANGLE_IN_DEGREES,
        differs(
            t.rotation_angle_in_degrees,
            defaults::ROTATION_ANGLE_IN_DEGREES,
        ),
    );
    set.set(PropertyId::OFFSET, differs(t.offset, defaults::OFFSET_2D));
    set.set(
        PropertyId::TRANSFORM_MATRIX,
        differs(t.transform_matrix, defaults::TRANSFORM_2D),
    );
    set
}

fn stroke_flags(s: &StrokeStyle) -> PropertyId {
    let mut set = PropertyId::empty();
    set.set(
        PropertyId::STROKE_START_CAP,
        differs(s.start_cap, defaults::STROKE_CAP),
    );
    set.set(
        PropertyId::STROKE_DASH_CAP,
        differs(s.dash_cap, defaults::STROKE_CAP),
    );
    set.set(
        PropertyId::STROKE_END_CAP,
        differs(s.end_cap, defaults::STROKE_CAP),
    );
    set.set(
        PropertyId::STROKE_MITER_LIMIT,
        differs(s.miter_limit, defaults::STROKE_MITER_LIMIT),
    );
    set.set(
        PropertyId::STROKE_LINE_JOIN,
        differs(s.line_join, defaults::STROKE_LINE_JOIN),
    );
    set.set(
        PropertyId::STROKE_THICKNESS,
        differs(s.thickness, defaults::STROKE_THICKNESS),
    );
    set
}

fn trim_flags(t: &Trim) -> PropertyId {
    let mut set = PropertyId::empty();
    set.set(
        PropertyId::TRIM_START,
        differs(t.trim_start, defaults::TRIM_START),
    );
    set.set(PropertyId::TRIM_END, differs(t.trim_end, defaults::TRIM_END));
    set.set(
        PropertyId::TRIM_OFFSET,
        differs(t.trim_offset, defaults::TRIM_OFFSET),
    );
    set
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/classify.rs"]
mod tests;
