//! Folding of center point, scale, rotation, offset and prior matrix into one transform.

use crate::graph::defaults;
use crate::graph::model::{Node, NodeKind, ShapeTransform, VisualTransform};
use crate::graph::property::{Property, PropertyId};
use crate::optimize::classify::non_default_properties;
use crate::optimize::describe::{annotate, describe_shape_fold, describe_visual_fold};
use crate::optimize::pass::{OptimizeOpts, OptimizeStats};
use crate::transform::{affine, matrix4};

const PIVOT_USERS: PropertyId = PropertyId::SCALE.union(PropertyId::ROTATION_ANGLE_IN_DEGREES);

/// Canonicalize the transform of a container, sprite or shape-hosting visual.
pub(crate) fn canonicalize_visual(node: &mut Node, opts: &OptimizeOpts, stats: &mut OptimizeStats) {
    let non_default = non_default_properties(node);
    let has_animators = !node.animators.is_empty();
    let keep_center = node.is_animated(Property::CenterPoint);
    let keep_axis = node.is_animated(Property::RotationAxis);

    let Some(t) = visual_transform_mut(&mut node.kind) else {
        return;
    };

    // Without scale or rotation the pivot and the axis have nothing to act on.
    if !non_default.intersects(PIVOT_USERS) {
        if !keep_center && t.center_point.take().is_some() {
            stats.pivots_cleared += 1;
        }
        if !keep_axis && t.rotation_axis.take().is_some() {
            stats.pivots_cleared += 1;
        }
    }

    // Only rotation about the depth axis folds into the matrix.
    let off_axis_rotation = t
        .rotation_angle_in_degrees
        .is_some_and(|r| r != defaults::ROTATION_ANGLE_IN_DEGREES)
        && t.rotation_axis.is_some_and(|a| a != defaults::ROTATION_AXIS);

    if has_animators || off_axis_rotation {
        tracing::trace!(has_animators, off_axis_rotation, "visual transform not folded");
        return;
    }

    let center = t.center_point.take().unwrap_or(defaults::CENTER_POINT_3D);
    let scale = t.scale.take().unwrap_or(defaults::SCALE_3D);
    let rotation = t
        .rotation_angle_in_degrees
        .take()
        .unwrap_or(defaults::ROTATION_ANGLE_IN_DEGREES);
    let offset = t.offset.take().unwrap_or(defaults::OFFSET_3D);
    let prior = t.transform_matrix.take().unwrap_or(defaults::TRANSFORM_3D);
    // The angle is gone, so the axis it referred to is too.
    if t.rotation_axis.take().is_some() {
        stats.pivots_cleared += 1;
    }

    let combined = matrix4::fold(center, scale, rotation, offset, prior);
    let cmp = opts.matrix_comparison;

    if matrix4::is_identity(combined, cmp) {
        if !matrix4::is_identity(prior, cmp) {
            stats.transforms_dropped += 1;
        }
        return;
    }

    t.transform_matrix = Some(combined);
    if !matrix4::mat4_eq(combined, prior, cmp) {
        stats.transforms_folded += 1;
        let fragment = describe_visual_fold(scale, rotation, offset);
        tracing::debug!(%fragment, "folded visual transform");
        if opts.annotate {
            annotate(node, &fragment);
        }
    }
}

/// Canonicalize the transform of a container or sprite shape.
pub(crate) fn canonicalize_shape(node: &mut Node, opts: &OptimizeOpts, stats: &mut OptimizeStats) {
    let non_default = non_default_properties(node);
    let has_animators = !node.animators.is_empty();
    let keep_center = node.is_animated(Property::CenterPoint);

    let Some(t) = shape_transform_mut(&mut node.kind) else {
        return;
    };

    if !non_default.intersects(PIVOT_USERS) && !keep_center && t.center_point.take().is_some() {
        stats.pivots_cleared += 1;
    }

    if has_animators {
        tracing::trace!("shape transform not folded: node is animated");
        return;
    }

    let center = t.center_point.take().unwrap_or(defaults::CENTER_POINT_2D);
    let scale = t.scale.take().unwrap_or(defaults::SCALE_2D);
    let rotation = t
        .rotation_angle_in_degrees
        .take()
        .unwrap_or(defaults::ROTATION_ANGLE_IN_DEGREES);
    let offset = t.offset.take().unwrap_or(defaults::OFFSET_2D);
    let prior = t.transform_matrix.take().unwrap_or(defaults::TRANSFORM_2D);

    let combined = affine::fold(center, scale, rotation, offset, prior);
    let cmp = opts.matrix_comparison;

    if affine::is_identity(combined, cmp) {
        if !affine::is_identity(prior, cmp) {
            stats.transforms_dropped += 1;
        }
        return;
    }

    t.transform_matrix = Some(combined);
    if !affine::affine_eq(combined, prior, cmp) {
        stats.transforms_folded += 1;
        let fragment = describe_shape_fold(scale, rotation, offset);
        tracing::debug!(%fragment, "folded shape transform");
        if opts.annotate {
            annotate(node, &fragment);
        }
    }
}

fn visual_transform_mut(kind: &mut NodeKind) -> Option<&mut VisualTransform> {
    match kind {
        NodeKind::ContainerVisual(v) => Some(&mut v.transform),
        NodeKind::SpriteVisual(v) => Some(&mut v.transform),
        NodeKind::ShapeVisual(v) => Some(&mut v.transform),
        _ => None,
    }
}

fn shape_transform_mut(kind: &mut NodeKind) -> Option<&mut ShapeTransform> {
    match kind {
        NodeKind::ContainerShape(s) => Some(&mut s.transform),
        NodeKind::SpriteShape(s) => Some(&mut s.transform),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/canonicalize.rs"]
mod tests;
