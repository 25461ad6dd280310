use super::*;
use crate::foundation::core::{DMat4, DVec3, Vec2};
use crate::graph::model::{
    ColorBrush, ContainerVisual, EllipseGeometry, NodeId, SpriteShape, StrokeCap, StrokeLineJoin,
};

#[test]
fn explicit_defaults_are_not_reported() {
    let node = Node::new(NodeKind::ContainerVisual(ContainerVisual {
        transform: VisualTransform {
            center_point: Some(DVec3::ZERO),
            scale: Some(DVec3::ONE),
            rotation_angle_in_degrees: Some(0.0),
            rotation_axis: Some(DVec3::Z),
            offset: Some(DVec3::ZERO),
            transform_matrix: Some(DMat4::IDENTITY),
        },
        ..ContainerVisual::default()
    }));
    assert_eq!(non_default_properties(&node), PropertyId::empty());
}

#[test]
fn non_default_visual_values_are_reported() {
    let node = Node::new(NodeKind::ContainerVisual(ContainerVisual {
        transform: VisualTransform {
            scale: Some(DVec3::new(2.0, 2.0, 1.0)),
            offset: Some(DVec3::new(0.0, 3.0, 0.0)),
            rotation_axis: Some(DVec3::X),
            ..VisualTransform::default()
        },
        ..ContainerVisual::default()
    }));
    assert_eq!(
        non_default_properties(&node),
        PropertyId::SCALE | PropertyId::OFFSET | PropertyId::ROTATION_AXIS
    );
}

#[test]
fn stroke_values_are_compared_to_their_defaults() {
    let node = Node::new(NodeKind::SpriteShape(SpriteShape {
        transform: ShapeTransform {
            rotation_angle_in_degrees: Some(15.0),
            scale: Some(Vec2::new(1.0, 1.0)),
            ..ShapeTransform::default()
        },
        stroke: StrokeStyle {
            start_cap: Some(StrokeCap::Flat),
            end_cap: Some(StrokeCap::Round),
            miter_limit: Some(4.0),
            line_join: Some(StrokeLineJoin::Miter),
            ..StrokeStyle::default()
        },
        ..SpriteShape::default()
    }));
    assert_eq!(
        non_default_properties(&node),
        PropertyId::ROTATION_ANGLE_IN_DEGREES
            | PropertyId::STROKE_END_CAP
            | PropertyId::STROKE_MITER_LIMIT
    );
}

#[test]
fn geometry_trim_window() {
    let node = Node::new(NodeKind::EllipseGeometry(EllipseGeometry {
        trim: Trim {
            trim_start: Some(0.0),
            trim_end: Some(0.5),
            trim_offset: None,
        },
        ..EllipseGeometry::default()
    }));
    assert_eq!(non_default_properties(&node), PropertyId::TRIM_END);
}

#[test]
fn animated_properties_count_as_non_default() {
    let node = Node::new(NodeKind::EllipseGeometry(EllipseGeometry::default()))
        .with_animator("TrimStart", NodeId(3));
    assert_eq!(non_default_properties(&node), PropertyId::TRIM_START);

    let node = Node::new(NodeKind::ContainerVisual(ContainerVisual {
        transform: VisualTransform {
            scale: Some(DVec3::ONE),
            ..VisualTransform::default()
        },
        ..ContainerVisual::default()
    }))
    .with_animator("Scale.X", NodeId(3));
    assert_eq!(non_default_properties(&node), PropertyId::SCALE);
}

#[test]
fn animators_on_untracked_properties_are_ignored() {
    let node = Node::new(NodeKind::ColorBrush(ColorBrush::default()))
        .with_animator("Color", NodeId(1));
    assert!(non_default_properties(&node).is_empty());

    let node = Node::new(NodeKind::ContainerVisual(ContainerVisual::default()))
        .with_animator("Opacity", NodeId(1))
        .with_animator("StrokeMiterLimit", NodeId(1));
    assert!(non_default_properties(&node).is_empty());
}
