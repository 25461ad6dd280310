use super::*;
use crate::foundation::core::{Affine, DMat4, DVec3, Point, Vec2};
use crate::graph::model::{ContainerShape, ContainerVisual, NodeId, SpriteVisual};
use crate::transform::MatrixComparison;

fn visual(transform: VisualTransform) -> Node {
    Node::new(NodeKind::ContainerVisual(ContainerVisual {
        transform,
        ..ContainerVisual::default()
    }))
}

fn shape(transform: ShapeTransform) -> Node {
    Node::new(NodeKind::ContainerShape(ContainerShape {
        transform,
        ..ContainerShape::default()
    }))
}

fn visual_transform(node: &Node) -> &VisualTransform {
    match &node.kind {
        NodeKind::ContainerVisual(v) => &v.transform,
        NodeKind::SpriteVisual(v) => &v.transform,
        NodeKind::ShapeVisual(v) => &v.transform,
        other => panic!("not a visual: {}", other.name()),
    }
}

fn shape_transform(node: &Node) -> &ShapeTransform {
    match &node.kind {
        NodeKind::ContainerShape(s) => &s.transform,
        NodeKind::SpriteShape(s) => &s.transform,
        other => panic!("not a shape: {}", other.name()),
    }
}

#[test]
fn explicit_identity_properties_fold_to_nothing() {
    let mut node = shape(ShapeTransform {
        scale: Some(Vec2::new(1.0, 1.0)),
        rotation_angle_in_degrees: Some(0.0),
        offset: Some(Vec2::ZERO),
        ..ShapeTransform::default()
    });
    let mut stats = OptimizeStats::default();
    canonicalize_shape(&mut node, &OptimizeOpts::default(), &mut stats);

    assert_eq!(shape_transform(&node), &ShapeTransform::default());
    assert_eq!(node.short_description, None);
    assert_eq!(stats.transforms_folded, 0);
}

#[test]
fn unused_pivot_and_axis_are_cleared_before_folding() {
    let mut node = visual(VisualTransform {
        center_point: Some(DVec3::new(5.0, 5.0, 0.0)),
        rotation_axis: Some(DVec3::X),
        offset: Some(DVec3::new(1.0, 2.0, 3.0)),
        ..VisualTransform::default()
    });
    let mut stats = OptimizeStats::default();
    canonicalize_visual(&mut node, &OptimizeOpts::default(), &mut stats);

    let t = visual_transform(&node);
    assert_eq!(t.center_point, None);
    assert_eq!(t.rotation_axis, None);
    assert_eq!(t.offset, None);
    assert_eq!(
        t.transform_matrix,
        Some(DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)))
    );
    assert_eq!(node.short_description.as_deref(), Some("Offset(1,2,3)"));
    assert_eq!(stats.pivots_cleared, 2);
    assert_eq!(stats.transforms_folded, 1);
}

#[test]
fn any_animator_blocks_folding_but_not_pivot_culling() {
    let mut node = shape(ShapeTransform {
        center_point: Some(Vec2::new(3.0, 3.0)),
        offset: Some(Vec2::new(4.0, 0.0)),
        ..ShapeTransform::default()
    })
    .with_animator("Offset", NodeId(9));
    let mut stats = OptimizeStats::default();
    canonicalize_shape(&mut node, &OptimizeOpts::default(), &mut stats);

    let t = shape_transform(&node);
    assert_eq!(t.center_point, None);
    assert_eq!(t.offset, Some(Vec2::new(4.0, 0.0)));
    assert_eq!(t.transform_matrix, None);
    assert_eq!(node.animators.len(), 1);
}

#[test]
fn animated_pivot_is_kept() {
    let mut node = visual(VisualTransform {
        center_point: Some(DVec3::new(3.0, 3.0, 0.0)),
        ..VisualTransform::default()
    })
    .with_animator("CenterPoint", NodeId(9));
    let mut stats = OptimizeStats::default();
    canonicalize_visual(&mut node, &OptimizeOpts::default(), &mut stats);

    assert_eq!(
        visual_transform(&node).center_point,
        Some(DVec3::new(3.0, 3.0, 0.0))
    );
    assert_eq!(stats.pivots_cleared, 0);
}

#[test]
fn rotation_about_another_axis_is_not_folded() {
    let before = VisualTransform {
        scale: Some(DVec3::new(2.0, 2.0, 2.0)),
        rotation_angle_in_degrees: Some(30.0),
        rotation_axis: Some(DVec3::X),
        center_point: Some(DVec3::new(1.0, 1.0, 1.0)),
        ..VisualTransform::default()
    };
    let mut node = visual(before.clone());
    let mut stats = OptimizeStats::default();
    canonicalize_visual(&mut node, &OptimizeOpts::default(), &mut stats);

    assert_eq!(visual_transform(&node), &before);
    assert_eq!(stats, OptimizeStats::default());
}

#[test]
fn rotation_about_explicit_depth_axis_folds() {
    let mut node = Node::new(NodeKind::SpriteVisual(SpriteVisual {
        transform: VisualTransform {
            rotation_angle_in_degrees: Some(90.0),
            rotation_axis: Some(DVec3::Z),
            center_point: Some(DVec3::new(1.0, 0.0, 0.0)),
            ..VisualTransform::default()
        },
        ..SpriteVisual::default()
    }));
    let mut stats = OptimizeStats::default();
    canonicalize_visual(&mut node, &OptimizeOpts::default(), &mut stats);

    let t = visual_transform(&node);
    assert_eq!(t.rotation_angle_in_degrees, None);
    assert_eq!(t.rotation_axis, None);
    assert_eq!(t.center_point, None);
    let m = t.transform_matrix.expect("rotation should fold into a matrix");
    let p = m.transform_point3(DVec3::new(2.0, 0.0, 0.0));
    assert!(p.abs_diff_eq(DVec3::new(1.0, 1.0, 0.0), 1e-9), "{p:?}");
    assert_eq!(node.short_description.as_deref(), Some("RotationDegrees(90)"));
}

#[test]
fn re_encoding_the_same_matrix_is_not_annotated() {
    let prior = Affine::translate((3.0, 4.0));
    let mut node = shape(ShapeTransform {
        transform_matrix: Some(prior),
        center_point: Some(Vec2::ZERO),
        ..ShapeTransform::default()
    });
    node.short_description = Some("Group".to_string());
    let mut stats = OptimizeStats::default();
    canonicalize_shape(&mut node, &OptimizeOpts::default(), &mut stats);

    assert_eq!(shape_transform(&node).transform_matrix, Some(prior));
    assert_eq!(node.short_description.as_deref(), Some("Group"));
    assert_eq!(stats.transforms_folded, 0);
}

#[test]
fn fold_composes_with_prior_matrix() {
    let prior = Affine::scale(0.5);
    let mut node = shape(ShapeTransform {
        scale: Some(Vec2::new(2.0, 2.0)),
        offset: Some(Vec2::new(10.0, 0.0)),
        transform_matrix: Some(prior),
        ..ShapeTransform::default()
    });
    node.short_description = Some("Group".to_string());
    let mut stats = OptimizeStats::default();
    canonicalize_shape(&mut node, &OptimizeOpts::default(), &mut stats);

    let m = shape_transform(&node)
        .transform_matrix
        .expect("fold should produce a matrix");
    // (1,1) -> scale (2,2) -> offset (12,2) -> prior (6,1)
    let p = m * Point::new(1.0, 1.0);
    assert!((p.x - 6.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12, "{p:?}");
    assert_eq!(
        node.short_description.as_deref(),
        Some("Group Scale:2, Offset:(10,0)")
    );
}

#[test]
fn prior_cancelled_by_fold_is_dropped() {
    let mut node = shape(ShapeTransform {
        scale: Some(Vec2::new(2.0, 2.0)),
        transform_matrix: Some(Affine::scale(0.5)),
        ..ShapeTransform::default()
    });
    let mut stats = OptimizeStats::default();
    canonicalize_shape(&mut node, &OptimizeOpts::default(), &mut stats);

    assert_eq!(shape_transform(&node), &ShapeTransform::default());
    assert_eq!(stats.transforms_dropped, 1);
}

#[test]
fn annotation_can_be_disabled() {
    let mut node = shape(ShapeTransform {
        offset: Some(Vec2::new(1.0, 0.0)),
        ..ShapeTransform::default()
    });
    let opts = OptimizeOpts {
        annotate: false,
        ..OptimizeOpts::default()
    };
    let mut stats = OptimizeStats::default();
    canonicalize_shape(&mut node, &opts, &mut stats);

    assert!(shape_transform(&node).transform_matrix.is_some());
    assert_eq!(node.short_description, None);
    assert_eq!(stats.transforms_folded, 1);
}

#[test]
fn tolerance_comparison_drops_near_identity_results() {
    let full_turn = ShapeTransform {
        rotation_angle_in_degrees: Some(360.0),
        ..ShapeTransform::default()
    };

    let mut exact = shape(full_turn.clone());
    canonicalize_shape(
        &mut exact,
        &OptimizeOpts::default(),
        &mut OptimizeStats::default(),
    );
    assert!(shape_transform(&exact).transform_matrix.is_some());

    let mut tolerant = shape(full_turn);
    let opts = OptimizeOpts {
        matrix_comparison: MatrixComparison::Tolerance(1e-9),
        ..OptimizeOpts::default()
    };
    canonicalize_shape(&mut tolerant, &opts, &mut OptimizeStats::default());
    assert_eq!(shape_transform(&tolerant).transform_matrix, None);
}
