use scenefold::{
    ColorBrush, ContainerShape, DVec3, EllipseGeometry, KeyFrame, KeyFrameAnimation, Node, NodeKind,
    SceneDocument, SceneGraph, ShapeTransform, ShapeVisual, SpriteShape, StrokeCap,
    StrokeLineJoin, StrokeStyle, Vec2, VisualTransform,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut graph = SceneGraph::new();

    let pulse = graph.add_kind(NodeKind::KeyFrameAnimation(KeyFrameAnimation {
        duration_secs: 2.0,
        key_frames: vec![
            KeyFrame {
                progress: 0.0,
                value: serde_json::json!([1.0, 1.0]),
            },
            KeyFrame {
                progress: 1.0,
                value: serde_json::json!([1.5, 1.5]),
            },
        ],
    }));
    let circle = graph.add_kind(NodeKind::EllipseGeometry(EllipseGeometry {
        radius: Some(Vec2::new(40.0, 40.0)),
        ..EllipseGeometry::default()
    }));
    let ink = graph.add_kind(NodeKind::ColorBrush(ColorBrush {
        color: Some([20, 20, 30, 255]),
    }));

    let ring = graph.add_kind(NodeKind::SpriteShape(SpriteShape {
        transform: ShapeTransform {
            center_point: Some(Vec2::new(40.0, 40.0)),
            rotation_angle_in_degrees: Some(45.0),
            offset: Some(Vec2::new(100.0, 60.0)),
            ..ShapeTransform::default()
        },
        stroke: StrokeStyle {
            start_cap: Some(StrokeCap::Round),
            end_cap: Some(StrokeCap::Round),
            dash_cap: Some(StrokeCap::Flat),
            line_join: Some(StrokeLineJoin::Round),
            thickness: Some(4.0),
            ..StrokeStyle::default()
        },
        geometry: Some(circle),
        stroke_brush: Some(ink),
        ..SpriteShape::default()
    }));
    let pulsing = graph.add(
        Node::new(NodeKind::ContainerShape(ContainerShape {
            transform: ShapeTransform {
                center_point: Some(Vec2::new(40.0, 40.0)),
                ..ShapeTransform::default()
            },
            shapes: vec![ring],
        }))
        .with_animator("Scale", pulse),
    );
    let root = graph.add_kind(NodeKind::ShapeVisual(ShapeVisual {
        transform: VisualTransform {
            scale: Some(DVec3::ONE),
            offset: Some(DVec3::new(0.0, 20.0, 0.0)),
            ..VisualTransform::default()
        },
        shapes: vec![pulsing, ring],
        ..ShapeVisual::default()
    }));

    let outcome = scenefold::optimize_property_values_with(
        &mut graph,
        root,
        &scenefold::OptimizeOpts::default(),
    );
    eprintln!("{:?}", outcome.stats);

    let doc = SceneDocument { root, graph };
    doc.validate()?;
    println!("{}", doc.to_json_string_pretty()?);
    Ok(())
}
