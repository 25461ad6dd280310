//! Scenefold is a property-value optimizer for animated composition scene graphs.
//!
//! A scene graph (see [`SceneGraph`]) is an arena of visuals, shapes, geometries, brushes and
//! animations connected by [`NodeId`] handles. Nodes may be shared by several parents. One pass
//! of [`optimize_property_values`] rewrites the graph in place so it renders identically but
//! carries fewer explicit properties.
//!
//! # What the pass does
//!
//! 1. **Default culling**: center points and rotation axes with nothing to pivot are cleared.
//! 2. **Transform folding**: center point, scale, rotation, offset and any existing matrix of a
//!    non-animated visual or shape collapse into a single transform matrix. A fold that yields
//!    the identity leaves no matrix at all.
//! 3. **Stroke reduction**: caps and joins that the attached geometry can never display are
//!    removed, together with the animators that drove them.
//!
//! Every distinct node reachable from the root is processed once, and a second pass over the
//! result changes nothing.
//!
//! Scenes can be loaded from and saved to JSON through [`SceneDocument`]; the `scenefold` binary
//! wraps that for command-line use.
#![forbid(unsafe_code)]

mod foundation;
mod graph;
mod optimize;

/// Matrix builders and comparison used when folding transforms.
pub mod transform;

pub use foundation::core::{Affine, DMat4, DVec3, Frame, FrameSpan, Point, Timeline, Vec2};
pub use foundation::error::{SceneError, SceneResult};
pub use graph::defaults;
pub use graph::model::{
    Animator, ColorBrush, ContainerShape, ContainerVisual, EllipseGeometry, ExpressionAnimation,
    KeyFrame, KeyFrameAnimation, Node, NodeId, NodeKind, PathGeometry, RectangleGeometry,
    RoundedRectangleGeometry, SceneDocument, SceneGraph, ShapeTransform, ShapeVisual,
    SpriteShape, SpriteVisual, StrokeCap, StrokeLineJoin, StrokeStyle, Trim, VisualTransform,
};
pub use graph::property::{Property, PropertyId};
pub use graph::traverse::distinct_nodes;
pub use optimize::classify::{non_default_properties, tracked_properties};
pub use optimize::describe::{annotate, describe_shape_fold, describe_visual_fold};
pub use optimize::pass::{
    OptimizeOpts, OptimizeOutcome, OptimizeStats, optimize_property_values,
    optimize_property_values_with,
};
pub use transform::MatrixComparison;
