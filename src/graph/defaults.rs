//! Default values the composition platform uses when a property is absent.
//!
//! The classifier and both canonicalizers read from this table, so "absent" and
//! "present with the default" stay interchangeable everywhere.

use crate::foundation::core::{Affine, DMat4, DVec3, Vec2};
use crate::graph::model::{StrokeCap, StrokeLineJoin};

/// Visual center point.
pub const CENTER_POINT_3D: DVec3 = DVec3::ZERO;
/// Visual scale.
pub const SCALE_3D: DVec3 = DVec3::ONE;
/// Visual rotation axis (depth).
pub const ROTATION_AXIS: DVec3 = DVec3::Z;
/// Visual offset.
pub const OFFSET_3D: DVec3 = DVec3::ZERO;
/// Visual transform matrix.
pub const TRANSFORM_3D: DMat4 = DMat4::IDENTITY;

/// Shape center point.
pub const CENTER_POINT_2D: Vec2 = Vec2::ZERO;
/// Shape scale.
pub const SCALE_2D: Vec2 = Vec2::new(1.0, 1.0);
/// Shape offset.
pub const OFFSET_2D: Vec2 = Vec2::ZERO;
/// Shape transform matrix.
pub const TRANSFORM_2D: Affine = Affine::IDENTITY;

/// Rotation angle, shared by visuals and shapes.
pub const ROTATION_ANGLE_IN_DEGREES: f64 = 0.0;

/// Start, dash and end caps.
pub const STROKE_CAP: StrokeCap = StrokeCap::Flat;
/// Miter limit.
pub const STROKE_MITER_LIMIT: f64 = 1.0;
/// Line join.
pub const STROKE_LINE_JOIN: StrokeLineJoin = StrokeLineJoin::Miter;
/// Stroke thickness.
pub const STROKE_THICKNESS: f64 = 1.0;

/// Trim start.
pub const TRIM_START: f64 = 0.0;
/// Trim end.
pub const TRIM_END: f64 = 1.0;
/// Trim offset.
pub const TRIM_OFFSET: f64 = 0.0;
