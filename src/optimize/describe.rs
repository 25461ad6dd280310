//! Human-readable notes about folded transforms.

use crate::foundation::core::{DVec3, Vec2};
use crate::graph::defaults;
use crate::graph::model::Node;

/// Describe a 2-D fold, e.g. `Scale:2, RotationDegrees:45, Offset:(1,0)`.
///
/// Only components that differ from their defaults are listed.
pub fn describe_shape_fold(scale: Vec2, rotation_degrees: f64, offset: Vec2) -> String {
    let mut parts = Vec::with_capacity(3);
    if scale != defaults::SCALE_2D {
        if scale.x == scale.y {
            parts.push(format!("Scale:{}", scale.x));
        } else {
            parts.push(format!("Scale:({},{})", scale.x, scale.y));
        }
    }
    if rotation_degrees != defaults::ROTATION_ANGLE_IN_DEGREES {
        parts.push(format!("RotationDegrees:{rotation_degrees}"));
    }
    if offset != defaults::OFFSET_2D {
        parts.push(format!("Offset:({},{})", offset.x, offset.y));
    }
    parts.join(", ")
}

/// Describe a 3-D fold, e.g. `Scale(2,2,1), RotationDegrees(90), Offset(0,4,0)`.
pub fn describe_visual_fold(scale: DVec3, rotation_degrees: f64, offset: DVec3) -> String {
    let mut parts = Vec::with_capacity(3);
    if scale != defaults::SCALE_3D {
        parts.push(format!("Scale({},{},{})", scale.x, scale.y, scale.z));
    }
    if rotation_degrees != defaults::ROTATION_ANGLE_IN_DEGREES {
        parts.push(format!("RotationDegrees({rotation_degrees})"));
    }
    if offset != defaults::OFFSET_3D {
        parts.push(format!("Offset({},{},{})", offset.x, offset.y, offset.z));
    }
    parts.join(", ")
}

/// Append `fragment` to both descriptions of `node`, separated from prior text by a space.
pub fn annotate(node: &mut Node, fragment: &str) {
    if fragment.is_empty() {
        return;
    }
    append(&mut node.short_description, fragment);
    append(&mut node.long_description, fragment);
}

fn append(existing: &mut Option<String>, fragment: &str) {
    match existing {
        Some(text) if !text.is_empty() => {
            text.push(' ');
            text.push_str(fragment);
        }
        _ => *existing = Some(fragment.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/describe.rs"]
mod tests;
