//! 3-D matrix helpers for visual transforms.

use crate::foundation::core::{DMat4, DVec3};
use crate::transform::{MatrixComparison, degrees_to_radians};

/// Non-uniform scale about `center`.
#[inline]
pub fn scale_about(scale: DVec3, center: DVec3) -> DMat4 {
    DMat4::from_translation(center) * DMat4::from_scale(scale) * DMat4::from_translation(-center)
}

/// Rotation by `radians` around the depth (Z) axis, pivoting on `center`.
#[inline]
pub fn rotate_z_about(radians: f64, center: DVec3) -> DMat4 {
    DMat4::from_translation(center)
        * DMat4::from_rotation_z(radians)
        * DMat4::from_translation(-center)
}

/// The single matrix equivalent to applying scale, Z rotation, translation and then `prior`.
pub fn fold(
    center: DVec3,
    scale: DVec3,
    rotation_degrees: f64,
    offset: DVec3,
    prior: DMat4,
) -> DMat4 {
    let scale = scale_about(scale, center);
    let rotation = rotate_z_about(degrees_to_radians(rotation_degrees), center);
    let translation = DMat4::from_translation(offset);
    prior * translation * rotation * scale
}

/// Element-wise comparison of two 4×4 matrices.
pub fn mat4_eq(a: DMat4, b: DMat4, cmp: MatrixComparison) -> bool {
    a.to_cols_array()
        .into_iter()
        .zip(b.to_cols_array())
        .all(|(x, y)| cmp.scalar_eq(x, y))
}

/// `true` when `m` is the identity under `cmp`.
#[inline]
pub fn is_identity(m: DMat4, cmp: MatrixComparison) -> bool {
    mat4_eq(m, DMat4::IDENTITY, cmp)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/matrix4.rs"]
mod tests;
