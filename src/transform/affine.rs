//! 2-D affine helpers for shape transforms.

use crate::foundation::core::{Affine, Vec2};
use crate::transform::{MatrixComparison, degrees_to_radians};

/// Non-uniform scale about `center`.
#[inline]
pub fn scale_about(scale: Vec2, center: Vec2) -> Affine {
    Affine::translate(center)
        * Affine::scale_non_uniform(scale.x, scale.y)
        * Affine::translate(-center)
}

/// Rotation by `radians` about `center`.
#[inline]
pub fn rotate_about(radians: f64, center: Vec2) -> Affine {
    Affine::translate(center) * Affine::rotate(radians) * Affine::translate(-center)
}

/// The single matrix equivalent to applying scale, rotation, translation and then `prior`.
///
/// Scale and rotation both pivot on `center`.
pub fn fold(
    center: Vec2,
    scale: Vec2,
    rotation_degrees: f64,
    offset: Vec2,
    prior: Affine,
) -> Affine {
    let scale = scale_about(scale, center);
    let rotation = rotate_about(degrees_to_radians(rotation_degrees), center);
    let translation = Affine::translate(offset);
    prior * translation * rotation * scale
}

/// Element-wise comparison of two affines.
pub fn affine_eq(a: Affine, b: Affine, cmp: MatrixComparison) -> bool {
    a.as_coeffs()
        .into_iter()
        .zip(b.as_coeffs())
        .all(|(x, y)| cmp.scalar_eq(x, y))
}

/// `true` when `a` is the identity under `cmp`.
#[inline]
pub fn is_identity(a: Affine, cmp: MatrixComparison) -> bool {
    affine_eq(a, Affine::IDENTITY, cmp)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
