//! Matrix builders used when folding transform properties.
//!
//! Both the 2-D ([`affine`]) and 3-D ([`matrix4`]) helpers use the column-vector convention:
//! a matrix maps a point as `p' = M * p`, so "apply `A`, then `B`" is written `B * A`.

pub mod affine;
pub mod matrix4;

/// How folded matrices are compared against the identity and against the prior matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MatrixComparison {
    /// Element-wise `==`. Signed zeros compare equal; NaN never does.
    #[default]
    Exact,
    /// Element-wise absolute difference no greater than the given epsilon.
    Tolerance(f64),
}

impl MatrixComparison {
    #[inline]
    pub(crate) fn scalar_eq(self, a: f64, b: f64) -> bool {
        match self {
            Self::Exact => a == b,
            Self::Tolerance(eps) => (a - b).abs() <= eps,
        }
    }
}

/// Convert an angle in degrees to radians (`π × degrees / 180`).
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.0
}
