//! Names and flag sets for the properties the optimizer tracks.

/// A single tracked property.
///
/// The discriminant doubles as the bit position of the property inside [`PropertyId`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    /// Pivot for scale and rotation.
    CenterPoint = 0,
    /// Scale factor.
    Scale = 1,
    /// Rotation angle in degrees.
    RotationAngleInDegrees = 2,
    /// Rotation axis (visuals only).
    RotationAxis = 3,
    /// Translation.
    Offset = 4,
    /// Explicit transform matrix.
    TransformMatrix = 5,
    /// Cap drawn at the start of an open stroke.
    StrokeStartCap = 6,
    /// Cap drawn at the ends of each dash.
    StrokeDashCap = 7,
    /// Cap drawn at the end of an open stroke.
    StrokeEndCap = 8,
    /// Miter limit for sharp joins.
    StrokeMiterLimit = 9,
    /// Join style where segments meet.
    StrokeLineJoin = 10,
    /// Stroke width.
    StrokeThickness = 11,
    /// Start of the drawn portion of a geometry outline.
    TrimStart = 12,
    /// End of the drawn portion of a geometry outline.
    TrimEnd = 13,
    /// Rotation of the trimmed window around the outline.
    TrimOffset = 14,
}

impl Property {
    /// Every tracked property in discriminant order.
    pub const ALL: [Property; 15] = [
        Self::CenterPoint,
        Self::Scale,
        Self::RotationAngleInDegrees,
        Self::RotationAxis,
        Self::Offset,
        Self::TransformMatrix,
        Self::StrokeStartCap,
        Self::StrokeDashCap,
        Self::StrokeEndCap,
        Self::StrokeMiterLimit,
        Self::StrokeLineJoin,
        Self::StrokeThickness,
        Self::TrimStart,
        Self::TrimEnd,
        Self::TrimOffset,
    ];

    /// The name animators use to target this property.
    pub fn name(self) -> &'static str {
        match self {
            Self::CenterPoint => "CenterPoint",
            Self::Scale => "Scale",
            Self::RotationAngleInDegrees => "RotationAngleInDegrees",
            Self::RotationAxis => "RotationAxis",
            Self::Offset => "Offset",
            Self::TransformMatrix => "TransformMatrix",
            Self::StrokeStartCap => "StrokeStartCap",
            Self::StrokeDashCap => "StrokeDashCap",
            Self::StrokeEndCap => "StrokeEndCap",
            Self::StrokeMiterLimit => "StrokeMiterLimit",
            Self::StrokeLineJoin => "StrokeLineJoin",
            Self::StrokeThickness => "StrokeThickness",
            Self::TrimStart => "TrimStart",
            Self::TrimEnd => "TrimEnd",
            Self::TrimOffset => "TrimOffset",
        }
    }

    /// The single-bit flag for this property.
    pub fn flag(self) -> PropertyId {
        PropertyId::from_bits_retain(1 << (self as u32))
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of tracked properties.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PropertyId: u32 {
        /// [`Property::CenterPoint`].
        const CENTER_POINT = 1 << 0;
        /// [`Property::Scale`].
        const SCALE = 1 << 1;
        /// [`Property::RotationAngleInDegrees`].
        const ROTATION_ANGLE_IN_DEGREES = 1 << 2;
        /// [`Property::RotationAxis`].
        const ROTATION_AXIS = 1 << 3;
        /// [`Property::Offset`].
        const OFFSET = 1 << 4;
        /// [`Property::TransformMatrix`].
        const TRANSFORM_MATRIX = 1 << 5;
        /// [`Property::StrokeStartCap`].
        const STROKE_START_CAP = 1 << 6;
        /// [`Property::StrokeDashCap`].
        const STROKE_DASH_CAP = 1 << 7;
        /// [`Property::StrokeEndCap`].
        const STROKE_END_CAP = 1 << 8;
        /// [`Property::StrokeMiterLimit`].
        const STROKE_MITER_LIMIT = 1 << 9;
        /// [`Property::StrokeLineJoin`].
        const STROKE_LINE_JOIN = 1 << 10;
        /// [`Property::StrokeThickness`].
        const STROKE_THICKNESS = 1 << 11;
        /// [`Property::TrimStart`].
        const TRIM_START = 1 << 12;
        /// [`Property::TrimEnd`].
        const TRIM_END = 1 << 13;
        /// [`Property::TrimOffset`].
        const TRIM_OFFSET = 1 << 14;
    }
}

impl PropertyId {
    /// The individual properties contained in this set.
    pub fn properties(self) -> impl Iterator<Item = Property> {
        Property::ALL
            .into_iter()
            .filter(move |p| self.contains(p.flag()))
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for p in self.properties() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(p.name())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/property.rs"]
mod tests;
