//! # Primitive Descriptors
//!
//! The input to the builder: what to draw, where, how large, and how rotated.

use std::fmt;
use std::str::FromStr;

use config::constants::{DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::rotation::EulerRotation;

/// The shapes a wireframe can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Flat square in the XY plane
    Rectangle,
    /// Square base with four edges to an apex above the center
    Pyramid,
    /// Single horizontal circle
    Cylinder,
    /// Horizontal and vertical circle
    Sphere,
    /// Three stacked horizontal circles
    Capsule,
}

impl PrimitiveKind {
    /// Every kind, in showcase order.
    pub const ALL: [Self; 5] = [
        Self::Rectangle,
        Self::Pyramid,
        Self::Cylinder,
        Self::Sphere,
        Self::Capsule,
    ];

    /// Lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Pyramid => "pyramid",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
            Self::Capsule => "capsule",
        }
    }

    /// Number of segments a wireframe of this kind contains.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wireframe_geometry::PrimitiveKind;
    ///
    /// assert_eq!(PrimitiveKind::Pyramid.segment_count(10), 8);
    /// assert_eq!(PrimitiveKind::Capsule.segment_count(10), 30);
    /// ```
    pub fn segment_count(self, segments: u32) -> usize {
        let segments = segments as usize;
        match self {
            Self::Rectangle => 4,
            Self::Pyramid => 8,
            Self::Cylinder => segments,
            Self::Sphere => 2 * segments,
            Self::Capsule => 3 * segments,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::invalid_argument(format!("Unknown primitive kind: {s:?}")))
    }
}

fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Everything needed to generate one primitive's wireframe.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::{EulerRotation, PrimitiveDescriptor, PrimitiveKind};
///
/// let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Sphere, DVec3::ZERO, 2.0)
///     .with_rotation(EulerRotation::new(0.0, 45.0, 0.0))
///     .with_segments(16);
/// assert!(descriptor.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDescriptor {
    /// Shape to generate
    pub kind: PrimitiveKind,
    /// Pivot and placement of the primitive
    pub center: DVec3,
    /// Edge length; circles use half of it as radius
    pub side_length: f64,
    /// Rotation about `center`
    #[serde(default)]
    pub rotation: EulerRotation,
    /// Edges per circle
    #[serde(default = "default_segments")]
    pub segments: u32,
}

impl PrimitiveDescriptor {
    /// Creates an unrotated descriptor with the default segment count.
    pub fn new(kind: PrimitiveKind, center: DVec3, side_length: f64) -> Self {
        Self {
            kind,
            center,
            side_length,
            rotation: EulerRotation::ZERO,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Replaces the rotation.
    pub fn with_rotation(mut self, rotation: EulerRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replaces the segment count.
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Replaces the center.
    pub fn with_center(mut self, center: DVec3) -> Self {
        self.center = center;
        self
    }

    /// Half the side length; the radius of every circle the primitive draws.
    #[inline]
    pub fn half_size(&self) -> f64 {
        self.side_length * 0.5
    }

    /// Checks the fields that must hold before any geometry is produced.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `side_length` is not strictly positive (NaN
    /// included) or `segments` is outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.side_length > 0.0) {
            return Err(GeometryError::invalid_argument(format!(
                "{} side length must be positive: {}",
                self.kind, self.side_length
            )));
        }

        if self.segments < MIN_SEGMENTS {
            return Err(GeometryError::invalid_argument(format!(
                "{} segments must be at least {}: {}",
                self.kind, MIN_SEGMENTS, self.segments
            )));
        }

        if self.segments > MAX_SEGMENTS {
            return Err(GeometryError::invalid_argument(format!(
                "{} segments must be at most {}: {}",
                self.kind, MAX_SEGMENTS, self.segments
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Cylinder, DVec3::ZERO, 1.0);
        assert_eq!(descriptor.segments, DEFAULT_SEGMENTS);
        assert!(descriptor.rotation.is_zero());
    }

    #[test]
    fn test_validate_rejects_zero_side() {
        let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Rectangle, DVec3::ZERO, 0.0);
        assert!(matches!(
            descriptor.validate(),
            Err(GeometryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_and_nan_side() {
        for side_length in [-1.0, f64::NAN] {
            let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Sphere, DVec3::ZERO, side_length);
            assert!(descriptor.validate().is_err(), "accepted {side_length}");
        }
    }

    #[test]
    fn test_validate_rejects_too_few_segments() {
        let descriptor =
            PrimitiveDescriptor::new(PrimitiveKind::Cylinder, DVec3::ZERO, 1.0).with_segments(2);
        let message = descriptor.validate().unwrap_err().to_string();
        assert!(message.contains("segments"));
    }

    #[test]
    fn test_validate_accepts_segment_bounds() {
        for segments in [MIN_SEGMENTS, MAX_SEGMENTS] {
            let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Cylinder, DVec3::ZERO, 1.0)
                .with_segments(segments);
            assert!(descriptor.validate().is_ok(), "rejected {segments}");
        }
    }

    #[test]
    fn test_validate_rejects_too_many_segments() {
        for segments in [MAX_SEGMENTS + 1, u32::MAX] {
            let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Capsule, DVec3::ZERO, 1.0)
                .with_segments(segments);
            let message = descriptor.validate().unwrap_err().to_string();
            assert!(message.contains("at most"), "{message}");
        }
    }

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("Capsule".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Capsule);
        assert_eq!(" pyramid ".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Pyramid);
        assert!("cube".parse::<PrimitiveKind>().is_err());
    }

    #[test]
    fn test_descriptor_json_defaults() {
        let json = r#"{ "kind": "sphere", "center": [1.0, 2.0, 3.0], "side_length": 2.0 }"#;
        let descriptor: PrimitiveDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.kind, PrimitiveKind::Sphere);
        assert_eq!(descriptor.center, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(descriptor.segments, DEFAULT_SEGMENTS);
        assert_eq!(descriptor.rotation, EulerRotation::ZERO);
    }
}
