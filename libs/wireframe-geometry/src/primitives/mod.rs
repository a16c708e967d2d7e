//! # Primitives
//!
//! Wireframe generation for each primitive kind.
//!
//! Generators work in local offsets from the primitive center. A
//! [`Placement`] moves each offset to world space and rotates it about the
//! center, so every vertex of a primitive shares one pivot.

pub mod capsule;
pub mod circle;
pub mod cylinder;
pub mod pyramid;
pub mod rectangle;
pub mod sphere;

pub use capsule::create_capsule;
pub use circle::{add_circle, CirclePlane};
pub use cylinder::create_cylinder;
pub use pyramid::create_pyramid;
pub use rectangle::create_rectangle;
pub use sphere::create_sphere;

use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;

use crate::error::GeometryError;
use crate::rotation::{EulerComposition, EulerRotation};

/// World placement shared by every vertex of one primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Primitive center, also the rotation pivot
    pub center: DVec3,
    /// Rotation about `center`
    pub rotation: EulerRotation,
    /// How the three axis rotations combine
    pub composition: EulerComposition,
}

impl Placement {
    /// Creates a placement using the sequential composition.
    pub fn new(center: DVec3, rotation: EulerRotation) -> Self {
        Self {
            center,
            rotation,
            composition: EulerComposition::Sequential,
        }
    }

    /// Replaces the composition.
    pub fn with_composition(mut self, composition: EulerComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Maps a local offset to its rotated world position.
    #[inline]
    pub fn place(&self, offset: DVec3) -> DVec3 {
        self.composition
            .apply(self.center, self.center + offset, self.rotation)
    }
}

fn require_positive(what: &str, value: f64) -> Result<(), GeometryError> {
    if !(value > 0.0) {
        return Err(GeometryError::invalid_argument(format!(
            "{what} must be positive: {value}"
        )));
    }
    Ok(())
}

fn require_segments(what: &str, segments: u32) -> Result<(), GeometryError> {
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(GeometryError::invalid_argument(format!(
            "{what} segments must be in {MIN_SEGMENTS}..={MAX_SEGMENTS}: {segments}"
        )));
    }
    Ok(())
}
