//! # Circle Helper
//!
//! Shared polygonal circle used by the cylinder, sphere, and capsule.

use std::f64::consts::TAU;

use glam::DVec3;

use super::Placement;
use crate::segment::Wireframe;

/// Plane a circle lies in, relative to the primitive before rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CirclePlane {
    /// Horizontal circle: angle 0 on +X, angle 90° on +Y
    Xy,
    /// Vertical circle: angle 0 on +Y, angle 90° on +Z
    Yz,
}

impl CirclePlane {
    /// Offset of the point at `angle` radians on a circle of `radius`.
    #[inline]
    pub fn point(self, radius: f64, angle: f64) -> DVec3 {
        let (sin, cos) = angle.sin_cos();
        match self {
            Self::Xy => DVec3::new(cos * radius, sin * radius, 0.0),
            Self::Yz => DVec3::new(0.0, cos * radius, sin * radius),
        }
    }
}

/// Appends a closed `segments`-edge polygon approximating a circle.
///
/// The circle is centered at `offset` from the primitive center and every
/// vertex rotates about the primitive center, not about `offset`. Edge `i`
/// runs from the point at angle `(i - 1)·2π/n` to the point at `i·2π/n`,
/// for `i` in `1..=n`; the last edge ends at angle 2π.
///
/// Callers validate `radius` and `segments`.
pub fn add_circle(
    wireframe: &mut Wireframe,
    placement: &Placement,
    offset: DVec3,
    radius: f64,
    segments: u32,
    plane: CirclePlane,
) {
    let step = TAU / segments as f64;
    let mut previous = placement.place(offset + plane.point(radius, 0.0));

    for i in 1..=segments {
        let next = placement.place(offset + plane.point(radius, i as f64 * step));
        wireframe.add_line(previous, next);
        previous = next;
    }
}
