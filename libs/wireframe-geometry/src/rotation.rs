//! # Euler Rotation
//!
//! Rotates points about a pivot by three single-axis rotations.
//!
//! ## Composition
//!
//! The canonical composition applies the axes one after another, each step
//! reading the coordinates written by the previous one:
//!
//! ```text
//! (y, z) <- rotate_2d(y, z, rx)
//! (x, z) <- rotate_2d(x, z, ry)
//! (x, y) <- rotate_2d(x, y, rz)
//! ```
//!
//! This is not the same as multiplying three rotation matrices in general,
//! and it is kept that way so generated vertices stay bit-for-bit stable.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Rotation expressed as three angles in degrees, applied X, then Y, then Z.
///
/// # Example
///
/// ```rust
/// use wireframe_geometry::EulerRotation;
///
/// let rotation = EulerRotation::new(0.0, 0.0, 90.0);
/// assert!(!rotation.is_zero());
/// assert!(EulerRotation::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerRotation {
    /// Angle about the X axis, in degrees
    pub x: f64,
    /// Angle about the Y axis, in degrees
    pub y: f64,
    /// Angle about the Z axis, in degrees
    pub z: f64,
}

impl EulerRotation {
    /// No rotation.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a rotation from per-axis angles in degrees.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a rotation from a vector of per-axis angles in degrees.
    pub fn from_degrees(angles: DVec3) -> Self {
        Self::new(angles.x, angles.y, angles.z)
    }

    /// Returns true if every angle is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// How the three single-axis rotations are combined.
///
/// `Sequential` is canonical. `Independent` reproduces an older debug-draw
/// composition and is only used when a caller asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EulerComposition {
    /// Each axis rotates the coordinates produced by the previous axis.
    #[default]
    Sequential,
    /// Each axis rotates the original centered point; the result takes
    /// `x` from the Y rotation, `y` from the Z rotation, and `z` from the
    /// first output of the X rotation.
    Independent,
}

impl EulerComposition {
    /// Rotates `point` about `pivot` using this composition.
    #[inline]
    pub fn apply(self, pivot: DVec3, point: DVec3, rotation: EulerRotation) -> DVec3 {
        match self {
            Self::Sequential => rotate_point(pivot, point, rotation),
            Self::Independent => rotate_point_independent(pivot, point, rotation),
        }
    }
}

/// Rotates the pair `(a, b)` counter-clockwise by `degrees`.
///
/// # Example
///
/// ```rust
/// use wireframe_geometry::rotation::rotate_2d;
///
/// let (a, b) = rotate_2d(1.0, 0.0, 90.0);
/// assert!(a.abs() < 1e-12);
/// assert!((b - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rotate_2d(a: f64, b: f64, degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

/// Rotates `point` about `pivot`, applying X, Y, then Z sequentially.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::{rotate_point, EulerRotation};
///
/// let pivot = DVec3::new(1.0, 0.0, 0.0);
/// let rotated = rotate_point(pivot, DVec3::new(2.0, 0.0, 0.0), EulerRotation::new(0.0, 0.0, 90.0));
/// assert!(rotated.abs_diff_eq(DVec3::new(1.0, 1.0, 0.0), 1e-12));
/// ```
pub fn rotate_point(pivot: DVec3, point: DVec3, rotation: EulerRotation) -> DVec3 {
    let mut p = point - pivot;

    (p.y, p.z) = rotate_2d(p.y, p.z, rotation.x);
    (p.x, p.z) = rotate_2d(p.x, p.z, rotation.y);
    (p.x, p.y) = rotate_2d(p.x, p.y, rotation.z);

    pivot + p
}

/// Rotates `point` about `pivot` with every axis reading the unrotated offset.
///
/// Not the identity at zero rotation: the `z` output is taken from the
/// first component of the X rotation, which is the original `y`.
pub fn rotate_point_independent(pivot: DVec3, point: DVec3, rotation: EulerRotation) -> DVec3 {
    let p = point - pivot;

    let about_x = rotate_2d(p.y, p.z, rotation.x);
    let about_y = rotate_2d(p.x, p.z, rotation.y);
    let about_z = rotate_2d(p.x, p.y, rotation.z);

    pivot + DVec3::new(about_y.0, about_z.1, about_x.0)
}
