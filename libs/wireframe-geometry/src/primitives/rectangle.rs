//! # Rectangle Primitive
//!
//! Generates the outline of a square lying in the local XY plane.

use glam::DVec3;

use super::{require_positive, Placement};
use crate::error::GeometryError;
use crate::segment::Wireframe;

/// Creates a closed square outline with 4 segments.
///
/// Corners, before rotation, walk counter-clockwise from `(-h, -h, 0)`
/// where `h = side_length / 2`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::primitives::{create_rectangle, Placement};
/// use wireframe_geometry::EulerRotation;
///
/// let placement = Placement::new(DVec3::ZERO, EulerRotation::ZERO);
/// let wireframe = create_rectangle(&placement, 2.0).unwrap();
/// assert_eq!(wireframe.segment_count(), 4);
/// ```
pub fn create_rectangle(placement: &Placement, side_length: f64) -> Result<Wireframe, GeometryError> {
    require_positive("Rectangle side length", side_length)?;

    let half = side_length * 0.5;
    let corners = [
        placement.place(DVec3::new(-half, -half, 0.0)),
        placement.place(DVec3::new(half, -half, 0.0)),
        placement.place(DVec3::new(half, half, 0.0)),
        placement.place(DVec3::new(-half, half, 0.0)),
    ];

    let mut wireframe = Wireframe::with_capacity(4);
    wireframe.add_closed_polygon(&corners);
    Ok(wireframe)
}
