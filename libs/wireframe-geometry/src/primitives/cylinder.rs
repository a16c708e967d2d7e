//! # Cylinder Primitive
//!
//! Generates a cylinder as a single horizontal circle through its center.

use glam::DVec3;

use super::{add_circle, require_positive, require_segments, CirclePlane, Placement};
use crate::error::GeometryError;
use crate::segment::Wireframe;

/// Creates a cylinder wireframe: one XY circle with `segments` edges.
///
/// # Arguments
///
/// * `placement` - Center and rotation
/// * `radius` - Circle radius (half the side length)
/// * `segments` - Number of edges around the circle
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::primitives::{create_cylinder, Placement};
/// use wireframe_geometry::EulerRotation;
///
/// let placement = Placement::new(DVec3::ZERO, EulerRotation::ZERO);
/// let wireframe = create_cylinder(&placement, 1.0, 12).unwrap();
/// assert_eq!(wireframe.segment_count(), 12);
/// ```
pub fn create_cylinder(
    placement: &Placement,
    radius: f64,
    segments: u32,
) -> Result<Wireframe, GeometryError> {
    require_positive("Cylinder radius", radius)?;
    require_segments("Cylinder", segments)?;

    let mut wireframe = Wireframe::with_capacity(segments as usize);
    add_circle(&mut wireframe, placement, DVec3::ZERO, radius, segments, CirclePlane::Xy);
    Ok(wireframe)
}
