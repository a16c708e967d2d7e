//! # Sphere Primitive
//!
//! Generates a sphere as two great circles: one horizontal, one vertical.

use glam::DVec3;

use super::{add_circle, require_positive, require_segments, CirclePlane, Placement};
use crate::error::GeometryError;
use crate::segment::Wireframe;

/// Creates a sphere wireframe with `2 * segments` edges.
///
/// The first `segments` edges are the XY circle, the rest the YZ circle.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::primitives::{create_sphere, Placement};
/// use wireframe_geometry::EulerRotation;
///
/// let placement = Placement::new(DVec3::ZERO, EulerRotation::ZERO);
/// let wireframe = create_sphere(&placement, 1.0, 10).unwrap();
/// assert_eq!(wireframe.segment_count(), 20);
/// ```
pub fn create_sphere(
    placement: &Placement,
    radius: f64,
    segments: u32,
) -> Result<Wireframe, GeometryError> {
    require_positive("Sphere radius", radius)?;
    require_segments("Sphere", segments)?;

    let mut wireframe = Wireframe::with_capacity(2 * segments as usize);
    add_circle(&mut wireframe, placement, DVec3::ZERO, radius, segments, CirclePlane::Xy);
    add_circle(&mut wireframe, placement, DVec3::ZERO, radius, segments, CirclePlane::Yz);
    Ok(wireframe)
}
