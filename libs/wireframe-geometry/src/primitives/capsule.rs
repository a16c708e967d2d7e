//! # Capsule Primitive
//!
//! Generates a capsule as three horizontal circles stacked along Y.

use glam::DVec3;

use super::{add_circle, require_positive, require_segments, CirclePlane, Placement};
use crate::error::GeometryError;
use crate::segment::Wireframe;

/// Creates a capsule wireframe with `3 * segments` edges.
///
/// Circles are emitted center first, then `+radius` along Y, then
/// `-radius` along Y. All three rotate about the capsule center, so the
/// stack tilts as one body.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::primitives::{create_capsule, Placement};
/// use wireframe_geometry::EulerRotation;
///
/// let placement = Placement::new(DVec3::ZERO, EulerRotation::ZERO);
/// let wireframe = create_capsule(&placement, 1.0, 10).unwrap();
/// assert_eq!(wireframe.segment_count(), 30);
/// ```
pub fn create_capsule(
    placement: &Placement,
    radius: f64,
    segments: u32,
) -> Result<Wireframe, GeometryError> {
    require_positive("Capsule radius", radius)?;
    require_segments("Capsule", segments)?;

    let mut wireframe = Wireframe::with_capacity(3 * segments as usize);
    for offset in [DVec3::ZERO, DVec3::new(0.0, radius, 0.0), DVec3::new(0.0, -radius, 0.0)] {
        add_circle(&mut wireframe, placement, offset, radius, segments, CirclePlane::Xy);
    }
    Ok(wireframe)
}
