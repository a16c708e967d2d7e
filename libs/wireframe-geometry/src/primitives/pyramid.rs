//! # Pyramid Primitive
//!
//! Generates a square-based pyramid: base outline plus four edges to the apex.

use glam::DVec3;

use super::{require_positive, Placement};
use crate::error::GeometryError;
use crate::segment::Wireframe;

/// Creates a pyramid wireframe with 8 segments.
///
/// The base sits at `y = -h` with corners `(±h, -h, ±h)`, walked as a closed
/// loop. The apex is at `(0, side_length, 0)`, so the pyramid is taller than
/// its base is wide. The first four segments are the base, the last four
/// run from each base corner to the apex in base order.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::primitives::{create_pyramid, Placement};
/// use wireframe_geometry::EulerRotation;
///
/// let placement = Placement::new(DVec3::ZERO, EulerRotation::ZERO);
/// let wireframe = create_pyramid(&placement, 2.0).unwrap();
/// assert_eq!(wireframe.segment_count(), 8);
/// ```
pub fn create_pyramid(placement: &Placement, side_length: f64) -> Result<Wireframe, GeometryError> {
    require_positive("Pyramid side length", side_length)?;

    let half = side_length * 0.5;
    let apex = placement.place(DVec3::new(0.0, side_length, 0.0));
    let base = [
        placement.place(DVec3::new(-half, -half, -half)),
        placement.place(DVec3::new(half, -half, -half)),
        placement.place(DVec3::new(half, -half, half)),
        placement.place(DVec3::new(-half, -half, half)),
    ];

    let mut wireframe = Wireframe::with_capacity(8);
    wireframe.add_closed_polygon(&base);
    for corner in base {
        wireframe.add_line(corner, apex);
    }
    Ok(wireframe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::EulerRotation;

    fn upright(side_length: f64) -> Wireframe {
        create_pyramid(&Placement::new(DVec3::ZERO, EulerRotation::ZERO), side_length).unwrap()
    }

    #[test]
    fn test_pyramid_base_is_closed() {
        let wireframe = upright(2.0);
        let base = Wireframe::from(wireframe.segments()[..4].to_vec());
        assert!(base.is_closed_loop(0.0));
        for segment in base.segments() {
            assert_eq!(segment.start.y, -1.0);
        }
    }

    #[test]
    fn test_pyramid_edges_meet_at_apex() {
        let wireframe = upright(2.0);
        let apex = DVec3::new(0.0, 2.0, 0.0);
        for (edge, base) in wireframe.segments()[4..].iter().zip(wireframe.segments()) {
            assert_eq!(edge.end, apex);
            assert_eq!(edge.start, base.start);
        }
    }

    #[test]
    fn test_pyramid_height() {
        let (min, max) = upright(4.0).bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-2.0, -2.0, -2.0));
        assert_eq!(max, DVec3::new(2.0, 4.0, 2.0));
    }

    #[test]
    fn test_pyramid_invalid_size() {
        let placement = Placement::new(DVec3::ZERO, EulerRotation::ZERO);
        assert!(create_pyramid(&placement, 0.0).is_err());
    }
}
