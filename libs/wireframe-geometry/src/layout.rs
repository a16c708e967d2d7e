//! # Showcase Layout
//!
//! Lays out one of every primitive kind in a row along +X, sharing size
//! and rotation. Useful for eyeballing the whole primitive set at once.

use config::constants::GlobalConfig;
use glam::DVec3;

use crate::descriptor::{PrimitiveDescriptor, PrimitiveKind};
use crate::error::GeometryError;
use crate::rotation::EulerRotation;

/// Returns descriptors for every kind in [`PrimitiveKind::ALL`] order.
///
/// The row is centered on `center`: the first primitive sits at
/// `center - (2 * spacing, 0, 0)` and each following one `spacing` further
/// along +X.
///
/// # Errors
///
/// `InvalidArgument` if `spacing` is negative or not finite, or if the
/// shared size or segment count would fail descriptor validation.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::layout::showcase_row;
/// use wireframe_geometry::EulerRotation;
///
/// let row = showcase_row(DVec3::ZERO, 1.0, EulerRotation::ZERO, 10, 3.0).unwrap();
/// assert_eq!(row.len(), 5);
/// assert_eq!(row[0].center, DVec3::new(-6.0, 0.0, 0.0));
/// assert_eq!(row[4].center, DVec3::new(6.0, 0.0, 0.0));
/// ```
pub fn showcase_row(
    center: DVec3,
    side_length: f64,
    rotation: EulerRotation,
    segments: u32,
    spacing: f64,
) -> Result<Vec<PrimitiveDescriptor>, GeometryError> {
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(GeometryError::invalid_argument(format!(
            "Showcase spacing must be finite and non-negative: {spacing}"
        )));
    }

    let start = center - DVec3::new(spacing * 2.0, 0.0, 0.0);

    PrimitiveKind::ALL
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let descriptor = PrimitiveDescriptor::new(kind, start + DVec3::X * spacing * i as f64, side_length)
                .with_rotation(rotation)
                .with_segments(segments);
            descriptor.validate().map(|()| descriptor)
        })
        .collect()
}

/// Same as [`showcase_row`], taking segments and spacing from `config`.
pub fn showcase_row_with_config(
    config: &GlobalConfig,
    center: DVec3,
    side_length: f64,
    rotation: EulerRotation,
) -> Result<Vec<PrimitiveDescriptor>, GeometryError> {
    showcase_row(
        center,
        side_length,
        rotation,
        config.default_segments,
        config.showcase_spacing,
    )
}
