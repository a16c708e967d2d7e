//! # Wireframe Geometry Builder
//!
//! Turns a [`PrimitiveDescriptor`] into an ordered [`Wireframe`].

use log::trace;

use crate::descriptor::{PrimitiveDescriptor, PrimitiveKind};
use crate::error::GeometryError;
use crate::primitives::{
    create_capsule, create_cylinder, create_pyramid, create_rectangle, create_sphere, Placement,
};
use crate::rotation::EulerComposition;
use crate::segment::Wireframe;

/// Stateless wireframe generator.
///
/// The only setting is the Euler composition; everything else comes from
/// the descriptor. A builder holds no mutable state and can be shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::{PrimitiveDescriptor, PrimitiveKind, WireframeGeometryBuilder};
///
/// let builder = WireframeGeometryBuilder::new();
/// let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Rectangle, DVec3::ZERO, 2.0);
/// let wireframe = builder.build(&descriptor).unwrap();
/// assert_eq!(wireframe.segment_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireframeGeometryBuilder {
    composition: EulerComposition,
}

impl WireframeGeometryBuilder {
    /// Creates a builder using the sequential composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder using `composition` for every vertex.
    pub fn with_composition(mut self, composition: EulerComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Returns the active composition.
    pub fn composition(&self) -> EulerComposition {
        self.composition
    }

    /// Generates the wireframe for one descriptor.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the side length is not positive or fewer than
    /// three segments are requested. Nothing is generated in that case.
    pub fn build(&self, descriptor: &PrimitiveDescriptor) -> Result<Wireframe, GeometryError> {
        descriptor.validate()?;

        let placement = Placement::new(descriptor.center, descriptor.rotation)
            .with_composition(self.composition);
        let half = descriptor.half_size();

        let wireframe = match descriptor.kind {
            PrimitiveKind::Rectangle => create_rectangle(&placement, descriptor.side_length)?,
            PrimitiveKind::Pyramid => create_pyramid(&placement, descriptor.side_length)?,
            PrimitiveKind::Cylinder => create_cylinder(&placement, half, descriptor.segments)?,
            PrimitiveKind::Sphere => create_sphere(&placement, half, descriptor.segments)?,
            PrimitiveKind::Capsule => create_capsule(&placement, half, descriptor.segments)?,
        };

        trace!(
            "built {} wireframe at {} with {} segments",
            descriptor.kind,
            descriptor.center,
            wireframe.segment_count()
        );

        Ok(wireframe)
    }

    /// Generates wireframes for a batch, in input order.
    ///
    /// Every descriptor is validated before any is built, so an invalid
    /// entry yields the first error and no output. With the `parallel`
    /// feature the builds run on the rayon pool.
    pub fn build_all(
        &self,
        descriptors: &[PrimitiveDescriptor],
    ) -> Result<Vec<Wireframe>, GeometryError> {
        descriptors
            .iter()
            .try_for_each(PrimitiveDescriptor::validate)?;

        self.build_each(descriptors)
    }

    #[cfg(feature = "parallel")]
    fn build_each(&self, descriptors: &[PrimitiveDescriptor]) -> Result<Vec<Wireframe>, GeometryError> {
        use rayon::prelude::*;
        descriptors.par_iter().map(|d| self.build(d)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn build_each(&self, descriptors: &[PrimitiveDescriptor]) -> Result<Vec<Wireframe>, GeometryError> {
        descriptors.iter().map(|d| self.build(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::EulerRotation;
    use glam::DVec3;

    fn descriptor(kind: PrimitiveKind) -> PrimitiveDescriptor {
        PrimitiveDescriptor::new(kind, DVec3::new(1.0, -2.0, 0.5), 2.0)
            .with_rotation(EulerRotation::new(12.0, 34.0, 56.0))
            .with_segments(7)
    }

    #[test]
    fn test_segment_counts_per_kind() {
        let builder = WireframeGeometryBuilder::new();
        for kind in PrimitiveKind::ALL {
            let wireframe = builder.build(&descriptor(kind)).unwrap();
            assert_eq!(wireframe.segment_count(), kind.segment_count(7), "{kind}");
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = WireframeGeometryBuilder::new();
        for kind in PrimitiveKind::ALL {
            let d = descriptor(kind);
            assert_eq!(builder.build(&d).unwrap(), builder.build(&d).unwrap());
        }
    }

    #[test]
    fn test_build_rejects_zero_side_length() {
        let builder = WireframeGeometryBuilder::new();
        let mut d = descriptor(PrimitiveKind::Rectangle);
        d.side_length = 0.0;
        assert!(matches!(builder.build(&d), Err(GeometryError::InvalidArgument { .. })));
    }

    #[test]
    fn test_segments_checked_for_every_kind() {
        // Rectangle and pyramid ignore the count but still require a valid one
        let builder = WireframeGeometryBuilder::new();
        for kind in PrimitiveKind::ALL {
            let d = descriptor(kind).with_segments(2);
            assert!(builder.build(&d).is_err(), "{kind}");
        }
    }

    #[test]
    fn test_composition_changes_output() {
        let d = descriptor(PrimitiveKind::Sphere);
        let sequential = WireframeGeometryBuilder::new().build(&d).unwrap();
        let independent = WireframeGeometryBuilder::new()
            .with_composition(EulerComposition::Independent)
            .build(&d)
            .unwrap();
        assert_eq!(sequential.segment_count(), independent.segment_count());
        assert_ne!(sequential, independent);
    }

    #[test]
    fn test_build_all_preserves_order() {
        let builder = WireframeGeometryBuilder::new();
        let descriptors: Vec<_> = PrimitiveKind::ALL.into_iter().map(descriptor).collect();
        let wireframes = builder.build_all(&descriptors).unwrap();

        assert_eq!(wireframes.len(), descriptors.len());
        for (wireframe, d) in wireframes.iter().zip(&descriptors) {
            assert_eq!(wireframe, &builder.build(d).unwrap());
        }
    }

    #[test]
    fn test_build_all_reports_invalid_entry() {
        let builder = WireframeGeometryBuilder::new();
        let descriptors = [
            descriptor(PrimitiveKind::Cylinder),
            descriptor(PrimitiveKind::Sphere).with_segments(1),
        ];
        let message = builder.build_all(&descriptors).unwrap_err().to_string();
        assert!(message.contains("sphere"));
    }

    #[test]
    fn test_build_all_empty() {
        let builder = WireframeGeometryBuilder::new();
        assert!(builder.build_all(&[]).unwrap().is_empty());
    }
}
