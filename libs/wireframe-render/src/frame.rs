//! # Frame Renderer
//!
//! Single explicit per-frame entry point: build every descriptor, then
//! submit the result to the backend in one draw call.
//!
//! Hosts call [`FrameRenderer::render`] from whichever hook they have
//! (post-render pass, editor gizmo pass); both produce the same frame.

use log::{debug, error};
use wireframe_geometry::{LineSegment, PrimitiveDescriptor, WireframeGeometryBuilder};

use crate::backend::LineRenderer;
use crate::error::RenderError;
use crate::material::MaterialHandle;
use crate::projection::Projection;

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Descriptors built
    pub primitives: usize,
    /// Segments submitted
    pub segments: usize,
    /// Backend calls issued (0 or 1)
    pub draw_calls: usize,
}

/// Builds wireframes for a frame and hands them to a [`LineRenderer`].
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::{PrimitiveDescriptor, PrimitiveKind};
/// use wireframe_render::{FrameRenderer, MaterialHandle, RecordingRenderer};
///
/// let frame = FrameRenderer::new();
/// let mut backend = RecordingRenderer::new();
/// let material = MaterialHandle::new(1, "debug-lines");
/// let descriptors = [PrimitiveDescriptor::new(PrimitiveKind::Pyramid, DVec3::ZERO, 1.0)];
///
/// let stats = frame.render(&mut backend, Some(&material), &descriptors).unwrap();
/// assert_eq!(stats.segments, 8);
/// assert_eq!(backend.draw_calls().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRenderer {
    builder: WireframeGeometryBuilder,
    projection: Projection,
}

impl FrameRenderer {
    /// Creates a renderer with the default builder and no projection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the geometry builder.
    pub fn with_builder(mut self, builder: WireframeGeometryBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Replaces the projection applied before drawing.
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Returns the geometry builder.
    pub fn builder(&self) -> &WireframeGeometryBuilder {
        &self.builder
    }

    /// Returns the projection.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Builds the segments for one frame without drawing them.
    ///
    /// Segments are concatenated in descriptor order with the projection
    /// applied.
    pub fn frame_segments(
        &self,
        descriptors: &[PrimitiveDescriptor],
    ) -> Result<Vec<LineSegment>, RenderError> {
        let wireframes = self.builder.build_all(descriptors)?;
        let projection = self.projection;

        Ok(wireframes
            .into_iter()
            .flatten()
            .map(|segment| projection.apply(segment))
            .collect())
    }

    /// Renders one frame.
    ///
    /// # Errors
    ///
    /// - `MissingRenderTarget` when `material` is `None`; the backend is not called.
    /// - `Geometry` when any descriptor is invalid; the backend is not called.
    /// - Whatever the backend returns from `draw_lines`.
    pub fn render<R: LineRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        material: Option<&MaterialHandle>,
        descriptors: &[PrimitiveDescriptor],
    ) -> Result<FrameStats, RenderError> {
        let Some(material) = material else {
            error!("no material bound for wireframe rendering");
            return Err(RenderError::missing_render_target(
                "a material must be bound before drawing lines",
            ));
        };

        let segments = self.frame_segments(descriptors)?;
        let mut stats = FrameStats {
            primitives: descriptors.len(),
            segments: segments.len(),
            draw_calls: 0,
        };

        if segments.is_empty() {
            debug!("nothing to draw this frame");
            return Ok(stats);
        }

        renderer.draw_lines(material, &segments)?;
        stats.draw_calls = 1;

        debug!(
            "drew {} primitives ({} segments) with material {} ({})",
            stats.primitives, stats.segments, material.id, material.label
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingRenderer;
    use glam::DVec3;
    use wireframe_geometry::PrimitiveKind;

    fn material() -> MaterialHandle {
        MaterialHandle::new(3, "wire")
    }

    #[test]
    fn test_missing_material_skips_backend() {
        let mut backend = RecordingRenderer::new();
        let descriptors = [PrimitiveDescriptor::new(PrimitiveKind::Sphere, DVec3::ZERO, 1.0)];
        let result = FrameRenderer::new().render(&mut backend, None, &descriptors);

        assert!(matches!(result, Err(RenderError::MissingRenderTarget { .. })));
        assert!(backend.draw_calls().is_empty());
    }

    #[test]
    fn test_empty_frame_issues_no_draw() {
        let mut backend = RecordingRenderer::new();
        let stats = FrameRenderer::new()
            .render(&mut backend, Some(&material()), &[])
            .unwrap();
        assert_eq!(stats, FrameStats::default());
        assert!(backend.draw_calls().is_empty());
    }

    #[test]
    fn test_invalid_descriptor_skips_backend() {
        let mut backend = RecordingRenderer::new();
        let descriptors = [
            PrimitiveDescriptor::new(PrimitiveKind::Rectangle, DVec3::ZERO, 1.0),
            PrimitiveDescriptor::new(PrimitiveKind::Rectangle, DVec3::ZERO, -1.0),
        ];
        let result = FrameRenderer::new().render(&mut backend, Some(&material()), &descriptors);

        assert!(matches!(result, Err(RenderError::Geometry(_))));
        assert!(backend.draw_calls().is_empty());
    }

    #[test]
    fn test_frame_segments_follow_descriptor_order() {
        let frame = FrameRenderer::new();
        let rectangle = PrimitiveDescriptor::new(PrimitiveKind::Rectangle, DVec3::ZERO, 1.0);
        let pyramid = PrimitiveDescriptor::new(PrimitiveKind::Pyramid, DVec3::X, 1.0);
        let segments = frame.frame_segments(&[rectangle, pyramid]).unwrap();

        let builder = frame.builder();
        let mut expected = builder.build(&rectangle).unwrap().into_segments();
        expected.extend(builder.build(&pyramid).unwrap());
        assert_eq!(segments, expected);
    }
}
