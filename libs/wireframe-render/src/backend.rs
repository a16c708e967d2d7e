//! # Line Renderer Backends
//!
//! The seam between generated geometry and whatever actually draws lines.

use wireframe_geometry::{LineSegment, Wireframe};

use crate::error::RenderError;
use crate::material::MaterialHandle;

/// A backend that can draw a batch of line segments with a material bound.
///
/// Implementations own all graphics resources. One call corresponds to one
/// begin/bind/draw/end cycle on the backend.
pub trait LineRenderer {
    /// Draws `segments` as independent lines using `material`.
    fn draw_lines(
        &mut self,
        material: &MaterialHandle,
        segments: &[LineSegment],
    ) -> Result<(), RenderError>;
}

/// One recorded `draw_lines` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Material bound for the call
    pub material: MaterialHandle,
    /// Segments drawn, in submission order
    pub segments: Vec<LineSegment>,
}

/// Backend that keeps every draw call in memory.
///
/// Used by tests and by hosts that upload a vertex buffer themselves.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded draw calls.
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns every recorded segment across all calls, in order.
    pub fn segments(&self) -> Vec<LineSegment> {
        self.calls
            .iter()
            .flat_map(|call| call.segments.iter().copied())
            .collect()
    }

    /// Flattens all recorded segments into `[x, y, z, ...]`, two vertices per segment.
    pub fn vertex_buffer(&self) -> Vec<f32> {
        Wireframe::from(self.segments()).to_vertex_buffer()
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl LineRenderer for RecordingRenderer {
    fn draw_lines(
        &mut self,
        material: &MaterialHandle,
        segments: &[LineSegment],
    ) -> Result<(), RenderError> {
        self.calls.push(DrawCall {
            material: material.clone(),
            segments: segments.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_recorder_keeps_calls_in_order() {
        let mut recorder = RecordingRenderer::new();
        let material = MaterialHandle::new(7, "debug");
        let first = [LineSegment::new(DVec3::ZERO, DVec3::X)];
        let second = [LineSegment::new(DVec3::Y, DVec3::Z)];

        recorder.draw_lines(&material, &first).unwrap();
        recorder.draw_lines(&material, &second).unwrap();

        assert_eq!(recorder.draw_calls().len(), 2);
        assert_eq!(recorder.draw_calls()[0].material.id, 7);
        assert_eq!(recorder.segments(), vec![first[0], second[0]]);
    }

    #[test]
    fn test_recorder_vertex_buffer_and_clear() {
        let mut recorder = RecordingRenderer::new();
        let material = MaterialHandle::new(1, "lines");
        recorder
            .draw_lines(&material, &[LineSegment::new(DVec3::ZERO, DVec3::ONE)])
            .unwrap();
        assert_eq!(recorder.vertex_buffer(), vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

        recorder.clear();
        assert!(recorder.draw_calls().is_empty());
        assert!(recorder.vertex_buffer().is_empty());
    }
}
