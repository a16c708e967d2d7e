use approx::assert_abs_diff_eq;
use glam::DVec3;
use wireframe_geometry::layout::showcase_row;
use wireframe_geometry::{
    EulerComposition, EulerRotation, LineSegment, PrimitiveDescriptor, PrimitiveKind,
    WireframeGeometryBuilder,
};
use wireframe_render::{
    FrameRenderer, LineRenderer, MaterialHandle, Projection, RecordingRenderer, RenderError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Backend that refuses every draw, standing in for a lost graphics context.
struct LostContext;

impl LineRenderer for LostContext {
    fn draw_lines(&mut self, _: &MaterialHandle, _: &[LineSegment]) -> Result<(), RenderError> {
        Err(RenderError::backend("context lost"))
    }
}

#[test]
fn showcase_frame_is_one_draw_call() {
    init_logging();
    let row = showcase_row(DVec3::new(0.0, 0.0, 5.0), 1.0, EulerRotation::new(15.0, 30.0, 45.0), 10, 3.0)
        .unwrap();
    let material = MaterialHandle::new(42, "debug");
    let mut backend = RecordingRenderer::new();

    let stats = FrameRenderer::new()
        .render(&mut backend, Some(&material), &row)
        .unwrap();

    assert_eq!(stats.primitives, 5);
    assert_eq!(stats.segments, 72);
    assert_eq!(stats.draw_calls, 1);
    assert_eq!(backend.draw_calls().len(), 1);
    assert_eq!(backend.draw_calls()[0].material, material);
    assert_eq!(backend.vertex_buffer().len(), 72 * 6);
}

#[test]
fn repeated_frames_are_identical() {
    init_logging();
    let row = showcase_row(DVec3::ZERO, 2.0, EulerRotation::new(0.0, 90.0, 0.0), 6, 3.0).unwrap();
    let material = MaterialHandle::new(1, "debug");
    let frame = FrameRenderer::new();
    let mut backend = RecordingRenderer::new();

    frame.render(&mut backend, Some(&material), &row).unwrap();
    frame.render(&mut backend, Some(&material), &row).unwrap();

    let calls = backend.draw_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn missing_material_is_reported() {
    init_logging();
    let mut backend = RecordingRenderer::new();
    let descriptors = [PrimitiveDescriptor::new(PrimitiveKind::Capsule, DVec3::ZERO, 1.0)];

    let err = FrameRenderer::new()
        .render(&mut backend, None, &descriptors)
        .unwrap_err();

    assert!(matches!(err, RenderError::MissingRenderTarget { .. }));
    assert!(err.to_string().contains("material"));
    assert!(backend.draw_calls().is_empty());
}

#[test]
fn backend_failure_propagates() {
    init_logging();
    let descriptors = [PrimitiveDescriptor::new(PrimitiveKind::Sphere, DVec3::ZERO, 1.0)];
    let err = FrameRenderer::new()
        .render(&mut LostContext, Some(&MaterialHandle::new(0, "debug")), &descriptors)
        .unwrap_err();
    assert!(matches!(err, RenderError::Backend { .. }));
}

#[test]
fn flatten_projection_puts_lines_on_z_zero() {
    init_logging();
    let descriptors = [
        PrimitiveDescriptor::new(PrimitiveKind::Sphere, DVec3::new(0.0, 0.0, 4.0), 2.0)
            .with_rotation(EulerRotation::new(30.0, 30.0, 0.0)),
    ];
    let mut backend = RecordingRenderer::new();
    FrameRenderer::new()
        .with_projection(Projection::FlattenZ)
        .render(&mut backend, Some(&MaterialHandle::new(0, "flat")), &descriptors)
        .unwrap();

    for segment in backend.segments() {
        assert_eq!(segment.start.z, 0.0);
        assert_eq!(segment.end.z, 0.0);
    }
}

#[test]
fn builder_composition_reaches_the_backend() {
    init_logging();
    let descriptors = [PrimitiveDescriptor::new(PrimitiveKind::Cylinder, DVec3::ZERO, 2.0).with_segments(4)];
    let frame = FrameRenderer::new()
        .with_builder(WireframeGeometryBuilder::new().with_composition(EulerComposition::Independent));
    let mut backend = RecordingRenderer::new();
    frame
        .render(&mut backend, Some(&MaterialHandle::new(0, "legacy")), &descriptors)
        .unwrap();

    // Unrotated independent composition copies y into z
    let second = backend.segments()[0].end;
    assert_abs_diff_eq!(second.y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(second.z, 1.0, epsilon = 1e-12);
}
