//! WASM-facing entry points for wireframe generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust errors instead of `JsValue`.
//!
//! ```
//! let lines = wireframe_wasm::build_wireframe_internal("rectangle", [0.0; 3], 2.0, [0.0; 3], 10).unwrap();
//! assert_eq!(lines.segment_count(), 4);
//! ```

use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;
use wasm_bindgen::prelude::*;
use wireframe_geometry::layout::showcase_row;
use wireframe_geometry::{
    EulerRotation, GeometryError, PrimitiveDescriptor, PrimitiveKind, WireframeGeometryBuilder,
};

mod line_buffer;

pub use line_buffer::LineBufferHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "wireframe_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default number of edges per circle.
///
/// # Examples
/// ```
/// assert_eq!(wireframe_wasm::default_segments(), 10);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Builds one primitive from scalar arguments.
///
/// `kind` is one of `rectangle`, `pyramid`, `cylinder`, `sphere`, `capsule`
/// (case-insensitive). Rotation angles are degrees.
///
/// # Errors
/// Returns a JavaScript error string for an unknown kind or invalid size.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const lines = build_wireframe("capsule", 0, 0, 0, 2, 0, 0, 30, 12);
/// // console.log(lines.segment_count); // 36
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn build_wireframe(
    kind: &str,
    center_x: f64,
    center_y: f64,
    center_z: f64,
    side_length: f64,
    rotation_x: f64,
    rotation_y: f64,
    rotation_z: f64,
    segments: u32,
) -> Result<LineBufferHandle, JsValue> {
    build_wireframe_internal(
        kind,
        [center_x, center_y, center_z],
        side_length,
        [rotation_x, rotation_y, rotation_z],
        segments,
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`build_wireframe`].
///
/// # Examples
/// ```
/// let lines = wireframe_wasm::build_wireframe_internal("sphere", [0.0; 3], 2.0, [0.0; 3], 8).unwrap();
/// assert_eq!(lines.segment_count(), 16);
/// ```
pub fn build_wireframe_internal(
    kind: &str,
    center: [f64; 3],
    side_length: f64,
    rotation: [f64; 3],
    segments: u32,
) -> Result<LineBufferHandle, GeometryError> {
    let kind: PrimitiveKind = kind.parse()?;
    let descriptor = PrimitiveDescriptor::new(kind, DVec3::from_array(center), side_length)
        .with_rotation(EulerRotation::from_degrees(DVec3::from_array(rotation)))
        .with_segments(segments);

    let wireframe = WireframeGeometryBuilder::new().build(&descriptor)?;
    Ok(LineBufferHandle::from(&wireframe))
}

/// Builds one primitive from a JSON descriptor.
///
/// ```text
/// { "kind": "pyramid", "center": [0, 0, 0], "side_length": 2,
///   "rotation": { "x": 0, "y": 45, "z": 0 }, "segments": 10 }
/// ```
///
/// `rotation` and `segments` may be omitted.
///
/// # Errors
/// Returns a JavaScript error string for malformed JSON or invalid fields.
#[wasm_bindgen]
pub fn build_wireframe_json(json: &str) -> Result<LineBufferHandle, JsValue> {
    build_wireframe_json_internal(json).map_err(|message| JsValue::from_str(&message))
}

/// Host-only helper behind [`build_wireframe_json`].
pub fn build_wireframe_json_internal(json: &str) -> Result<LineBufferHandle, String> {
    let descriptor: PrimitiveDescriptor =
        serde_json::from_str(json).map_err(|err| format!("Invalid descriptor: {err}"))?;

    WireframeGeometryBuilder::new()
        .build(&descriptor)
        .map(|wireframe| LineBufferHandle::from(&wireframe))
        .map_err(|err| err.to_string())
}

/// Builds the five-primitive showcase row as a single buffer.
///
/// # Errors
/// Returns a JavaScript error string for an invalid size or spacing.
#[wasm_bindgen]
pub fn build_showcase(
    side_length: f64,
    rotation_x: f64,
    rotation_y: f64,
    rotation_z: f64,
    spacing: f64,
) -> Result<LineBufferHandle, JsValue> {
    build_showcase_internal(side_length, [rotation_x, rotation_y, rotation_z], spacing)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`build_showcase`].
pub fn build_showcase_internal(
    side_length: f64,
    rotation: [f64; 3],
    spacing: f64,
) -> Result<LineBufferHandle, GeometryError> {
    let rotation = EulerRotation::from_degrees(DVec3::from_array(rotation));
    let row = showcase_row(DVec3::ZERO, side_length, rotation, DEFAULT_SEGMENTS, spacing)?;
    let wireframes = WireframeGeometryBuilder::new().build_all(&row)?;
    Ok(LineBufferHandle::concat(&wireframes))
}
