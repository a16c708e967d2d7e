//! # Wireframe Render
//!
//! Connects generated wireframes to a line-drawing backend.
//!
//! ## Architecture
//!
//! ```text
//! descriptors → FrameRenderer::render → WireframeGeometryBuilder → LineRenderer::draw_lines
//! ```
//!
//! Material state is an explicit [`MaterialHandle`] argument; nothing here
//! keeps graphics state between frames. Backends implement [`LineRenderer`];
//! [`RecordingRenderer`] keeps calls in memory.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use wireframe_geometry::layout::showcase_row;
//! use wireframe_geometry::EulerRotation;
//! use wireframe_render::{FrameRenderer, MaterialHandle, RecordingRenderer};
//!
//! let row = showcase_row(DVec3::ZERO, 1.0, EulerRotation::new(0.0, 30.0, 0.0), 10, 3.0)?;
//! let mut backend = RecordingRenderer::new();
//! let stats = FrameRenderer::new().render(&mut backend, Some(&MaterialHandle::new(0, "gizmo")), &row)?;
//! assert_eq!(stats.segments, 4 + 8 + 10 + 20 + 30);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backend;
pub mod error;
pub mod frame;
pub mod material;
pub mod projection;

pub use backend::{DrawCall, LineRenderer, RecordingRenderer};
pub use error::RenderError;
pub use frame::{FrameRenderer, FrameStats};
pub use material::MaterialHandle;
pub use projection::Projection;
