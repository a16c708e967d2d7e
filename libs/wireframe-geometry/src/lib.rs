//! # Wireframe Geometry
//!
//! Deterministic line-segment generation for debug primitives.
//! A [`PrimitiveDescriptor`] goes in, an ordered [`Wireframe`] comes out.
//!
//! ## Architecture
//!
//! ```text
//! PrimitiveDescriptor → WireframeGeometryBuilder → Wireframe → LineRenderer
//! ```
//!
//! ## Primitives
//!
//! | Kind      | Segments        |
//! |-----------|-----------------|
//! | Rectangle | 4               |
//! | Pyramid   | 8               |
//! | Cylinder  | `segments`      |
//! | Sphere    | `2 * segments`  |
//! | Capsule   | `3 * segments`  |
//!
//! Every vertex is rotated about the primitive center by a sequential
//! X → Y → Z Euler rotation (see [`rotation`]).
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use wireframe_geometry::{EulerRotation, PrimitiveDescriptor, PrimitiveKind, WireframeGeometryBuilder};
//!
//! let descriptor = PrimitiveDescriptor::new(PrimitiveKind::Capsule, DVec3::ZERO, 2.0)
//!     .with_rotation(EulerRotation::new(0.0, 0.0, 30.0));
//! let wireframe = WireframeGeometryBuilder::new().build(&descriptor)?;
//! assert_eq!(wireframe.segment_count(), 30);
//! # Ok::<(), wireframe_geometry::GeometryError>(())
//! ```

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod rotation;
pub mod segment;

pub use builder::WireframeGeometryBuilder;
pub use descriptor::{PrimitiveDescriptor, PrimitiveKind};
pub use error::GeometryError;
pub use rotation::{rotate_point, EulerComposition, EulerRotation};
pub use segment::{LineSegment, Wireframe};

/// Builds one descriptor with the default builder.
///
/// Shorthand for `WireframeGeometryBuilder::new().build(descriptor)`.
pub fn build(descriptor: &PrimitiveDescriptor) -> Result<Wireframe, GeometryError> {
    WireframeGeometryBuilder::new().build(descriptor)
}
