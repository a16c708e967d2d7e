//! # Render Errors
//!
//! Error types surfaced while handing wireframes to a backend.

use thiserror::Error;
use wireframe_geometry::GeometryError;

/// Errors that can occur while rendering a frame of wireframes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No material or context is bound, so nothing can be drawn
    #[error("Missing render target: {reason}")]
    MissingRenderTarget { reason: String },

    /// A descriptor could not be turned into geometry
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The backend rejected a draw call
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl RenderError {
    /// Creates a missing render target error.
    pub fn missing_render_target(reason: impl Into<String>) -> Self {
        Self::MissingRenderTarget {
            reason: reason.into(),
        }
    }

    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
