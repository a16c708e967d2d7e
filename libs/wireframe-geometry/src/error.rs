//! # Geometry Errors
//!
//! Error types for wireframe generation.

use thiserror::Error;

/// Errors that can occur while generating a wireframe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A descriptor field is outside the range that produces geometry
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl GeometryError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
