//! # Material Handle
//!
//! Opaque reference to whatever shader/material state a backend binds
//! before drawing lines.

use serde::{Deserialize, Serialize};

/// Identifies the material a backend should bind for a draw call.
///
/// The handle carries no graphics state; backends map `id` to their own
/// resources. `label` is for logs and debugging only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle {
    /// Backend-defined material id
    pub id: u64,
    /// Human-readable name
    pub label: String,
}

impl MaterialHandle {
    /// Creates a material handle.
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
