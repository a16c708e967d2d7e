//! # Config Crate
//!
//! Centralized configuration constants for the wireframe primitive pipeline.
//! Tessellation defaults, comparison tolerances, and layout spacing live here
//! so the geometry, render, and WASM crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS};
//!
//! assert!((MIN_SEGMENTS..=MAX_SEGMENTS).contains(&DEFAULT_SEGMENTS));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated Snapshots**: `GlobalConfig` rejects values that cannot produce geometry

pub mod constants;
