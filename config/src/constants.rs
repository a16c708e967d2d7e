//! # Configuration Constants
//!
//! Centralized constants for the wireframe pipeline. Tessellation defaults,
//! floating-point tolerances, and showcase layout values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Circle tessellation parameters
//! - **Layout**: Spacing used when primitives are laid out side by side

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Distance under which two generated points are treated as the same vertex.
///
/// Rotated points pick up trigonometric noise (`cos(π/2)` is not exactly
/// zero), so closure checks on generated polygons compare with this instead
/// of `==`.
///
/// # Example
///
/// ```rust
/// use config::constants::POINT_TOLERANCE;
///
/// let noisy_zero = std::f64::consts::FRAC_PI_2.cos();
/// assert!(noisy_zero != 0.0);
/// assert!(noisy_zero.abs() < POINT_TOLERANCE);
/// ```
pub const POINT_TOLERANCE: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of edges used to approximate a circle.
///
/// Cylinders, spheres, and capsules are drawn as one or more circles with
/// this many edges unless the descriptor overrides it.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let requested: Option<u32> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_SEGMENTS), 10);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 10;

/// Minimum number of edges for any circle.
///
/// Fewer than three edges cannot enclose an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 2;
/// assert!(requested < MIN_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum number of edges for any circle.
///
/// Larger counts are rejected rather than clamped, since a capsule
/// allocates three rings of this many segments up front.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
///
/// let requested = 100_000;
/// assert!(!(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&requested));
/// ```
pub const MAX_SEGMENTS: u32 = 1000;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Default distance along +X between neighbouring primitives in a showcase row.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SHOWCASE_SPACING;
///
/// // Five primitives centered on the origin span four gaps.
/// let span = DEFAULT_SHOWCASE_SPACING * 4.0;
/// assert_eq!(span, 12.0);
/// ```
pub const DEFAULT_SHOWCASE_SPACING: f64 = 3.0;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of configuration settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.default_segments, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Circle edge count used when a caller does not pick one.
    pub default_segments: u32,
    /// Distance between primitives in a showcase row.
    pub showcase_spacing: f64,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting values that cannot produce geometry.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(24, 2.5).expect("valid config");
    /// assert_eq!(cfg.default_segments, 24);
    /// ```
    pub fn new(default_segments: u32, showcase_spacing: f64) -> Result<Self, ConfigError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&default_segments) {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        if !showcase_spacing.is_finite() || showcase_spacing < 0.0 {
            return Err(ConfigError::InvalidSpacing(showcase_spacing));
        }
        Ok(Self {
            default_segments,
            showcase_spacing,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_segments: DEFAULT_SEGMENTS,
            showcase_spacing: DEFAULT_SHOWCASE_SPACING,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the segment count is outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    InvalidSegments(u32),
    /// Raised when spacing is negative or not finite.
    InvalidSpacing(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "default_segments must be in {MIN_SEGMENTS}..={MAX_SEGMENTS}: {value}"
                )
            }
            ConfigError::InvalidSpacing(value) => {
                write!(f, "showcase_spacing must be finite and non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
