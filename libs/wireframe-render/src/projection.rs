//! # Projection
//!
//! Optional post-processing applied to segments before they reach the backend.

use serde::{Deserialize, Serialize};
use wireframe_geometry::LineSegment;

/// How generated 3D segments are mapped before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Segments are drawn as generated.
    #[default]
    Identity,
    /// Every endpoint's z is replaced with 0, drawing the XY footprint.
    FlattenZ,
}

impl Projection {
    /// Applies the projection to one segment.
    #[inline]
    pub fn apply(self, segment: LineSegment) -> LineSegment {
        match self {
            Self::Identity => segment,
            Self::FlattenZ => segment.map_points(|mut point| {
                point.z = 0.0;
                point
            }),
        }
    }
}
