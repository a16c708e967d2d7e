//! # Line Segments and Wireframes
//!
//! Output data structures: a single line segment and the ordered list of
//! segments produced for one primitive.

use config::constants::POINT_TOLERANCE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A single line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// First endpoint
    pub start: DVec3,
    /// Second endpoint
    pub end: DVec3,
}

impl LineSegment {
    /// Creates a segment from its endpoints.
    #[inline]
    pub const fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Returns the distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Returns the segment with its endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns a copy with `f` applied to both endpoints.
    #[inline]
    pub fn map_points(&self, mut f: impl FnMut(DVec3) -> DVec3) -> Self {
        Self::new(f(self.start), f(self.end))
    }
}

/// An ordered list of line segments.
///
/// Order is part of the output: two builds of the same descriptor yield the
/// same segments in the same order.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use wireframe_geometry::{LineSegment, Wireframe};
///
/// let mut wireframe = Wireframe::new();
/// wireframe.push(LineSegment::new(DVec3::ZERO, DVec3::X));
/// wireframe.push(LineSegment::new(DVec3::X, DVec3::ZERO));
/// assert_eq!(wireframe.segment_count(), 2);
/// assert!(wireframe.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wireframe {
    segments: Vec<LineSegment>,
}

impl Wireframe {
    /// Creates an empty wireframe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a wireframe with pre-allocated capacity.
    pub fn with_capacity(segment_count: usize) -> Self {
        Self {
            segments: Vec::with_capacity(segment_count),
        }
    }

    /// Returns the number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments in generation order.
    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Consumes the wireframe, returning its segments.
    pub fn into_segments(self) -> Vec<LineSegment> {
        self.segments
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    /// Appends a segment from two endpoints.
    pub fn add_line(&mut self, start: DVec3, end: DVec3) {
        self.segments.push(LineSegment::new(start, end));
    }

    /// Appends edges connecting `points` in order, closing back to the first.
    ///
    /// Produces exactly `points.len()` segments.
    pub fn add_closed_polygon(&mut self, points: &[DVec3]) {
        let count = points.len();
        for i in 0..count {
            self.add_line(points[i], points[(i + 1) % count]);
        }
    }

    /// Appends all segments of another wireframe.
    pub fn merge(&mut self, other: &Wireframe) {
        self.segments.extend_from_slice(&other.segments);
    }

    /// Returns the axis-aligned bounds of all endpoints, or `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = self.segments.first()?.start;
        Some(self.points().fold((first, first), |(min, max), point| {
            (min.min(point), max.max(point))
        }))
    }

    /// Returns true if each segment starts where the previous one ended and
    /// the last segment ends where the first one started.
    pub fn is_closed_loop(&self, tolerance: f64) -> bool {
        let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) else {
            return false;
        };

        let chained = self
            .segments
            .windows(2)
            .all(|pair| pair[0].end.abs_diff_eq(pair[1].start, tolerance));

        chained && last.end.abs_diff_eq(first.start, tolerance)
    }

    /// [`Wireframe::is_closed_loop`] at [`POINT_TOLERANCE`], which absorbs
    /// the trigonometric noise of rotated vertices.
    pub fn is_closed(&self) -> bool {
        self.is_closed_loop(POINT_TOLERANCE)
    }

    /// Flattens endpoints into `[x0, y0, z0, x1, y1, z1, ...]` for GPU upload.
    ///
    /// Two vertices per segment, narrowed to f32.
    pub fn to_vertex_buffer(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.segments.len() * 6);
        for point in self.points() {
            buffer.extend_from_slice(&point.as_vec3().to_array());
        }
        buffer
    }

    fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.segments
            .iter()
            .flat_map(|segment| [segment.start, segment.end])
    }
}

impl From<Vec<LineSegment>> for Wireframe {
    fn from(segments: Vec<LineSegment>) -> Self {
        Self { segments }
    }
}

impl Extend<LineSegment> for Wireframe {
    fn extend<I: IntoIterator<Item = LineSegment>>(&mut self, iter: I) {
        self.segments.extend(iter);
    }
}

impl IntoIterator for Wireframe {
    type Item = LineSegment;
    type IntoIter = std::vec::IntoIter<LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Wireframe {
    type Item = &'a LineSegment;
    type IntoIter = std::slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
