//! # Line Buffer Handle
//!
//! WASM-friendly wrapper for wireframe data that can be transferred to JavaScript.

use wasm_bindgen::prelude::*;
use wireframe_geometry::Wireframe;

/// Line vertices ready for a `THREE.LineSegments` geometry.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const lines = build_wireframe("sphere", 0, 0, 0, 2, 0, 45, 0, 10);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(lines.vertices(), 3));
/// const mesh = new THREE.LineSegments(geometry, material);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LineBufferHandle {
    /// Endpoints as [x0, y0, z0, x1, y1, z1, ...], two per segment
    vertices: Vec<f32>,
    /// Number of segments
    segment_count: usize,
}

#[wasm_bindgen]
impl LineBufferHandle {
    /// Returns the number of segments.
    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Returns the number of vertices (two per segment).
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.segment_count * 2
    }

    /// Returns the vertex buffer as a Float32Array.
    ///
    /// Length: segment_count * 6
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }
}

impl From<&Wireframe> for LineBufferHandle {
    fn from(wireframe: &Wireframe) -> Self {
        Self {
            vertices: wireframe.to_vertex_buffer(),
            segment_count: wireframe.segment_count(),
        }
    }
}

impl LineBufferHandle {
    /// Concatenates several wireframes into one buffer, in order.
    pub fn concat<'a>(wireframes: impl IntoIterator<Item = &'a Wireframe>) -> Self {
        let mut handle = Self {
            vertices: Vec::new(),
            segment_count: 0,
        };
        for wireframe in wireframes {
            handle.vertices.extend(wireframe.to_vertex_buffer());
            handle.segment_count += wireframe.segment_count();
        }
        handle
    }
}
