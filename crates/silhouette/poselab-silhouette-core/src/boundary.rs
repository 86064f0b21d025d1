//! In-progress silhouette trace: an ordered vertex list, implicitly closed
//! at rasterize time.

use serde::{Deserialize, Serialize};

use poselab_api_core::Point2;

/// Ordered polygon vertices in source-image pixels. No constraint on
/// convexity or self-intersection; the fill rule handles both.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PolygonBoundary {
    vertices: Vec<Point2>,
}

impl PolygonBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Append the next traced vertex.
    pub fn add_vertex(&mut self, x: i32, y: i32) {
        self.vertices.push(Point2::new(x, y));
    }

    /// Drop all vertices for a fresh trace.
    pub fn restart(&mut self) {
        self.vertices.clear();
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
}
