//! Mesh and triangle containers shared by every pipeline stage.

use glam::DVec3;
use rustc_hash::FxHashMap;

/// A shared-vertex triangle mesh.
///
/// Faces store `u32` indices into the vertex list. The vertex list only
/// grows during subdivision, so indices stay valid across rounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, on the unit sphere until shrink/scale runs.
    pub vertices: Vec<DVec3>,
    /// Vertex index triples, counter-clockwise viewed from outside.
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_face_counts().len()
    }

    /// Map from undirected edge (smaller index first) to the number of
    /// faces bordering it.
    #[must_use]
    pub fn edge_face_counts(&self) -> FxHashMap<(u32, u32), u32> {
        let mut counts = FxHashMap::default();
        for face in &self.faces {
            for i in 0..3 {
                let edge = ordered_edge(face[i], face[(i + 1) % 3]);
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        counts
    }

    /// A mesh is closed when every edge borders exactly two faces.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.edge_face_counts().values().all(|&n| n == 2)
    }
}

/// A free-floating triangle: three owned corner points, shared with no
/// other triangle.
///
/// Produced once per face by the shrinking stage and never mutated; view
/// rotation returns a fresh copy instead of editing in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Corner positions, winding preserved from the source face.
    pub points: [DVec3; 3],
}

impl Triangle {
    #[must_use]
    pub fn new(points: [DVec3; 3]) -> Self {
        Self { points }
    }

    /// Arithmetic mean of the three corners.
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> DVec3 {
        (self.points[0] + self.points[1] + self.points[2]) / 3.0
    }

    /// Side lengths, in corner order.
    #[must_use]
    pub fn edge_lengths(&self) -> [f64; 3] {
        [
            self.points[0].distance(self.points[1]),
            self.points[1].distance(self.points[2]),
            self.points[2].distance(self.points[0]),
        ]
    }
}

/// Normalize an undirected edge so the smaller vertex index comes first.
#[inline]
#[must_use]
pub(crate) const fn ordered_edge(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}
