//! Midpoint subdivision onto the unit sphere.
//!
//! Each round splits every face into four children by inserting one new
//! vertex per edge at the re-normalized midpoint. Re-normalization is what
//! turns a subdivided icosahedron into a geodesic sphere instead of a
//! flat-faceted polyhedron.

use glam::DVec3;
use rustc_hash::FxHashMap;

use crate::error::{GeodesicError, GeodesicResult};
use crate::icosahedron::icosahedron;
use crate::mesh::{Mesh, ordered_edge};

/// Hard cap on subdivision rounds. Ten rounds put ~21M faces on the
/// sphere, past any plausible display use.
pub const MAX_SUBDIVISIONS: u32 = 10;

/// Averaged midpoints shorter than this have no usable direction to
/// project back onto the sphere.
const MIN_MIDPOINT_LENGTH: f64 = 1e-12;

/// Build a geodesic sphere: the icosahedron subdivided `levels` times.
///
/// Level 0 is the bare icosahedron (12 vertices, 20 faces); each further
/// level quadruples the face count.
///
/// # Errors
///
/// Returns [`GeodesicError::InvalidSubdivisions`] when `levels` exceeds
/// [`MAX_SUBDIVISIONS`].
pub fn generate_mesh(levels: u32) -> GeodesicResult<Mesh> {
    if levels > MAX_SUBDIVISIONS {
        return Err(GeodesicError::InvalidSubdivisions {
            requested: levels,
            max: MAX_SUBDIVISIONS,
        });
    }

    let mut mesh = icosahedron();
    for _ in 0..levels {
        mesh = subdivide(&mesh)?;
    }
    Ok(mesh)
}

/// One subdivision round over a closed mesh.
///
/// Midpoints are created exactly once per undirected edge: the cache is
/// keyed by the ordered index pair and lives only for this call, so
/// adjacent faces resolve a shared edge to the same vertex and the mesh
/// stays closed. Vertex count grows by the input's edge count; face count
/// quadruples; winding is preserved.
///
/// # Errors
///
/// Returns [`GeodesicError::DegenerateMidpoint`] when an averaged midpoint
/// is too short to normalize. That needs malformed input (for example
/// antipodal edge endpoints); meshes produced by this crate never trip it.
pub fn subdivide(mesh: &Mesh) -> GeodesicResult<Mesh> {
    let mut vertices = mesh.vertices.clone();
    let mut faces = Vec::with_capacity(mesh.faces.len() * 4);
    let mut midpoints: FxHashMap<(u32, u32), u32> = FxHashMap::default();

    for &[v0, v1, v2] in &mesh.faces {
        let a = midpoint_on_sphere(v0, v1, &mut vertices, &mut midpoints)?;
        let b = midpoint_on_sphere(v1, v2, &mut vertices, &mut midpoints)?;
        let c = midpoint_on_sphere(v2, v0, &mut vertices, &mut midpoints)?;

        // Three corner children plus the center child.
        faces.push([v0, a, c]);
        faces.push([v1, b, a]);
        faces.push([v2, c, b]);
        faces.push([a, b, c]);
    }

    Ok(Mesh { vertices, faces })
}

/// Look up or create the unit-sphere midpoint of edge `(v0, v1)`.
fn midpoint_on_sphere(
    v0: u32,
    v1: u32,
    vertices: &mut Vec<DVec3>,
    midpoints: &mut FxHashMap<(u32, u32), u32>,
) -> GeodesicResult<u32> {
    let edge = ordered_edge(v0, v1);
    if let Some(&idx) = midpoints.get(&edge) {
        return Ok(idx);
    }

    let mid = (vertices[v0 as usize] + vertices[v1 as usize]) * 0.5;
    if mid.length() < MIN_MIDPOINT_LENGTH {
        return Err(GeodesicError::DegenerateMidpoint {
            a: edge.0,
            b: edge.1,
        });
    }

    let idx = vertices.len() as u32;
    vertices.push(mid.normalize());
    midpoints.insert(edge, idx);
    Ok(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_level_zero_is_the_icosahedron() {
        let mesh = generate_mesh(0).unwrap();
        assert_eq!(mesh, icosahedron());
    }

    #[test]
    fn test_one_round_counts() {
        let mesh = generate_mesh(1).unwrap();
        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.face_count(), 80);
    }

    #[test]
    fn test_two_round_counts() {
        let mesh = generate_mesh(2).unwrap();
        assert_eq!(mesh.vertex_count(), 162);
        assert_eq!(mesh.face_count(), 320);
    }

    #[test]
    fn test_face_count_law() {
        for levels in 0..=3 {
            let mesh = generate_mesh(levels).unwrap();
            assert_eq!(
                mesh.face_count(),
                20 << (2 * levels),
                "face count after {levels} rounds"
            );
        }
    }

    #[test]
    fn test_euler_vertex_count() {
        // Closed triangulated sphere: V = F/2 + 2.
        for levels in 0..=3 {
            let mesh = generate_mesh(levels).unwrap();
            assert_eq!(
                mesh.vertex_count(),
                mesh.face_count() / 2 + 2,
                "Euler count after {levels} rounds"
            );
        }
    }

    #[test]
    fn test_vertex_growth_equals_edge_count() {
        let mesh = icosahedron();
        let edges = mesh.edge_count();
        let next = subdivide(&mesh).unwrap();
        assert_eq!(next.vertex_count(), mesh.vertex_count() + edges);
    }

    #[test]
    fn test_all_vertices_stay_on_unit_sphere() {
        let mesh = generate_mesh(2).unwrap();
        for (i, v) in mesh.vertices.iter().enumerate() {
            assert!(
                (v.length() - 1.0).abs() < EPSILON,
                "Vertex {i} left the unit sphere: length = {}",
                v.length()
            );
        }
    }

    #[test]
    fn test_mesh_stays_closed() {
        let mut mesh = icosahedron();
        for round in 1..=2 {
            mesh = subdivide(&mesh).unwrap();
            for (edge, count) in mesh.edge_face_counts() {
                assert_eq!(
                    count, 2,
                    "Edge {edge:?} borders {count} faces after round {round}"
                );
            }
        }
    }

    #[test]
    fn test_winding_preserved() {
        let mesh = generate_mesh(1).unwrap();
        for face in &mesh.faces {
            let v0 = mesh.vertices[face[0] as usize];
            let v1 = mesh.vertices[face[1] as usize];
            let v2 = mesh.vertices[face[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);
            let centroid = (v0 + v1 + v2) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "Child face {face:?} flipped inward"
            );
        }
    }

    #[test]
    fn test_midpoint_ignores_request_order() {
        let mesh = icosahedron();
        let mut vertices = mesh.vertices.clone();
        let mut midpoints = FxHashMap::default();

        let forward = midpoint_on_sphere(0, 11, &mut vertices, &mut midpoints).unwrap();
        let reverse = midpoint_on_sphere(11, 0, &mut vertices, &mut midpoints).unwrap();
        assert_eq!(forward, reverse, "edge direction must not matter");
        assert_eq!(vertices.len(), mesh.vertex_count() + 1);
    }

    #[test]
    fn test_no_duplicate_vertex_positions() {
        let mesh = generate_mesh(1).unwrap();
        for i in 0..mesh.vertices.len() {
            for j in (i + 1)..mesh.vertices.len() {
                assert!(
                    mesh.vertices[i].distance(mesh.vertices[j]) > 1e-6,
                    "Vertices {i} and {j} coincide: dedup failed"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_midpoint_rejected() {
        // Antipodal endpoints average to the origin.
        let mesh = Mesh {
            vertices: vec![
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(-1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![[0, 1, 2]],
        };
        let result = subdivide(&mesh);
        assert_eq!(
            result,
            Err(GeodesicError::DegenerateMidpoint { a: 0, b: 1 })
        );
    }

    #[test]
    fn test_level_cap_rejected() {
        let result = generate_mesh(MAX_SUBDIVISIONS + 1);
        assert_eq!(
            result,
            Err(GeodesicError::InvalidSubdivisions {
                requested: MAX_SUBDIVISIONS + 1,
                max: MAX_SUBDIVISIONS,
            })
        );
    }

    #[test]
    fn test_deterministic() {
        let first = generate_mesh(2).unwrap();
        let second = generate_mesh(2).unwrap();
        assert_eq!(first, second, "generation must be bit-identical");
    }
}
