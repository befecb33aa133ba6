//! Canonical golden-ratio icosahedron construction.

use glam::DVec3;

use crate::mesh::Mesh;

/// Build the unit icosahedron: 12 vertices and 20 faces.
///
/// Vertices sit at the cyclic permutations of `(±1, ±t, 0)` with
/// `t = (1 + √5) / 2`, normalized onto the unit sphere. The face table is
/// the canonical closed triangulation: every edge borders exactly two
/// faces and every face winds counter-clockwise seen from outside.
#[must_use]
pub fn icosahedron() -> Mesh {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;

    #[rustfmt::skip]
    let raw = [
        [-1.0,    t,  0.0],
        [ 1.0,    t,  0.0],
        [-1.0,   -t,  0.0],
        [ 1.0,   -t,  0.0],
        [ 0.0, -1.0,    t],
        [ 0.0,  1.0,    t],
        [ 0.0, -1.0,   -t],
        [ 0.0,  1.0,   -t],
        [   t,  0.0, -1.0],
        [   t,  0.0,  1.0],
        [  -t,  0.0, -1.0],
        [  -t,  0.0,  1.0],
    ];

    let vertices = raw
        .iter()
        .map(|&[x, y, z]| DVec3::new(x, y, z).normalize())
        .collect();

    #[rustfmt::skip]
    let faces = vec![
        // Five faces around vertex 0.
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        // The adjacent ring.
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        // Five faces around vertex 3.
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        // The adjacent ring.
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    Mesh { vertices, faces }
}
