//! Per-face shrink toward the centroid, detaching faces into floating
//! triangles.

use crate::error::{GeodesicError, GeodesicResult};
use crate::mesh::{Mesh, Triangle};

/// Shrink every face toward its own centroid and scale the result.
///
/// Each face becomes an independent [`Triangle`]: corners move to
/// `centroid + (corner - centroid) * factor`, then every coordinate is
/// multiplied by `scale`. A factor of 1 keeps neighboring faces touching;
/// smaller factors open a uniform gap along every edge. The shared-vertex
/// topology is discarded and cannot be recovered from the output.
///
/// Runs once, after all subdivision.
///
/// # Errors
///
/// Rejects `factor` outside `(0, 1]` and `scale` that is not a finite
/// positive number. Out-of-range parameters are never clamped.
pub fn shrink_faces(mesh: &Mesh, factor: f64, scale: f64) -> GeodesicResult<Vec<Triangle>> {
    if !(factor > 0.0 && factor <= 1.0) {
        return Err(GeodesicError::InvalidShrinkFactor(factor));
    }
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(GeodesicError::InvalidScale(scale));
    }

    let triangles = mesh
        .faces
        .iter()
        .map(|&[i, j, k]| {
            let corners = [
                mesh.vertices[i as usize],
                mesh.vertices[j as usize],
                mesh.vertices[k as usize],
            ];
            let center = (corners[0] + corners[1] + corners[2]) / 3.0;
            Triangle::new(corners.map(|v| (center + (v - center) * factor) * scale))
        })
        .collect();

    Ok(triangles)
}
