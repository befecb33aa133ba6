//! Rigid view rotation and orthographic projection.

use burst_geodesic::Triangle;
use glam::{DQuat, DVec2};

/// A triangle flattened to screen coordinates plus its depth.
///
/// Depth is the mean of the three rotated z-values. Smaller depth is
/// farther from the camera under this crate's viewing convention; it is a
/// relative ordering signal, not a physical distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedTriangle {
    /// Corner positions with the rotated z-coordinate dropped.
    pub points: [DVec2; 3],
    /// Mean rotated z of the three corners.
    pub depth: f64,
}

/// Compose the viewing rotation: about the X axis by `angle_x` first,
/// then about the Y axis by `angle_y`. The order is part of the contract;
/// the two rotations do not commute.
#[inline]
#[must_use]
pub fn view_rotation(angle_x: f64, angle_y: f64) -> DQuat {
    DQuat::from_rotation_y(angle_y) * DQuat::from_rotation_x(angle_x)
}

/// Rotate a triangle rigidly, returning a new triangle.
///
/// The input is never mutated; shape and size are preserved exactly (up
/// to floating error) because the rotation is a proper orthogonal
/// transform.
#[inline]
#[must_use]
pub fn rotate_triangle(triangle: &Triangle, rotation: DQuat) -> Triangle {
    Triangle::new(triangle.points.map(|p| rotation * p))
}

/// Rotate every triangle by the composed view rotation, then project
/// orthographically by dropping the rotated z-coordinate.
///
/// No perspective divide. Deterministic: identical inputs produce
/// bit-identical output.
#[must_use]
pub fn project(triangles: &[Triangle], angle_x: f64, angle_y: f64) -> Vec<ProjectedTriangle> {
    let rotation = view_rotation(angle_x, angle_y);
    triangles
        .iter()
        .map(|triangle| {
            let rotated = rotate_triangle(triangle, rotation);
            let depth =
                (rotated.points[0].z + rotated.points[1].z + rotated.points[2].z) / 3.0;
            ProjectedTriangle {
                points: rotated.points.map(|p| p.truncate()),
                depth,
            }
        })
        .collect()
}

/// Largest corner distance from the origin over all triangles.
///
/// Rotation preserves lengths, so this bound computed before rotation is
/// also a bound on every rotated coordinate, depth included.
#[must_use]
pub fn bounding_radius(triangles: &[Triangle]) -> f64 {
    triangles
        .iter()
        .flat_map(|triangle| triangle.points.iter())
        .fold(0.0, |radius: f64, point| radius.max(point.length()))
}
