//! Back-to-front ordering and depth-based opacity.

use burst_geodesic::Triangle;
use glam::DVec2;

use crate::projector::{ProjectedTriangle, bounding_radius, project};

const OPACITY_BASE: f64 = 0.6;
const OPACITY_SPAN: f64 = 0.4;
const OPACITY_MIN: f64 = 0.4;
const OPACITY_MAX: f64 = 1.0;

/// A projected triangle ready for a painter's-algorithm renderer.
///
/// Position in the list returned by [`order_and_shade`] is the paint
/// order: index 0 is the farthest triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTriangle {
    /// Screen-space corner positions.
    pub points: [DVec2; 3],
    /// Mean rotated z of the source triangle.
    pub depth: f64,
    /// Fill opacity in `[0.4, 1.0]`, nearer triangles more opaque.
    pub opacity: f64,
    /// Index of the source triangle, for consumers that animate or color
    /// faces individually.
    pub source: usize,
}

/// Map a depth to a fill opacity.
///
/// Linear ramp from 0.6 at the far bound to full opacity at the near
/// bound, clamped to `[0.4, 1.0]`. The bound comes from the post-scale
/// geometry (see [`bounding_radius`]), so the ramp follows the caller's
/// scale instead of assuming one. A non-positive bound (every corner at
/// the origin) maps to full opacity.
#[inline]
#[must_use]
pub fn depth_opacity(depth: f64, bounding_radius: f64) -> f64 {
    if bounding_radius <= 0.0 {
        return OPACITY_MAX;
    }
    let normalized = (depth + bounding_radius) / (2.0 * bounding_radius);
    (OPACITY_BASE + OPACITY_SPAN * normalized).clamp(OPACITY_MIN, OPACITY_MAX)
}

/// Order projected triangles back-to-front and attach opacities.
///
/// The sort ascends by depth (farthest first) and is stable: triangles
/// with equal depth keep their input order, so the result never depends
/// on the renderer.
#[must_use]
pub fn order_and_shade(
    projected: &[ProjectedTriangle],
    bounding_radius: f64,
) -> Vec<RenderTriangle> {
    let mut ordered: Vec<RenderTriangle> = projected
        .iter()
        .enumerate()
        .map(|(source, triangle)| RenderTriangle {
            points: triangle.points,
            depth: triangle.depth,
            opacity: depth_opacity(triangle.depth, bounding_radius),
            source,
        })
        .collect();
    ordered.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    ordered
}

/// Full 2D view pipeline: rotate, project, order, shade.
///
/// Consumers that render in true 3D skip this and take the shrunk
/// triangles directly.
#[must_use]
pub fn project_and_order(
    triangles: &[Triangle],
    angle_x: f64,
    angle_y: f64,
) -> Vec<RenderTriangle> {
    let projected = project(triangles, angle_x, angle_y);
    order_and_shade(&projected, bounding_radius(triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use burst_geodesic::{generate_mesh, shrink_faces};

    const EPSILON: f64 = 1e-12;

    fn flat(depth: f64) -> ProjectedTriangle {
        ProjectedTriangle {
            points: [DVec2::ZERO, DVec2::X, DVec2::Y],
            depth,
        }
    }

    #[test]
    fn test_sorts_ascending_by_depth() {
        let input = [flat(1.5), flat(-2.0), flat(0.25), flat(-0.75)];
        let ordered = order_and_shade(&input, 2.0);
        let depths: Vec<f64> = ordered.iter().map(|t| t.depth).collect();
        assert_eq!(depths, vec![-2.0, -0.75, 0.25, 1.5]);
        let sources: Vec<usize> = ordered.iter().map(|t| t.source).collect();
        assert_eq!(sources, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_equal_depths_keep_input_order() {
        let input = [flat(0.5), flat(0.5), flat(-0.5), flat(0.5)];
        let ordered = order_and_shade(&input, 1.0);
        let sources: Vec<usize> = ordered.iter().map(|t| t.source).collect();
        assert_eq!(sources, vec![2, 0, 1, 3], "ties must stay in input order");
    }

    #[test]
    fn test_opacity_ramp_endpoints() {
        let radius = 2.5;
        assert!((depth_opacity(-radius, radius) - 0.6).abs() < EPSILON);
        assert!((depth_opacity(0.0, radius) - 0.8).abs() < EPSILON);
        assert!((depth_opacity(radius, radius) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_opacity_clamps_outside_the_bound() {
        let radius = 2.5;
        assert!((depth_opacity(-10.0 * radius, radius) - OPACITY_MIN).abs() < EPSILON);
        assert!((depth_opacity(10.0 * radius, radius) - OPACITY_MAX).abs() < EPSILON);
    }

    #[test]
    fn test_opacity_monotone_in_depth() {
        let radius = 2.5;
        let mut previous = f64::NEG_INFINITY;
        for step in -20..=20 {
            let depth = f64::from(step) * 0.25;
            let opacity = depth_opacity(depth, radius);
            assert!(
                opacity >= previous,
                "opacity decreased at depth {depth}: {previous} -> {opacity}"
            );
            assert!((OPACITY_MIN..=OPACITY_MAX).contains(&opacity));
            previous = opacity;
        }
    }

    #[test]
    fn test_zero_radius_is_fully_opaque() {
        assert_eq!(depth_opacity(0.0, 0.0), OPACITY_MAX);
        assert_eq!(depth_opacity(-1.0, 0.0), OPACITY_MAX);
    }

    #[test]
    fn test_full_pipeline_orders_every_face() {
        let mesh = generate_mesh(1).unwrap();
        let triangles = shrink_faces(&mesh, 0.75, 2.5).unwrap();
        let ordered = project_and_order(&triangles, 0.4, 0.3);

        assert_eq!(ordered.len(), 80);
        for pair in ordered.windows(2) {
            assert!(
                pair[0].depth <= pair[1].depth,
                "output not back-to-front: {} before {}",
                pair[0].depth,
                pair[1].depth
            );
        }
        for triangle in &ordered {
            assert!((OPACITY_MIN..=OPACITY_MAX).contains(&triangle.opacity));
            assert!(triangle.source < 80);
        }
    }

    #[test]
    fn test_full_pipeline_is_deterministic() {
        let mesh = generate_mesh(1).unwrap();
        let triangles = shrink_faces(&mesh, 0.75, 2.5).unwrap();
        let first = project_and_order(&triangles, 0.4, 0.3);
        let second = project_and_order(&triangles, 0.4, 0.3);
        assert_eq!(first, second, "ordering must be bit-identical");
    }

    #[test]
    fn test_every_source_appears_once() {
        let mesh = generate_mesh(1).unwrap();
        let triangles = shrink_faces(&mesh, 0.75, 2.5).unwrap();
        let ordered = project_and_order(&triangles, 0.4, 0.3);
        let mut seen = vec![false; ordered.len()];
        for triangle in &ordered {
            assert!(!seen[triangle.source], "source {} duplicated", triangle.source);
            seen[triangle.source] = true;
        }
        assert!(seen.iter().all(|&s| s), "the sort dropped a triangle");
    }
}
