//! View-side pipeline for the exploded sphere: rigid view rotation,
//! orthographic projection, and back-to-front ordering with depth-based
//! opacity.

mod order;
mod projector;

pub use order::{RenderTriangle, depth_opacity, order_and_shade, project_and_order};
pub use projector::{ProjectedTriangle, bounding_radius, project, rotate_triangle, view_rotation};
