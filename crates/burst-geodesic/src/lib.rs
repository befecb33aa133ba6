//! Geodesic sphere geometry for the exploded-logo pipeline: icosahedron
//! construction, midpoint subdivision onto the unit sphere, and per-face
//! shrinking into free-floating triangles.

mod error;
mod icosahedron;
mod mesh;
mod shrink;
mod subdivide;

pub use error::{GeodesicError, GeodesicResult};
pub use icosahedron::icosahedron;
pub use mesh::{Mesh, Triangle};
pub use shrink::shrink_faces;
pub use subdivide::{MAX_SUBDIVISIONS, generate_mesh, subdivide};
