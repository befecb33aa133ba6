//! Plain-text exporters for the exploded sphere.
//!
//! The pipeline crates hand over geometry; everything file-shaped happens
//! here. SVG serves the projected 2D scenes, Wavefront OBJ/MTL the 3D
//! model. No rasterization anywhere.

mod error;
mod obj;
mod svg;

pub use error::ExportError;
pub use obj::{write_mtl, write_obj};
pub use svg::{SvgParams, render_svg};
