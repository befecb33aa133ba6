//! Wavefront OBJ/MTL output for the 3D model scene.

use std::fmt::Write;

use burst_geodesic::Triangle;

use crate::error::ExportError;

/// Serialize triangles as a Wavefront OBJ document.
///
/// Triangles are independent by construction, so vertices are emitted
/// per-triangle (three `v` lines each) with no index sharing; the gaps
/// between faces are the point of the model. Faces reference the material
/// from [`write_mtl`] with the same `name`.
#[must_use]
pub fn write_obj(triangles: &[Triangle], name: &str) -> String {
    let mut obj = String::new();
    let _ = writeln!(obj, "mtllib {name}.mtl");
    let _ = writeln!(obj, "o {name}");

    for triangle in triangles {
        for point in &triangle.points {
            let _ = writeln!(obj, "v {:.9} {:.9} {:.9}", point.x, point.y, point.z);
        }
    }

    let _ = writeln!(obj, "usemtl {name}");
    for i in 0..triangles.len() {
        // OBJ indices are 1-based.
        let base = 3 * i + 1;
        let _ = writeln!(obj, "f {} {} {}", base, base + 1, base + 2);
    }

    obj
}

/// Serialize the shared face material as a Wavefront MTL document.
///
/// # Errors
///
/// Returns [`ExportError::InvalidColor`] when `fill_color` is not
/// `#RRGGBB` hex.
pub fn write_mtl(name: &str, fill_color: &str, opacity: f64) -> Result<String, ExportError> {
    let [r, g, b] = parse_hex_color(fill_color)?;
    let mut mtl = String::new();
    let _ = writeln!(mtl, "newmtl {name}");
    let _ = writeln!(mtl, "Kd {r:.6} {g:.6} {b:.6}");
    let _ = writeln!(mtl, "d {opacity:.3}");
    Ok(mtl)
}

/// Parse `#RRGGBB` into RGB components in `[0, 1]`.
fn parse_hex_color(color: &str) -> Result<[f64; 3], ExportError> {
    let invalid = || ExportError::InvalidColor(color.to_string());
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    // Hex digits only; `from_str_radix` alone would tolerate a leading sign.
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map(|value| f64::from(value) / 255.0)
            .map_err(|_| invalid())
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
