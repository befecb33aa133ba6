//! SVG output for projected, depth-ordered triangles.

use std::fmt::Write;

use burst_view::RenderTriangle;

/// Parameters for SVG export.
#[derive(Debug, Clone)]
pub struct SvgParams {
    /// Square frame edge in pixels.
    pub size: u32,
    /// Padding around the content in pixels.
    pub padding: u32,
    /// Stroke width for face outlines in pixels.
    pub stroke_width: f64,
    /// Face fill color (CSS color string).
    pub fill_color: String,
    /// Face outline color.
    pub stroke_color: String,
    /// Background color.
    pub background_color: String,
}

impl Default for SvgParams {
    fn default() -> Self {
        Self {
            size: 1080,
            padding: 40,
            stroke_width: 0.5,
            fill_color: "#4169E1".to_string(),
            stroke_color: "#4169E1".to_string(),
            background_color: "#000000".to_string(),
        }
    }
}

impl SvgParams {
    /// Params with custom colors.
    #[must_use]
    pub fn with_colors(mut self, fill: &str, stroke: &str) -> Self {
        self.fill_color = fill.to_string();
        self.stroke_color = stroke.to_string();
        self
    }

    /// Params with a custom frame size.
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

/// Render depth-ordered triangles as an SVG document.
///
/// Triangles must already be back-to-front (the output of the ordering
/// stage); document order is paint order. The viewport maps the square
/// `[-bounding_radius, bounding_radius]` onto the padded frame with the Y
/// axis flipped to match screen coordinates. Each triangle becomes one
/// `<polygon>` carrying its own `fill-opacity`.
#[must_use]
pub fn render_svg(
    triangles: &[RenderTriangle],
    bounding_radius: f64,
    params: &SvgParams,
) -> String {
    let size = params.size;
    if triangles.is_empty() {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n\
  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n\
</svg>",
            params.background_color
        );
    }

    let padding = f64::from(params.padding);
    let available = f64::from(size) - 2.0 * padding;
    let scale = if bounding_radius > 0.0 {
        available / (2.0 * bounding_radius)
    } else {
        1.0
    };
    let center = f64::from(size) / 2.0;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <rect width="100%" height="100%" fill="{}"/>
  <g transform="translate({center:.2},{center:.2}) scale({scale:.6},{:.6})">
"#,
        params.background_color,
        -scale // SVG Y grows downward
    );

    for triangle in triangles {
        let [a, b, c] = triangle.points;
        let _ = writeln!(
            svg,
            r#"    <polygon points="{:.4},{:.4} {:.4},{:.4} {:.4},{:.4}" fill="{}" fill-opacity="{:.3}" stroke="{}" stroke-width="{:.4}"/>"#,
            a.x,
            a.y,
            b.x,
            b.y,
            c.x,
            c.y,
            params.fill_color,
            triangle.opacity,
            params.stroke_color,
            params.stroke_width / scale
        );
    }

    svg.push_str("  </g>\n</svg>");
    svg
}
