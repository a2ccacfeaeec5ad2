//! The rasterizer contract: SVG text in, pixels plus page size out.
//!
//! The core never rasterizes. Backends implement [`SvgRenderer`]; the
//! `ringcal-raster` crate provides one on top of resvg.

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// US Letter width in points, used when the SVG carries no usable size
pub const DEFAULT_PAGE_POINTS: f64 = 612.0;

/// A rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct RasterPage {
    /// PNG-encoded image
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    /// Physical page size in PostScript points
    pub width_pts: f64,
    pub height_pts: f64,
}

/// Turns an SVG document into a raster page
pub trait SvgRenderer {
    type Error: std::error::Error + Send + Sync + 'static;

    fn render(&self, svg: &str) -> Result<RasterPage, Self::Error>;
}

/// Convert an SVG length attribute (`210mm`, `8.5in`, `612pt`, `816px`) to
/// points. A bare number is already in points. Unparseable values fall back
/// to [`DEFAULT_PAGE_POINTS`].
pub fn parse_size_to_points(value: &str) -> f64 {
    let value = value.trim();
    let (number, factor) = if let Some(n) = value.strip_suffix("mm") {
        (n, POINTS_PER_INCH / 25.4)
    } else if let Some(n) = value.strip_suffix("in") {
        (n, POINTS_PER_INCH)
    } else if let Some(n) = value.strip_suffix("pt") {
        (n, 1.0)
    } else if let Some(n) = value.strip_suffix("px") {
        (n, POINTS_PER_INCH / 96.0)
    } else {
        (value, 1.0)
    };
    number
        .trim()
        .parse::<f64>()
        .map(|n| n * factor)
        .unwrap_or(DEFAULT_PAGE_POINTS)
}

/// Value of `name="..."` on the root `<svg>` element, if present
pub fn root_attribute<'a>(svg: &'a str, name: &str) -> Option<&'a str> {
    let start = svg.find("<svg")?;
    let end = start + svg[start..].find('>')?;
    let tag = &svg[start..end];
    let needle = format!(" {name}=\"");
    let value_start = tag.find(&needle)? + needle.len();
    let value_len = tag[value_start..].find('"')?;
    Some(&tag[value_start..value_start + value_len])
}

/// Page size in points from the root `width`/`height` attributes
pub fn page_size_points(svg: &str) -> (f64, f64) {
    let size = |name: &str| root_attribute(svg, name).map_or(DEFAULT_PAGE_POINTS, parse_size_to_points);
    (size("width"), size("height"))
}

/// Pixel size for a page at `dpi`
pub fn pixel_size(width_pts: f64, height_pts: f64, dpi: f64) -> (u32, u32) {
    let px = |pts: f64| (pts * dpi / POINTS_PER_INCH).round().max(0.0) as u32;
    (px(width_pts), px(height_pts))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn units() {
        assert!((parse_size_to_points("25.4mm") - 72.0).abs() < EPS);
        assert!((parse_size_to_points("8.5in") - 612.0).abs() < EPS);
        assert!((parse_size_to_points("100pt") - 100.0).abs() < EPS);
        assert!((parse_size_to_points("96px") - 72.0).abs() < EPS);
        assert!((parse_size_to_points("96") - 96.0).abs() < EPS);
    }

    #[test]
    fn garbage_falls_back_to_letter_width() {
        assert_eq!(parse_size_to_points("wide"), DEFAULT_PAGE_POINTS);
        assert_eq!(parse_size_to_points(""), DEFAULT_PAGE_POINTS);
    }

    #[test]
    fn reads_root_size() {
        let svg = r#"<svg height="275mm" viewBox="0 0 212.5 275" width="212.5mm" xmlns="http://www.w3.org/2000/svg"><g width="1in"/></svg>"#;
        assert_eq!(root_attribute(svg, "width"), Some("212.5mm"));
        let (w, h) = page_size_points(svg);
        assert!((w - 212.5 * 72.0 / 25.4).abs() < EPS);
        assert!((h - 275.0 * 72.0 / 25.4).abs() < EPS);
    }

    #[test]
    fn missing_size_is_letter_width() {
        assert_eq!(page_size_points("<svg></svg>"), (612.0, 612.0));
    }

    #[test]
    fn pixels_at_150_dpi() {
        assert_eq!(pixel_size(612.0, 792.0, 150.0), (1275, 1650));
    }
}
