//! Rasterize ringcal SVG pages to PNG with resvg.

use std::path::{Path, PathBuf};

use ringcal::raster::{RasterPage, SvgRenderer, page_size_points, pixel_size};
use thiserror::Error;
use tracing::debug;

/// Output resolution used by the print pipeline
pub const DEFAULT_DPI: f64 = 150.0;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(String),

    #[error("failed to load font {path}: {source}")]
    Font {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// [`SvgRenderer`] backed by resvg.
///
/// Pages are scaled so their pixel width matches the physical width at
/// `dpi`; height follows the SVG's aspect ratio. The background is white.
#[derive(Debug, Clone)]
pub struct ResvgRenderer {
    pub dpi: f64,
    pub load_system_fonts: bool,
    /// Extra font file, for hosts without the label fonts installed
    pub font_file: Option<PathBuf>,
}

impl Default for ResvgRenderer {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            load_system_fonts: true,
            font_file: None,
        }
    }
}

impl ResvgRenderer {
    pub fn new(dpi: f64) -> Self {
        Self {
            dpi,
            ..Self::default()
        }
    }

    pub fn without_system_fonts(mut self) -> Self {
        self.load_system_fonts = false;
        self
    }

    pub fn with_font_file(mut self, path: impl AsRef<Path>) -> Self {
        self.font_file = Some(path.as_ref().to_path_buf());
        self
    }

    fn options(&self) -> Result<usvg::Options<'static>, RasterError> {
        let mut options = usvg::Options::default();
        if self.load_system_fonts {
            options.fontdb_mut().load_system_fonts();
        }
        if let Some(path) = &self.font_file {
            options
                .fontdb_mut()
                .load_font_file(path)
                .map_err(|source| RasterError::Font {
                    path: path.clone(),
                    source,
                })?;
        }
        Ok(options)
    }
}

impl SvgRenderer for ResvgRenderer {
    type Error = RasterError;

    fn render(&self, svg: &str) -> Result<RasterPage, RasterError> {
        let (width_pts, height_pts) = page_size_points(svg);
        let (target_width, _) = pixel_size(width_pts, height_pts, self.dpi);

        let options = self.options()?;
        let tree = usvg::Tree::from_str(svg, &options)?;

        let svg_size = tree.size();
        let scale = target_width as f32 / svg_size.width();
        let width = (svg_size.width() * scale).round() as u32;
        let height = (svg_size.height() * scale).ceil() as u32;

        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(RasterError::EmptyCanvas { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = tiny_skia::Transform::from_scale(scale, scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let png = pixmap.encode_png().map_err(|e| RasterError::Encode(e.to_string()))?;
        debug!(width, height, bytes = png.len(), "rasterized page");

        Ok(RasterPage {
            png,
            width_px: width,
            height_px: height,
            width_pts,
            height_pts,
        })
    }
}
