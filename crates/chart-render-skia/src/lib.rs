// File: crates/chart-render-skia/src/lib.rs
// Summary: Rasterizes progress chart SVG through Skia's SVG DOM into PNG bytes or RGBA buffers.

use std::path::Path;

use chart_core::hover::HoverState;
use chart_core::theme::Color;
use chart_core::{ChartError, ProgressChart};
use skia_safe as skia;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("failed to create a {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("skia could not load the chart SVG: {0}")]
    SvgLoad(String),
    #[error("encode PNG failed")]
    Encode,
    #[error("reading surface pixels failed")]
    ReadPixels,
    #[error("failed to write raster output")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RasterError>;

pub struct RasterOptions {
    /// Device pixels per chart unit.
    pub scale: f32,
    /// Fill behind the chart; `None` uses the chart theme's background.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 2.0, background: None }
    }
}

/// RGBA8 pixels with their dimensions and row stride in bytes.
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
    pub stride: usize,
}

pub struct SkiaRenderer {
    font_mgr: skia::FontMgr,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { font_mgr: skia::FontMgr::default() }
    }

    fn draw(&self, chart: &ProgressChart, hover: &HoverState, opts: &RasterOptions) -> Result<skia::Surface> {
        let svg = chart.render_svg(hover)?;
        let cfg = &chart.config;
        let scale = opts.scale.max(0.1);
        let width = (cfg.width as f32 * scale).ceil() as i32;
        let height = (cfg.surface_height() as f32 * scale).ceil() as i32;

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RasterError::Surface(width, height))?;
        let mut dom = skia::svg::Dom::from_str(&svg, self.font_mgr.clone())
            .map_err(|e| RasterError::SvgLoad(format!("{e:?}")))?;
        dom.set_container_size((cfg.width as f32, cfg.surface_height() as f32));

        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.background.unwrap_or(chart.theme.background)));
        canvas.scale((scale, scale));
        dom.render(canvas);
        debug!(width, height, hovered = ?hover.active_index(), "rasterized chart");
        Ok(surface)
    }

    /// Render the chart to PNG bytes.
    pub fn render_to_png_bytes(&self, chart: &ProgressChart, hover: &HoverState, opts: &RasterOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw(chart, hover, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RasterError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG file at `path`, creating parent directories.
    pub fn render_to_png(
        &self,
        chart: &ProgressChart,
        hover: &HoverState,
        opts: &RasterOptions,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart, hover, opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render the chart into an unpremultiplied RGBA8 buffer.
    pub fn render_to_rgba8(&self, chart: &ProgressChart, hover: &HoverState, opts: &RasterOptions) -> Result<RgbaImage> {
        let mut surface = self.draw(chart, hover, opts)?;
        let (width, height) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RasterError::ReadPixels);
        }
        Ok(RgbaImage { pixels, width, height, stride })
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}
