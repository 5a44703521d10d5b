// File: crates/chart-core/src/chart.rs
// Summary: ProgressChart and its per-render frame: every drawable element as plain data.

use std::path::Path;

use tracing::{debug, warn};

use crate::axis::{self, Tick};
use crate::error::Result;
use crate::geometry::{area_path, line_path};
use crate::hover::HoverState;
use crate::scale::ChartScales;
use crate::series::{Dataset, SeriesKind};
use crate::svg;
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::types::{PlotConfig, Point};

pub const DEFAULT_LABEL: &str = "This is a label";

/// Time-series progress chart: a primary series, an optional comparison series,
/// and a hover overlay.
#[derive(Clone, Debug)]
pub struct ProgressChart {
    pub data: Dataset,
    pub label: Option<String>,
    pub config: PlotConfig,
    pub theme: Theme,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Filled area and stroke path for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLayer {
    pub kind: SeriesKind,
    pub area: String,
    pub line: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub kind: SeriesKind,
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub hovered: bool,
}

/// Invisible pointer target layered above a primary marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegion {
    pub index: usize,
    pub center: Point,
    pub radius: f64,
}

/// Everything one render draws, in paint order. Pure function of
/// (dataset, config, hover).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub y_ticks: Vec<Tick>,
    pub axis_line: LineSegment,
    pub x_ticks: Vec<Tick>,
    pub comparison: Option<SeriesLayer>,
    pub primary: SeriesLayer,
    pub hit_regions: Vec<HitRegion>,
    pub markers: Vec<Marker>,
    pub comparison_markers: Vec<Marker>,
    pub hover_line: Option<LineSegment>,
    pub tooltip: Option<Tooltip>,
}

impl ProgressChart {
    pub fn new(data: impl Into<Dataset>) -> Self {
        Self {
            data: data.into(),
            label: Some(DEFAULT_LABEL.to_string()),
            config: PlotConfig::default(),
            theme: Theme::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn scales(&self) -> Result<ChartScales> {
        ChartScales::try_new(&self.data, &self.config)
    }

    /// Lay out every element for `hover`. Fails on datasets that cannot be scaled.
    pub fn frame(&self, hover: &HoverState) -> Result<ChartFrame> {
        let scales = self.scales()?;
        let cfg = &self.config;

        // A stale index (dataset swapped without a reset) renders as idle.
        let hover = match hover.active_index() {
            Some(i) if i >= self.data.len() => {
                warn!(index = i, len = self.data.len(), "ignoring stale hover index");
                HoverState::Idle
            }
            _ => *hover,
        };

        let comparison = self.data.has_comparison().then(|| {
            layer(&scales, SeriesKind::Comparison, &self.data.values(SeriesKind::Comparison))
        });
        let primary = layer(&scales, SeriesKind::Primary, &self.data.values(SeriesKind::Primary));

        let mut hit_regions = Vec::with_capacity(self.data.len());
        let mut markers = Vec::with_capacity(self.data.len());
        for (index, p) in self.data.points().iter().enumerate() {
            let center = scales.point(index, p.value);
            let hovered = hover.is_hovering(index);
            hit_regions.push(HitRegion { index, center, radius: cfg.hit_radius });
            markers.push(Marker {
                index,
                kind: SeriesKind::Primary,
                center,
                radius: if hovered { cfg.marker_radius_hovered } else { cfg.marker_radius },
                stroke_width: if hovered { cfg.marker_stroke_hovered } else { cfg.marker_stroke },
                hovered,
            });
        }

        let comparison_markers = if comparison.is_some() {
            self.data
                .points()
                .iter()
                .enumerate()
                .filter_map(|(index, p)| {
                    let v = p.shown_comparison()?;
                    Some(Marker {
                        index,
                        kind: SeriesKind::Comparison,
                        center: scales.point(index, v),
                        radius: cfg.marker_radius,
                        stroke_width: cfg.marker_stroke,
                        hovered: false,
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        let hover_line = hover.active_index().map(|i| {
            let x = scales.scale_x(i);
            LineSegment { x1: x, y1: cfg.plot_top(), x2: x, y2: cfg.baseline() }
        });

        debug!(points = self.data.len(), hovered = ?hover.active_index(), "laid out chart frame");
        Ok(ChartFrame {
            width: cfg.width,
            height: cfg.surface_height(),
            y_ticks: axis::y_ticks(cfg),
            axis_line: LineSegment {
                x1: cfg.plot_left(),
                y1: cfg.baseline(),
                x2: cfg.plot_right(),
                y2: cfg.baseline(),
            },
            x_ticks: axis::x_ticks(&self.data, &scales),
            comparison,
            primary,
            hit_regions,
            markers,
            comparison_markers,
            hover_line,
            tooltip: Tooltip::from_hover(&self.data, &hover, cfg),
        })
    }

    /// Standalone SVG document for `hover` (tooltip drawn inside the SVG).
    pub fn render_svg(&self, hover: &HoverState) -> Result<String> {
        let frame = self.frame(hover)?;
        Ok(svg::document(&frame, &self.theme))
    }

    /// Write the SVG document to `path`, creating parent directories.
    pub fn render_to_svg(&self, hover: &HoverState, path: impl AsRef<Path>) -> Result<()> {
        let doc = self.render_svg(hover)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, doc)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn layer(scales: &ChartScales, kind: SeriesKind, values: &[f64]) -> SeriesLayer {
    SeriesLayer { kind, area: area_path(scales, values), line: line_path(scales, values) }
}
