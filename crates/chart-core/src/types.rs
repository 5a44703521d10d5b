// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, paddings, points, plot layout).

use num_format::Locale;

/// Default logical chart width.
pub const WIDTH: f64 = 326.0;
/// Default logical chart height (plot area plus padding, without the X label strip).
pub const HEIGHT: f64 = 100.0;
/// Extra space below the chart reserved for X-axis labels.
pub const AXIS_LABEL_MARGIN: f64 = 20.0;

/// Screen margins around the plot area, in chart units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(24.0, 29.0, 16.0, 27.0)
    }
}

/// A position in chart-local coordinates (origin at the top-left of the drawing).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Fixed layout constants for one render. Not derived from data.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    /// Y tick labels, laid out evenly from the plot top down to the baseline in list order.
    pub y_tick_labels: Vec<String>,
    /// X of the Y tick label column.
    pub y_label_x: f64,
    pub axis_label_margin: f64,
    pub hit_radius: f64,
    pub marker_radius: f64,
    pub marker_radius_hovered: f64,
    pub marker_stroke: f64,
    pub marker_stroke_hovered: f64,
    /// Upward shift of the tooltip relative to the pointer.
    pub tooltip_offset: f64,
    /// Suffix appended to tooltip values.
    pub unit: String,
    pub locale: Locale,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            y_tick_labels: ["0", "2k", "4k", "6k", "8k"].iter().map(|s| s.to_string()).collect(),
            y_label_x: 10.0,
            axis_label_margin: AXIS_LABEL_MARGIN,
            hit_radius: 15.0,
            marker_radius: 4.0,
            marker_radius_hovered: 5.0,
            marker_stroke: 2.0,
            marker_stroke_hovered: 2.5,
            tooltip_offset: 60.0,
            unit: "m".to_string(),
            locale: Locale::en,
        }
    }
}

impl PlotConfig {
    pub fn plot_width(&self) -> f64 { self.width - self.insets.hsum() }
    pub fn plot_height(&self) -> f64 { self.height - self.insets.vsum() }
    /// Full height of the drawing surface including the X label strip.
    pub fn surface_height(&self) -> f64 { self.height + self.axis_label_margin }

    pub fn plot_left(&self) -> f64 { self.insets.left }
    pub fn plot_right(&self) -> f64 { self.width - self.insets.right }
    pub fn plot_top(&self) -> f64 { self.insets.top }
    /// Y of value zero; closes area fills.
    pub fn baseline(&self) -> f64 { self.insets.top + self.plot_height() }
}
