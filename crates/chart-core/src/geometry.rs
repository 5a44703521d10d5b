// File: crates/chart-core/src/geometry.rs
// Summary: Path builders for series lines and area fills, plus small rect helpers.

use std::fmt::Write as _;

use crate::scale::ChartScales;

/// Axis-aligned rectangle in floating point units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Polyline through `(x(i), y(values[i]))`: `M x y L x y ...`.
pub fn line_path(scales: &ChartScales, values: &[f64]) -> String {
    let mut d = String::with_capacity(values.len() * 16);
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        // Writing into a String cannot fail.
        let _ = write!(d, "{cmd} {} {}", scales.scale_x(i), scales.scale_y(v));
    }
    d
}

/// The line path closed down to the baseline at the last X, then the first X.
pub fn area_path(scales: &ChartScales, values: &[f64]) -> String {
    let mut d = line_path(scales, values);
    if values.is_empty() {
        return d;
    }
    let base = scales.baseline();
    let first_x = scales.scale_x(0);
    let last_x = scales.scale_x(values.len() - 1);
    let _ = write!(d, " L {last_x} {base} L {first_x} {base} Z");
    d
}
