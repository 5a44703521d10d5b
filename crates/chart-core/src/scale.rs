// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms built from a validated dataset.

use tracing::debug;

use crate::error::Result;
use crate::series::Dataset;
use crate::types::{PlotConfig, Point};

/// Horizontal scale: uniform spacing of `count` indices across the plot width.
/// Only constructed for `count >= 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub right_px: f64,
    count: usize,
}

impl IndexScale {
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        let t = index as f64 / (self.count - 1) as f64;
        self.left_px + t * (self.right_px - self.left_px)
    }
}

/// Vertical scale mapping `[0, vmax]` to `[bottom_px, top_px]`. `vmax` is always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    vmax: f64,
}

impl ValueScale {
    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        let h = self.bottom_px - self.top_px;
        self.top_px + h - (value / self.vmax) * h
    }
}

/// Both chart scales plus the hit radius used for pointer targeting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: IndexScale,
    pub y: ValueScale,
    hit_radius: f64,
}

impl ChartScales {
    /// Build scales for `data`. Fails for fewer than two points, invalid values,
    /// or a zero maximum, so the mappings below never divide by zero.
    pub fn try_new(data: &Dataset, config: &PlotConfig) -> Result<Self> {
        let vmax = data.validate()?;
        debug!(points = data.len(), vmax, "built chart scales");
        Ok(Self {
            x: IndexScale {
                left_px: config.plot_left(),
                right_px: config.plot_right(),
                count: data.len(),
            },
            y: ValueScale {
                top_px: config.plot_top(),
                bottom_px: config.baseline(),
                vmax,
            },
            hit_radius: config.hit_radius,
        })
    }

    pub fn max_value(&self) -> f64 { self.y.vmax }
    pub fn baseline(&self) -> f64 { self.y.bottom_px }

    #[inline]
    pub fn scale_x(&self, index: usize) -> f64 { self.x.to_px(index) }

    #[inline]
    pub fn scale_y(&self, value: f64) -> f64 { self.y.to_px(value) }

    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.scale_x(index), self.scale_y(value))
    }

    /// Index of the primary point whose hit region contains `p`, preferring the nearest.
    pub fn hit_test(&self, data: &Dataset, p: Point) -> Option<usize> {
        let r2 = self.hit_radius * self.hit_radius;
        data.points()
            .iter()
            .enumerate()
            .map(|(i, dp)| (i, self.point(i, dp.value).distance_sq(p)))
            .filter(|(_, d2)| *d2 <= r2)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}
