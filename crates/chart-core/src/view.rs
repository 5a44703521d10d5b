// File: crates/chart-core/src/view.rs
// Surface-to-chart coordinate transform supplied by the host for pointer events.

use crate::geometry::Rect;
use crate::types::{PlotConfig, Point};

/// Maps host pointer positions (viewport/client pixels) into chart-local
/// coordinates. `surface` is where the chart is drawn on the host, `logical_*`
/// is the chart's own coordinate size (the SVG viewBox).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    pub surface: Rect,
    pub logical_width: f64,
    pub logical_height: f64,
}

impl SurfaceTransform {
    pub fn new(surface: Rect, config: &PlotConfig) -> Self {
        Self {
            surface,
            logical_width: config.width,
            logical_height: config.surface_height(),
        }
    }

    /// Surface drawn at the origin at its logical size.
    pub fn identity(config: &PlotConfig) -> Self {
        Self::new(Rect::from_ltwh(0.0, 0.0, config.width, config.surface_height()), config)
    }

    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        let sx = self.logical_width / self.surface.width().max(1.0);
        let sy = self.logical_height / self.surface.height().max(1.0);
        Point::new((client_x - self.surface.left) * sx, (client_y - self.surface.top) * sy)
    }
}
