// File: crates/chart-core/src/axis.rs
// Summary: Axis tick layout: fixed Y value bands and one X label per data point.

use crate::scale::ChartScales;
use crate::series::Dataset;
use crate::types::PlotConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        }
    }
}

/// A positioned axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Y labels spread evenly from the plot top to the baseline in list order,
/// nudged down by 3 units to sit on their grid row.
pub fn y_ticks(config: &PlotConfig) -> Vec<Tick> {
    let labels = &config.y_tick_labels;
    let rows = match labels.len() {
        0 => Vec::new(),
        1 => vec![config.plot_top()],
        n => linspace(config.plot_top(), config.baseline(), n),
    };
    labels
        .iter()
        .zip(rows)
        .map(|(label, y)| Tick {
            label: label.clone(),
            x: config.y_label_x,
            y: y + 3.0,
            anchor: TextAnchor::Start,
        })
        .collect()
}

/// One centered label per point, 20 units under the baseline.
pub fn x_ticks(data: &Dataset, scales: &ChartScales) -> Vec<Tick> {
    let y = scales.baseline() + 20.0;
    data.points()
        .iter()
        .enumerate()
        .map(|(i, p)| Tick {
            label: p.label.clone(),
            x: scales.scale_x(i),
            y,
            anchor: TextAnchor::Middle,
        })
        .collect()
}
