// File: crates/chart-core/src/series.rs
// Summary: Dataset model: one primary and one optional comparison value per time bucket.

use serde::Deserialize;

use crate::error::{ChartError, Result};

/// Which of the two overlaid value sequences a path or marker belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Primary,
    Comparison,
}

impl SeriesKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            SeriesKind::Primary => "primary",
            SeriesKind::Comparison => "comparison",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DataPoint {
    #[serde(alias = "day")]
    pub label: String,
    pub value: f64,
    #[serde(default, alias = "comparisonValue")]
    pub comparison_value: Option<f64>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, comparison_value: None }
    }

    pub fn with_comparison(mut self, value: f64) -> Self {
        self.comparison_value = Some(value);
        self
    }

    /// Comparison value when it should be shown; zero counts as absent.
    pub fn shown_comparison(&self) -> Option<f64> {
        self.comparison_value.filter(|v| *v != 0.0)
    }
}

/// Ordered sequence of points. Order is plotting order and is never sorted here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn get(&self, index: usize) -> Option<&DataPoint> { self.points.get(index) }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// Largest primary or defined comparison value; `None` when empty.
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.value.max(p.comparison_value.unwrap_or(0.0)))
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }

    /// True when at least one point carries a non-zero comparison value.
    pub fn has_comparison(&self) -> bool {
        self.points.iter().any(|p| p.shown_comparison().is_some())
    }

    pub fn values(&self, kind: SeriesKind) -> Vec<f64> {
        match kind {
            SeriesKind::Primary => self.points.iter().map(|p| p.value).collect(),
            // Missing comparison values keep the path continuous at zero.
            SeriesKind::Comparison => {
                self.points.iter().map(|p| p.comparison_value.unwrap_or(0.0)).collect()
            }
        }
    }

    /// Check the preconditions for scaling: two or more points, finite
    /// non-negative values, and a positive maximum. Returns the maximum.
    pub fn validate(&self) -> Result<f64> {
        if self.points.len() < 2 {
            return Err(ChartError::DegenerateDataset { len: self.points.len() });
        }
        for (index, p) in self.points.iter().enumerate() {
            let ok = |v: f64| v.is_finite() && v >= 0.0;
            if !ok(p.value) || !p.comparison_value.map_or(true, ok) {
                return Err(ChartError::InvalidValue { index });
            }
        }
        match self.max_value() {
            Some(max) if max > 0.0 => Ok(max),
            _ => Err(ChartError::ZeroMaximum),
        }
    }
}

impl From<Vec<DataPoint>> for Dataset {
    fn from(points: Vec<DataPoint>) -> Self { Self::new(points) }
}

impl FromIterator<DataPoint> for Dataset {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
