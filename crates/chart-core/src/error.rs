// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for datasets that cannot be scaled.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Horizontal spacing is `index / (len - 1)`; undefined below two points.
    #[error("dataset has {len} point(s); at least 2 are required to space the X axis")]
    DegenerateDataset { len: usize },
    /// Every primary and comparison value is zero, so vertical scaling divides by zero.
    #[error("dataset maximum is zero; vertical scale is undefined")]
    ZeroMaximum,
    #[error("value at index {index} is negative or not finite")]
    InvalidValue { index: usize },
    #[error("failed to write chart output")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
