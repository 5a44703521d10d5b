// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; dataset model, chart geometry, hover interaction and markup output.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod scale;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;
pub mod widgets;

pub use chart::{ChartFrame, ProgressChart};
pub use error::ChartError;
pub use hover::{HoverController, HoverState, PointerEvent};
pub use scale::ChartScales;
pub use series::{DataPoint, Dataset, SeriesKind};
pub use theme::Theme;
pub use tooltip::Tooltip;
pub use types::{Insets, PlotConfig, Point};
pub use view::SurfaceTransform;
pub use widgets::{AthleteCard, Card};
