// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip overlay model derived from the dataset and hover state.

use tracing::warn;

use crate::hover::HoverState;
use crate::series::Dataset;
use crate::text::format_value;
use crate::types::PlotConfig;

/// Overlay anchored near the pointer, lifted by `PlotConfig::tooltip_offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    /// Pointer X in chart-local units.
    pub left: f64,
    /// Pointer Y minus the offset, in chart-local units.
    pub top: f64,
    pub primary: String,
    pub comparison: Option<String>,
}

impl Tooltip {
    /// `None` while idle or when the hovered index is stale for `data`.
    pub fn from_hover(data: &Dataset, hover: &HoverState, config: &PlotConfig) -> Option<Self> {
        let HoverState::Hovering { index, pointer } = *hover else {
            return None;
        };
        let Some(point) = data.get(index) else {
            warn!(index, len = data.len(), "hover index outside dataset; tooltip skipped");
            return None;
        };
        Some(Self {
            index,
            left: pointer.x,
            top: pointer.y - config.tooltip_offset,
            primary: format_value(point.value, &config.unit, &config.locale),
            comparison: point
                .shown_comparison()
                .map(|v| format_value(v, &config.unit, &config.locale)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DataPoint;
    use crate::types::Point;

    #[test]
    fn idle_has_no_tooltip() {
        let data = Dataset::new(vec![DataPoint::new("Mon", 1.0), DataPoint::new("Tue", 2.0)]);
        assert_eq!(Tooltip::from_hover(&data, &HoverState::Idle, &PlotConfig::default()), None);
    }

    #[test]
    fn lifted_above_pointer_with_both_values() {
        let data = Dataset::new(vec![
            DataPoint::new("Mon", 1500.0),
            DataPoint::new("Tue", 5500.0).with_comparison(6800.0),
        ]);
        let hover = HoverState::Hovering { index: 1, pointer: Point::new(150.0, 70.0) };
        let t = Tooltip::from_hover(&data, &hover, &PlotConfig::default()).unwrap();
        assert_eq!((t.left, t.top), (150.0, 10.0));
        assert_eq!(t.primary, "5,500m");
        assert_eq!(t.comparison.as_deref(), Some("6,800m"));
    }

    #[test]
    fn stale_index_is_ignored() {
        let data = Dataset::new(vec![DataPoint::new("Mon", 1.0), DataPoint::new("Tue", 2.0)]);
        let hover = HoverState::Hovering { index: 5, pointer: Point::default() };
        assert!(Tooltip::from_hover(&data, &hover, &PlotConfig::default()).is_none());
    }
}
