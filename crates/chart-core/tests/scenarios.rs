// File: crates/chart-core/tests/scenarios.rs
// Purpose: End-to-end chart behavior over small week datasets, including hover flows.

use chart_core::hover::{HoverController, HoverState, PointerEvent};
use chart_core::{ChartError, ChartScales, DataPoint, Dataset, PlotConfig, Point, ProgressChart};

fn week(tue_comparison: Option<f64>) -> Dataset {
    let mut tue = DataPoint::new("Tue", 5500.0);
    tue.comparison_value = tue_comparison;
    Dataset::new(vec![DataPoint::new("Mon", 1500.0), tue, DataPoint::new("Wed", 1500.0)])
}

#[test]
fn primary_only_week() {
    let cfg = PlotConfig::default();
    let data = week(None);
    let s = ChartScales::try_new(&data, &cfg).expect("valid week");
    assert_eq!(s.max_value(), 5500.0);
    assert_eq!(s.scale_y(5500.0), cfg.plot_top());
    let y_low = s.scale_y(1500.0);
    assert!(y_low > cfg.plot_top() + (cfg.baseline() - cfg.plot_top()) * 0.5);
    assert!(y_low < cfg.baseline());

    let frame = ProgressChart::new(data).frame(&HoverState::Idle).unwrap();
    assert!(frame.comparison.is_none());
    assert!(frame.comparison_markers.is_empty());
    let svg = ProgressChart::new(week(None)).render_svg(&HoverState::Idle).unwrap();
    assert!(!svg.contains("comparison"));
}

#[test]
fn comparison_sets_the_maximum() {
    let data = week(Some(6800.0));
    let s = ChartScales::try_new(&data, &PlotConfig::default()).unwrap();
    assert_eq!(s.max_value(), 6800.0);

    let frame = ProgressChart::new(data).frame(&HoverState::Idle).unwrap();
    assert!(frame.comparison.is_some());
    let primary = frame.markers[1].center;
    let comparison = frame.comparison_markers[0].center;
    assert_eq!(frame.comparison_markers[0].index, 1);
    assert_eq!(primary.x, comparison.x);
    assert!(comparison.y < primary.y);
}

#[test]
fn hover_enter_then_leave() {
    let chart = ProgressChart::new(week(Some(6800.0)));
    let mut hover = HoverController::new();
    let at = Point::new(297.0, 60.0);
    assert!(hover.handle(PointerEvent::Enter { index: 2, at }));
    assert_eq!(hover.state(), HoverState::Hovering { index: 2, pointer: at });

    let frame = chart.frame(&hover.state()).unwrap();
    let tip = frame.tooltip.expect("tooltip while hovering");
    assert_eq!(tip.index, 2);
    assert_eq!(tip.primary, "1,500m");
    assert_eq!(tip.comparison, None);
    assert_eq!(tip.top, 0.0);

    hover.handle(PointerEvent::Leave { index: 2 });
    assert_eq!(hover.state().active_index(), None);
    let frame = chart.frame(&hover.state()).unwrap();
    assert!(frame.tooltip.is_none());
    assert!(frame.hover_line.is_none());
}

#[test]
fn hit_test_feeds_the_controller() {
    let data = week(None);
    let s = ChartScales::try_new(&data, &PlotConfig::default()).unwrap();
    let near_wed = Point::new(s.scale_x(2) - 5.0, s.scale_y(1500.0) + 5.0);
    let mut hover = HoverController::new();
    if let Some(index) = s.hit_test(&data, near_wed) {
        hover.handle(PointerEvent::Move { index, at: near_wed });
    }
    assert_eq!(hover.state().active_index(), Some(2));
}

#[test]
fn single_point_is_rejected() {
    let data = Dataset::new(vec![DataPoint::new("Mon", 1500.0)]);
    let err = ChartScales::try_new(&data, &PlotConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDataset { len: 1 }));
    assert!(ProgressChart::new(data).render_svg(&HoverState::Idle).is_err());
}

#[test]
fn all_zero_is_rejected() {
    let data = Dataset::new(vec![
        DataPoint::new("Mon", 0.0).with_comparison(0.0),
        DataPoint::new("Tue", 0.0),
    ]);
    let err = ProgressChart::new(data).frame(&HoverState::Idle).unwrap_err();
    assert!(matches!(err, ChartError::ZeroMaximum));
}

#[test]
fn partial_comparison_is_zero_in_path_without_marker() {
    let data = Dataset::new(vec![
        DataPoint::new("Mon", 1000.0).with_comparison(2000.0),
        DataPoint::new("Tue", 1000.0),
    ]);
    let frame = ProgressChart::new(data).frame(&HoverState::Idle).unwrap();
    let layer = frame.comparison.expect("comparison layer");
    assert!(layer.line.ends_with("L 297 73"));
    assert_eq!(frame.comparison_markers.len(), 1);
}
