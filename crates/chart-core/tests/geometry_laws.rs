// File: crates/chart-core/tests/geometry_laws.rs
// Purpose: Property checks for scale endpoints, path shape and purity.

use chart_core::geometry::{area_path, line_path};
use chart_core::{ChartScales, DataPoint, Dataset, PlotConfig};
use proptest::prelude::*;

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec((0.0f64..10_000.0, prop::option::of(0.0f64..10_000.0)), 2..12)
        .prop_filter("needs a positive value", |rows| rows.iter().any(|(v, c)| *v > 0.0 || c.unwrap_or(0.0) > 0.0))
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (value, comparison_value))| DataPoint { label: format!("d{i}"), value, comparison_value })
                .collect()
        })
}

proptest! {
    #[test]
    fn scale_endpoints(data in dataset()) {
        let cfg = PlotConfig::default();
        let s = ChartScales::try_new(&data, &cfg).unwrap();
        let n = data.len();
        prop_assert!((s.scale_y(0.0) - cfg.baseline()).abs() < 1e-9);
        prop_assert!((s.scale_y(s.max_value()) - cfg.plot_top()).abs() < 1e-9);
        prop_assert!((s.scale_x(0) - cfg.plot_left()).abs() < 1e-9);
        prop_assert!((s.scale_x(n - 1) - cfg.plot_right()).abs() < 1e-9);
    }

    #[test]
    fn values_stay_inside_plot(data in dataset()) {
        let cfg = PlotConfig::default();
        let s = ChartScales::try_new(&data, &cfg).unwrap();
        for p in data.points() {
            let y = s.scale_y(p.value);
            prop_assert!(y >= cfg.plot_top() - 1e-9 && y <= cfg.baseline() + 1e-9);
        }
    }

    #[test]
    fn x_spacing_is_uniform(data in dataset()) {
        let s = ChartScales::try_new(&data, &PlotConfig::default()).unwrap();
        let step = s.scale_x(1) - s.scale_x(0);
        for i in 1..data.len() {
            prop_assert!((s.scale_x(i) - s.scale_x(i - 1) - step).abs() < 1e-9);
        }
    }

    #[test]
    fn area_extends_line(data in dataset()) {
        let cfg = PlotConfig::default();
        let s = ChartScales::try_new(&data, &cfg).unwrap();
        let values: Vec<f64> = data.points().iter().map(|p| p.value).collect();
        let line = line_path(&s, &values);
        let area = area_path(&s, &values);
        prop_assert!(area.starts_with(&line));
        let tail = format!(
            " L {} {} L {} {} Z",
            s.scale_x(values.len() - 1), cfg.baseline(), s.scale_x(0), cfg.baseline()
        );
        prop_assert_eq!(&area[line.len()..], tail.as_str());
        prop_assert_eq!(line.matches('M').count(), 1);
        prop_assert_eq!(line.matches('L').count(), values.len() - 1);
    }

    #[test]
    fn paths_are_pure(data in dataset()) {
        let s = ChartScales::try_new(&data, &PlotConfig::default()).unwrap();
        let values: Vec<f64> = data.points().iter().map(|p| p.value).collect();
        prop_assert_eq!(line_path(&s, &values), line_path(&s, &values));
        prop_assert_eq!(area_path(&s, &values), area_path(&s, &values));
    }
}
