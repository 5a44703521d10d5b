// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Renders deterministic charts to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::hover::HoverState;
use chart_core::{DataPoint, Point, ProgressChart};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, svg: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), svg.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(&path).expect("read snapshot");
        assert_eq!(svg, want, "SVG differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn week_chart() -> ProgressChart {
    ProgressChart::new(vec![
        DataPoint::new("Mon", 1500.0),
        DataPoint::new("Tue", 5500.0).with_comparison(6800.0),
        DataPoint::new("Wed", 3200.0).with_comparison(2100.0),
        DataPoint::new("Thu", 4100.0),
        DataPoint::new("Fri", 2500.0).with_comparison(3900.0),
    ])
}

#[test]
fn golden_week_idle() {
    let svg = week_chart().render_svg(&HoverState::Idle).expect("render svg");
    write_or_compare("week_idle.svg", &svg);
}

#[test]
fn golden_week_hovered() {
    let hover = HoverState::Hovering { index: 1, pointer: Point::new(158.0, 20.0) };
    let svg = week_chart().render_svg(&hover).expect("render svg");
    write_or_compare("week_hovered.svg", &svg);
}

#[test]
fn golden_files_are_committed() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    for name in ["week_idle.svg", "week_hovered.svg"] {
        let text = std::fs::read_to_string(dir.join(name)).expect("snapshot is committed");
        assert!(text.starts_with("<svg ") && text.ends_with("</svg>"), "{name} is not a bare svg document");
    }
    let hovered = std::fs::read_to_string(dir.join("week_hovered.svg")).unwrap();
    // Paint order: comparison under primary, markers, guide line, tooltip on top.
    let order = ["chart-area comparison", "chart-area primary", "data-point hovered", "hover-line", "chart-tooltip"];
    let at: Vec<usize> = order.iter().map(|c| hovered.find(c).expect(c)).collect();
    assert!(at.windows(2).all(|w| w[0] < w[1]), "unexpected paint order: {at:?}");
    assert!(hovered.contains(">5,500m</text>") && hovered.contains(">6,800m</text>"));
}

#[test]
fn rendering_is_deterministic() {
    let hover = HoverState::Hovering { index: 3, pointer: Point::new(220.0, 40.0) };
    let a = week_chart().render_svg(&hover).unwrap();
    let b = week_chart().render_svg(&hover).unwrap();
    assert_eq!(a, b);
}

#[test]
fn render_to_svg_writes_file() {
    let out = std::path::PathBuf::from("target/test_out/week.svg");
    week_chart().render_to_svg(&HoverState::Idle, &out).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("output exists");
    assert!(text.starts_with("<svg "));
    assert!(text.ends_with("</svg>"));
}
