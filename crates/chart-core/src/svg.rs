// File: crates/chart-core/src/svg.rs
// Summary: Serializes a ChartFrame to SVG markup.

use std::fmt::Write as _;

use crate::axis::Tick;
use crate::chart::{ChartFrame, LineSegment, Marker, SeriesLayer};
use crate::series::SeriesKind;
use crate::text::escape;
use crate::theme::Theme;
use crate::tooltip::Tooltip;

const FONT: &str = "font-family=\"sans-serif\" font-size=\"10\"";
const TOOLTIP_LINE_HEIGHT: f64 = 16.0;
const TOOLTIP_CHAR_WIDTH: f64 = 7.0;

/// Where the hover tooltip goes when one is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipPlacement {
    /// Drawn as an SVG group on top of the chart (standalone files, raster output).
    Inline,
    /// Left out; the host draws it as an HTML overlay.
    Omit,
}

/// Standalone SVG document with the tooltip drawn inline.
pub fn document(frame: &ChartFrame, theme: &Theme) -> String {
    let mut out = String::with_capacity(4096);
    write_svg(&mut out, frame, theme, TooltipPlacement::Inline);
    out
}

/// Append the `<svg>` element for `frame` to `out`.
pub fn write_svg(out: &mut String, frame: &ChartFrame, theme: &Theme, tooltip: TooltipPlacement) {
    // fmt::Write into a String is infallible; results are ignored throughout.
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.width,
        h = frame.height,
    );

    out.push_str(r#"<g class="y-axis">"#);
    for t in &frame.y_ticks {
        tick(out, t, theme);
    }
    out.push_str("</g>");

    line(out, &frame.axis_line, "axis-line", &theme.axis_line.to_string(), 1.0);

    out.push_str(r#"<g class="x-axis">"#);
    for t in &frame.x_ticks {
        tick(out, t, theme);
    }
    out.push_str("</g>");

    if let Some(c) = &frame.comparison {
        layer(out, c, theme);
    }
    layer(out, &frame.primary, theme);

    for (hit, marker) in frame.hit_regions.iter().zip(&frame.markers) {
        out.push_str("<g>");
        let _ = write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="transparent" class="hover-area" data-index="{}"/>"#,
            hit.center.x, hit.center.y, hit.radius, hit.index,
        );
        point(out, marker, theme);
        out.push_str("</g>");
    }
    for m in &frame.comparison_markers {
        point(out, m, theme);
    }

    if let Some(h) = &frame.hover_line {
        line(out, h, "hover-line", &theme.hover_line.to_string(), 1.0);
    }
    if let (Some(t), TooltipPlacement::Inline) = (&frame.tooltip, tooltip) {
        inline_tooltip(out, t, theme);
    }
    out.push_str("</svg>");
}

// ---- helpers ----------------------------------------------------------------

fn tick(out: &mut String, t: &Tick, theme: &Theme) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" class="axis-label" text-anchor="{}" fill="{}" {FONT}>{}</text>"#,
        t.x,
        t.y,
        t.anchor.as_str(),
        theme.axis_label,
        escape(&t.label),
    );
}

fn line(out: &mut String, l: &LineSegment, class: &str, stroke: &str, width: f64) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" class="{class}" stroke="{stroke}" stroke-width="{width}"/>"#,
        l.x1, l.y1, l.x2, l.y2,
    );
}

fn layer(out: &mut String, l: &SeriesLayer, theme: &Theme) {
    let (stroke, fill, width) = match l.kind {
        SeriesKind::Primary => (theme.primary_stroke, theme.primary_fill, theme.primary_width),
        SeriesKind::Comparison => {
            (theme.comparison_stroke, theme.comparison_fill, theme.comparison_width)
        }
    };
    let class = l.kind.css_class();
    let _ = write!(out, r#"<path d="{}" class="chart-area {class}" fill="{fill}"/>"#, l.area);
    let _ = write!(
        out,
        r#"<path d="{}" class="chart-line {class}" stroke="{stroke}" stroke-width="{width}" fill="none"/>"#,
        l.line,
    );
}

fn point(out: &mut String, m: &Marker, theme: &Theme) {
    let (stroke, class) = match m.kind {
        SeriesKind::Primary if m.hovered => (theme.primary_stroke, "data-point hovered"),
        SeriesKind::Primary => (theme.primary_stroke, "data-point"),
        SeriesKind::Comparison => (theme.comparison_stroke, "data-point comparison"),
    };
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" class="{class}" fill="{}" stroke="{stroke}" stroke-width="{}"/>"#,
        m.center.x, m.center.y, m.radius, theme.marker_fill, m.stroke_width,
    );
}

fn inline_tooltip(out: &mut String, t: &Tooltip, theme: &Theme) {
    let lines: Vec<(&str, &str)> = std::iter::once((t.primary.as_str(), "primary"))
        .chain(t.comparison.as_deref().map(|c| (c, "comparison")))
        .collect();
    let chars = lines.iter().map(|(s, _)| s.chars().count()).max().unwrap_or(0);
    let w = chars as f64 * TOOLTIP_CHAR_WIDTH + 16.0;
    let h = lines.len() as f64 * TOOLTIP_LINE_HEIGHT + 8.0;
    let x = t.left - w / 2.0;

    let _ = write!(out, r#"<g class="chart-tooltip" data-index="{}">"#, t.index);
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{}" width="{w}" height="{h}" rx="4" fill="{}"/>"#,
        t.top, theme.tooltip_background,
    );
    for (row, (text, class)) in lines.iter().enumerate() {
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" class="tooltip-value {class}" text-anchor="middle" fill="{}" font-family="sans-serif" font-size="12">{}</text>"#,
            t.left,
            t.top + TOOLTIP_LINE_HEIGHT * (row as f64 + 1.0),
            theme.tooltip_text,
            escape(text),
        );
    }
    out.push_str("</g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ProgressChart;
    use crate::hover::HoverState;
    use crate::series::DataPoint;
    use crate::types::Point;

    #[test]
    fn omitted_tooltip_is_not_drawn() {
        let chart = ProgressChart::new(vec![DataPoint::new("Mon", 1.0), DataPoint::new("Tue", 2.0)]);
        let hover = HoverState::Hovering { index: 0, pointer: Point::new(30.0, 70.0) };
        let frame = chart.frame(&hover).unwrap();
        let mut out = String::new();
        write_svg(&mut out, &frame, &chart.theme, TooltipPlacement::Omit);
        assert!(out.contains("hover-line"));
        assert!(!out.contains("chart-tooltip"));
        assert!(document(&frame, &chart.theme).contains(r#"class="chart-tooltip""#));
    }

    #[test]
    fn labels_are_escaped() {
        let chart = ProgressChart::new(vec![DataPoint::new("<a>", 1.0), DataPoint::new("b&c", 2.0)]);
        let doc = chart.render_svg(&HoverState::Idle).unwrap();
        assert!(doc.contains("&lt;a&gt;"));
        assert!(doc.contains("b&amp;c"));
    }
}
