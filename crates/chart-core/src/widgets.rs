// File: crates/chart-core/src/widgets.rs
// Summary: HTML markup for the presentational cards and the chart card wrapper.

use std::fmt::Write as _;

use crate::chart::ProgressChart;
use crate::error::Result;
use crate::hover::HoverState;
use crate::svg::{self, TooltipPlacement};
use crate::text::escape;

pub const DEFAULT_AVATAR_URL: &str =
    "https://www.figma.com/api/mcp/asset/86e4a285-5a1f-4827-8317-6e753d72a35d";

/// Content card with a thumbnail block, title, description and a like button.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            title: "Card title".to_string(),
            description: "This is a short description for the card. You can use this space to \
                          explain what the content is about."
                .to_string(),
        }
    }
}

impl Card {
    pub fn render_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="card"><div class="card-thumbnail"></div><div class="card-body">"#,
                r#"<h2 class="card-title">{}</h2><p class="card-description">{}</p>"#,
                r#"<button class="like-button" type="button">♥ Like</button></div></div>"#,
            ),
            escape(&self.title),
            escape(&self.description),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AthleteCard {
    pub name: String,
    pub position: String,
    pub avatar_url: Option<String>,
}

impl AthleteCard {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self { name: name.into(), position: position.into(), avatar_url: None }
    }

    pub fn avatar(&self) -> &str {
        self.avatar_url.as_deref().filter(|u| !u.is_empty()).unwrap_or(DEFAULT_AVATAR_URL)
    }

    pub fn alt_text(&self) -> String {
        format!("{} avatar", self.name)
    }

    pub fn render_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="athlete-card"><img src="{}" alt="{}" class="athlete-avatar"/>"#,
                r#"<div class="athlete-details"><h3 class="athlete-name">{}</h3>"#,
                r#"<p class="athlete-position">{}</p></div></div>"#,
            ),
            escape(self.avatar()),
            escape(&self.alt_text()),
            escape(&self.name),
            escape(&self.position),
        )
    }
}

/// Chart card: the SVG, an HTML tooltip positioned over it, and the label.
pub fn progress_chart_card(chart: &ProgressChart, hover: &HoverState) -> Result<String> {
    let frame = chart.frame(hover)?;
    let mut out = String::with_capacity(4096);
    out.push_str(r#"<div class="chart-card"><div class="chart-container" style="position:relative">"#);
    svg::write_svg(&mut out, &frame, &chart.theme, TooltipPlacement::Omit);
    if let Some(t) = &frame.tooltip {
        let _ = write!(
            out,
            r#"<div class="chart-tooltip" style="position:absolute; left: {}px; top: {}px;"><div class="tooltip-value primary">{}</div>"#,
            t.left,
            t.top,
            escape(&t.primary),
        );
        if let Some(c) = &t.comparison {
            let _ = write!(out, r#"<div class="tooltip-value comparison">{}</div>"#, escape(c));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    if let Some(label) = chart.label.as_deref().filter(|l| !l.is_empty()) {
        let _ = write!(out, r#"<div class="chart-label">{}</div>"#, escape(label));
    }
    out.push_str("</div>");
    Ok(out)
}
