// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV week (or a built-in sample), renders the chart with an
// optional simulated hover, and writes SVG, PNG and an HTML page with the cards.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::hover::{HoverController, PointerEvent};
use chart_core::text::locale_from_tag;
use chart_core::widgets::progress_chart_card;
use chart_core::{theme, AthleteCard, Card, DataPoint, Dataset, PlotConfig, ProgressChart};
use chart_render_skia::{RasterOptions, SkiaRenderer};
use chrono::Weekday;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chart-demo", about = "Render the progress chart and cards")]
struct Args {
    /// CSV with columns label,value,comparison_value (comparison may be empty)
    input: Option<PathBuf>,
    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,
    /// Theme preset (light, dark, high-contrast)
    #[arg(long, default_value = "light")]
    theme: String,
    /// Locale tag for tooltip grouping (en, de, fr, ...)
    #[arg(long, default_value = "en")]
    locale: String,
    /// Unit suffix for tooltip values
    #[arg(long, default_value = "m")]
    unit: String,
    /// Caption under the chart; empty string hides it
    #[arg(long)]
    label: Option<String>,
    /// Simulate the pointer resting on this point
    #[arg(long)]
    hover: Option<usize>,
    /// Device pixels per chart unit for the PNG
    #[arg(long, default_value_t = 2.0)]
    scale: f32,
    /// Skip PNG rasterization
    #[arg(long)]
    no_png: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let data = match &args.input {
        Some(path) => load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => sample_week(),
    };
    info!(points = data.len(), "loaded dataset");

    let config = PlotConfig {
        unit: args.unit.clone(),
        locale: locale_from_tag(&args.locale),
        ..PlotConfig::default()
    };
    let mut chart = ProgressChart::new(data).with_config(config).with_theme(theme::find(&args.theme));
    if let Some(label) = &args.label {
        chart = if label.is_empty() { chart.without_label() } else { chart.with_label(label.clone()) };
    }

    let mut hover = HoverController::new();
    if let Some(index) = args.hover {
        let scales = chart.scales()?;
        let point = chart
            .data
            .get(index)
            .with_context(|| format!("--hover {index} is outside the {} loaded points", chart.data.len()))?;
        let at = scales.point(index, point.value);
        hover.handle(PointerEvent::Enter { index, at });
        info!(index, x = at.x, y = at.y, "simulated hover");
    }
    let state = hover.state();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create '{}'", args.out_dir.display()))?;

    let svg_path = args.out_dir.join("progress.svg");
    chart.render_to_svg(&state, &svg_path)?;
    println!("Wrote {}", svg_path.display());

    if !args.no_png {
        let png_path = args.out_dir.join("progress.png");
        let opts = RasterOptions { scale: args.scale, ..Default::default() };
        SkiaRenderer::new().render_to_png(&chart, &state, &opts, &png_path)?;
        println!("Wrote {}", png_path.display());
    }

    let page_path = args.out_dir.join("page.html");
    let page = format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Progress</title></head><body><div class=\"app\">{}{}{}</div></body></html>",
        Card::default().render_html(),
        AthleteCard::new("Alex Morgan", "Forward").render_html(),
        progress_chart_card(&chart, &state)?,
    );
    std::fs::write(&page_path, page).with_context(|| format!("failed to write '{}'", page_path.display()))?;
    println!("Wrote {}", page_path.display());

    Ok(())
}

/// Load rows in file order; the chart never re-sorts them.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut data = Dataset::default();
    for (row, rec) in rdr.deserialize::<DataPoint>().enumerate() {
        data.push(rec.with_context(|| format!("bad row {}", row + 1))?);
    }
    Ok(data)
}

/// A Monday-to-Sunday week with a partial comparison series.
fn sample_week() -> Dataset {
    let values = [1500.0, 5500.0, 3200.0, 4100.0, 2500.0, 6200.0, 1500.0];
    let comparison = [None, Some(6800.0), Some(2100.0), None, Some(3900.0), Some(5000.0), None];
    let mut day = Weekday::Mon;
    let mut data = Dataset::default();
    for (v, c) in values.into_iter().zip(comparison) {
        data.push(DataPoint { label: day.to_string(), value: v, comparison_value: c });
        day = day.succ();
    }
    data
}
