// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus components for the progress chart and cards (desktop only).
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds without
//   fetching Dioxus unless explicitly enabled.
// - Pointer events arrive in client coordinates; they are mapped into chart-local
//   space with a SurfaceTransform built from the <svg> bounding rect, re-measured
//   on every enter/move so scrolling or relayout never leaves it stale.

use chart_core::hover::PointerEvent;
use chart_core::view::SurfaceTransform;

/// DOM pointer notification on a hit region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomPointer {
    Enter,
    Move,
    Leave,
}

/// Convert a DOM pointer notification on hit region `index` into a chart event.
pub fn pointer_event(kind: DomPointer, index: usize, client: (f64, f64), transform: &SurfaceTransform) -> PointerEvent {
    let at = transform.to_local(client.0, client.1);
    match kind {
        DomPointer::Enter => PointerEvent::Enter { index, at },
        DomPointer::Move => PointerEvent::Move { index, at },
        DomPointer::Leave => PointerEvent::Leave { index },
    }
}

/// Orders pointer events whose handling awaits a rect query. Each event takes a
/// ticket; only the newest ticket may update hover state once its query returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerTracker {
    latest: u64,
}

impl PointerTracker {
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use chart_core::geometry::Rect;
    use chart_core::hover::HoverController;
    use std::rc::Rc;

    use chart_core::{AthleteCard as AthleteCardModel, DataPoint, PlotConfig, ProgressChart, Theme};
    use dioxus::prelude::*;

    #[derive(Props, Clone, PartialEq)]
    pub struct ProgressChartProps {
        pub data: Vec<DataPoint>,
        #[props(default = Some(chart_core::chart::DEFAULT_LABEL.to_string()))]
        pub label: Option<String>,
        #[props(default = Theme::light())]
        pub theme: Theme,
        #[props(default)]
        pub config: PlotConfig,
    }

    /// Interactive progress chart. Hover state lives in this component and is
    /// reset whenever `data` changes.
    #[component]
    pub fn ProgressChartView(props: ProgressChartProps) -> Element {
        let mut hover = use_signal(HoverController::new);
        let mut surface = use_signal(|| Option::<Rect>::None);
        let mut svg_node = use_signal(|| Option::<Rc<MountedData>>::None);
        let mut tracker = use_signal(PointerTracker::default);

        let data = props.data.clone();
        use_effect(use_reactive!(|(data,)| {
            tracing::debug!(points = data.len(), "dataset changed; hover reset");
            hover.write().reset();
        }));

        let chart = ProgressChart::new(props.data.clone())
            .with_config(props.config.clone())
            .with_theme(props.theme);
        let chart = match props.label.clone() {
            Some(l) => chart.with_label(l),
            None => chart.without_label(),
        };
        let frame = match chart.frame(&hover.read().state()) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, "progress chart not rendered");
                return rsx! { div { class: "chart-card chart-empty" } };
            }
        };

        let (logical_width, logical_height) = (props.config.width, props.config.surface_height());
        let transform = move || SurfaceTransform {
            surface: surface().unwrap_or(Rect::from_ltwh(0.0, 0.0, logical_width, logical_height)),
            logical_width,
            logical_height,
        };
        // Re-measure the surface, then apply the event unless a newer one overtook it.
        let on_pointer = move |kind: DomPointer, index: usize, client: (f64, f64)| async move {
            let ticket = tracker.write().begin();
            if let Some(node) = svg_node() {
                match node.get_client_rect().await {
                    Ok(r) => surface.set(Some(Rect::from_ltwh(r.origin.x, r.origin.y, r.size.width, r.size.height))),
                    Err(e) => tracing::debug!(error = ?e, "client rect unavailable; keeping last surface"),
                }
            }
            if tracker.read().is_current(ticket) {
                hover.write().handle(pointer_event(kind, index, client, &transform()));
            }
        };
        let theme = props.theme;
        let view_box = format!("0 0 {} {}", frame.width, frame.height);

        rsx! {
            div { class: "chart-card",
                div { class: "chart-container", style: "position:relative",
                    svg {
                        width: "{frame.width}",
                        height: "{frame.height}",
                        view_box: "{view_box}",
                        onmounted: move |evt: MountedEvent| svg_node.set(Some(evt.data())),
                        g { class: "y-axis",
                            for t in frame.y_ticks.iter() {
                                text { key: "{t.label}", x: "{t.x}", y: "{t.y}", class: "axis-label", fill: "{theme.axis_label}", "{t.label}" }
                            }
                        }
                        line {
                            x1: "{frame.axis_line.x1}", y1: "{frame.axis_line.y1}",
                            x2: "{frame.axis_line.x2}", y2: "{frame.axis_line.y2}",
                            class: "axis-line", stroke: "{theme.axis_line}",
                        }
                        g { class: "x-axis",
                            for t in frame.x_ticks.iter() {
                                text { x: "{t.x}", y: "{t.y}", class: "axis-label", text_anchor: "middle", fill: "{theme.axis_label}", "{t.label}" }
                            }
                        }
                        if let Some(c) = frame.comparison.as_ref() {
                            path { d: "{c.area}", class: "chart-area comparison", fill: "{theme.comparison_fill}" }
                            path { d: "{c.line}", class: "chart-line comparison", stroke: "{theme.comparison_stroke}", stroke_width: "{theme.comparison_width}", fill: "none" }
                        }
                        path { d: "{frame.primary.area}", class: "chart-area primary", fill: "{theme.primary_fill}" }
                        path { d: "{frame.primary.line}", class: "chart-line primary", stroke: "{theme.primary_stroke}", stroke_width: "{theme.primary_width}", fill: "none" }
                        for (hit, m) in frame.hit_regions.iter().copied().zip(frame.markers.iter().copied()) {
                            g { key: "{hit.index}",
                                circle {
                                    cx: "{hit.center.x}", cy: "{hit.center.y}", r: "{hit.radius}",
                                    fill: "transparent", class: "hover-area", style: "cursor: pointer",
                                    onmouseenter: move |evt: MouseEvent| {
                                        let c = evt.client_coordinates();
                                        on_pointer(DomPointer::Enter, hit.index, (c.x, c.y))
                                    },
                                    onmousemove: move |evt: MouseEvent| {
                                        let c = evt.client_coordinates();
                                        on_pointer(DomPointer::Move, hit.index, (c.x, c.y))
                                    },
                                    onmouseleave: move |_| {
                                        tracker.write().begin();
                                        hover.write().handle(PointerEvent::Leave { index: hit.index });
                                    },
                                }
                                circle {
                                    cx: "{m.center.x}", cy: "{m.center.y}", r: "{m.radius}",
                                    class: if m.hovered { "data-point hovered" } else { "data-point" },
                                    fill: "{theme.marker_fill}", stroke: "{theme.primary_stroke}", stroke_width: "{m.stroke_width}",
                                }
                            }
                        }
                        for m in frame.comparison_markers.iter() {
                            circle {
                                key: "comp-{m.index}",
                                cx: "{m.center.x}", cy: "{m.center.y}", r: "{m.radius}",
                                class: "data-point comparison",
                                fill: "{theme.marker_fill}", stroke: "{theme.comparison_stroke}", stroke_width: "{m.stroke_width}",
                            }
                        }
                        if let Some(h) = frame.hover_line {
                            line { x1: "{h.x1}", y1: "{h.y1}", x2: "{h.x2}", y2: "{h.y2}", class: "hover-line", stroke: "{theme.hover_line}" }
                        }
                    }
                    if let Some(t) = frame.tooltip.as_ref() {
                        div {
                            class: "chart-tooltip",
                            style: "position:absolute; left: {t.left}px; top: {t.top}px;",
                            div { class: "tooltip-value primary", "{t.primary}" }
                            if let Some(c) = t.comparison.as_ref() {
                                div { class: "tooltip-value comparison", "{c}" }
                            }
                        }
                    }
                }
                if let Some(l) = chart.label.as_ref().filter(|l| !l.is_empty()) {
                    div { class: "chart-label", "{l}" }
                }
            }
        }
    }

    #[component]
    pub fn Card(title: String, description: String) -> Element {
        rsx! {
            div { class: "card",
                div { class: "card-thumbnail" }
                div { class: "card-body",
                    h2 { class: "card-title", "{title}" }
                    p { class: "card-description", "{description}" }
                    button { class: "like-button", r#type: "button", "♥ Like" }
                }
            }
        }
    }

    #[component]
    pub fn AthleteCard(name: String, position: String, avatar_url: Option<String>) -> Element {
        let model = AthleteCardModel { name, position, avatar_url };
        rsx! {
            div { class: "athlete-card",
                img { src: "{model.avatar()}", alt: "{model.alt_text()}", class: "athlete-avatar" }
                div { class: "athlete-details",
                    h3 { class: "athlete-name", "{model.name}" }
                    p { class: "athlete-position", "{model.position}" }
                }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the components.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let data = vec![
                DataPoint::new("Mon", 1500.0),
                DataPoint::new("Tue", 5500.0).with_comparison(6800.0),
                DataPoint::new("Wed", 3200.0).with_comparison(2100.0),
                DataPoint::new("Thu", 4100.0),
                DataPoint::new("Fri", 2500.0).with_comparison(3900.0),
            ];
            let card = chart_core::Card::default();
            rsx! {
                div { class: "app",
                    Card { title: card.title, description: card.description }
                    AthleteCard { name: "Alex Morgan".to_string(), position: "Forward".to_string() }
                    ProgressChartView { data }
                }
            }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body{margin:0;font-family:sans-serif}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
