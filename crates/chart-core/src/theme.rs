// File: crates/chart-core/src/theme.rs
// Summary: Color palettes for the progress chart and its overlays.

use std::fmt;

/// RGB color with fractional opacity, printed as CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Alpha as a byte, for raster backends.
    pub fn alpha_u8(&self) -> u8 {
        (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else if self.alpha <= 0.0 {
            f.write_str("transparent")
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub hover_line: Color,
    pub primary_stroke: Color,
    pub primary_fill: Color,
    pub primary_width: f64,
    pub comparison_stroke: Color,
    pub comparison_fill: Color,
    pub comparison_width: f64,
    pub marker_fill: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(0xff, 0xff, 0xff),
            axis_line: Color::rgb(0xe6, 0xe6, 0xea),
            axis_label: Color::rgb(0x8c, 0x8c, 0x96),
            hover_line: Color::rgb(0xd0, 0xd0, 0xd8),
            primary_stroke: Color::rgb(0xf7, 0x5a, 0x99),
            primary_fill: Color::rgba(247, 90, 153, 0.2),
            primary_width: 2.5,
            comparison_stroke: Color::rgb(0xfd, 0xdd, 0xea),
            comparison_fill: Color::rgba(253, 221, 234, 0.3),
            comparison_width: 2.0,
            marker_fill: Color::rgb(0xff, 0xff, 0xff),
            tooltip_background: Color::rgb(0x1f, 0x1f, 0x24),
            tooltip_text: Color::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(60, 60, 66),
            axis_label: Color::rgb(150, 150, 160),
            hover_line: Color::rgb(90, 90, 100),
            marker_fill: Color::rgb(18, 18, 20),
            tooltip_background: Color::rgb(235, 235, 245),
            tooltip_text: Color::rgb(18, 18, 20),
            ..Self::light()
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::rgb(0, 0, 0),
            axis_line: Color::rgb(0xff, 0xff, 0xff),
            axis_label: Color::rgb(0xff, 0xff, 0xff),
            hover_line: Color::rgb(0xff, 0xff, 0x00),
            primary_stroke: Color::rgb(0x00, 0xff, 0xff),
            primary_fill: Color::rgba(0, 255, 255, 0.25),
            comparison_stroke: Color::rgb(0xff, 0x00, 0xff),
            comparison_fill: Color::rgba(255, 0, 255, 0.25),
            marker_fill: Color::rgb(0, 0, 0),
            tooltip_background: Color::rgb(0xff, 0xff, 0xff),
            tooltip_text: Color::rgb(0, 0, 0),
            ..Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_output() {
        assert_eq!(Color::rgb(0xf7, 0x5a, 0x99).to_string(), "#f75a99");
        assert_eq!(Color::rgba(253, 221, 234, 0.3).to_string(), "rgba(253, 221, 234, 0.3)");
        assert_eq!(Color::rgba(0, 0, 0, 0.0).to_string(), "transparent");
    }

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
