// File: crates/chart-core/src/text.rs
// Summary: Locale-aware value formatting and markup escaping for labels.

use std::borrow::Cow;

use num_format::{Grouping, Locale};

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `en_US`, `de`, `fr`, `es`, `it`,
/// `pt`, `nl`. Anything else is English.
pub fn locale_from_tag(tag: &str) -> Locale {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => Locale::de,
        "fr" | "fr_fr" => Locale::fr,
        "es" | "es_es" => Locale::es,
        "it" | "it_it" => Locale::it,
        "pt" | "pt_pt" | "pt_br" => Locale::pt,
        "nl" | "nl_nl" => Locale::nl,
        _ => Locale::en,
    }
}

/// Group the integer part, keep at most three fraction digits.
/// `1500.0` -> `1,500`, `1234.5678` -> `1,234.568` (en).
pub fn format_grouped(value: f64, locale: &Locale) -> String {
    if !value.is_finite() {
        return if value.is_nan() { locale.nan().to_string() } else { locale.infinity().to_string() };
    }
    let fixed = format!("{:.3}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3);
    if value < 0.0 && (int != "0" || !frac.is_empty()) {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&group_digits(int, locale.separator(), locale.grouping()));
    if !frac.is_empty() {
        out.push_str(locale.decimal());
        out.push_str(frac);
    }
    out
}

/// Insert `sep` into a string of ASCII digits per the locale's grouping rule.
fn group_digits(digits: &str, sep: &str, grouping: Grouping) -> String {
    let n = digits.len();
    let boundary = |pos_from_right: usize| match grouping {
        Grouping::Standard => pos_from_right % 3 == 0,
        Grouping::Indian => pos_from_right == 3 || (pos_from_right > 3 && (pos_from_right - 3) % 2 == 0),
        Grouping::Posix => false,
    };
    let mut out = String::with_capacity(n + n / 2 * sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && boundary(n - i) {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}

/// Tooltip text for one value: grouped number plus unit suffix.
pub fn format_value(value: f64, unit: &str, locale: &Locale) -> String {
    format!("{}{unit}", format_grouped(value, locale))
}

/// Escape text for use in SVG/HTML content and attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}
