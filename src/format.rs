//! Locale-aware number formatting for metric cards and chart labels.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format `v` with `decimals` fraction digits and grouped thousands,
/// e.g. `1234567.891` -> `"1,234,567.89"` for `en`.
///
/// Non-finite input is returned as Rust prints it (`NaN`, `inf`).
pub fn format_grouped(v: f64, decimals: usize, locale_tag: &str) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    let fixed = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let grouped = match int_part.parse::<u128>() {
        Ok(n) => n.to_formatted_string(locale),
        Err(_) => int_part.to_string(),
    };

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let mut out = String::with_capacity(fixed.len() + 8);
    if v < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push(dec_sep);
        out.push_str(f);
    }
    out
}

/// `"3,846B"`: whole billions with thousands separators.
pub fn format_billions(billions: f64, locale_tag: &str) -> String {
    format!("{}B", format_grouped(billions, 0, locale_tag))
}

/// `"2.00x"`: growth multiple with two decimals.
pub fn format_ratio(ratio: f64, locale_tag: &str) -> String {
    format!("{}x", format_grouped(ratio, 2, locale_tag))
}
