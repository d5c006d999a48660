//! Filters and lookups the dashboard runs over long GDP records.

use crate::models::{GdpRecord, YearRange};
use std::collections::HashSet;

/// Countries pre-selected when the dashboard opens.
pub const DEFAULT_COUNTRIES: [&str; 6] = ["DEU", "FRA", "GBR", "BRA", "MEX", "JPN"];

/// Keep records whose year lies in `range` (inclusive) and whose code is in `countries`.
///
/// Input order is preserved and nothing else is dropped; in particular records
/// with a missing GDP value are kept.
pub fn filter_records(
    records: &[GdpRecord],
    range: YearRange,
    countries: &[String],
) -> Vec<GdpRecord> {
    let wanted: HashSet<&str> = countries.iter().map(String::as_str).collect();
    records
        .iter()
        .filter(|r| range.contains(r.year) && wanted.contains(r.country_code.as_str()))
        .cloned()
        .collect()
}

/// Smallest and largest year present, or `None` for an empty slice.
pub fn year_bounds(records: &[GdpRecord]) -> Option<YearRange> {
    let min = records.iter().map(|r| r.year).min()?;
    let max = records.iter().map(|r| r.year).max()?;
    Some(YearRange::new(min, max))
}

/// Distinct country codes in first-seen order.
pub fn country_codes(records: &[GdpRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for r in records {
        if seen.insert(&r.country_code) {
            out.push(r.country_code.clone());
        }
    }
    out
}

/// GDP of `code` in `year`.
///
/// `None` means no record exists; `Some(NaN)` means the record exists but the
/// cell was empty.
pub fn boundary_value(records: &[GdpRecord], code: &str, year: i32) -> Option<f64> {
    records
        .iter()
        .find(|r| r.year == year && r.country_code == code)
        .map(|r| r.gdp.unwrap_or(f64::NAN))
}

/// The configured defaults that actually occur in `available`, in default order.
pub fn default_selection(defaults: &[String], available: &[String]) -> Vec<String> {
    defaults
        .iter()
        .filter(|d| available.contains(d))
        .cloned()
        .collect()
}

/// Split a user list like `"DEU, FRA;GBR"` into codes.
pub fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_accepts_mixed_separators() {
        assert_eq!(parse_list("USA, DEU ; CHN "), vec!["USA", "DEU", "CHN"]);
        assert_eq!(parse_list("USA,,DEU,"), vec!["USA", "DEU"]);
        assert!(parse_list("").is_empty());
    }
}
