//! GDP growth between two boundary years, rendered as metric card strings.

use crate::format::{format_billions, format_ratio};
use crate::models::{DeltaColor, GdpRecord, Growth, MetricCard, YearRange};
use crate::query::boundary_value;

/// Raw currency units per displayed unit.
pub const BILLION: f64 = 1_000_000_000.0;

pub const DATA_UNAVAILABLE: &str = "Data unavailable";
pub const NOT_AVAILABLE: &str = "n/a";

/// Compute the display value, growth multiple and delta color (English formatting).
///
/// `first`/`last` are the raw GDP values at the start and end year, `None` when no
/// record exists for that year. A record with an empty cell should be passed as
/// `Some(f64::NAN)`; see [`boundary_value`].
///
/// ```
/// use gdp_dash::growth::compute_growth;
/// use gdp_dash::models::DeltaColor;
///
/// let g = compute_growth(Some(1e9), Some(2e9));
/// assert_eq!(g.display_value, "2B");
/// assert_eq!(g.growth, "2.00x");
/// assert_eq!(g.color, DeltaColor::Normal);
/// ```
pub fn compute_growth(first: Option<f64>, last: Option<f64>) -> Growth {
    compute_growth_locale(first, last, "en")
}

/// Same as [`compute_growth`] with a locale tag for separators (e.g. `"de"`).
pub fn compute_growth_locale(first: Option<f64>, last: Option<f64>, locale_tag: &str) -> Growth {
    let (Some(first), Some(last)) = (first, last) else {
        return unavailable();
    };

    let first = first / BILLION;
    let last = last / BILLION;

    // an empty cell still shows up as a value; only the growth is withheld
    let display_value = format_billions(last, locale_tag);

    if first.is_nan() || last.is_nan() {
        return Growth {
            display_value,
            growth: NOT_AVAILABLE.into(),
            color: DeltaColor::Off,
        };
    }

    // zero (or infinite) start values give no meaningful multiple
    let ratio = last / first;
    if !ratio.is_finite() {
        return Growth {
            display_value,
            growth: NOT_AVAILABLE.into(),
            color: DeltaColor::Off,
        };
    }

    Growth {
        display_value,
        growth: format_ratio(ratio, locale_tag),
        color: DeltaColor::Normal,
    }
}

fn unavailable() -> Growth {
    Growth {
        display_value: DATA_UNAVAILABLE.into(),
        growth: NOT_AVAILABLE.into(),
        color: DeltaColor::Off,
    }
}

/// Build one card per selected country, in selection order.
///
/// The first value is looked up at `range.from` and the last at `range.to` over
/// the *unfiltered* records, so one country's gaps never affect another's card.
pub fn country_metrics(
    records: &[GdpRecord],
    selected: &[String],
    range: YearRange,
    locale_tag: &str,
) -> Vec<MetricCard> {
    selected
        .iter()
        .map(|code| {
            let first = boundary_value(records, code, range.from);
            let last = boundary_value(records, code, range.to);
            MetricCard {
                country_code: code.clone(),
                label: format!("{code} GDP"),
                growth: compute_growth_locale(first, last, locale_tag),
            }
        })
        .collect()
}
