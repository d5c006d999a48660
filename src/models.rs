use serde::{Deserialize, Serialize};

/// First year column of the World Bank GDP export.
pub const MIN_YEAR: i32 = 1960;
/// Last year column of the World Bank GDP export.
pub const MAX_YEAR: i32 = 2022;

/// Tidy structure used by this crate (one row = one country/year observation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GdpRecord {
    pub country_code: String,
    pub year: i32,
    /// Raw currency units. `None` when the source cell was empty or not numeric.
    pub gdp: Option<f64>,
}

/// Inclusive year range selected by the host (slider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    /// Build a range, swapping the bounds if they arrive reversed.
    pub fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// The full span of the GDP export.
    pub fn full() -> Self {
        Self {
            from: MIN_YEAR,
            to: MAX_YEAR,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }

    /// Clamp both bounds into `outer`.
    pub fn clamp_to(&self, outer: YearRange) -> Self {
        Self::new(
            self.from.clamp(outer.from, outer.to),
            self.to.clamp(outer.from, outer.to),
        )
    }
}

/// How the host should color a growth delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeltaColor {
    Normal,
    Off,
}

/// Display strings for one country's GDP metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Growth {
    pub display_value: String,
    pub growth: String,
    pub color: DeltaColor,
}

/// One "GDP in <year>" card shown per selected country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub country_code: String,
    /// e.g. `"DEU GDP"`
    pub label: String,
    pub growth: Growth,
}

/// Which page the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Dashboard,
    Schedule,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "GDP dashboard",
            View::Schedule => "Leman Biçer ders programı",
        }
    }
}
