//! gdp_dash
//!
//! A small Rust library behind the `gdp-dash` CLI and `gdp-dash-gui` desktop app:
//! browse World Bank GDP series and show a static timetable page.
//!
//! ### Features
//! - Reshape the wide World Bank GDP export (one column per year) into tidy records
//! - Filter by year range and countries, build per-country "GDP in <year>" cards
//! - Render SVG/PNG line charts and export CSV/JSON
//! - Load the timetable HTML and wrap it in a `data:` preview link
//!
//! ### Example
//! ```no_run
//! use gdp_dash::{YearRange, load_gdp};
//! use gdp_dash::{growth, query};
//!
//! let records = load_gdp("data/gdp_data.csv")?;
//! let countries = vec!["DEU".to_string(), "FRA".to_string()];
//! let range = YearRange::new(2000, 2022);
//! let filtered = query::filter_records(&records, range, &countries);
//! gdp_dash::viz::plot_gdp(&filtered, "gdp.svg", 1000, 600)?;
//! for card in growth::country_metrics(&records, &countries, range, "en") {
//!     println!("{}: {} ({})", card.label, card.growth.display_value, card.growth.growth);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod gdp;
pub mod growth;
pub mod models;
pub mod query;
pub mod schedule;
pub mod storage;
pub mod viz;

pub use config::Config;
pub use dashboard::{Dashboard, Rendered, Selection};
pub use error::{DashError, Result};
pub use gdp::load_gdp;
pub use growth::compute_growth;
pub use models::{DeltaColor, GdpRecord, Growth, MetricCard, View, YearRange};
pub use schedule::{build_preview_url, load_schedule};
