//! Per-interaction entry point for hosts (CLI, GUI).
//!
//! A host keeps one [`Dashboard`], feeds it the current [`View`] and
//! [`Selection`], and renders whatever comes back. Inputs are read through
//! explicit caches that honor the configured time-to-live and can be cleared.

use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;
use crate::gdp::load_gdp;
use crate::growth::country_metrics;
use crate::models::{GdpRecord, MetricCard, View, YearRange};
use crate::query::{country_codes, default_selection, filter_records, year_bounds};
use crate::schedule::{
    DOWNLOAD_FILE_NAME, SCHEDULE_CAPTION, SCHEDULE_TITLE, build_preview_url, load_schedule,
};
use std::path::PathBuf;
use std::sync::Arc;

pub const EMPTY_SELECTION_WARNING: &str = "Select at least one country";

/// Widget state supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// `None` = the full span of the loaded data.
    pub range: Option<YearRange>,
    /// `None` = the configured default countries.
    pub countries: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GdpView {
    /// Slider bounds (min/max year in the data).
    pub bounds: YearRange,
    /// Effective range after clamping into `bounds`.
    pub range: YearRange,
    pub available: Vec<String>,
    pub selected: Vec<String>,
    pub filtered: Vec<GdpRecord>,
    pub metrics: Vec<MetricCard>,
    /// `"GDP in <to>"`
    pub header: String,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    pub title: &'static str,
    pub caption: &'static str,
    pub html: Arc<String>,
    pub preview_url: String,
    pub download_name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Gdp(GdpView),
    Schedule(ScheduleView),
}

pub struct Dashboard {
    config: Config,
    gdp_cache: Cache<PathBuf, Vec<GdpRecord>>,
    schedule_cache: Cache<PathBuf, String>,
}

impl Dashboard {
    pub fn new(config: Config) -> Self {
        let ttl = config.cache.ttl();
        Self {
            config,
            gdp_cache: Cache::new(ttl),
            schedule_cache: Cache::new(ttl),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Long GDP records, loaded once per cache lifetime.
    pub fn gdp_records(&mut self) -> Result<Arc<Vec<GdpRecord>>> {
        let path = self.config.data.gdp_path.clone();
        self.gdp_cache
            .get_or_try_insert_with(path.clone(), || load_gdp(&path))
    }

    /// Timetable HTML, loaded once per cache lifetime.
    pub fn schedule_html(&mut self) -> Result<Arc<String>> {
        let path = self.config.data.schedule_path.clone();
        self.schedule_cache
            .get_or_try_insert_with(path.clone(), || load_schedule(&path))
    }

    /// Forget loaded files; the next render reads them again.
    pub fn clear_cache(&mut self) {
        self.gdp_cache.clear();
        self.schedule_cache.clear();
    }

    pub fn render(&mut self, view: View, selection: &Selection) -> Result<Rendered> {
        match view {
            View::Dashboard => self.render_gdp(selection).map(Rendered::Gdp),
            View::Schedule => self.render_schedule().map(Rendered::Schedule),
        }
    }

    pub fn render_gdp(&mut self, selection: &Selection) -> Result<GdpView> {
        let records = self.gdp_records()?;
        let bounds = year_bounds(&records).unwrap_or_else(YearRange::full);
        let range = selection.range.map_or(bounds, |r| r.clamp_to(bounds));

        let available = country_codes(&records);
        let selected = match &selection.countries {
            Some(chosen) => chosen.clone(),
            None => default_selection(&self.config.display.default_countries, &available),
        };

        let warning = selected
            .is_empty()
            .then(|| EMPTY_SELECTION_WARNING.to_string());
        let filtered = filter_records(&records, range, &selected);
        let metrics = country_metrics(&records, &selected, range, &self.config.display.locale);

        Ok(GdpView {
            bounds,
            range,
            available,
            selected,
            filtered,
            metrics,
            header: format!("GDP in {}", range.to),
            warning,
        })
    }

    pub fn render_schedule(&mut self) -> Result<ScheduleView> {
        let html = self.schedule_html()?;
        let preview_url = build_preview_url(&html);
        Ok(ScheduleView {
            title: SCHEDULE_TITLE,
            caption: SCHEDULE_CAPTION,
            html,
            preview_url,
            download_name: DOWNLOAD_FILE_NAME,
        })
    }
}
