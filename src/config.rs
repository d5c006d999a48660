//! Configuration: TOML file with defaults for every field, plus environment overrides.

use crate::error::{DashError, Result};
use crate::query::DEFAULT_COUNTRIES;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

/// Where the inputs live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_gdp_path")]
    pub gdp_path: PathBuf,

    #[serde(default = "default_schedule_path")]
    pub schedule_path: PathBuf,
}

fn default_gdp_path() -> PathBuf {
    PathBuf::from("data/gdp_data.csv")
}

fn default_schedule_path() -> PathBuf {
    PathBuf::from("assets/leman_bicer_schedule.html")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            gdp_path: default_gdp_path(),
            schedule_path: default_schedule_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Number formatting locale (`en`, `de`, ...).
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_countries")]
    pub default_countries: Vec<String>,

    /// Metric cards per row.
    #[serde(default = "default_metric_columns")]
    pub metric_columns: usize,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_countries() -> Vec<String> {
    DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect()
}

fn default_metric_columns() -> usize {
    4
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            default_countries: default_countries(),
            metric_columns: default_metric_columns(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheConfig {
    /// Seconds before a loaded file is read again. Absent = until cleared.
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DashError::from_io(path, e))?;
        Self::from_toml(&content).map_err(|error| DashError::Config {
            path: path.to_path_buf(),
            error,
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Search the default locations, falling back to built-in defaults.
    /// Environment overrides are applied in both cases.
    pub fn load_default() -> Self {
        let candidates = [
            dirs::config_dir().map(|p| p.join("gdp-dash").join("config.toml")),
            Some(PathBuf::from("./gdp-dash.toml")),
        ];

        let mut config = None;
        for path in candidates.iter().flatten() {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(c) => {
                    log::info!("loaded config from {}", path.display());
                    config = Some(c);
                    break;
                }
                Err(e) => log::warn!("ignoring config {}: {}", path.display(), e),
            }
        }

        let mut config = config.unwrap_or_default();
        config.apply_env_overrides(|k| std::env::var(k).ok());
        config
    }

    /// Apply `GDP_DASH_*` overrides. `lookup` is `std::env::var` in production.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = lookup("GDP_DASH_DATA") {
            self.data.gdp_path = PathBuf::from(p);
        }
        if let Some(p) = lookup("GDP_DASH_SCHEDULE") {
            self.data.schedule_path = PathBuf::from(p);
        }
        if let Some(l) = lookup("GDP_DASH_LOCALE") {
            self.display.locale = l;
        }
        if let Some(ttl) = lookup("GDP_DASH_CACHE_TTL") {
            match ttl.trim().parse::<u64>() {
                Ok(secs) => self.cache.ttl_secs = Some(secs),
                Err(_) => log::warn!("GDP_DASH_CACHE_TTL is not a number of seconds: {ttl:?}"),
            }
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# gdp-dash configuration
#
# Environment variables override these settings:
# - GDP_DASH_DATA
# - GDP_DASH_SCHEDULE
# - GDP_DASH_LOCALE
# - GDP_DASH_CACHE_TTL

[data]
# Wide World Bank GDP export (Country Name, Country Code, 1960..2022)
gdp_path = "data/gdp_data.csv"
# Static timetable page
schedule_path = "assets/leman_bicer_schedule.html"

[display]
locale = "en"
default_countries = ["DEU", "FRA", "GBR", "BRA", "MEX", "JPN"]
metric_columns = 4

[cache]
# Re-read input files after this many seconds; omit to keep them until cleared
# ttl_secs = 86400
"#
    .to_string()
}
