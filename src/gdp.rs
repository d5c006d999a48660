//! Load the World Bank GDP export and reshape it from wide to long form.
//!
//! The input has one row per country and one column per year:
//!
//! ```text
//! Country Name,Country Code,...,1960,1961,...,2022
//! Germany,DEU,...,,,...,4082469490797.6
//! ```
//!
//! and becomes one [`GdpRecord`] per (country, year) cell. Only the year
//! columns `1960..=2022` are read; any other column is ignored.

use crate::error::{DashError, Result};
use crate::models::{GdpRecord, MAX_YEAR, MIN_YEAR};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header of the column carrying the ISO3 country code.
pub const COUNTRY_CODE_COLUMN: &str = "Country Code";

/// Read a wide GDP CSV from disk and melt it into long records.
///
/// ### Errors
/// - [`DashError::NotFound`] if `path` does not exist
/// - [`DashError::Format`] if `Country Code` or a year column is missing
/// - [`DashError::Csv`] for rows the CSV parser rejects
pub fn load_gdp<P: AsRef<Path>>(path: P) -> Result<Vec<GdpRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DashError::from_io(path, e))?;
    let records = read_gdp(file)?;
    log::debug!("loaded {} GDP records from {}", records.len(), path.display());
    Ok(records)
}

/// Same as [`load_gdp`] but from any reader (handy for tests and embedded data).
pub fn read_gdp<R: Read>(reader: R) -> Result<Vec<GdpRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let code = row.get(layout.code).unwrap_or_default().trim().to_string();
        for &(year, idx) in &layout.years {
            out.push(GdpRecord {
                country_code: code.clone(),
                year,
                gdp: row.get(idx).and_then(parse_cell),
            });
        }
    }
    Ok(out)
}

/// Column indices resolved once from the header row.
struct ColumnLayout {
    code: usize,
    /// (year, column index), ascending by year
    years: Vec<(i32, usize)>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let code = find(COUNTRY_CODE_COLUMN)
            .ok_or_else(|| DashError::Format(format!("missing column `{COUNTRY_CODE_COLUMN}`")))?;

        let mut years = Vec::with_capacity((MAX_YEAR - MIN_YEAR + 1) as usize);
        let mut missing = Vec::new();
        for year in MIN_YEAR..=MAX_YEAR {
            match find(year.to_string().as_str()) {
                Some(idx) => years.push((year, idx)),
                None => missing.push(year),
            }
        }
        if !missing.is_empty() {
            return Err(DashError::Format(format!(
                "missing year column(s): {}",
                summarize_years(&missing)
            )));
        }

        Ok(Self { code, years })
    }
}

/// Empty or non-numeric cells are data gaps, not errors.
fn parse_cell(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// "1960, 1961, 1962 (+57 more)"
fn summarize_years(years: &[i32]) -> String {
    const SHOWN: usize = 3;
    let head: Vec<String> = years.iter().take(SHOWN).map(|y| y.to_string()).collect();
    if years.len() > SHOWN {
        format!("{} (+{} more)", head.join(", "), years.len() - SHOWN)
    } else {
        head.join(", ")
    }
}
