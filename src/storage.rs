use crate::models::GdpRecord;
use anyhow::Result;
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Spreadsheet apps evaluate cells starting with these as formulas.
fn neutralize_formula(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(['=', '+', '-', '@']) {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Save long records as CSV with header `country_code,year,gdp`.
/// Missing GDP values are written as empty cells.
pub fn save_csv<P: AsRef<Path>>(records: &[GdpRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["country_code", "year", "gdp"])?;
    for r in records {
        wtr.serialize((neutralize_formula(&r.country_code), r.year, r.gdp))?;
    }
    wtr.flush()?;
    log::info!("saved {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Save long records as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(records: &[GdpRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    log::info!("saved {} rows to {}", records.len(), path.display());
    Ok(())
}
