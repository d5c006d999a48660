//! The static timetable page: load it verbatim, wrap it in a data URL, offer it for download.

use crate::error::{DashError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::{Path, PathBuf};

/// Scheme prefix of the preview link.
pub const DATA_URL_PREFIX: &str = "data:text/html;base64,";
/// File name offered by the download button.
pub const DOWNLOAD_FILE_NAME: &str = "leman-bicer-ders-programi.html";
pub const DOWNLOAD_MIME: &str = "text/html";

pub const SCHEDULE_TITLE: &str = "LEMAN BİÇER - Ders Programı (Tablo)";
pub const SCHEDULE_CAPTION: &str = "2025-2026 Güz Dönemi";

/// Read the timetable as UTF-8 text, unchanged.
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let html = fs::read_to_string(path).map_err(|e| DashError::from_io(path, e))?;
    log::debug!("loaded schedule ({} bytes) from {}", html.len(), path.display());
    Ok(html)
}

/// `data:text/html;base64,...` link that opens the page without a server.
pub fn build_preview_url(html: &str) -> String {
    let mut url = String::with_capacity(DATA_URL_PREFIX.len() + html.len().div_ceil(3) * 4);
    url.push_str(DATA_URL_PREFIX);
    STANDARD.encode_string(html.as_bytes(), &mut url);
    url
}

/// Inverse of [`build_preview_url`]. `None` if the prefix or payload is not ours.
pub fn decode_preview_url(url: &str) -> Option<String> {
    let payload = url.strip_prefix(DATA_URL_PREFIX)?;
    let bytes = STANDARD.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}

/// Write the page verbatim to `dir/leman-bicer-ders-programi.html`.
pub fn save_download<P: AsRef<Path>>(html: &str, dir: P) -> Result<PathBuf> {
    let path = dir.as_ref().join(DOWNLOAD_FILE_NAME);
    fs::write(&path, html.as_bytes()).map_err(|e| DashError::from_io(&path, e))?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
