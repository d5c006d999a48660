use std::path::PathBuf;

/// Errors raised while loading dashboard inputs.
///
/// Missing data for a country/year is *not* an error: the growth calculator
/// reports it as `"Data unavailable"` / `"n/a"` instead.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed GDP table: {0}")]
    Format(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {error}", path.display())]
    Config { path: PathBuf, error: String },
}

pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Map an I/O error on `path`, turning `NotFound` into the dedicated variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DashError::NotFound { path }
        } else {
            DashError::Io { path, source }
        }
    }
}
