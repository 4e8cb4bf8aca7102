use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("no header row with the registry columns found in {path}")]
    HeaderNotFound { path: PathBuf },
    #[error("sheet is missing expected columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

pub type Result<T> = std::result::Result<T, IngestError>;
