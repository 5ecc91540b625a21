use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("missing source: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("malformed report: {0}")]
    MalformedReport(String),

    #[error("write failure for {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LabelResult<T> = Result<T, LabelError>;
