use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TerminologyError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("terminology service returned status {0}")]
    Status(u16),

    #[error("malformed terminology response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to persist cache to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TerminologyError>;
