use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AcquireError>;
