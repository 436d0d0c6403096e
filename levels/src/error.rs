use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("reading {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    #[error("invalid level document: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("level source {url} unavailable: {source}")]
    SourceUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
