use levels::LevelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeightmapError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("degenerate sampling range, {width}x{height} grid requested")]
    DegenerateRange { width: usize, height: usize },

    #[error("{0}")]
    SourceUnavailable(#[source] LevelError),

    #[error("writing {path}: {source}")]
    EmitFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<LevelError> for HeightmapError {
    fn from(err: LevelError) -> Self {
        match err {
            err @ LevelError::SourceUnavailable { .. } => Self::SourceUnavailable(err),
            err @ (LevelError::Io(..) | LevelError::Schema(_)) => {
                Self::InvalidInput(err.to_string())
            }
        }
    }
}
