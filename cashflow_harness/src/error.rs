use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture file {}: {source}", path.display())]
    Fixtures {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Report encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
