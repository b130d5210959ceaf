use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single entry. Recorded in the report, never aborts a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DownloadError {
    #[error("invalid url {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    InvalidBody(String),

    #[error("error saving file {path:?}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("error creating directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error listing directory {path:?}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
