use std::path::PathBuf;

use thiserror::Error;

use crate::version::types::Channel;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("build target not set")]
    MissingBuild,

    #[error("unknown build target {0:?} (expected \"stable\" or \"unstable\")")]
    InvalidBuild(String),

    #[error("download directory not set")]
    MissingDownloadDir,

    #[error("patch directory not set")]
    MissingPatchDir,
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to fetch download listing {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("download listing {url} returned unexpected status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no {channel} release found in the download listing")]
    NoMatch { channel: Channel },
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("failed to download tarball {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("tarball {url} returned unexpected status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot derive a file name from {0}")]
    InvalidUrl(String),

    #[error("failed to write tarball to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
