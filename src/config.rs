//! Configuration for the gofetch CLI
//!
//! Settings come from three layers: command-line flags override
//! `GOFETCH_*` environment variables, which override the config file
//! (`~/.gofetch.json` unless `--config` points elsewhere). The build
//! target, download directory, and patch directory are all required.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::version::types::Channel;

/// Raw settings as read from the config file
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FileConfig {
    /// Build target: "stable" or "unstable"
    pub build: Option<String>,
    /// Download directory for tarballs
    pub download: Option<String>,
    /// Patch directory handed to the build step
    pub patch: Option<String>,
    /// Download listing URL override (defaults to the Go download page)
    pub listing_url: Option<String>,
}

/// Overrides from one layer above the config file (flags or environment)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub build: Option<String>,
    pub download: Option<PathBuf>,
    pub patch: Option<PathBuf>,
}

/// Fully resolved and validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub build: Channel,
    pub download_dir: PathBuf,
    pub patch_dir: PathBuf,
    /// `None` means the index's default listing URL.
    pub listing_url: Option<String>,
}

impl Config {
    /// Load and resolve configuration from all layers.
    ///
    /// A missing file at the default path is fine (everything can come
    /// from flags and environment); a missing file named explicitly via
    /// `--config` is an error.
    pub fn load(config_file: Option<&Path>, cli: Overrides) -> Result<Self, ConfigError> {
        let (path, explicit) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (default_config_path(dirs::home_dir()), false),
        };
        let file = read_file_config(&path, explicit)?;
        Self::resolve(file, env_overrides(), cli)
    }

    /// Merge the three layers (flags > environment > file) and validate.
    pub fn resolve(file: FileConfig, env: Overrides, cli: Overrides) -> Result<Self, ConfigError> {
        let build = cli
            .build
            .or(env.build)
            .or(file.build)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingBuild)?;

        let download_dir = cli
            .download
            .or(env.download)
            .or(file.download.map(PathBuf::from))
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingDownloadDir)?;

        let patch_dir = cli
            .patch
            .or(env.patch)
            .or(file.patch.map(PathBuf::from))
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingPatchDir)?;

        Ok(Config {
            build: build.parse()?,
            download_dir,
            patch_dir,
            listing_url: file.listing_url.filter(|s| !s.is_empty()),
        })
    }
}

/// Returns the default config file path, `~/.gofetch.json`.
fn default_config_path(home_dir: Option<PathBuf>) -> PathBuf {
    home_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gofetch.json")
}

fn read_file_config(path: &Path, explicit: bool) -> Result<FileConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound && !explicit => {
            return Ok(FileConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn env_overrides() -> Overrides {
    Overrides {
        build: std::env::var("GOFETCH_BUILD").ok(),
        download: std::env::var("GOFETCH_DOWNLOAD").ok().map(PathBuf::from),
        patch: std::env::var("GOFETCH_PATCH").ok().map(PathBuf::from),
    }
}
