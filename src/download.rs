//! Tarball download step
//!
//! Saves the chosen release's source archive under the configured
//! download directory. A file with the archive's basename already
//! present there short-circuits the download entirely. There is no
//! checksum and no atomic rename; an interrupted write leaves a partial
//! file behind.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::DownloadError;

/// Fetch a source archive into `download_dir`, returning the local path.
///
/// Skips the network entirely when `<download_dir>/<basename>` already
/// exists. Otherwise performs a single GET and streams the body to a
/// newly created file.
pub async fn fetch_tarball(
    client: &reqwest::Client,
    url: &str,
    download_dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let file_name = url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| DownloadError::InvalidUrl(url.to_string()))?;
    let dest = download_dir.join(file_name);

    if dest.exists() {
        info!("tarball already exists, skipping download: {}", dest.display());
        return Ok(dest);
    }

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DownloadError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    let mut file = File::create(&dest)
        .await
        .map_err(|source| DownloadError::Write {
            path: dest.clone(),
            source,
        })?;

    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|source| DownloadError::Fetch {
            url: url.to_string(),
            source,
        })?;
        file.write_all(&chunk)
            .await
            .map_err(|source| DownloadError::Write {
                path: dest.clone(),
                source,
            })?;
    }
    file.flush()
        .await
        .map_err(|source| DownloadError::Write {
            path: dest.clone(),
            source,
        })?;

    info!("saved tarball to {}", dest.display());
    Ok(dest)
}
