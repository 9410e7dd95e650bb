//! Release index: discovery of the Go versions offered for download

pub mod dl_page;

pub use dl_page::DlPageIndex;

#[cfg(test)]
use mockall::automock;

use crate::error::IndexError;
use crate::version::select::{LatestReleases, select_latest};
use crate::version::types::GoVersion;

/// Trait for listing the versions currently published on a download index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseIndex: Send + Sync {
    /// Fetches every version with a source archive on the index, in
    /// listing order.
    ///
    /// Links that are not source archives are filtered out, not errors;
    /// only transport failures and unexpected statuses are.
    async fn fetch_versions(&self) -> Result<Vec<GoVersion>, IndexError>;
}

/// Scan the index once and reduce it to the newest release per channel.
pub async fn discover_latest<I: ReleaseIndex>(index: &I) -> Result<LatestReleases, IndexError> {
    let versions = index.fetch_versions().await?;
    Ok(select_latest(versions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parse::parse_source_archive;

    fn fixture(name: &str) -> GoVersion {
        parse_source_archive(&format!("/dl/{name}.src.tar.gz")).unwrap()
    }

    #[tokio::test]
    async fn discover_latest_reduces_the_scan_to_one_release_per_channel() {
        let mut index = MockReleaseIndex::new();
        index.expect_fetch_versions().times(1).returning(|| {
            Ok(vec![
                fixture("go1.8.0"),
                fixture("go1.9beta1"),
                fixture("go1.9rc2"),
                fixture("go1.9.0"),
            ])
        });

        let latest = discover_latest(&index).await.unwrap();
        assert_eq!(latest.stable.unwrap().to_string(), "go1.9.0");
        assert_eq!(latest.unstable.unwrap().to_string(), "go1.9rc2");
    }

    #[tokio::test]
    async fn discover_latest_propagates_index_errors() {
        let mut index = MockReleaseIndex::new();
        index.expect_fetch_versions().returning(|| {
            Err(IndexError::UnexpectedStatus {
                url: "https://go.dev/dl/".to_string(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            })
        });

        let result = discover_latest(&index).await;
        assert!(matches!(
            result,
            Err(IndexError::UnexpectedStatus { .. })
        ));
    }
}
