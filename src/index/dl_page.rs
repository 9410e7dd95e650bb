//! Go download page index
//!
//! Scrapes the HTML download listing for source-archive links. The page
//! layout is not contractual; any well-formed listing with anchor tags
//! works, which is why the scan looks at nothing but `<a href>` values.

use scraper::{Html, Selector};
use tracing::warn;

use crate::error::IndexError;
use crate::index::ReleaseIndex;
use crate::version::parse::parse_source_archive;
use crate::version::types::GoVersion;

/// Default URL of the Go download listing
const DEFAULT_BASE_URL: &str = "https://go.dev/dl/";

/// Index implementation backed by the Go download page
pub struct DlPageIndex {
    client: reqwest::Client,
    url: String,
}

impl DlPageIndex {
    /// Creates a new DlPageIndex reading a custom listing URL
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("gofetch")
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

impl Default for DlPageIndex {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseIndex for DlPageIndex {
    async fn fetch_versions(&self) -> Result<Vec<GoVersion>, IndexError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| IndexError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("download listing returned status {}: {}", status, self.url);
            return Err(IndexError::UnexpectedStatus {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| IndexError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        Ok(scan_listing(&body))
    }
}

/// Walk every anchor in the document, in document order, and keep the
/// hrefs that parse as source archives.
///
/// scraper's parser recovers from malformed markup the way browsers do,
/// so a broken tag elsewhere on the page does not abort the scan.
fn scan_listing(html: &str) -> Vec<GoVersion> {
    let document = Html::parse_document(html);
    let anchor = Selector::parse("a").expect("anchor selector is valid");

    document
        .select(&anchor)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(parse_source_archive)
        .collect()
}
