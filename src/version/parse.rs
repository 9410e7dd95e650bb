//! Version token parser for source-archive links
//!
//! Extracts a [`GoVersion`] from an href on the download page. Only links
//! ending in `.src.tar.gz` are considered; everything else on the page
//! (binary archives, docs, unrelated navigation) is filtered out silently.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::types::{GoVersion, ReleaseTag};

/// Suffix identifying a Go source archive.
pub const SOURCE_SUFFIX: &str = ".src.tar.gz";

/// Version token: `go<major>.<minor>`, optionally followed by `.<patch>`
/// or `<beta|rc><n>`.
///
/// ```text
/// go1.3.1     -> (1, 3) sep="."    n=1
/// go1.3       -> (1, 3)
/// go1.9beta2  -> (1, 9) sep="beta" n=2
/// ```
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"go(\d+)\.(\d+)((\.|rc|beta)(\d+))?").unwrap());

/// Parse a source-archive href into a [`GoVersion`].
///
/// Returns `None` for links that are not source archives or carry no
/// version token; this is filtering, not an error. The href is kept on
/// the returned version for the download step.
pub fn parse_source_archive(href: &str) -> Option<GoVersion> {
    if !href.ends_with(SOURCE_SUFFIX) {
        return None;
    }

    let mut version = None;
    // A link is expected to carry exactly one token; if the pattern
    // somehow matches more than once, the last match wins.
    for caps in TOKEN_RE.captures_iter(href) {
        let major = caps[1].parse().unwrap_or(0);
        let minor = caps[2].parse().unwrap_or(0);
        let patch = caps
            .get(5)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));

        // The bare `.` patch separator is not a release tag.
        let release = match caps.get(4).map(|m| m.as_str()) {
            Some("beta") => Some(ReleaseTag::Beta),
            Some("rc") => Some(ReleaseTag::Rc),
            _ => None,
        };

        version = Some(GoVersion {
            major,
            minor,
            patch,
            release,
            source_url: href.to_string(),
        });
    }

    version
}
