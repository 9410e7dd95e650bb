//! Core types for Go release versions

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Pre-release marker embedded in a version token (e.g. `go1.9beta2`).
///
/// A version without a marker is a stable release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseTag {
    Beta,
    Rc,
}

impl ReleaseTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseTag::Beta => "beta",
            ReleaseTag::Rc => "rc",
        }
    }
}

/// Tag priority used as an ordering tie-break, lowest first.
/// Stable (no tag) outranks rc, which outranks beta.
const RELEASE_PRIORITY: [Option<ReleaseTag>; 3] =
    [Some(ReleaseTag::Beta), Some(ReleaseTag::Rc), None];

/// A Go release parsed from a source-archive link.
///
/// For pre-releases the trailing number is stored in `patch` (so
/// `go1.9beta2` has `patch == 2`); `release` disambiguates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub release: Option<ReleaseTag>,
    /// The href this version was parsed from, kept for the download step.
    pub source_url: String,
}

impl GoVersion {
    /// Whether this is a stable release (no beta/rc marker).
    pub fn is_stable(&self) -> bool {
        self.release.is_none()
    }

    /// Strict greater-than over (major, minor, release rank, patch).
    ///
    /// The patch number is compared last: for pre-releases it holds the
    /// beta/rc sequence number, which must not be weighed against a true
    /// patch number before the release rank has settled the tier.
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.sort_key() > other.sort_key()
    }

    fn sort_key(&self) -> (u32, u32, usize, u32) {
        (self.major, self.minor, release_rank(self.release), self.patch)
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.release {
            None => write!(f, "go{}.{}.{}", self.major, self.minor, self.patch),
            Some(tag) => write!(
                f,
                "go{}.{}{}{}",
                self.major,
                self.minor,
                tag.as_str(),
                self.patch
            ),
        }
    }
}

/// Rank of a release tag in the priority list, starting at 1.
fn release_rank(tag: Option<ReleaseTag>) -> usize {
    RELEASE_PRIORITY
        .iter()
        .position(|p| *p == tag)
        .map_or(0, |i| i + 1)
}

/// Release class a build target selects from the download listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stable,
    Unstable,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Stable => f.write_str("stable"),
            Channel::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for Channel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Channel::Stable),
            "unstable" => Ok(Channel::Unstable),
            other => Err(ConfigError::InvalidBuild(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn version(major: u32, minor: u32, patch: u32, release: Option<ReleaseTag>) -> GoVersion {
        GoVersion {
            major,
            minor,
            patch,
            release,
            source_url: String::new(),
        }
    }

    #[rstest]
    #[case(version(2, 0, 0, None), version(1, 9, 9, None))] // major beats everything
    #[case(version(1, 10, 0, None), version(1, 9, 9, None))] // minor next
    #[case(version(1, 9, 0, None), version(1, 9, 0, Some(ReleaseTag::Rc)))] // stable > rc
    #[case(version(1, 9, 0, Some(ReleaseTag::Rc)), version(1, 9, 0, Some(ReleaseTag::Beta)))] // rc > beta
    #[case(version(1, 9, 5, Some(ReleaseTag::Beta)), version(1, 9, 2, Some(ReleaseTag::Beta)))] // patch last
    fn is_newer_than_orders_versions(#[case] newer: GoVersion, #[case] older: GoVersion) {
        assert!(newer.is_newer_than(&older));
        assert!(!older.is_newer_than(&newer));
    }

    #[rstest]
    #[case(version(1, 9, 0, None))]
    #[case(version(1, 9, 2, Some(ReleaseTag::Beta)))]
    fn is_newer_than_is_irreflexive(#[case] v: GoVersion) {
        assert!(!v.is_newer_than(&v));
    }

    #[test]
    fn release_tag_beats_lower_tag_before_patch() {
        // rc1 beats beta9 even though 9 > 1: the rank tier settles first.
        let rc = version(1, 9, 1, Some(ReleaseTag::Rc));
        let beta = version(1, 9, 9, Some(ReleaseTag::Beta));
        assert!(rc.is_newer_than(&beta));
    }

    #[rstest]
    #[case(version(1, 21, 0, None), "go1.21.0")]
    #[case(version(1, 9, 2, Some(ReleaseTag::Beta)), "go1.9beta2")]
    #[case(version(1, 10, 1, Some(ReleaseTag::Rc)), "go1.10rc1")]
    fn display_formats_version_token(#[case] v: GoVersion, #[case] expected: &str) {
        assert_eq!(v.to_string(), expected);
    }

    #[rstest]
    #[case("stable", Channel::Stable)]
    #[case("unstable", Channel::Unstable)]
    fn channel_parses_known_names(#[case] input: &str, #[case] expected: Channel) {
        assert_eq!(input.parse::<Channel>().unwrap(), expected);
    }

    #[test]
    fn channel_rejects_unknown_names() {
        assert!("nightly".parse::<Channel>().is_err());
        assert!("".parse::<Channel>().is_err());
    }
}
