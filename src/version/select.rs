//! Latest-version selection over scanned release candidates

use crate::version::types::{Channel, GoVersion};

/// The newest release found per channel.
///
/// A `None` slot means the listing contained no candidate of that class;
/// callers must treat it as "not found" rather than receiving a
/// zero-valued version that could be mistaken for a real release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestReleases {
    pub stable: Option<GoVersion>,
    pub unstable: Option<GoVersion>,
}

impl LatestReleases {
    /// The newest release for a build channel, if one was found.
    pub fn for_channel(&self, channel: Channel) -> Option<&GoVersion> {
        match channel {
            Channel::Stable => self.stable.as_ref(),
            Channel::Unstable => self.unstable.as_ref(),
        }
    }
}

/// Fold candidates into the newest stable and unstable release.
///
/// Each candidate is classified by its release tag and replaces the
/// running maximum of its class when strictly newer.
pub fn select_latest(candidates: impl IntoIterator<Item = GoVersion>) -> LatestReleases {
    let mut latest = LatestReleases::default();

    for candidate in candidates {
        let slot = if candidate.is_stable() {
            &mut latest.stable
        } else {
            &mut latest.unstable
        };
        let newer = slot
            .as_ref()
            .is_none_or(|current| candidate.is_newer_than(current));
        if newer {
            *slot = Some(candidate);
        }
    }

    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parse::parse_source_archive;
    use crate::version::types::ReleaseTag;

    fn candidates(names: &[&str]) -> Vec<GoVersion> {
        names
            .iter()
            .map(|name| {
                parse_source_archive(&format!("/dl/{name}.src.tar.gz"))
                    .unwrap_or_else(|| panic!("fixture {name} should parse"))
            })
            .collect()
    }

    #[test]
    fn picks_newest_per_channel() {
        let latest = select_latest(candidates(&["go1.8.0", "go1.9beta1", "go1.9rc2", "go1.9.0"]));

        let stable = latest.stable.unwrap();
        assert_eq!((stable.major, stable.minor, stable.patch), (1, 9, 0));
        assert!(stable.is_stable());

        // rc beats beta at equal major/minor.
        let unstable = latest.unstable.unwrap();
        assert_eq!((unstable.major, unstable.minor, unstable.patch), (1, 9, 2));
        assert_eq!(unstable.release, Some(ReleaseTag::Rc));
    }

    #[test]
    fn missing_channel_is_reported_as_not_found() {
        let latest = select_latest(candidates(&["go1.21.0"]));
        assert!(latest.stable.is_some());
        assert_eq!(latest.unstable, None);
        assert_eq!(latest.for_channel(Channel::Unstable), None);
    }

    #[test]
    fn empty_scan_yields_no_releases() {
        let latest = select_latest([]);
        assert_eq!(latest, LatestReleases::default());
    }

    #[test]
    fn for_channel_selects_the_matching_slot() {
        let latest = select_latest(candidates(&["go1.20.5", "go1.21rc3"]));
        assert_eq!(
            latest.for_channel(Channel::Stable),
            latest.stable.as_ref()
        );
        assert_eq!(
            latest.for_channel(Channel::Unstable),
            latest.unstable.as_ref()
        );
    }

    #[test]
    fn later_equal_candidate_does_not_replace_the_maximum() {
        let first = candidates(&["go1.21.0"]).remove(0);
        let mut duplicate = first.clone();
        duplicate.source_url = "/mirror/go1.21.0.src.tar.gz".to_string();

        let latest = select_latest([first.clone(), duplicate]);
        assert_eq!(latest.stable.unwrap().source_url, first.source_url);
    }
}
