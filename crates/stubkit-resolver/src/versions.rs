//! Stable-version enumeration from per-artifact repository metadata.
//!
//! Metadata is always re-queried from the network, never cached: published
//! version lists grow over time, unlike the immutable per-version POMs.

use reqwest::Client;
use tracing::{debug, warn};

use stubkit_maven::download::download_bytes;
use stubkit_maven::metadata::parse_metadata;
use stubkit_maven::repository::MavenRepository;

use crate::version::is_stable;

/// Return all stable published versions for `group:artifact`, newest first.
///
/// Mirrors are tried in priority order; the first one whose metadata
/// parses into a non-empty stable list wins. Malformed metadata counts as
/// a miss for that mirror. If no mirror yields a usable list the result is
/// empty, which is a warning rather than an error.
pub async fn fetch_all_stable_versions(
    client: &Client,
    repos: &[MavenRepository],
    group: &str,
    artifact: &str,
) -> Vec<String> {
    debug!("Looking up stable versions for {group}:{artifact}");

    for repo in repos {
        let url = repo.metadata_url(group, artifact);
        let raw = match download_bytes(client, &url).await {
            Ok(Some(raw)) => raw,
            Ok(None) => continue,
            Err(e) => {
                warn!("Mirror {} failed for {group}:{artifact} metadata: {e}", repo.url);
                continue;
            }
        };

        let meta = match parse_metadata(&String::from_utf8_lossy(&raw)) {
            Ok(meta) => meta,
            Err(e) => {
                warn!("Malformed metadata for {group}:{artifact} from {}: {e}", repo.url);
                continue;
            }
        };

        let stable = stable_versions(&meta.versions);
        if !stable.is_empty() {
            return stable;
        }
    }

    warn!("Could not determine stable versions for {group}:{artifact}");
    Vec::new()
}

/// Filter an oldest-first version listing down to stable entries, newest
/// first.
pub fn stable_versions(versions: &[String]) -> Vec<String> {
    versions
        .iter()
        .rev()
        .filter(|v| is_stable(v))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn newest_first_and_prereleases_dropped() {
        let versions = list(&["1.0.0-beta", "1.0.0", "1.1.0", "2.0.0-rc1"]);
        assert_eq!(stable_versions(&versions), list(&["1.1.0", "1.0.0"]));
    }

    #[test]
    fn all_prereleases_yield_empty() {
        let versions = list(&["1.0-SNAPSHOT", "1.0.0-alpha01"]);
        assert!(stable_versions(&versions).is_empty());
    }

    #[test]
    fn empty_listing_yields_empty() {
        assert!(stable_versions(&[]).is_empty());
    }
}
