//! Cache-first POM retrieval with in-order mirror fallback.

use reqwest::Client;
use tracing::{debug, warn};

use stubkit_core::coordinate::MavenCoordinate;

use crate::cache::PomCache;
use crate::download;
use crate::pom::{self, Pom};
use crate::repository::MavenRepository;

/// Fetch and parse the POM for a coordinate.
///
/// The cache is consulted first; on miss each mirror is tried once in
/// priority order, and the first successful response is written to the
/// cache before being parsed. A 404 falls through to the next mirror
/// silently; transport errors and malformed documents are logged and
/// treated the same way. `Ok(None)` means no mirror had a usable document.
pub async fn fetch_pom(
    client: &Client,
    repos: &[MavenRepository],
    cache: &PomCache,
    coord: &MavenCoordinate,
) -> miette::Result<Option<Pom>> {
    let (group, artifact, version) = (&coord.group_id, &coord.artifact_id, &coord.version);

    if let Some(raw) = cache.get(group, artifact, version) {
        debug!("POM cache hit: {coord}");
        match pom::parse_pom(&String::from_utf8_lossy(&raw)) {
            Ok(pom) => return Ok(Some(pom)),
            Err(e) => warn!("Cached POM for {coord} is malformed, refetching: {e}"),
        }
    }

    for repo in repos {
        let url = repo.pom_url(group, artifact, version);
        let raw = match download::download_bytes(client, &url).await {
            Ok(Some(raw)) => raw,
            Ok(None) => continue,
            Err(e) => {
                warn!("Mirror {} failed for {coord}: {e}", repo.url);
                continue;
            }
        };

        debug!("Fetched POM {coord} from {}", repo.url);
        cache.put(group, artifact, version, &raw)?;

        match pom::parse_pom(&String::from_utf8_lossy(&raw)) {
            Ok(pom) => return Ok(Some(pom)),
            Err(e) => {
                warn!("Malformed POM for {coord} from {}: {e}", repo.url);
                continue;
            }
        }
    }

    warn!("POM not found in any repo: {coord}");
    Ok(None)
}
