//! Operation: enumerate all stable published versions per artifact.

use std::path::Path;

use tracing::info;

use stubkit_core::config::Config;
use stubkit_core::coordinate::Coordinate;
use stubkit_core::packages::parse_packages_file;
use stubkit_maven::download;
use stubkit_maven::repository::MavenRepository;
use stubkit_resolver::versions::fetch_all_stable_versions;
use stubkit_util::progress::status;

/// Expand every Maven coordinate in `base` to one line per stable version
/// (newest first); platform coordinates pass through unchanged.
pub async fn versions(root: &Path, base: &Path, out: &Path) -> miette::Result<()> {
    if !base.is_file() {
        return Err(crate::missing_input(base));
    }

    let config = Config::load(root)?;
    let entries = parse_packages_file(base)?;
    info!("Packages ({}) loaded from {}", entries.len(), base.display());

    let client = download::build_client()?;
    let repos = MavenRepository::from_urls(&config.repositories);

    let total = entries.len();
    let mut lines: Vec<String> = Vec::new();
    for (i, coord) in entries.iter().enumerate() {
        let i = i + 1;
        match coord {
            Coordinate::Platform(p) => {
                // Platform entries have no Maven versions, pass through as-is
                info!("[{i}/{total}] {} (platform, pass-through)", p.name());
                lines.push(p.name());
            }
            Coordinate::Maven(m) => {
                info!("[{i}/{total}] Fetching versions for {}:{}…", m.group_id, m.artifact_id);
                let versions =
                    fetch_all_stable_versions(&client, &repos, &m.group_id, &m.artifact_id).await;
                info!(" → {} stable versions found", versions.len());
                for v in versions {
                    lines.push(format!("{}:{}:{v}", m.group_id, m.artifact_id));
                }
            }
        }
    }

    crate::write_packages_file(out, &lines)?;
    status(
        "Enumerated",
        &format!("{} coordinates → {}", lines.len(), out.display()),
    );
    Ok(())
}
