//! Operation: resolve the transitive dependency closure of a seed list.

use std::path::Path;

use tracing::info;

use stubkit_core::config::Config;
use stubkit_core::coordinate::{Coordinate, MavenCoordinate, PlatformCoordinate};
use stubkit_core::packages::parse_packages_file;
use stubkit_maven::cache::PomCache;
use stubkit_maven::download;
use stubkit_maven::repository::MavenRepository;
use stubkit_resolver::resolver::Resolver;
use stubkit_util::progress::{spinner, status};

/// Resolve every seed coordinate's transitive compile/runtime closure and
/// write the flattened, ordered result to `out`.
pub async fn resolve(root: &Path, base: &Path, out: &Path) -> miette::Result<()> {
    if !base.is_file() {
        return Err(crate::missing_input(base));
    }

    let config = Config::load(root)?;
    let entries = parse_packages_file(base)?;

    let mut platform: Vec<PlatformCoordinate> = Vec::new();
    let mut maven: Vec<MavenCoordinate> = Vec::new();
    for entry in entries {
        match entry {
            Coordinate::Platform(p) => platform.push(p),
            Coordinate::Maven(m) => maven.push(m),
        }
    }
    info!(
        "Base packages ({}): {} platform, {} Maven",
        platform.len() + maven.len(),
        platform.len(),
        maven.len()
    );

    let client = download::build_client()?;
    let repos = MavenRepository::from_urls(&config.repositories);
    let cache = PomCache::new(config.cache_root(root));

    let sp = spinner("Resolving dependencies...");
    let resolver = Resolver::new(&client, &repos, &cache);
    let resolved = resolver.resolve(&maven).await?;
    sp.finish_and_clear();

    let mut platform_lines: Vec<String> = platform.iter().map(|p| p.name()).collect();
    platform_lines.sort();
    let maven_lines: Vec<String> = resolved
        .iter()
        .map(|(ga, version)| format!("{ga}:{version}"))
        .collect();

    let platform_count = platform_lines.len();
    let maven_count = maven_lines.len();
    let mut lines = platform_lines;
    lines.extend(maven_lines);
    crate::write_packages_file(out, &lines)?;

    status(
        "Resolved",
        &format!(
            "{} packages → {} ({platform_count} platform, {maven_count} Maven)",
            lines.len(),
            out.display()
        ),
    );
    Ok(())
}
