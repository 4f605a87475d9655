//! Operation: POM cache inspection and manual eviction.

use std::path::Path;

use stubkit_core::config::Config;
use stubkit_maven::cache::PomCache;
use stubkit_util::progress::{status, status_info};

/// Print the cache location and its current size.
pub fn stats(root: &Path) -> miette::Result<()> {
    let config = Config::load(root)?;
    let cache = PomCache::new(config.cache_root(root));

    status_info("Cache", &cache.root().display().to_string());
    let size = cache.size();
    status_info("Size", &format_size(size));
    Ok(())
}

/// Delete the POM cache directory. This is the only eviction path; entries
/// are otherwise kept forever.
pub fn clean(root: &Path) -> miette::Result<()> {
    let config = Config::load(root)?;
    let cache = PomCache::new(config.cache_root(root));

    let size = cache.size();
    cache.clean()?;
    status("Cleaned", &format!("{} ({})", cache.root().display(), format_size(size)));
    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
