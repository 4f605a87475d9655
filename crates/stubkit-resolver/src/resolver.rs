//! Transitive dependency resolution.
//!
//! The walk is depth-first in POM declaration order, guarded by a visited
//! set so cyclic and diamond graphs terminate with each coordinate fetched
//! at most once. Version conflicts are settled by first-write-wins: the
//! first version discovered for a `group:artifact` pair is kept, and seed
//! coordinates are written before the walk starts so they always win.

use std::collections::{BTreeMap, HashSet};

use futures_util::future::BoxFuture;
use reqwest::Client;
use tracing::{debug, info};

use stubkit_core::coordinate::MavenCoordinate;
use stubkit_maven::cache::PomCache;
use stubkit_maven::fetch::fetch_pom;
use stubkit_maven::pom::PropertyTable;
use stubkit_maven::repository::MavenRepository;

use crate::version::concrete_version;

/// Accumulator state for one resolution run.
#[derive(Debug, Default)]
pub struct ResolverContext {
    /// `group:artifact` → resolved version, first-write-wins.
    resolved: BTreeMap<String, String>,
    /// Fully qualified `group:artifact:version` strings already expanded.
    visited: HashSet<String>,
}

impl ResolverContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared handles for one resolution run.
pub struct Resolver<'a> {
    client: &'a Client,
    repos: &'a [MavenRepository],
    cache: &'a PomCache,
}

impl<'a> Resolver<'a> {
    pub fn new(client: &'a Client, repos: &'a [MavenRepository], cache: &'a PomCache) -> Self {
        Self {
            client,
            repos,
            cache,
        }
    }

    /// Resolve the transitive closure of `seeds`.
    ///
    /// Returns the flattened `group:artifact` → version mapping, ordered by
    /// key. Every seed's own version is inserted before the walk, so a seed
    /// always wins over any transitively discovered version for the same
    /// pair.
    pub async fn resolve(
        &self,
        seeds: &[MavenCoordinate],
    ) -> miette::Result<BTreeMap<String, String>> {
        let mut ctx = ResolverContext::new();
        for seed in seeds {
            ctx.resolved.insert(seed.key(), seed.version.clone());
        }

        for seed in seeds {
            info!("Resolving {seed}");
            self.expand(seed.clone(), &mut ctx, 0).await?;
        }

        Ok(ctx.resolved)
    }

    /// Expand one coordinate: fetch its POM and walk its surviving
    /// dependency edges depth-first.
    ///
    /// Boxed because the recursion depth follows the real dependency graph.
    fn expand<'s>(
        &'s self,
        coord: MavenCoordinate,
        ctx: &'s mut ResolverContext,
        depth: usize,
    ) -> BoxFuture<'s, miette::Result<()>> {
        Box::pin(async move {
            let coord_key = coord.name();
            if !ctx.visited.insert(coord_key.clone()) {
                debug!("[visited] {coord_key}");
                return Ok(());
            }

            let indent = "  ".repeat(depth);
            info!("{indent}→ {coord_key}");

            let Some(pom) = fetch_pom(self.client, self.repos, self.cache, &coord).await? else {
                // Nothing to expand; the rest of the run is unaffected
                return Ok(());
            };

            let props = PropertyTable::for_pom(&pom, &coord);

            for dep in &pom.dependencies {
                let dep_group = props.substitute(&dep.group_id);
                let dep_artifact = props.substitute(&dep.artifact_id);
                let dep_spec = dep
                    .version
                    .as_deref()
                    .map(|v| props.substitute(v))
                    .unwrap_or_default();
                let dep_scope = dep.scope.as_deref().unwrap_or("compile");

                if dep_group.is_empty() || dep_artifact.is_empty() {
                    continue;
                }
                if dep_scope != "compile" && dep_scope != "runtime" {
                    debug!("Skipping {dep_group}:{dep_artifact} (scope={dep_scope})");
                    continue;
                }
                if dep.optional {
                    debug!("Skipping {dep_group}:{dep_artifact} (optional)");
                    continue;
                }

                let ga = format!("{dep_group}:{dep_artifact}");
                match concrete_version(&dep_spec) {
                    Some(effective) => {
                        if effective != dep_spec {
                            debug!("Resolved version spec {dep_spec} → {effective}");
                        }
                        ctx.resolved
                            .entry(ga)
                            .or_insert_with(|| effective.to_string());
                        let child = MavenCoordinate {
                            group_id: dep_group,
                            artifact_id: dep_artifact,
                            version: effective.to_string(),
                        };
                        self.expand(child, &mut *ctx, depth + 1).await?;
                    }
                    None => {
                        info!("{indent}  unresolvable version {dep_spec:?} for {ga}, skipping");
                    }
                }
            }

            Ok(())
        })
    }
}
