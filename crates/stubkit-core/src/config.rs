//! Pipeline configuration loaded from an optional `stubkit.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use stubkit_util::errors::StubkitError;

/// Default Maven mirror list, tried in priority order.
pub const DEFAULT_REPOSITORIES: &[&str] = &[
    "https://repo1.maven.org/maven2",
    "https://dl.google.com/dl/android/maven2",
];

/// Pipeline configuration from `stubkit.toml`, with defaults for every key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository mirror URLs in fixed priority order.
    #[serde(default = "default_repositories")]
    pub repositories: Vec<String>,

    /// Root directory of the on-disk POM cache.
    #[serde(default = "default_cache_dir", rename = "cache-dir")]
    pub cache_dir: String,

    /// Output directory for generated stub packages.
    #[serde(default = "default_autogen_dir", rename = "autogen-dir")]
    pub autogen_dir: String,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repositories: default_repositories(),
            cache_dir: default_cache_dir(),
            autogen_dir: default_autogen_dir(),
            generator: GeneratorConfig::default(),
        }
    }
}

fn default_repositories() -> Vec<String> {
    DEFAULT_REPOSITORIES.iter().map(|s| s.to_string()).collect()
}

fn default_cache_dir() -> String {
    ".cache/pom".to_string()
}

fn default_autogen_dir() -> String {
    "autogen".to_string()
}

/// External stub generator settings from `[generator]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Command invoked per coordinate to produce stub sources.
    #[serde(default = "default_generator_command")]
    pub command: String,

    /// Version string recorded in generated scaffolds.
    #[serde(default = "default_generator_version")]
    pub version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: default_generator_command(),
            version: default_generator_version(),
        }
    }
}

fn default_generator_command() -> String {
    "stubgen".to_string()
}

fn default_generator_version() -> String {
    "0.0.0".to_string()
}

impl Config {
    /// Load configuration from `<root>/stubkit.toml`, or return defaults if
    /// the file doesn't exist.
    pub fn load(root: &Path) -> miette::Result<Self> {
        let path = root.join("stubkit.toml");
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| StubkitError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            toml::from_str(&content).map_err(|e| {
                StubkitError::Config {
                    message: format!("Failed to parse {}: {e}", path.display()),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Cache root resolved against the working directory.
    pub fn cache_root(&self, root: &Path) -> PathBuf {
        root.join(&self.cache_dir)
    }

    /// Autogen root resolved against the working directory.
    pub fn autogen_root(&self, root: &Path) -> PathBuf {
        root.join(&self.autogen_dir)
    }
}
