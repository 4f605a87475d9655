//! Coordinate model: the two resolvable identity kinds handled by the
//! pipeline, an Android platform level and a Maven group:artifact:version
//! triple, plus the names derived from them for stub packaging.

use std::fmt;

/// Prefix for all generated stub package names.
pub const STUB_NAME_PREFIX: &str = "stubkit-stubs";

/// An Android platform coordinate, e.g. `android-35`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformCoordinate {
    pub api_level: u32,
}

impl PlatformCoordinate {
    /// Parse a platform token of the form `android-<N>`.
    pub fn parse(token: &str) -> Option<Self> {
        let level = token.strip_prefix("android-")?;
        if level.is_empty() || !level.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            api_level: level.parse().ok()?,
        })
    }

    /// Canonical name, identical to the input token form.
    pub fn name(&self) -> String {
        format!("android-{}", self.api_level)
    }

    /// Platform coordinates version as their API level.
    pub fn version(&self) -> String {
        self.api_level.to_string()
    }

    /// All platform levels share one stub package.
    pub fn stub_name(&self) -> String {
        format!("{STUB_NAME_PREFIX}-android")
    }

    pub fn readable_name(&self) -> String {
        format!("Android API Level {}", self.api_level)
    }
}

/// A Maven coordinate, e.g. `com.example:artifact:1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl MavenCoordinate {
    /// Parse `"group:artifact:version"` into a coordinate.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() == 3 {
            Some(Self {
                group_id: parts[0].to_string(),
                artifact_id: parts[1].to_string(),
                version: parts[2].to_string(),
            })
        } else {
            None
        }
    }

    /// Canonical `group:artifact:version` name.
    pub fn name(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// The `group:artifact` pair identifying the artifact across versions.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Derived stub package name: lowercase, dots replaced with hyphens.
    pub fn stub_name(&self) -> String {
        let group_slug = self.group_id.to_lowercase().replace('.', "-");
        let artifact_slug = self.artifact_id.to_lowercase().replace('.', "-");
        format!("{STUB_NAME_PREFIX}-{group_slug}-{artifact_slug}")
    }

    pub fn readable_name(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A package coordinate accepted by the pipeline.
///
/// Closed over exactly two kinds; every consumer matches both variants
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Coordinate {
    Platform(PlatformCoordinate),
    Maven(MavenCoordinate),
}

impl Coordinate {
    /// Canonical name: the platform token, or `group:artifact:version`.
    pub fn name(&self) -> String {
        match self {
            Coordinate::Platform(p) => p.name(),
            Coordinate::Maven(m) => m.name(),
        }
    }

    /// Version string: the API level for platforms, the Maven version otherwise.
    pub fn version(&self) -> String {
        match self {
            Coordinate::Platform(p) => p.version(),
            Coordinate::Maven(m) => m.version.clone(),
        }
    }

    /// Name of the stub package generated for this coordinate.
    pub fn stub_name(&self) -> String {
        match self {
            Coordinate::Platform(p) => p.stub_name(),
            Coordinate::Maven(m) => m.stub_name(),
        }
    }

    /// Human-readable label for scaffold rendering.
    pub fn readable_name(&self) -> String {
        match self {
            Coordinate::Platform(p) => p.readable_name(),
            Coordinate::Maven(m) => m.readable_name(),
        }
    }

    /// The coordinate form passed to the external stub generator.
    pub fn generator_coord(&self) -> String {
        match self {
            Coordinate::Platform(p) => p.name(),
            Coordinate::Maven(m) => m.name(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_token_round_trip() {
        let p = PlatformCoordinate::parse("android-35").unwrap();
        assert_eq!(p.api_level, 35);
        assert_eq!(p.name(), "android-35");
        assert_eq!(p.version(), "35");
        assert_eq!(p.stub_name(), "stubkit-stubs-android");
        assert_eq!(p.readable_name(), "Android API Level 35");
    }

    #[test]
    fn platform_token_rejects_junk() {
        assert!(PlatformCoordinate::parse("android-").is_none());
        assert!(PlatformCoordinate::parse("android-x").is_none());
        assert!(PlatformCoordinate::parse("android-35-beta").is_none());
        assert!(PlatformCoordinate::parse("ios-17").is_none());
    }

    #[test]
    fn maven_parse_requires_three_fields() {
        let m = MavenCoordinate::parse("com.example:lib:1.0.0").unwrap();
        assert_eq!(m.group_id, "com.example");
        assert_eq!(m.artifact_id, "lib");
        assert_eq!(m.version, "1.0.0");

        assert!(MavenCoordinate::parse("com.example:lib").is_none());
        assert!(MavenCoordinate::parse("com.example:lib:1.0:extra").is_none());
    }

    #[test]
    fn stub_name_is_lowercase_with_hyphens() {
        let m = MavenCoordinate::parse("androidx.Compose.ui:UI-tooling:1.5.0").unwrap();
        assert_eq!(
            m.stub_name(),
            "stubkit-stubs-androidx-compose-ui-ui-tooling"
        );
    }

    #[test]
    fn coordinate_names_delegate_per_variant() {
        let p = Coordinate::Platform(PlatformCoordinate { api_level: 34 });
        let m = Coordinate::Maven(MavenCoordinate::parse("g.h:a:2.0").unwrap());
        assert_eq!(p.name(), "android-34");
        assert_eq!(p.generator_coord(), "android-34");
        assert_eq!(m.name(), "g.h:a:2.0");
        assert_eq!(m.generator_coord(), "g.h:a:2.0");
        assert_eq!(m.readable_name(), "g.h:a");
    }
}
