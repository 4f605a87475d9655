//! Maven repository abstraction: mirror list and URL layout.

/// Maven Central base URL.
pub const MAVEN_CENTRAL_URL: &str = "https://repo1.maven.org/maven2";

/// Google's Maven repository for Android artifacts.
pub const GOOGLE_MAVEN_URL: &str = "https://dl.google.com/dl/android/maven2";

/// A configured repository mirror.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    pub url: String,
}

impl MavenRepository {
    /// Build a repository from a base URL, normalizing trailing slashes.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Construct the default Maven Central repository.
    pub fn maven_central() -> Self {
        Self::new(MAVEN_CENTRAL_URL)
    }

    /// Construct the Google Maven repository.
    pub fn google() -> Self {
        Self::new(GOOGLE_MAVEN_URL)
    }

    /// Build the mirror list from configured URLs, preserving priority order.
    pub fn from_urls(urls: &[String]) -> Vec<Self> {
        urls.iter().map(|u| Self::new(u)).collect()
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `org.jetbrains.kotlinx:kotlinx-coroutines-core:1.8.0` becomes
    /// `org/jetbrains/kotlinx/kotlinx-coroutines-core/1.8.0`
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// URL to the POM file for a given coordinate.
    pub fn pom_url(&self, group: &str, artifact: &str, version: &str) -> String {
        format!(
            "{}/{}/{artifact}-{version}.pom",
            self.url,
            Self::coordinate_path(group, artifact, version)
        )
    }

    /// URL to the `maven-metadata.xml` at the artifact level (version listing).
    pub fn metadata_url(&self, group: &str, artifact: &str) -> String {
        format!(
            "{}/{}/{}/maven-metadata.xml",
            self.url,
            group.replace('.', "/"),
            artifact
        )
    }
}
