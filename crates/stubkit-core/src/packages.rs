//! Packages list file parsing.
//!
//! A packages file is plain UTF-8 text, one coordinate per line. Blank lines
//! and lines starting with `#` are comments. Each remaining line is either a
//! platform token (`android-35`) or three colon-separated fields
//! (`group:artifact:version`). Malformed lines are reported and skipped,
//! never fatal to the whole file.

use std::path::Path;

use tracing::warn;

use crate::coordinate::{Coordinate, MavenCoordinate, PlatformCoordinate};
use stubkit_util::errors::StubkitError;

/// Parse a packages file from disk.
///
/// Fails only if the file itself cannot be read; individual malformed lines
/// are warned about and excluded from the result.
pub fn parse_packages_file(path: &Path) -> miette::Result<Vec<Coordinate>> {
    let content = std::fs::read_to_string(path).map_err(|e| StubkitError::Packages {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    Ok(parse_packages(&content))
}

/// Parse packages file content into coordinates.
pub fn parse_packages(content: &str) -> Vec<Coordinate> {
    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(platform) = PlatformCoordinate::parse(line) {
            entries.push(Coordinate::Platform(platform));
            continue;
        }
        match MavenCoordinate::parse(line) {
            Some(maven) => entries.push(Coordinate::Maven(maven)),
            None => {
                warn!("Skipping (expected 'android-N' or 'group:artifact:version'): {line:?}");
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let entries = parse_packages(
            "# seed list\n\nandroid-35\n\ncom.example:lib:1.0.0\n  # indented comment is a comment\n",
        );
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name(), "android-35");
        assert_eq!(entries[1].name(), "com.example:lib:1.0.0");
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let entries = parse_packages(
            "com.example:lib:1.0.0\nnot-a-coordinate\ncom.example:only-two-fields\norg.ok:fine:2.0\n",
        );
        let names: Vec<String> = entries.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["com.example:lib:1.0.0", "org.ok:fine:2.0"]);
    }

    #[test]
    fn preserves_declaration_order() {
        let entries = parse_packages("org.b:b:1.0\nandroid-34\norg.a:a:1.0\n");
        let names: Vec<String> = entries.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["org.b:b:1.0", "android-34", "org.a:a:1.0"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(parse_packages_file(&tmp.path().join("nope.txt")).is_err());
    }

    #[test]
    fn file_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("packages.txt");
        std::fs::write(&path, "android-33\ncom.squareup.okhttp3:okhttp:4.12.0\n").unwrap();
        let entries = parse_packages_file(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], Coordinate::Platform(_)));
        assert!(matches!(entries[1], Coordinate::Maven(_)));
    }
}
