//! High-level operations wiring CLI commands to the pipeline subsystems.

pub mod ops_cache;
pub mod ops_generate;
pub mod ops_resolve;
pub mod ops_versions;

use std::path::Path;

use stubkit_util::errors::StubkitError;

/// Write a packages list file: one line per entry, trailing newline.
pub fn write_packages_file(path: &Path, lines: &[String]) -> miette::Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(path, content).map_err(|e| {
        StubkitError::Packages {
            message: format!("Failed to write {}: {e}", path.display()),
        }
        .into()
    })
}

/// Error for a missing top-level input file; the only fatal failure kind
/// in the pipeline.
pub fn missing_input(path: &Path) -> miette::Report {
    StubkitError::Packages {
        message: format!("File not found: {}", path.display()),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_file_ends_with_newline() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.txt");
        write_packages_file(&path, &["a:b:1".to_string(), "c:d:2".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a:b:1\nc:d:2\n");
    }
}
