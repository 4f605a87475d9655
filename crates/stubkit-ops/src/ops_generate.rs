//! Operation: generate stub packages for every coordinate in a list.
//!
//! Each coordinate gets `autogen/<stub_name>/<version>/` populated by the
//! external stub generator plus the embedded scaffold template. A failed
//! coordinate is recorded and reported at the end; it never aborts the run.

use std::path::Path;

use tracing::{debug, error, info};

use stubkit_core::config::Config;
use stubkit_core::coordinate::Coordinate;
use stubkit_core::packages::parse_packages_file;
use stubkit_core::template::{StubTemplate, TemplateContext};
use stubkit_util::errors::StubkitError;
use stubkit_util::process::{failure_output, CommandBuilder};
use stubkit_util::progress::{status, status_warn};

const STUB_TEMPLATE: &str = include_str!("../templates/stub.toml");

/// Generate stubs and scaffold files for every coordinate in `packages`.
pub fn generate(root: &Path, packages: &Path, clean: bool) -> miette::Result<()> {
    let config = Config::load(root)?;
    let autogen = config.autogen_root(root);

    if clean && autogen.exists() {
        status("Cleaning", &autogen.display().to_string());
        std::fs::remove_dir_all(&autogen).map_err(StubkitError::Io)?;
    }

    if !packages.is_file() {
        return Err(crate::missing_input(packages));
    }

    let entries = parse_packages_file(packages)?;
    if entries.is_empty() {
        status_warn("Empty", &format!("No entries found in {}", packages.display()));
        return Ok(());
    }

    let template = StubTemplate::parse_toml(STUB_TEMPLATE)?;
    let build_date = chrono::Local::now().format("%Y%m%d").to_string();
    let total = entries.len();
    info!(
        "Generating stubs for {total} coordinates from {} (build date {build_date}, generator {})",
        packages.display(),
        config.generator.command
    );

    let mut failed: Vec<String> = Vec::new();
    for (i, coord) in entries.iter().enumerate() {
        info!("[{}/{total}] {}", i + 1, coord.name());
        if let Err(e) = process_coordinate(coord, &config, &autogen, &template, &build_date) {
            error!("{e}");
            failed.push(coord.name());
        }
    }

    if failed.is_empty() {
        status("Generated", &format!("all {total} coordinates processed"));
    } else {
        status_warn("Failed", &format!("{} coordinate(s):", failed.len()));
        for name in &failed {
            status_warn("", name);
        }
    }
    Ok(())
}

/// Generate stub sources and scaffold files for one coordinate.
fn process_coordinate(
    coord: &Coordinate,
    config: &Config,
    autogen: &Path,
    template: &StubTemplate,
    build_date: &str,
) -> miette::Result<()> {
    let version_dir = autogen.join(coord.stub_name()).join(coord.version());

    if stubkit_util::fs::dir_non_empty(&version_dir) {
        info!("  → already exists, skipping");
        return Ok(());
    }

    stubkit_util::fs::ensure_dir(&version_dir).map_err(StubkitError::Io)?;
    let src_dir = version_dir.join("src");

    run_generator(&config.generator.command, &coord.generator_coord(), &src_dir)?;

    // The generator may delete and recreate its output dir; make sure it
    // exists before rendering the scaffold next to it.
    stubkit_util::fs::ensure_dir(&src_dir).map_err(StubkitError::Io)?;

    let (group_id, artifact_id) = match coord {
        Coordinate::Platform(p) => (String::new(), p.name()),
        Coordinate::Maven(m) => (m.group_id.clone(), m.artifact_id.clone()),
    };
    let mut ctx = TemplateContext::new();
    ctx.set("stub_name", coord.stub_name())
        .set("group_id", group_id)
        .set("artifact_id", artifact_id)
        .set("readable_name", coord.readable_name())
        .set("version", coord.version())
        .set("stub_version", format!("{}.{build_date}", coord.version()))
        .set("generator_version", config.generator.version.clone());
    template.render(&version_dir, &ctx)?;

    debug!("  → done: {}", version_dir.display());
    Ok(())
}

/// Invoke the external stub generator for one coordinate.
fn run_generator(command: &str, coordinate: &str, output_dir: &Path) -> miette::Result<()> {
    let cmd = CommandBuilder::new(command)
        .arg(coordinate)
        .arg("--output-dir")
        .arg(output_dir.display().to_string());
    debug!("Running: {}", cmd.display());

    let output = cmd.exec()?;
    if !output.status.success() {
        return Err(StubkitError::Generate {
            message: format!(
                "{command} failed for {coordinate} (exit {})\n{}",
                output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                failure_output(&output)
            ),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stubkit_core::coordinate::MavenCoordinate;

    fn test_config(generator: &str) -> Config {
        let mut config = Config::default();
        config.generator.command = generator.to_string();
        config
    }

    #[test]
    fn embedded_template_parses() {
        let template = StubTemplate::parse_toml(STUB_TEMPLATE).unwrap();
        assert!(!template.files.is_empty());
    }

    #[test]
    fn existing_version_dir_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let coord = Coordinate::Maven(MavenCoordinate::parse("com.example:lib:1.0").unwrap());
        let version_dir = tmp.path().join(coord.stub_name()).join("1.0");
        std::fs::create_dir_all(&version_dir).unwrap();
        std::fs::write(version_dir.join("marker"), b"x").unwrap();

        // Generator command would fail if invoked; skipping means success.
        let config = test_config("definitely-not-a-real-binary-xyz");
        let template = StubTemplate::parse_toml(STUB_TEMPLATE).unwrap();
        process_coordinate(&coord, &config, tmp.path(), &template, "20250101").unwrap();
    }

    #[test]
    fn scaffold_renders_next_to_generated_sources() {
        let tmp = tempfile::tempdir().unwrap();
        let coord = Coordinate::Maven(MavenCoordinate::parse("com.example:lib:1.0").unwrap());

        // `true` stands in for a generator that succeeds without output.
        let config = test_config("true");
        let template = StubTemplate::parse_toml(STUB_TEMPLATE).unwrap();
        process_coordinate(&coord, &config, tmp.path(), &template, "20250101").unwrap();

        let version_dir = tmp.path().join("stubkit-stubs-com-example-lib/1.0");
        assert!(version_dir.join("src").is_dir());
        let pyproject = std::fs::read_to_string(version_dir.join("pyproject.toml")).unwrap();
        assert!(pyproject.contains("stubkit-stubs-com-example-lib"));
        assert!(pyproject.contains("1.0.20250101"));
        let readme = std::fs::read_to_string(version_dir.join("README.md")).unwrap();
        assert!(readme.contains("com.example:lib"));
    }

    #[test]
    fn failed_generator_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let coord = Coordinate::Maven(MavenCoordinate::parse("com.example:bad:1.0").unwrap());
        let config = test_config("false");
        let template = StubTemplate::parse_toml(STUB_TEMPLATE).unwrap();
        let result = process_coordinate(&coord, &config, tmp.path(), &template, "20250101");
        assert!(result.is_err());
    }
}
