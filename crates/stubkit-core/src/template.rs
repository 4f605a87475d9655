//! Embedded scaffold template system for generated stub packages.
//!
//! Templates are TOML descriptors compiled into the binary via
//! `include_str!`. Each template declares the files to render into a stub
//! package directory. Simple `{{variable}}` interpolation is performed at
//! render time.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use stubkit_util::errors::StubkitError;

/// Metadata about a scaffold template (name, description).
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateMeta {
    pub name: String,
    pub description: String,
}

/// A file to create during scaffolding, with interpolated content.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

/// A complete scaffold template parsed from a TOML descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct StubTemplate {
    pub template: TemplateMeta,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Variables available for `{{variable}}` interpolation in template content.
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Add a variable to the context.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace all `{{key}}` placeholders in `input` with values from `ctx`.
/// Unknown keys are left in place.
pub fn interpolate(input: &str, ctx: &TemplateContext) -> String {
    let mut result = input.to_string();
    for (key, value) in &ctx.vars {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

impl StubTemplate {
    /// Parse a template from a TOML string.
    pub fn parse_toml(toml_str: &str) -> miette::Result<Self> {
        toml::from_str(toml_str).map_err(|e| {
            StubkitError::Generic {
                message: format!("Failed to parse scaffold template: {e}"),
            }
            .into()
        })
    }

    /// Render all template files into `root`, interpolating content and
    /// file paths, creating parent directories as needed.
    pub fn render(&self, root: &Path, ctx: &TemplateContext) -> miette::Result<()> {
        for file in &self.files {
            let path = root.join(interpolate(&file.path, ctx));
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(StubkitError::Io)?;
            }
            let content = interpolate(&file.content, ctx);
            std::fs::write(&path, content).map_err(StubkitError::Io)?;
        }
        Ok(())
    }
}
