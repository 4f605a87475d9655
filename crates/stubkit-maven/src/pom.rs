//! POM document parsing: direct dependency declarations and property
//! placeholder substitution.
//!
//! Only the parts of a POM this pipeline consumes are modeled: the
//! document's own coordinate, its `<properties>`, and its direct
//! `<dependencies>`. Entries under `<dependencyManagement>` constrain
//! versions but contribute no edges, so they are skipped entirely.

use std::collections::BTreeMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use stubkit_core::coordinate::MavenCoordinate;
use stubkit_util::errors::StubkitError;

/// A parsed POM (Project Object Model) document.
#[derive(Debug, Clone, Default)]
pub struct Pom {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,

    pub properties: BTreeMap<String, String>,
    pub dependencies: Vec<PomDependency>,
}

/// A dependency declared directly in a POM's `<dependencies>` section.
#[derive(Debug, Clone, Default)]
pub struct PomDependency {
    pub group_id: String,
    pub artifact_id: String,
    /// Raw version specifier text; may be a range or contain `${…}`.
    pub version: Option<String>,
    pub scope: Option<String>,
    pub optional: bool,
}

/// Parse a POM XML document into a [`Pom`].
///
/// Tag names are matched by local name, so namespace prefixes are
/// effectively stripped.
pub fn parse_pom(xml: &str) -> miette::Result<Pom> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pom = Pom::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();
    let mut current_dep: Option<PomDependency> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                path.push(tag);
                text_buf.clear();

                if path_context(&path) == "project>dependencies>dependency" {
                    current_dep = Some(PomDependency::default());
                }
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path_context(&path);
                let depth = path.len();

                // Properties: <project><properties><key>value</key></properties>
                if depth == 3 && path.get(1).map(|s| s.as_str()) == Some("properties") {
                    let prop_name = path.last().cloned().unwrap_or_default();
                    pom.properties.insert(prop_name, text_buf.clone());
                }

                if let Some(ref mut dep) = current_dep {
                    match path.last().map(|s| s.as_str()) {
                        Some("groupId") if ctx.ends_with(">dependency>groupId") => {
                            dep.group_id = text_buf.clone();
                        }
                        Some("artifactId") if ctx.ends_with(">dependency>artifactId") => {
                            dep.artifact_id = text_buf.clone();
                        }
                        Some("version") if ctx.ends_with(">dependency>version") => {
                            dep.version = Some(text_buf.clone());
                        }
                        Some("scope") if ctx.ends_with(">dependency>scope") => {
                            dep.scope = Some(text_buf.clone());
                        }
                        Some("optional") if ctx.ends_with(">dependency>optional") => {
                            dep.optional = text_buf.trim() == "true";
                        }
                        _ => {}
                    }

                    if ctx == "project>dependencies>dependency" {
                        if let Some(dep) = current_dep.take() {
                            pom.dependencies.push(dep);
                        }
                    }
                }

                // Top-level project fields
                if depth == 2 {
                    match path.last().map(|s| s.as_str()) {
                        Some("groupId") => pom.group_id = Some(text_buf.clone()),
                        Some("artifactId") => pom.artifact_id = Some(text_buf.clone()),
                        Some("version") => pom.version = Some(text_buf.clone()),
                        _ => {}
                    }
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(StubkitError::Document {
                    message: format!("Failed to parse POM XML: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(pom)
}

/// Build a context string from the current XML path for matching.
fn path_context(path: &[String]) -> String {
    path.join(">")
}

/// Per-POM placeholder table for `${name}` substitution.
///
/// Seeded with the document's own coordinate under the reserved
/// `project.*` keys, then extended with declared `<properties>`.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    entries: BTreeMap<String, String>,
}

impl PropertyTable {
    /// Build the table for one POM fetched as `coord`.
    ///
    /// The reserved keys come from the coordinate the document was
    /// requested under, not from the document's own fields, which may be
    /// absent in parent-derived POMs.
    pub fn for_pom(pom: &Pom, coord: &MavenCoordinate) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("project.groupId".to_string(), coord.group_id.clone());
        entries.insert("project.artifactId".to_string(), coord.artifact_id.clone());
        entries.insert("project.version".to_string(), coord.version.clone());
        for (k, v) in &pom.properties {
            entries.insert(k.clone(), v.trim().to_string());
        }
        Self { entries }
    }

    /// Replace every `${name}` occurrence in `input` with its table value.
    ///
    /// Substitution is a single left-to-right pass: replacement text is
    /// never rescanned, so a value containing another placeholder stays
    /// literal. Unknown placeholders are kept as-is.
    pub fn substitute(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(start) = rest.find("${") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    match self.entries.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push_str("${");
                            result.push_str(name);
                            result.push('}');
                        }
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    // Unterminated placeholder, keep the tail verbatim
                    result.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        result.push_str(rest);
        result
    }
}
