//! maven-metadata.xml parsing for published-version discovery.

use quick_xml::events::Event;
use quick_xml::Reader;

use stubkit_util::errors::StubkitError;

/// Artifact-level Maven metadata listing available versions.
///
/// Versions appear in the document's order, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MavenMetadata {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub versions: Vec<String>,
}

/// Parse an artifact-level `maven-metadata.xml` that lists available versions.
pub fn parse_metadata(xml: &str) -> miette::Result<MavenMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = MavenMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path.join(">");

                match ctx.as_str() {
                    "metadata>groupId" => meta.group_id = Some(text_buf.clone()),
                    "metadata>artifactId" => meta.artifact_id = Some(text_buf.clone()),
                    "metadata>versioning>versions>version" => {
                        if !text_buf.is_empty() {
                            meta.versions.push(text_buf.clone());
                        }
                    }
                    _ => {}
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(StubkitError::Document {
                    message: format!("Failed to parse maven-metadata.xml: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_artifact_metadata() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.jetbrains.kotlinx</groupId>
  <artifactId>kotlinx-coroutines-core</artifactId>
  <versioning>
    <latest>1.8.0</latest>
    <release>1.8.0</release>
    <versions>
      <version>1.6.0</version>
      <version>1.7.0</version>
      <version>1.7.3</version>
      <version>1.8.0</version>
    </versions>
    <lastUpdated>20240101120000</lastUpdated>
  </versioning>
</metadata>"#;
        let meta = parse_metadata(xml).unwrap();
        assert_eq!(meta.group_id.as_deref(), Some("org.jetbrains.kotlinx"));
        assert_eq!(meta.artifact_id.as_deref(), Some("kotlinx-coroutines-core"));
        assert_eq!(meta.versions.len(), 4);
        assert_eq!(meta.versions[0], "1.6.0");
        assert_eq!(meta.versions[3], "1.8.0");
    }

    #[test]
    fn empty_versioning_yields_no_versions() {
        let xml = r#"<metadata><groupId>g</groupId><artifactId>a</artifactId></metadata>"#;
        let meta = parse_metadata(xml).unwrap();
        assert!(meta.versions.is_empty());
    }

    #[test]
    fn malformed_metadata_is_an_error() {
        assert!(parse_metadata("<metadata><versioning>").is_err());
    }
}
