//! Jar manifest construction and parsing.
//!
//! The manifest is the structured attribute header stored as the first entry
//! of every archive (`META-INF/MANIFEST.MF`), ahead of all other entries, so
//! a consuming loader can read it without scanning the rest of the container.

use std::time::{SystemTime, UNIX_EPOCH};

use super::ArtifactError;

/// Archive-internal path of the manifest entry.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Manifest format version written by this builder.
pub const MANIFEST_VERSION: &str = "1.0";

/// Platform spec version recorded as `Build-Jdk-Spec`.
pub const JDK_SPEC: &str = "17";

/// An ordered set of unique manifest attributes.
///
/// Construction is pure: nothing is touched on disk until the manifest is
/// serialized into an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    attributes: Vec<(String, String)>,
}

impl Manifest {
    /// Build a manifest from attribute pairs.
    ///
    /// Attribute names must be literal tokens (ASCII alphanumerics, `-`,
    /// `_`); embedded separators, whitespace, duplicates or an empty name
    /// fail with [`ArtifactError::InvalidAttributeName`]. Values must not
    /// contain line breaks.
    pub fn build(attrs: &[(&str, &str)]) -> Result<Self, ArtifactError> {
        let mut attributes: Vec<(String, String)> = Vec::with_capacity(attrs.len());
        for (name, value) in attrs {
            if !valid_attribute_name(name) || attributes.iter().any(|(n, _)| n == name) {
                return Err(ArtifactError::InvalidAttributeName(name.to_string()));
            }
            if value.contains('\n') || value.contains('\r') {
                return Err(ArtifactError::MalformedManifest(format!(
                    "value of '{name}' contains a line break"
                )));
            }
            attributes.push((name.to_string(), value.to_string()));
        }
        Ok(Self { attributes })
    }

    /// Assemble the standard attribute set written by this builder, plus the
    /// optional entry point.
    pub fn standard(main_class: Option<&str>) -> Result<Self, ArtifactError> {
        let created_by = format!("jar-builder {}", env!("CARGO_PKG_VERSION"));
        let timestamp = unix_now().to_string();

        let mut attrs = vec![
            ("Manifest-Version", MANIFEST_VERSION),
            ("Created-By", created_by.as_str()),
            ("Build-Jdk-Spec", JDK_SPEC),
            ("Build-Timestamp", timestamp.as_str()),
        ];
        if let Some(main) = main_class {
            attrs.push(("Main-Class", main));
        }
        Self::build(&attrs)
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize as `Name: value` lines with a blank terminator line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = String::new();
        for (name, value) in &self.attributes {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }
        out.push_str("\r\n");
        out.into_bytes()
    }

    /// Parse the serialized form back into attributes.
    ///
    /// Reading stops at the first blank line, mirroring the primary
    /// attribute section layout written by [`Manifest::to_bytes`].
    pub fn parse(text: &str) -> Result<Self, ArtifactError> {
        let mut attributes = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                break;
            }
            let (name, value) = line.split_once(": ").ok_or_else(|| {
                ArtifactError::MalformedManifest(format!("attribute line without separator: '{line}'"))
            })?;
            if !valid_attribute_name(name) {
                return Err(ArtifactError::InvalidAttributeName(name.to_string()));
            }
            attributes.push((name.to_string(), value.to_string()));
        }
        if attributes.is_empty() {
            return Err(ArtifactError::MalformedManifest(
                "no attributes found".to_string(),
            ));
        }
        Ok(Self { attributes })
    }
}

fn valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
