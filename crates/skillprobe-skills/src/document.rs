//! Skill document loading and validation
//!
//! A skill document is read fresh for every invocation. Nothing is cached:
//! existence is re-checked each call and the content is used as-is.

use regex::Regex;
use serde::Deserialize;
use skillprobe_types::error::{ProbeError, Result};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Minimum number of characters for a document to count as loaded
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 100;

#[allow(clippy::expect_used)] // literal pattern
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*(?:\n|$)").expect("frontmatter pattern")
});

/// Optional YAML frontmatter at the top of a SKILL.md
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillFrontmatter {
    /// Declared skill name
    #[serde(default)]
    pub name: Option<String>,
    /// Declared skill description
    #[serde(default)]
    pub description: Option<String>,
}

/// A validated skill document
#[derive(Debug, Clone)]
pub struct SkillDocument {
    /// Resolved path of the document
    pub path: PathBuf,
    /// Name of the directory containing the document
    pub identity: String,
    /// Full document text
    pub content: String,
    /// Length of the content in characters
    pub length: usize,
}

impl SkillDocument {
    /// Read and validate the document at `path`
    pub async fn load(path: &Path, min_length: usize) -> Result<Self> {
        // A failed existence probe counts as missing
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(ProbeError::DocumentNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|source| {
            ProbeError::DocumentUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::from_content(path, content, min_length)
    }

    /// Validate already-loaded text as the document at `path`
    pub fn from_content(path: &Path, content: String, min_length: usize) -> Result<Self> {
        let length = content.chars().count();

        if length < min_length {
            debug!(
                "Skill document {:?} has {} characters, below minimum {}",
                path, length, min_length
            );
            return Err(ProbeError::DocumentTooShort {
                path: path.to_path_buf(),
                length,
                min_length,
            });
        }

        let document = Self {
            path: path.to_path_buf(),
            identity: skill_identity(path),
            content,
            length,
        };

        document.check_declared_name();
        Ok(document)
    }

    /// Parse the YAML frontmatter, if the document has one
    pub fn frontmatter(&self) -> Option<SkillFrontmatter> {
        parse_frontmatter(&self.content)
    }

    /// Warn when the frontmatter name disagrees with the directory name
    fn check_declared_name(&self) {
        let declared = self.frontmatter().and_then(|fm| fm.name);

        if let Some(name) = declared {
            if name != self.identity {
                warn!(
                    "Skill frontmatter name '{}' differs from directory '{}'; \
                     directory name is used for matching",
                    name, self.identity
                );
            }
        }
    }
}

/// Name of the directory immediately containing `path`
///
/// Returns an empty string when the path has no parent directory name.
pub fn skill_identity(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parse_frontmatter(content: &str) -> Option<SkillFrontmatter> {
    let yaml_str = FRONTMATTER_RE.captures(content)?.get(1)?.as_str();

    match serde_yaml::from_str(yaml_str) {
        Ok(frontmatter) => Some(frontmatter),
        Err(e) => {
            debug!("Ignoring unparsable skill frontmatter: {}", e);
            None
        }
    }
}
