//! Prompt extraction
//!
//! The evaluation harness embeds two facts in an otherwise free-form prompt:
//!
//! - a skill reference: `file://` followed by non-whitespace characters ending
//!   in `.md`, e.g. `file://skills/jira-cli/SKILL.md`
//! - a user request: everything after the literal `User request:` marker up to
//!   the end of the prompt, newlines included, trimmed
//!
//! Only the first occurrence of each is honored. A missing request marker is
//! not an error and yields an empty request.

use regex::Regex;
use skillprobe_types::error::{ProbeError, Result};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// Literal marker preceding the user request
pub const USER_REQUEST_MARKER: &str = "User request:";

#[allow(clippy::expect_used)] // literal pattern
static FILE_REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"file://(\S+\.md)").expect("file reference pattern"));

/// Facts recovered from a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt {
    /// Skill reference as written in the prompt, without `file://`
    pub skill_reference: PathBuf,
    /// Trimmed user request, empty when the marker is absent
    pub user_request: String,
}

impl ParsedPrompt {
    /// Resolve the skill reference against `root`
    ///
    /// Absolute references are returned unchanged.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.skill_reference)
    }
}

/// Recovers the skill reference and user request from a raw prompt
///
/// This is the only place that knows how the harness encodes prompts; the
/// response engine only ever sees a [`ParsedPrompt`].
pub trait PromptParser: Send + Sync {
    /// Parse `prompt`, failing with [`ProbeError::NoSkillReference`] when no
    /// skill document is referenced
    fn parse(&self, prompt: &str) -> Result<ParsedPrompt>;
}

/// Parser for the `file://...md` / `User request:` marker convention
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerPromptParser;

impl MarkerPromptParser {
    /// First `file://...md` reference, without the scheme
    pub fn skill_reference(prompt: &str) -> Option<&str> {
        FILE_REFERENCE_RE
            .captures(prompt)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Trimmed text after the first request marker, or empty
    pub fn user_request(prompt: &str) -> &str {
        prompt
            .find(USER_REQUEST_MARKER)
            .map_or("", |idx| prompt[idx + USER_REQUEST_MARKER.len()..].trim())
    }
}

impl PromptParser for MarkerPromptParser {
    fn parse(&self, prompt: &str) -> Result<ParsedPrompt> {
        let reference = Self::skill_reference(prompt).ok_or(ProbeError::NoSkillReference)?;
        let user_request = Self::user_request(prompt);

        debug!(
            "Extracted skill reference '{}' with {}-byte user request",
            reference,
            user_request.len()
        );

        Ok(ParsedPrompt {
            skill_reference: PathBuf::from(reference),
            user_request: user_request.to_string(),
        })
    }
}
