//! Error types for a single probe invocation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Reasons an invocation fails before the response engine runs.
///
/// The `Display` text of each variant is the diagnostic the harness sees
/// after the `Error: ` prefix, so the wording is part of the contract.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Prompt carried no `file://...md` reference
    #[error("No skill file found in prompt")]
    NoSkillReference,

    /// Resolved document path does not exist
    #[error("Skill file not found: {}", path.display())]
    DocumentNotFound {
        /// Resolved path
        path: PathBuf,
    },

    /// Document exists but is below the minimum length
    #[error("Skill content is too short or empty")]
    DocumentTooShort {
        /// Resolved path
        path: PathBuf,
        /// Length in characters
        length: usize,
        /// Threshold that was not met
        min_length: usize,
    },

    /// Document exists but could not be read as UTF-8 text
    #[error("Failed to read skill file {}: {source}", path.display())]
    DocumentUnreadable {
        /// Resolved path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    /// Machine-readable kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoSkillReference => ErrorKind::NoSkillReference,
            Self::DocumentNotFound { .. } => ErrorKind::DocumentNotFound,
            Self::DocumentTooShort { .. } => ErrorKind::DocumentTooShort,
            Self::DocumentUnreadable { .. } => ErrorKind::DocumentUnreadable,
        }
    }
}

/// Serializable error kind reported next to the textual diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NoSkillReference,
    DocumentNotFound,
    DocumentTooShort,
    DocumentUnreadable,
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ProbeError>;
