//! SkillProbe Types - Core types shared by the SkillProbe crates
//!
//! Defines the invocation result returned to the evaluation harness and the
//! error taxonomy for failed invocations.

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{ErrorKind, ProbeError};

/// Token accounting reported alongside every response
///
/// The numbers carry no meaning; the harness only expects the fields to be
/// present. Successful calls report [`TokenUsage::CANNED`], failures report zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub total: u32,
    pub prompt: u32,
    pub completion: u32,
}

impl TokenUsage {
    /// Placeholder usage for a successful canned response
    pub const CANNED: Self = Self {
        total: 150,
        prompt: 100,
        completion: 50,
    };

    /// Usage for a call that failed before producing a response
    pub const fn zero() -> Self {
        Self {
            total: 0,
            prompt: 0,
            completion: 0,
        }
    }
}

/// Result of one provider invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub output: String,
    pub token_usage: TokenUsage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl InvocationResult {
    /// A canned response
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            token_usage: TokenUsage::CANNED,
            error: None,
        }
    }

    /// An error-shaped result: `Error: <diagnostic>` with zero usage
    pub fn failure(err: &ProbeError) -> Self {
        Self {
            output: format!("Error: {}", err),
            token_usage: TokenUsage::zero(),
            error: Some(err.kind()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<ProbeError> for InvocationResult {
    fn from(err: ProbeError) -> Self {
        Self::failure(&err)
    }
}
