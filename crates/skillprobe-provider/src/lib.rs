//! SkillProbe Provider - offline stand-in for a model backend
//!
//! Answers harness prompts with canned text selected by the rule tables in
//! `skillprobe-skills`. No network access, no credentials, no state kept
//! between calls.

use serde_json::Value;
use skillprobe_skills::{RuleRegistry, SkillDocument, DEFAULT_MIN_CONTENT_LENGTH};
use skillprobe_types::error::Result;
use skillprobe_types::InvocationResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod prompt;

pub use prompt::{MarkerPromptParser, ParsedPrompt, PromptParser};

/// Identifier reported to the harness
pub const PROVIDER_ID: &str = "skillprobe";

/// A canned reply together with what produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Reply text
    pub text: String,
    /// Skill identity the reply was selected for
    pub skill: String,
    /// Rule path that selected the reply
    pub rule_path: String,
    /// Resolved skill document path
    pub document: PathBuf,
}

impl From<Completion> for InvocationResult {
    fn from(completion: Completion) -> Self {
        InvocationResult::success(completion.text)
    }
}

/// Provider service answering prompts from rule tables
pub struct SkillProbeProvider {
    working_root: PathBuf,
    min_content_length: usize,
    parser: Box<dyn PromptParser>,
    registry: &'static RuleRegistry,
}

impl SkillProbeProvider {
    /// Create a provider resolving skill references against `working_root`
    pub fn new(working_root: impl Into<PathBuf>) -> Self {
        let working_root = working_root.into();
        info!("Provider service initialized with root: {:?}", working_root);
        Self {
            working_root,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
            parser: Box::new(MarkerPromptParser),
            registry: RuleRegistry::global(),
        }
    }

    /// Override the minimum skill document length
    #[must_use]
    pub fn with_min_content_length(mut self, min_content_length: usize) -> Self {
        self.min_content_length = min_content_length;
        self
    }

    /// Use a different prompt encoding
    #[must_use]
    pub fn with_parser(mut self, parser: impl PromptParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a different set of rule tables
    #[must_use]
    pub fn with_registry(mut self, registry: &'static RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Provider identifier
    pub fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    /// Root that relative skill references are resolved against
    pub fn working_root(&self) -> &Path {
        &self.working_root
    }

    /// Answer a harness prompt
    ///
    /// Never fails: precondition failures come back as `Error: ...` text with
    /// zero usage. `context` is opaque and only logged.
    pub async fn call_api(&self, prompt: &str, context: Option<&Value>) -> InvocationResult {
        if let Some(context) = context {
            debug!("Ignoring call context: {}", context);
        }

        match self.complete(prompt).await {
            Ok(completion) => completion.into(),
            Err(e) => {
                warn!("Skill probe failed: {}", e);
                InvocationResult::failure(&e)
            }
        }
    }

    /// Answer a harness prompt, keeping failure kinds and rule paths
    pub async fn complete(&self, prompt: &str) -> Result<Completion> {
        let parsed = self.parser.parse(prompt)?;
        let path = parsed.resolve(&self.working_root);

        let document = SkillDocument::load(&path, self.min_content_length).await?;
        debug!(
            "Loaded skill '{}' ({} characters) from {:?}",
            document.identity, document.length, document.path
        );

        let response = self.registry.respond(&document.identity, &parsed.user_request);

        Ok(Completion {
            text: response.text.to_string(),
            skill: document.identity,
            rule_path: response.rule_path,
            document: document.path,
        })
    }
}
