//! Registry of rule tables keyed by skill identity
//!
//! The built-in registry is constructed once on first use and only read
//! afterwards, so concurrent callers share it without locking.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::rules::RuleTable;
use crate::tables::{jira_cli, test_driven_development};

/// Reply for skills that have no rule table
pub const GENERIC_ACKNOWLEDGMENT: &str = "Skill content loaded successfully. I have read the skill's instructions and will follow them to complete your request.";

/// Rule path reported for skills that have no rule table
pub const UNKNOWN_SKILL_LABEL: &str = "unknown-skill";

static BUILTIN: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::builtin);

/// A selected reply together with how it was selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Reply text
    pub text: &'static str,
    /// Rule path, e.g. `jira-cli > list > priority+updated`
    pub rule_path: String,
}

/// Skill identity to rule table map
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    tables: HashMap<String, RuleTable>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the tables for every built-in skill
    pub fn builtin() -> Self {
        Self::new()
            .with_table(test_driven_development::IDENTITY, test_driven_development::table())
            .with_table(jira_cli::IDENTITY, jira_cli::table())
    }

    /// Shared built-in registry
    pub fn global() -> &'static Self {
        &BUILTIN
    }

    /// Register `table` for `identity`, replacing any previous table
    pub fn with_table(mut self, identity: impl Into<String>, table: RuleTable) -> Self {
        self.tables.insert(identity.into(), table);
        self
    }

    /// Get the table for a skill identity
    pub fn get(&self, identity: &str) -> Option<&RuleTable> {
        self.tables.get(identity)
    }

    /// Known skill identities, sorted
    pub fn skill_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Select the reply for a request to the given skill
    ///
    /// Never fails: unknown skills get [`GENERIC_ACKNOWLEDGMENT`] and every
    /// table ends in a default reply.
    pub fn respond(&self, identity: &str, request: &str) -> Response {
        let Some(table) = self.get(identity) else {
            debug!("No rule table for skill '{}', acknowledging", identity);
            return Response {
                text: GENERIC_ACKNOWLEDGMENT,
                rule_path: UNKNOWN_SKILL_LABEL.to_string(),
            };
        };

        let verdict = table.evaluate(request);
        let rule_path = format!("{} > {}", identity, verdict.describe());

        debug!("Skill '{}' matched rule path: {}", identity, rule_path);
        Response {
            text: verdict.reply,
            rule_path,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::rules::Predicate;

    #[test]
    fn test_builtin_skills() {
        let registry = RuleRegistry::global();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.skill_names(),
            vec!["jira-cli", "test-driven-development"]
        );
    }

    #[test]
    fn test_unknown_skill_ignores_request() {
        let registry = RuleRegistry::global();
        for request in ["", "implement a function", "list by priority and updated"] {
            let response = registry.respond("code-review", request);
            assert_eq!(response.text, GENERIC_ACKNOWLEDGMENT);
            assert_eq!(response.rule_path, "unknown-skill");
        }
    }

    #[test]
    fn test_rule_path_includes_identity() {
        let response =
            RuleRegistry::global().respond("jira-cli", "list issues by priority and updated");
        assert_eq!(response.rule_path, "jira-cli > list > priority+updated");
    }

    #[test]
    fn test_deterministic() {
        let registry = RuleRegistry::global();
        let first = registry.respond("test-driven-development", "please implement parsing");
        let second = registry.respond(
            "test-driven-development",
            "unrelated words first, then please implement parsing",
        );
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn test_custom_registry() {
        let registry = RuleRegistry::new().with_table(
            "custom",
            RuleTable::new("custom default").rule("hi", Predicate::contains("hi"), "hello"),
        );
        assert_eq!(registry.respond("custom", "hi there").text, "hello");
        assert_eq!(registry.respond("custom", "yo").text, "custom default");
        assert_eq!(
            registry.respond("test-driven-development", "implement").text,
            GENERIC_ACKNOWLEDGMENT
        );
    }

    #[test]
    fn test_empty_registry() {
        assert!(RuleRegistry::new().is_empty());
    }
}
