//! Harness-style prompts against the bundled skill documents

#![allow(clippy::unwrap_used)]

use skillprobe_provider::SkillProbeProvider;
use skillprobe_skills::tables::{jira_cli, test_driven_development};
use skillprobe_skills::GENERIC_ACKNOWLEDGMENT;
use skillprobe_types::TokenUsage;
use std::path::PathBuf;

fn provider() -> SkillProbeProvider {
    SkillProbeProvider::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../.."))
}

fn harness_prompt(skill: &str, request: &str) -> String {
    format!(
        "You have access to the following skill. Read it before answering.\n\n\
         Skill file: file://skills/{skill}/SKILL.md\n\n\
         Follow the skill's instructions exactly.\n\n\
         User request: {request}"
    )
}

#[tokio::test]
async fn test_tdd_implementation_scenario() {
    let result = provider()
        .call_api(
            &harness_prompt("test-driven-development", "I need to implement a function"),
            None,
        )
        .await;

    assert!(result.output.starts_with("Following TDD principles"));
    assert!(result.output.contains("RED:"));
    assert_eq!(result.token_usage, TokenUsage::CANNED);
}

#[tokio::test]
async fn test_tdd_is_deterministic_across_surrounding_text() {
    let provider = provider();
    let a = provider
        .call_api(
            &harness_prompt("test-driven-development", "implement a parser"),
            None,
        )
        .await;
    let b = provider
        .call_api(
            &harness_prompt(
                "test-driven-development",
                "my manager asked me yesterday to implement a parser, by Friday",
            ),
            None,
        )
        .await;
    assert_eq!(a.output, test_driven_development::IMPLEMENTATION_FLOW);
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_jira_jql_scenario() {
    let result = provider()
        .call_api(
            &harness_prompt("jira-cli", "list issues by priority and updated"),
            None,
        )
        .await;
    assert!(result.output.contains("assignee = currentUser()"));
    assert_eq!(result.output, jira_cli::JQL_QUERY);
}

#[tokio::test]
async fn test_jira_without_request_uses_default() {
    let prompt = "Use file://skills/jira-cli/SKILL.md to help me.";
    let completion = provider().complete(prompt).await.unwrap();
    assert_eq!(completion.text, jira_cli::GENERIC_REMINDER);
    assert_eq!(completion.rule_path, "jira-cli > default");
}

#[tokio::test]
async fn test_priority_ordering_end_to_end() {
    let completion = provider()
        .complete(&harness_prompt(
            "test-driven-development",
            "fix the bug in legacy code, and don't skip anything",
        ))
        .await
        .unwrap();
    assert_eq!(completion.text, test_driven_development::BUG_FIX_FLOW);
    assert_eq!(completion.rule_path, "test-driven-development > bug-fix");
}

#[tokio::test]
async fn test_no_reference_scenario() {
    let result = provider()
        .call_api("Please help. User request: list my issues", None)
        .await;
    assert_eq!(result.output, "Error: No skill file found in prompt");
    assert_eq!(result.token_usage, TokenUsage::zero());
}

#[tokio::test]
async fn test_missing_skill_scenario() {
    let result = provider()
        .call_api(&harness_prompt("does-not-exist", "anything"), None)
        .await;
    assert!(result.output.starts_with("Error: Skill file not found: "));
    assert!(result
        .output
        .ends_with("skills/does-not-exist/SKILL.md"));
    assert_eq!(result.token_usage, TokenUsage::zero());
}

#[tokio::test]
async fn test_short_skill_scenario() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("skills").join("jira-cli");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), "# jira\n\nTBD").unwrap();

    let result = SkillProbeProvider::new(root.path())
        .call_api(&harness_prompt("jira-cli", "list issues"), None)
        .await;
    assert_eq!(result.output, "Error: Skill content is too short or empty");
}

#[tokio::test]
async fn test_unknown_skill_scenario() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("skills").join("brainstorming");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), "Ask one question at a time. ".repeat(10)).unwrap();

    let provider = SkillProbeProvider::new(root.path());
    for request in ["implement a function", "list by priority and updated", ""] {
        let result = provider
            .call_api(&harness_prompt("brainstorming", request), None)
            .await;
        assert_eq!(result.output, GENERIC_ACKNOWLEDGMENT);
    }
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let provider = std::sync::Arc::new(provider());
    let mut handles = Vec::new();

    for (skill, request, expected) in [
        (
            "jira-cli",
            "create a story with acceptance criteria",
            jira_cli::TEMPLATE_WORKFLOW,
        ),
        (
            "test-driven-development",
            "can we skip tests?",
            test_driven_development::ANTI_SKIP,
        ),
        ("jira-cli", "create a Spike", jira_cli::SPIKE_WORKFLOW),
    ] {
        let provider = provider.clone();
        handles.push(tokio::spawn(async move {
            let result = provider
                .call_api(&harness_prompt(skill, request), None)
                .await;
            assert_eq!(result.output, expected);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}
