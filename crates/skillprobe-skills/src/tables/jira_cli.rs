//! Canned answers for the `jira-cli` skill

use crate::rules::{Predicate, RuleTable};

/// Directory name of the skill
pub const IDENTITY: &str = "jira-cli";

/// Reply for listing by priority and last update
pub const JQL_QUERY: &str = r#"Use a JQL query to list your issues ordered by priority and most recent update:

```bash
jira issue list --jql "assignee = currentUser() AND resolution = Unresolved ORDER BY priority DESC, updated DESC" --plain
```

`--plain` keeps the output script-friendly. Add `--columns key,summary,priority,updated` to trim the table."#;

/// Reply for plain listing requests
pub const BASIC_LIST: &str = r#"List the issues assigned to you:

```bash
jira issue list --assignee $(jira me) --plain
```

Filter further with `--status "In Progress"`, `--type Bug` or `--priority High`, and use `jira issue view ISSUE-123 --plain` to show a single issue."#;

/// Reply for creating stories with acceptance criteria
pub const TEMPLATE_WORKFLOW: &str = r#"For a story with acceptance criteria, write the description to a template file first so the bullet formatting survives the CLI:

```bash
cat > /tmp/story.md <<'STORY'
As a user, I want ... so that ...

Acceptance criteria:
- Given ..., when ..., then ...
- Given ..., when ..., then ...
STORY

jira issue create --type Story --summary "Short story title" --template /tmp/story.md --no-input
```

Passing the body through `--template` avoids shell quoting problems with multi-line text, and `--no-input` skips the interactive prompts."#;

/// Reply for creating research spikes
pub const SPIKE_WORKFLOW: &str = r#"A Spike is a time-boxed research task. State the question and the timebox up front:

```bash
jira issue create --type Spike --summary "Spike: evaluate options for ..." \
  --body "Question: ... Timebox: 2 days. Outcome: a written recommendation." \
  --label research --no-input
```

Link the follow-up stories to the Spike once the findings are written up."#;

/// Reply for quick issue creation
pub const QUICK_CREATE: &str = r#"Create the issue non-interactively:

```bash
jira issue create --type Task --summary "Short summary" --body "Details" --no-input
```

Add `--priority High` or `--assignee $(jira me)` as needed."#;

/// Reply when no more specific rule matches
pub const GENERIC_REMINDER: &str = r#"I'll use the `jira` CLI for this. Remember:

- pass `--no-input` so commands never wait on interactive prompts,
- use `--plain` when the output will be read by scripts,
- `jira issue list` finds issues and `jira issue create` opens new ones.

Tell me whether you want to find existing issues or create a new one."#;

/// Build the rule table
pub fn table() -> RuleTable {
    let listing = RuleTable::new(BASIC_LIST).rule(
        "priority+updated",
        Predicate::all_of(&["priority", "updated"]),
        JQL_QUERY,
    );

    let creation = RuleTable::new(QUICK_CREATE)
        .rule(
            "story",
            Predicate::any_of(&["story", "criteria", "bullet"]),
            TEMPLATE_WORKFLOW,
        )
        .rule("spike", Predicate::contains("Spike"), SPIKE_WORKFLOW);

    RuleTable::new(GENERIC_REMINDER)
        .branch("list", Predicate::any_of(&["list", "show", "find"]), listing)
        .branch("create", Predicate::contains("create"), creation)
}
