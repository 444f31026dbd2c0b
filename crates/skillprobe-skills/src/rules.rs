//! Rule tables for canned responses
//!
//! A [`RuleTable`] is an ordered list of rules plus a default reply. Rules are
//! tried top to bottom and the first whose predicate holds wins. A rule's
//! outcome is either a reply or a nested table, so a category predicate can
//! gate entry into a secondary decision tree.

/// Substring predicate over the user request
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Case-sensitive substring containment
    Contains(&'static str),
    /// Case-insensitive substring containment
    ContainsIgnoreCase(&'static str),
    /// True when any inner predicate holds
    Any(Vec<Predicate>),
    /// True when every inner predicate holds
    All(Vec<Predicate>),
}

impl Predicate {
    /// Case-sensitive containment of `needle`
    pub fn contains(needle: &'static str) -> Self {
        Self::Contains(needle)
    }

    /// Case-sensitive containment of any of `needles`
    pub fn any_of(needles: &[&'static str]) -> Self {
        Self::Any(needles.iter().copied().map(Self::Contains).collect())
    }

    /// Case-sensitive containment of all of `needles`
    pub fn all_of(needles: &[&'static str]) -> Self {
        Self::All(needles.iter().copied().map(Self::Contains).collect())
    }

    /// Evaluate against a request
    pub fn matches(&self, request: &str) -> bool {
        match self {
            Self::Contains(needle) => request.contains(*needle),
            Self::ContainsIgnoreCase(needle) => request
                .to_lowercase()
                .contains(needle.to_lowercase().as_str()),
            Self::Any(inner) => inner.iter().any(|p| p.matches(request)),
            Self::All(inner) => inner.iter().all(|p| p.matches(request)),
        }
    }
}

/// What a matching rule produces
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A canned reply
    Reply(&'static str),
    /// A secondary table evaluated against the same request
    Table(RuleTable),
}

/// A labelled predicate/outcome pair
#[derive(Debug, Clone)]
pub struct Rule {
    /// Short label reported in rule paths
    pub label: &'static str,
    /// Predicate gating this rule
    pub when: Predicate,
    /// Outcome when the predicate holds
    pub then: Outcome,
}

/// Ordered first-match-wins rules with a mandatory default reply
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    default: &'static str,
}

/// Label recorded in a rule path when a table falls through to its default
pub const DEFAULT_LABEL: &str = "default";

/// The reply a table selected and the labels of the rules that led to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Selected reply
    pub reply: &'static str,
    /// Rule labels from the outermost table inwards
    pub path: Vec<&'static str>,
}

impl Verdict {
    /// Render the path as `a > b > c`
    pub fn describe(&self) -> String {
        self.path.join(" > ")
    }
}

impl RuleTable {
    /// Create an empty table that always answers `default`
    pub fn new(default: &'static str) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    /// Append a rule that answers `reply`
    pub fn rule(mut self, label: &'static str, when: Predicate, reply: &'static str) -> Self {
        self.rules.push(Rule {
            label,
            when,
            then: Outcome::Reply(reply),
        });
        self
    }

    /// Append a rule that descends into `table`
    pub fn branch(mut self, label: &'static str, when: Predicate, table: RuleTable) -> Self {
        self.rules.push(Rule {
            label,
            when,
            then: Outcome::Table(table),
        });
        self
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Reply used when no rule matches
    pub fn default_reply(&self) -> &'static str {
        self.default
    }

    /// Select a reply for `request`
    pub fn evaluate(&self, request: &str) -> Verdict {
        let mut table = self;
        let mut path = Vec::new();

        loop {
            let Some(rule) = table.rules.iter().find(|rule| rule.when.matches(request)) else {
                path.push(DEFAULT_LABEL);
                return Verdict {
                    reply: table.default,
                    path,
                };
            };

            path.push(rule.label);
            match &rule.then {
                Outcome::Reply(reply) => {
                    return Verdict {
                        reply: *reply,
                        path,
                    }
                }
                Outcome::Table(inner) => table = inner,
            }
        }
    }
}
