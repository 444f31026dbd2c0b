//! `SkillProbe` Skills
//!
//! Skill documents and the rule-matching response engine behind the offline
//! provider.
//!
//! ## Pieces
//!
//! - [`SkillDocument`]: loads a SKILL.md fresh on every call and rejects stubs
//! - [`RuleTable`]: ordered, first-match-wins predicate/outcome list with a default
//! - [`RuleRegistry`]: read-only map from skill identity to its rule table
//!
//! Matching is plain substring containment over the user request. Tables can
//! nest: a category predicate opens a secondary table scoped to that category.

pub mod document;
pub mod registry;
pub mod rules;
pub mod tables;

pub use document::{skill_identity, SkillDocument, DEFAULT_MIN_CONTENT_LENGTH};
pub use registry::{Response, RuleRegistry, GENERIC_ACKNOWLEDGMENT};
pub use rules::{Outcome, Predicate, Rule, RuleTable, Verdict};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Predicate, RuleRegistry, RuleTable, SkillDocument};
}
