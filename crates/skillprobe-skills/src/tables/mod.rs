//! Built-in rule tables, one module per skill

pub mod jira_cli;
pub mod test_driven_development;
