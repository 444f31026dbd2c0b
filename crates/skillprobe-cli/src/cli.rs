use clap::Parser;
use std::path::PathBuf;

/// Offline, deterministic stand-in for a model backend used by skill evaluations
///
/// Prints the canned response for one prompt. Error-shaped responses
/// (`Error: ...`) still exit with status 0 so the harness can score them.
#[derive(Debug, Parser)]
#[command(name = "skillprobe", version, about, long_about = None)]
pub struct Cli {
    /// Prompt text; read from stdin when omitted or "-"
    #[arg(allow_hyphen_values = true)]
    pub prompt: Option<String>,

    /// Extra arguments appended by the harness (options, context JSON)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,

    /// Path to a skillprobe.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory that file:// skill references are resolved against
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Minimum skill document length in characters
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the full result (output and token usage) as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the rule path that selected the response to stderr
    #[arg(long)]
    pub explain: bool,
}

impl Cli {
    /// Prompt given on the command line, unless stdin was requested
    pub fn inline_prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| *p != "-")
    }

    /// Harness context: the last extra argument that parses as a JSON object
    pub fn context(&self) -> Option<serde_json::Value> {
        self.extra
            .iter()
            .rev()
            .filter_map(|arg| serde_json::from_str::<serde_json::Value>(arg).ok())
            .find(serde_json::Value::is_object)
    }
}
