use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Built-in defaults, the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
working_root = "."           # Set via SKILLPROBE_ROOT env var
min_content_length = 100

[logging]
level = "warn"  # trace, debug, info, warn, error
format = "text" # text or json
"#;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub working_root: PathBuf,
    pub min_content_length: usize,
    pub logging: LoggingConfig,
}

/// Where each configuration layer is read from
#[derive(Debug, Default)]
pub struct ConfigSources {
    /// Per-user config file (optional)
    pub user_file: Option<PathBuf>,
    /// File passed with --config; `./skillprobe.toml` (optional) when unset
    pub explicit_file: Option<PathBuf>,
    /// Environment variables; the process environment when unset
    pub env: Option<config::Map<String, String>>,
}

impl ConfigSources {
    /// Sources for a normal run
    fn from_process(explicit: Option<&Path>) -> Self {
        Self {
            user_file: Config::user_config_path(),
            explicit_file: explicit.map(Path::to_path_buf),
            env: None,
        }
    }

    /// Convenience root override: SKILLPROBE_ROOT
    fn root_override(&self) -> Option<String> {
        match &self.env {
            Some(vars) => vars.get(ROOT_ENV_VAR).cloned(),
            None => env::var(ROOT_ENV_VAR).ok(),
        }
    }
}

/// Convenience env var for the working root
const ROOT_ENV_VAR: &str = "SKILLPROBE_ROOT";

impl Config {
    /// Per-user config path: <config dir>/skillprobe/skillprobe.toml
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skillprobe").join("skillprobe.toml"))
    }

    /// Load configuration from the process environment and config files
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        Self::from_sources(ConfigSources::from_process(explicit))
    }

    /// Build configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. User config: <config dir>/skillprobe/skillprobe.toml (optional)
    /// 3. Local override: ./skillprobe.toml, or the file passed with --config
    /// 4. Environment variables with SKILLPROBE__ prefix
    /// 5. SKILLPROBE_ROOT (highest priority)
    pub fn from_sources(sources: ConfigSources) -> anyhow::Result<Self> {
        let mut config_builder = config::Config::builder()
            // Layer 1: Defaults
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ));

        // Layer 2: User config (optional)
        if let Some(path) = &sources.user_file {
            config_builder =
                config_builder.add_source(config::File::from(path.as_path()).required(false));
        }

        // Layer 3: Workspace config, required only when named explicitly
        config_builder = match &sources.explicit_file {
            Some(path) => config_builder.add_source(config::File::from(path.as_path())),
            None => config_builder.add_source(config::File::with_name("skillprobe").required(false)),
        };

        // Layer 4: Environment variables with SKILLPROBE__ prefix
        config_builder = config_builder.add_source(
            config::Environment::with_prefix("SKILLPROBE")
                .separator("__")
                .source(sources.env.clone()),
        );

        // Layer 5: Convenience env var override
        if let Some(root) = sources.root_override() {
            config_builder = config_builder.set_override("working_root", root)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Apply command-line flags on top of the loaded layers
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(root) = &cli.root {
            self.working_root = root.clone();
        }
        if let Some(min_length) = cli.min_length {
            self.min_content_length = min_length;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
        self
    }
}
