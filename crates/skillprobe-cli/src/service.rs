use crate::cli::Cli;
use crate::config::{Config, LogFormat};
use anyhow::{Context, Result};
use skillprobe_provider::{Completion, SkillProbeProvider};
use skillprobe_types::{InvocationResult, ProbeError};
use std::io::Write;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

/// Probe service - answers one harness prompt per process
pub struct ProbeService {
    config: Config,
}

impl ProbeService {
    /// Create a new probe service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the probe service
    pub async fn run(self, cli: Cli) -> Result<()> {
        // Initialize logging
        match self.config.logging.format {
            LogFormat::Text => skillprobe_logging::init_logging(&self.config.logging.level)?,
            LogFormat::Json => skillprobe_logging::init_json_logging(&self.config.logging.level)?,
        }
        info!("Starting SkillProbe");

        let provider = SkillProbeProvider::new(&self.config.working_root)
            .with_min_content_length(self.config.min_content_length);

        let prompt = read_prompt(&cli, tokio::io::stdin()).await?;
        debug!("Received {}-byte prompt", prompt.len());

        let result = if cli.explain {
            let (result, line) = explain(&provider, &prompt).await;
            eprintln!("{}", line);
            result
        } else {
            provider.call_api(&prompt, cli.context().as_ref()).await
        };

        let mut stdout = std::io::stdout().lock();
        write_result(&mut stdout, &result, cli.json)?;
        stdout.flush().context("Failed to flush stdout")?;

        Ok(())
    }
}

/// Prompt from the command line, or everything readable from `stdin`
async fn read_prompt<R: AsyncRead + Unpin>(cli: &Cli, mut stdin: R) -> Result<String> {
    if let Some(prompt) = cli.inline_prompt() {
        return Ok(prompt.to_string());
    }

    let mut prompt = String::new();
    stdin
        .read_to_string(&mut prompt)
        .await
        .context("Failed to read prompt from stdin")?;
    Ok(prompt)
}

/// Answer `prompt` and describe how the answer was chosen
async fn explain(provider: &SkillProbeProvider, prompt: &str) -> (InvocationResult, String) {
    match provider.complete(prompt).await {
        Ok(completion) => {
            let line = explain_completion(&completion);
            (completion.into(), line)
        }
        Err(e) => {
            let line = explain_failure(&e);
            (InvocationResult::failure(&e), line)
        }
    }
}

fn explain_completion(completion: &Completion) -> String {
    format!(
        "{} ({})",
        completion.rule_path,
        completion.document.display()
    )
}

fn explain_failure(err: &ProbeError) -> String {
    format!("{:?}", err.kind())
}

/// Write `result` as plain output text, or as one line of JSON
fn write_result<W: Write>(out: &mut W, result: &InvocationResult, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, result).context("Failed to serialize result")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", result.output)?;
    }
    Ok(())
}
