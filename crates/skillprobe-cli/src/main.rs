mod cli;
mod config;
mod service;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use service::ProbeService;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?.with_cli_overrides(&cli);

    // Answer one prompt and exit
    let probe = ProbeService::new(config);
    probe.run(cli).await
}
