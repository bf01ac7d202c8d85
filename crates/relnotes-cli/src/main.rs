mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::MultiProgress;
use relnotes_core::Config;
use relnotes_integrations::ShortcutClient;

#[derive(Parser, Debug)]
#[command(name = "relnotes")]
#[command(about = "Generate weekly release notes from completed Shortcut stories", long_about = None)]
struct Cli {
    /// List all custom fields with their value ids
    #[arg(short = 'c', long)]
    custom_fields: bool,

    /// List Shortcut teams (groups)
    #[arg(short, long, conflicts_with = "custom_fields")]
    teams: bool,

    /// Path to the config file (defaults to <config dir>/relnotes/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let bars = MultiProgress::new();
    logging::init(cli.verbose, bars.clone()).context("Failed to initialize logging")?;

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_env();

    let Some(token) = config.shortcut_token() else {
        println!(
            "Please get your Shortcut API token and set SHORTCUT_TOKEN (or shortcut.token in the config file)."
        );
        return Ok(());
    };

    let client = ShortcutClient::new(token.to_string(), Some(config.shortcut.api_url.clone()))
        .context("Failed to create Shortcut client")?;

    if cli.custom_fields {
        commands::custom_fields::handle_custom_fields_command(&client).await
    } else if cli.teams {
        commands::teams::handle_teams_command(&client).await
    } else {
        commands::generate::handle_generate_command(&config, &client, &bars).await
    }
}
