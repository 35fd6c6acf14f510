use std::io;

use anyhow::Result;
use clap::Parser;
use poll_cli::{Command, Config, HttpClient};
use poll_core::ApiService;

/// Create pools, author questions, and answer polls.
#[derive(Parser)]
#[command(name = "poll", version)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    #[cfg(feature = "env-file")]
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let api = ApiService::new(HttpClient::new(&cli.config), &cli.config.api_url);

    let stdout = io::stdout();
    poll_cli::run(&api, cli.command, &mut stdout.lock())
}
