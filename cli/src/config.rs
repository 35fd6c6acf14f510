//! Runtime configuration, from flags or the environment.

use std::time::Duration;

use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Base URL of the poll API.
    #[arg(long, env = "POLL_API_URL", value_name = "URL")]
    pub api_url: String,

    /// Ceiling for a whole request, connect to last body byte.
    #[arg(long, env = "POLL_API_TIMEOUT_SECS", value_name = "SECS", default_value_t = 120)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
