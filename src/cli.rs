use std::time::Duration;

use clap::{Parser, Subcommand};
use gemini_api::config::DEFAULT_TIMEOUT;
use gemini_api::retry::DEFAULT_RETRIES;
use gemini_api::GeminiConfig;

#[derive(Debug, Parser)]
#[command(
    name = "gemini-proxy",
    about = "Anonymous Gemini web chat from the terminal",
    version
)]
pub struct Cli {
    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Attempts to make before giving up.
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Override the upstream base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a single message and print the answer.
    Chat {
        /// Message to send.
        #[arg(long)]
        msg: String,
    },
}

impl Cli {
    pub fn to_config(&self) -> GeminiConfig {
        let mut config = GeminiConfig::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_retries(self.retries);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config
    }
}
