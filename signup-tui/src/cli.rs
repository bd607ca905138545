use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "signup-tui")]
#[command(about = "Terminal client for signing students up to school activities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the configured activity store
    Run {
        /// Override the store URL from the config file
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Run against a built-in in-memory store with seeded activities
    Dev {
        /// Simulated latency for every store call, in milliseconds
        #[arg(long, default_value_t = 0)]
        latency_ms: u64,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}
