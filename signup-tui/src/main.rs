mod api;
mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod types;
mod ui;
mod view;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::SignupConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SignupConfig::load()?;

    let client = match cli.command {
        Commands::ConfigPath => {
            let path = SignupConfig::config_path()?;
            if !path.exists() {
                config.save()?;
            }
            println!("{}", path.display());
            return Ok(());
        }
        Commands::Run { api_url } => {
            let api_url = api_url.unwrap_or_else(|| config.api_url.clone());
            logging::init(&SignupConfig::log_path()?, &config.log_filter)?;
            info!(%api_url, "starting");
            api::ApiClient::new(&api_url)?
        }
        Commands::Dev { latency_ms } => {
            logging::init(&SignupConfig::log_path()?, &config.log_filter)?;
            info!(latency_ms, "starting with in-memory store");
            let backend = api::DevBackend::new().with_latency(Duration::from_millis(latency_ms));
            api::ApiClient::dev(backend)?
        }
    };

    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "exited with error");
    }
    res
}
