use anyhow::Result;
use clap::Parser;
use colored::*;
use crossterm::{execute, terminal};
use keyscope_cli::{init_logging, Cli};
use keyscope_tui::{App, FilePreferenceBackend, HttpAnalyticsApi};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    init_logging(&cli, &config)?;
    info!(api_url = %config.api_url, "Starting Keyscope");

    let api = Arc::new(HttpAnalyticsApi::from_config(&config)?);
    let preferences = Arc::new(FilePreferenceBackend::new(config.preferences_file()));
    let mut app = App::new(&config, api, preferences)
        .with_tick_rate(cli.tick_rate)
        .with_theme_override(cli.theme_override());

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if there was an error
    let cleanup: Result<()> = (|| {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    })();
    if let Err(e) = cleanup {
        eprintln!("Terminal cleanup error: {}", e);
    }

    if let Err(e) = &result {
        error!(error = %e, "Dashboard exited with an error");
    }
    result
}
