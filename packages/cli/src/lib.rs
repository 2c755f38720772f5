//! Command-line launcher for the Keyscope dashboard
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use keyscope_config::DashboardConfig;
use keyscope_core::ThemeMode;
use keyscope_tui::events::DEFAULT_TICK_RATE_MS;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keyscope")]
#[command(about = "Keyscope - keyword analytics dashboard for the terminal")]
#[command(version)]
pub struct Cli {
    /// Origin of the analytics service (overrides KEYSCOPE_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Directory for preferences and logs (overrides KEYSCOPE_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Log file path, defaults to keyscope.log inside the data directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log to stderr instead of a file
    #[arg(long)]
    pub log_stderr: bool,

    /// Redraw interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_RATE_MS)]
    pub tick_rate: u64,

    /// Theme for this session; the saved preference is left untouched
    #[arg(long, value_enum)]
    pub theme: Option<CliTheme>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliTheme {
    Light,
    Dark,
}

impl From<CliTheme> for ThemeMode {
    fn from(theme: CliTheme) -> Self {
        match theme {
            CliTheme::Light => ThemeMode::Light,
            CliTheme::Dark => ThemeMode::Dark,
        }
    }
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    pub fn resolve_config(&self) -> Result<DashboardConfig> {
        let mut config = DashboardConfig::from_env().context("Invalid environment configuration")?;
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url).context("Invalid --api-url")?;
        }
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir.clone());
        }
        Ok(config)
    }

    pub fn log_path(&self, config: &DashboardConfig) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| config.log_file())
    }

    pub fn theme_override(&self) -> Option<ThemeMode> {
        self.theme.map(ThemeMode::from)
    }
}

/// Install the global tracing subscriber. The terminal belongs to the TUI, so logs go to a file.
pub fn init_logging(cli: &Cli, config: &DashboardConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact();

    if cli.log_stderr {
        builder.with_writer(std::io::stderr).init();
        return Ok(());
    }

    let path = cli.log_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    Ok(())
}
