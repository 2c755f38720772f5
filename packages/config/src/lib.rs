// ABOUTME: Configuration for the Keyscope dashboard
// ABOUTME: Environment lookups with validated defaults plus data-directory resolution

pub mod config;
pub mod constants;

pub use config::{data_dir, ConfigError, DashboardConfig};
