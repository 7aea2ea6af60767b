//! Subcommand implementations

pub mod config;
pub mod migrate;
pub mod serve;

pub use config::run_config;
pub use migrate::run_migrate;
pub use serve::run_serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use palette_server::config::Overrides;
use palette_server::{Environment, Settings};

/// Flags shared by every command that resolves settings
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Environment mode: development, test or production
    #[arg(long = "env", env = "PALETTE_ENV")]
    pub environment: Option<Environment>,

    /// Address to listen on (default: 0.0.0.0)
    #[arg(long, env = "PALETTE_HOST")]
    pub host: Option<String>,

    /// Port to listen on (default: 3000)
    #[arg(long, short = 'p', env = "PORT")]
    pub port: Option<u16>,

    /// Database URL (overrides the config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Config file with per-environment database settings (default: ./palettes.toml)
    #[arg(long, env = "PALETTE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl SettingsArgs {
    pub fn into_overrides(self) -> Overrides {
        Overrides {
            environment: self.environment,
            host: self.host,
            port: self.port,
            database_url: self.database_url,
            config_path: self.config,
        }
    }

    /// Resolve flags, env, config file and defaults into settings.
    pub fn resolve(self) -> Result<Settings> {
        Settings::load(self.into_overrides()).context("Failed to resolve configuration")
    }
}
