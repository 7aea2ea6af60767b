//! HTTP server command

use anyhow::{Context, Result};
use clap::Parser;

use super::SettingsArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = args.settings.resolve()?;

    tracing::info!(
        environment = %settings.environment,
        "Starting Palette Picker on {}:{}",
        settings.host,
        settings.port
    );

    palette_server::serve(settings).await.context("Server error")?;

    Ok(())
}
