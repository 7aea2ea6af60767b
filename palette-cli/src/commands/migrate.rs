//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use super::SettingsArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let settings = args.settings.resolve()?;

    palette_server::migrate(&settings)
        .await
        .with_context(|| format!("Failed to migrate {}", settings.database.redacted_url()))?;

    println!("Schema ready ({})", settings.environment);
    Ok(())
}
