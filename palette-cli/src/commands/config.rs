//! Print resolved configuration

use anyhow::Result;
use clap::Parser;

use super::SettingsArgs;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    let settings = args.settings.resolve()?;

    println!("environment:     {}", settings.environment);
    println!("listen:          {}:{}", settings.host, settings.port);
    println!("database:        {}", settings.database.redacted_url());
    println!("max_connections: {}", settings.database.max_connections);

    Ok(())
}
