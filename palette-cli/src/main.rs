//! palette-picker - HTTP API for projects and their color palettes
//!
//! Subcommands:
//! - `serve`: run the API server
//! - `migrate`: create the database tables and exit
//! - `config`: print the resolved settings

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "palette-picker",
    author,
    version,
    about = "Palette Picker API server - projects and their color palettes"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the projects and palettes tables if missing
    Migrate(commands::migrate::MigrateArgs),
    /// Print the resolved configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Config(args) => commands::run_config(args)?,
    }
    Ok(())
}
