use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mp")]
#[command(about = "Maintenance portal CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (defaults to api.base_url from config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
