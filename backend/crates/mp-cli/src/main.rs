//! mp - maintenance portal CLI
//!
//! Signs users in, keeps the session on disk and talks to the portal backend.
//! Results are printed to stdout as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in with a demo account
//! mp login --email tech@demo.com --password 123456
//!
//! # Open the view for the signed-in role
//! mp portal --pretty
//!
//! # Start work on an assigned issue
//! mp technician update <issue-id> --status in_progress
//! ```

use mp_cli::{Cli, logger};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let config = match mp_config::Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(
        config.logging.level,
        log_file,
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    match mp_cli::run(cli, config).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
