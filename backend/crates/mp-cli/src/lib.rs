//! mp-cli library
//!
//! Exports the backend client and the portal layer so tests can drive the
//! same code paths as the `mp` binary.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub mod error;
pub(crate) mod issue_commands;
pub mod logger;
pub mod portal;
pub(crate) mod technician_commands;
pub(crate) mod user_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliResult};
pub use portal::{
    IdentitySummary, IssueForm, Portal, PortalPage, SessionSummary, ViewContent,
};

use crate::{
    commands::Commands, issue_commands::IssueCommands, technician_commands::TechnicianCommands,
    user_commands::UserCommands,
};

use mp_auth::Registration;
use mp_config::Config;
use mp_core::{IssueSubmission, NewUser};
use serde_json::Value;

/// Runs one parsed command and returns the JSON to print.
pub async fn run(cli: Cli, config: Config) -> CliResult<Value> {
    let portal = Portal::from_config(config, cli.server.as_deref())?;
    dispatch(&portal, cli.command).await
}

async fn dispatch(portal: &Portal, command: Commands) -> CliResult<Value> {
    let value = match command {
        Commands::Login { email, password } => to_value(portal.login(&email, &password).await?)?,
        Commands::Register {
            name,
            email,
            password,
            phone,
            role,
        } => {
            let mut registration = Registration::new(name, email, password).with_role(role);
            if let Some(phone) = phone {
                registration = registration.with_phone(phone);
            }
            to_value(portal.register(registration).await?)?
        }
        Commands::Logout => to_value(portal.logout()?)?,
        Commands::Session => to_value(portal.session()?)?,
        Commands::Portal { view } => to_value(portal.open(view).await?)?,

        Commands::Issue { action } => match action {
            IssueCommands::Submit {
                name,
                email,
                phone,
                description,
                image,
            } => {
                let submission = IssueSubmission {
                    reporter: NewUser::new(name, email, phone),
                    description,
                    image,
                };
                to_value(portal.submit_issue(&submission).await?)?
            }
            IssueCommands::List => to_value(portal.list_issues().await?)?,
        },

        Commands::User { action } => match action {
            UserCommands::List => to_value(portal.list_users().await?)?,
            UserCommands::Create { name, email, phone } => {
                portal
                    .create_user(&NewUser::new(name, email, phone))
                    .await?
            }
        },

        Commands::Technician { action } => match action {
            TechnicianCommands::List => to_value(portal.list_technicians().await?)?,
            TechnicianCommands::Tasks => to_value(portal.technician_dashboard().await?)?,
            TechnicianCommands::Update { id, status } => {
                to_value(portal.update_issue_status(&id, status).await?)?
            }
        },
    };

    Ok(value)
}

fn to_value<T: serde::Serialize>(value: T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
