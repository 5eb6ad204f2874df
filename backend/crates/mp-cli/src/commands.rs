use crate::{
    issue_commands::IssueCommands, technician_commands::TechnicianCommands,
    user_commands::UserCommands,
};

use clap::Subcommand;
use mp_core::Role;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in with it
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        phone: Option<String>,

        /// user, technician or admin
        #[arg(long, default_value = "user")]
        role: Role,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the current session
    Session,

    /// Open the portal view for the current role
    Portal {
        /// Switch to another role's view for this run only
        #[arg(long)]
        view: Option<Role>,
    },

    /// Issue operations
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },

    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Technician operations
    Technician {
        #[command(subcommand)]
        action: TechnicianCommands,
    },
}
