use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum IssueCommands {
    /// Report a maintenance issue
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        description: String,

        /// Photo of the problem
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// List all issues
    List,
}
