use clap::Subcommand;
use mp_core::IssueStatus;

#[derive(Subcommand)]
pub enum TechnicianCommands {
    /// List technicians and their availability
    List,

    /// Show the signed-in technician's assigned tasks
    Tasks,

    /// Move an assigned issue along its workflow
    Update {
        /// Issue ID
        id: String,

        /// in_progress or resolved
        #[arg(long)]
        status: IssueStatus,
    },
}
