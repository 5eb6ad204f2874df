use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List registered users
    List,

    /// Create a user record on the backend
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,
    },
}
