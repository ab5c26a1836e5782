use clap::Subcommand;

/// Admin triage commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Start an admin session.
    Login,
    /// End the admin session.
    Logout,
    /// List all suggestions, newest first.
    List {
        /// Only suggestions with this status (case-insensitive)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a suggestion by ID.
    Get { id: String },
    /// Respond to a suggestion and set its status.
    Respond {
        id: String,
        #[arg(long)]
        response: String,
        /// New status (defaults to the current one)
        #[arg(long)]
        status: Option<String>,
    },
    /// Change a suggestion's status, keeping any response.
    Status { id: String, status: String },
    /// Delete a suggestion.
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Replace all suggestions with sample data.
    Seed {
        /// Confirm replacing existing suggestions
        #[arg(long)]
        yes: bool,
    },
}
