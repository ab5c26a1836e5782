use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::AdminCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Submit a suggestion.
    Submit(SubmitArgs),
    /// Show the newest suggestions.
    Feed,
    /// Totals across all suggestions.
    Stats,
    /// Print the JSON Schema of a response type.
    Schema(SchemaArgs),
    /// Administrator triage (requires `admin login`).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Suggestion text; longer input is cut to `feed.max_chars`
    #[arg(long)]
    pub text: String,
    /// Department (defaults to General)
    #[arg(long)]
    pub department: Option<String>,
    /// Category tag (defaults to Other)
    #[arg(long)]
    pub tag: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "suggestion")]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Suggestion,
    Feed,
    Stats,
    Session,
    Delete,
}
