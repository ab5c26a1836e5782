use sbox_core::entities::Suggestion;
use sbox_core::responses::{DeleteResponse, FeedResponse, SessionResponse, SuggestionStats};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `sbox schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Suggestion => schema_for!(Suggestion),
        SchemaType::Feed => schema_for!(FeedResponse),
        SchemaType::Stats => schema_for!(SuggestionStats),
        SchemaType::Session => schema_for!(SessionResponse),
        SchemaType::Delete => schema_for!(DeleteResponse),
    };
    output(&schema, flags.format)
}
