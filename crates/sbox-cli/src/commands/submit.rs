use sbox_core::entities::{DEFAULT_DEPARTMENT, DEFAULT_TAG};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared::parse::truncate_chars;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sbox submit`.
pub fn handle(args: &SubmitArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let max_chars = ctx.config.feed.max_chars;
    let (text, truncated) = truncate_chars(&args.text, max_chars);
    if truncated {
        tracing::warn!(max_chars, "suggestion text truncated");
    }

    let suggestion = ctx.repo.create(
        args.department.as_deref().unwrap_or(DEFAULT_DEPARTMENT),
        args.tag.as_deref().unwrap_or(DEFAULT_TAG),
        &text,
    )?;

    output(&suggestion, flags.format)
}
