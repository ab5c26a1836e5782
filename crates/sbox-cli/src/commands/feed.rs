use sbox_store::views::public_feed;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sbox feed`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.feed.public_limit);
    let feed = public_feed(ctx.repo.load()?, usize::try_from(limit)?);
    output(&feed, flags.format)
}
