use sbox_store::views::stats;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sbox stats`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let list = ctx.repo.load()?;
    output(&stats(&list), flags.format)
}
