use sbox_store::views::{admin_grid, filter_by_status};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut suggestions = ctx.repo.load()?;
    if let Some(status) = status {
        suggestions = filter_by_status(suggestions, status);
    }

    let mut rows = admin_grid(suggestions);
    if let Some(limit) = limit.or(flags.limit) {
        rows.truncate(usize::try_from(limit)?);
    }

    output(&rows, flags.format)
}
