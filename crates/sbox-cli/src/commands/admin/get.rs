use sbox_store::StoreError;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(id)?;
    let suggestion = ctx.repo.find_by_id(id)?.ok_or(StoreError::NotFound(id))?;
    output(&suggestion, flags.format)
}
