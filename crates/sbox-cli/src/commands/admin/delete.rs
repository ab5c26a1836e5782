use anyhow::bail;
use sbox_core::responses::DeleteResponse;
use sbox_store::DeleteConfirmation;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, yes: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(id)?;
    let confirmation = DeleteConfirmation::open(&mut ctx.repo, id)?;
    if !yes {
        bail!(
            "refusing to delete suggestion {id} ({:?}) without --yes",
            confirmation.suggestion().text
        );
    }

    let deleted = confirmation.confirm(&mut ctx.repo)?;
    let remaining = u32::try_from(ctx.repo.load()?.len())?;
    output(&DeleteResponse { deleted, remaining }, flags.format)
}
