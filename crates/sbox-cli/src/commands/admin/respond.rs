use sbox_store::ResponseDraft;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_id, parse_status};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    response: &str,
    status: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = parse_id(id)?;
    let status = status.map(parse_status).transpose()?;

    let mut draft = ResponseDraft::open(&mut ctx.repo, id)?.with_response(response);
    if let Some(status) = status {
        draft = draft.with_status(status);
    }

    let updated = draft.submit(&mut ctx.repo)?;
    output(&updated, flags.format)
}
