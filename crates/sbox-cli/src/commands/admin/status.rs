use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_id, parse_status};
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, status: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(id)?;
    let status = parse_status(status)?;
    let updated = ctx.repo.set_status(id, status)?;
    output(&updated, flags.format)
}
