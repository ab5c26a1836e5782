use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn login(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = ctx.now_ms();
    let session = ctx.session.login(now)?;
    output(&session, flags.format)
}

pub fn logout(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout()?;
    let now = ctx.now_ms();
    output(&ctx.session.status(now)?, flags.format)
}
