use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(yes: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let existing = ctx.repo.load()?.len();
    if existing > 0 && !yes {
        bail!("store holds {existing} suggestion(s); pass --yes to replace them with sample data");
    }

    let samples = ctx.repo.seed_samples()?;
    output(&samples, flags.format)
}
