use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Submit(args) => commands::submit::handle(&args, ctx, flags),
        Commands::Feed => commands::feed::handle(ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
