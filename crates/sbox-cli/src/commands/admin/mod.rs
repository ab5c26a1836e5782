mod delete;
mod get;
mod list;
mod respond;
mod seed;
mod session;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `sbox admin`. Everything but `login` needs an active session.
pub fn handle(action: &AdminCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if matches!(action, AdminCommands::Login) {
        return session::login(ctx, flags);
    }
    ctx.require_admin()?;

    match action {
        AdminCommands::Login => unreachable!("login is handled before the session check"),
        AdminCommands::Logout => session::logout(ctx, flags),
        AdminCommands::List { status, limit } => {
            list::run(status.as_deref(), *limit, ctx, flags)
        }
        AdminCommands::Get { id } => get::run(id, ctx, flags),
        AdminCommands::Respond {
            id,
            response,
            status,
        } => respond::run(id, response, status.as_deref(), ctx, flags),
        AdminCommands::Status {
            id,
            status: new_status,
        } => status::run(id, new_status, ctx, flags),
        AdminCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags),
        AdminCommands::Seed { yes } => seed::run(*yes, ctx, flags),
    }
}
