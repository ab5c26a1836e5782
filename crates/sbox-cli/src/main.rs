use anyhow::Context;
use clap::Parser;
use sbox_store::StoreError;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("{}", report(&error));
        std::process::exit(1);
    }
}

/// Rejected input, unknown ids and a missing session read as a short notice;
/// anything else is reported with its full cause chain.
fn report(error: &anyhow::Error) -> String {
    let notice = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<StoreError>())
        .filter(|store| store.is_user_facing());
    match notice {
        Some(store) => format!("sbox: {store}"),
        None => format!("sbox error: {error:#}"),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config =
        sbox_config::SboxConfig::load_with_dotenv().context("failed to load sbox configuration")?;
    let mut ctx = context::AppContext::init(config, &flags);

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SBOX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
