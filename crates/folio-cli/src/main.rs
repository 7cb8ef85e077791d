use anyhow::Context;
use clap::Parser;
use folio_config::FolioConfig;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("folio error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = load_config(&flags)?;
    context::warn_unconfigured();

    let ctx = context::AppContext::new(config);
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<FolioConfig> {
    let mut config = FolioConfig::load_with_dotenv().context("failed to load folio configuration")?;
    if let Some(dir) = &flags.content_dir {
        config.content.dir = dir.into();
    }
    Ok(config)
}
