use anyhow::Result;
use clap::Parser;
use subtally::cli::Cli;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise only warnings unless --verbose.
    let default_level = if cli.verbose { "subtally=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cli.run()
}
