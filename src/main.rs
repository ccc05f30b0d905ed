//! Imperial front end CLI entry point

use clap::Parser;

fn main() {
    let cli = imperial::cli::Cli::parse();

    // Initialize structured logging with env-based filter, defaulting to info (debug with --verbose)
    let default_level = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    imperial::cli::run(cli);
}
