//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, bootstraps the `CliContext` and
//! dispatches to handlers.

use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sitekit_cli::error::exit_code_for;
use sitekit_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

/// Install the tracing subscriber. `RUST_LOG` wins; otherwise `-v` turns
/// on debug output for the sitekit crates.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "warn,sitekit_core=debug,sitekit_cms=debug,sitekit_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(config)?;

    match command {
        Commands::Settings { watch: None, .. } => handlers::settings::execute(&ctx).await?,
        Commands::Settings {
            watch: Some(secs),
            count,
        } => handlers::settings::watch(&ctx, Duration::from_secs(secs), count).await?,
        Commands::Nav => handlers::settings::navigation(&ctx).await?,
        Commands::Footer => handlers::settings::footer(&ctx).await?,
        Commands::Social => handlers::settings::social(&ctx).await?,
        Commands::Page { slug } => handlers::pages::execute(&ctx, &slug).await?,
        Commands::Slugs => handlers::pages::slugs(&ctx).await?,
        Commands::Meta { slug } => handlers::pages::metadata(&ctx, &slug).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads SITEKIT_* defaults
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = u8::try_from(exit_code_for(&err)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
