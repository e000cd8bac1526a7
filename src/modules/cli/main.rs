//! envref CLI
//!
//! Command-line interface for loading and inspecting configuration variables.

use clap::Parser;
use envref_cli::{Cli, Commands};
use envref_core::EnvrefError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<EnvrefError>()
            .map_or(1, EnvrefError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let env = cli.load()?;

    match &cli.command {
        Commands::Get(cmd) => cmd.execute(&env)?,
        Commands::Dump(cmd) => cmd.execute(&env)?,
        Commands::Require(cmd) => cmd.execute(&env)?,
        Commands::Group(cmd) => cmd.execute(&env)?,
    }

    Ok(())
}
