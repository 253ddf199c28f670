use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tdelta_cli::commands::render::Render;
use tdelta_cli::commands::{between, convert, fields, parse, tuple};
use tdelta_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::Parse {
            input,
            unit,
            output,
        }) => {
            parse::run(
                &mut stdout,
                input,
                unit.as_deref(),
                Render::resolve(*output, &config),
            )?;
        }
        Some(Commands::Tuple { values, output }) => {
            tuple::run(&mut stdout, values, Render::resolve(*output, &config))?;
        }
        Some(Commands::Fields { entries, output }) => {
            fields::run(&mut stdout, entries, Render::resolve(*output, &config))?;
        }
        Some(Commands::Convert { input, to }) => {
            convert::run(&mut stdout, input, to)?;
        }
        Some(Commands::Between { start, end, output }) => {
            between::run(&mut stdout, start, end, Render::resolve(*output, &config))?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
