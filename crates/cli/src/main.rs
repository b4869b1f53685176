//! wp-env - resolve WordPress deployment configuration from the environment.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load `.env`, resolve the configuration once, and apply CLI overrides.
//! - Print the requested view of the resolved constants.
//!
//! Does NOT handle:
//! - Resolution rules (see `wp_env_config`).
//!
//! Invariants:
//! - Precedence is: CLI flags > process environment > `.env` file > literal defaults.
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wp_env_config::{Config, ConfigLoader};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<String> {
    let config = load_config(&cli)?;
    run_command(cli.command, config)
}

/// Resolve the configuration with CLI overrides applied last.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(ref path) = cli.env_file {
        loader = loader
            .load_dotenv_from(path)
            .with_context(|| format!("Failed to load environment from {}", path.display()))?;
    } else if !cli.no_dotenv {
        loader = loader
            .load_dotenv()
            .context("Failed to load environment")?;
    }

    loader = loader.from_env();

    if let Some(ref name) = cli.db_name {
        loader = loader.with_db_name(name.clone());
    }
    if let Some(ref user) = cli.db_user {
        loader = loader.with_db_user(user.clone());
    }
    if let Some(ref host) = cli.db_host {
        loader = loader.with_db_host(host.clone());
    }
    if let Some(ref url) = cli.home_url {
        loader = loader.with_home_url(url.clone());
    }
    if let Some(ref url) = cli.site_url {
        loader = loader.with_site_url(url.clone());
    }

    Ok(loader.build())
}
