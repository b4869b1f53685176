//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.
//! - Handlers return their stdout text; printing happens in one place.

use anyhow::Result;
use wp_env_config::Config;

use crate::args::Commands;
use crate::commands;

/// Dispatch a command with an already-resolved configuration.
pub(crate) fn run_command(command: Commands, config: Config) -> Result<String> {
    match command {
        Commands::Show {
            format,
            show_secrets,
        } => commands::show::run(&config, format, show_secrets),
        Commands::Get { name } => commands::get::run(&config, &name),
        Commands::Check => commands::check::run(config),
    }
}
