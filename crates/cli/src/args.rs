//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Carry explicit overrides that sit above environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration (see `wp_env_config::ConfigLoader`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "wp-env")]
#[command(about = "Resolve WordPress deployment configuration from the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  wp-env show\n  wp-env show --format php --show-secrets > wp-config-local.php\n  WORDPRESS_DB_HOST=mysql:3306 wp-env get DB_HOST\n  wp-env --env-file staging.env check\n"
)]
pub struct Cli {
    /// Do not read a `.env` file (same as DOTENV_DISABLED=1)
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    /// Read environment overrides from this file instead of `./.env`
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "no_dotenv")]
    pub env_file: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database name, overriding WORDPRESS_DB_NAME
    #[arg(long, global = true)]
    pub db_name: Option<String>,

    /// Database user, overriding WORDPRESS_DB_USER
    #[arg(long, global = true)]
    pub db_user: Option<String>,

    /// Database host, overriding WORDPRESS_DB_HOST
    #[arg(long, global = true)]
    pub db_host: Option<String>,

    /// Home URL, overriding WP_HOME
    #[arg(long, global = true)]
    pub home_url: Option<String>,

    /// Site URL, overriding WP_SITEURL
    #[arg(long, global = true)]
    pub site_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every resolved constant
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Env)]
        format: OutputFormat,

        /// Print the database password instead of a placeholder
        #[arg(long)]
        show_secrets: bool,
    },

    /// Print the value of one constant
    Get {
        /// Constant name, e.g. DB_HOST
        name: String,
    },

    /// Resolve the configuration once and report a summary
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_are_global() {
        let cli = Cli::try_parse_from(["wp-env", "show", "--db-host", "cli-db:3307"]).unwrap();
        assert_eq!(cli.db_host.as_deref(), Some("cli-db:3307"));
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: OutputFormat::Env,
                show_secrets: false
            }
        ));
    }

    #[test]
    fn test_env_file_conflicts_with_no_dotenv() {
        let result = Cli::try_parse_from(["wp-env", "--no-dotenv", "--env-file", "x.env", "check"]);
        assert!(result.is_err());
    }
}
