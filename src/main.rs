use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, error, LevelFilter};
use std::process;

use credential_validator::cli::{self, CheckOptions};
use credential_validator::config::{self, PatternConfig};

/// credcheck - check usernames, emails and passwords against validation patterns
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Sets the configuration file
    #[clap(short, long, value_name = "FILE", default_value = "credcheck.toml")]
    config: String,

    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a credential
    Check {
        /// Username
        #[clap(short, long)]
        username: String,

        /// Email address
        #[clap(short, long)]
        email: String,

        /// Password (prompted for when omitted)
        #[clap(short, long)]
        password: Option<String>,

        /// Username pattern literal, e.g. '/^[a-z]+$/i'
        #[clap(long, value_name = "REGEXP")]
        username_pattern: Option<String>,

        /// Email pattern literal
        #[clap(long, value_name = "REGEXP")]
        email_pattern: Option<String>,

        /// Password pattern literal
        #[clap(long, value_name = "REGEXP")]
        password_pattern: Option<String>,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the active pattern for each field
    Patterns {},

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[clap(long)]
        force: bool,
    },
}

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG sets the filter, each -d raises the global level on top of it
    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = verbosity_level(cli.debug) {
        logger.filter_level(level);
    }
    logger.init();

    // init-config must not trip over the default file load_config would write
    if let Commands::InitConfig { force } = &cli.command {
        if let Err(err) = cli::init_config(&cli.config, *force) {
            error!("Error writing configuration: {}", err);
            process::exit(1);
        }
        return;
    }

    match config::load_config(&cli.config) {
        Ok(_) => {
            info!("Configuration loaded from {}", cli.config);
        }
        Err(err) => {
            error!("Failed to load configuration: {:#}", err);
            process::exit(1);
        }
    }

    match cli.command {
        Commands::Check {
            username,
            email,
            password,
            username_pattern,
            email_pattern,
            password_pattern,
            json,
        } => {
            let options = CheckOptions {
                username,
                email,
                password,
                overrides: PatternConfig {
                    username: username_pattern,
                    email: email_pattern,
                    password: password_pattern,
                },
                json,
            };

            match cli::check_credential(options) {
                Ok(true) => {},
                Ok(false) => process::exit(1),
                Err(err) => {
                    error!("Error checking credential: {:#}", err);
                    process::exit(2);
                }
            }
        }
        Commands::Patterns {} => {
            if let Err(err) = cli::show_patterns() {
                error!("Error showing patterns: {:#}", err);
                process::exit(1);
            }
        }
        Commands::InitConfig { .. } => {}
    }
}

/// Global log level for a `-d` count, `None` leaves the environment filter alone
fn verbosity_level(debug: u8) -> Option<LevelFilter> {
    match debug {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some(LevelFilter::Debug));
        assert_eq!(verbosity_level(2), Some(LevelFilter::Trace));
        assert_eq!(verbosity_level(u8::MAX), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_debug_flag_is_counted() {
        let cli = Cli::parse_from(["credcheck", "-dd", "patterns"]);
        assert_eq!(cli.debug, 2);
        assert_eq!(verbosity_level(cli.debug), Some(LevelFilter::Trace));

        let cli = Cli::parse_from(["credcheck", "patterns"]);
        assert_eq!(verbosity_level(cli.debug), None);
    }
}
