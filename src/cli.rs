//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **pick**: Run the label picker for an issue (interactive, or scripted
//!   with `--keys`)
//! - **match**: Show which catalog labels a keyword matches
//! - **config**: Show or change configuration
//! - **completions**: Print a shell completion script
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use labelpick::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from([
//!     "labelpick", "pick", "--catalog", "labels.toml",
//!     "--labels", "bug,status.open", "--keys", "status.c<space><enter>",
//! ]);
//! match cli.command {
//!     Commands::Pick { labels, .. } => assert_eq!(labels, ["bug", "status.open"]),
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "labelpick")]
#[command(about = "Keyboard-driven label picker for issue trackers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log picker transitions (repeat for more detail)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Pick labels for an issue
    #[command(visible_alias = "p")]
    Pick {
        /// Label catalog (.toml or .json); defaults to `default_catalog` from config
        #[arg(short = 'c', long = "catalog", value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Labels the issue currently has
        #[arg(short = 'l', long = "labels", value_name = "LABEL", value_delimiter = ',')]
        labels: Vec<String>,

        /// Feed keys instead of reading the terminal, e.g. "bu<space><enter>"
        #[arg(short = 'k', long = "keys", value_name = "SCRIPT")]
        keys: Option<String>,

        /// Wrap UP/DOWN around the suggestion list (overrides config)
        #[arg(long = "wrap")]
        wrap: bool,
    },

    /// List catalog labels matching a keyword
    #[command(visible_alias = "m")]
    Match {
        #[arg(short = 'c', long = "catalog", value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Keyword, optionally with a group part (e.g. "p.hi")
        #[arg(value_name = "KEYWORD")]
        keyword: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., wrap_suggestions=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter implied by `-v` flags
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pick_arguments() {
        let cli = Cli::parse_from(["labelpick", "-q", "pick", "-l", "a,b", "-l", "c", "--wrap"]);
        assert!(cli.quiet);
        let Commands::Pick {
            catalog,
            labels,
            keys,
            wrap,
        } = cli.command
        else {
            panic!("expected pick");
        };
        assert_eq!(catalog, None);
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(keys, None);
        assert!(wrap);
    }

    #[test]
    fn test_match_alias_and_verbosity() {
        let cli = Cli::parse_from(["labelpick", "m", "-vv", "-c", "l.toml", "p.hi"]);
        assert_eq!(cli.log_level(), "trace");
        assert!(matches!(cli.command, Commands::Match { ref keyword, .. } if keyword == "p.hi"));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["labelpick", "config", "set", "quiet=true"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Set { .. }
            }
        ));
    }
}
