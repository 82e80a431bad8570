//! labelpick CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick labels interactively for an issue labelled bug and status.open
//! labelpick pick --catalog labels.toml --labels bug,status.open
//!
//! # Scripted: type "st.c", press space, confirm
//! labelpick -q pick -c labels.toml -l status.open -k 'st.c<space><enter>'
//!
//! # What does a keyword match?
//! labelpick match -c labels.toml p.hi
//!
//! # Shell completions
//! labelpick completions zsh > _labelpick
//! ```
//!
//! # Configuration
//!
//! Stored in the user's config directory (`~/.config/labelpick/config.toml`
//! on Linux); `LABELPICK_*` environment variables override single keys.
//! Logging honours `RUST_LOG`, otherwise `-v`/`-vv`.

use clap::CommandFactory;
use labelpick::{
    PickerError,
    cli::{Cli, Commands},
    commands,
    completions,
    config::PickerConfig,
    keybinds::KeyMap,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, PickerError>;

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.log_level());

    if let Commands::Completions { shell } = &cli.command {
        completions::generate_static(*shell, &mut Cli::command(), &mut io::stdout());
        return Ok(());
    }

    let (config, config_path): (PickerConfig, PathBuf) = match &cli.config {
        Some(path) => (PickerConfig::load_from(path)?, path.clone()),
        None => (PickerConfig::load()?, PickerConfig::config_path()?),
    };
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Pick {
            catalog,
            labels,
            keys,
            wrap,
        } => {
            let catalog = commands::load_catalog(catalog.as_deref(), &config)?;
            let keymap = KeyMap::from_config(&config.keybinds)?;
            let mut options = config.session_options();
            options.wrap_suggestions |= *wrap;

            commands::pick(&catalog, labels, keys.as_deref(), &keymap, options, quiet)?;
        }
        Commands::Match { catalog, keyword } => {
            let catalog = commands::load_catalog(catalog.as_deref(), &config)?;
            commands::matches(&catalog, keyword, quiet)?;
        }
        Commands::Config { command } => {
            commands::config(config, &config_path, command, quiet)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
