//! Config command - inspect and change configuration

use std::path::{Path, PathBuf};

use crate::PickerError;
use crate::cli::ConfigCommands;
use crate::completions::{config_keys, joined};
use crate::config::PickerConfig;

type Result<T> = std::result::Result<T, PickerError>;

/// Execute the config command against the config stored at `path`
///
/// # Errors
/// Returns an error for unknown keys, unparsable values, or failed saves.
pub fn execute(mut config: PickerConfig, path: &Path, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| PickerError::InvalidInput(format!("Failed to render config: {e}")))?;
            print!("{rendered}");
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                PickerError::InvalidInput("Invalid format. Use: labelpick config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            set_value(&mut config, key, value)?;
            config.save_to(path)?;
            if !quiet {
                println!("Set {key} = {}", get_value(&config, key)?);
            }
        }
        ConfigCommands::Get { key } => println!("{}", get_value(&config, key)?),
    }
    Ok(())
}

fn unknown_key(key: &str) -> PickerError {
    PickerError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        joined(&config_keys())
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse::<bool>().map_err(|_| {
        PickerError::InvalidInput(format!("Invalid value for {key}: '{value}'. Use 'true' or 'false'"))
    })
}

fn set_value(config: &mut PickerConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "quiet" => config.quiet = parse_bool(key, value)?,
        "wrap_suggestions" => config.wrap_suggestions = parse_bool(key, value)?,
        "default_catalog" => {
            config.default_catalog = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn get_value(config: &PickerConfig, key: &str) -> Result<String> {
    match key {
        "quiet" => Ok(config.quiet.to_string()),
        "wrap_suggestions" => Ok(config.wrap_suggestions.to_string()),
        "default_catalog" => Ok(config
            .default_catalog
            .as_ref()
            .map_or_else(String::new, |p| p.display().to_string())),
        _ => Err(unknown_key(key)),
    }
}
