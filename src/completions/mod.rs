//! Shell completion support for labelpick
//!
//! Completion scripts are generated from the clap command tree. The static
//! candidate lists double as the reference for config keys and key names in
//! help and error messages.

mod candidates;

pub use candidates::*;

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// A completion suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The value to insert
    pub value: String,
    /// Optional help text shown alongside
    pub help: Option<String>,
}

impl Candidate {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Comma-separated candidate values, for messages
#[must_use]
pub fn joined(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|c| c.value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate a static completion script
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::parse_key_string;

    #[test]
    fn test_config_keys_not_empty() {
        assert!(!config_keys().is_empty());
    }

    #[test]
    fn test_keybind_actions_cover_every_action() {
        assert_eq!(keybind_actions().len(), crate::keybinds::PickerAction::ALL.len());
    }

    #[test]
    fn test_key_names_parse() {
        for candidate in key_names().into_iter().filter(|c| c.value != "lt") {
            assert!(parse_key_string(&candidate.value).is_some(), "{}", candidate.value);
        }
    }

    #[test]
    fn test_generate_bash() {
        let mut cmd = Command::new("labelpick").subcommand(Command::new("pick"));
        let mut buf = Vec::new();
        generate_static(Shell::Bash, &mut cmd, &mut buf);
        assert!(String::from_utf8_lossy(&buf).contains("labelpick"));
    }
}
