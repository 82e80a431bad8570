//! Configuration for keybinds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::actions::PickerAction;

/// Keybind mappings: action name to one or more keys.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindConfig {
    pub keybinds: BTreeMap<String, KeybindDef>,
}

/// Keybind definition - can be single key, multiple keys, or disabled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeybindDef {
    /// Single keybind
    Single(String),
    /// Multiple alternative keybinds for the same action
    Multiple(Vec<String>),
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            keybinds: default_keybinds(),
        }
    }
}

fn default_keybinds() -> BTreeMap<String, KeybindDef> {
    let single = |key: &str| KeybindDef::Single(key.to_string());
    let multiple = |keys: &[&str]| KeybindDef::Multiple(keys.iter().map(|k| (*k).to_string()).collect());

    BTreeMap::from([
        (PickerAction::Confirm.name().to_string(), single("enter")),
        (PickerAction::Cancel.name().to_string(), multiple(&["esc", "ctrl-c"])),
        (PickerAction::Undo.name().to_string(), single("bspace")),
        (PickerAction::SuggestionUp.name().to_string(), multiple(&["up", "ctrl-k"])),
        (PickerAction::SuggestionDown.name().to_string(), multiple(&["down", "ctrl-j"])),
        (PickerAction::ToggleSuggestion.name().to_string(), single("tab")),
    ])
}

impl KeybindConfig {
    /// Get the keybind(s) for a given action name.
    ///
    /// Actions missing from a user config fall back to their default keys.
    #[must_use]
    pub fn get(&self, action: &str) -> Vec<String> {
        let def = match self.keybinds.get(action) {
            Some(def) => Some(def.clone()),
            None => default_keybinds().remove(action),
        };
        def.map_or_else(Vec::new, |def| match def {
            KeybindDef::Single(key) => vec![key],
            KeybindDef::Multiple(keys) => keys,
        })
    }

    /// Check if a keybind is disabled for an action.
    #[must_use]
    pub fn is_disabled(&self, action: &str) -> bool {
        self.keybinds.get(action).is_some_and(|def| match def {
            KeybindDef::Single(key) => key == "none",
            KeybindDef::Multiple(keys) => keys.iter().all(|k| k == "none"),
        })
    }
}
