use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::actions::PickerAction;
use super::config::KeybindConfig;
use super::error::{KeybindError, Result};
use super::keys::{key_to_string, parse_key_string};
use crate::history::PickerEvent;

/// Resolved key bindings, keyed by normalised key name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<String, PickerAction>,
}

impl Default for KeyMap {
    fn default() -> Self {
        // The default config only holds valid, distinct keys
        Self::from_config(&KeybindConfig::default()).unwrap_or_else(|_| Self {
            bindings: HashMap::new(),
        })
    }
}

impl KeyMap {
    /// Build the key map for a keybind config
    ///
    /// # Errors
    ///
    /// Fails on unknown action names, unparsable keys, or one key bound to
    /// two actions.
    pub fn from_config(config: &KeybindConfig) -> Result<Self> {
        if let Some(unknown) = config
            .keybinds
            .keys()
            .find(|name| name.parse::<PickerAction>().is_err())
        {
            return Err(KeybindError::UnknownAction(unknown.clone()));
        }

        let mut bindings = HashMap::new();
        for action in PickerAction::ALL {
            if config.is_disabled(action.name()) {
                tracing::debug!(action = action.name(), "keybind disabled");
                continue;
            }

            for key in config.get(action.name()) {
                if key == "none" {
                    continue;
                }
                let name = parse_key_string(&key)
                    .as_ref()
                    .and_then(key_to_string)
                    .ok_or_else(|| KeybindError::InvalidKey {
                        action: action.name().to_string(),
                        key: key.clone(),
                    })?;

                if let Some(previous) = bindings.insert(name.clone(), action) {
                    if previous != action {
                        return Err(KeybindError::Conflict {
                            key: name,
                            first: previous.name().to_string(),
                            second: action.name().to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self { bindings })
    }

    /// Action bound to `key`, if any
    #[must_use]
    pub fn action(&self, key: &KeyEvent) -> Option<PickerAction> {
        key_to_string(key).and_then(|name| self.bindings.get(&name).copied())
    }

    /// Picker event for a key press
    ///
    /// Bound keys map to their action; unbound printable characters type
    /// into the buffer. Anything else is ignored.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<PickerEvent> {
        if let Some(action) = self.action(key) {
            return Some(action.event());
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(if c == ' ' {
                    PickerEvent::Space
                } else {
                    PickerEvent::Char(c)
                })
            }
            _ => None,
        }
    }

    /// Keys bound to `action`, sorted
    #[must_use]
    pub fn keys_for(&self, action: PickerAction) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::KeybindDef;
    use std::collections::BTreeMap;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(map.resolve(&key(KeyCode::Enter, KeyModifiers::NONE)), Some(PickerEvent::Enter));
        assert_eq!(
            map.resolve(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(PickerEvent::Escape)
        );
        assert_eq!(map.resolve(&key(KeyCode::Tab, KeyModifiers::NONE)), Some(PickerEvent::ToggleSuggestion));
        assert_eq!(map.keys_for(PickerAction::SuggestionDown), vec!["ctrl-j", "down"]);
    }

    #[test]
    fn test_unbound_characters_type() {
        let map = KeyMap::default();
        assert_eq!(map.resolve(&key(KeyCode::Char('b'), KeyModifiers::NONE)), Some(PickerEvent::Char('b')));
        assert_eq!(map.resolve(&key(KeyCode::Char('B'), KeyModifiers::SHIFT)), Some(PickerEvent::Char('B')));
        assert_eq!(map.resolve(&key(KeyCode::Char(' '), KeyModifiers::NONE)), Some(PickerEvent::Space));
        assert_eq!(map.resolve(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(map.resolve(&key(KeyCode::Left, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_disabled_action() {
        let mut config = KeybindConfig::default();
        config
            .keybinds
            .insert("undo".to_string(), KeybindDef::Single("none".to_string()));
        let map = KeyMap::from_config(&config).unwrap();
        assert_eq!(map.resolve(&key(KeyCode::Backspace, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_invalid_config() {
        let config = KeybindConfig {
            keybinds: BTreeMap::from([("explode".to_string(), KeybindDef::Single("x".to_string()))]),
        };
        assert_eq!(
            KeyMap::from_config(&config),
            Err(KeybindError::UnknownAction("explode".to_string()))
        );

        let config = KeybindConfig {
            keybinds: BTreeMap::from([("confirm".to_string(), KeybindDef::Single("hyper-q".to_string()))]),
        };
        assert!(matches!(
            KeyMap::from_config(&config),
            Err(KeybindError::InvalidKey { .. })
        ));

        let config = KeybindConfig {
            keybinds: BTreeMap::from([("confirm".to_string(), KeybindDef::Single("esc".to_string()))]),
        };
        assert!(matches!(
            KeyMap::from_config(&config),
            Err(KeybindError::Conflict { .. })
        ));
    }
}
