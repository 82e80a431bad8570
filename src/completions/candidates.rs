//! Static completion candidates
//!
//! These need neither a catalog nor a config file.

use super::Candidate;
use crate::keybinds::PickerAction;

/// Known configuration keys for `config set/get`
#[must_use]
pub fn config_keys() -> Vec<Candidate> {
    vec![
        Candidate::new("quiet").with_help("Suppress informational output"),
        Candidate::new("wrap_suggestions").with_help("Wrap UP/DOWN around the suggestion list"),
        Candidate::new("default_catalog").with_help("Catalog used when --catalog is omitted"),
    ]
}

/// Action names accepted in the `[keybinds]` config table
#[must_use]
pub fn keybind_actions() -> Vec<Candidate> {
    PickerAction::ALL
        .into_iter()
        .map(|action| Candidate::new(action.name()).with_help(action.description()))
        .collect()
}

/// Named keys accepted inside `<...>` in a key script
#[must_use]
pub fn key_names() -> Vec<Candidate> {
    [
        "space", "enter", "esc", "tab", "btab", "bspace", "del", "up", "down", "left", "right",
        "home", "end", "pgup", "pgdn", "lt",
    ]
    .into_iter()
    .map(Candidate::new)
    .collect()
}
