//! Actions that can be bound to keys in the picker.

use std::fmt;
use std::str::FromStr;

use super::error::KeybindError;
use crate::history::PickerEvent;

/// Picker actions a key can trigger
///
/// Printable characters are never bound; they always type into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerAction {
    /// Apply the selection - Enter
    Confirm,
    /// Close without changes - Esc
    Cancel,
    /// Undo the last event - Backspace
    Undo,
    /// Highlight the previous suggestion - Up
    SuggestionUp,
    /// Highlight the next suggestion - Down
    SuggestionDown,
    /// Toggle the highlighted suggestion - Tab
    ToggleSuggestion,
}

impl PickerAction {
    pub const ALL: [Self; 6] = [
        Self::Confirm,
        Self::Cancel,
        Self::Undo,
        Self::SuggestionUp,
        Self::SuggestionDown,
        Self::ToggleSuggestion,
    ];

    /// Name used in the config file
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
            Self::Undo => "undo",
            Self::SuggestionUp => "suggestion_up",
            Self::SuggestionDown => "suggestion_down",
            Self::ToggleSuggestion => "toggle_suggestion",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Confirm => "Apply the selected labels",
            Self::Cancel => "Close the picker without changes",
            Self::Undo => "Undo the last keystroke",
            Self::SuggestionUp => "Highlight the previous suggestion",
            Self::SuggestionDown => "Highlight the next suggestion",
            Self::ToggleSuggestion => "Toggle the highlighted suggestion",
        }
    }

    /// Session event this action produces
    #[must_use]
    pub const fn event(&self) -> PickerEvent {
        match self {
            Self::Confirm => PickerEvent::Enter,
            Self::Cancel => PickerEvent::Escape,
            Self::Undo => PickerEvent::Backspace,
            Self::SuggestionUp => PickerEvent::Up,
            Self::SuggestionDown => PickerEvent::Down,
            Self::ToggleSuggestion => PickerEvent::ToggleSuggestion,
        }
    }
}

impl fmt::Display for PickerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PickerAction {
    type Err = KeybindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| KeybindError::UnknownAction(s.to_string()))
    }
}
