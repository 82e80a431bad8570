use indexmap::IndexSet;
use std::fmt;

use crate::selection::SelectionState;

/// Raw input delivered to a picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A printable character; whitespace behaves like [`PickerEvent::Space`]
    Char(char),
    /// Terminates the keyword being typed and toggles it
    Space,
    /// Undo the last event
    Backspace,
    /// Highlight the previous suggestion
    Up,
    /// Highlight the next suggestion
    Down,
    /// Confirm the session
    Enter,
    /// Cancel the session
    Escape,
    /// Toggle the highlighted suggestion
    ToggleSuggestion,
    /// Toggle a label by its full name (e.g. a click on it)
    Toggle(String),
}

impl fmt::Display for PickerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Space => write!(f, "<space>"),
            Self::Backspace => write!(f, "<bspace>"),
            Self::Up => write!(f, "<up>"),
            Self::Down => write!(f, "<down>"),
            Self::Enter => write!(f, "<enter>"),
            Self::Escape => write!(f, "<esc>"),
            Self::ToggleSuggestion => write!(f, "<tab>"),
            Self::Toggle(name) => write!(f, "<toggle:{name}>"),
        }
    }
}

/// Outcome of dispatching one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<'a> {
    /// The session is still open; this is the state to render
    Updated(&'a SelectionState),
    /// The user confirmed; the labels the issue should carry
    Confirmed(IndexSet<String>),
    /// The user cancelled; nothing changes
    Cancelled,
    /// The session had already ended and the event was dropped
    Ignored,
}

impl Dispatch<'_> {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Updated(_))
    }
}

/// Session behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// UP on the first suggestion jumps to the last one and vice versa
    pub wrap_suggestions: bool,
}

/// Text buffer together with the selection it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub state: SelectionState,
}
