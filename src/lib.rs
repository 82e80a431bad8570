//! labelpick - keyboard-driven label selection for issue trackers
//!
//! The core is a pure selection engine: given a repository's label catalog
//! and the labels an issue currently has, every keystroke produces a new
//! [`selection::SelectionState`]. Typed keywords filter the catalog; a
//! keyword followed by a space toggles the one label it matches. Labels in
//! an exclusive group (`status.open`, `status.closed`) replace each other.
//!
//! ```
//! use labelpick::history::{Dispatch, PickerEvent, PickerSession};
//! use labelpick::label::LabelCatalog;
//!
//! let catalog = LabelCatalog::from_names(["bug", "status.open", "status.closed"])?;
//! let mut session = PickerSession::new(&catalog, ["status.open"]);
//! session.type_str("bu st.c ");
//!
//! let Dispatch::Confirmed(labels) = session.dispatch(PickerEvent::Enter) else {
//!     unreachable!()
//! };
//! assert_eq!(labels.into_iter().collect::<Vec<_>>(), ["bug", "status.closed"]);
//! # Ok::<(), labelpick::label::CatalogError>(())
//! ```

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod history;
pub mod keybinds;
pub mod label;
pub mod matching;
pub mod output;
pub mod pickers;
pub mod present;
pub mod query;
pub mod selection;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickerError {
    /// Label catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] label::CatalogError),
    /// Event sent to a finished session
    #[error("Session error: {0}")]
    Session(#[from] history::SessionError),
    /// Bad keybind config or key script
    #[error("Keybind error: {0}")]
    Keybind(#[from] keybinds::KeybindError),
    /// Selection logic defect
    #[error("Invariant violation: {0}")]
    Invariant(#[from] selection::InvariantViolation),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
