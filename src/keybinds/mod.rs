//! Keybind system for the interactive picker.
//!
//! Keys are named the way they appear in the config file (`ctrl-k`, `enter`,
//! `bspace`). A [`KeyMap`] turns terminal key events into [`PickerEvent`]s:
//! bound keys trigger their [`PickerAction`], other printable characters are
//! typed into the query.
//!
//! [`PickerEvent`]: crate::history::PickerEvent

pub mod actions;
pub mod config;
pub mod error;
pub mod keymap;
pub mod keys;
pub mod script;

pub use actions::PickerAction;
pub use config::{KeybindConfig, KeybindDef};
pub use error::{KeybindError, Result};
pub use keymap::KeyMap;
pub use keys::{key_to_string, parse_key_string};
pub use script::parse_key_script;
