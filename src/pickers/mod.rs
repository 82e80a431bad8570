//! Pickers for the other issue fields
//!
//! They share the label picker's query model (whitespace-terminated keywords
//! are confirmed, the trailing one filters) but select far more simply:
//! - [`SingleChoiceState`]: assignee and milestone, at most one selected
//! - [`BoardPickerState`]: word-prefix search over saved boards
//! - [`RepositoryPickerState`]: substring search with wrap-around cycling

pub mod board;
pub mod repository;
pub mod single;

pub use board::BoardPickerState;
pub use repository::RepositoryPickerState;
pub use single::{Assignee, Choice, Milestone, SingleChoiceState};

/// Case-insensitive substring test shared by the pickers
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
