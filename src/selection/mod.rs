//! Selection snapshots and the toggle rules that move between them
//!
//! A [`SelectionState`] records which labels were on the issue when the
//! picker opened, which have been added or removed since, and what the
//! current keyword matches. Transitions return new snapshots.

pub mod error;
mod invariants;
pub mod state;
mod toggle;

pub use error::InvariantViolation;
pub use state::{LabelDiff, SelectionState, SuggestionMove};
