//! Interaction history and the event-driven picker session
//!
//! Every event that changes the picker pushes a [`Snapshot`] of the text
//! buffer and the selection it produced. BACKSPACE pops the newest snapshot,
//! which undoes both the typed character and whatever it toggled.

pub mod error;
pub mod session;
pub mod stack;
pub mod types;

pub use error::{Result, SessionError};
pub use session::PickerSession;
pub use stack::InteractionHistory;
pub use types::{Dispatch, PickerEvent, SessionOptions, Snapshot};
