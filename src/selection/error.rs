use thiserror::Error;

/// A broken selection invariant
///
/// These indicate a defect in the selection logic, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("Added label '{0}' is already an initial label")]
    AddedIsInitial(String),

    #[error("Removed label '{0}' is not an initial label")]
    RemovedNotInitial(String),

    #[error("Label '{0}' is both added and removed")]
    AddedAndRemoved(String),

    #[error("Exclusive group '{group}' has conflicting labels: {}", labels.join(", "))]
    ExclusiveConflict { group: String, labels: Vec<String> },

    #[error("Suggestion index {index} is out of range for {len} matched label(s)")]
    SuggestionOutOfRange { index: usize, len: usize },
}
