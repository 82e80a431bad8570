use thiserror::Error;

/// Picker session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Picker session is closed ({0})")]
    Closed(&'static str),
}

pub type Result<T> = std::result::Result<T, SessionError>;
