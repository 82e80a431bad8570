use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindError {
    #[error("Unknown action '{0}' in keybind config")]
    UnknownAction(String),

    #[error("Invalid key '{key}' bound to '{action}'")]
    InvalidKey { action: String, key: String },

    #[error("Key '{key}' is bound to both '{first}' and '{second}'")]
    Conflict {
        key: String,
        first: String,
        second: String,
    },

    #[error("Unknown key name '<{0}>' in key script")]
    UnknownKeyName(String),

    #[error("Unterminated '<' at position {0} in key script")]
    Unterminated(usize),
}

pub type Result<T> = std::result::Result<T, KeybindError>;
