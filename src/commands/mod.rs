//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the loaded configuration.

pub mod config;
pub mod matches;
pub mod pick;

pub use config::execute as config;
pub use matches::execute as matches;
pub use pick::execute as pick;

use std::path::{Path, PathBuf};

use crate::PickerError;
use crate::config::PickerConfig;
use crate::label::LabelCatalog;

type Result<T> = std::result::Result<T, PickerError>;

/// Catalog named on the command line, falling back to the configured default
///
/// # Errors
/// Returns an error when neither is set or the file cannot be loaded.
pub fn load_catalog(path: Option<&Path>, config: &PickerConfig) -> Result<LabelCatalog> {
    let path: PathBuf = path
        .map(Path::to_path_buf)
        .or_else(|| config.default_catalog.clone())
        .ok_or_else(|| {
            PickerError::InvalidInput(
                "No catalog given. Use --catalog <FILE> or 'labelpick config set default_catalog=<FILE>'."
                    .into(),
            )
        })?;

    Ok(LabelCatalog::load(&path)?)
}
