//! Label model and repository label catalog
//!
//! A label's full name may carry a group prefix:
//! - **Exclusive groups** use `.` (e.g., `status.open`): at most one label of
//!   the group can be applied to an issue
//! - **Non-exclusive groups** use `-` (e.g., `type-bug`): grouping only
//!
//! # Examples
//!
//! ```
//! use labelpick::label::{Label, LabelCatalog};
//!
//! let catalog = LabelCatalog::from_names(["bug", "status.open", "status.closed"])?;
//! let open = catalog.get("status.open").unwrap();
//! assert!(open.is_exclusive());
//! assert_eq!(open.short_name(), "open");
//! # Ok::<(), labelpick::label::CatalogError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::LabelCatalog;
pub use error::{CatalogError, Result};
pub use types::{
    DEFAULT_COLOUR, EXCLUSIVE_DELIMITER, GroupSplit, Grouping, Label, NON_EXCLUSIVE_DELIMITER,
    split_group,
};
