//! Fixture catalogs shared by unit tests
//!
//! Only available when compiled with `cfg(test)`.

use crate::label::LabelCatalog;

/// Catalog mixing an exclusive group, a non-exclusive group and loose labels
///
/// # Panics
/// Panics if the fixture names stop being unique.
#[must_use]
pub fn priority_catalog() -> LabelCatalog {
    LabelCatalog::from_names([
        "priority.high",
        "priority.medium",
        "priority.low",
        "highest",
        "Problem.Heavy",
        "f-aaa",
        "f-bbb",
    ])
    .expect("fixture names are unique")
}

/// Small catalog used by the interaction scenarios
#[must_use]
pub fn scenario_catalog() -> LabelCatalog {
    LabelCatalog::from_names(["bug", "status.open", "status.closed"])
        .expect("fixture names are unique")
}

/// Empty initial label set
#[must_use]
pub fn no_labels() -> Vec<String> {
    Vec::new()
}
