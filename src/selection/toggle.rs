//! Toggling labels in and out of the selection
//!
//! Selecting a label from an exclusive group evicts the other members of
//! that group: added ones are dropped, initial ones are marked removed.

use crate::label::{Label, LabelCatalog};
use crate::matching;

use super::state::{Displaced, SelectionState};

impl SelectionState {
    /// Toggle the single catalog label matching `keyword`
    ///
    /// A keyword matching no label or several labels leaves the state as is.
    #[must_use]
    pub fn toggle_keyword(&self, catalog: &LabelCatalog, keyword: &str) -> Self {
        match matching::unique_match(catalog, keyword) {
            Some(label) => {
                tracing::trace!(keyword, label = label.full_name(), "keyword toggles label");
                self.toggled(label)
            }
            None => {
                tracing::trace!(keyword, "keyword is ambiguous or matches nothing");
                self.clone()
            }
        }
    }

    /// Toggle a label by its exact full name
    ///
    /// Names outside the catalog can still be toggled when they are initial
    /// labels (issues may carry labels the repository no longer defines).
    ///
    /// Toggling the same label twice restores the effective selection only
    /// when the initial labels hold at most one member per exclusive group.
    #[must_use]
    pub fn toggle_label(&self, catalog: &LabelCatalog, full_name: &str) -> Self {
        match catalog.get(full_name) {
            Some(label) => self.toggled(label),
            None if self.is_initial(full_name) => self.toggled(&Label::new(full_name)),
            None => self.clone(),
        }
    }

    fn toggled(&self, label: &Label) -> Self {
        let mut next = self.clone();
        let name = label.full_name();

        if next.initial.contains(name) {
            if next.removed.contains(name) {
                let displaced = next.evict_conflicts(label);
                next.removed.shift_remove(name);
                next.record_displaced(name, displaced);
            } else {
                next.removed.insert(name.to_string());
                next.restore_displaced(name);
            }
        } else if next.added.contains(name) {
            next.added.shift_remove(name);
            next.restore_displaced(name);
        } else {
            let displaced = next.evict_conflicts(label);
            next.added.insert(name.to_string());
            next.record_displaced(name, displaced);
        }

        next.checked()
    }

    /// Remove every other member of `label`'s exclusive group from the
    /// effective selection, returning what was pushed out
    fn evict_conflicts(&mut self, label: &Label) -> Displaced {
        let mut displaced = Displaced::default();
        if !label.is_exclusive() {
            return displaced;
        }

        self.added.retain(|name| {
            let conflicts = Label::new(name.as_str()).conflicts_with(label);
            if conflicts {
                displaced.added.push(name.clone());
            }
            !conflicts
        });

        for name in self.initial.iter() {
            if Label::new(name.as_str()).conflicts_with(label) && self.removed.insert(name.clone()) {
                displaced.removed.push(name.clone());
            }
        }

        displaced
    }

    fn record_displaced(&mut self, name: &str, displaced: Displaced) {
        if displaced.is_empty() {
            self.displaced.shift_remove(name);
        } else {
            self.displaced.insert(name.to_string(), displaced);
        }
    }

    /// Put back what the selection of `name` evicted
    fn restore_displaced(&mut self, name: &str) {
        let Some(displaced) = self.displaced.shift_remove(name) else {
            return;
        };

        for label in displaced.added {
            if !self.initial.contains(&label) {
                self.added.insert(label);
            }
        }
        for label in &displaced.removed {
            self.removed.shift_remove(label);
        }
    }
}
