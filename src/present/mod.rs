//! Display flags for picker items
//!
//! Presenters render two panes: the labels the issue will carry (top) and
//! the whole catalog filtered by the current keyword (bottom). Both are
//! derived from a [`SelectionState`] on demand; nothing here is stored.

use crate::label::{Label, LabelCatalog};
use crate::selection::SelectionState;

/// A domain value plus the flags a presenter needs to draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentable<T> {
    pub value: T,
    /// Ticked: the item is part of the selection
    pub selected: bool,
    /// Under the cursor
    pub highlighted: bool,
    /// Struck through: will be taken off the issue
    pub removed: bool,
    /// Dimmed: filtered out, or only a preview
    pub faded: bool,
}

impl<T> Presentable<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            selected: false,
            highlighted: false,
            removed: false,
            faded: false,
        }
    }

    /// Swap the wrapped value, keeping the flags
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Presentable<U> {
        Presentable {
            value: f(self.value),
            selected: self.selected,
            highlighted: self.highlighted,
            removed: self.removed,
            faded: self.faded,
        }
    }
}

fn lookup(catalog: &LabelCatalog, name: &str) -> Label {
    catalog.get(name).cloned().unwrap_or_else(|| Label::new(name))
}

/// Labels shown in the top pane
///
/// Initial labels come first (catalog order, then any the catalog does not
/// know), followed by added labels in selection order. The highlighted
/// suggestion is previewed: an effective label is shown faded and struck
/// through, a label not on the issue is appended faded.
#[must_use]
pub fn assigned_view(state: &SelectionState, catalog: &LabelCatalog) -> Vec<Presentable<Label>> {
    let initial = state.initial_labels();

    let mut names: Vec<&str> = catalog
        .iter()
        .map(Label::full_name)
        .filter(|name| initial.contains(*name))
        .collect();
    names.extend(
        initial
            .iter()
            .map(String::as_str)
            .filter(|name| !catalog.contains(name)),
    );
    names.extend(state.added_labels().iter().map(String::as_str));

    let suggestion = state.current_suggestion();

    let mut view: Vec<Presentable<Label>> = names
        .into_iter()
        .map(|name| {
            let mut item = Presentable::new(lookup(catalog, name));
            item.selected = state.is_effective(name);
            item.removed = state.is_removed(name);

            if suggestion == Some(name) {
                item.highlighted = true;
                if item.selected {
                    item.faded = true;
                    item.removed = true;
                } else {
                    item.removed = false;
                }
            }
            item
        })
        .collect();

    if let Some(name) = suggestion {
        if !view.iter().any(|item| item.value.full_name() == name) {
            let mut item = Presentable::new(lookup(catalog, name));
            item.highlighted = true;
            item.faded = true;
            view.push(item);
        }
    }

    view
}

/// Every catalog label for the bottom pane
#[must_use]
pub fn catalog_view(state: &SelectionState, catalog: &LabelCatalog) -> Vec<Presentable<Label>> {
    let matched = state.matched_labels();
    let suggestion = state.current_suggestion();

    catalog
        .iter()
        .map(|label| {
            let name = label.full_name();
            let mut item = Presentable::new(label.clone());
            item.selected = state.is_effective(name);
            item.faded = !matched.iter().any(|m| m == name);
            item.highlighted = suggestion == Some(name);
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{no_labels, scenario_catalog};

    fn flags(item: &Presentable<Label>) -> (&str, bool, bool, bool, bool) {
        (
            item.value.full_name(),
            item.selected,
            item.highlighted,
            item.removed,
            item.faded,
        )
    }

    #[test]
    fn test_assigned_view_order_and_removal() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_input(["status.open", "wontfix", "bug"], &catalog, "bug status.closed ");
        let view: Vec<_> = assigned_view(&state, &catalog).iter().map(flags).map(|f| f.0.to_string()).collect();
        assert_eq!(view, vec!["bug", "status.open", "wontfix", "status.closed"]);

        let view = assigned_view(&state, &catalog);
        assert_eq!(flags(&view[0]), ("bug", false, false, true, false));
        assert_eq!(flags(&view[1]), ("status.open", false, false, true, false));
        assert_eq!(flags(&view[3]), ("status.closed", true, false, false, false));
    }

    #[test]
    fn test_assigned_view_previews_new_suggestion() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_input(no_labels(), &catalog, "bu");
        let view = assigned_view(&state, &catalog);
        assert_eq!(view.len(), 1);
        assert_eq!(flags(&view[0]), ("bug", false, true, false, true));
    }

    #[test]
    fn test_assigned_view_previews_removal() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_input(["bug"], &catalog, "bu");
        let view = assigned_view(&state, &catalog);
        assert_eq!(flags(&view[0]), ("bug", true, true, true, true));
    }

    #[test]
    fn test_catalog_view_flags() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_input(["bug"], &catalog, "st.e");
        let view = catalog_view(&state, &catalog);

        assert_eq!(flags(&view[0]), ("bug", true, false, false, true));
        assert_eq!(flags(&view[1]), ("status.open", false, true, false, false));
        assert_eq!(flags(&view[2]), ("status.closed", false, false, false, false));
    }

    #[test]
    fn test_map_keeps_flags() {
        let mut item = Presentable::new(Label::new("bug"));
        item.faded = true;
        let mapped = item.map(|label| label.full_name().len());
        assert_eq!(mapped.value, 3);
        assert!(mapped.faded);
    }
}
