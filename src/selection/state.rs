//! Immutable selection snapshot

use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::label::LabelCatalog;
use crate::matching;
use crate::query;

/// Direction of a suggestion move (UP / DOWN)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionMove {
    Previous,
    Next,
}

/// Labels an issue gains and loses if the session is confirmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl LabelDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// One snapshot of the label picker
///
/// Every transition returns a new value; a snapshot is never changed after it
/// has been handed out. The initial label set is shared between snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub(super) initial: Arc<BTreeSet<String>>,
    pub(super) added: IndexSet<String>,
    pub(super) removed: IndexSet<String>,
    pub(super) matched: Vec<String>,
    pub(super) suggestion: Option<usize>,
    /// What each selection pushed out of its exclusive group, so that
    /// undoing the selection can put it back
    pub(super) displaced: IndexMap<String, Displaced>,
}

/// Labels evicted from an exclusive group by one selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Displaced {
    pub(super) added: Vec<String>,
    pub(super) removed: Vec<String>,
}

impl Displaced {
    pub(super) fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl SelectionState {
    /// Fresh state for a picker session: nothing typed, whole catalog shown
    #[must_use]
    pub fn new<I, S>(initial: I, catalog: &LabelCatalog) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = Self {
            initial: Arc::new(initial.into_iter().map(Into::into).collect()),
            added: IndexSet::new(),
            removed: IndexSet::new(),
            matched: Vec::new(),
            suggestion: None,
            displaced: IndexMap::new(),
        };
        state.with_query(catalog, "")
    }

    /// State reached by typing `text` into a fresh session in one go
    ///
    /// Confirmed keywords are toggled in order, then the in-progress keyword
    /// filters the catalog.
    ///
    /// # Examples
    /// ```
    /// # use labelpick::label::LabelCatalog;
    /// # use labelpick::selection::SelectionState;
    /// let catalog = LabelCatalog::from_names(["bug", "status.open", "status.closed"])?;
    /// let state = SelectionState::from_input(Vec::<String>::new(), &catalog, "bu status.open st.e");
    ///
    /// assert_eq!(state.effective_selection().len(), 2);
    /// assert_eq!(state.matched_labels(), ["status.open", "status.closed"]);
    /// # Ok::<(), labelpick::label::CatalogError>(())
    /// ```
    #[must_use]
    pub fn from_input<I, S>(initial: I, catalog: &LabelCatalog, text: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parsed = query::interpret(text);
        let state = parsed
            .confirmed
            .iter()
            .fold(Self::new(initial, catalog), |state, keyword| {
                state.toggle_keyword(catalog, keyword)
            });
        state.with_query(catalog, parsed.filter_keyword())
    }

    /// Recompute matches and suggestion for a new in-progress keyword
    #[must_use]
    pub fn with_query(&self, catalog: &LabelCatalog, keyword: &str) -> Self {
        let result = matching::match_result(catalog, keyword);
        Self {
            matched: result.labels,
            suggestion: result.suggestion,
            ..self.clone()
        }
        .checked()
    }

    /// Move the highlighted suggestion up or down
    ///
    /// Clamps at both ends unless `wrap` is set. Without a suggestion nothing
    /// moves.
    #[must_use]
    pub fn move_suggestion(&self, direction: SuggestionMove, wrap: bool) -> Self {
        let Some(current) = self.suggestion else {
            return self.clone();
        };
        let last = self.matched.len().saturating_sub(1);

        let next = match direction {
            SuggestionMove::Next if current < last => current + 1,
            SuggestionMove::Next if wrap => 0,
            SuggestionMove::Previous if current > 0 => current - 1,
            SuggestionMove::Previous if wrap => last,
            _ => current,
        };

        Self {
            suggestion: Some(next),
            ..self.clone()
        }
        .checked()
    }

    /// Labels the issue had when the picker opened
    #[must_use]
    pub fn initial_labels(&self) -> &BTreeSet<String> {
        &self.initial
    }

    /// Newly selected labels, in selection order
    #[must_use]
    pub const fn added_labels(&self) -> &IndexSet<String> {
        &self.added
    }

    /// Initial labels marked for removal, in removal order
    #[must_use]
    pub const fn removed_labels(&self) -> &IndexSet<String> {
        &self.removed
    }

    /// Catalog labels matching the in-progress keyword, in catalog order
    #[must_use]
    pub fn matched_labels(&self) -> &[String] {
        &self.matched
    }

    #[must_use]
    pub const fn suggestion_index(&self) -> Option<usize> {
        self.suggestion
    }

    /// Full name of the highlighted suggestion
    #[must_use]
    pub fn current_suggestion(&self) -> Option<&str> {
        self.suggestion
            .and_then(|index| self.matched.get(index))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_initial(&self, name: &str) -> bool {
        self.initial.contains(name)
    }

    #[must_use]
    pub fn is_added(&self, name: &str) -> bool {
        self.added.contains(name)
    }

    #[must_use]
    pub fn is_removed(&self, name: &str) -> bool {
        self.removed.contains(name)
    }

    /// Whether `name` would be applied if the session were confirmed now
    #[must_use]
    pub fn is_effective(&self, name: &str) -> bool {
        self.added.contains(name) || (self.initial.contains(name) && !self.removed.contains(name))
    }

    /// `(initial ∪ added) \ removed`: kept initial labels first, then added ones
    #[must_use]
    pub fn effective_selection(&self) -> IndexSet<String> {
        self.initial
            .iter()
            .filter(|name| !self.removed.contains(*name))
            .chain(self.added.iter())
            .cloned()
            .collect()
    }

    /// Changes relative to the initial labels
    #[must_use]
    pub fn diff(&self) -> LabelDiff {
        LabelDiff {
            added: self.added.iter().cloned().collect(),
            removed: self.removed.iter().cloned().collect(),
        }
    }

    /// Assert the invariants in debug builds
    pub(super) fn checked(self) -> Self {
        debug_assert!(
            self.check_invariants().is_ok(),
            "selection invariant violated: {:?}",
            self.check_invariants()
        );
        self
    }
}
