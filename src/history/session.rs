//! One run of the label picker, from opening to confirm or cancel
//!
//! ```text
//! Session opened (seed snapshot: empty buffer, initial labels)
//!     ↓
//! ┌─→ Event?
//! │   ├─ Char      → filter catalog by in-progress keyword → push
//! │   ├─ Space     → toggle finished keyword, clear query  → push
//! │   ├─ Up/Down   → move highlighted suggestion           → push
//! │   ├─ Toggle*   → toggle label, clear query             → push
//! │   ├─ Backspace → pop (never the seed)
//! │   ├─ Enter     → Confirmed(effective selection) ──┐
//! │   └─ Escape    → Cancelled ───────────────────────┤
//! └──────────────────────────────────────────────     ↓
//!                                           closed, later events ignored
//! ```

use indexmap::IndexSet;

use crate::label::LabelCatalog;
use crate::query;
use crate::selection::{SelectionState, SuggestionMove};

use super::error::{Result, SessionError};
use super::stack::InteractionHistory;
use super::types::{Dispatch, PickerEvent, SessionOptions, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Open,
    Confirmed(IndexSet<String>),
    Cancelled,
}

/// Result of applying one event, before borrowing the new state
enum Step {
    Updated,
    Confirmed(IndexSet<String>),
    Cancelled,
}

/// Event-driven label picker over a catalog snapshot
///
/// # Examples
/// ```
/// # use labelpick::label::LabelCatalog;
/// # use labelpick::history::{Dispatch, PickerEvent, PickerSession};
/// let catalog = LabelCatalog::from_names(["bug", "status.open", "status.closed"])?;
/// let mut session = PickerSession::new(&catalog, ["status.open"]);
///
/// session.type_str("bu status.closed ");
/// match session.dispatch(PickerEvent::Enter) {
///     Dispatch::Confirmed(labels) => {
///         assert_eq!(labels.into_iter().collect::<Vec<_>>(), ["bug", "status.closed"]);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// # Ok::<(), labelpick::label::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PickerSession<'a> {
    catalog: &'a LabelCatalog,
    options: SessionOptions,
    history: InteractionHistory,
    phase: Phase,
}

impl<'a> PickerSession<'a> {
    /// Open a session for an issue currently carrying `initial`
    #[must_use]
    pub fn new<I, S>(catalog: &'a LabelCatalog, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(catalog, initial, SessionOptions::default())
    }

    #[must_use]
    pub fn with_options<I, S>(catalog: &'a LabelCatalog, initial: I, options: SessionOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = SelectionState::new(initial, catalog);
        tracing::debug!(
            initial = state.initial_labels().len(),
            catalog = catalog.len(),
            "picker session opened"
        );

        Self {
            catalog,
            options,
            history: InteractionHistory::new(Snapshot {
                text: String::new(),
                state,
            }),
            phase: Phase::Open,
        }
    }

    /// Apply one event
    ///
    /// Events arriving after confirm or cancel yield [`Dispatch::Ignored`].
    pub fn dispatch(&mut self, event: PickerEvent) -> Dispatch<'_> {
        match self.try_dispatch(event) {
            Ok(dispatch) => dispatch,
            Err(err) => {
                tracing::debug!(%err, "event dropped");
                Dispatch::Ignored
            }
        }
    }

    /// Apply one event, failing once the session has ended
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] after the session was confirmed or
    /// cancelled.
    pub fn try_dispatch(&mut self, event: PickerEvent) -> Result<Dispatch<'_>> {
        let step = self.step(event)?;
        Ok(match step {
            Step::Updated => Dispatch::Updated(self.state()),
            Step::Confirmed(labels) => Dispatch::Confirmed(labels),
            Step::Cancelled => Dispatch::Cancelled,
        })
    }

    /// Feed every character of `text` as an event
    ///
    /// Whitespace characters become [`PickerEvent::Space`].
    pub fn type_str(&mut self, text: &str) -> Dispatch<'_> {
        for c in text.chars() {
            if self.step(PickerEvent::Char(c)).is_err() {
                return Dispatch::Ignored;
            }
        }
        match &self.phase {
            Phase::Open => Dispatch::Updated(self.state()),
            _ => Dispatch::Ignored,
        }
    }

    /// State to render
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.history.current().state
    }

    /// Current text buffer
    #[must_use]
    pub fn text(&self) -> &str {
        &self.history.current().text
    }

    #[must_use]
    pub const fn history(&self) -> &InteractionHistory {
        &self.history
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a LabelCatalog {
        self.catalog
    }

    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase != Phase::Open
    }

    /// Labels returned on confirm, `None` while open or after cancel
    #[must_use]
    pub fn confirmed_labels(&self) -> Option<&IndexSet<String>> {
        match &self.phase {
            Phase::Confirmed(labels) => Some(labels),
            _ => None,
        }
    }

    fn step(&mut self, event: PickerEvent) -> Result<Step> {
        match self.phase {
            Phase::Open => {}
            Phase::Confirmed(_) => return Err(SessionError::Closed("confirmed")),
            Phase::Cancelled => return Err(SessionError::Closed("cancelled")),
        }

        tracing::trace!(%event, buffer = self.text(), "dispatching");

        let step = match event {
            PickerEvent::Char(c) if c.is_whitespace() => self.space(c),
            PickerEvent::Char(c) => self.type_char(c),
            PickerEvent::Space => self.space(' '),
            PickerEvent::Up => self.move_suggestion(SuggestionMove::Previous),
            PickerEvent::Down => self.move_suggestion(SuggestionMove::Next),
            PickerEvent::ToggleSuggestion => {
                let suggestion = self.state().current_suggestion().map(str::to_string);
                self.toggle(suggestion.as_deref())
            }
            PickerEvent::Toggle(name) => self.toggle(Some(&name)),
            PickerEvent::Backspace => {
                if !self.history.undo() {
                    tracing::trace!("nothing to undo");
                }
                Step::Updated
            }
            PickerEvent::Enter => {
                let labels = self.state().effective_selection();
                tracing::debug!(labels = labels.len(), "picker confirmed");
                self.phase = Phase::Confirmed(labels.clone());
                return Ok(Step::Confirmed(labels));
            }
            PickerEvent::Escape => {
                tracing::debug!("picker cancelled");
                self.phase = Phase::Cancelled;
                return Ok(Step::Cancelled);
            }
        };

        tracing::debug!(
            buffer = self.text(),
            selected = self.state().effective_selection().len(),
            matched = self.state().matched_labels().len(),
            depth = self.history.depth(),
            "picker state"
        );
        Ok(step)
    }

    fn type_char(&mut self, c: char) -> Step {
        let mut text = self.text().to_string();
        text.push(c);

        let parsed = query::interpret(&text);
        let state = self.state().with_query(self.catalog, parsed.filter_keyword());
        self.push(text, state)
    }

    fn space(&mut self, c: char) -> Step {
        let current = self.text();
        let finished = if current.ends_with(char::is_whitespace) {
            None
        } else {
            query::last_keyword(current)
        };

        let state = match finished {
            Some(keyword) => self.state().toggle_keyword(self.catalog, keyword),
            None => self.state().clone(),
        }
        .with_query(self.catalog, "");

        let mut text = current.to_string();
        text.push(c);
        self.push(text, state)
    }

    fn move_suggestion(&mut self, direction: SuggestionMove) -> Step {
        let state = self
            .state()
            .move_suggestion(direction, self.options.wrap_suggestions);
        let text = self.text().to_string();
        self.push(text, state)
    }

    /// Toggle a label directly and drop the keyword being typed
    fn toggle(&mut self, name: Option<&str>) -> Step {
        let state = match name {
            Some(name) => self.state().toggle_label(self.catalog, name),
            None => self.state().clone(),
        }
        .with_query(self.catalog, "");

        let text = self
            .text()
            .trim_end_matches(|c: char| !c.is_whitespace())
            .to_string();
        self.push(text, state)
    }

    fn push(&mut self, text: String, state: SelectionState) -> Step {
        self.history.push(Snapshot { text, state });
        Step::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{no_labels, priority_catalog, scenario_catalog};

    fn effective(session: &PickerSession<'_>) -> Vec<String> {
        session.state().effective_selection().into_iter().collect()
    }

    #[test]
    fn test_scenario_a_exclusive_eviction() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, no_labels());

        session.type_str("bu ");
        assert_eq!(effective(&session), vec!["bug"]);
        session.type_str("status.open ");
        assert_eq!(effective(&session), vec!["bug", "status.open"]);
        session.type_str("status.closed ");
        assert_eq!(effective(&session), vec!["bug", "status.closed"]);
    }

    #[test]
    fn test_scenario_b_and_c_deselect_then_undo() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, ["status.open"]);

        session.type_str("open ");
        assert!(effective(&session).is_empty());
        assert!(session.state().is_removed("status.open"));

        session.dispatch(PickerEvent::Backspace);
        assert_eq!(effective(&session), vec!["status.open"]);
        assert_eq!(session.text(), "open");
    }

    #[test]
    fn test_typing_filters_without_toggling() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, no_labels());

        let Dispatch::Updated(state) = session.type_str("st.e") else {
            panic!("session should still be open");
        };
        assert_eq!(state.matched_labels(), ["status.open", "status.closed"]);
        assert_eq!(state.current_suggestion(), Some("status.open"));
        assert!(state.effective_selection().is_empty());
    }

    #[test]
    fn test_space_after_space_toggles_nothing() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, no_labels());
        session.type_str("bug  ");
        assert_eq!(effective(&session), vec!["bug"]);
        assert_eq!(session.history().depth(), 5);
    }

    #[test]
    fn test_undo_every_event_returns_to_seed() {
        let catalog = priority_catalog();
        let mut session = PickerSession::new(&catalog, ["priority.low", "f-aaa"]);
        let seed = session.history().seed().clone();

        let events = [
            PickerEvent::Char('h'),
            PickerEvent::Down,
            PickerEvent::Down,
            PickerEvent::ToggleSuggestion,
            PickerEvent::Char('p'),
            PickerEvent::Char('.'),
            PickerEvent::Char('m'),
            PickerEvent::Space,
            PickerEvent::Up,
            PickerEvent::Toggle("f-aaa".to_string()),
            PickerEvent::Space,
        ];
        for event in events.iter().cloned() {
            session.dispatch(event);
        }
        assert_eq!(session.history().depth(), events.len());

        for _ in 0..events.len() + 2 {
            session.dispatch(PickerEvent::Backspace);
        }
        assert_eq!(session.history().current(), &seed);
    }

    #[test]
    fn test_toggle_suggestion_clears_keyword() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, no_labels());

        session.type_str("bug st.e");
        session.dispatch(PickerEvent::Down);
        session.dispatch(PickerEvent::ToggleSuggestion);

        assert_eq!(effective(&session), vec!["bug", "status.closed"]);
        assert_eq!(session.text(), "bug ");
        assert_eq!(session.state().suggestion_index(), None);
    }

    #[test]
    fn test_toggle_suggestion_without_suggestion_keeps_selection() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, ["bug"]);
        session.dispatch(PickerEvent::ToggleSuggestion);
        assert_eq!(effective(&session), vec!["bug"]);
    }

    #[test]
    fn test_wrapping_suggestions() {
        let catalog = scenario_catalog();
        let options = SessionOptions {
            wrap_suggestions: true,
        };
        let mut session = PickerSession::with_options(&catalog, no_labels(), options);
        session.type_str("st.e");
        session.dispatch(PickerEvent::Up);
        assert_eq!(session.state().current_suggestion(), Some("status.closed"));
    }

    #[test]
    fn test_confirm_returns_effective_selection() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, ["status.open"]);
        session.type_str("bug ");

        let Dispatch::Confirmed(labels) = session.dispatch(PickerEvent::Enter) else {
            panic!("expected confirmation");
        };
        assert_eq!(labels.into_iter().collect::<Vec<_>>(), vec!["status.open", "bug"]);
        assert!(session.is_closed());
        assert!(session.confirmed_labels().is_some());
    }

    #[test]
    fn test_events_after_cancel_are_ignored() {
        let catalog = scenario_catalog();
        let mut session = PickerSession::new(&catalog, no_labels());

        assert_eq!(session.dispatch(PickerEvent::Escape), Dispatch::Cancelled);
        assert_eq!(session.dispatch(PickerEvent::Char('b')), Dispatch::Ignored);
        assert_eq!(
            session.try_dispatch(PickerEvent::Enter),
            Err(SessionError::Closed("cancelled"))
        );
        assert!(session.confirmed_labels().is_none());
    }

    #[test]
    fn test_ambiguous_keyword_keeps_state() {
        let catalog = priority_catalog();
        let mut session = PickerSession::new(&catalog, no_labels());
        session.type_str("high ");
        assert!(effective(&session).is_empty());
        assert_eq!(session.text(), "high ");
    }
}
