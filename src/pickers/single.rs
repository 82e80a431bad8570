use std::fmt;

use crate::present::Presentable;
use crate::query;

use super::contains_ignore_case;

/// An item a single-choice picker can select
pub trait Choice: Clone {
    /// Text typed keywords are matched against
    fn key(&self) -> &str;
}

impl Choice for String {
    fn key(&self) -> &str {
        self
    }
}

/// Repository collaborator that an issue can be assigned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub login: String,
    pub name: Option<String>,
}

impl Assignee {
    #[must_use]
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
        }
    }
}

impl Choice for Assignee {
    fn key(&self) -> &str {
        &self.login
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({name})", self.login),
            None => write!(f, "{}", self.login),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub title: String,
    pub open: bool,
}

impl Milestone {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            open: true,
        }
    }
}

impl Choice for Milestone {
    fn key(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Picker that keeps at most one item selected
///
/// A confirmed keyword matching exactly one item (case-insensitive
/// substring) toggles it, deselecting everything else. The in-progress
/// keyword fades items that do not match and highlights the first match.
///
/// ```
/// # use labelpick::pickers::{Milestone, SingleChoiceState};
/// let milestones = vec![Milestone::new("v0.1"), Milestone::new("v0.2"), Milestone::new("v1.0")];
/// let state = SingleChoiceState::from_input(milestones, None, "0.2 v");
///
/// assert_eq!(state.selected().map(|m| m.title.as_str()), Some("v0.2"));
/// assert_eq!(state.highlighted().map(|m| m.title.as_str()), Some("v0.1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleChoiceState<T: Choice> {
    items: Vec<Presentable<T>>,
}

impl<T: Choice> SingleChoiceState<T> {
    /// Picker over `items` with `current` (matched by key) preselected
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = T>, current: Option<&str>) -> Self {
        let items = items
            .into_iter()
            .map(|item| {
                let selected = current.is_some_and(|key| item.key() == key);
                let mut item = Presentable::new(item);
                item.selected = selected;
                item
            })
            .collect();
        Self { items }
    }

    /// Picker state after typing `text`
    #[must_use]
    pub fn from_input(items: impl IntoIterator<Item = T>, current: Option<&str>, text: &str) -> Self {
        let parsed = query::interpret(text);
        let state = parsed
            .confirmed
            .iter()
            .fold(Self::new(items, current), |state, keyword| state.toggle(keyword));
        match parsed.in_progress {
            Some(keyword) => state.filter(&keyword),
            None => state,
        }
    }

    /// Toggle the only item matching `keyword`
    #[must_use]
    pub fn toggle(&self, keyword: &str) -> Self {
        let mut matching = self
            .items
            .iter()
            .filter(|item| contains_ignore_case(item.value.key(), keyword));
        let target = match (matching.next(), matching.next()) {
            (Some(item), None) => item.value.key().to_string(),
            _ => return self.clone(),
        };

        let mut next = self.clone();
        for item in &mut next.items {
            item.selected = item.value.key() == target && !item.selected;
        }
        next
    }

    /// Fade items not matching `keyword` and highlight the first match
    #[must_use]
    pub fn filter(&self, keyword: &str) -> Self {
        let mut next = self.clone();
        let mut first = true;
        for item in &mut next.items {
            item.faded = !contains_ignore_case(item.value.key(), keyword);
            item.highlighted = !item.faded && first;
            if item.highlighted {
                first = false;
            }
        }
        next
    }

    /// Move the highlight to the next matching item, stopping at the last
    #[must_use]
    pub fn select_next(&self) -> Self {
        let visible = self.visible_positions();
        let target = match self.highlighted_position() {
            Some(current) => visible.iter().copied().find(|&i| i > current).unwrap_or(current),
            None => match visible.first() {
                Some(&first) => first,
                None => return self.clone(),
            },
        };
        self.highlight(target)
    }

    /// Move the highlight to the previous matching item, stopping at the first
    #[must_use]
    pub fn select_previous(&self) -> Self {
        let visible = self.visible_positions();
        let target = match self.highlighted_position() {
            Some(current) => visible.iter().rev().copied().find(|&i| i < current).unwrap_or(current),
            None => match visible.last() {
                Some(&last) => last,
                None => return self.clone(),
            },
        };
        self.highlight(target)
    }

    #[must_use]
    pub fn items(&self) -> &[Presentable<T>] {
        &self.items
    }

    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        self.items.iter().find(|item| item.selected).map(|item| &item.value)
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&T> {
        self.items.iter().find(|item| item.highlighted).map(|item| &item.value)
    }

    fn visible_positions(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.faded)
            .map(|(i, _)| i)
            .collect()
    }

    fn highlighted_position(&self) -> Option<usize> {
        self.items.iter().position(|item| item.highlighted)
    }

    fn highlight(&self, position: usize) -> Self {
        let mut next = self.clone();
        for (i, item) in next.items.iter_mut().enumerate() {
            item.highlighted = i == position;
        }
        next
    }
}
