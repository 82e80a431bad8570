use super::contains_ignore_case;

/// Repository picker state
///
/// Until the user cycles through the matches, the selected repository is
/// whatever was typed, so ids not stored yet can still be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPickerState {
    repositories: Vec<String>,
    matching: Vec<String>,
    highlighted: Option<usize>,
    query: String,
}

impl RepositoryPickerState {
    #[must_use]
    pub fn new<I, S>(repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repositories: Vec<String> = repositories.into_iter().map(Into::into).collect();
        repositories.sort();
        repositories.dedup();

        Self {
            matching: repositories.clone(),
            repositories,
            highlighted: None,
            query: String::new(),
        }
    }

    /// Refilter for a new query and reset the selection to it
    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        Self {
            repositories: self.repositories.clone(),
            matching: self
                .repositories
                .iter()
                .filter(|repo| contains_ignore_case(repo, query))
                .cloned()
                .collect(),
            highlighted: None,
            query: query.to_string(),
        }
    }

    /// Select the next match, wrapping to the first
    #[must_use]
    pub fn select_next(&self) -> Self {
        let Some(last) = self.matching.len().checked_sub(1) else {
            return self.clone();
        };
        let next = match self.highlighted {
            Some(current) if current < last => current + 1,
            _ => 0,
        };
        Self {
            highlighted: Some(next),
            ..self.clone()
        }
    }

    /// Select the previous match, wrapping to the last
    #[must_use]
    pub fn select_previous(&self) -> Self {
        let Some(last) = self.matching.len().checked_sub(1) else {
            return self.clone();
        };
        let previous = match self.highlighted {
            Some(current) if current > 0 => current - 1,
            _ => last,
        };
        Self {
            highlighted: Some(previous),
            ..self.clone()
        }
    }

    /// Repository to open: the highlighted match, otherwise the query text
    #[must_use]
    pub fn selected_repository(&self) -> &str {
        self.highlighted
            .and_then(|index| self.matching.get(index))
            .map_or(self.query.as_str(), String::as_str)
    }

    /// Matches in sorted order
    #[must_use]
    pub fn matching_repositories(&self) -> &[String] {
        &self.matching
    }

    #[must_use]
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }
}
