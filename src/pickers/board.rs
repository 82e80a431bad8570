use indexmap::IndexSet;
use regex::{Regex, RegexBuilder};

/// Board picker snapshot for one query
///
/// Each whitespace-separated word of the query must start a word of the
/// board name, ignoring case. The suggestion is the alphabetically first
/// match, withheld when nothing matches or when the query does not narrow
/// down a choice of several boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPickerState {
    boards: IndexSet<String>,
    keyword: String,
    matched: Vec<String>,
    suggestion: Option<String>,
}

impl BoardPickerState {
    #[must_use]
    pub fn new<I, S>(boards: I, input: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let boards: IndexSet<String> = boards.into_iter().map(Into::into).collect();
        let keyword = input.trim().to_string();

        let prefixes: Vec<&str> = keyword.split_whitespace().collect();
        let matched: Vec<String> = match prefix_patterns(&prefixes) {
            Ok(patterns) => boards
                .iter()
                .filter(|board| board_matches(board, &prefixes, &patterns))
                .cloned()
                .collect(),
            Err(err) => {
                tracing::debug!(%err, keyword = %keyword, "board query does not compile");
                Vec::new()
            }
        };

        let suggestion = if matched.is_empty() || (matched.len() == boards.len() && boards.len() != 1) {
            None
        } else {
            matched
                .iter()
                .min_by_key(|board| board.to_lowercase())
                .cloned()
        };

        Self {
            boards,
            keyword,
            matched,
            suggestion,
        }
    }

    #[must_use]
    pub fn matched_boards(&self) -> &[String] {
        &self.matched
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub const fn boards(&self) -> &IndexSet<String> {
        &self.boards
    }
}

/// One case-insensitive pattern per query word, each anchored at a word boundary
fn prefix_patterns(prefixes: &[&str]) -> Result<Vec<Regex>, regex::Error> {
    prefixes
        .iter()
        .map(|prefix| {
            RegexBuilder::new(&format!(r"\b{}", regex::escape(prefix)))
                .case_insensitive(true)
                .build()
        })
        .collect()
}

fn board_matches(board: &str, prefixes: &[&str], patterns: &[Regex]) -> bool {
    if prefixes.len() > board.split_whitespace().count() {
        return false;
    }
    patterns.iter().all(|pattern| pattern.is_match(board))
}
