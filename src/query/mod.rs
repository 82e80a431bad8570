//! Interpretation of the picker's text buffer
//!
//! The buffer is a sequence of whitespace-separated keywords. Every keyword
//! followed by whitespace is *confirmed* and gets toggled; the trailing
//! keyword, while still being typed, is *in progress* and only filters.
//!
//! ```text
//! "bu status.op"   → confirmed ["bu"],            in progress "status.op"
//! "bu status.op "  → confirmed ["bu", "status.op"], in progress none
//! ```

pub mod keyword;

pub use keyword::Keyword;

/// Result of splitting a text buffer into keywords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Whitespace-terminated keywords, in typing order
    pub confirmed: Vec<String>,
    /// Trailing keyword that has not been terminated yet
    pub in_progress: Option<String>,
}

impl Query {
    /// Keyword used for live filtering (empty when nothing is in progress)
    #[must_use]
    pub fn filter_keyword(&self) -> &str {
        self.in_progress.as_deref().unwrap_or("")
    }
}

/// Split a text buffer into confirmed keywords and the in-progress keyword
///
/// # Examples
/// ```
/// # use labelpick::query::interpret;
/// let query = interpret("f-aa p.high ");
/// assert_eq!(query.confirmed, vec!["f-aa", "p.high"]);
/// assert_eq!(query.in_progress, None);
///
/// let query = interpret("  bug  stat");
/// assert_eq!(query.confirmed, vec!["bug"]);
/// assert_eq!(query.in_progress.as_deref(), Some("stat"));
/// ```
#[must_use]
pub fn interpret(text: &str) -> Query {
    let mut confirmed: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let terminated = text.ends_with(char::is_whitespace);

    let in_progress = if terminated { None } else { confirmed.pop() };

    Query {
        confirmed,
        in_progress,
    }
}

/// Last keyword of `text`, confirmed or not
///
/// Used when a space is typed: the keyword it terminates is the one to toggle.
#[must_use]
pub fn last_keyword(text: &str) -> Option<&str> {
    text.split_whitespace().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let query = interpret("");
        assert!(query.confirmed.is_empty());
        assert_eq!(query.in_progress, None);
        assert_eq!(query.filter_keyword(), "");
    }

    #[test]
    fn test_whitespace_only_buffer() {
        let query = interpret("       ");
        assert!(query.confirmed.is_empty());
        assert_eq!(query.in_progress, None);
    }

    #[test]
    fn test_single_keyword_in_progress() {
        let query = interpret("bu");
        assert!(query.confirmed.is_empty());
        assert_eq!(query.in_progress.as_deref(), Some("bu"));
    }

    #[test]
    fn test_trailing_space_confirms() {
        let query = interpret("bu ");
        assert_eq!(query.confirmed, vec!["bu"]);
        assert_eq!(query.in_progress, None);
    }

    #[test]
    fn test_runs_of_whitespace() {
        let query = interpret("a \t  b\n c");
        assert_eq!(query.confirmed, vec!["a", "b"]);
        assert_eq!(query.in_progress.as_deref(), Some("c"));
    }

    #[test]
    fn test_last_keyword() {
        assert_eq!(last_keyword("bug status "), Some("status"));
        assert_eq!(last_keyword("bug"), Some("bug"));
        assert_eq!(last_keyword("   "), None);
    }
}
