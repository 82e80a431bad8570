//! Keyword matching against the label catalog
//!
//! A label matches a keyword when its short name contains the keyword's name
//! part and, if the keyword names a group, the label's group contains the
//! keyword's group part. Both comparisons ignore case.
//!
//! ```
//! use labelpick::label::LabelCatalog;
//! use labelpick::matching::matches;
//!
//! let catalog = LabelCatalog::from_names(["priority.high", "priority.low", "highest"])?;
//! assert_eq!(matches(&catalog, "high"), vec!["priority.high", "highest"]);
//! assert_eq!(matches(&catalog, "p.h"), vec!["priority.high"]);
//! # Ok::<(), labelpick::label::CatalogError>(())
//! ```

use crate::label::{Label, LabelCatalog};
use crate::query::Keyword;

/// Matched labels plus the suggestion derived from them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Full names of matching labels, in catalog order
    pub labels: Vec<String>,
    /// Index of the highlighted suggestion
    pub suggestion: Option<usize>,
}

/// Whether a single label matches a parsed keyword
#[must_use]
pub fn label_matches(label: &Label, keyword: &Keyword) -> bool {
    if !label.short_name().to_lowercase().contains(keyword.name_part()) {
        return false;
    }

    if !keyword.has_group() {
        return true;
    }

    label
        .group()
        .is_some_and(|group| group.to_lowercase().contains(keyword.group_part()))
}

/// Labels matching `keyword`, in catalog order
pub fn matching_labels<'a>(
    catalog: &'a LabelCatalog,
    keyword: &str,
) -> impl Iterator<Item = &'a Label> + 'a {
    let keyword = Keyword::parse(keyword);
    catalog
        .iter()
        .filter(move |label| label_matches(label, &keyword))
}

/// Full names of the labels matching `keyword`, in catalog order
#[must_use]
pub fn matches(catalog: &LabelCatalog, keyword: &str) -> Vec<String> {
    matching_labels(catalog, keyword)
        .map(|label| label.full_name().to_string())
        .collect()
}

/// Matches plus suggestion
///
/// The first match is suggested unless the keyword is empty or nothing matched.
#[must_use]
pub fn match_result(catalog: &LabelCatalog, keyword: &str) -> MatchResult {
    let labels = matches(catalog, keyword);
    let suggestion = (!keyword.is_empty() && !labels.is_empty()).then_some(0);
    MatchResult { labels, suggestion }
}

/// The only label matching `keyword`, or `None` when zero or several match
#[must_use]
pub fn unique_match<'a>(catalog: &'a LabelCatalog, keyword: &str) -> Option<&'a Label> {
    let mut found = matching_labels(catalog, keyword);
    let first = found.next()?;
    found.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::priority_catalog;

    #[test]
    fn test_empty_keyword_matches_everything() {
        let catalog = priority_catalog();
        let result = match_result(&catalog, "");
        assert_eq!(result.labels.len(), catalog.len());
        assert_eq!(result.suggestion, None);
    }

    #[test]
    fn test_no_match() {
        let catalog = priority_catalog();
        let result = match_result(&catalog, "zzz");
        assert!(result.labels.is_empty());
        assert_eq!(result.suggestion, None);
    }

    #[test]
    fn test_suggestion_on_first_match() {
        let catalog = priority_catalog();
        let result = match_result(&catalog, "high");
        assert_eq!(result.labels, vec!["priority.high", "highest"]);
        assert_eq!(result.suggestion, Some(0));
    }

    #[test]
    fn test_case_insensitive_name_and_group() {
        let catalog = priority_catalog();
        assert_eq!(matches(&catalog, "PROBLEM.heavy"), vec!["Problem.Heavy"]);
        assert_eq!(matches(&catalog, "pr.HEA"), vec!["Problem.Heavy"]);
    }

    #[test]
    fn test_group_part_is_substring_match() {
        let catalog = priority_catalog();
        assert_eq!(
            matches(&catalog, "ior.m"),
            vec!["priority.medium"],
        );
    }

    #[test]
    fn test_group_filter_excludes_ungrouped_labels() {
        let catalog = priority_catalog();
        assert!(!matches(&catalog, "p.hig").contains(&"highest".to_string()));
    }

    #[test]
    fn test_name_part_ignores_group_prefix() {
        let catalog = priority_catalog();
        // "priority" is only ever a group, never part of a short name
        assert!(matches(&catalog, "priority").is_empty());
    }

    #[test]
    fn test_group_split_matches_non_exclusive() {
        let catalog = priority_catalog();
        assert_eq!(matches(&catalog, "f-aa"), vec!["f-aaa"]);
    }

    #[test]
    fn test_invalid_group_syntax_is_literal() {
        let catalog = priority_catalog();
        assert!(matches(&catalog, "priority.").is_empty());
    }

    #[test]
    fn test_unique_match() {
        let catalog = priority_catalog();
        assert_eq!(
            unique_match(&catalog, "p.medium").map(Label::full_name),
            Some("priority.medium")
        );
        assert!(unique_match(&catalog, "high").is_none());
        assert!(unique_match(&catalog, "nothing").is_none());
    }
}
