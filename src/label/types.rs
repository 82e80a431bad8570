use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter that places a label into an exclusive group (`status.open`)
pub const EXCLUSIVE_DELIMITER: char = '.';

/// Delimiter that places a label into a non-exclusive group (`type-bug`)
pub const NON_EXCLUSIVE_DELIMITER: char = '-';

/// Colour used when the tracker did not report one
pub const DEFAULT_COLOUR: &str = "ffffff";

/// How a label relates to the other members of its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// At most one label of the group may be applied to an issue
    Exclusive,
    /// Any number of labels of the group may be applied
    NonExclusive,
    /// The label has no group prefix
    None,
}

impl Grouping {
    /// Grouping implied by a delimiter character
    #[must_use]
    pub const fn from_delimiter(delimiter: char) -> Self {
        match delimiter {
            EXCLUSIVE_DELIMITER => Self::Exclusive,
            NON_EXCLUSIVE_DELIMITER => Self::NonExclusive,
            _ => Self::None,
        }
    }
}

/// Group prefix found by [`split_group`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSplit<'a> {
    pub group: &'a str,
    pub delimiter: char,
    pub name: &'a str,
}

/// Split `text` on its first group delimiter
///
/// The split only happens when both sides of the delimiter are non-empty.
/// `".open"` and `"status."` are therefore plain names without a group.
///
/// # Examples
/// ```
/// # use labelpick::label::split_group;
/// let split = split_group("priority.high-low").unwrap();
/// assert_eq!(split.group, "priority");
/// assert_eq!(split.delimiter, '.');
/// assert_eq!(split.name, "high-low");
///
/// assert!(split_group("bug").is_none());
/// assert!(split_group("status.").is_none());
/// ```
#[must_use]
pub fn split_group(text: &str) -> Option<GroupSplit<'_>> {
    let (index, delimiter) = text
        .char_indices()
        .find(|&(_, c)| c == EXCLUSIVE_DELIMITER || c == NON_EXCLUSIVE_DELIMITER)?;

    let group = &text[..index];
    let name = &text[index + delimiter.len_utf8()..];
    if group.is_empty() || name.is_empty() {
        return None;
    }

    Some(GroupSplit {
        group,
        delimiter,
        name,
    })
}

/// A label as defined in a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    full_name: String,
    group: Option<String>,
    short_name: String,
    grouping: Grouping,
    colour: String,
}

impl Label {
    /// Create a label with the default colour
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self::with_colour(full_name, DEFAULT_COLOUR)
    }

    /// Create a label with an explicit hex colour (without `#`)
    #[must_use]
    pub fn with_colour(full_name: impl Into<String>, colour: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let (group, short_name, grouping) = match split_group(&full_name) {
            Some(split) => (
                Some(split.group.to_string()),
                split.name.to_string(),
                Grouping::from_delimiter(split.delimiter),
            ),
            None => (None, full_name.clone(), Grouping::None),
        };

        Self {
            full_name,
            group,
            short_name,
            grouping,
            colour: colour.into(),
        }
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Group prefix, if the label has one
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Name without its group prefix (`open` for `status.open`)
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    #[must_use]
    pub const fn grouping(&self) -> Grouping {
        self.grouping
    }

    #[must_use]
    pub fn colour(&self) -> &str {
        &self.colour
    }

    #[must_use]
    pub const fn is_exclusive(&self) -> bool {
        matches!(self.grouping, Grouping::Exclusive)
    }

    #[must_use]
    pub const fn is_in_group(&self) -> bool {
        !matches!(self.grouping, Grouping::None)
    }

    /// Whether `other` belongs to the same exclusive group as this label
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.is_exclusive()
            && other.is_exclusive()
            && self.full_name != other.full_name
            && self.group == other.group
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
