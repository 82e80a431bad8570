//! Group/name split of a single keyword

use crate::label::split_group;

/// A keyword split into the group part and the name part
///
/// `"p.high"` → group `"p"`, name `"high"`; `"high"` → group `""`, name `"high"`.
/// A delimiter with nothing on one side is kept literally in the name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyword {
    group_part: String,
    name_part: String,
}

impl Keyword {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match split_group(text) {
            Some(split) => Self {
                group_part: split.group.to_lowercase(),
                name_part: split.name.to_lowercase(),
            },
            None => Self {
                group_part: String::new(),
                name_part: text.to_lowercase(),
            },
        }
    }

    /// Lower-cased group part, empty when the keyword has no group filter
    #[must_use]
    pub fn group_part(&self) -> &str {
        &self.group_part
    }

    /// Lower-cased name part
    #[must_use]
    pub fn name_part(&self) -> &str {
        &self.name_part
    }

    #[must_use]
    pub fn has_group(&self) -> bool {
        !self.group_part.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group_part.is_empty() && self.name_part.is_empty()
    }
}
