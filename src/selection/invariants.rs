//! Consistency checks over a selection snapshot

use indexmap::IndexMap;

use crate::label::Label;

use super::error::InvariantViolation;
use super::state::SelectionState;

/// Effective and initial membership of one exclusive group
#[derive(Default)]
struct GroupTally {
    effective: Vec<String>,
    initial: usize,
    has_added: bool,
}

impl SelectionState {
    /// Verify the snapshot is internally consistent
    ///
    /// Exclusive groups are judged against the initial labels: an issue may
    /// arrive with two labels of one exclusive group, and the picker does not
    /// force the user to fix that. Once a label of the group is added though,
    /// it must be the group's only effective member.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for name in &self.added {
            if self.initial.contains(name) {
                return Err(InvariantViolation::AddedIsInitial(name.clone()));
            }
            if self.removed.contains(name) {
                return Err(InvariantViolation::AddedAndRemoved(name.clone()));
            }
        }

        if let Some(name) = self.removed.iter().find(|name| !self.initial.contains(*name)) {
            return Err(InvariantViolation::RemovedNotInitial(name.clone()));
        }

        self.check_exclusive_groups()?;

        if let Some(index) = self.suggestion {
            if index >= self.matched.len() {
                return Err(InvariantViolation::SuggestionOutOfRange {
                    index,
                    len: self.matched.len(),
                });
            }
        }

        Ok(())
    }

    fn check_exclusive_groups(&self) -> Result<(), InvariantViolation> {
        let mut groups: IndexMap<String, GroupTally> = IndexMap::new();

        for name in self.initial.iter() {
            if let Some(group) = exclusive_group(name) {
                groups.entry(group).or_default().initial += 1;
            }
        }

        for name in self.effective_selection() {
            if let Some(group) = exclusive_group(&name) {
                let tally = groups.entry(group).or_default();
                tally.has_added |= self.added.contains(&name);
                tally.effective.push(name);
            }
        }

        for (group, tally) in groups {
            let limit = if tally.has_added { 1 } else { tally.initial.max(1) };
            if tally.effective.len() > limit {
                return Err(InvariantViolation::ExclusiveConflict {
                    group,
                    labels: tally.effective,
                });
            }
        }

        Ok(())
    }
}

fn exclusive_group(name: &str) -> Option<String> {
    let label = Label::new(name);
    if label.is_exclusive() {
        label.group().map(str::to_string)
    } else {
        None
    }
}
