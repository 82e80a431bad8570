use super::types::Snapshot;

/// Append-only log of snapshots, seeded with the state the picker opened with
///
/// The seed is never popped, so there is always a current snapshot.
#[derive(Debug, Clone)]
pub struct InteractionHistory {
    snapshots: Vec<Snapshot>,
}

impl InteractionHistory {
    #[must_use]
    pub fn new(seed: Snapshot) -> Self {
        Self {
            snapshots: vec![seed],
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Drop the newest snapshot
    ///
    /// Returns `false` when only the seed is left.
    pub fn undo(&mut self) -> bool {
        if self.snapshots.len() > 1 {
            self.snapshots.pop();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current(&self) -> &Snapshot {
        // The seed is never removed
        &self.snapshots[self.snapshots.len() - 1]
    }

    #[must_use]
    pub fn seed(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the seed is kept
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Number of snapshots that can still be undone
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionState;
    use crate::testing::{no_labels, scenario_catalog};

    fn snapshot(text: &str) -> Snapshot {
        let catalog = scenario_catalog();
        Snapshot {
            text: text.to_string(),
            state: SelectionState::from_input(no_labels(), &catalog, text),
        }
    }

    #[test]
    fn test_undo_never_pops_seed() {
        let mut history = InteractionHistory::new(snapshot(""));
        assert!(!history.undo());
        assert_eq!(history.len(), 1);
        assert_eq!(history.depth(), 0);
    }

    #[test]
    fn test_push_and_undo() {
        let mut history = InteractionHistory::new(snapshot(""));
        history.push(snapshot("b"));
        history.push(snapshot("bu"));
        assert_eq!(history.current().text, "bu");
        assert_eq!(history.depth(), 2);

        assert!(history.undo());
        assert_eq!(history.current().text, "b");
        assert!(history.undo());
        assert_eq!(history.current(), history.seed());
    }
}
