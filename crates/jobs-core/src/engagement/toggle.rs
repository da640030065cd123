//! Toggle state machine for (user, job) relations
//!
//! ```text
//! ABSENT  --toggle--> PRESENT   (Created)
//! PRESENT --toggle--> ABSENT    (Removed)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation kinds that support toggling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleKind {
    Like,
    Bookmark,
}

impl fmt::Display for ToggleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like => f.write_str("like"),
            Self::Bookmark => f.write_str("bookmark"),
        }
    }
}

/// Whether a relation row exists for a (user, job) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationState {
    #[default]
    Absent,
    Present,
}

impl RelationState {
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// State after one toggle
    pub fn toggled(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Absent,
        }
    }

    /// Outcome of toggling from this state
    pub fn toggle_outcome(self) -> ToggleOutcome {
        match self {
            Self::Absent => ToggleOutcome::Created,
            Self::Present => ToggleOutcome::Removed,
        }
    }
}

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Created,
    Removed,
}

impl ToggleOutcome {
    /// True when the relation exists after the toggle
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Created)
    }

    pub fn resulting_state(self) -> RelationState {
        match self {
            Self::Created => RelationState::Present,
            Self::Removed => RelationState::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_toggles_return_to_absent() {
        let start = RelationState::default();
        assert_eq!(start, RelationState::Absent);
        let once = start.toggled();
        assert_eq!(once, RelationState::Present);
        assert_eq!(once.toggled(), RelationState::Absent);
    }

    #[test]
    fn test_outcome_matches_transition() {
        for state in [RelationState::Absent, RelationState::Present] {
            assert_eq!(state.toggle_outcome().resulting_state(), state.toggled());
        }
        assert!(ToggleOutcome::Created.is_active());
        assert!(!ToggleOutcome::Removed.is_active());
    }

    #[test]
    fn test_from_exists() {
        assert_eq!(RelationState::from_exists(true), RelationState::Present);
        assert_eq!(RelationState::from_exists(false).toggle_outcome(), ToggleOutcome::Created);
    }
}
