//! Selection state of the circle editor.

use crate::circle::CircleId;
use serde::{Deserialize, Serialize};

/// Whether a circle is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    /// Nothing selected; the radius control is hidden.
    #[default]
    Idle,
    /// One circle selected; radius edits apply to it.
    Selected(CircleId),
}

impl SelectionState {
    /// Check if anything is selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// Get the selected circle, if any.
    pub fn id(&self) -> Option<CircleId> {
        match self {
            Self::Idle => None,
            Self::Selected(id) => Some(*id),
        }
    }
}

impl From<Option<CircleId>> for SelectionState {
    fn from(id: Option<CircleId>) -> Self {
        id.map_or(Self::Idle, Self::Selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_option() {
        assert_eq!(SelectionState::from(None), SelectionState::Idle);
        assert_eq!(SelectionState::from(Some(4)).id(), Some(4));
        assert!(!SelectionState::default().is_selected());
        assert!(SelectionState::Selected(1).is_selected());
    }
}
