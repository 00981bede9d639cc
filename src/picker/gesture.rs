//! Press tracking for the two triggers.

use std::time::{Duration, Instant};

use super::action::PickerAction;

/// Where a trigger press currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    #[default]
    Idle,
    /// Held, but not long enough to count as a long press yet
    Pressed { action: PickerAction, since: Instant },
    /// Long press in progress; steps repeat until release
    Repeating { action: PickerAction },
}

impl PressState {
    /// The trigger being held, if any.
    pub fn action(&self) -> Option<PickerAction> {
        match *self {
            PressState::Idle => None,
            PressState::Pressed { action, .. } | PressState::Repeating { action } => Some(action),
        }
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, PressState::Repeating { .. })
    }

    /// When a pending press turns into a long press.
    pub fn long_press_at(&self, timeout: Duration) -> Option<Instant> {
        match *self {
            PressState::Pressed { since, .. } => Some(since + timeout),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_press_deadline_only_while_pressed() {
        let now = Instant::now();
        let timeout = Duration::from_millis(500);

        let pressed = PressState::Pressed { action: PickerAction::Increment, since: now };
        assert_eq!(pressed.long_press_at(timeout), Some(now + timeout));
        assert_eq!(pressed.action(), Some(PickerAction::Increment));
        assert!(!pressed.is_repeating());

        let repeating = PressState::Repeating { action: PickerAction::Decrement };
        assert_eq!(repeating.long_press_at(timeout), None);
        assert!(repeating.is_repeating());

        assert_eq!(PressState::Idle.action(), None);
    }
}
