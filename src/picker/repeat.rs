//! Cancellable repeat timer for long-press stepping.
//!
//! The timer never sleeps or spawns anything. It only remembers the next
//! deadline, and its owner polls it from the event loop. Every `arm` or
//! `cancel` bumps a generation counter, so a step that was taken from an
//! older generation can tell it must not re-arm.

use std::time::Instant;

use super::action::PickerAction;

/// A tick handed out by [`RepeatTimer::take_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTick {
    pub action: PickerAction,
    pub deadline: Instant,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    action: PickerAction,
    deadline: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct RepeatTimer {
    generation: u64,
    armed: Option<Armed>,
}

impl RepeatTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn arm(&mut self, action: PickerAction, deadline: Instant) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.armed = Some(Armed { action, deadline });
        self.generation
    }

    /// Drop the pending deadline and invalidate outstanding ticks.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.armed = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|a| a.deadline)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if nothing has armed or cancelled the timer since `generation`.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Disarm and return the pending tick if its deadline has passed.
    ///
    /// The generation is left untouched so the caller can re-arm it.
    pub fn take_due(&mut self, now: Instant) -> Option<DueTick> {
        match self.armed {
            Some(armed) if armed.deadline <= now => {
                self.armed = None;
                Some(DueTick {
                    action: armed.action,
                    deadline: armed.deadline,
                    generation: self.generation,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_not_due_before_deadline() {
        let start = Instant::now();
        let mut timer = RepeatTimer::new();
        timer.arm(PickerAction::Increment, start + Duration::from_millis(100));

        assert!(timer.take_due(start).is_none());
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(100)));

        let tick = timer.take_due(start + Duration::from_millis(100)).unwrap();
        assert_eq!(tick.action, PickerAction::Increment);
        assert_eq!(timer.deadline(), None);
        assert!(timer.is_current(tick.generation));
    }

    #[test]
    fn test_cancel_invalidates_generation() {
        let start = Instant::now();
        let mut timer = RepeatTimer::new();
        timer.arm(PickerAction::Decrement, start);

        let tick = timer.take_due(start).unwrap();
        timer.cancel();

        assert!(!timer.is_current(tick.generation));
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let start = Instant::now();
        let mut timer = RepeatTimer::new();
        let first = timer.arm(PickerAction::Increment, start);
        let second = timer.arm(PickerAction::Decrement, start + Duration::from_millis(5));

        assert_ne!(first, second);
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(5)));
        assert!(timer.take_due(start).is_none());
    }
}
