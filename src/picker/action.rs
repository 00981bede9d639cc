//! Action tags shared by the picker, its listeners and the host application.

use std::fmt;

/// What caused a value change, and which trigger an operation refers to.
///
/// `Increment` and `Decrement` double as trigger identifiers for
/// [`NumberPicker::set_action_enabled`](super::NumberPicker::set_action_enabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerAction {
    /// Value typed into the display field
    Manual,
    /// Increment trigger (or `increment*` call)
    Increment,
    /// Decrement trigger (or `decrement*` call)
    Decrement,
}

impl PickerAction {
    /// Past-tense verb used in log lines ("incremented to 5").
    pub fn verb(self) -> &'static str {
        match self {
            PickerAction::Manual => "manually set",
            PickerAction::Increment => "incremented",
            PickerAction::Decrement => "decremented",
        }
    }
}

impl fmt::Display for PickerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PickerAction::Manual => "manual",
            PickerAction::Increment => "increment",
            PickerAction::Decrement => "decrement",
        };
        f.write_str(name)
    }
}

/// Keyboard "submit" style actions delivered while the display is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Finish editing
    Done,
    /// Move on to the next input
    Next,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbs() {
        assert_eq!(PickerAction::Manual.verb(), "manually set");
        assert_eq!(PickerAction::Increment.verb(), "incremented");
        assert_eq!(PickerAction::Decrement.verb(), "decremented");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PickerAction::Manual.to_string(), "manual");
        assert_eq!(PickerAction::Increment.to_string(), "increment");
        assert_eq!(PickerAction::Decrement.to_string(), "decrement");
    }
}
