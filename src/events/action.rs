//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; the App applies them to the picker.

use crate::picker::{EditorAction, PickerAction};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,
    /// Quit the application
    Quit,

    // === Triggers ===
    /// Tap a trigger (one step)
    Click(PickerAction),
    /// Trigger went down; becomes a click or a long press
    Press(PickerAction),
    /// Held trigger went up
    Release,
    /// Pointer left the held trigger
    CancelPress,
    /// Enable/disable a trigger
    ToggleAction(PickerAction),

    // === Display ===
    /// Focus the display for editing
    FocusDisplay,
    /// Drop display focus, committing the edit
    ClearFocus,
    /// The terminal lost focus
    Blur,
    /// Toggle whether the display can be focused
    ToggleFocusable,
    /// Editor action from the keyboard while editing
    Editor(EditorAction),
    /// Add character at the cursor
    InputChar(char),
    /// Delete character before cursor
    InputBackspace,
    /// Delete character at cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start
    InputHome,
    /// Move cursor to end
    InputEnd,
    /// Bracketed paste from the terminal
    Paste(String),
    /// Paste from the system clipboard
    PasteClipboard,

    // === Misc ===
    /// Copy the current value to the system clipboard
    CopyValue,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,
}
