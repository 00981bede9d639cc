//! Listener roles and their default implementations.
//!
//! Each picker holds exactly one listener per role; setting a new one
//! replaces the old. Closures with the matching signature implement the
//! traits directly.

use crate::log;

use super::NumberPicker;
use super::action::{EditorAction, PickerAction};

/// Notified after a successful value change.
pub trait ValueChangedListener {
    fn value_changed(&mut self, value: i32, action: PickerAction);
}

/// Notified when a requested value falls outside `[min, max]`.
///
/// `limit` is the boundary nearest to `attempted`.
pub trait LimitExceededListener {
    fn limit_exceeded(&mut self, picker: &mut NumberPicker, limit: i32, attempted: i32);
}

/// Notified when the display field gains or loses focus.
pub trait FocusChangeListener {
    fn focus_changed(&mut self, picker: &mut NumberPicker, has_focus: bool);
}

/// Notified on editor actions while the display is edited.
///
/// Returns true if the action was handled.
pub trait EditorActionListener {
    fn editor_action(&mut self, picker: &mut NumberPicker, action: EditorAction) -> bool;
}

impl<F> ValueChangedListener for F
where
    F: FnMut(i32, PickerAction),
{
    fn value_changed(&mut self, value: i32, action: PickerAction) {
        self(value, action)
    }
}

impl<F> LimitExceededListener for F
where
    F: FnMut(&mut NumberPicker, i32, i32),
{
    fn limit_exceeded(&mut self, picker: &mut NumberPicker, limit: i32, attempted: i32) {
        self(picker, limit, attempted)
    }
}

impl<F> FocusChangeListener for F
where
    F: FnMut(&mut NumberPicker, bool),
{
    fn focus_changed(&mut self, picker: &mut NumberPicker, has_focus: bool) {
        self(picker, has_focus)
    }
}

impl<F> EditorActionListener for F
where
    F: FnMut(&mut NumberPicker, EditorAction) -> bool,
{
    fn editor_action(&mut self, picker: &mut NumberPicker, action: EditorAction) -> bool {
        self(picker, action)
    }
}

/// Logs every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValueChangedListener;

impl ValueChangedListener for DefaultValueChangedListener {
    fn value_changed(&mut self, value: i32, action: PickerAction) {
        log::log_event(&format!("NumberPicker is {} to {}", action.verb(), value));
    }
}

/// Logs the rejected value and moves the picker onto the boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLimitExceededListener;

impl LimitExceededListener for DefaultLimitExceededListener {
    fn limit_exceeded(&mut self, picker: &mut NumberPicker, limit: i32, attempted: i32) {
        log::log_event(&format!(
            "Value {} exceeds limit {}, clamping",
            attempted, limit
        ));
        picker.set_value(limit);
    }
}

/// Commits the pending display edit once focus leaves the field.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFocusChangeListener;

impl FocusChangeListener for DefaultFocusChangeListener {
    fn focus_changed(&mut self, picker: &mut NumberPicker, has_focus: bool) {
        if !has_focus {
            picker.commit_display();
        }
    }
}

/// Drops focus (and with it the keyboard) on `Done`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEditorActionListener;

impl EditorActionListener for DefaultEditorActionListener {
    fn editor_action(&mut self, picker: &mut NumberPicker, action: EditorAction) -> bool {
        if action == EditorAction::Done {
            picker.clear_focus();
            true
        } else {
            false
        }
    }
}

/// One listener per role.
pub(crate) struct Listeners {
    pub value_changed: Option<Box<dyn ValueChangedListener>>,
    pub limit_exceeded: Option<Box<dyn LimitExceededListener>>,
    pub focus_change: Option<Box<dyn FocusChangeListener>>,
    pub editor_action: Option<Box<dyn EditorActionListener>>,
}

impl Default for Listeners {
    fn default() -> Self {
        Self {
            value_changed: Some(Box::new(DefaultValueChangedListener)),
            limit_exceeded: Some(Box::new(DefaultLimitExceededListener)),
            focus_change: Some(Box::new(DefaultFocusChangeListener)),
            editor_action: Some(Box::new(DefaultEditorActionListener)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;

    fn picker(min: i32, max: i32, value: i32) -> NumberPicker {
        NumberPicker::from_config(&PickerConfig {
            min,
            max,
            value,
            focusable: true,
            ..PickerConfig::default()
        })
    }

    #[test]
    fn test_default_limit_listener_clamps_to_boundary() {
        let mut p = picker(0, 10, 5);
        DefaultLimitExceededListener.limit_exceeded(&mut p, 10, 42);
        assert_eq!(p.value(), 10);
    }

    #[test]
    fn test_default_focus_listener_commits_on_blur_only() {
        let mut p = picker(0, 10, 5);
        assert!(p.request_focus());
        p.input_char('7');

        DefaultFocusChangeListener.focus_changed(&mut p, true);
        assert_eq!(p.display_text(), "57");

        DefaultFocusChangeListener.focus_changed(&mut p, false);
        assert_eq!(p.display_text(), "10");
    }

    #[test]
    fn test_default_editor_listener_handles_done() {
        let mut p = picker(0, 10, 5);
        assert!(p.request_focus());

        assert!(!DefaultEditorActionListener.editor_action(&mut p, EditorAction::Next));
        assert!(p.is_display_focused());

        assert!(DefaultEditorActionListener.editor_action(&mut p, EditorAction::Done));
        assert!(!p.is_display_focused());
    }
}
