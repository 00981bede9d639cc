//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::picker::{EditorAction, PickerAction};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.input_mode() {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::Editing => handle_editing_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up | KeyCode::Right => {
            Action::Click(PickerAction::Increment)
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down | KeyCode::Left => {
            Action::Click(PickerAction::Decrement)
        }

        KeyCode::Char('e') | KeyCode::Char('i') | KeyCode::Enter => Action::FocusDisplay,
        KeyCode::Char('1') => Action::ToggleAction(PickerAction::Decrement),
        KeyCode::Char('2') => Action::ToggleAction(PickerAction::Increment),
        KeyCode::Char('f') => Action::ToggleFocusable,
        KeyCode::Char('y') => Action::CopyValue,
        KeyCode::Char('p') => Action::PasteClipboard,

        _ => Action::None,
    }
}

fn handle_editing_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('v') => Action::PasteClipboard,
            KeyCode::Char('a') => Action::InputHome,
            KeyCode::Char('e') => Action::InputEnd,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Enter => Action::Editor(EditorAction::Done),
        KeyCode::Tab => Action::Editor(EditorAction::Next),
        KeyCode::Esc => Action::ClearFocus,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        _ => Action::CloseHelp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PickerConfig};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(focusable: bool) -> App {
        App::new(&Config {
            picker: PickerConfig {
                focusable,
                ..PickerConfig::default()
            },
            ..Config::default()
        })
    }

    #[test]
    fn test_normal_mode_steps() {
        let app = app(false);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('+'))),
            Action::Click(PickerAction::Increment)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Down)),
            Action::Click(PickerAction::Decrement)
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Action::FocusDisplay);
    }

    #[test]
    fn test_editing_mode_routes_chars_to_display() {
        let mut app = app(true);
        assert!(app.picker.request_focus());

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('-'))),
            Action::InputChar('-')
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::Editor(EditorAction::Done)
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::ClearFocus);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app(true);
        app.picker.request_focus();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
    }
}
