//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the picker component during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        MouseEventKind::Up(MouseButton::Left) => {
            if app.picker.pressed_action().is_some() {
                Action::Release
            } else {
                Action::None
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => match app.picker.pressed_action() {
            // Sliding off the held trigger abandons the press
            Some(pressed) if app.interactions.handle_click(x, y) != Action::Press(pressed) => {
                Action::CancelPress
            }
            _ => Action::None,
        },
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::picker::PickerAction;
    use crate::tui::interaction::{ClickRegion, InteractiveRegion};
    use crossterm::event::KeyModifiers;
    use std::time::Instant;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_button() -> App {
        let mut app = App::new(&Config::default());
        app.interactions.register(InteractiveRegion::interactive(
            "increment",
            ClickRegion::new(0, 0, 5, 3),
            Action::Press(PickerAction::Increment),
            Action::Click(PickerAction::Increment),
            Action::Click(PickerAction::Decrement),
        ));
        app
    }

    #[test]
    fn test_press_and_release() {
        let mut app = app_with_button();
        let down = handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 2, 1));
        assert_eq!(down, Action::Press(PickerAction::Increment));

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 2, 1);
        assert_eq!(handle_mouse_event(&app, up), Action::None);

        app.apply(down, Instant::now());
        assert_eq!(handle_mouse_event(&app, up), Action::Release);
    }

    #[test]
    fn test_drag_off_button_cancels() {
        let mut app = app_with_button();
        app.apply(Action::Press(PickerAction::Increment), Instant::now());

        let inside = mouse(MouseEventKind::Drag(MouseButton::Left), 3, 2);
        assert_eq!(handle_mouse_event(&app, inside), Action::None);

        let outside = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 2);
        assert_eq!(handle_mouse_event(&app, outside), Action::CancelPress);
    }

    #[test]
    fn test_scroll_steps() {
        let app = app_with_button();
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollUp, 1, 1)),
            Action::Click(PickerAction::Increment)
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollDown, 40, 40)),
            Action::None
        );
    }
}
