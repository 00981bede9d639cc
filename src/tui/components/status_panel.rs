//! Status panel: bounds, step, repeat timing and trigger state.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::picker::{NumberPicker, PickerAction, PressState};
use crate::tui::theme::*;

fn on_off(enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled("on", Style::new().fg(ACCENT_MINT))
    } else {
        Span::styled("off", Style::new().fg(ACCENT_CORAL))
    }
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::new().fg(TEXT_DIM))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::new().fg(TEXT_WHITE))
}

fn press_description(picker: &NumberPicker) -> String {
    match picker.press_state() {
        PressState::Idle => "idle".to_string(),
        PressState::Pressed { action, .. } => format!("pressed ({})", action),
        PressState::Repeating { action } => format!("repeating ({})", action),
    }
}

/// Render the picker's current settings.
pub fn render_status_panel(frame: &mut Frame, area: Rect, picker: &NumberPicker) {
    let display = match (picker.is_display_focusable(), picker.is_display_focused()) {
        (_, true) => "editing",
        (true, false) => "focusable",
        (false, false) => "locked",
    };

    let lines = vec![
        Line::from(vec![
            label("Range      "),
            value(format!("[{}, {}]", picker.min(), picker.max())),
            label("   Unit "),
            value(picker.unit().to_string()),
        ]),
        Line::from(vec![
            label("Repeat     "),
            value(format!("{}ms", picker.repeat().as_millis())),
            label("   Long press "),
            value(format!("{}ms", picker.long_press_timeout().as_millis())),
        ]),
        Line::from(vec![
            label("Triggers   "),
            label("- "),
            on_off(picker.is_action_enabled(PickerAction::Decrement)),
            label("  + "),
            on_off(picker.is_action_enabled(PickerAction::Increment)),
        ]),
        Line::from(vec![
            label("Display    "),
            value(display.to_string()),
            label("   Press "),
            value(press_description(picker)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Span::styled(" Status ", Style::new().fg(ACCENT_BLUE)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
