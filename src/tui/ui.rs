use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use super::components::{
    preferred_size, render_event_log, render_help_popup, render_number_picker,
    render_status_panel,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let (picker_width, picker_height) = preferred_size(&app.picker);

    // Main vertical layout: title, picker, status, events, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),             // Title + spacing
        Constraint::Length(picker_height), // Picker
        Constraint::Length(1),             // Gap
        Constraint::Length(6),             // Status
        Constraint::Min(3),                // Event log
        Constraint::Length(1),             // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0]);

    // Regions are rebuilt every frame
    app.interactions.clear();
    let picker_area = centered(main_layout[1], picker_width);
    render_number_picker(frame, picker_area, &app.picker, &mut app.interactions);

    render_status_panel(frame, main_layout[3], &app.picker);
    render_event_log(frame, main_layout[4], &app.history.borrow());
    render_hotkeys(frame, main_layout[5], app);

    if app.input_mode() == InputMode::Help {
        render_help_popup(frame, area);
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("num", Style::new().fg(ACCENT_CORAL).bold()),
        Span::styled("pick", Style::new().fg(ACCENT_GOLD).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(title), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys = match app.input_mode() {
        InputMode::Normal => Line::from(vec![
            Span::styled("[+/-]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" step • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[e]", Style::new().fg(TEXT_WHITE)),
            Span::styled("dit • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[1/2]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" toggle • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" help • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled("uit", Style::new().fg(TEXT_DIM)),
        ]),
        InputMode::Editing => Line::from(vec![
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" done • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Tab]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" next • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" leave", Style::new().fg(TEXT_DIM)),
        ]),
        InputMode::Help => Line::from(vec![
            Span::styled("[any key]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" close", Style::new().fg(TEXT_DIM)),
        ]),
    };

    frame.render_widget(Paragraph::new(hotkeys), area);
}
