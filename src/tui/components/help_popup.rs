//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::new().fg(TEXT_WHITE)),
        Span::styled(description, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard and mouse shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup_width = 50u16;
    let popup_height = 24u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let section = |title: &'static str| Line::styled(title, Style::new().fg(ACCENT_BLUE).bold());

    let lines = vec![
        Line::styled("Keyboard & Mouse", Style::new().fg(TEXT_WHITE).bold()),
        Line::raw(""),
        section("Normal Mode"),
        key_line("+ / k / ↑", "Increment"),
        key_line("- / j / ↓", "Decrement"),
        key_line("e / Enter", "Edit the value"),
        key_line("1 / 2", "Toggle decrement / increment"),
        key_line("f", "Toggle display focusable"),
        key_line("y / p", "Copy value / paste"),
        key_line("q", "Quit"),
        Line::raw(""),
        section("Editing"),
        key_line("Enter", "Done (commit)"),
        key_line("Tab", "Next"),
        key_line("Esc", "Leave the display"),
        key_line("C-v", "Paste"),
        Line::raw(""),
        section("Mouse"),
        key_line("click", "Step once"),
        key_line("hold", "Repeat until released"),
        key_line("wheel", "Step over the picker"),
        Line::raw(""),
        Line::styled("Press any key to close", Style::new().fg(TEXT_DIM)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_BLUE))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
