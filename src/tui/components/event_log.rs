//! Listener event log.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{EventHistory, HistoryKind};
use crate::tui::theme::*;

fn kind_style(kind: HistoryKind) -> (&'static str, Style) {
    match kind {
        HistoryKind::Changed => ("changed", Style::new().fg(ACCENT_MINT)),
        HistoryKind::Limit => ("limit  ", Style::new().fg(ACCENT_CORAL)),
        HistoryKind::Focus => ("focus  ", Style::new().fg(ACCENT_BLUE)),
        HistoryKind::Editor => ("editor ", Style::new().fg(ACCENT_BLUE)),
        HistoryKind::Info => ("info   ", Style::new().fg(TEXT_DIM)),
        HistoryKind::Error => ("error  ", Style::new().fg(ACCENT_CORAL).bold()),
    }
}

/// Render the most recent listener events, newest at the bottom.
pub fn render_event_log(frame: &mut Frame, area: Rect, history: &EventHistory) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = history.len().saturating_sub(visible);

    let lines: Vec<Line> = history
        .entries()
        .skip(skip)
        .map(|entry| {
            let (tag, style) = kind_style(entry.kind);
            Line::from(vec![
                Span::styled(format!("{} ", entry.time), Style::new().fg(TEXT_DIM)),
                Span::styled(tag, style),
                Span::raw(" "),
                Span::styled(entry.message.as_str(), Style::new().fg(TEXT_WHITE)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Span::styled(" Events ", Style::new().fg(ACCENT_BLUE)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
