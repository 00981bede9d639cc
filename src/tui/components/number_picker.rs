//! Number picker component: two triggers around the value display.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::LayoutKind;
use crate::events::Action;
use crate::picker::{NumberPicker, PickerAction};
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

/// Preferred (width, height) of the picker for a layout.
pub fn preferred_size(picker: &NumberPicker) -> (u16, u16) {
    match picker.layout().kind {
        LayoutKind::Horizontal => (30, 3),
        LayoutKind::Vertical => (16, 9),
        LayoutKind::Compact => (24, 1),
    }
}

fn label_width(label: &str) -> u16 {
    label.chars().count() as u16
}

/// Style of a trigger label given its enabled/pressed state.
fn trigger_style(picker: &NumberPicker, action: PickerAction) -> Style {
    if !picker.is_action_enabled(action) {
        Style::new().fg(TEXT_DISABLED)
    } else if picker.pressed_action() == Some(action) {
        let color = if picker.is_long_press_active() {
            ACCENT_CORAL
        } else {
            ACCENT_GOLD
        };
        Style::new().fg(color).bold()
    } else {
        Style::new().fg(TEXT_WHITE)
    }
}

fn trigger_label(picker: &NumberPicker, action: PickerAction) -> &str {
    let layout = picker.layout();
    match action {
        PickerAction::Decrement => layout.decrement_label.as_str(),
        _ => layout.increment_label.as_str(),
    }
}

fn register_region(
    registry: &mut InteractionRegistry,
    id: &'static str,
    area: Rect,
    on_click: Action,
) {
    registry.register(InteractiveRegion::interactive(
        id,
        ClickRegion::from(area),
        on_click,
        Action::Click(PickerAction::Increment),
        Action::Click(PickerAction::Decrement),
    ));
}

fn render_trigger(
    frame: &mut Frame,
    area: Rect,
    picker: &NumberPicker,
    action: PickerAction,
    registry: &mut InteractionRegistry,
) {
    let style = trigger_style(picker, action);
    let border = if picker.is_action_enabled(action) {
        style
    } else {
        Style::new().fg(TEXT_DISABLED)
    };

    let paragraph = Paragraph::new(Line::styled(trigger_label(picker, action), style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);

    let id = if action == PickerAction::Increment { "increment" } else { "decrement" };
    register_region(registry, id, area, Action::Press(action));
}

fn render_display(frame: &mut Frame, area: Rect, picker: &NumberPicker, registry: &mut InteractionRegistry) {
    let focused = picker.is_display_focused();
    let border = if focused {
        Style::new().fg(ACCENT_BLUE)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let text_style = if focused {
        Style::new().fg(TEXT_WHITE)
    } else {
        Style::new().fg(ACCENT_MINT).bold()
    };

    // While editing, the text is left-aligned so the cursor lines up.
    let alignment = if focused { Alignment::Left } else { Alignment::Center };
    let paragraph = Paragraph::new(Line::styled(picker.display_text(), text_style))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);

    if focused {
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + picker.display_cursor() as u16).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }

    register_region(registry, "display", area, Action::FocusDisplay);
}

fn render_compact(frame: &mut Frame, area: Rect, picker: &NumberPicker, registry: &mut InteractionRegistry) {
    let dec = trigger_label(picker, PickerAction::Decrement);
    let inc = trigger_label(picker, PickerAction::Increment);
    let text = picker.display_text();
    let focused = picker.is_display_focused();

    let value_style = if focused {
        Style::new().fg(TEXT_WHITE).underlined()
    } else {
        Style::new().fg(ACCENT_MINT).bold()
    };

    let line = Line::from(vec![
        Span::styled(format!("[{}]", dec), trigger_style(picker, PickerAction::Decrement)),
        Span::raw(" "),
        Span::styled(text, value_style),
        Span::raw(" "),
        Span::styled(format!("[{}]", inc), trigger_style(picker, PickerAction::Increment)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let dec_width = label_width(dec) + 2;
    let text_width = label_width(text).max(1);
    let inc_width = label_width(inc) + 2;

    let dec_area = Rect::new(area.x, area.y, dec_width.min(area.width), 1);
    let text_area = Rect::new(area.x + dec_width + 1, area.y, text_width, 1).intersection(area);
    let inc_area = Rect::new(area.x + dec_width + text_width + 2, area.y, inc_width, 1).intersection(area);

    register_region(registry, "decrement", dec_area, Action::Press(PickerAction::Decrement));
    register_region(registry, "display", text_area, Action::FocusDisplay);
    register_region(registry, "increment", inc_area, Action::Press(PickerAction::Increment));

    if focused {
        let x = text_area.x + picker.display_cursor() as u16;
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

/// Render the picker into `area` and register its interactive regions.
pub fn render_number_picker(
    frame: &mut Frame,
    area: Rect,
    picker: &NumberPicker,
    registry: &mut InteractionRegistry,
) {
    match picker.layout().kind {
        LayoutKind::Horizontal => {
            let dec_width = label_width(trigger_label(picker, PickerAction::Decrement)).max(1) + 4;
            let inc_width = label_width(trigger_label(picker, PickerAction::Increment)).max(1) + 4;
            let chunks = Layout::horizontal([
                Constraint::Length(dec_width),
                Constraint::Min(8),
                Constraint::Length(inc_width),
            ])
            .split(area);

            render_trigger(frame, chunks[0], picker, PickerAction::Decrement, registry);
            render_display(frame, chunks[1], picker, registry);
            render_trigger(frame, chunks[2], picker, PickerAction::Increment, registry);
        }
        LayoutKind::Vertical => {
            let chunks = Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

            render_trigger(frame, chunks[0], picker, PickerAction::Increment, registry);
            render_display(frame, chunks[1], picker, registry);
            render_trigger(frame, chunks[2], picker, PickerAction::Decrement, registry);
        }
        LayoutKind::Compact => render_compact(frame, area, picker, registry),
    }
}
