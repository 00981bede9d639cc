//! Demo application state: one picker plus the listener event history.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

use chrono::Local;

use crate::clipboard;
use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::picker::{
    DefaultEditorActionListener, DefaultFocusChangeListener, DefaultLimitExceededListener,
    DefaultValueChangedListener, EditorAction, EditorActionListener, FocusChangeListener,
    LimitExceededListener, NumberPicker, PickerAction, ValueChangedListener,
};
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,  // Stepping with keys and mouse
    Editing, // Display focused, typing
    Help,    // Help popup
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Changed,
    Limit,
    Focus,
    Editor,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub time: String,
    pub kind: HistoryKind,
    pub message: String,
}

/// Bounded log of what the listeners saw.
#[derive(Debug, Clone)]
pub struct EventHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl EventHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, kind: HistoryKind, message: impl Into<String>) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            time: Local::now().format("%H:%M:%S").to_string(),
            kind,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type SharedHistory = Rc<RefCell<EventHistory>>;

/// Records limit events, then lets the default listener re-clamp.
struct HistoryLimitListener {
    history: SharedHistory,
}

impl LimitExceededListener for HistoryLimitListener {
    fn limit_exceeded(&mut self, picker: &mut NumberPicker, limit: i32, attempted: i32) {
        self.history.borrow_mut().push(
            HistoryKind::Limit,
            format!("{} is outside the range, limit {}", attempted, limit),
        );
        DefaultLimitExceededListener.limit_exceeded(picker, limit, attempted);
    }
}

pub struct App {
    pub picker: NumberPicker,
    pub interactions: InteractionRegistry,
    pub history: SharedHistory,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut picker = NumberPicker::from_config(&config.picker);
        let history: SharedHistory = Rc::new(RefCell::new(EventHistory::new(config.history_limit)));

        let sink = Rc::clone(&history);
        picker.set_value_changed_listener(move |value: i32, action: PickerAction| {
            DefaultValueChangedListener.value_changed(value, action);
            sink.borrow_mut()
                .push(HistoryKind::Changed, format!("{} to {}", action.verb(), value));
        });

        picker.set_limit_exceeded_listener(HistoryLimitListener {
            history: Rc::clone(&history),
        });

        let sink = Rc::clone(&history);
        picker.set_focus_change_listener(move |picker: &mut NumberPicker, has_focus: bool| {
            let message = if has_focus { "display focused" } else { "display released" };
            sink.borrow_mut().push(HistoryKind::Focus, message);
            DefaultFocusChangeListener.focus_changed(picker, has_focus);
        });

        let sink = Rc::clone(&history);
        picker.set_editor_action_listener(move |picker: &mut NumberPicker, action: EditorAction| {
            sink.borrow_mut()
                .push(HistoryKind::Editor, format!("{:?}", action).to_lowercase());
            DefaultEditorActionListener.editor_action(picker, action)
        });

        Self {
            picker,
            interactions: InteractionRegistry::new(),
            history,
            show_help: false,
            should_quit: false,
        }
    }

    /// The mode follows the display focus, so listeners that drop the
    /// focus also leave editing mode.
    pub fn input_mode(&self) -> InputMode {
        if self.show_help {
            InputMode::Help
        } else if self.picker.is_display_focused() {
            InputMode::Editing
        } else {
            InputMode::Normal
        }
    }

    fn note(&self, kind: HistoryKind, message: impl Into<String>) {
        self.history.borrow_mut().push(kind, message);
    }

    /// Apply an action at time `now`.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,

            Action::Click(trigger) => {
                if !self.picker.click(trigger) {
                    self.note(HistoryKind::Info, format!("{} is disabled", trigger));
                }
            }
            Action::Press(trigger) => {
                if !self.picker.press(trigger, now) {
                    self.note(HistoryKind::Info, format!("{} is disabled", trigger));
                }
            }
            Action::Release => self.picker.release(now),
            Action::CancelPress => self.picker.cancel_press(),
            Action::ToggleAction(trigger) => {
                let enabled = !self.picker.is_action_enabled(trigger);
                self.picker.set_action_enabled(trigger, enabled);
                let state = if enabled { "enabled" } else { "disabled" };
                self.note(HistoryKind::Info, format!("{} {}", trigger, state));
            }

            Action::FocusDisplay => {
                if !self.picker.request_focus() {
                    self.note(HistoryKind::Info, "display is not focusable (press f)");
                }
            }
            Action::ClearFocus => self.picker.clear_focus(),
            Action::Blur => self.picker.blur(),
            Action::ToggleFocusable => {
                let focusable = !self.picker.is_display_focusable();
                self.picker.set_display_focusable(focusable);
                let state = if focusable { "focusable" } else { "locked" };
                self.note(HistoryKind::Info, format!("display {}", state));
            }
            Action::Editor(editor_action) => {
                self.picker.editor_action(editor_action);
            }
            Action::InputChar(c) => {
                self.picker.input_char(c);
            }
            Action::InputBackspace => {
                self.picker.input_backspace();
            }
            Action::InputDelete => {
                self.picker.input_delete();
            }
            Action::InputLeft => self.picker.cursor_left(),
            Action::InputRight => self.picker.cursor_right(),
            Action::InputHome => self.picker.cursor_home(),
            Action::InputEnd => self.picker.cursor_end(),
            Action::Paste(text) => self.paste(&text),
            Action::PasteClipboard => match clipboard::read_text() {
                Ok(Some(text)) => self.paste(&text),
                Ok(None) => self.note(HistoryKind::Info, "clipboard is empty"),
                Err(e) => {
                    log::log(&format!("Clipboard read failed: {}", e));
                    self.note(HistoryKind::Error, e.to_string());
                }
            },

            Action::CopyValue => {
                let value = self.picker.value().to_string();
                match clipboard::copy_text(&value) {
                    Ok(()) => self.note(HistoryKind::Info, format!("copied {}", value)),
                    Err(e) => {
                        log::log(&format!("Clipboard write failed: {}", e));
                        self.note(HistoryKind::Error, e.to_string());
                    }
                }
            }
            Action::OpenHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    /// Pasting focuses the display first; the pasted text lands at the cursor.
    fn paste(&mut self, text: &str) {
        if !self.picker.request_focus() {
            self.note(HistoryKind::Info, "display is not focusable (press f)");
            return;
        }
        if !self.picker.input_str(&clipboard::sanitize_paste(text)) {
            self.note(HistoryKind::Info, "nothing numeric to paste");
        }
    }

    /// Advance the picker's timers.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.picker.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.picker.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use std::time::Duration;

    fn app(picker: PickerConfig) -> App {
        App::new(&Config {
            picker,
            history_limit: 10,
        })
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = EventHistory::new(3);
        for i in 0..5 {
            history.push(HistoryKind::Info, i.to_string());
        }
        let messages: Vec<_> = history.entries().map(|e| e.message.clone()).collect();
        assert_eq!(messages, vec!["2", "3", "4"]);

        let mut disabled = EventHistory::new(0);
        disabled.push(HistoryKind::Info, "dropped");
        assert!(disabled.is_empty());
    }

    #[test]
    fn test_limit_is_recorded_and_clamped() {
        let mut app = app(PickerConfig {
            min: 0,
            max: 10,
            value: 9,
            unit: 2,
            ..PickerConfig::default()
        });

        app.apply(Action::Click(PickerAction::Increment), Instant::now());
        assert_eq!(app.picker.value(), 10);

        let history = app.history.borrow();
        let kinds: Vec<_> = history.entries().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![HistoryKind::Limit, HistoryKind::Changed]);
        assert_eq!(history.last().unwrap().message, "incremented to 10");
    }

    #[test]
    fn test_editing_round_trip() {
        let mut app = app(PickerConfig {
            min: 0,
            max: 100,
            value: 5,
            focusable: true,
            ..PickerConfig::default()
        });
        let now = Instant::now();

        app.apply(Action::FocusDisplay, now);
        assert_eq!(app.input_mode(), InputMode::Editing);

        app.apply(Action::InputBackspace, now);
        app.apply(Action::InputChar('4'), now);
        app.apply(Action::InputChar('2'), now);
        app.apply(Action::Editor(EditorAction::Done), now);

        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.picker.value(), 42);
        assert_eq!(app.picker.display_text(), "42");
    }

    #[test]
    fn test_focus_refused_when_locked() {
        let mut app = app(PickerConfig::default());
        app.apply(Action::FocusDisplay, Instant::now());
        assert_eq!(app.input_mode(), InputMode::Normal);

        app.apply(Action::ToggleFocusable, Instant::now());
        app.apply(Action::FocusDisplay, Instant::now());
        assert_eq!(app.input_mode(), InputMode::Editing);
    }

    #[test]
    fn test_bracketed_paste_focuses_and_inserts() {
        let mut app = app(PickerConfig {
            focusable: true,
            value: 0,
            ..PickerConfig::default()
        });
        app.apply(Action::Paste(" 1,500 ".to_string()), Instant::now());
        assert_eq!(app.picker.value(), 1500);
        assert_eq!(app.picker.display_text(), "01500");

        app.apply(Action::ClearFocus, Instant::now());
        assert_eq!(app.picker.display_text(), "1500");
    }

    #[test]
    fn test_hold_and_release_through_actions() {
        let mut app = app(PickerConfig {
            min: 0,
            max: 100,
            value: 0,
            repeat: 50,
            long_press: 300,
            ..PickerConfig::default()
        });
        let t0 = Instant::now();

        app.apply(Action::Press(PickerAction::Increment), t0);
        assert_eq!(app.next_deadline(), Some(t0 + Duration::from_millis(300)));

        assert_eq!(app.tick(t0 + Duration::from_millis(400)), 3);
        app.apply(Action::Release, t0 + Duration::from_millis(420));

        assert_eq!(app.picker.value(), 3);
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_toggle_trigger() {
        let mut app = app(PickerConfig::default());
        app.apply(Action::ToggleAction(PickerAction::Decrement), Instant::now());
        assert!(!app.picker.is_action_enabled(PickerAction::Decrement));

        app.apply(Action::Click(PickerAction::Decrement), Instant::now());
        assert_eq!(app.picker.value(), 1);
        assert_eq!(app.history.borrow().last().unwrap().message, "decrement is disabled");
    }

    #[test]
    fn test_help_mode() {
        let mut app = app(PickerConfig::default());
        app.apply(Action::OpenHelp, Instant::now());
        assert_eq!(app.input_mode(), InputMode::Help);
        app.apply(Action::CloseHelp, Instant::now());
        assert_eq!(app.input_mode(), InputMode::Normal);
    }
}
