//! The number picker widget state.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::{PickerConfig, PickerLayout};

use super::action::{EditorAction, PickerAction};
use super::display::DisplayField;
use super::gesture::PressState;
use super::listener::{
    EditorActionListener, FocusChangeListener, LimitExceededListener, Listeners,
    ValueChangedListener,
};
use super::repeat::RepeatTimer;

/// Repeat steps a single [`NumberPicker::tick`] may apply after a stall.
pub const MAX_CATCH_UP: usize = 8;

/// Clamp without `Ord::clamp`, which panics when `min > max`.
fn clamp_into(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Composite increment/decrement numeric input.
///
/// Two triggers step the value by `unit`; the display field can be edited
/// directly when focusable. Button steps that leave `[min, max]` are
/// rejected and reported to the [`LimitExceededListener`], while text edits
/// are clamped silently.
///
/// Time never advances on its own: the owner feeds presses, releases and
/// [`tick`](Self::tick) calls with the current instant, and sleeps until
/// [`next_deadline`](Self::next_deadline) in between.
pub struct NumberPicker {
    min: i32,
    max: i32,
    value: i32,
    unit: i32,
    repeat: Duration,
    long_press_timeout: Duration,
    increment_enabled: bool,
    decrement_enabled: bool,
    display: DisplayField,
    press: PressState,
    timer: RepeatTimer,
    layout: PickerLayout,
    listeners: Listeners,
}

impl Default for NumberPicker {
    fn default() -> Self {
        Self::from_config(&PickerConfig::default())
    }
}

impl fmt::Debug for NumberPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberPicker")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("unit", &self.unit)
            .field("repeat", &self.repeat)
            .field("press", &self.press)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

impl NumberPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a picker with the default listeners installed.
    pub fn from_config(config: &PickerConfig) -> Self {
        let value = if config.value > config.max {
            config.max
        } else if config.value < config.min {
            config.min
        } else {
            config.value
        };

        Self {
            min: config.min,
            max: config.max,
            value,
            unit: config.unit,
            repeat: Duration::from_millis(config.repeat),
            long_press_timeout: Duration::from_millis(config.long_press),
            increment_enabled: true,
            decrement_enabled: true,
            display: DisplayField::new(value.to_string(), config.focusable),
            press: PressState::Idle,
            timer: RepeatTimer::new(),
            layout: config.custom_layout.clone(),
            listeners: Listeners::default(),
        }
    }

    // === Accessors ===

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn unit(&self) -> i32 {
        self.unit
    }

    /// Interval between repeated steps while a trigger is held.
    pub fn repeat(&self) -> Duration {
        self.repeat
    }

    pub fn long_press_timeout(&self) -> Duration {
        self.long_press_timeout
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    pub fn display_cursor(&self) -> usize {
        self.display.cursor()
    }

    pub fn is_display_focused(&self) -> bool {
        self.display.is_focused()
    }

    pub fn is_display_focusable(&self) -> bool {
        self.display.is_focusable()
    }

    pub fn press_state(&self) -> PressState {
        self.press
    }

    /// Trigger currently held down, whether or not it is repeating yet.
    pub fn pressed_action(&self) -> Option<PickerAction> {
        self.press.action()
    }

    pub fn is_long_press_active(&self) -> bool {
        self.press.is_repeating()
    }

    pub fn value_is_allowed(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    // === Configuration ===
    //
    // None of these re-validate the current value against new bounds.

    pub fn set_min(&mut self, min: i32) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: i32) {
        self.max = max;
    }

    pub fn set_unit(&mut self, unit: i32) {
        self.unit = unit;
    }

    /// Set the interval between steps while a trigger is held, in milliseconds.
    pub fn set_repeat(&mut self, repeat_ms: u64) {
        self.repeat = Duration::from_millis(repeat_ms);
    }

    pub fn set_long_press_timeout(&mut self, timeout_ms: u64) {
        self.long_press_timeout = Duration::from_millis(timeout_ms);
    }

    pub fn set_layout(&mut self, layout: PickerLayout) {
        self.layout = layout;
    }

    // === Value ===

    /// Commit `value` and refresh the display.
    ///
    /// Out-of-range values leave the state untouched and are handed to the
    /// limit-exceeded listener together with the nearest boundary.
    pub fn set_value(&mut self, value: i32) {
        if self.commit(value) {
            self.refresh();
        }
    }

    /// Rewrite the display text from the committed value.
    pub fn refresh(&mut self) {
        self.display.set_text(self.value.to_string());
    }

    fn commit(&mut self, value: i32) -> bool {
        if !self.value_is_allowed(value) {
            let limit = if value < self.min { self.min } else { self.max };
            self.dispatch_limit_exceeded(limit, value);
            return false;
        }
        self.value = value;
        true
    }

    pub fn increment(&mut self) {
        self.change_value_by(self.unit);
    }

    pub fn increment_by(&mut self, step: i32) {
        self.change_value_by(step);
    }

    pub fn decrement(&mut self) {
        self.change_value_by(self.unit.saturating_neg());
    }

    pub fn decrement_by(&mut self, step: i32) {
        self.change_value_by(step.saturating_neg());
    }

    /// Step by `delta`. The reported action is the direction of the step,
    /// so a negative unit on the increment trigger reports `Decrement`.
    fn change_value_by(&mut self, delta: i32) {
        let action = if delta > 0 {
            PickerAction::Increment
        } else {
            PickerAction::Decrement
        };
        let old = self.value;
        self.set_value(self.value.saturating_add(delta));
        if self.value != old {
            self.dispatch_value_changed(self.value, action);
        }
    }

    fn step(&mut self, action: PickerAction) {
        match action {
            PickerAction::Increment => self.increment(),
            PickerAction::Decrement => self.decrement(),
            PickerAction::Manual => {}
        }
    }

    // === Triggers ===

    /// Enable or disable a trigger. `Manual` is ignored.
    ///
    /// Disabling the trigger that is being held ends the press.
    pub fn set_action_enabled(&mut self, action: PickerAction, enabled: bool) {
        match action {
            PickerAction::Increment => self.increment_enabled = enabled,
            PickerAction::Decrement => self.decrement_enabled = enabled,
            PickerAction::Manual => return,
        }
        if !enabled && self.press.action() == Some(action) {
            self.cancel_press();
        }
    }

    pub fn is_action_enabled(&self, action: PickerAction) -> bool {
        match action {
            PickerAction::Increment => self.increment_enabled,
            PickerAction::Decrement => self.decrement_enabled,
            PickerAction::Manual => false,
        }
    }

    /// A single tap on a trigger. Returns false if the trigger is disabled.
    pub fn click(&mut self, action: PickerAction) -> bool {
        if !self.is_action_enabled(action) {
            return false;
        }
        self.clear_focus();
        self.step(action);
        true
    }

    /// A trigger went down. It becomes a click or a long press later.
    pub fn press(&mut self, action: PickerAction, now: Instant) -> bool {
        if !self.is_action_enabled(action) {
            return false;
        }
        self.cancel_press();
        self.press = PressState::Pressed { action, since: now };
        true
    }

    /// The held trigger went up.
    ///
    /// A press shorter than the long-press timeout counts as a click; a
    /// long press stops repeating.
    pub fn release(&mut self, now: Instant) {
        self.tick(now);
        match self.press {
            PressState::Pressed { action, .. } => {
                self.press = PressState::Idle;
                self.click(action);
            }
            PressState::Repeating { .. } => self.cancel_press(),
            PressState::Idle => {}
        }
    }

    /// Abandon the press without clicking (pointer left the trigger).
    pub fn cancel_press(&mut self) {
        self.press = PressState::Idle;
        self.timer.cancel();
    }

    /// Enter the repeating state: step once now, then every `repeat`.
    pub fn start_long_press(&mut self, action: PickerAction, now: Instant) -> bool {
        if !self.is_action_enabled(action) {
            return false;
        }
        self.clear_focus();
        self.timer.cancel();
        self.press = PressState::Repeating { action };

        let generation = self.timer.generation();
        self.step(action);
        if self.timer.is_current(generation) && self.press == (PressState::Repeating { action }) {
            self.timer.arm(action, now + self.repeat);
        }
        true
    }

    /// Advance time to `now`. Returns the number of steps applied.
    ///
    /// At most [`MAX_CATCH_UP`] missed repeat intervals are applied per call.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut steps = 0;
        let mut caught_up = 0;

        if let PressState::Pressed { action, since } = self.press {
            let at = since + self.long_press_timeout;
            if at <= now {
                if self.start_long_press(action, at) {
                    steps += 1;
                } else {
                    self.press = PressState::Idle;
                }
            }
        }

        while let Some(due) = self.timer.take_due(now) {
            let action = match self.press {
                PressState::Repeating { action } if action == due.action => action,
                _ => break,
            };
            if !self.is_action_enabled(action) {
                self.cancel_press();
                break;
            }

            self.step(action);
            steps += 1;
            caught_up += 1;

            if !self.timer.is_current(due.generation) || !self.press.is_repeating() {
                break;
            }
            if caught_up >= MAX_CATCH_UP {
                // Stalled for too long: drop the backlog and resume from now.
                self.timer.arm(action, now + self.repeat);
                break;
            }
            self.timer.arm(action, due.deadline + self.repeat);
            if self.repeat.is_zero() {
                break;
            }
        }

        steps
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let long_press = self.press.long_press_at(self.long_press_timeout);
        match (long_press, self.timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // === Display ===

    pub fn set_display_focusable(&mut self, focusable: bool) {
        self.display.set_focusable(focusable);
        if !focusable {
            self.clear_focus();
        }
    }

    /// Give keyboard focus to the display. Fails if it is not focusable.
    pub fn request_focus(&mut self) -> bool {
        if !self.display.is_focusable() {
            return false;
        }
        if self.display.is_focused() {
            return true;
        }
        self.cancel_press();
        self.display.set_focused(true);
        self.dispatch_focus_changed(true);
        true
    }

    pub fn clear_focus(&mut self) {
        if !self.display.is_focused() {
            return;
        }
        self.display.set_focused(false);
        self.dispatch_focus_changed(false);
    }

    /// The whole widget lost focus: drop the press and the display focus.
    pub fn blur(&mut self) {
        self.cancel_press();
        self.clear_focus();
    }

    /// Parse the display, clamp, commit, and reformat the text.
    pub fn commit_display(&mut self) {
        self.apply_display_text();
        self.refresh();
    }

    fn apply_display_text(&mut self) {
        let Some(parsed) = self.display.parse() else {
            return;
        };
        let old = self.value;
        self.commit(clamp_into(parsed, self.min, self.max));
        if self.value != old {
            self.dispatch_value_changed(self.value, PickerAction::Manual);
        }
    }

    fn edit(&mut self, edit: impl FnOnce(&mut DisplayField) -> bool) -> bool {
        if !self.display.is_focused() {
            return false;
        }
        let changed = edit(&mut self.display);
        if changed {
            self.apply_display_text();
        }
        changed
    }

    pub fn input_char(&mut self, c: char) -> bool {
        self.edit(|d| d.insert_char(c))
    }

    /// Insert pasted text at the cursor.
    pub fn input_str(&mut self, s: &str) -> bool {
        self.edit(|d| d.insert_str(s))
    }

    pub fn input_backspace(&mut self) -> bool {
        self.edit(DisplayField::backspace)
    }

    pub fn input_delete(&mut self) -> bool {
        self.edit(DisplayField::delete)
    }

    pub fn cursor_left(&mut self) {
        self.display.move_left();
    }

    pub fn cursor_right(&mut self) {
        self.display.move_right();
    }

    pub fn cursor_home(&mut self) {
        self.display.move_home();
    }

    pub fn cursor_end(&mut self) {
        self.display.move_end();
    }

    /// Forward an editor action. Returns true if the listener handled it.
    pub fn editor_action(&mut self, action: EditorAction) -> bool {
        let Some(mut listener) = self.listeners.editor_action.take() else {
            return false;
        };
        let handled = listener.editor_action(self, action);
        if self.listeners.editor_action.is_none() {
            self.listeners.editor_action = Some(listener);
        }
        handled
    }

    // === Listeners ===

    pub fn set_value_changed_listener(&mut self, listener: impl ValueChangedListener + 'static) {
        self.listeners.value_changed = Some(Box::new(listener));
    }

    pub fn set_limit_exceeded_listener(&mut self, listener: impl LimitExceededListener + 'static) {
        self.listeners.limit_exceeded = Some(Box::new(listener));
    }

    pub fn set_focus_change_listener(&mut self, listener: impl FocusChangeListener + 'static) {
        self.listeners.focus_change = Some(Box::new(listener));
    }

    pub fn set_editor_action_listener(&mut self, listener: impl EditorActionListener + 'static) {
        self.listeners.editor_action = Some(Box::new(listener));
    }

    fn dispatch_value_changed(&mut self, value: i32, action: PickerAction) {
        if let Some(listener) = self.listeners.value_changed.as_mut() {
            listener.value_changed(value, action);
        }
    }

    // The listener is taken out while it runs so it can borrow the picker.
    // If it installs a replacement meanwhile, the replacement wins.

    fn dispatch_limit_exceeded(&mut self, limit: i32, attempted: i32) {
        if let Some(mut listener) = self.listeners.limit_exceeded.take() {
            listener.limit_exceeded(self, limit, attempted);
            if self.listeners.limit_exceeded.is_none() {
                self.listeners.limit_exceeded = Some(listener);
            }
        }
    }

    fn dispatch_focus_changed(&mut self, has_focus: bool) {
        if let Some(mut listener) = self.listeners.focus_change.take() {
            listener.focus_changed(self, has_focus);
            if self.listeners.focus_change.is_none() {
                self.listeners.focus_change = Some(listener);
            }
        }
    }
}
