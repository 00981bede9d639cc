//! UI components for the TUI.
//!
//! - `number_picker` - the picker itself (triggers + display)
//! - `status_panel` - bounds, timing and trigger state
//! - `event_log` - listener events as they happen
//! - `help_popup` - help overlay with keybindings

mod event_log;
mod help_popup;
mod number_picker;
mod status_panel;

pub use event_log::render_event_log;
pub use help_popup::render_help_popup;
pub use number_picker::{preferred_size, render_number_picker};
pub use status_panel::render_status_panel;
