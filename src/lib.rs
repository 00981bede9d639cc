//! A terminal increment/decrement number picker.
//!
//! [`picker::NumberPicker`] holds the widget state and can be embedded in
//! any event loop; [`tui`] renders it with ratatui, and the `numpick`
//! binary is a small host application around both.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod tui;

pub use config::{Config, PickerConfig};
pub use error::{PickerError, Result};
pub use picker::{NumberPicker, PickerAction};
