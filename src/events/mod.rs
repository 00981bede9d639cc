//! Event handling module for keyboard, mouse, paste and focus events.
//!
//! Handlers only translate terminal events into [`Action`]s; the App
//! applies them to the picker.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
