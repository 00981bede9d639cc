//! Increment/decrement number picker.
//!
//! - `number_picker` - the widget state and its operations
//! - `action` - action tags and editor actions
//! - `listener` - listener roles and their defaults
//! - `display` - the editable text buffer
//! - `gesture` - press tracking
//! - `repeat` - cancellable long-press repeat timer

mod action;
mod display;
mod gesture;
mod listener;
mod number_picker;
mod repeat;

pub use action::{EditorAction, PickerAction};
pub use display::DisplayField;
pub use gesture::PressState;
pub use listener::{
    DefaultEditorActionListener, DefaultFocusChangeListener, DefaultLimitExceededListener,
    DefaultValueChangedListener, EditorActionListener, FocusChangeListener,
    LimitExceededListener, ValueChangedListener,
};
pub use number_picker::{NumberPicker, MAX_CATCH_UP};
pub use repeat::{DueTick, RepeatTimer};
