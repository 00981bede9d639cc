//! Editable numeric display field.
//!
//! A plain text buffer with a cursor. It knows nothing about bounds: the
//! picker parses the text after every edit and decides what to commit.

/// Whether `c` may be typed into the display.
fn accepts(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '+'
}

/// Text buffer backing the picker's display.
///
/// Only ASCII digits and signs are accepted, so byte and character
/// offsets coincide.
#[derive(Debug, Clone, Default)]
pub struct DisplayField {
    text: String,
    cursor: usize,
    focusable: bool,
    focused: bool,
}

impl DisplayField {
    pub fn new(text: impl Into<String>, focusable: bool) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            focusable,
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Parse the current text. Empty or malformed text yields `None`.
    pub fn parse(&self) -> Option<i32> {
        self.text.trim().parse().ok()
    }

    /// Replace the whole text and move the cursor to the end.
    ///
    /// Used for refreshes from the committed value, so no filtering applies.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Insert a character at the cursor. Returns false if it was rejected.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !accepts(c) {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Insert every acceptable character of `s` at the cursor.
    ///
    /// Returns false if nothing was inserted.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let filtered: String = s.chars().filter(|c| accepts(*c)).collect();
        if filtered.is_empty() {
            return false;
        }
        self.text.insert_str(self.cursor, &filtered);
        self.cursor += filtered.len();
        true
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        true
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_parse() {
        let mut field = DisplayField::new("", true);
        assert_eq!(field.parse(), None);

        assert!(field.insert_char('-'));
        assert_eq!(field.parse(), None);

        assert!(field.insert_char('5'));
        assert_eq!(field.text(), "-5");
        assert_eq!(field.parse(), Some(-5));
    }

    #[test]
    fn test_rejects_non_numeric_chars() {
        let mut field = DisplayField::new("12", true);
        assert!(!field.insert_char('a'));
        assert!(!field.insert_char(' '));
        assert_eq!(field.text(), "12");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_insert_str_filters() {
        let mut field = DisplayField::new("", true);
        assert!(field.insert_str(" 4,2 "));
        assert_eq!(field.text(), "42");
        assert!(!field.insert_str("abc"));
    }

    #[test]
    fn test_cursor_editing() {
        let mut field = DisplayField::new("123", true);
        field.move_left();
        assert!(field.backspace());
        assert_eq!(field.text(), "13");
        assert_eq!(field.cursor(), 1);

        field.move_home();
        assert!(!field.backspace());
        assert!(field.delete());
        assert_eq!(field.text(), "3");

        field.move_end();
        assert!(!field.delete());
        field.move_right();
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_overflowing_text_does_not_parse() {
        let field = DisplayField::new("99999999999", true);
        assert_eq!(field.parse(), None);
    }
}
