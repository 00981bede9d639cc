//! Clipboard access for copying the value and pasting into the display.

use arboard::Clipboard;

use crate::error::Result;

/// Keep the numeric part of pasted text: surrounding whitespace and
/// thousands separators are dropped.
pub fn sanitize_paste(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | '\'' | ' '))
        .collect()
}

/// Put `text` on the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Read text from the system clipboard, if any.
pub fn read_text() -> Result<Option<String>> {
    let mut clipboard = Clipboard::new()?;
    match clipboard.get_text() {
        Ok(text) if !text.is_empty() => Ok(Some(text)),
        Ok(_) | Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_paste() {
        assert_eq!(sanitize_paste("  1,234\n"), "1234");
        assert_eq!(sanitize_paste("-1_000"), "-1000");
        assert_eq!(sanitize_paste("12 345"), "12345");
    }
}
