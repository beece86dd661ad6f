//! Clipboard operations for the contact links.
//!
//! A terminal cannot follow a link, so the link controls copy their URL.
//! Failures come back as status text; the wizard keeps running when the
//! clipboard is unreachable (SSH sessions, headless environments).

use crate::error::FitError;

/// Copy `text` and describe the outcome for the status line.
pub fn copy_to_clipboard(text: &str, description: &str) -> String {
    match try_copy(text) {
        Ok(()) => format!("Copied {} to clipboard: {}", description, text),
        Err(e) => {
            tracing::debug!("{}", e);
            format!("{} (clipboard unavailable: {})", text, e)
        }
    }
}

fn try_copy(text: &str) -> Result<(), FitError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| FitError::clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| FitError::clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_always_mentions_the_link() {
        // The clipboard may or may not exist in CI; either way the link is shown.
        let message = copy_to_clipboard("mailto:someone@example.com", "email link");
        assert!(message.contains("mailto:someone@example.com"));
    }
}
