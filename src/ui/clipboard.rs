use crate::error::ClipboardError;

use super::toast::Notice;

pub const COPY_SUCCEEDED: &str = "Code copied to clipboard!";
pub const COPY_FAILED: &str = "Copy failed";

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard. Opened once at startup; when that fails every
/// copy reports the same error.
pub struct SystemClipboard {
    backend: Result<arboard::Clipboard, ClipboardError>,
}

impl SystemClipboard {
    pub fn open() -> Self {
        Self::from_open_result(arboard::Clipboard::new())
    }

    fn from_open_result(result: Result<arboard::Clipboard, arboard::Error>) -> Self {
        let backend = result.map_err(|err| ClipboardError::Unavailable(err.to_string()));
        if let Err(err) = &backend {
            log::warn!("Copying code will not work: {err}");
        }
        Self { backend }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match &mut self.backend {
            Ok(clipboard) => clipboard
                .set_text(text)
                .map_err(|err| ClipboardError::Write(err.to_string())),
            Err(err) => Err(err.clone()),
        }
    }
}

/// Copy exactly `code` and describe the outcome. Never retried.
pub fn copy_code(clipboard: &mut dyn Clipboard, code: &str) -> Notice {
    match clipboard.write_text(code) {
        Ok(()) => {
            log::debug!("Copied {} bytes of code", code.len());
            Notice::success(COPY_SUCCEEDED)
        }
        Err(err) => {
            log::warn!("Failed to copy code: {err}");
            Notice::failure(COPY_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::NoticeKind;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.written.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn copies_the_exact_code_text() {
        let mut clipboard = RecordingClipboard::default();
        let notice = copy_code(&mut clipboard, "print(1)");
        assert_eq!(clipboard.written, vec!["print(1)".to_string()]);
        assert_eq!(notice, Notice::success(COPY_SUCCEEDED));
    }

    #[test]
    fn copied_block_excludes_fence_markers() {
        let blocks = crate::markdown::render("```python\nprint(1)\n```");
        let crate::markdown::Block::Code(code) = &blocks[0] else {
            panic!("expected a code block, got {blocks:?}");
        };
        let mut clipboard = RecordingClipboard::default();
        copy_code(&mut clipboard, &code.code);
        assert_eq!(clipboard.written, vec!["print(1)".to_string()]);
    }

    #[test]
    fn failure_is_reported_not_raised() {
        let notice = copy_code(&mut BrokenClipboard, "print(1)");
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(notice.text, COPY_FAILED);
    }

    #[test]
    fn unavailable_system_clipboard_reports_failure() {
        let mut clipboard =
            SystemClipboard::from_open_result(Err(arboard::Error::ClipboardNotSupported));

        let notice = copy_code(&mut clipboard, "print(1)");
        assert_eq!(notice, Notice::failure(COPY_FAILED));

        // Still failing on the next attempt; the backend is not reopened.
        assert!(matches!(
            clipboard.write_text("print(2)"),
            Err(ClipboardError::Unavailable(_))
        ));
    }
}
