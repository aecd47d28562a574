use crate::error::Result;
use crate::menu::{EditorActions, LineRange};
use crate::source::{SourceDescriptor, SourceId, SourceLocation};

/// Write access to a clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// Copies `text`, logging instead of failing. Menu actions are
/// fire-and-forget.
pub fn copy_to_clipboard(clipboard: &mut dyn Clipboard, text: &str) {
    if let Err(e) = clipboard.set_text(text) {
        tracing::warn!("Failed to copy to clipboard: {e}");
    }
}

/// Routes menu copies to a clipboard and every other action to the host.
///
/// The host's own `copy_text` is never called.
pub struct ClipboardActions<'a> {
    clipboard: &'a mut dyn Clipboard,
    host: &'a mut dyn EditorActions,
}

impl<'a> ClipboardActions<'a> {
    pub fn new(clipboard: &'a mut dyn Clipboard, host: &'a mut dyn EditorActions) -> Self {
        Self { clipboard, host }
    }
}

impl EditorActions for ClipboardActions<'_> {
    fn copy_text(&mut self, text: &str) {
        copy_to_clipboard(self.clipboard, text);
    }

    fn flash_line_range(&mut self, range: &LineRange) {
        self.host.flash_line_range(range);
    }

    fn jump_to_location(&mut self, location: &SourceLocation) {
        self.host.jump_to_location(location);
    }

    fn reveal_in_tree(&mut self, source_id: &SourceId) {
        self.host.reveal_in_tree(source_id);
    }

    fn toggle_black_box(&mut self, source: &SourceDescriptor) {
        self.host.toggle_black_box(source);
    }

    fn add_watch_expression(&mut self, text: &str) {
        self.host.add_watch_expression(text);
    }
}
