use crate::source::{SourceDescriptor, SourceId, SourceLocation};

/// Inclusive range of 1-based lines to highlight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRange {
    pub source_id: SourceId,
    pub start: u32,
    pub end: u32,
}

/// What a menu item does when clicked. Plain data, so a built menu can be
/// compared and replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    CopyText(String),
    /// Flash the function's lines, then copy its text.
    CopyFunction { range: LineRange, text: String },
    JumpToMappedLocation(SourceLocation),
    RevealInTree(SourceId),
    ToggleBlackBox(SourceDescriptor),
    AddWatchExpression(String),
}

/// Side-effecting callbacks supplied by the host debugger.
pub trait EditorActions {
    fn copy_text(&mut self, text: &str);
    fn flash_line_range(&mut self, range: &LineRange);
    fn jump_to_location(&mut self, location: &SourceLocation);
    fn reveal_in_tree(&mut self, source_id: &SourceId);
    fn toggle_black_box(&mut self, source: &SourceDescriptor);
    fn add_watch_expression(&mut self, text: &str);
}

impl EditorCommand {
    pub fn execute(&self, actions: &mut dyn EditorActions) {
        match self {
            EditorCommand::CopyText(text) => actions.copy_text(text),
            EditorCommand::CopyFunction { range, text } => {
                actions.flash_line_range(range);
                actions.copy_text(text);
            }
            EditorCommand::JumpToMappedLocation(location) => actions.jump_to_location(location),
            EditorCommand::RevealInTree(source_id) => actions.reveal_in_tree(source_id),
            EditorCommand::ToggleBlackBox(source) => actions.toggle_black_box(source),
            EditorCommand::AddWatchExpression(text) => actions.add_watch_expression(text),
        }
    }
}
