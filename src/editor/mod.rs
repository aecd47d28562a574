mod pane;

use serde::{Deserialize, Serialize};

use crate::source::{SourceId, SourceLocation};

pub use pane::{CellMetrics, TextPane};

/// Screen position in logical pixels, relative to the editor window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

/// The pointer event that opened a context menu.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: ScreenPosition,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: ScreenPosition { x, y },
        }
    }
}

/// A 0-based line/column inside the editor's displayed text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorCoordinate {
    pub line: u32,
    pub column: u32,
}

impl EditorCoordinate {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// 1-based line number as used by sources and symbols.
    pub fn source_line(&self) -> u32 {
        self.line + 1
    }
}

/// Capabilities the host editor widget provides.
pub trait EditorSurface {
    /// Maps a pointer event to the nearest valid coordinate. Never fails;
    /// events outside the rendered text clamp to its bounds.
    fn pointer_to_coordinate(&self, event: &PointerEvent) -> EditorCoordinate;

    /// Raw selected text, untrimmed. Empty when nothing is selected.
    fn selection_text(&self) -> String;

    fn has_selection(&self) -> bool;
}

/// Maps a displayed position back to the text it was rendered from.
pub trait LineMapper {
    fn to_original_line(&self, displayed_line: u32) -> u32;

    /// 1-based column in the original text. Defaults to the displayed column.
    fn to_original_column(&self, _displayed_line: u32, displayed_column: u32) -> u32 {
        displayed_column
    }
}

/// Line mapping for raw sources, where displayed and original lines agree.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityLines;

impl LineMapper for IdentityLines {
    fn to_original_line(&self, displayed_line: u32) -> u32 {
        displayed_line
    }
}

/// Pretty-print line table: entry `i` is the original line rendered at
/// displayed line `i + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrettyLineTable {
    original_lines: Vec<u32>,
}

impl PrettyLineTable {
    pub fn new(original_lines: Vec<u32>) -> Self {
        Self { original_lines }
    }
}

impl LineMapper for PrettyLineTable {
    fn to_original_line(&self, displayed_line: u32) -> u32 {
        let index = displayed_line.saturating_sub(1) as usize;
        match self.original_lines.get(index) {
            Some(&line) => line,
            None => self.original_lines.last().copied().unwrap_or(displayed_line),
        }
    }

    /// Pretty-printing reflows whitespace, so displayed columns say nothing
    /// about the original text. Points at the start of the original line.
    fn to_original_column(&self, _displayed_line: u32, _displayed_column: u32) -> u32 {
        1
    }
}

/// Resolves the source location under a pointer event.
///
/// The position passes through `lines`, so callers viewing a pretty-printed
/// rendering get a position in the text it was generated from. `source_id`
/// must name that text.
pub fn resolve_source_location(
    event: &PointerEvent,
    editor: &dyn EditorSurface,
    source_id: &SourceId,
    lines: &dyn LineMapper,
) -> SourceLocation {
    let coord = editor.pointer_to_coordinate(event);
    tracing::trace!(
        x = event.position.x,
        y = event.position.y,
        editor_line = coord.line,
        "resolved context menu pointer"
    );
    locate_coordinate(coord, source_id, lines)
}

/// Converts an editor coordinate to a 1-based location in `source_id`.
pub fn locate_coordinate(
    coord: EditorCoordinate,
    source_id: &SourceId,
    lines: &dyn LineMapper,
) -> SourceLocation {
    let displayed_line = coord.source_line();
    SourceLocation {
        source_id: source_id.clone(),
        line: lines.to_original_line(displayed_line),
        column: lines.to_original_column(displayed_line, coord.column + 1),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor.rs"]
mod tests;
