use unicode_width::UnicodeWidthChar;

use super::{EditorCoordinate, EditorSurface, PointerEvent};

/// Pixel geometry of the monospace text grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
            padding_x: 4.0,
            padding_y: 4.0,
        }
    }
}

/// A scrolled view over plain text with an optional selection.
///
/// Serves as the editor capability for hosts that render text on a
/// monospace grid.
#[derive(Clone, Debug, Default)]
pub struct TextPane {
    lines: Vec<String>,
    metrics: CellMetrics,
    scroll_top: usize,
    selection: Option<(EditorCoordinate, EditorCoordinate)>,
}

impl TextPane {
    pub fn new(text: &str, metrics: CellMetrics) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            metrics,
            scroll_top: 0,
            selection: None,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sets the first visible line, clamped to the text.
    pub fn set_scroll_top(&mut self, line: usize) {
        self.scroll_top = line.min(self.lines.len().saturating_sub(1));
    }

    /// Selects from `anchor` to `head`; order does not matter.
    pub fn select(&mut self, anchor: EditorCoordinate, head: EditorCoordinate) {
        self.selection = Some((anchor, head));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Converts window pixels to a character column on `line`, rounding to
    /// the nearest character boundary.
    fn column_at(&self, line: &str, x: f64) -> u32 {
        let cell_width = self.metrics.cell_width.max(1.0);
        let cells = ((x - self.metrics.padding_x).max(0.0) + cell_width / 2.0) / cell_width;
        let target = cells as usize;

        let mut used = 0;
        let mut column = 0;
        for ch in line.chars() {
            let width = ch.width().unwrap_or(0);
            if used + width > target {
                break;
            }
            used += width;
            column += 1;
        }
        column
    }

    fn char_offset(line: &str, column: u32) -> usize {
        line.char_indices()
            .nth(column as usize)
            .map_or(line.len(), |(offset, _)| offset)
    }
}

impl EditorSurface for TextPane {
    fn pointer_to_coordinate(&self, event: &PointerEvent) -> EditorCoordinate {
        if self.lines.is_empty() {
            return EditorCoordinate::default();
        }
        let cell_height = self.metrics.cell_height.max(1.0);
        let row = ((event.position.y - self.metrics.padding_y).max(0.0) / cell_height) as usize;
        let line = self.scroll_top.saturating_add(row).min(self.lines.len() - 1);
        let column = self.column_at(&self.lines[line], event.position.x);
        EditorCoordinate::new(line as u32, column)
    }

    fn selection_text(&self) -> String {
        let Some((a, b)) = self.selection else {
            return String::new();
        };
        if self.lines.is_empty() {
            return String::new();
        }
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let last = self.lines.len() - 1;
        let start_line = (start.line as usize).min(last);
        let end_line = (end.line as usize).min(last);

        let mut text = String::new();
        for index in start_line..=end_line {
            let line = &self.lines[index];
            let from = if index == start_line {
                Self::char_offset(line, start.column)
            } else {
                0
            };
            let to = if index == end_line {
                Self::char_offset(line, end.column)
            } else {
                line.len()
            };
            if from < to {
                text.push_str(&line[from..to]);
            }
            if index < end_line {
                text.push('\n');
            }
        }
        text
    }

    fn has_selection(&self) -> bool {
        self.selection.is_some_and(|(a, b)| a != b)
    }
}
