use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

/// A point reported by the symbol parser: 1-based line, 0-based column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Number of lines covered beyond the first.
    fn line_extent(&self) -> u32 {
        self.end.line.saturating_sub(self.start.line)
    }

    /// Line containment with an unbounded column: only the line numbers matter.
    fn contains_line(&self, line: u32) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: String,
    pub location: Span,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            name: name.into(),
            location: Span { start, end },
        }
    }
}

/// Parsed symbols of one source. Functions keep parser order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    pub functions: Vec<FunctionSymbol>,
}

impl SymbolTable {
    pub fn new(functions: Vec<FunctionSymbol>) -> Self {
        Self { functions }
    }

    pub fn enclosing_function(&self, line: u32) -> Option<&FunctionSymbol> {
        find_enclosing_function(line, &self.functions)
    }

    pub fn function_text(&self, line: u32, source_text: &str) -> Option<String> {
        find_function_text(line, source_text, &self.functions)
    }
}

/// Finds the innermost function enclosing `line`.
///
/// The latest-starting candidate wins; on equal start lines the shorter span
/// wins, then the later start column.
pub fn find_enclosing_function(line: u32, functions: &[FunctionSymbol]) -> Option<&FunctionSymbol> {
    functions
        .iter()
        .filter(|func| func.location.contains_line(line))
        .max_by_key(|func| {
            let span = &func.location;
            (span.start.line, Reverse(span.line_extent()), span.start.column)
        })
}

/// Returns the exact source text of the function enclosing `line`.
pub fn find_function_text(line: u32, source_text: &str, functions: &[FunctionSymbol]) -> Option<String> {
    let func = find_enclosing_function(line, functions)?;
    let start = byte_offset(source_text, func.location.start)?;
    let end = byte_offset(source_text, func.location.end)?;
    if start >= end {
        return None;
    }
    Some(source_text[start..end].to_string())
}

/// Converts a parser position to a byte offset, clamping the column to the
/// line's content. Returns `None` for lines past the end of the text.
fn byte_offset(text: &str, pos: Position) -> Option<usize> {
    let index = pos.line.checked_sub(1)? as usize;
    let mut line_start = 0;
    for (i, raw_line) in text.split_inclusive('\n').enumerate() {
        if i == index {
            let content = raw_line.trim_end_matches(['\n', '\r']);
            let within = content
                .char_indices()
                .nth(pos.column as usize)
                .map_or(content.len(), |(offset, _)| offset);
            return Some(line_start + within);
        }
        line_start += raw_line.len();
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/symbols.rs"]
mod tests;
