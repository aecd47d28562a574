use super::*;

const TEXT: &str = "let a = 1;\nfunction f() {\n  return a;\n}";

fn metrics() -> CellMetrics {
    CellMetrics {
        cell_width: 10.0,
        cell_height: 20.0,
        padding_x: 0.0,
        padding_y: 0.0,
    }
}

fn pane() -> TextPane {
    TextPane::new(TEXT, metrics())
}

#[test]
fn pointer_maps_to_line_and_column() {
    let pane = pane();
    // Row 1, left half of the fourth cell.
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(32.0, 25.0));
    assert_eq!(coord, EditorCoordinate::new(1, 3));
}

#[test]
fn pointer_rounds_to_nearest_character_boundary() {
    let pane = pane();
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(37.0, 5.0));
    assert_eq!(coord, EditorCoordinate::new(0, 4));
}

#[test]
fn pointer_below_text_clamps_to_last_line() {
    let pane = pane();
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(0.0, 10_000.0));
    assert_eq!(coord.line, 3);
}

#[test]
fn pointer_above_and_left_of_text_clamps_to_origin() {
    let pane = pane();
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(-50.0, -50.0));
    assert_eq!(coord, EditorCoordinate::new(0, 0));
}

#[test]
fn pointer_past_line_end_clamps_to_line_length() {
    let pane = pane();
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(5_000.0, 65.0));
    assert_eq!(coord, EditorCoordinate::new(3, 1));
}

#[test]
fn scroll_offset_shifts_lines() {
    let mut pane = pane();
    pane.set_scroll_top(2);
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(0.0, 5.0));
    assert_eq!(coord.line, 2);
}

#[test]
fn scrolled_pane_clamps_pointer_at_infinity() {
    let mut pane = pane();
    pane.set_scroll_top(2);
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(0.0, f64::INFINITY));
    assert_eq!(coord, EditorCoordinate::new(3, 0));
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(f64::INFINITY, f64::NAN));
    assert_eq!(coord, EditorCoordinate::new(2, 11));
}

#[test]
fn wide_characters_take_two_cells() {
    let pane = TextPane::new("中文ab", metrics());
    // Columns count characters, not cells.
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(41.0, 5.0));
    assert_eq!(coord.column, 2);
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(21.0, 5.0));
    assert_eq!(coord.column, 1);
}

#[test]
fn empty_pane_resolves_to_origin() {
    let pane = TextPane::new("", metrics());
    let coord = pane.pointer_to_coordinate(&PointerEvent::at(100.0, 100.0));
    assert_eq!(coord, EditorCoordinate::default());
}

#[test]
fn selection_text_spans_lines() {
    let mut pane = pane();
    pane.select(EditorCoordinate::new(1, 9), EditorCoordinate::new(2, 8));
    assert_eq!(pane.selection_text(), "f() {\n  return");
    assert!(pane.has_selection());
}

#[test]
fn reversed_selection_is_normalized() {
    let mut pane = pane();
    pane.select(EditorCoordinate::new(0, 5), EditorCoordinate::new(0, 4));
    assert_eq!(pane.selection_text(), "a");
}

#[test]
fn collapsed_selection_is_not_a_selection() {
    let mut pane = pane();
    pane.select(EditorCoordinate::new(0, 2), EditorCoordinate::new(0, 2));
    assert!(!pane.has_selection());
    assert_eq!(pane.selection_text(), "");

    pane.clear_selection();
    assert!(!pane.has_selection());
}

#[test]
fn identity_lines_keep_line_numbers() {
    assert_eq!(IdentityLines.to_original_line(42), 42);
}

#[test]
fn pretty_table_maps_displayed_lines_back() {
    let table = PrettyLineTable::new(vec![1, 1, 1, 2, 2]);
    assert_eq!(table.to_original_line(1), 1);
    assert_eq!(table.to_original_line(4), 2);
}

#[test]
fn pretty_table_clamps_past_its_end() {
    let table = PrettyLineTable::new(vec![1, 3]);
    assert_eq!(table.to_original_line(10), 3);
    assert_eq!(PrettyLineTable::default().to_original_line(7), 7);
}

#[test]
fn resolve_converts_to_one_based_location() {
    let pane = pane();
    let source_id = SourceId::new("source-1");
    let location = resolve_source_location(
        &PointerEvent::at(32.0, 25.0),
        &pane,
        &source_id,
        &IdentityLines,
    );
    assert_eq!(
        location,
        SourceLocation {
            source_id,
            line: 2,
            column: 4,
        }
    );
}

#[test]
fn resolve_maps_pretty_lines_through_table() {
    let pane = pane();
    let table = PrettyLineTable::new(vec![1, 1, 1, 1]);
    let location = resolve_source_location(
        &PointerEvent::at(0.0, 65.0),
        &pane,
        &SourceId::new("source-1/pretty"),
        &table,
    );
    assert_eq!(location.line, 1);
    assert_eq!(location.column, 1);
}

#[test]
fn locate_keeps_columns_for_raw_sources() {
    let location = locate_coordinate(
        EditorCoordinate::new(4, 7),
        &SourceId::new("source-1"),
        &IdentityLines,
    );
    assert_eq!((location.line, location.column), (5, 8));
}

#[test]
fn locate_points_pretty_positions_at_original_line_start() {
    let table = PrettyLineTable::new(vec![3, 3, 4]);
    let location = locate_coordinate(
        EditorCoordinate::new(1, 12),
        &SourceId::new("source-1"),
        &table,
    );
    assert_eq!(location.source_id, SourceId::new("source-1"));
    assert_eq!((location.line, location.column), (3, 1));
}
