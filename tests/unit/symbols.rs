use super::*;
use proptest::prelude::*;

const SOURCE: &str = "function outer() {\n  const x = 1;\n  function inner() {\n    return x;\n  }\n  return inner;\n}\n\nfunction later() {}\n";

fn func(name: &str, start: (u32, u32), end: (u32, u32)) -> FunctionSymbol {
    FunctionSymbol::new(
        name,
        Position::new(start.0, start.1),
        Position::new(end.0, end.1),
    )
}

fn sample_functions() -> Vec<FunctionSymbol> {
    vec![
        func("outer", (1, 0), (7, 1)),
        func("inner", (3, 2), (5, 3)),
        func("later", (9, 0), (9, 19)),
    ]
}

#[test]
fn empty_table_has_no_enclosing_function() {
    assert!(find_enclosing_function(3, &[]).is_none());
}

#[test]
fn line_before_every_function_has_no_match() {
    let functions = vec![func("f", (4, 0), (6, 1))];
    assert!(find_enclosing_function(2, &functions).is_none());
}

#[test]
fn innermost_function_wins() {
    let functions = sample_functions();
    assert_eq!(find_enclosing_function(4, &functions).unwrap().name, "inner");
}

#[test]
fn outer_function_matches_outside_inner_span() {
    let functions = sample_functions();
    assert_eq!(find_enclosing_function(2, &functions).unwrap().name, "outer");
    assert_eq!(find_enclosing_function(6, &functions).unwrap().name, "outer");
}

#[test]
fn end_line_is_inside_the_span() {
    let functions = sample_functions();
    assert_eq!(find_enclosing_function(5, &functions).unwrap().name, "inner");
    assert_eq!(find_enclosing_function(7, &functions).unwrap().name, "outer");
}

#[test]
fn line_between_functions_has_no_match() {
    let functions = sample_functions();
    assert!(find_enclosing_function(8, &functions).is_none());
}

#[test]
fn equal_start_lines_prefer_shorter_span() {
    let functions = vec![
        func("wide", (2, 0), (10, 1)),
        func("narrow", (2, 10), (3, 1)),
    ];
    assert_eq!(find_enclosing_function(3, &functions).unwrap().name, "narrow");
}

#[test]
fn equal_spans_prefer_later_start_column() {
    let functions = vec![
        func("callback_host", (2, 0), (2, 40)),
        func("callback", (2, 12), (2, 38)),
    ];
    assert_eq!(find_enclosing_function(2, &functions).unwrap().name, "callback");
}

#[test]
fn function_text_extracts_exact_span() {
    let functions = sample_functions();
    let text = find_function_text(4, SOURCE, &functions).expect("inner text");
    assert_eq!(text, "function inner() {\n    return x;\n  }");
}

#[test]
fn function_text_for_single_line_function() {
    let functions = sample_functions();
    assert_eq!(
        find_function_text(9, SOURCE, &functions).as_deref(),
        Some("function later() {}")
    );
}

#[test]
fn function_text_is_none_without_enclosing_function() {
    let functions = sample_functions();
    assert!(find_function_text(8, SOURCE, &functions).is_none());
}

#[test]
fn function_text_clamps_columns_past_line_end() {
    let functions = vec![func("f", (1, 0), (2, 500))];
    let text = find_function_text(1, "fn a\nbody\ntail", &functions);
    assert_eq!(text.as_deref(), Some("fn a\nbody"));
}

#[test]
fn function_text_counts_columns_in_characters() {
    let functions = vec![func("f", (1, 2), (1, 5))];
    let text = find_function_text(1, "é→abcdef", &functions);
    assert_eq!(text.as_deref(), Some("abc"));
}

#[test]
fn function_text_keeps_crlf_line_endings() {
    let functions = vec![func("f", (1, 0), (2, 1))];
    let text = find_function_text(1, "{\r\n}\r\n", &functions);
    assert_eq!(text.as_deref(), Some("{\r\n}"));
}

#[test]
fn symbol_table_delegates_to_lookup() {
    let table = SymbolTable::new(sample_functions());
    assert_eq!(table.enclosing_function(4).unwrap().name, "inner");
    assert!(table.function_text(4, SOURCE).is_some());
}

proptest! {
    #[test]
    fn no_match_when_every_function_starts_after_line(
        line in 1u32..500,
        offsets in prop::collection::vec((1u32..100, 0u32..50), 0..8),
    ) {
        let functions: Vec<_> = offsets
            .iter()
            .map(|&(gap, len)| func("f", (line + gap, 0), (line + gap + len, 1)))
            .collect();
        prop_assert!(find_enclosing_function(line, &functions).is_none());
    }

    #[test]
    fn later_start_wins_for_overlapping_spans(
        outer_start in 1u32..100,
        inner_gap in 1u32..50,
        inner_len in 0u32..50,
        tail in 0u32..50,
        probe in 0u32..50,
    ) {
        let inner_start = outer_start + inner_gap;
        let inner_end = inner_start + inner_len;
        let outer_end = inner_end + tail;
        let line = inner_start + probe.min(inner_len);
        let functions = vec![
            func("outer", (outer_start, 0), (outer_end, 1)),
            func("inner", (inner_start, 0), (inner_end, 1)),
        ];
        let found = find_enclosing_function(line, &functions).expect("a function encloses the line");
        prop_assert_eq!(found.name.as_str(), "inner");
    }
}
