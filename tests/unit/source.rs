use super::*;

#[test]
fn original_ids_are_detected_by_marker() {
    assert!(SourceId::new("server1.conn1.child1/originalSource-31").is_original());
    assert!(!SourceId::new("server1.conn1.child1/source27").is_original());
}

#[test]
fn descriptor_derives_pretty_flag_from_url() {
    let pretty = SourceDescriptor::new("s1", "http://example.com/app.js:formatted");
    assert!(pretty.is_pretty_printed);

    let raw = SourceDescriptor::new("s1", "http://example.com/app.js");
    assert!(!raw.is_pretty_printed);
}

#[test]
fn empty_source_map_url_does_not_count_as_mapped() {
    let source = SourceDescriptor::new("s1", "app.js").with_source_map("");
    assert!(!source.has_source_map());

    let mapped = SourceDescriptor::new("s1", "app.js").with_source_map("app.js.map");
    assert!(mapped.has_source_map());
}

#[test]
fn raw_url_strips_query_string() {
    assert_eq!(
        raw_source_url("http://example.com/app.js?v=1234&x=y"),
        "http://example.com/app.js"
    );
}

#[test]
fn raw_url_strips_pretty_suffix() {
    assert_eq!(
        raw_source_url("http://example.com/app.js:formatted"),
        "http://example.com/app.js"
    );
}

#[test]
fn raw_url_leaves_plain_urls_untouched() {
    assert_eq!(raw_source_url("file:///tmp/a.js"), "file:///tmp/a.js");
    assert_eq!(raw_source_url(""), "");
}
