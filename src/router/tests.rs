use super::core::{normalize, parse_segments, Segment};

#[test]
fn test_normalize_strips_separators() {
    assert_eq!(normalize("api", "items"), "api/items");
    assert_eq!(normalize("/api/", "/items/"), "api/items");
    assert_eq!(normalize("api//v1", "items"), "api/v1/items");
}

#[test]
fn test_normalize_empty_suffix_maps_to_bare_prefix() {
    assert_eq!(normalize("health", ""), "health");
    assert_eq!(normalize("/health/", ""), "health");
}

#[test]
fn test_normalize_empty_prefix_and_suffix() {
    assert_eq!(normalize("", ""), "");
    assert_eq!(normalize("", "items"), "items");
}

#[test]
fn test_parse_segments_literals_and_variables() {
    let segments = parse_segments("users/{id}/posts");
    assert_eq!(
        segments,
        vec![
            Segment::Literal("users".to_string()),
            Segment::Variable("id".into()),
            Segment::Literal("posts".to_string()),
        ]
    );
}

#[test]
fn test_parse_segments_empty_template_is_single_empty_literal() {
    assert_eq!(parse_segments(""), vec![Segment::Literal(String::new())]);
}

#[test]
fn test_parse_segments_unterminated_variable_keeps_name() {
    assert_eq!(parse_segments("{id"), vec![Segment::Variable("id".into())]);
}
