//! Integration tests for field paths.

use inquest::{JsonPath, PathSegment};

#[test]
fn test_pointer_renders_without_leading_slash() {
    let path = JsonPath::from_pointer("/pizza/toppings/1");
    assert_eq!(path.to_string(), "pizza/toppings/1");
    assert_eq!(path.len(), 3);
}

#[test]
fn test_built_path_matches_parsed_pointer() {
    let built = JsonPath::root()
        .push_field("pizza")
        .push_field("toppings")
        .push_index(1);
    assert_eq!(built, JsonPath::from_pointer("/pizza/toppings/1"));
}

#[test]
fn test_from_segments() {
    let path = JsonPath::from_segments(vec![PathSegment::field("items"), PathSegment::index(7)]);
    assert_eq!(path.to_string(), "items/7");
}

#[test]
fn test_negative_number_is_a_key() {
    let path = JsonPath::from_pointer("-1");
    assert_eq!(path.last(), Some(&PathSegment::field("-1")));
}

#[test]
fn test_root_displays_empty() {
    assert_eq!(JsonPath::root().to_string(), "");
    assert!(JsonPath::from_field("a").last().is_some());
}

#[test]
fn test_slash_pointer_names_the_empty_key() {
    let path = JsonPath::from_pointer("/");
    assert!(!path.is_root());
    assert_eq!(path.segments().collect::<Vec<_>>(), vec![&PathSegment::field("")]);

    let nested = JsonPath::from_pointer("/a//b");
    assert_eq!(nested.len(), 3);
    assert_eq!(nested.to_string(), "a//b");
}
