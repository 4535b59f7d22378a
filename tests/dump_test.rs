//! Integration tests for the diagnostic tree dump.

use inquest::{dump, ErrorNode, FieldError, JsonPath, Location, RequestError, Scope};

fn sample_tree() -> ErrorNode {
    ErrorNode::aggregate(vec![
        RequestError::new(
            Scope::Parameter {
                location: Location::Query,
                name: "bip".to_string(),
            },
            ErrorNode::aggregate(vec![ErrorNode::field(
                FieldError::new(JsonPath::root(), "value must be an integer")
                    .with_schema_field("type"),
            )]),
        )
        .with_reason("doesn't match schema")
        .into(),
        ErrorNode::body(ErrorNode::aggregate(vec![ErrorNode::field(
            FieldError::required(JsonPath::from_field("name"), "property \"name\" is missing"),
        )])),
        ErrorNode::security(vec![ErrorNode::raw("no session cookie present")]),
    ])
}

#[test]
fn test_dump_mirrors_tree() {
    let lines: Vec<String> = dump(&sample_tree(), "").collect();

    assert_eq!(
        lines,
        vec![
            "Aggregate (len 3)",
            "  Request: {scope: query \"bip\", reason: \"doesn't match schema\"}",
            "    Aggregate (len 1)",
            "      Field: {path: \"\", schema_field: \"type\", reason: \"value must be an integer\"}",
            "  Request: {scope: body, reason: none}",
            "    Aggregate (len 1)",
            "      Field: {path: \"name\", schema_field: \"required\", reason: \"property \\\"name\\\" is missing\"}",
            "  Security (1 errors)",
            "    Raw: \"no session cookie present\"",
        ]
    );
}

#[test]
fn test_every_node_appears_once() {
    let tree = sample_tree();
    // 3 containers at depth 1, 2 inner aggregates, 3 leaves, plus the root.
    assert_eq!(dump(&tree, "").count(), 9);
}

#[test]
fn test_children_are_more_indented_than_parents() {
    let tree = sample_tree();
    let depths: Vec<usize> = dump(&tree, "")
        .map(|line| line.len() - line.trim_start().len())
        .collect();

    assert_eq!(depths[0], 0);
    for pair in depths.windows(2) {
        // Pre-order: the next line is either a child (one level deeper) or a
        // sibling/ancestor's sibling (same level or shallower).
        assert!(pair[1] <= pair[0] + 2);
    }
    assert!(depths[1..].iter().all(|&d| d > 0));
}
