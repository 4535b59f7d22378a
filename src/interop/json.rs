//! JSON encoding of failure trees.
//!
//! Each node is an object with a single tag key:
//!
//! | tag | payload |
//! |---|---|
//! | `aggregate` | array of nodes |
//! | `security` | array of nodes, one per failed scheme |
//! | `request` | object: `in`, `name`, `body`, `reason`, `error`; a `name` without `in` has an unknown location |
//! | `schema` | object: `path` (array or pointer string), `schema_field`, `reason` |
//! | `message` | string |
//!
//! A bare string is a raw message and a bare array is an aggregate. Any other
//! shape decodes to a raw node holding the compact JSON text, so decoding
//! never fails.

use serde_json::{Map, Value};

use crate::error::{ErrorNode, FieldError, Location, RequestError, Scope};
use crate::path::{JsonPath, PathSegment};

/// Decodes a JSON failure tree.
///
/// # Example
///
/// ```rust
/// use inquest::interop::decode_node;
/// use inquest::flatten;
/// use serde_json::json;
///
/// let tree = decode_node(&json!({
///     "request": {
///         "body": true,
///         "error": {"aggregate": [
///             {"schema": {"path": ["name"], "schema_field": "required", "reason": "property \"name\" is missing"}}
///         ]}
///     }
/// }));
///
/// let errors = flatten(&tree);
/// assert_eq!(errors[0].to_string(), "request body: field \"name\" is required but missing");
/// ```
pub fn decode_node(value: &Value) -> ErrorNode {
    match value {
        Value::String(message) => ErrorNode::Raw(message.clone()),
        Value::Array(items) => ErrorNode::Aggregate(decode_all(items)),
        Value::Object(map) if map.len() == 1 => decode_tagged(map).unwrap_or_else(|| raw(value)),
        other => raw(other),
    }
}

impl ErrorNode {
    /// Shorthand for [`decode_node`].
    pub fn from_json(value: &Value) -> Self {
        decode_node(value)
    }
}

fn decode_tagged(map: &Map<String, Value>) -> Option<ErrorNode> {
    let (tag, payload) = map.iter().next()?;
    match (tag.as_str(), payload) {
        ("aggregate", Value::Array(items)) => Some(ErrorNode::Aggregate(decode_all(items))),
        ("security", Value::Array(items)) => Some(ErrorNode::Security(decode_all(items))),
        ("request", Value::Object(fields)) => Some(decode_request(fields)),
        ("schema", Value::Object(fields)) => decode_schema(fields),
        ("message", Value::String(message)) => Some(ErrorNode::Raw(message.clone())),
        _ => None,
    }
}

fn decode_all(items: &[Value]) -> Vec<ErrorNode> {
    items.iter().map(decode_node).collect()
}

fn decode_request(fields: &Map<String, Value>) -> ErrorNode {
    let location = fields.get("in").and_then(Value::as_str);
    let name = fields.get("name").and_then(Value::as_str);
    let is_body = fields.get("body").and_then(Value::as_bool).unwrap_or(false);

    let scope = match (location, name) {
        (location, Some(name)) => Scope::Parameter {
            location: location.map_or(Location::Unknown, Location::parse),
            name: name.to_string(),
        },
        _ if is_body => Scope::Body,
        _ => Scope::Unscoped,
    };
    let reason = fields.get("reason").and_then(Value::as_str);

    let inner = match fields.get("error") {
        Some(error) => decode_node(error),
        None => ErrorNode::raw(reason.unwrap_or("request error without detail")),
    };

    let mut request = RequestError::new(scope, inner);
    if let Some(reason) = reason {
        request = request.with_reason(reason);
    }
    ErrorNode::Request(request)
}

fn decode_schema(fields: &Map<String, Value>) -> Option<ErrorNode> {
    let path = match fields.get("path") {
        None | Some(Value::Null) => JsonPath::root(),
        Some(Value::String(pointer)) => JsonPath::from_pointer(pointer),
        Some(Value::Array(segments)) => JsonPath::from_segments(
            segments
                .iter()
                .map(decode_segment)
                .collect::<Option<Vec<_>>>()?,
        ),
        Some(_) => return None,
    };
    let reason = fields.get("reason").and_then(Value::as_str)?;

    let mut field = FieldError::new(path, reason);
    if let Some(schema_field) = fields.get("schema_field").and_then(Value::as_str) {
        field = field.with_schema_field(schema_field);
    }
    Some(ErrorNode::Field(field))
}

fn decode_segment(segment: &Value) -> Option<PathSegment> {
    match segment {
        Value::String(key) => Some(PathSegment::parse(key)),
        Value::Number(n) => n
            .as_u64()
            .and_then(|idx| usize::try_from(idx).ok())
            .map(PathSegment::Index),
        _ => None,
    }
}

fn raw(value: &Value) -> ErrorNode {
    ErrorNode::Raw(value.to_string())
}
