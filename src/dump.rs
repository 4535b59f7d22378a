//! Indented, one-node-per-line rendering of a failure tree.
//!
//! This is a debugging aid. It shows the tree exactly as the engine reported
//! it; nothing should parse its output.

use crate::error::{ErrorNode, Scope};

/// Returns a lazy iterator over the lines describing `node` and its subtree.
///
/// Lines are produced in pre-order. Every line starts with `indent`, plus two
/// spaces per nesting level.
///
/// # Example
///
/// ```rust
/// use inquest::{dump, ErrorNode, Location};
///
/// let tree = ErrorNode::aggregate(vec![
///     ErrorNode::parameter(Location::Query, "bip", ErrorNode::raw("must be at least 1")),
/// ]);
///
/// let lines: Vec<String> = dump(&tree, "").collect();
/// assert_eq!(lines, vec![
///     "Aggregate (len 1)",
///     "  Request: {scope: query \"bip\", reason: none}",
///     "    Raw: \"must be at least 1\"",
/// ]);
/// ```
pub fn dump<'a>(node: &'a ErrorNode, indent: &str) -> Dump<'a> {
    Dump {
        stack: vec![(node, 0)],
        indent: indent.to_string(),
    }
}

/// Iterator returned by [`dump`].
pub struct Dump<'a> {
    stack: Vec<(&'a ErrorNode, usize)>,
    indent: String,
}

impl<'a> Iterator for Dump<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (node, depth) = self.stack.pop()?;
        match node {
            ErrorNode::Aggregate(children) | ErrorNode::Security(children) => {
                self.stack
                    .extend(children.iter().rev().map(|child| (child, depth + 1)));
            }
            ErrorNode::Request(request) => self.stack.push((request.inner.as_ref(), depth + 1)),
            ErrorNode::Field(_) | ErrorNode::Raw(_) => {}
        }
        Some(format!(
            "{}{}{}",
            self.indent,
            "  ".repeat(depth),
            describe(node)
        ))
    }
}

fn describe(node: &ErrorNode) -> String {
    match node {
        ErrorNode::Aggregate(children) => format!("Aggregate (len {})", children.len()),
        ErrorNode::Security(failures) => format!("Security ({} errors)", failures.len()),
        ErrorNode::Request(request) => {
            let scope = match &request.scope {
                Scope::Parameter { location, name } => format!("{} {:?}", location, name),
                Scope::Body => "body".to_string(),
                Scope::Unscoped => "none".to_string(),
            };
            format!(
                "Request: {{scope: {}, reason: {}}}",
                scope,
                quoted_or_none(request.reason.as_deref())
            )
        }
        ErrorNode::Field(field) => format!(
            "Field: {{path: {:?}, schema_field: {}, reason: {:?}}}",
            field.path.to_string(),
            quoted_or_none(field.schema_field.as_deref()),
            field.reason
        ),
        ErrorNode::Raw(message) => format!("Raw: {:?}", message),
    }
}

fn quoted_or_none(value: Option<&str>) -> String {
    value.map_or_else(|| "none".to_string(), |v| format!("{:?}", v))
}
