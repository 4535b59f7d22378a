//! Flattening of engine failure trees into located findings.
//!
//! [`flatten`] walks an [`ErrorNode`] tree depth-first, left to right, and
//! emits one [`ValidationError`] per `Field` or `Raw` leaf. Containers
//! (`Aggregate`, `Security`) only contribute their children. A `Request` node
//! scopes everything beneath it to a parameter or to the body, unless a deeper
//! `Request` node scopes it first.
//!
//! Flattening never fails: a leaf that cannot be tied to a location becomes a
//! finding with [`Location::Unknown`], carrying the first line of its message.

use crate::error::{ErrorNode, FieldError, Location, RequestError, Scope, ValidationError};

/// Flattens a failure tree into an ordered list of findings.
///
/// # Example
///
/// ```rust
/// use inquest::{flatten, ErrorNode, FieldError, JsonPath, Location};
///
/// let tree = ErrorNode::aggregate(vec![
///     ErrorNode::parameter(Location::Query, "bip", ErrorNode::raw("number must be at least 1")),
///     ErrorNode::body(ErrorNode::aggregate(vec![
///         ErrorNode::field(FieldError::required(JsonPath::from_field("name"), "property \"name\" is missing")),
///     ])),
/// ]);
///
/// let errors = flatten(&tree);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].to_string(), "query parameter \"bip\": number must be at least 1");
/// assert_eq!(errors[1].to_string(), "request body: field \"name\" is required but missing");
/// ```
pub fn flatten(root: &ErrorNode) -> Vec<ValidationError> {
    let mut out = Vec::with_capacity(root.leaf_count());
    flatten_into(root, None, &mut out);
    out
}

impl ErrorNode {
    /// Shorthand for [`flatten`].
    pub fn flatten(&self) -> Vec<ValidationError> {
        flatten(self)
    }
}

fn flatten_into(node: &ErrorNode, scope: Option<&Target<'_>>, out: &mut Vec<ValidationError>) {
    match node {
        // Each failed scheme stands alone; there is no shared auth location.
        ErrorNode::Aggregate(children) | ErrorNode::Security(children) => {
            for child in children {
                flatten_into(child, scope, out);
            }
        }
        ErrorNode::Request(request) => match Target::of(request) {
            // The innermost parameter or body wins over any enclosing one.
            Some(target) => flatten_into(&request.inner, Some(&target), out),
            None => flatten_into(&request.inner, scope, out),
        },
        ErrorNode::Field(field) => out.push(match scope {
            Some(target) => target.field_record(field),
            None => field_record(Location::Unknown, field.path.to_string(), field),
        }),
        ErrorNode::Raw(message) => out.push(match scope {
            Some(target) => target.raw_record(message),
            None => ValidationError::unclassified(message),
        }),
    }
}

/// The parameter or body a `Request` node scopes its inner failures to.
struct Target<'a> {
    location: Location,
    /// `None` for the body.
    parameter: Option<&'a str>,
}

impl<'a> Target<'a> {
    /// Returns `None` for an unscoped request.
    fn of(request: &'a RequestError) -> Option<Self> {
        match &request.scope {
            Scope::Parameter { location, name } => Some(Target {
                location: location.clone(),
                parameter: Some(name.as_str()),
            }),
            Scope::Body => Some(Target {
                location: Location::Body,
                parameter: None,
            }),
            Scope::Unscoped => None,
        }
    }

    fn field_record(&self, field: &FieldError) -> ValidationError {
        let name = match self.parameter {
            Some(name) => name.to_string(),
            None => field.path.to_string(),
        };
        field_record(self.location.clone(), name, field)
    }

    fn raw_record(&self, message: &str) -> ValidationError {
        ValidationError::new(self.location.clone(), self.parameter.unwrap_or(""), message)
    }
}

fn field_record(location: Location, name: String, field: &FieldError) -> ValidationError {
    if field.is_required() {
        ValidationError::missing(location, name, &field.reason)
    } else {
        ValidationError::new(location, name, &field.reason)
    }
}
