//! The failure tree reported by a request-validation engine.
//!
//! An engine reports failures as a tree of mixed node kinds. [`ErrorNode`] is
//! the closed set of shapes that tree may take; anything an engine cannot
//! express with the structured variants is carried as [`ErrorNode::Raw`].

use std::fmt::{self, Display};

use crate::path::JsonPath;

/// The requiredness marker an engine attaches to a "required but absent" field.
pub const REQUIRED: &str = "required";

/// Where in an HTTP request a finding is located.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Query,
    Path,
    Header,
    Cookie,
    Body,
    /// The engine gave no usable location.
    Unknown,
    /// A location string the engine supplied that is not one of the above.
    Other(String),
}

impl Location {
    /// Parses an engine-supplied location. Empty input maps to [`Location::Unknown`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "query" => Location::Query,
            "path" => Location::Path,
            "header" => Location::Header,
            "cookie" => Location::Cookie,
            "body" => Location::Body,
            "" | "unknown" => Location::Unknown,
            other => Location::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Location::Query => "query",
            Location::Path => "path",
            Location::Header => "header",
            Location::Cookie => "cookie",
            Location::Body => "body",
            Location::Unknown => "unknown",
            Location::Other(raw) => raw,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Location::parse(raw)
    }
}

/// What part of the request a [`RequestError`] is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// A single named HTTP parameter (query, path, header or cookie).
    Parameter { location: Location, name: String },
    /// The request body as a whole; field detail lives in the inner error.
    Body,
    /// Neither a parameter nor the body.
    Unscoped,
}

/// A leaf schema violation against a value inside a parameter or body.
///
/// # Example
///
/// ```rust
/// use inquest::{FieldError, JsonPath};
///
/// let missing = FieldError::new(JsonPath::from_field("name"), "property \"name\" is missing")
///     .with_schema_field("required");
///
/// assert!(missing.is_required());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Keys and indices from the value root; empty when the value itself failed.
    pub path: JsonPath,
    /// The schema keyword that was violated, if the engine reports it.
    pub schema_field: Option<String>,
    /// Human-readable reason.
    pub reason: String,
}

impl FieldError {
    pub fn new(path: JsonPath, reason: impl Into<String>) -> Self {
        Self {
            path,
            schema_field: None,
            reason: reason.into(),
        }
    }

    /// Shorthand for a "required but absent" violation at `path`.
    pub fn required(path: JsonPath, reason: impl Into<String>) -> Self {
        Self::new(path, reason).with_schema_field(REQUIRED)
    }

    /// Sets the violated schema keyword and returns self for chaining.
    pub fn with_schema_field(mut self, field: impl Into<String>) -> Self {
        self.schema_field = Some(field.into());
        self
    }

    /// Returns true when the violation is a required value that is absent.
    pub fn is_required(&self) -> bool {
        self.schema_field.as_deref() == Some(REQUIRED)
    }
}

/// A failure scoped to one HTTP parameter or to the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    pub scope: Scope,
    /// The engine's own summary, kept for diagnostics only.
    pub reason: Option<String>,
    pub inner: Box<ErrorNode>,
}

impl RequestError {
    pub fn new(scope: Scope, inner: ErrorNode) -> Self {
        Self {
            scope,
            reason: None,
            inner: Box::new(inner),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// One node of an engine's failure tree.
///
/// # Example
///
/// ```rust
/// use inquest::{ErrorNode, FieldError, JsonPath, Location};
///
/// let tree = ErrorNode::aggregate(vec![
///     ErrorNode::parameter(Location::Query, "bip", ErrorNode::raw("number must be at least 1")),
///     ErrorNode::body(ErrorNode::aggregate(vec![
///         ErrorNode::field(FieldError::new(JsonPath::from_field("length"), "number must be at least 0")),
///     ])),
/// ]);
///
/// assert_eq!(tree.leaf_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorNode {
    /// Sibling failures bundled together, in engine order.
    Aggregate(Vec<ErrorNode>),
    /// A failure scoped to a parameter or to the body.
    Request(RequestError),
    /// Failed security requirements, one child per failed scheme.
    Security(Vec<ErrorNode>),
    /// A schema violation against a specific field or value.
    Field(FieldError),
    /// Anything else the engine reports.
    Raw(String),
}

impl ErrorNode {
    pub fn aggregate(children: Vec<ErrorNode>) -> Self {
        ErrorNode::Aggregate(children)
    }

    pub fn security(failures: Vec<ErrorNode>) -> Self {
        ErrorNode::Security(failures)
    }

    pub fn field(error: FieldError) -> Self {
        ErrorNode::Field(error)
    }

    pub fn raw(message: impl Into<String>) -> Self {
        ErrorNode::Raw(message.into())
    }

    /// Wraps `inner` in a failure scoped to the named parameter.
    pub fn parameter(location: Location, name: impl Into<String>, inner: ErrorNode) -> Self {
        ErrorNode::Request(RequestError::new(
            Scope::Parameter {
                location,
                name: name.into(),
            },
            inner,
        ))
    }

    /// Wraps `inner` in a failure scoped to the request body.
    pub fn body(inner: ErrorNode) -> Self {
        ErrorNode::Request(RequestError::new(Scope::Body, inner))
    }

    /// Counts the `Field` and `Raw` leaves reachable from this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            ErrorNode::Aggregate(children) | ErrorNode::Security(children) => {
                children.iter().map(ErrorNode::leaf_count).sum()
            }
            ErrorNode::Request(request) => request.inner.leaf_count(),
            ErrorNode::Field(_) | ErrorNode::Raw(_) => 1,
        }
    }

}

impl From<FieldError> for ErrorNode {
    fn from(error: FieldError) -> Self {
        ErrorNode::Field(error)
    }
}

impl From<RequestError> for ErrorNode {
    fn from(error: RequestError) -> Self {
        ErrorNode::Request(error)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorNode>();
    assert_sync::<ErrorNode>();
};
