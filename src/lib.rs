//! # Inquest
//!
//! Turns the nested failure tree a request-validation engine reports into a
//! flat, ordered list of located findings, keeping ALL of them rather than
//! only the first.
//!
//! ## Overview
//!
//! An engine checking an HTTP request against an API description reports
//! failures as a tree: aggregates of siblings, per-parameter wrappers, body
//! schema violations, failed security schemes. Inquest walks that tree and
//! produces one [`ValidationError`] per leaf failure, each answering: where in
//! the request (query, path, header, cookie, body), which parameter or field,
//! is it missing or invalid, and why.
//!
//! ## Core Types
//!
//! - [`ErrorNode`]: the engine's failure tree
//! - [`flatten`]: the tree-to-findings transform
//! - [`ValidationError`]: a single located finding; its `Display` is [`format`]
//! - [`ValidationErrors`]: a non-empty collection of findings
//! - [`dump`]: an indented rendering of the tree for debugging
//! - [`validate_request`]: runs a [`RequestValidator`] engine and flattens its output
//!
//! ## Example
//!
//! ```rust
//! use inquest::{flatten, ErrorNode, FieldError, JsonPath, Location};
//!
//! let tree = ErrorNode::aggregate(vec![
//!     ErrorNode::parameter(Location::Query, "bip", ErrorNode::raw("value must be an integer")),
//!     ErrorNode::body(ErrorNode::aggregate(vec![
//!         ErrorNode::field(FieldError::new(JsonPath::from_field("length"), "number must be at least 0")),
//!         ErrorNode::field(FieldError::required(JsonPath::from_field("name"), "property \"name\" is missing")),
//!     ])),
//! ]);
//!
//! let messages: Vec<String> = flatten(&tree).iter().map(ToString::to_string).collect();
//! assert_eq!(messages, vec![
//!     "query parameter \"bip\": value must be an integer",
//!     "request body: field \"length\": number must be at least 0",
//!     "request body: field \"name\" is required but missing",
//! ]);
//! ```

pub mod auth;
pub mod dump;
pub mod error;
pub mod flatten;
pub mod format;
pub mod interop;
pub mod path;
pub mod validation;

pub use dump::{dump, Dump};
pub use error::{
    ErrorKind, ErrorNode, FieldError, Location, RequestError, Scope, ValidationError,
    ValidationErrors,
};
pub use flatten::flatten;
pub use format::format;
pub use path::{JsonPath, PathSegment};
pub use validation::{validate_request, EngineError, RequestValidator, ValidatorOptions};

/// Type alias for validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
