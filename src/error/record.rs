//! Flat validation findings.
//!
//! This module provides [`ValidationError`] for a single located finding and
//! [`ValidationErrors`] for the ordered, non-empty list produced from one
//! failed validation.

use std::fmt::{self, Display};

use serde_json::{json, Value};
use stillwater::prelude::*;

use super::node::Location;

/// How a finding should be understood by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value is absent.
    Missing,
    /// A value is present but does not conform to the schema.
    Invalid,
    /// The engine reported a failure that could not be tied to a location.
    Unclassified,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Missing => "missing",
            ErrorKind::Invalid => "invalid",
            ErrorKind::Unclassified => "unclassified",
        }
    }
}

/// A single located validation finding.
///
/// `detail` is always one line and never repeats the location or name; the
/// [`Display`] impl (see [`crate::format`]) adds those.
///
/// # Example
///
/// ```rust
/// use inquest::{Location, ValidationError};
///
/// let error = ValidationError::new(Location::Query, "bip", "number must be at least 1");
/// assert_eq!(error.to_string(), "query parameter \"bip\": number must be at least 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What part of the request was invalid.
    pub location: Location,
    /// Parameter name, or the `/`-joined field path for body findings.
    pub name: String,
    /// The value described by `name` is required but not present.
    pub is_missing: bool,
    /// Human-readable, single-line explanation.
    pub detail: String,
}

impl ValidationError {
    /// Creates an "invalid value" finding. Only the first line of `detail` is kept.
    pub fn new(location: Location, name: impl Into<String>, detail: impl AsRef<str>) -> Self {
        Self {
            location,
            name: name.into(),
            is_missing: false,
            detail: first_line(detail.as_ref()).to_string(),
        }
    }

    /// Creates a "required but missing" finding.
    pub fn missing(location: Location, name: impl Into<String>, detail: impl AsRef<str>) -> Self {
        Self {
            is_missing: true,
            ..Self::new(location, name, detail)
        }
    }

    /// Creates a finding with no usable location.
    pub fn unclassified(detail: impl AsRef<str>) -> Self {
        Self::new(Location::Unknown, "", detail)
    }

    /// Classifies the finding.
    ///
    /// A finding is [`ErrorKind::Unclassified`] only when it has neither a
    /// location nor a name. A named parameter whose location the engine left
    /// blank is still tied to something the caller can act on.
    pub fn kind(&self) -> ErrorKind {
        if self.location == Location::Unknown && self.name.is_empty() {
            ErrorKind::Unclassified
        } else if self.is_missing {
            ErrorKind::Missing
        } else {
            ErrorKind::Invalid
        }
    }

    /// Renders this finding as a JSON object suitable for an error response.
    pub fn to_json(&self) -> Value {
        json!({
            "in": self.location.as_str(),
            "name": self.name,
            "missing": self.is_missing,
            "kind": self.kind().as_str(),
            "detail": self.detail,
            "message": self.to_string(),
        })
    }
}

impl std::error::Error for ValidationError {}

/// Returns `text` up to (not including) its first line break.
pub(crate) fn first_line(text: &str) -> &str {
    match text.find(|c: char| c == '\n' || c == '\r') {
        Some(end) => &text[..end],
        None => text,
    }
}

/// A non-empty, ordered collection of findings from one validation.
///
/// Findings from separate stages of the same request (say, parameters and
/// then security) can be joined with [`Semigroup::combine`]:
///
/// ```rust
/// use inquest::{Location, ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let params = ValidationErrors::single(ValidationError::new(Location::Query, "bip", "bad"));
/// let auth = ValidationErrors::single(ValidationError::new(Location::Header, "Api-Key", "absent"));
///
/// let combined = params.combine(auth);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().name, "bip");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a collection containing a single finding.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a collection from a vec, or `None` when the vec is empty.
    pub fn try_from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = errors.next()?;
        Some(errors.fold(Self::single(head), |acc, error| {
            acc.combine(Self::single(error))
        }))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns the findings at the given location, in order.
    pub fn at_location(&self, location: &Location) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.location == location).collect()
    }

    /// Returns the findings for the given parameter name or field path.
    pub fn named(&self, name: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.name == name).collect()
    }

    pub fn missing(&self) -> Vec<&ValidationError> {
        self.of_kind(ErrorKind::Missing)
    }

    pub fn unclassified(&self) -> Vec<&ValidationError> {
        self.of_kind(ErrorKind::Unclassified)
    }

    pub fn of_kind(&self, kind: ErrorKind) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.kind() == kind).collect()
    }

    /// Returns the formatted message of every finding, in order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }

    /// Renders the collection as `{"errors": [...]}`.
    pub fn to_json(&self) -> Value {
        json!({
            "errors": self.0.iter().map(ValidationError::to_json).collect::<Vec<_>>(),
        })
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Request failed validation with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
