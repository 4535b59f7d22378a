//! User-facing messages for findings.

use std::fmt::{self, Display};

use crate::error::{Location, ValidationError};

/// Renders a finding as a single human-readable line.
///
/// The location decides the wording; a missing body field gets a fixed
/// message that ignores `detail`.
///
/// # Example
///
/// ```rust
/// use inquest::{format, Location, ValidationError};
///
/// let error = ValidationError::missing(Location::Body, "name", "property \"name\" is missing");
/// assert_eq!(format(&error), "request body: field \"name\" is required but missing");
/// ```
pub fn format(err: &ValidationError) -> String {
    err.to_string()
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Location::Query => write!(f, "query parameter {:?}: {}", self.name, self.detail),
            Location::Path => write!(f, "path parameter {:?}: {}", self.name, self.detail),
            Location::Header => write!(f, "request header {:?}: {}", self.name, self.detail),
            Location::Cookie => write!(f, "cookie {:?}: {}", self.name, self.detail),
            Location::Body if self.is_missing => {
                write!(f, "request body: field {:?} is required but missing", self.name)
            }
            Location::Body => write!(f, "request body: field {:?}: {}", self.name, self.detail),
            other => write!(f, "{}: {:?}: {}", other, self.name, self.detail),
        }
    }
}
