//! Error types on both sides of flattening.
//!
//! [`ErrorNode`] is the nested failure tree an engine reports;
//! [`ValidationError`] and [`ValidationErrors`] are the flat findings handed
//! to callers.

mod node;
mod record;

pub use node::{ErrorNode, FieldError, Location, RequestError, Scope, REQUIRED};
pub use record::{ErrorKind, ValidationError, ValidationErrors};
