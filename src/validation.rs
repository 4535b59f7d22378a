//! Entry point tying an external validation engine to the flattener.
//!
//! The engine (schema compilation, routing, request decoding) lives outside
//! this crate behind [`RequestValidator`]. [`validate_request`] runs it once
//! and turns a reported failure tree into [`ValidationErrors`].

use stillwater::Validation;

use crate::error::{ErrorKind, ErrorNode, ValidationError, ValidationErrors};
use crate::flatten::flatten;
use crate::ValidationResult;

/// Detail of the finding emitted when an engine fails a request without
/// reporting a single leaf.
pub const NO_REPORTED_CAUSE: &str = "validation failed without a reported cause";

/// Options handed to the engine for one validation.
///
/// # Example
///
/// ```rust
/// use inquest::ValidatorOptions;
///
/// let options = ValidatorOptions::new()
///     .exclude_request_body(true)
///     .log_unclassified(false);
///
/// assert!(options.multi_error);
/// assert!(options.exclude_request_body);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Ask the engine to report every failure rather than stopping at the first.
    pub multi_error: bool,
    /// Skip request body validation.
    pub exclude_request_body: bool,
    /// Skip security requirement checks.
    pub exclude_security: bool,
    /// Log every unclassified finding at `warn` level.
    pub log_unclassified: bool,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self {
            multi_error: true,
            exclude_request_body: false,
            exclude_security: false,
            log_unclassified: true,
        }
    }

    pub fn multi_error(mut self, enabled: bool) -> Self {
        self.multi_error = enabled;
        self
    }

    pub fn exclude_request_body(mut self, exclude: bool) -> Self {
        self.exclude_request_body = exclude;
        self
    }

    pub fn exclude_security(mut self, exclude: bool) -> Self {
        self.exclude_security = exclude;
        self
    }

    pub fn log_unclassified(mut self, enabled: bool) -> Self {
        self.log_unclassified = enabled;
        self
    }
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// An external engine that checks one request against an API description.
///
/// `Ok(None)` means the request is valid and `Ok(Some(tree))` carries the
/// failures. `Err` is reserved for problems that say nothing about the
/// request's validity, such as a missing route.
pub trait RequestValidator {
    /// The engine's own request representation.
    type Request;

    fn validate(
        &self,
        request: &Self::Request,
        options: &ValidatorOptions,
    ) -> Result<Option<ErrorNode>, EngineError>;
}

/// Failures of the engine itself, as opposed to findings about the request.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No operation in the API description matches the request.
    #[error("no route matches {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// The engine failed for a reason of its own.
    #[error("validation engine failed: {0}")]
    Engine(String),
}

/// Validates `request` with `engine` and flattens any failure tree.
///
/// # Errors
///
/// Returns the engine's [`EngineError`] unchanged.
///
/// # Example
///
/// ```rust
/// use inquest::{validate_request, EngineError, ErrorNode, Location, RequestValidator, ValidatorOptions};
///
/// struct RejectEverything;
///
/// impl RequestValidator for RejectEverything {
///     type Request = String;
///
///     fn validate(&self, _: &String, _: &ValidatorOptions) -> Result<Option<ErrorNode>, EngineError> {
///         Ok(Some(ErrorNode::parameter(Location::Query, "bip", ErrorNode::raw("must be at least 1"))))
///     }
/// }
///
/// let result = validate_request(&RejectEverything, &"GET /v0/foo?bip=0".to_string(), &ValidatorOptions::new())
///     .unwrap();
/// assert!(result.is_failure());
/// ```
pub fn validate_request<V>(
    engine: &V,
    request: &V::Request,
    options: &ValidatorOptions,
) -> Result<ValidationResult<()>, EngineError>
where
    V: RequestValidator + ?Sized,
{
    let tree = match engine.validate(request, options)? {
        None => {
            tracing::debug!("request passed validation");
            return Ok(Validation::Success(()));
        }
        Some(tree) => tree,
    };

    Ok(Validation::Failure(collect(&tree, options)))
}

/// Flattens a failure tree into a non-empty collection, logging as configured.
pub fn collect(tree: &ErrorNode, options: &ValidatorOptions) -> ValidationErrors {
    let records = flatten(tree);
    tracing::debug!(
        leaves = tree.leaf_count(),
        records = records.len(),
        "request failed validation"
    );

    if options.log_unclassified {
        for record in records
            .iter()
            .filter(|r| r.kind() == ErrorKind::Unclassified)
        {
            tracing::warn!(detail = %record.detail, "unclassified validation error");
        }
    }

    ValidationErrors::try_from_vec(records).unwrap_or_else(|| {
        tracing::warn!("validation engine reported a failure with no errors");
        ValidationErrors::single(ValidationError::unclassified(NO_REPORTED_CAUSE))
    })
}
