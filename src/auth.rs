//! Per-scheme authentication checks.
//!
//! An engine asks an [`Authenticator`] about each security scheme a route
//! requires. Every failed scheme becomes one child of an
//! [`ErrorNode::Security`] node; [`check_security`] builds that node.
//! Failures are scoped to the parameter that carries the credential, so each
//! one flattens to its own location.

use indexmap::IndexMap;

use crate::error::{ErrorNode, Location};

/// Where an API key is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeLocation {
    Header,
    Query,
    Cookie,
}

impl SchemeLocation {
    pub fn location(&self) -> Location {
        match self {
            SchemeLocation::Header => Location::Header,
            SchemeLocation::Query => Location::Query,
            SchemeLocation::Cookie => Location::Cookie,
        }
    }
}

/// An API-key security scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityScheme {
    pub name: String,
    pub location: SchemeLocation,
}

impl SecurityScheme {
    pub fn api_key(location: SchemeLocation, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// The credential-bearing parts of a request.
///
/// Header names are matched case-insensitively; query parameter names are
/// matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    headers: IndexMap<String, Vec<String>>,
    query: IndexMap<String, Vec<String>>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header value and returns self for chaining.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Adds a query parameter value and returns self for chaining.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.entry(name.into()).or_default().push(value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    pub fn has_query(&self, name: &str) -> bool {
        self.query.contains_key(name)
    }

    /// Returns true when any `Cookie` header is present.
    pub fn has_cookie(&self) -> bool {
        self.has_header("cookie")
    }
}

/// Checks one security scheme against a request's credentials.
///
/// Closures with the matching signature are authenticators too.
pub trait Authenticator: Send + Sync {
    fn authenticate(
        &self,
        scheme: &SecurityScheme,
        credentials: &Credentials,
    ) -> Result<(), ErrorNode>;
}

impl<F> Authenticator for F
where
    F: Fn(&SecurityScheme, &Credentials) -> Result<(), ErrorNode> + Send + Sync,
{
    fn authenticate(
        &self,
        scheme: &SecurityScheme,
        credentials: &Credentials,
    ) -> Result<(), ErrorNode> {
        self(scheme, credentials)
    }
}

/// Accepts a scheme when its credential is present at all.
///
/// Header keys must be present under the scheme's name, query keys likewise,
/// and cookie schemes accept any `Cookie` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiKeyPresence;

impl Authenticator for ApiKeyPresence {
    fn authenticate(
        &self,
        scheme: &SecurityScheme,
        credentials: &Credentials,
    ) -> Result<(), ErrorNode> {
        let failure = match scheme.location {
            SchemeLocation::Header if !credentials.has_header(&scheme.name) => {
                Some(format!("{} not found in header", scheme.name))
            }
            SchemeLocation::Cookie if !credentials.has_cookie() => {
                Some("no session cookie present".to_string())
            }
            SchemeLocation::Query if !credentials.has_query(&scheme.name) => {
                Some("no auth query param found".to_string())
            }
            _ => None,
        };

        match failure {
            None => Ok(()),
            Some(message) => Err(ErrorNode::parameter(
                scheme.location.location(),
                scheme.name.clone(),
                ErrorNode::raw(message),
            )),
        }
    }
}

/// Runs `authenticator` over every scheme and collects the failures.
///
/// Returns `None` when every scheme passes.
///
/// # Example
///
/// ```rust
/// use inquest::auth::{check_security, ApiKeyPresence, Credentials, SchemeLocation, SecurityScheme};
///
/// let schemes = [
///     SecurityScheme::api_key(SchemeLocation::Header, "Api-Key"),
///     SecurityScheme::api_key(SchemeLocation::Cookie, "session"),
/// ];
/// let credentials = Credentials::new().with_header("api-key", "foo");
///
/// let failure = check_security(&ApiKeyPresence, &schemes, &credentials).unwrap();
/// assert_eq!(failure.leaf_count(), 1);
/// ```
pub fn check_security<A>(
    authenticator: &A,
    schemes: &[SecurityScheme],
    credentials: &Credentials,
) -> Option<ErrorNode>
where
    A: Authenticator + ?Sized,
{
    let failures: Vec<ErrorNode> = schemes
        .iter()
        .filter_map(|scheme| {
            let outcome = authenticator.authenticate(scheme, credentials);
            tracing::debug!(
                scheme = %scheme.name,
                location = %scheme.location.location(),
                passed = outcome.is_ok(),
                "checked security scheme"
            );
            outcome.err()
        })
        .collect();

    if failures.is_empty() {
        None
    } else {
        Some(ErrorNode::security(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let credentials = Credentials::new().with_header("Api-Key", "foo");
        assert!(credentials.has_header("API-KEY"));
        assert_eq!(
            credentials.header("api-key"),
            Some(&["foo".to_string()][..])
        );
    }

    #[test]
    fn test_query_scheme() {
        let scheme = SecurityScheme::api_key(SchemeLocation::Query, "token");
        assert!(ApiKeyPresence
            .authenticate(&scheme, &Credentials::new().with_query("token", "t"))
            .is_ok());

        let failure = ApiKeyPresence
            .authenticate(&scheme, &Credentials::new())
            .unwrap_err();
        assert_eq!(
            failure,
            ErrorNode::parameter(
                Location::Query,
                "token",
                ErrorNode::raw("no auth query param found")
            )
        );
    }

    #[test]
    fn test_all_schemes_pass() {
        let schemes = [
            SecurityScheme::api_key(SchemeLocation::Header, "Api-Key"),
            SecurityScheme::api_key(SchemeLocation::Cookie, "session"),
        ];
        let credentials = Credentials::new()
            .with_header("Api-Key", "foo")
            .with_header("Cookie", "123");
        assert!(check_security(&ApiKeyPresence, &schemes, &credentials).is_none());
    }

    #[test]
    fn test_closure_authenticator() {
        let deny_all = |scheme: &SecurityScheme, _: &Credentials| -> Result<(), ErrorNode> {
            Err(ErrorNode::raw(format!("{} revoked", scheme.name)))
        };
        let schemes = [SecurityScheme::api_key(SchemeLocation::Header, "Api-Key")];
        let failure = check_security(&deny_all, &schemes, &Credentials::new()).unwrap();
        assert_eq!(
            failure,
            ErrorNode::security(vec![ErrorNode::raw("Api-Key revoked")])
        );
    }
}
