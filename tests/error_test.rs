//! Integration tests for ValidationError and ValidationErrors.

use inquest::{ErrorKind, Location, ValidationError, ValidationErrors, ValidationResult};
use stillwater::prelude::*;
use stillwater::Validation;

#[test]
fn test_errors_never_empty() {
    let errors = ValidationErrors::single(ValidationError::unclassified("boom"));
    assert!(!errors.is_empty());
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_combine_keeps_order() {
    let params = ValidationErrors::single(ValidationError::new(Location::Query, "bip", "bad"));
    let body = ValidationErrors::try_from_vec(vec![
        ValidationError::missing(Location::Body, "name", "missing"),
        ValidationError::new(Location::Body, "length", "too small"),
    ])
    .unwrap();
    let auth = ValidationErrors::single(ValidationError::new(Location::Header, "Api-Key", "absent"));

    let combined = params.combine(body).combine(auth);

    let names: Vec<&str> = combined.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["bip", "name", "length", "Api-Key"]);
}

#[test]
fn test_of_kind() {
    let errors = ValidationErrors::try_from_vec(vec![
        ValidationError::missing(Location::Body, "name", ""),
        ValidationError::new(Location::Cookie, "session", "expired"),
        ValidationError::unclassified("stray"),
    ])
    .unwrap();

    assert_eq!(errors.of_kind(ErrorKind::Missing).len(), 1);
    assert_eq!(errors.of_kind(ErrorKind::Invalid).len(), 1);
    assert_eq!(errors.of_kind(ErrorKind::Unclassified).len(), 1);
}

#[test]
fn test_validation_failure_carries_errors() {
    let result: ValidationResult<()> = Validation::Failure(ValidationErrors::single(
        ValidationError::new(Location::Path, "id", "bad"),
    ));

    match result {
        Validation::Success(_) => panic!("Expected failure"),
        Validation::Failure(errors) => {
            assert_eq!(errors.first().to_string(), "path parameter \"id\": bad")
        }
    }
}

#[test]
fn test_into_iter_and_ref_iter() {
    let errors = ValidationErrors::try_from_vec(vec![
        ValidationError::new(Location::Query, "a", "1"),
        ValidationError::new(Location::Query, "b", "2"),
    ])
    .unwrap();

    let borrowed: Vec<&ValidationError> = (&errors).into_iter().collect();
    assert_eq!(borrowed.len(), 2);

    let owned: Vec<ValidationError> = errors.into_iter().collect();
    assert_eq!(owned[1].name, "b");
}

#[test]
fn test_missing_constructor_keeps_detail_single_line() {
    let error = ValidationError::missing(Location::Body, "name", "line one\nline two");
    assert_eq!(error.detail, "line one");
    assert!(error.is_missing);
}
