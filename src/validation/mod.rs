// src/validation/mod.rs
//
// Field validation shared by registration and proximity search. Every field
// is checked and every failure collected, so callers can report all problems
// in one response.

pub mod coordinates;
pub mod text_fields;

use serde::Serialize;
use std::fmt;

use crate::models::{Coordinate, NewFacility, NumericInput, RegisterRequest};

pub use coordinates::{validate_latitude, validate_longitude};
pub use text_fields::{validate_address, validate_name};

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    Required,
    NotANumber,
    OutOfRange,
    TooLong,
}

/// A validation failure tied to one named input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: ValidationRule,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, rule: ValidationRule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collected field failures for one request. Never empty once returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Records the error side of `result` and hands back the accepted value, if any.
    pub fn collect<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validates all four registration fields and returns the trimmed facility
/// only if every one of them passed.
pub fn validate_new_facility(request: &RegisterRequest) -> Result<NewFacility, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = errors.collect(validate_name(request.name.as_deref()));
    let address = errors.collect(validate_address(request.address.as_deref()));
    let latitude = errors.collect(validate_latitude(request.latitude.as_ref()));
    let longitude = errors.collect(validate_longitude(request.longitude.as_ref()));

    match (name, address, latitude, longitude) {
        (Some(name), Some(address), Some(latitude), Some(longitude)) if errors.is_empty() => {
            Ok(NewFacility {
                name,
                address,
                latitude,
                longitude,
            })
        }
        _ => Err(errors),
    }
}

/// Validates the coordinate half of a proximity query.
pub fn validate_query_coordinates(
    latitude: Option<&NumericInput>,
    longitude: Option<&NumericInput>,
) -> Result<Coordinate, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let latitude = errors.collect(validate_latitude(latitude));
    let longitude = errors.collect(validate_longitude(longitude));

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(Coordinate::new(latitude, longitude)),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            name: Some("  Riverside Clinic ".to_string()),
            address: Some(" 12 Quay Road ".to_string()),
            latitude: Some(NumericInput::Number(51.5)),
            longitude: Some(NumericInput::Text("-0.12".to_string())),
        }
    }

    #[test]
    fn test_valid_request_is_trimmed_and_typed() {
        let facility = validate_new_facility(&valid_request()).unwrap();
        assert_eq!(facility.name, "Riverside Clinic");
        assert_eq!(facility.address, "12 Quay Road");
        assert_eq!(facility.latitude, 51.5);
        assert_eq!(facility.longitude, -0.12);
    }

    #[test]
    fn test_all_failures_are_collected() {
        let request = RegisterRequest {
            name: Some("   ".to_string()),
            address: None,
            latitude: Some(NumericInput::Number(91.0)),
            longitude: Some(NumericInput::Text("east".to_string())),
        };
        let errors = validate_new_facility(&request).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.fields(), vec!["name", "address", "latitude", "longitude"]);
        assert_eq!(errors.errors()[2].rule, ValidationRule::OutOfRange);
        assert_eq!(errors.errors()[3].rule, ValidationRule::NotANumber);
    }

    #[test]
    fn test_name_of_256_chars_is_rejected() {
        let mut request = valid_request();
        request.name = Some("A".repeat(256));
        let errors = validate_new_facility(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "name");
        assert_eq!(errors.errors()[0].rule, ValidationRule::TooLong);
    }

    #[test]
    fn test_whitespace_address_is_rejected_as_empty() {
        let mut request = valid_request();
        request.address = Some("  ".to_string());
        let errors = validate_new_facility(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field, "address");
        assert_eq!(errors.errors()[0].rule, ValidationRule::Required);
    }

    #[test]
    fn test_query_coordinates_report_both_fields() {
        let lat = NumericInput::Number(-90.5);
        let errors = validate_query_coordinates(Some(&lat), None).unwrap_err();
        assert!(errors.has_field("latitude"));
        assert!(errors.has_field("longitude"));

        let lat = NumericInput::Number(-90.0);
        let lon = NumericInput::Number(180.0);
        let point = validate_query_coordinates(Some(&lat), Some(&lon)).unwrap();
        assert_eq!(point, Coordinate::new(-90.0, 180.0));
    }

    #[test]
    fn test_errors_serialize_as_a_list() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("latitude", ValidationRule::Required, "Latitude is required"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "field": "latitude",
                "rule": "required",
                "message": "Latitude is required"
            }])
        );
    }
}
