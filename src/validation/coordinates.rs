// src/validation/coordinates.rs

use super::{FieldError, ValidationRule};
use crate::models::NumericInput;
use crate::utils::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

pub fn validate_latitude(input: Option<&NumericInput>) -> Result<f64, FieldError> {
    validate_coordinate("latitude", "Latitude", input, MIN_LATITUDE, MAX_LATITUDE)
}

pub fn validate_longitude(input: Option<&NumericInput>) -> Result<f64, FieldError> {
    validate_coordinate("longitude", "Longitude", input, MIN_LONGITUDE, MAX_LONGITUDE)
}

/// Absence and non-numeric input are reported separately from range failures.
fn validate_coordinate(
    field: &'static str,
    label: &str,
    input: Option<&NumericInput>,
    min: f64,
    max: f64,
) -> Result<f64, FieldError> {
    let required = || {
        FieldError::new(field, ValidationRule::Required, format!("{} is required", label))
    };
    let not_a_number = || {
        FieldError::new(field, ValidationRule::NotANumber, format!("{} must be a number", label))
    };

    let value = match input {
        None => return Err(required()),
        Some(NumericInput::Number(n)) => *n,
        Some(NumericInput::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(required());
            }
            trimmed.parse::<f64>().map_err(|_| not_a_number())?
        }
        Some(NumericInput::Other(serde_json::Value::Null)) => return Err(required()),
        Some(NumericInput::Other(_)) => return Err(not_a_number()),
    };

    // "NaN" and "inf" parse as f64 but are not coordinates
    if !value.is_finite() {
        return Err(not_a_number());
    }

    if value < min || value > max {
        return Err(FieldError::new(
            field,
            ValidationRule::OutOfRange,
            format!("{} must be between {} and {}", label, min, max),
        ));
    }

    Ok(value)
}
