// src/validation/text_fields.rs

use super::{FieldError, ValidationRule};
use crate::utils::constants::{ADDRESS_MAX_LENGTH, NAME_MAX_LENGTH};

pub fn validate_name(input: Option<&str>) -> Result<String, FieldError> {
    validate_text("name", "Name", input, NAME_MAX_LENGTH)
}

pub fn validate_address(input: Option<&str>) -> Result<String, FieldError> {
    validate_text("address", "Address", input, ADDRESS_MAX_LENGTH)
}

/// Trims, then checks emptiness and length (counted in characters).
fn validate_text(
    field: &'static str,
    label: &str,
    input: Option<&str>,
    max_length: usize,
) -> Result<String, FieldError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(FieldError::new(
            field,
            ValidationRule::Required,
            format!("{} is required", label),
        ));
    }
    if trimmed.chars().count() > max_length {
        return Err(FieldError::new(
            field,
            ValidationRule::TooLong,
            format!("{} must be at most {} characters", label, max_length),
        ));
    }
    Ok(trimmed.to_string())
}
