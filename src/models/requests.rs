// src/models/requests.rs
//
// Raw request shapes. Nothing in here is validated; the validation module
// turns these into typed values or a list of field errors.

use serde::Deserialize;

/// A value that should be numeric but arrives untyped: a JSON number,
/// a string (query parameters, CLI arguments) or anything else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<NumericInput>,
    #[serde(default)]
    pub longitude: Option<NumericInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FindNearestRequest {
    #[serde(default)]
    pub latitude: Option<NumericInput>,
    #[serde(default)]
    pub longitude: Option<NumericInput>,
    #[serde(default)]
    pub limit: Option<NumericInput>,
}
