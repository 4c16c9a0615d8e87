// src/proximity/limit.rs
//
// Result limits are never rejected. Anything outside 1..=MAX_RESULT_LIMIT,
// or anything that is not an integer, becomes DEFAULT_RESULT_LIMIT. This is
// deliberately different from coordinates, which fail validation.

use crate::models::NumericInput;
use crate::utils::constants::{DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT};

pub fn clamp_with_default(input: Option<&NumericInput>) -> usize {
    parse_limit(input)
        .filter(|limit| (1..=MAX_RESULT_LIMIT as i64).contains(limit))
        .map(|limit| limit as usize)
        .unwrap_or(DEFAULT_RESULT_LIMIT)
}

fn parse_limit(input: Option<&NumericInput>) -> Option<i64> {
    match input? {
        NumericInput::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
        NumericInput::Number(_) => None,
        NumericInput::Text(raw) => raw.trim().parse::<i64>().ok(),
        NumericInput::Other(_) => None,
    }
}
