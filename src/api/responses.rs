// src/api/responses.rs

use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::ServiceError;
use crate::models::{FacilityId, RankedFacility};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// A response body plus an HTTP-style status, independent of the transport
/// that eventually carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Serialize)]
struct RegisterBody {
    success: bool,
    id: FacilityId,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct FindNearestBody<'a> {
    success: bool,
    total: usize,
    results: &'a [RankedFacility],
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn registered(id: FacilityId) -> Self {
        let body = RegisterBody {
            success: true,
            id,
            message: "Facility successfully added",
        };
        Self {
            status: STATUS_CREATED,
            body: json!(body),
        }
    }

    pub fn ranked(results: &[RankedFacility]) -> Self {
        let body = FindNearestBody {
            success: true,
            total: results.len(),
            results,
        };
        Self {
            status: STATUS_OK,
            body: json!(body),
        }
    }

    /// Validation failures list every field error. Storage failures carry
    /// only the generic message; the underlying cause never leaves the
    /// process.
    pub fn from_error(error: &ServiceError) -> Self {
        match error {
            ServiceError::Validation(errors) => Self {
                status: STATUS_BAD_REQUEST,
                body: json!({ "success": false, "errors": errors }),
            },
            ServiceError::Retrieval(_) | ServiceError::Insertion(_) => Self {
                status: STATUS_INTERNAL_ERROR,
                body: json!({ "success": false, "error": error.to_string() }),
            },
        }
    }
}
