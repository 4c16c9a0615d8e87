// src/api/handlers.rs
//
// Request handlers for the two operations. A transport (the CLI in main.rs,
// or an HTTP router) deserializes the request, calls one of these and writes
// out the ApiResponse.

use super::responses::ApiResponse;
use crate::models::{FindNearestRequest, RegisterRequest};
use crate::proximity::ProximityRanker;
use crate::registration::RegistrationService;

pub async fn handle_register(
    service: &RegistrationService,
    request: &RegisterRequest,
) -> ApiResponse {
    match service.register(request).await {
        Ok(id) => ApiResponse::registered(id),
        Err(e) => ApiResponse::from_error(&e),
    }
}

pub async fn handle_find_nearest(
    ranker: &ProximityRanker,
    request: &FindNearestRequest,
) -> ApiResponse {
    match ranker.find_nearest_raw(request).await {
        Ok(ranked) => ApiResponse::ranked(&ranked.results),
        Err(e) => ApiResponse::from_error(&e),
    }
}

/// Liveness probe.
pub fn status_message() -> &'static str {
    "Facility locator is running"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Facility, FacilityId, NewFacility};
    use crate::repository::{FacilityRepository, InMemoryFacilityRepository};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct BrokenRepository;

    #[async_trait]
    impl FacilityRepository for BrokenRepository {
        async fn insert(&self, _facility: &NewFacility) -> Result<FacilityId> {
            Err(anyhow!("FATAL: password authentication failed for user \"postgres\""))
        }

        async fn fetch_all(&self) -> Result<Vec<Facility>> {
            Err(anyhow!("FATAL: password authentication failed for user \"postgres\""))
        }
    }

    fn services(repo: Arc<dyn FacilityRepository>) -> (RegistrationService, ProximityRanker) {
        (RegistrationService::new(repo.clone()), ProximityRanker::new(repo))
    }

    fn register_body(value: serde_json::Value) -> RegisterRequest {
        serde_json::from_value(value).unwrap()
    }

    fn nearest_body(value: serde_json::Value) -> FindNearestRequest {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_register_then_find_nearest_shapes() {
        let (registration, ranker) = services(Arc::new(InMemoryFacilityRepository::new()));

        let created = handle_register(
            &registration,
            &register_body(json!({
                "name": "Lakeview Primary",
                "address": "9 Shore Rd",
                "latitude": "12.9716",
                "longitude": 77.5946
            })),
        )
        .await;
        assert_eq!(created.status, 201);
        assert_eq!(created.body["success"], json!(true));
        assert_eq!(created.body["id"], json!(1));

        let found = handle_find_nearest(
            &ranker,
            &nearest_body(json!({"latitude": 12.9716, "longitude": "77.5946", "limit": "5"})),
        )
        .await;
        assert_eq!(found.status, 200);
        assert_eq!(found.body["success"], json!(true));
        assert_eq!(found.body["total"], json!(1));
        assert_eq!(
            found.body["results"][0],
            json!({
                "id": 1,
                "name": "Lakeview Primary",
                "address": "9 Shore Rd",
                "latitude": 12.9716,
                "longitude": 77.5946,
                "distance_km": 0.0
            })
        );
    }

    #[tokio::test]
    async fn test_empty_directory_returns_empty_results() {
        let (_, ranker) = services(Arc::new(InMemoryFacilityRepository::new()));
        let found = handle_find_nearest(&ranker, &nearest_body(json!({"latitude": 0, "longitude": 0}))).await;
        assert_eq!(found.status, 200);
        assert_eq!(found.body["total"], json!(0));
        assert_eq!(found.body["results"], json!([]));
    }

    #[tokio::test]
    async fn test_validation_errors_are_field_scoped() {
        let (registration, ranker) = services(Arc::new(InMemoryFacilityRepository::new()));

        let rejected = handle_register(
            &registration,
            &register_body(json!({"name": "X", "address": "Y", "latitude": 91, "longitude": 0})),
        )
        .await;
        assert_eq!(rejected.status, 400);
        assert_eq!(rejected.body["success"], json!(false));
        assert_eq!(rejected.body["errors"][0]["field"], json!("latitude"));
        assert_eq!(rejected.body["errors"][0]["rule"], json!("out_of_range"));

        let rejected = handle_find_nearest(&ranker, &nearest_body(json!({"longitude": 500}))).await;
        assert_eq!(rejected.status, 400);
        let errors = rejected.body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["message"], json!("Latitude is required"));
        assert_eq!(errors[1]["message"], json!("Longitude must be between -180 and 180"));
    }

    #[tokio::test]
    async fn test_storage_failures_are_opaque() {
        let (registration, ranker) = services(Arc::new(BrokenRepository));

        let failed = handle_register(
            &registration,
            &register_body(json!({"name": "X", "address": "Y", "latitude": 1, "longitude": 1})),
        )
        .await;
        assert_eq!(failed.status, 500);
        assert_eq!(
            failed.body,
            json!({"success": false, "error": "Something went wrong while adding facility"})
        );

        let failed = handle_find_nearest(&ranker, &nearest_body(json!({"latitude": 1, "longitude": 1}))).await;
        assert_eq!(failed.status, 500);
        assert_eq!(failed.body, json!({"success": false, "error": "Could not fetch facility list"}));
        assert!(!failed.body.to_string().contains("password"));
    }

    #[test]
    fn test_status_message() {
        assert_eq!(status_message(), "Facility locator is running");
    }
}
