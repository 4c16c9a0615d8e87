// src/proximity/ranker.rs

use log::{debug, error, warn};
use std::sync::Arc;
use std::time::Instant;

use super::distance::great_circle_distance_km;
use super::limit::clamp_with_default;
use crate::errors::{ServiceError, ServiceResult};
use crate::models::{FindNearestRequest, QueryPoint, RankedFacility};
use crate::repository::FacilityRepository;
use crate::validation::validate_query_coordinates;

/// Facilities ordered nearest first, at most `limit` long.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub results: Vec<RankedFacility>,
}

impl RankedResult {
    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// Ranks every stored facility by distance from a query point. There is no
/// spatial index: each call scans the full candidate set.
#[derive(Clone)]
pub struct ProximityRanker {
    repository: Arc<dyn FacilityRepository>,
}

impl ProximityRanker {
    pub fn new(repository: Arc<dyn FacilityRepository>) -> Self {
        Self { repository }
    }

    /// Parse-and-validate step. Coordinates must be valid; the limit is
    /// clamped to the default instead of being rejected.
    pub fn parse_query(request: &FindNearestRequest) -> ServiceResult<QueryPoint> {
        let limit = clamp_with_default(request.limit.as_ref());
        let coordinate =
            validate_query_coordinates(request.latitude.as_ref(), request.longitude.as_ref())
                .map_err(ServiceError::Validation)?;
        Ok(QueryPoint { coordinate, limit })
    }

    /// Validates the raw request, then ranks. Nothing is read from the
    /// repository when validation fails.
    pub async fn find_nearest_raw(&self, request: &FindNearestRequest) -> ServiceResult<RankedResult> {
        let query = match Self::parse_query(request) {
            Ok(query) => query,
            Err(e) => {
                warn!("Validation failed for find_nearest: {}", e);
                return Err(e);
            }
        };
        self.find_nearest(query).await
    }

    pub async fn find_nearest(&self, query: QueryPoint) -> ServiceResult<RankedResult> {
        let start_time = Instant::now();

        let candidates = self.repository.fetch_all().await.map_err(|e| {
            error!("Error fetching facilities: {:#}", e);
            ServiceError::Retrieval(e)
        })?;
        let candidate_count = candidates.len();

        let mut ranked: Vec<RankedFacility> = candidates
            .into_iter()
            .filter(|facility| facility.coordinate().is_within_bounds())
            .map(|facility| {
                let distance_km = great_circle_distance_km(query.coordinate, facility.coordinate());
                RankedFacility {
                    facility,
                    distance_km,
                }
            })
            .collect();

        let excluded = candidate_count - ranked.len();
        if excluded > 0 {
            warn!(
                "Excluded {} stored facilities with out-of-range coordinates from ranking.",
                excluded
            );
        }

        // Stable sort: equal distances keep repository (insertion) order
        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        ranked.truncate(query.limit);

        debug!(
            "Ranked {} candidates around ({}, {}): {} excluded, {} returned (limit {}) in {:.2?}",
            candidate_count,
            query.coordinate.latitude,
            query.coordinate.longitude,
            excluded,
            ranked.len(),
            query.limit,
            start_time.elapsed()
        );

        Ok(RankedResult { results: ranked })
    }
}
