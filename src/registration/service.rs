// src/registration/service.rs

use log::{error, info, warn};
use std::sync::Arc;

use crate::errors::{ServiceError, ServiceResult};
use crate::models::{FacilityId, RegisterRequest};
use crate::repository::FacilityRepository;
use crate::validation::validate_new_facility;

/// Write side of the directory: validates a new facility and stores it.
#[derive(Clone)]
pub struct RegistrationService {
    repository: Arc<dyn FacilityRepository>,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn FacilityRepository>) -> Self {
        Self { repository }
    }

    /// Stores exactly one facility on success. On validation failure every
    /// field error is returned and nothing is written. Insert failures are
    /// returned as-is, without retrying.
    pub async fn register(&self, request: &RegisterRequest) -> ServiceResult<FacilityId> {
        let facility = validate_new_facility(request).map_err(|errors| {
            warn!("Validation failed for register: {}", errors);
            ServiceError::Validation(errors)
        })?;

        let id = self.repository.insert(&facility).await.map_err(|e| {
            error!("Insert error for facility '{}': {:#}", facility.name, e);
            ServiceError::Insertion(e)
        })?;

        info!("Registered facility '{}' with id {}", facility.name, id);
        Ok(id)
    }
}
