// src/repository/mod.rs
//
// Storage boundary for facilities. Implementations own their connection
// handling; callers only see "insert one" and "scan all".

pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Facility, FacilityId, NewFacility};

pub use memory::InMemoryFacilityRepository;
pub use postgres::PostgresFacilityRepository;

#[async_trait]
pub trait FacilityRepository: Send + Sync {
    /// Persists one facility and returns the identifier the store assigned.
    async fn insert(&self, facility: &NewFacility) -> Result<FacilityId>;

    /// Returns every stored facility in insertion order.
    async fn fetch_all(&self) -> Result<Vec<Facility>>;
}
