// src/repository/memory.rs

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use super::FacilityRepository;
use crate::models::{Facility, FacilityId, NewFacility};

/// Process-local repository. Ids start at 1 and increase by one per insert,
/// like a database sequence.
#[derive(Debug, Default)]
pub struct InMemoryFacilityRepository {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<Facility>,
    last_id: i64,
}

impl InMemoryFacilityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a row as-is, skipping validation. Used to stand in for rows
    /// written by other tools or before validation existed.
    pub async fn insert_unchecked(
        &self,
        name: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
    ) -> FacilityId {
        let mut state = self.state.write().await;
        state.push(name.to_string(), address.to_string(), latitude, longitude)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

impl MemoryState {
    fn push(&mut self, name: String, address: String, latitude: f64, longitude: f64) -> FacilityId {
        self.last_id += 1;
        let id = FacilityId(self.last_id);
        self.rows.push(Facility {
            id,
            name,
            address,
            latitude,
            longitude,
        });
        id
    }
}

#[async_trait]
impl FacilityRepository for InMemoryFacilityRepository {
    async fn insert(&self, facility: &NewFacility) -> Result<FacilityId> {
        let mut state = self.state.write().await;
        let id = state.push(
            facility.name.clone(),
            facility.address.clone(),
            facility.latitude,
            facility.longitude,
        );
        debug!("In-memory repository stored facility {}", id);
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<Facility>> {
        Ok(self.state.read().await.rows.clone())
    }
}
