// src/repository/postgres.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use tokio_postgres::{GenericClient, Row as PgRow};

use super::FacilityRepository;
use crate::models::{Facility, FacilityId, NewFacility};
use crate::utils::db_connect::PgPool;

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS public.facilities (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        address VARCHAR(500) NOT NULL,
        latitude DOUBLE PRECISION,
        longitude DOUBLE PRECISION,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )";

const INSERT_FACILITY_SQL: &str = "
    INSERT INTO public.facilities (name, address, latitude, longitude)
    VALUES ($1, $2, $3, $4)
    RETURNING id";

const SELECT_ALL_FACILITIES_SQL: &str = "
    SELECT id, name, address, latitude, longitude
    FROM public.facilities
    ORDER BY id";

/// Facility storage backed by a bb8 PostgreSQL pool. Each call checks out one
/// connection and returns it to the pool when the guard drops, including on
/// error paths.
#[derive(Clone)]
pub struct PostgresFacilityRepository {
    pool: PgPool,
}

impl PostgresFacilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the facilities table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for ensure_schema")?;
        conn.batch_execute(CREATE_TABLE_SQL)
            .await
            .context("Failed to create facilities table")?;
        info!("Facilities table is ready.");
        Ok(())
    }
}

#[async_trait]
impl FacilityRepository for PostgresFacilityRepository {
    async fn insert(&self, facility: &NewFacility) -> Result<FacilityId> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for facility insert")?;
        insert_facility_row(&*conn, facility).await
    }

    async fn fetch_all(&self) -> Result<Vec<Facility>> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for facility scan")?;
        fetch_all_facility_rows(&*conn).await
    }
}

pub async fn insert_facility_row(
    conn: &impl GenericClient,
    facility: &NewFacility,
) -> Result<FacilityId> {
    let row = conn
        .query_one(
            INSERT_FACILITY_SQL,
            &[
                &facility.name,
                &facility.address,
                &facility.latitude,
                &facility.longitude,
            ],
        )
        .await
        .context("Failed to insert facility")?;
    let id: i64 = row.try_get("id").context("Insert did not return an id")?;
    debug!("Inserted facility with id {}", id);
    Ok(FacilityId(id))
}

pub async fn fetch_all_facility_rows(conn: &impl GenericClient) -> Result<Vec<Facility>> {
    let rows = conn
        .query(SELECT_ALL_FACILITIES_SQL, &[])
        .await
        .context("Failed to query facilities")?;

    let mut facilities = Vec::with_capacity(rows.len());
    let mut missing_coordinates = 0usize;
    for row in &rows {
        match facility_from_row(row)? {
            Some(facility) => facilities.push(facility),
            None => missing_coordinates += 1,
        }
    }

    if missing_coordinates > 0 {
        warn!(
            "Skipped {} facility rows with NULL coordinates.",
            missing_coordinates
        );
    }
    debug!("Fetched {} facilities from the database.", facilities.len());
    Ok(facilities)
}

/// `None` when the row has no coordinates to rank by.
fn facility_from_row(row: &PgRow) -> Result<Option<Facility>> {
    let id: i64 = row.try_get("id").context("Failed to read facility id")?;
    let latitude: Option<f64> = row.try_get("latitude").context("Failed to read latitude")?;
    let longitude: Option<f64> = row.try_get("longitude").context("Failed to read longitude")?;

    let (latitude, longitude) = match (latitude, longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Ok(None),
    };

    Ok(Some(Facility {
        id: FacilityId(id),
        name: row.try_get("name").context("Failed to read facility name")?,
        address: row.try_get("address").context("Failed to read facility address")?,
        latitude,
        longitude,
    }))
}
