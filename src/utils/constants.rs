// src/utils/constants.rs

/// Mean Earth radius used for every great-circle distance, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Maximum facility name length, in characters, after trimming.
pub const NAME_MAX_LENGTH: usize = 255;
/// Maximum facility address length, in characters, after trimming.
pub const ADDRESS_MAX_LENGTH: usize = 500;

/// Result size used when the caller omits `limit` or sends one outside 1..=MAX_RESULT_LIMIT.
pub const DEFAULT_RESULT_LIMIT: usize = 10;
pub const MAX_RESULT_LIMIT: usize = 100;
