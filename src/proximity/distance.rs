// src/proximity/distance.rs

use crate::models::Coordinate;
use crate::utils::constants::EARTH_RADIUS_KM;

/// Great-circle distance in kilometers, by the spherical law of cosines.
///
/// The cosine term is clamped to [-1, 1] before `acos`: for identical or
/// near-identical points rounding can push it just past 1.0, which would
/// otherwise produce NaN instead of 0.
pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    // sin^2 + cos^2 can also round to just under 1.0, which the clamp cannot fix
    if a == b {
        return 0.0;
    }

    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let delta_lon = b.longitude.to_radians() - a.longitude.to_radians();

    let cos_angle = lat1.cos() * lat2.cos() * delta_lon.cos() + lat1.sin() * lat2.sin();
    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}
