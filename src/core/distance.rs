use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// Inputs are not range-checked; GPS data is trusted as-is.
///
/// # Returns
/// Great-circle distance in kilometers, never negative
#[inline]
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Distance to show for a record
///
/// A finite, non-negative precomputed value is trusted; anything else is
/// treated as absent and the haversine distance is computed instead.
#[inline]
pub fn resolve_distance(precomputed: Option<f64>, from: Coordinate, to: Coordinate) -> f64 {
    match precomputed {
        Some(d) if d.is_finite() && d >= 0.0 => d,
        _ => haversine_distance(from, to),
    }
}

/// Convert degrees/minutes/seconds to decimal degrees
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    if degrees.is_sign_negative() { -magnitude } else { magnitude }
}
