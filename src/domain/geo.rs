// src/domain/geo.rs

/// Mean earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A house can be unlocked from at most this far away. Inclusive bound.
pub const UNLOCK_RADIUS_KM: f64 = 0.3;

/// A point in decimal degrees. Latitude in [-90, 90], longitude in
/// [-180, 180]; callers are responsible for handing in finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in kilometers (haversine).
/// Pure arithmetic; identical points give exactly 0.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Whether a user at `distance_km` from the house may unlock it.
pub fn is_unlock_eligible(distance_km: f64) -> bool {
    distance_km <= UNLOCK_RADIUS_KM
}

/// Distance rounded to two decimals, the way the detail screen shows it.
pub fn display_distance_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
