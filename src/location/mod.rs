// src/location/mod.rs
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::domain::geo::Coordinates;

/// Ways the device can fail to report a position. Either one means the
/// proximity gate is never consulted and the house stays locked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationError {
    PermissionDenied,
    Unavailable,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => {
                write!(f, "Location permission is required to unlock the house.")
            }
            LocationError::Unavailable => write!(f, "Current position unavailable."),
        }
    }
}

impl Error for LocationError {}

/// The browser's geolocation script reports the device position back as
/// `lat`/`lon` query parameters, or `loc=denied` when the user refuses
/// the permission prompt. Anything else counts as unavailable.
pub fn device_position(params: &HashMap<String, String>) -> Result<Coordinates, LocationError> {
    if params.get("loc").map(String::as_str) == Some("denied") {
        return Err(LocationError::PermissionDenied);
    }

    let latitude = params.get("lat").and_then(|v| v.trim().parse::<f64>().ok());
    let longitude = params.get("lon").and_then(|v| v.trim().parse::<f64>().ok());

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
        _ => Err(LocationError::Unavailable),
    }
}
