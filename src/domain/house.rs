// src/domain/house.rs

use crate::domain::geo::Coordinates;

/// A property listing as the pages consume it. Owned by the remote estate
/// source; everything here is read-only display data.
#[derive(Debug, Clone)]
pub struct House {
    pub id: String,
    pub image_url: String,
    pub description: String,
    pub price: String, // display string, e.g. "25,000"
    pub address: String,
    pub category: String,
}

/// The detail endpoint's view of a single house. Coordinates are what the
/// proximity gate runs against; a listing without them can never unlock.
#[derive(Debug, Clone)]
pub struct HouseDetail {
    pub id: String,
    pub image_url: String,
    pub description: String,
    pub price: String,
    pub address: String,
    pub category: String,
    pub coordinates: Option<Coordinates>,
}
