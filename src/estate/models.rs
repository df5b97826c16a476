use serde::Deserialize;

use crate::domain::geo::Coordinates;
use crate::domain::house::{House, HouseDetail};

// house
//  ├── id
//  ├── imageUrl
//  ├── description
//  ├── price           (display string)
//  ├── address
//  ├── category
//  └── location
//       ├── latitude   (decimal-degree string)
//       └── longitude  (decimal-degree string)
//
// The by-id endpoint additionally flattens latitude/longitude out as
// numbers; those are what the distance check uses.

#[derive(Debug, Deserialize)]
pub struct HouseRecord {
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
    pub price: String,
    pub address: String,
    pub category: String,
    pub location: Option<WireLocation>,
}

#[derive(Debug, Deserialize)]
pub struct WireLocation {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Deserialize)]
pub struct HouseDetailRecord {
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
    pub price: String,
    pub address: String,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location: Option<WireLocation>,
}

impl WireLocation {
    /// The collection endpoint ships coordinates as strings.
    pub fn parse(&self) -> Option<Coordinates> {
        let latitude = self.latitude.trim().parse().ok()?;
        let longitude = self.longitude.trim().parse().ok()?;
        Some(Coordinates::new(latitude, longitude))
    }
}

impl HouseDetailRecord {
    /// Prefer the flattened numeric fields; fall back to the nested
    /// string pair. A record with neither has no usable coordinates.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => self.location.as_ref().and_then(WireLocation::parse),
        }
    }
}

impl From<HouseRecord> for House {
    fn from(record: HouseRecord) -> Self {
        House {
            id: record.id,
            image_url: record.image_url,
            description: record.description,
            price: record.price,
            address: record.address,
            category: record.category,
        }
    }
}

impl From<HouseDetailRecord> for HouseDetail {
    fn from(record: HouseDetailRecord) -> Self {
        let coordinates = record.coordinates();
        HouseDetail {
            id: record.id,
            image_url: record.image_url,
            description: record.description,
            price: record.price,
            address: record.address,
            category: record.category,
            coordinates,
        }
    }
}
