mod client;
mod client_error;
mod models;

pub use client::{EstateClient, ListingSource, DEFAULT_BASE_URL};
pub use client_error::EstateError;
pub use models::{HouseDetailRecord, HouseRecord};
