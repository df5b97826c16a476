// estate/client.rs
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::domain::house::{House, HouseDetail};
use crate::estate::models::{HouseDetailRecord, HouseRecord};
use crate::estate::EstateError;

/// The mock API the original app shipped with.
pub const DEFAULT_BASE_URL: &str = "https://6790da50af8442fd73780560.mockapi.io";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Read-only collection of house listings. The app never writes to it.
pub trait ListingSource: Send + Sync {
    fn fetch_houses(&self) -> Result<Vec<House>, EstateError>;
    fn fetch_house(&self, id: &str) -> Result<HouseDetail, EstateError>;
}

pub struct EstateClient {
    client: Client,
    base_url: Url,
}

impl EstateClient {
    pub fn new(base_url: &str) -> Result<Self, EstateError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| EstateError::Config(format!("bad base URL: {e}")))?;

        // Url::join treats the last path segment as a file unless the
        // path ends with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EstateError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Base URL from DOORVUE_ESTATE_URL, falling back to the mock API.
    pub fn from_env() -> Result<Self, EstateError> {
        let base = std::env::var("DOORVUE_ESTATE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&base)
    }

    fn endpoint(&self, path: &str) -> Result<Url, EstateError> {
        self.base_url
            .join(path)
            .map_err(|e| EstateError::Config(format!("bad endpoint {path}: {e}")))
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, EstateError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| EstateError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EstateError::Status(status.as_u16()));
        }

        resp.json::<T>()
            .map_err(|e| EstateError::Deserialize(e.to_string()))
    }
}

impl ListingSource for EstateClient {
    fn fetch_houses(&self) -> Result<Vec<House>, EstateError> {
        let url = self.endpoint("estate")?;
        let records: Vec<HouseRecord> = self.get_json(url)?;

        Ok(records.into_iter().map(House::from).collect())
    }

    fn fetch_house(&self, id: &str) -> Result<HouseDetail, EstateError> {
        let url = self.endpoint(&format!("estate/{id}"))?;
        let record: HouseDetailRecord = self.get_json(url)?;

        Ok(record.into())
    }
}
