use crate::auth::{AuthConfig, AuthService};
use crate::db::connection::{init_db, Database};
use crate::domain::geo::Coordinates;
use crate::domain::house::{House, HouseDetail};
use crate::estate::{EstateError, ListingSource};
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "doorvue_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Canned listing source backing most router tests.
pub struct StubListings {
    pub houses: Vec<House>,
    pub details: Vec<HouseDetail>,
}

impl ListingSource for StubListings {
    fn fetch_houses(&self) -> Result<Vec<House>, EstateError> {
        Ok(self.houses.clone())
    }

    fn fetch_house(&self, id: &str) -> Result<HouseDetail, EstateError> {
        self.details
            .iter()
            .find(|detail| detail.id == id)
            .cloned()
            .ok_or(EstateError::Status(404))
    }
}

/// A listing source whose remote is unreachable.
pub struct FailingListings;

impl ListingSource for FailingListings {
    fn fetch_houses(&self) -> Result<Vec<House>, EstateError> {
        Err(EstateError::Network("connection refused".into()))
    }

    fn fetch_house(&self, _id: &str) -> Result<HouseDetail, EstateError> {
        Err(EstateError::Network("connection refused".into()))
    }
}

fn house(id: &str, address: &str, category: &str) -> House {
    House {
        id: id.to_string(),
        image_url: format!("https://example.com/{id}.jpg"),
        description: format!("Listing {id}"),
        price: "25,000".to_string(),
        address: address.to_string(),
        category: category.to_string(),
    }
}

fn detail(id: &str, address: &str, coordinates: Option<Coordinates>) -> HouseDetail {
    HouseDetail {
        id: id.to_string(),
        image_url: format!("https://example.com/{id}.jpg"),
        description: format!("Listing {id}"),
        price: "25,000".to_string(),
        address: address.to_string(),
        category: "House".to_string(),
        coordinates,
    }
}

pub fn sample_listings() -> StubListings {
    StubListings {
        houses: vec![
            house("1", "Baluwatar, Kathmandu", "House"),
            house("2", "Lakeside, Pokhara", "Apartment"),
            house("3", "Jawalakhel, Lalitpur", "Villa"),
        ],
        details: vec![
            detail("1", "Baluwatar, Kathmandu", Some(Coordinates::new(27.7172, 85.3240))),
            detail("9", "Unknown Road", None),
        ],
    }
}

pub fn test_state_with(listings: Arc<dyn ListingSource>) -> AppState {
    AppState {
        db: init_test_db(),
        listings,
        auth: AuthService::new(AuthConfig::default()),
    }
}

pub fn test_state() -> AppState {
    test_state_with(Arc::new(sample_listings()))
}

pub fn get(state: &AppState, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, state).expect("Failed to handle request")
}

pub fn post_form(state: &AppState, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();

    handle(req, state).expect("Failed to handle request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn location_header(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}
