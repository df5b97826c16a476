use std::error::Error;
use std::fmt;

use crate::errors::ServerError;

#[derive(Debug)]
pub enum EstateError {
    Config(String),
    Network(String),
    Status(u16),
    Deserialize(String),
}

impl fmt::Display for EstateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstateError::Config(msg) => write!(f, "Config error: {msg}"),
            EstateError::Network(msg) => write!(f, "Network error: {msg}"),
            EstateError::Status(code) => write!(f, "Estate API returned HTTP {code}"),
            EstateError::Deserialize(msg) => write!(f, "Unexpected response shape: {msg}"),
        }
    }
}

impl Error for EstateError {}

impl From<EstateError> for ServerError {
    fn from(e: EstateError) -> Self {
        match e {
            EstateError::Status(404) => ServerError::NotFound,
            other => ServerError::Network(other.to_string()),
        }
    }
}
