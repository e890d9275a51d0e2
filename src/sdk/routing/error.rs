use thiserror::Error;

use crate::sdk::display::DisplayTarget;

#[derive(Error, Debug)]
pub enum RoutingError {
    /// The request could not be built or dispatched.
    #[error("Route search aborted while issuing the request: {0}")]
    SearchAborted(String),

    // The backend answered, but not with a success status
    #[error("Route search failed (status {status})")]
    SearchFailed { status: String },

    #[error("Unexpected route response shape: {0}")]
    Decode(String),

    #[error("Coordinate out of range: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Display target not found: {0}")]
    DisplayTargetMissing(DisplayTarget),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RoutingError {
    fn from(err: serde_json::Error) -> Self {
        RoutingError::Decode(err.to_string())
    }
}
