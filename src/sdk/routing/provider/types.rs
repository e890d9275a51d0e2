use serde::Deserialize;
use serde_json::Value;

use crate::sdk::routing::error::RoutingError;

/// Status string the backend uses for a successful search.
pub const STATUS_OK: &str = "OK";

// --- Data Structures for parsing route search responses ---

#[derive(Debug, Deserialize)]
pub struct RouteSearchResponse {
    #[serde(default)]
    pub ret: Option<Ret>,
}

#[derive(Debug, Deserialize)]
pub struct Ret {
    pub status: String,
    // Only shaped like `RouteMessage` when status is OK; errors carry a plain string
    #[serde(default)]
    pub message: Value,
}

#[derive(Debug, Deserialize)]
pub struct RouteMessage {
    pub result: RouteResult,
}

#[derive(Debug, Deserialize)]
pub struct RouteResult {
    #[serde(default)]
    pub item: Vec<RouteItem>,
}

#[derive(Debug, Deserialize)]
pub struct RouteItem {
    pub route: RawRoute,
}

#[derive(Debug, Deserialize)]
pub struct RawRoute {
    pub distance: f64,
    pub time: f64,
    #[serde(default)]
    pub step_count: f64,
    #[serde(default)]
    pub calorie: f64,
    #[serde(default)]
    pub section: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub link: Vec<RawLink>,
}

#[derive(Debug, Deserialize)]
pub struct RawLink {
    #[serde(default)]
    pub structure_type: Option<Vec<i64>>,
    pub line: LineGeometry,
}

#[derive(Debug, Deserialize)]
pub struct LineGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteSearchResponse {
    pub fn status(&self) -> Option<&str> {
        self.ret.as_ref().map(|ret| ret.status.as_str())
    }

    /// Checks the status and decodes the message body of a successful search.
    pub fn into_route_result(self) -> Result<RouteResult, RoutingError> {
        let ret = self.ret.ok_or_else(|| RoutingError::SearchFailed {
            status: "missing".to_string(),
        })?;
        if ret.status != STATUS_OK {
            return Err(RoutingError::SearchFailed { status: ret.status });
        }
        let message: RouteMessage = serde_json::from_value(ret.message)?;
        Ok(message.result)
    }
}

impl RouteResult {
    /// The backend ranks items; only the first one is shown.
    pub fn into_first_route(self) -> Result<RawRoute, RoutingError> {
        self.item
            .into_iter()
            .next()
            .map(|item| item.route)
            .ok_or_else(|| RoutingError::Decode("No route item in success response".to_string()))
    }
}
