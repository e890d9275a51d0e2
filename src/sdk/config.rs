use std::env;

use super::routing::error::RoutingError;

pub const DEFAULT_BASE_URL: &str = "https://test-web.zmaps-api.com";
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingConfig {
    pub api_key: String,
    pub base_url: String,
    pub requests_per_minute: u32,
}

impl RoutingConfig {
    /// Reads `ROUTE_API_KEY`, `ROUTE_API_BASE_URL` and `ROUTE_API_RPM`.
    pub fn from_env() -> Result<Self, RoutingError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RoutingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ROUTE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RoutingError::Config("ROUTE_API_KEY is not set".to_string()))?;

        let base_url = lookup("ROUTE_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let requests_per_minute = match lookup("ROUTE_API_RPM") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                RoutingError::Config(format!("ROUTE_API_RPM \"{}\" is not a number: {}", raw, e))
            })?,
            None => DEFAULT_REQUESTS_PER_MINUTE,
        };

        Ok(Self {
            api_key,
            base_url,
            requests_per_minute,
        })
    }
}
