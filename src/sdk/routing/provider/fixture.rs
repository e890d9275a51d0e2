use super::types::RouteSearchResponse;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::query::RouteQuery;
use crate::sdk::routing::service::RoutingProvider;
use std::{fs, path::Path};

/// Answers every search with the same recorded response body.
#[derive(Debug, Clone)]
pub struct FixtureRouteProvider {
    body: String,
}

impl FixtureRouteProvider {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RoutingError> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|e| {
            RoutingError::Config(format!("Cannot read response file {}: {}", path.display(), e))
        })?;
        Ok(Self::new(body))
    }
}

impl RoutingProvider for FixtureRouteProvider {
    async fn search_route(&self, query: &RouteQuery) -> Result<RouteSearchResponse, RoutingError> {
        let params = query.to_params();
        log::debug!(
            "[PROVIDER] Replaying recorded route for {} -> {}",
            params.from,
            params.to
        );
        serde_json::from_str(&self.body).map_err(|e| {
            log::error!("Failed to parse recorded RouteSearchResponse: {}", e);
            RoutingError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::coord::Coord;

    fn query() -> RouteQuery {
        RouteQuery::walking(
            Coord::new(35.681406, 139.767132).unwrap(),
            Coord::new(35.666719, 139.758303).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_replays_body() {
        let provider = FixtureRouteProvider::new(r#"{"ret": {"status": "NG", "message": ""}}"#);
        let resp = provider.search_route(&query()).await.unwrap();
        assert_eq!(resp.status(), Some("NG"));
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let provider = FixtureRouteProvider::new("<html>502</html>");
        assert!(matches!(
            provider.search_route(&query()).await,
            Err(RoutingError::Decode(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FixtureRouteProvider::from_file("/nonexistent/route.json"),
            Err(RoutingError::Config(_))
        ));
    }
}
