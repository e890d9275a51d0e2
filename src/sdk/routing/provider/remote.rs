use super::types::RouteSearchResponse;
use crate::sdk::config::RoutingConfig;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::query::{RouteQuery, WALK_ROUTE_PATH};
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::util::rate_limit::{route_limiter, Limiter};
use reqwest::Client;
use std::time::Duration;

pub struct RemoteRouteProvider {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl RemoteRouteProvider {
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| RoutingError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            limiter: route_limiter(config.requests_per_minute)?,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, WALK_ROUTE_PATH)
    }
}

impl RoutingProvider for RemoteRouteProvider {
    async fn search_route(&self, query: &RouteQuery) -> Result<RouteSearchResponse, RoutingError> {
        let url = self.endpoint();
        let params = query.to_params();

        log::debug!("Waiting for route limiter before calling {}", url);
        self.limiter.until_ready().await;

        log::debug!(
            "[PROVIDER] Calling remote route search {} -> {}",
            params.from,
            params.to
        );
        let response = match self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .header("Authorization", "referer")
            .query(&params)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send GET request. URL: {}\nError: {}", url, e);
                return Err(RoutingError::SearchAborted(e.to_string()));
            }
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RoutingError::SearchAborted(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            log::error!(
                "API returned non-success status: {}. Body: {}",
                status,
                text
            );
            return Err(RoutingError::SearchFailed {
                status: format!("HTTP {}", status.as_u16()),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse RouteSearchResponse. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            RoutingError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let provider = RemoteRouteProvider::new(&RoutingConfig {
            api_key: "key".to_string(),
            base_url: "http://localhost:9000".to_string(),
            requests_per_minute: 60,
        })
        .unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9000/route/route_mbn/walk");
    }

    #[tokio::test]
    async fn test_unreachable_backend_aborts() {
        // Reserve a free port, then release it so nothing is listening there
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let provider = RemoteRouteProvider::new(&RoutingConfig {
            api_key: "key".to_string(),
            base_url: format!("http://127.0.0.1:{}", port),
            requests_per_minute: 60,
        })
        .unwrap();
        let origin = "35.681406,139.767132".parse().unwrap();
        let destination = "35.666719,139.758303".parse().unwrap();

        let result = provider
            .search_route(&RouteQuery::walking(origin, destination))
            .await;
        assert!(matches!(result, Err(RoutingError::SearchAborted(_))));
    }
}
