use std::future::Future;

use super::error::RoutingError;
use super::provider::types::RouteSearchResponse;
use super::query::RouteQuery;

pub trait RoutingProvider: Send + Sync {
    /// Runs one route search. Resolves once, with the raw backend response or the reason
    /// the request never got an answer.
    fn search_route(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RouteSearchResponse, RoutingError>> + Send;
}
