pub mod bounds;
pub mod coord;
pub mod error;
pub mod provider;
pub mod query;
pub mod route;
pub mod service;

pub use bounds::{compute_bounds, BoundingRegion, ViewFit};
pub use coord::Coord;
pub use error::RoutingError;
pub use provider::{FixtureRouteProvider, RemoteRouteProvider};
pub use query::{RouteParams, RouteQuery};
pub use route::{decode_route, DecodedRoute, RouteSegment, RouteStats};
pub use service::RoutingProvider;
