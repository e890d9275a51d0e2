use std::num::NonZeroU32;
use std::sync::Arc;
use governor::{Quota, RateLimiter};
use governor::state::{NotKeyed, InMemoryState};
use governor::clock::DefaultClock;

use crate::sdk::routing::error::RoutingError;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Throttle for the route endpoint, shared by every search issued through one provider.
pub fn route_limiter(requests_per_minute: u32) -> Result<Limiter, RoutingError> {
    let per_minute = NonZeroU32::new(requests_per_minute)
        .ok_or_else(|| RoutingError::Config("requests per minute must be > 0".to_string()))?;
    Ok(Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))))
}
