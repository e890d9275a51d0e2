pub mod sdk;

pub use sdk::config::RoutingConfig;
pub use sdk::display::{DisplayBoard, DisplayStrings, Locale};
pub use sdk::map::{MapContext, MapOptions, RecordingSurface, SharedMap};
pub use sdk::routing::{Coord, FixtureRouteProvider, RemoteRouteProvider, RoutingError};
pub use sdk::search::{RenderedRoute, RouteSearch};
