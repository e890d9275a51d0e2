pub mod fixture;
pub mod remote;
pub mod types;

pub use fixture::FixtureRouteProvider;
pub use remote::RemoteRouteProvider;
