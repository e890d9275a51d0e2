pub mod config;
pub mod display;
pub mod map;
pub mod routing;
pub mod search;
pub mod util;
