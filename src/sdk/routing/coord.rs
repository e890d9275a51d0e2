use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::error::RoutingError;

/// A WGS84 position. Latitude comes first, unlike the GeoJSON pairs the backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

impl Coord {
    /// Builds a coordinate, rejecting anything outside lat [-90, 90] / lng [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, RoutingError> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        if lat_ok && lng_ok {
            Ok(Self { lat, lng })
        } else {
            Err(RoutingError::InvalidCoordinate { lat, lng })
        }
    }

    /// Converts a GeoJSON `[lng, lat]` pair.
    pub fn from_lng_lat(pair: [f64; 2]) -> Result<Self, RoutingError> {
        Self::new(pair[1], pair[0])
    }

    /// The `"lng,lat"` form the route endpoint expects for `from` / `to`.
    pub fn to_query_param(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"`, the order people copy out of map apps.
impl FromStr for Coord {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| RoutingError::Config(format!("Expected \"lat,lng\", got \"{}\"", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| RoutingError::Config(format!("Invalid number \"{}\": {}", part, e)))
        };
        Coord::new(parse(lat)?, parse(lng)?)
    }
}
