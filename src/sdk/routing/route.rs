use serde::Serialize;

use super::coord::Coord;
use super::error::RoutingError;
use super::provider::types::{RawLink, RawRoute};

/// `structure_type` tag for a roofed / covered walkway.
pub const STRUCTURE_ROOF: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStats {
    pub duration_seconds: u64,
    pub distance_meters: f64,
    pub step_count: u64,
    pub calorie_burn: f64,
}

/// One link of the route, drawn as its own polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub points: Vec<Coord>,
    pub has_cover: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRoute {
    pub stats: RouteStats,
    pub segments: Vec<RouteSegment>,
    /// Every segment's points, in traversal order. Used for bounds only.
    pub all_coordinates: Vec<Coord>,
}

impl TryFrom<&RawRoute> for RouteStats {
    type Error = RoutingError;

    fn try_from(route: &RawRoute) -> Result<Self, Self::Error> {
        let non_negative = |name: &str, value: f64| {
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(RoutingError::Decode(format!("{} must be >= 0, got {}", name, value)))
            }
        };
        // Counts may arrive as floats; whole units are floored like the raw display would
        Ok(RouteStats {
            duration_seconds: non_negative("time", route.time)?.floor() as u64,
            distance_meters: non_negative("distance", route.distance)?,
            step_count: non_negative("step_count", route.step_count)?.floor() as u64,
            calorie_burn: non_negative("calorie", route.calorie)?,
        })
    }
}

impl RouteSegment {
    fn from_link(link: &RawLink) -> Result<Self, RoutingError> {
        let points = link
            .line
            .coordinates
            .iter()
            .map(|pair| {
                Coord::from_lng_lat(*pair).map_err(|e| {
                    RoutingError::Decode(format!("Bad link point [{}, {}]: {}", pair[0], pair[1], e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if points.len() < 2 {
            return Err(RoutingError::Decode(format!(
                "Link geometry needs at least 2 points, got {}",
                points.len()
            )));
        }

        let has_cover = link
            .structure_type
            .as_ref()
            .is_some_and(|tags| tags.contains(&STRUCTURE_ROOF));

        Ok(RouteSegment { points, has_cover })
    }
}

/// Flattens the section/link tree into styled segments, keeping traversal order.
pub fn decode_route(route: &RawRoute) -> Result<DecodedRoute, RoutingError> {
    let stats = RouteStats::try_from(route)?;

    let segments = route
        .section
        .iter()
        .flat_map(|section| section.link.iter())
        .map(RouteSegment::from_link)
        .collect::<Result<Vec<_>, _>>()?;

    let all_coordinates = segments
        .iter()
        .flat_map(|segment| segment.points.iter().copied())
        .collect();

    log::debug!(
        "Decoded route: {} sections, {} segments ({} covered)",
        route.section.len(),
        segments.len(),
        segments.iter().filter(|s| s.has_cover).count()
    );

    Ok(DecodedRoute {
        stats,
        segments,
        all_coordinates,
    })
}
