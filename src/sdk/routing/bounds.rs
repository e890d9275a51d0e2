//! Bounding rectangle of a route and the camera fit derived from it.

use geo::Point;
use serde::Serialize;

use super::coord::Coord;
use crate::sdk::map::MapOptions;

/// Web Mercator half-extent in meters (EPSG:3857)
const EARTH_MERCATOR_MAX: f64 = 20037508.34;
const EARTH_SIZE_METERS: f64 = 2.0 * EARTH_MERCATOR_MAX;

/// Maximum latitude that can be represented in Web Mercator
const MAX_LATITUDE: f64 = 85.05112878;

/// Edge length of one map tile in pixels at integer zoom levels.
const TILE_SIZE_PX: f64 = 256.0;

/// Zoomed out slightly from the tight fit so the route does not touch the screen edge.
pub const ZOOM_MARGIN: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingRegion {
    pub south_west: Coord,
    pub north_east: Coord,
}

/// Where to point the camera so a region is fully visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewFit {
    pub center: Coord,
    pub zoom: f64,
}

/// Smallest lat/lng rectangle containing every point, or `None` for no points.
pub fn compute_bounds(points: &[Coord]) -> Option<BoundingRegion> {
    if points.is_empty() {
        return None;
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;

    for point in points {
        min_lat = min_lat.min(point.lat);
        max_lat = max_lat.max(point.lat);
        min_lng = min_lng.min(point.lng);
        max_lng = max_lng.max(point.lng);
    }

    Some(BoundingRegion {
        south_west: Coord { lat: min_lat, lng: min_lng },
        north_east: Coord { lat: max_lat, lng: max_lng },
    })
}

fn wgs84_to_mercator(coord: Coord) -> Point<f64> {
    let lat = coord.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = coord.lng * EARTH_MERCATOR_MAX / 180.0;
    let lat_rad = lat.to_radians();
    let y = (lat_rad.tan() + (1.0 / lat_rad.cos())).ln() * EARTH_MERCATOR_MAX / std::f64::consts::PI;
    Point::new(x, y)
}

fn mercator_to_wgs84(point: Point<f64>) -> Coord {
    let lng = point.x() * 180.0 / EARTH_MERCATOR_MAX;
    let lat = (std::f64::consts::PI / 2.0
        - 2.0 * (-point.y() * std::f64::consts::PI / EARTH_MERCATOR_MAX).exp().atan())
    .to_degrees();
    Coord { lat, lng }
}

/// Largest zoom at which `extent_m` meters fit into `viewport_px` pixels.
fn fit_zoom(viewport_px: f64, extent_m: f64) -> f64 {
    (viewport_px * EARTH_SIZE_METERS / (TILE_SIZE_PX * extent_m)).log2()
}

impl BoundingRegion {
    /// Centers on the projected midpoint and picks the tightest zoom for the viewport,
    /// minus [`ZOOM_MARGIN`].
    pub fn view_fit(&self, options: &MapOptions) -> ViewFit {
        let sw = wgs84_to_mercator(self.south_west);
        let ne = wgs84_to_mercator(self.north_east);

        let center = mercator_to_wgs84(Point::new(
            (sw.x() + ne.x()) / 2.0,
            (sw.y() + ne.y()) / 2.0,
        ));

        let zoom_x = fit_zoom(options.viewport.width_px, ne.x() - sw.x());
        let zoom_y = fit_zoom(options.viewport.height_px, ne.y() - sw.y());
        let zoom = zoom_x.min(zoom_y);
        // A degenerate viewport gives NaN; fall back to the widest view
        let zoom = if zoom.is_nan() {
            options.min_zoom
        } else {
            zoom.clamp(options.min_zoom, options.max_zoom)
        };

        ViewFit {
            center,
            zoom: zoom - ZOOM_MARGIN,
        }
    }
}
