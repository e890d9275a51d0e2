//! Boundary to the map surface: render commands, map setup options and the shared handle
//! searches render into.

use serde::Serialize;
use tokio::sync::Mutex;

use super::display::{Locale, StatsDisplay};
use super::routing::coord::Coord;
use super::routing::route::RouteSegment;

/// Tokyo Station, where the map opens.
pub const DEFAULT_CENTER: Coord = Coord {
    lat: 35.669055759072684,
    lng: 139.75864681491296,
};

pub const COVERED_COLOR: &str = "#00dc00";
pub const UNCOVERED_COLOR: &str = "#ff0000";
pub const ROUTE_LINE_WIDTH: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    /// Large red pin
    Origin,
    /// Large green pin
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coord,
    pub style: MarkerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePattern {
    Solid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Coord>,
    pub color: &'static str,
    pub width: u32,
    pub pattern: LinePattern,
    pub opacity: f64,
}

impl Polyline {
    /// Green for covered walkways, red otherwise.
    pub fn for_segment(segment: &RouteSegment) -> Self {
        Self {
            points: segment.points.clone(),
            color: if segment.has_cover {
                COVERED_COLOR
            } else {
                UNCOVERED_COLOR
            },
            width: ROUTE_LINE_WIDTH,
            pattern: LinePattern::Solid,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileResolution {
    Standard,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

/// Values handed to the map at startup. The core never reads them back from the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub mouse_wheel_reverse_zoom: bool,
    pub center_zoom: bool,
    pub center: Coord,
    pub rotatable: bool,
    pub tiltable: bool,
    pub tile_resolution: TileResolution,
    pub viewport: Viewport,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            mouse_wheel_reverse_zoom: true,
            center_zoom: false,
            center: DEFAULT_CENTER,
            rotatable: true,
            tiltable: true,
            tile_resolution: TileResolution::High,
            viewport: Viewport {
                width_px: 1280.0,
                height_px: 720.0,
            },
            min_zoom: 3.0,
            max_zoom: 20.0,
        }
    }
}

/// One-way render commands issued to the map.
pub trait MapSurface {
    fn add_marker(&mut self, marker: Marker);
    fn add_polyline(&mut self, polyline: Polyline);
    fn set_center(&mut self, center: Coord);
    fn set_zoom(&mut self, zoom: f64);
}

/// Places the origin pin, then the destination pin.
pub fn show_markers<S: MapSurface + ?Sized>(surface: &mut S, origin: Coord, destination: Coord) {
    surface.add_marker(Marker {
        position: origin,
        style: MarkerStyle::Origin,
    });
    surface.add_marker(Marker {
        position: destination,
        style: MarkerStyle::Destination,
    });
}

/// Keeps every command it receives, in order. Backs the CLI output and tests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSurface {
    pub markers: Vec<Marker>,
    pub polylines: Vec<Polyline>,
    pub center: Option<Coord>,
    pub zoom: Option<f64>,
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn add_polyline(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    fn set_center(&mut self, center: Coord) {
        self.center = Some(center);
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = Some(zoom);
    }
}

/// Everything a search renders into: the map, the stats panel and their settings.
pub struct MapContext<S, D> {
    pub surface: S,
    pub display: D,
    pub options: MapOptions,
    pub locale: Locale,
}

/// Process-wide handle to the map. Locked only while a finished search renders.
pub type SharedMap<S, D> = Mutex<MapContext<S, D>>;

impl<S: MapSurface, D: StatsDisplay> MapContext<S, D> {
    pub fn new(surface: S, display: D, options: MapOptions, locale: Locale) -> Self {
        log::debug!(
            "Map ready at {} (rotatable={}, tiltable={}, tiles={:?})",
            options.center,
            options.rotatable,
            options.tiltable,
            options.tile_resolution
        );
        Self {
            surface,
            display,
            options,
            locale,
        }
    }

    pub fn shared(self) -> SharedMap<S, D> {
        Mutex::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_style() {
        let points = vec![
            Coord { lat: 35.6, lng: 139.7 },
            Coord { lat: 35.7, lng: 139.8 },
        ];
        let covered = Polyline::for_segment(&RouteSegment {
            points: points.clone(),
            has_cover: true,
        });
        let open = Polyline::for_segment(&RouteSegment {
            points,
            has_cover: false,
        });

        assert_eq!(covered.color, "#00dc00");
        assert_eq!(open.color, "#ff0000");
        assert_eq!(covered.width, 6);
        assert_eq!(open.pattern, LinePattern::Solid);
        assert_eq!(open.opacity, 1.0);
        assert_eq!(covered.points, open.points);
    }

    #[test]
    fn test_markers_origin_first() {
        let mut surface = RecordingSurface::default();
        let origin = Coord { lat: 35.681406, lng: 139.767132 };
        let destination = Coord { lat: 35.666719, lng: 139.758303 };
        show_markers(&mut surface, origin, destination);

        assert_eq!(surface.markers.len(), 2);
        assert_eq!(surface.markers[0].position, origin);
        assert_eq!(surface.markers[0].style, MarkerStyle::Origin);
        assert_eq!(surface.markers[1].position, destination);
        assert_eq!(surface.markers[1].style, MarkerStyle::Destination);
    }

    #[test]
    fn test_default_options() {
        let options = MapOptions::default();
        assert!(options.mouse_wheel_reverse_zoom);
        assert!(!options.center_zoom);
        assert_eq!(options.center, DEFAULT_CENTER);
        assert_eq!(options.tile_resolution, TileResolution::High);
    }
}
