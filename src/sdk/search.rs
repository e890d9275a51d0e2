//! Walking route search: ask the backend, then draw the answer on the map.
use serde::Serialize;

use super::display::{show_route_info, DisplayStrings, StatsDisplay};
use super::map::{show_markers, MapSurface, Polyline, SharedMap};
use super::routing::{
    bounds::{compute_bounds, BoundingRegion, ViewFit},
    coord::Coord,
    error::RoutingError,
    query::RouteQuery,
    route::{decode_route, RouteStats},
    service::RoutingProvider,
};

/// What a successful search put on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRoute {
    pub stats: RouteStats,
    pub display: DisplayStrings,
    pub segment_count: usize,
    pub covered_segment_count: usize,
    pub bounds: Option<BoundingRegion>,
    pub view_fit: Option<ViewFit>,
}

pub struct RouteSearch<P> {
    provider: P,
}

impl<P: RoutingProvider> RouteSearch<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Searches a walking route and renders it into `map`.
    ///
    /// Failures are logged and returned; nothing is drawn for a failed search. Overlapping
    /// calls are not deduplicated: each one renders when its response arrives.
    pub async fn search<S, D>(
        &self,
        map: &SharedMap<S, D>,
        origin: Coord,
        destination: Coord,
    ) -> Result<RenderedRoute, RoutingError>
    where
        S: MapSurface,
        D: StatsDisplay,
    {
        let query = RouteQuery::walking(origin, destination);

        let response = self.provider.search_route(&query).await.map_err(|e| {
            log::error!("Route search {} -> {} failed: {}", origin, destination, e);
            e
        })?;

        let decoded = response
            .into_route_result()
            .and_then(|result| result.into_first_route())
            .and_then(|route| decode_route(&route))
            .map_err(|e| {
                log::error!("Route search {} -> {} failed: {}", origin, destination, e);
                e
            })?;

        let mut ctx = map.lock().await;

        let display = DisplayStrings::from_stats(&decoded.stats, ctx.locale);
        show_route_info(&mut ctx.display, &display);

        for segment in &decoded.segments {
            ctx.surface.add_polyline(Polyline::for_segment(segment));
        }

        let bounds = compute_bounds(&decoded.all_coordinates);
        let view_fit = bounds.map(|region| region.view_fit(&ctx.options));
        match view_fit {
            Some(fit) => {
                ctx.surface.set_center(fit.center);
                ctx.surface.set_zoom(fit.zoom);
            }
            None => log::warn!("Route has no geometry; keeping the current view"),
        }

        show_markers(&mut ctx.surface, origin, destination);

        let rendered = RenderedRoute {
            stats: decoded.stats,
            display,
            segment_count: decoded.segments.len(),
            covered_segment_count: decoded.segments.iter().filter(|s| s.has_cover).count(),
            bounds,
            view_fit,
        };
        log::info!(
            "Rendered route {} -> {}: {}, {} ({} of {} segments covered)",
            origin,
            destination,
            rendered.display.time,
            rendered.display.distance,
            rendered.covered_segment_count,
            rendered.segment_count
        );
        Ok(rendered)
    }
}
