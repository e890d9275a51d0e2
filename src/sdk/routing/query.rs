use serde::Serialize;

use super::coord::Coord;

/// Backend search mode for "walking, single best route".
pub const WALK_SINGLE_ROUTE: u8 = 4;

/// Path of the walking-route endpoint, relative to the API base URL.
pub const WALK_ROUTE_PATH: &str = "/route/route_mbn/walk";

#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    pub origin: Coord,
    pub destination: Coord,
    pub want_calorie: bool,
    pub want_step_count: bool,
}

/// Wire parameters sent to the route endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteParams {
    pub search_type: u8,
    pub from: String,
    pub to: String,
    pub calorie: bool,
    pub step_count: bool,
}

impl RouteQuery {
    pub fn walking(origin: Coord, destination: Coord) -> Self {
        Self {
            origin,
            destination,
            want_calorie: true,
            want_step_count: true,
        }
    }

    pub fn to_params(&self) -> RouteParams {
        RouteParams {
            search_type: WALK_SINGLE_ROUTE,
            from: self.origin.to_query_param(),
            to: self.destination.to_query_param(),
            calorie: self.want_calorie,
            step_count: self.want_step_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_params() {
        let origin = Coord::new(35.681406, 139.767132).unwrap();
        let destination = Coord::new(35.666719, 139.758303).unwrap();
        let params = RouteQuery::walking(origin, destination).to_params();

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "search_type": 4,
                "from": "139.767132,35.681406",
                "to": "139.758303,35.666719",
                "calorie": true,
                "step_count": true,
            })
        );
    }
}
