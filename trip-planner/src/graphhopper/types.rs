//! GraphHopper API response DTOs.
//!
//! These types map directly to the GraphHopper geocoding and routing
//! JSON responses. They use `Option` and defaults liberally because the
//! service omits fields rather than sending nulls in several cases.

use serde::Deserialize;

use crate::domain::{
    Coordinates, Instruction, InvalidCoordinates, Location, RouteResult, TransportMode,
};

/// Response from the geocoding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Ranked candidate matches, best first.
    #[serde(default)]
    pub hits: Vec<GeocodeHit>,
}

/// A single candidate match for a geocoding query.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeHit {
    /// Place name (street, POI, ...). Omitted for some hit kinds.
    pub name: Option<String>,

    /// City the hit belongs to, when known.
    pub city: Option<String>,

    /// Geographic position of the hit.
    pub point: GeoPoint,
}

/// A raw latitude/longitude pair as the service sends it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeHit {
    /// Convert a hit into a domain `Location`.
    ///
    /// The display name is the hit's name (falling back to the original
    /// query text) with the city appended when present. Fails when the
    /// service reports coordinates outside the valid ranges.
    pub fn into_location(self, query: &str) -> Result<Location, InvalidCoordinates> {
        let coords = Coordinates::new(self.point.lat, self.point.lng)?;

        let mut name = self.name.unwrap_or_else(|| query.to_string());
        if let Some(city) = self.city {
            if !city.is_empty() {
                name.push_str(", ");
                name.push_str(&city);
            }
        }

        Ok(Location::new(coords, name))
    }
}

/// Response from the routing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// Computed paths, best first. Empty when no route exists.
    #[serde(default)]
    pub paths: Vec<RoutePath>,
}

/// One computed path with its metrics and navigation steps.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutePath {
    /// Total length in meters.
    #[serde(default)]
    pub distance: f64,

    /// Total travel time in milliseconds.
    #[serde(default)]
    pub time: u64,

    /// Turn-by-turn steps. Absent when instruction generation is off.
    pub instructions: Option<Vec<PathInstruction>>,
}

/// One turn-by-turn step as the service sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct PathInstruction {
    /// Step text. The service occasionally omits it.
    pub text: Option<String>,

    /// Step length in meters.
    #[serde(default)]
    pub distance: f64,

    /// Step duration in milliseconds.
    #[serde(default)]
    pub time: u64,
}

impl RoutePath {
    /// Convert a path into a domain `RouteResult` for the given mode.
    pub fn into_route_result(self, mode: TransportMode) -> RouteResult {
        let instructions = self
            .instructions
            .unwrap_or_default()
            .into_iter()
            .map(|step| Instruction {
                text: step.text.unwrap_or_else(|| "Continuar".to_string()),
                distance_meters: step.distance,
                duration_millis: step.time,
            })
            .collect();

        RouteResult {
            mode,
            distance_meters: self.distance,
            duration_millis: self.time,
            instructions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_geocode_response() {
        let json = r#"{
            "hits": [
                {
                    "name": "Plaza de Armas",
                    "city": "Santiago",
                    "point": { "lat": -33.4378, "lng": -70.6504 }
                }
            ],
            "locale": "es"
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.hits.len(), 1);

        let location = response.hits[0].clone().into_location("plaza").unwrap();
        assert_eq!(location.name, "Plaza de Armas, Santiago");
        assert_eq!(location.coords.latitude(), -33.4378);
    }

    #[test]
    fn hit_without_name_falls_back_to_query() {
        let hit = GeocodeHit {
            name: None,
            city: Some("Santiago".to_string()),
            point: GeoPoint {
                lat: -33.44,
                lng: -70.65,
            },
        };

        let location = hit.into_location("calle falsa 123").unwrap();
        assert_eq!(location.name, "calle falsa 123, Santiago");
    }

    #[test]
    fn hit_with_invalid_point_is_rejected() {
        let hit = GeocodeHit {
            name: Some("bogus".to_string()),
            city: None,
            point: GeoPoint {
                lat: 400.0,
                lng: 0.0,
            },
        };

        assert!(hit.into_location("bogus").is_err());
    }

    #[test]
    fn parse_route_response() {
        let json = r#"{
            "paths": [
                {
                    "distance": 4300.5,
                    "time": 720000,
                    "instructions": [
                        { "text": "Continúe por Alameda", "distance": 1200.0, "time": 180000 },
                        { "distance": 3100.5, "time": 540000 }
                    ]
                }
            ]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.paths.len(), 1);

        let result = response.paths[0]
            .clone()
            .into_route_result(TransportMode::Car);
        assert_eq!(result.distance_meters, 4300.5);
        assert_eq!(result.duration_millis, 720_000);
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[0].text, "Continúe por Alameda");
        // Missing text falls back to a generic step
        assert_eq!(result.instructions[1].text, "Continuar");
    }

    #[test]
    fn missing_hits_and_paths_default_to_empty() {
        let geocode: GeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(geocode.hits.is_empty());

        let route: RouteResponse = serde_json::from_str("{}").unwrap();
        assert!(route.paths.is_empty());
    }

    #[test]
    fn path_without_instructions_converts_to_empty_steps() {
        let json = r#"{ "paths": [ { "distance": 100.0, "time": 60000 } ] }"#;
        let response: RouteResponse = serde_json::from_str(json).unwrap();

        let result = response.paths[0]
            .clone()
            .into_route_result(TransportMode::Walk);
        assert!(result.instructions.is_empty());
    }
}
