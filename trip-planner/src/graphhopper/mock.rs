//! Mock map service for testing without API access.
//!
//! Serves canned geocoding and routing responses, either built in code
//! or loaded from JSON fixture files shaped like real API responses.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::domain::{Coordinates, Location, RouteResult, TransportMode};

use super::MapService;
use super::error::GraphHopperError;
use super::types::{GeocodeResponse, RouteResponse};

/// Mock map service with canned responses.
///
/// Modes without a canned route answer `NoRoute`; modes marked broken
/// answer a service error. Useful for development and testing without
/// a real GraphHopper API key.
#[derive(Debug, Clone, Default)]
pub struct MockMapService {
    geocode_hit: Option<Location>,
    routes: HashMap<TransportMode, RouteResult>,
    broken_modes: HashSet<TransportMode>,
}

impl MockMapService {
    /// Create a mock that answers `NoHits` and `NoRoute` to everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every geocoding query with this location.
    pub fn with_geocode_hit(mut self, location: Location) -> Self {
        self.geocode_hit = Some(location);
        self
    }

    /// Answer routing requests for `mode` with this result.
    pub fn with_route(mut self, result: RouteResult) -> Self {
        self.routes.insert(result.mode, result);
        self
    }

    /// Make routing requests for `mode` fail with a service error.
    pub fn with_broken_mode(mut self, mode: TransportMode) -> Self {
        self.broken_modes.insert(mode);
        self
    }

    /// Create a mock by loading JSON fixtures from a directory.
    ///
    /// Expects files shaped like real API responses: `geocode.json`
    /// (geocoding) and `{vehicle}.json` per mode (`car.json`,
    /// `bike.json`, `foot.json`). All files are optional; missing ones
    /// leave the corresponding request unanswered.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, GraphHopperError> {
        let data_dir = data_dir.as_ref();
        let mut mock = Self::new();

        let read = |name: &str| -> Result<Option<String>, GraphHopperError> {
            let path = data_dir.join(name);
            if !path.is_file() {
                return Ok(None);
            }
            std::fs::read_to_string(&path)
                .map(Some)
                .map_err(|e| GraphHopperError::Api {
                    status: 0,
                    message: format!("Failed to read {:?}: {}", path, e),
                })
        };

        if let Some(json) = read("geocode.json")? {
            let response: GeocodeResponse =
                serde_json::from_str(&json).map_err(|e| GraphHopperError::Json {
                    message: format!("Failed to parse geocode.json: {e}"),
                    body: None,
                })?;

            if let Some(hit) = response.hits.into_iter().next() {
                let location =
                    hit.into_location("fixture")
                        .map_err(|e| GraphHopperError::Json {
                            message: format!("Invalid point in geocode.json: {e}"),
                            body: None,
                        })?;
                mock.geocode_hit = Some(location);
            }
        }

        for mode in TransportMode::ALL {
            let Some(json) = read(&format!("{}.json", mode.vehicle()))? else {
                continue;
            };

            let response: RouteResponse =
                serde_json::from_str(&json).map_err(|e| GraphHopperError::Json {
                    message: format!("Failed to parse {}.json: {e}", mode.vehicle()),
                    body: None,
                })?;

            if let Some(path) = response.paths.into_iter().next() {
                mock.routes.insert(mode, path.into_route_result(mode));
            }
        }

        Ok(mock)
    }
}

impl MapService for MockMapService {
    async fn geocode(&self, _address: &str) -> Result<Location, GraphHopperError> {
        self.geocode_hit.clone().ok_or(GraphHopperError::NoHits)
    }

    async fn route(
        &self,
        _from: &Coordinates,
        _to: &Coordinates,
        mode: TransportMode,
    ) -> Result<RouteResult, GraphHopperError> {
        if self.broken_modes.contains(&mode) {
            return Err(GraphHopperError::Api {
                status: 503,
                message: "mock service error".to_string(),
            });
        }

        self.routes
            .get(&mode)
            .cloned()
            .ok_or(GraphHopperError::NoRoute)
    }
}
