//! GraphHopper API client.
//!
//! This module provides an HTTP client for the GraphHopper geocoding
//! and routing endpoints.
//!
//! Key characteristics of the API:
//! - Both endpoints authenticate with a `key` query parameter
//! - Routing times are in **milliseconds**; display formatting works
//!   in whole seconds
//! - An empty `hits`/`paths` array is a well-formed response meaning
//!   "nothing found", distinct from an error status

mod client;
mod error;
mod mock;
mod types;

pub use client::{GraphHopperClient, GraphHopperConfig};
pub use error::GraphHopperError;
pub use mock::MockMapService;
pub use types::{GeoPoint, GeocodeHit, GeocodeResponse, PathInstruction, RoutePath, RouteResponse};

use crate::domain::{Coordinates, Location, RouteResult, TransportMode};

/// The mapping operations the planner needs.
///
/// Implemented by [`GraphHopperClient`] against the live API and by
/// [`MockMapService`] for tests and offline development.
#[allow(async_fn_in_trait)]
pub trait MapService {
    /// Resolve a free-text address to a location.
    async fn geocode(&self, address: &str) -> Result<Location, GraphHopperError>;

    /// Compute a route between two points for the given transport mode.
    async fn route(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        mode: TransportMode,
    ) -> Result<RouteResult, GraphHopperError>;
}
