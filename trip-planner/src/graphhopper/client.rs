//! GraphHopper HTTP client.
//!
//! Provides async methods for the GraphHopper geocoding and routing
//! endpoints and conversion of their responses to domain types.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Coordinates, Location, RouteResult, TransportMode};

use super::MapService;
use super::error::GraphHopperError;
use super::types::{GeocodeResponse, RouteResponse};

/// Default base URL for the GraphHopper API.
const DEFAULT_BASE_URL: &str = "https://graphhopper.com/api/1";

/// Configuration for the GraphHopper client.
#[derive(Debug, Clone)]
pub struct GraphHopperConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production GraphHopper)
    pub base_url: String,
    /// Country qualifier appended to geocoding queries
    pub country: String,
    /// Locale for geocoding hits and route instructions
    pub locale: String,
    /// Geocoding request timeout in seconds
    pub geocode_timeout_secs: u64,
    /// Routing request timeout in seconds
    pub route_timeout_secs: u64,
}

impl GraphHopperConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country: "Chile".to_string(),
            locale: "es".to_string(),
            geocode_timeout_secs: 10,
            route_timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the country qualifier for geocoding queries.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the locale for hits and instructions.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the per-request timeouts.
    pub fn with_timeouts(mut self, geocode_secs: u64, route_secs: u64) -> Self {
        self.geocode_timeout_secs = geocode_secs;
        self.route_timeout_secs = route_secs;
        self
    }
}

/// GraphHopper API client.
///
/// One shared `reqwest::Client`; timeouts are applied per request since
/// geocoding and routing carry different budgets.
#[derive(Debug, Clone)]
pub struct GraphHopperClient {
    http: reqwest::Client,
    config: GraphHopperConfig,
}

impl GraphHopperClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GraphHopperConfig) -> Result<Self, GraphHopperError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    fn geocode_timeout(&self) -> Duration {
        Duration::from_secs(self.config.geocode_timeout_secs)
    }

    fn route_timeout(&self) -> Duration {
        Duration::from_secs(self.config.route_timeout_secs)
    }
}

/// Map a non-success response to the error taxonomy.
async fn status_error(response: reqwest::Response) -> GraphHopperError {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return GraphHopperError::Unauthorized;
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return GraphHopperError::RateLimited;
    }

    let body = response.text().await.unwrap_or_default();
    GraphHopperError::Api {
        status: status.as_u16(),
        message: body,
    }
}

impl MapService for GraphHopperClient {
    /// Resolve a free-text address to a location.
    ///
    /// Issues a single geocoding request (10-second default timeout)
    /// with the configured country qualifier appended, taking the first
    /// returned hit.
    async fn geocode(&self, address: &str) -> Result<Location, GraphHopperError> {
        let url = format!("{}/geocode", self.config.base_url);
        let query = format!("{}, {}", address, self.config.country);

        debug!(%address, "geocoding address");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("key", self.config.api_key.as_str()),
                ("limit", "1"),
                ("locale", self.config.locale.as_str()),
            ])
            .timeout(self.geocode_timeout())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body = response.text().await?;

        let decoded: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GraphHopperError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let hit = decoded
            .hits
            .into_iter()
            .next()
            .ok_or(GraphHopperError::NoHits)?;

        hit.into_location(address)
            .map_err(|e| GraphHopperError::Json {
                message: e.to_string(),
                body: None,
            })
    }

    /// Compute a route between two points for the given mode.
    ///
    /// Issues a single routing request (30-second default timeout) with
    /// instruction generation enabled, taking the first returned path.
    async fn route(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        mode: TransportMode,
    ) -> Result<RouteResult, GraphHopperError> {
        let url = format!("{}/route", self.config.base_url);

        debug!(vehicle = mode.vehicle(), %from, %to, "requesting route");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("point", from.to_string()),
                ("point", to.to_string()),
                ("vehicle", mode.vehicle().to_string()),
                ("key", self.config.api_key.clone()),
                ("instructions", "true".to_string()),
                ("locale", self.config.locale.clone()),
                ("points_encoded", "false".to_string()),
            ])
            .timeout(self.route_timeout())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body = response.text().await?;

        let decoded: RouteResponse =
            serde_json::from_str(&body).map_err(|e| GraphHopperError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let path = decoded
            .paths
            .into_iter()
            .next()
            .ok_or(GraphHopperError::NoRoute)?;

        Ok(path.into_route_result(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = GraphHopperConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_country("Argentina")
            .with_locale("en")
            .with_timeouts(5, 15);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.country, "Argentina");
        assert_eq!(config.locale, "en");
        assert_eq!(config.geocode_timeout_secs, 5);
        assert_eq!(config.route_timeout_secs, 15);
    }

    #[test]
    fn config_defaults() {
        let config = GraphHopperConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.country, "Chile");
        assert_eq!(config.locale, "es");
        assert_eq!(config.geocode_timeout_secs, 10);
        assert_eq!(config.route_timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = GraphHopperConfig::new("test-key");
        let client = GraphHopperClient::new(config);
        assert!(client.is_ok());
    }

    // Integration tests would go here, but require a real API key
    // and would make actual HTTP requests. They should be marked
    // with #[ignore] and run separately.
}
