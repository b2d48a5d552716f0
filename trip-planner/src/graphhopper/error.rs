//! GraphHopper client error types.

use std::fmt;

/// Errors from the GraphHopper HTTP client.
#[derive(Debug)]
pub enum GraphHopperError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Geocoding returned no hits for the query
    NoHits,

    /// Routing returned no path between the points
    NoRoute,

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl GraphHopperError {
    /// Whether this error came from a timed-out request.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GraphHopperError::Http(e) if e.is_timeout())
    }
}

impl fmt::Display for GraphHopperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphHopperError::Http(e) => write!(f, "HTTP error: {e}"),
            GraphHopperError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            GraphHopperError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            GraphHopperError::NoHits => write!(f, "no geocoding hits for the query"),
            GraphHopperError::NoRoute => write!(f, "no route between the given points"),
            GraphHopperError::RateLimited => write!(f, "rate limited by GraphHopper API"),
            GraphHopperError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for GraphHopperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphHopperError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GraphHopperError {
    fn from(err: reqwest::Error) -> Self {
        GraphHopperError::Http(err)
    }
}
