//! Terminal trip planner to the Biblioteca Nacional de Chile.
//!
//! Resolves a user-supplied origin (address or coordinates), compares
//! routes to the library across car, bike and walking via the
//! GraphHopper API, and prints turn-by-turn directions for the chosen
//! mode.

pub mod domain;
pub mod format;
pub mod graphhopper;
pub mod session;
