//! Domain types for the trip planner.
//!
//! This module contains the core model types that represent validated
//! geographic data and computed routes. Types enforce their invariants
//! at construction time, so code that receives them can trust their
//! validity.

mod coords;
mod location;
mod mode;
mod route;

pub use coords::{Coordinates, InvalidCoordinates};
pub use location::Location;
pub use mode::TransportMode;
pub use route::{Instruction, RouteResult, result_for};
