//! Interactive console session.
//!
//! The session is a small state machine: a main menu loop driving the
//! route-planning flow (origin resolution, mode comparison, selection,
//! instruction display), a static library information screen, and
//! exit. Everything is generic over the map service and the console
//! handles.

mod compare;
mod controller;
mod present;
mod resolver;


pub use compare::compare_modes;
pub use controller::Session;
pub use present::{show_instructions, show_library_info, show_transit_info};
pub use resolver::{CoordParse, Resolution, parse_coordinates, resolve_origin};
