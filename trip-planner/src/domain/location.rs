//! Named places.

use super::coords::Coordinates;

/// A place with coordinates and a human-readable name.
///
/// Either supplied directly by the user (raw coordinates) or produced
/// by geocoding a free-text address. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Geographic position.
    pub coords: Coordinates,

    /// Display name shown to the user.
    pub name: String,
}

impl Location {
    /// Create a location from validated coordinates and a display name.
    pub fn new(coords: Coordinates, name: impl Into<String>) -> Self {
        Self {
            coords,
            name: name.into(),
        }
    }

    /// The fixed trip destination: the Biblioteca Nacional de Chile.
    pub fn national_library() -> Self {
        let coords =
            Coordinates::new(-33.4419, -70.6453).expect("library coordinates are valid");
        Self::new(
            coords,
            "Biblioteca Nacional de Chile, Av. Libertador Bernardo O'Higgins 651, Santiago",
        )
    }
}
