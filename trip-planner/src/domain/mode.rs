//! Transport modes.

use std::fmt;

/// A transport profile understood by the routing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Car,
    Bike,
    Walk,
}

impl TransportMode {
    /// All modes, in the fixed order route comparisons are requested.
    pub const ALL: [TransportMode; 3] =
        [TransportMode::Car, TransportMode::Bike, TransportMode::Walk];

    /// The `vehicle` identifier the routing service expects.
    pub fn vehicle(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bike => "bike",
            TransportMode::Walk => "foot",
        }
    }

    /// Spanish display name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Car => "Auto",
            TransportMode::Bike => "Bicicleta",
            TransportMode::Walk => "Caminando",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_identifiers() {
        assert_eq!(TransportMode::Car.vehicle(), "car");
        assert_eq!(TransportMode::Bike.vehicle(), "bike");
        assert_eq!(TransportMode::Walk.vehicle(), "foot");
    }

    #[test]
    fn labels() {
        assert_eq!(TransportMode::Car.label(), "Auto");
        assert_eq!(TransportMode::Bike.label(), "Bicicleta");
        assert_eq!(TransportMode::Walk.label(), "Caminando");
    }

    #[test]
    fn request_order_is_car_bike_walk() {
        assert_eq!(
            TransportMode::ALL,
            [TransportMode::Car, TransportMode::Bike, TransportMode::Walk]
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(TransportMode::Walk.to_string(), "Caminando");
    }
}
