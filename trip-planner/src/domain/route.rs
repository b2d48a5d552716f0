//! Computed route results.

use super::mode::TransportMode;

/// One turn-by-turn navigation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// What to do ("Gire a la derecha...").
    pub text: String,

    /// Length of this step in meters.
    pub distance_meters: f64,

    /// Duration of this step in milliseconds.
    pub duration_millis: u64,
}

/// The computed route for one origin/destination/mode combination.
///
/// Held only in memory for the duration of one comparison-and-selection
/// flow; nothing is retained across planning sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Transport mode this route was computed for.
    pub mode: TransportMode,

    /// Total route length in meters.
    pub distance_meters: f64,

    /// Total travel time in milliseconds, as reported by the service.
    pub duration_millis: u64,

    /// Navigation steps, in travel order. May be empty when the
    /// service omits instructions.
    pub instructions: Vec<Instruction>,
}

impl RouteResult {
    /// Total travel time in whole seconds.
    ///
    /// The routing service reports milliseconds; display formatting
    /// works in seconds.
    pub fn duration_seconds(&self) -> u64 {
        self.duration_millis / 1000
    }
}

/// Find the result for a given mode, if that mode's request succeeded.
pub fn result_for(results: &[RouteResult], mode: TransportMode) -> Option<&RouteResult> {
    results.iter().find(|r| r.mode == mode)
}
