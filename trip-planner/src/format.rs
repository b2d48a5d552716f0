//! Display formatting for durations and distances.
//!
//! Pure helpers whose output is golden-tested; the exact Spanish
//! wording is part of the console contract.

/// Format a duration given in whole seconds.
///
/// Under an hour the output is `"N minutos"`; otherwise `"H horas"`
/// or `"H horas y M minutos"` when the minute remainder is non-zero.
/// Non-finite or negative input yields `"tiempo no disponible"`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "tiempo no disponible".to_string();
    }

    let minutes = (seconds as u64) / 60;

    if minutes < 60 {
        return format!("{minutes} minutos");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;

    if remaining == 0 {
        format!("{hours} horas")
    } else {
        format!("{hours} horas y {remaining} minutos")
    }
}

/// Format a distance given in meters.
///
/// Under a kilometer the output is `"{m:.0} metros"`; otherwise
/// `"{km:.2} kilómetros"`. Non-finite or negative input yields
/// `"distancia no disponible"`.
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() || meters < 0.0 {
        return "distancia no disponible".to_string();
    }

    if meters < 1000.0 {
        format!("{meters:.0} metros")
    } else {
        format!("{:.2} kilómetros", meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_under_an_hour() {
        assert_eq!(format_duration(0.0), "0 minutos");
        assert_eq!(format_duration(59.0), "0 minutos");
        assert_eq!(format_duration(60.0), "1 minutos");
        assert_eq!(format_duration(3540.0), "59 minutos");
    }

    #[test]
    fn duration_whole_hours() {
        assert_eq!(format_duration(3600.0), "1 horas");
        assert_eq!(format_duration(7200.0), "2 horas");
    }

    #[test]
    fn duration_hours_and_minutes() {
        assert_eq!(format_duration(3661.0), "1 horas y 1 minutos");
        assert_eq!(format_duration(5400.0), "1 horas y 30 minutos");
    }

    #[test]
    fn duration_unavailable() {
        assert_eq!(format_duration(f64::NAN), "tiempo no disponible");
        assert_eq!(format_duration(f64::INFINITY), "tiempo no disponible");
        assert_eq!(format_duration(-1.0), "tiempo no disponible");
    }

    #[test]
    fn distance_in_meters() {
        assert_eq!(format_distance(500.0), "500 metros");
        assert_eq!(format_distance(0.0), "0 metros");
        assert_eq!(format_distance(999.4), "999 metros");
    }

    #[test]
    fn distance_in_kilometers() {
        assert_eq!(format_distance(1500.0), "1.50 kilómetros");
        assert_eq!(format_distance(1000.0), "1.00 kilómetros");
        assert_eq!(format_distance(12345.0), "12.35 kilómetros");
    }

    #[test]
    fn distance_unavailable() {
        assert_eq!(format_distance(f64::NAN), "distancia no disponible");
        assert_eq!(format_distance(f64::INFINITY), "distancia no disponible");
        assert_eq!(format_distance(-5.0), "distancia no disponible");
    }
}
