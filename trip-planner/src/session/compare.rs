//! Route comparison across transport modes.
//!
//! Issues one routing request per mode, strictly sequential, and
//! prints a normalized comparison with per-mode advisories. A failed
//! mode is skipped; partial failure never aborts the comparison.

use std::io::{self, Write};

use tracing::warn;

use crate::domain::{Location, RouteResult, TransportMode};
use crate::format::{format_distance, format_duration};
use crate::graphhopper::MapService;

/// Walking distance above which public transit is suggested instead.
const WALKABLE_METERS: f64 = 2000.0;

/// Compare routes to the destination across all transport modes.
///
/// Returns the successful results in request order (zero to three
/// entries). An empty collection means no mode could be routed; the
/// caller treats that as "cannot proceed", not as an error.
pub async fn compare_modes<S, W>(
    service: &S,
    writer: &mut W,
    origin: &Location,
    destination: &Location,
) -> io::Result<Vec<RouteResult>>
where
    S: MapService,
    W: Write,
{
    writeln!(writer, "\n--- COMPARACIÓN DE MEDIOS DE TRANSPORTE ---")?;

    let mut results = Vec::new();

    for mode in TransportMode::ALL {
        writeln!(writer, "Calculando ruta a la Biblioteca Nacional...")?;

        match service
            .route(&origin.coords, &destination.coords, mode)
            .await
        {
            Ok(result) => {
                print_mode_summary(writer, &result)?;
                results.push(result);
            }
            Err(e) => {
                // The mode is simply absent from the comparison; the
                // error kind is only recorded in the log.
                warn!(vehicle = mode.vehicle(), error = %e, "route request failed, skipping mode");
            }
        }
    }

    Ok(results)
}

fn print_mode_summary<W: Write>(writer: &mut W, result: &RouteResult) -> io::Result<()> {
    writeln!(writer, "\n{}:", result.mode.label().to_uppercase())?;
    writeln!(
        writer,
        "  • Distancia: {}",
        format_distance(result.distance_meters)
    )?;
    writeln!(
        writer,
        "  • Tiempo estimado: {}",
        format_duration(result.duration_seconds() as f64)
    )?;

    match result.mode {
        TransportMode::Car => {
            writeln!(writer, "  • Recomendación: Ideal para distancias largas")?;
            writeln!(writer, "  • Consideración: Tráfico y estacionamiento")?;
        }
        TransportMode::Bike => {
            writeln!(writer, "  • Recomendación: Excelente para distancias medias")?;
            writeln!(writer, "  • Consideración: Vías ciclistas disponibles")?;
        }
        TransportMode::Walk => {
            if result.distance_meters < WALKABLE_METERS {
                writeln!(writer, "  • Recomendación: Perfecto para esta distancia")?;
            } else {
                writeln!(writer, "  • Recomendación: Considerar transporte público")?;
            }
        }
    }

    Ok(())
}
