//! Console presentation of routes and static information screens.

use std::io::{self, Write};

use crate::domain::{Location, RouteResult, TransportMode};
use crate::format::{format_distance, format_duration};

const WIDE_RULE: &str =
    "============================================================";
const NARROW_RULE: &str = "----------------------------------------";

/// Render turn-by-turn instructions for a selected route.
///
/// Header with origin, destination, mode and totals; then each step
/// numbered from 1 with its distance and duration; then a static
/// advisory block keyed on the transport mode. An empty step list
/// skips the navigation section without error.
pub fn show_instructions<W: Write>(
    writer: &mut W,
    result: &RouteResult,
    origin: &Location,
    destination: &Location,
) -> io::Result<()> {
    writeln!(writer, "\n{WIDE_RULE}")?;
    writeln!(writer, "INSTRUCCIONES DETALLADAS PARA LLEGAR A LA BIBLIOTECA")?;
    writeln!(writer, "{WIDE_RULE}")?;

    writeln!(writer, "Desde: {}", origin.name)?;
    writeln!(writer, "Hasta: {}", destination.name)?;
    writeln!(writer, "Medio de transporte: {}", result.mode.label())?;
    writeln!(
        writer,
        "Distancia total: {}",
        format_distance(result.distance_meters)
    )?;
    writeln!(
        writer,
        "Tiempo estimado: {}",
        format_duration(result.duration_seconds() as f64)
    )?;
    writeln!(writer, "{}", "-".repeat(60))?;

    if !result.instructions.is_empty() {
        writeln!(writer, "\nINSTRUCCIONES DE NAVEGACIÓN:")?;
        writeln!(writer, "{NARROW_RULE}")?;

        for (number, step) in result.instructions.iter().enumerate() {
            writeln!(writer, "\nPaso {}: {}", number + 1, step.text)?;
            writeln!(
                writer,
                "   - Avance: {}",
                format_distance(step.distance_meters)
            )?;
            writeln!(
                writer,
                "   - Tiempo: {}",
                format_duration((step.duration_millis / 1000) as f64)
            )?;
        }
    }

    writeln!(writer, "\n{WIDE_RULE}")?;
    writeln!(writer, "INFORMACIÓN ADICIONAL:")?;

    match result.mode {
        TransportMode::Car => {
            writeln!(writer, "• Estacionamiento: Disponible en calles aledañas")?;
            writeln!(
                writer,
                "• Tráfico: Considere horas punta (7:00-9:30 / 17:30-20:00)"
            )?;
            writeln!(writer, "• Peajes: No hay peajes en esta ruta")?;
        }
        TransportMode::Bike => {
            writeln!(writer, "• Ciclovías: Ruta utiliza ciclovías disponibles")?;
            writeln!(writer, "• Seguridad: Use casco y luces reflectantes")?;
            writeln!(
                writer,
                "• Estacionamiento: Bicicletero disponible en biblioteca"
            )?;
        }
        TransportMode::Walk => {
            writeln!(writer, "• Accesibilidad: Ruta accesible para peatones")?;
            writeln!(writer, "• Cruces: Utilice pasos peatonales señalizados")?;
            writeln!(writer, "• Tiempo: Lleve agua en días calurosos")?;
        }
    }

    writeln!(writer, "{WIDE_RULE}")?;
    Ok(())
}

/// Static information screen about the destination library.
pub fn show_library_info<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\n--- INFORMACIÓN DE LA BIBLIOTECA NACIONAL ---")?;
    writeln!(writer, "• Nombre: Biblioteca Nacional de Chile")?;
    writeln!(
        writer,
        "• Dirección: Av. Libertador Bernardo O'Higgins 651, Santiago"
    )?;
    writeln!(
        writer,
        "• Horario atención: Lunes a Viernes 9:00 - 19:00 horas"
    )?;
    writeln!(writer, "• Servicios disponibles:")?;
    writeln!(writer, "  - Sala de lectura y estudio")?;
    writeln!(writer, "  - Préstamo de libros")?;
    writeln!(writer, "  - Archivos históricos y documentos")?;
    writeln!(writer, "  - Acceso a bases de datos")?;
    writeln!(writer, "  - Visitas guiadas")?;
    writeln!(writer, "• Acceso: Público general, entrada gratuita")?;
    writeln!(writer, "• Contacto: +56 2 2360 5600")?;
    writeln!(writer, "{}", "-".repeat(50))?;
    Ok(())
}

/// Static information screen about reaching the library by public
/// transit. No network involved; metro and bus data is fixed text.
pub fn show_transit_info<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "\n--- INFORMACIÓN DE TRANSPORTE PÚBLICO ---")?;
    writeln!(
        writer,
        "Para llegar a la Biblioteca Nacional en transporte público:"
    )?;
    writeln!(writer, "\nLíneas de Metro cercanas:")?;
    writeln!(
        writer,
        "• Estación Santa Lucía (Línea 1) - 5 minutos caminando"
    )?;
    writeln!(
        writer,
        "• Estación Universidad de Chile (Línea 1) - 8 minutos caminando"
    )?;
    writeln!(
        writer,
        "• Estación La Moneda (Línea 1) - 10 minutos caminando"
    )?;
    writeln!(writer, "\nMicrobuses (Buses):")?;
    writeln!(
        writer,
        "• Líneas que pasan por Alameda: 210, 213, 301, 345, 385"
    )?;
    writeln!(writer, "• Líneas que pasan por Miraflores: 201, 226, 401")?;
    writeln!(writer, "\nRecomendaciones:")?;
    writeln!(
        writer,
        "• Use la aplicación 'Moovit' para rutas actualizadas"
    )?;
    writeln!(
        writer,
        "• Considere tarjeta BIP! para todos los transportes"
    )?;
    writeln!(writer, "• Horario biblioteca: Lunes a Viernes 9:00-19:00")?;
    Ok(())
}
