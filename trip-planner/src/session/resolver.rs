//! Origin resolution.
//!
//! Turns free-form user input into a `Location`: raw `lat,lng` pairs
//! are parsed locally; anything else is treated as an address and
//! geocoded. Sentinel words let the user cancel or return to the menu.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::domain::{Coordinates, Location};
use crate::graphhopper::{GraphHopperError, MapService};

/// Terminal outcome of an origin prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The user cancelled (`s` / `salir`), or input ended.
    Cancelled,
    /// The user asked to return to the main menu (`m` / `menu`).
    ReturnToMenu,
    /// The input resolved to a location.
    Resolved(Location),
}

/// Classification of one input line as a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordParse {
    /// A valid `lat,lng` pair.
    Valid(Location),
    /// Both sides are numbers, but outside the valid ranges.
    OutOfRange,
    /// Not a coordinate pair; treat as a free-text address.
    NotCoordinates,
}

/// Classify an input line as a coordinate pair.
///
/// Only inputs with exactly one comma whose sides both parse as
/// numbers are coordinate candidates; everything else (including
/// addresses containing a comma) is `NotCoordinates`. A candidate
/// outside the latitude/longitude ranges is `OutOfRange` rather than
/// being silently geocoded.
pub fn parse_coordinates(input: &str) -> CoordParse {
    let Some((lat_part, lng_part)) = split_once_exact(input) else {
        return CoordParse::NotCoordinates;
    };

    let (Ok(lat), Ok(lng)) = (
        lat_part.trim().parse::<f64>(),
        lng_part.trim().parse::<f64>(),
    ) else {
        return CoordParse::NotCoordinates;
    };

    match Coordinates::new(lat, lng) {
        Ok(coords) => {
            let name = format!("Ubicación en ({lat:.4}, {lng:.4})");
            CoordParse::Valid(Location::new(coords, name))
        }
        Err(_) => CoordParse::OutOfRange,
    }
}

/// Split on a comma only when the input contains exactly one.
fn split_once_exact(input: &str) -> Option<(&str, &str)> {
    let mut parts = input.splitn(3, ',');
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Prompt for an origin until the input yields a terminal outcome.
///
/// Geocoding failures are reported to the user and the prompt is
/// re-issued; service errors never propagate past this boundary. Only
/// console I/O errors do.
pub async fn resolve_origin<S, R, W>(
    service: &S,
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Resolution>
where
    S: MapService,
    R: BufRead,
    W: Write,
{
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Resolution::Cancelled);
        }
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "s" | "salir" => return Ok(Resolution::Cancelled),
            "m" | "menu" => return Ok(Resolution::ReturnToMenu),
            _ => {}
        }

        match parse_coordinates(input) {
            CoordParse::Valid(location) => return Ok(Resolution::Resolved(location)),
            CoordParse::OutOfRange => {
                writeln!(
                    writer,
                    "Error: Coordenadas fuera de rango. Latitud [-90, 90], longitud [-180, 180]."
                )?;
            }
            CoordParse::NotCoordinates => {
                writeln!(writer, "Buscando dirección...")?;

                match service.geocode(input).await {
                    Ok(location) => return Ok(Resolution::Resolved(location)),
                    Err(GraphHopperError::NoHits) => {
                        writeln!(
                            writer,
                            "No se encontró la dirección. Intente con otra ubicación."
                        )?;
                    }
                    Err(e) => {
                        warn!(error = %e, "geocoding request failed");
                        writeln!(writer, "Error al buscar dirección: {e}")?;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphhopper::MockMapService;
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn parse_valid_coordinates() {
        let CoordParse::Valid(location) = parse_coordinates("-33.44,-70.65") else {
            panic!("expected valid coordinates");
        };

        assert_eq!(location.coords.latitude(), -33.44);
        assert_eq!(location.coords.longitude(), -70.65);
        assert_eq!(location.name, "Ubicación en (-33.4400, -70.6500)");
    }

    #[test]
    fn parse_trims_whitespace() {
        let CoordParse::Valid(location) = parse_coordinates(" -33.44 , -70.65 ") else {
            panic!("expected valid coordinates");
        };
        assert_eq!(location.coords.latitude(), -33.44);
    }

    #[test]
    fn out_of_range_latitude_is_flagged() {
        assert_eq!(parse_coordinates("200,10"), CoordParse::OutOfRange);
        assert_eq!(parse_coordinates("-91,0"), CoordParse::OutOfRange);
        assert_eq!(parse_coordinates("0,181"), CoordParse::OutOfRange);
    }

    #[test]
    fn addresses_are_not_coordinates() {
        assert_eq!(
            parse_coordinates("Av. Libertador Bernardo O'Higgins 651"),
            CoordParse::NotCoordinates
        );
        // A comma alone does not make a coordinate pair
        assert_eq!(
            parse_coordinates("Moneda 650, Santiago"),
            CoordParse::NotCoordinates
        );
        // More than one comma is never a pair
        assert_eq!(parse_coordinates("1,2,3"), CoordParse::NotCoordinates);
        assert_eq!(parse_coordinates("10,abc"), CoordParse::NotCoordinates);
        assert_eq!(parse_coordinates(""), CoordParse::NotCoordinates);
    }

    proptest! {
        #[test]
        fn in_range_pairs_always_parse(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let input = format!("{lat},{lng}");
            let parsed = parse_coordinates(&input);
            prop_assert!(matches!(parsed, CoordParse::Valid(_)));
        }

        #[test]
        fn out_of_range_latitude_never_resolves(lat in 90.0001f64..1e6, lng in -180.0f64..=180.0) {
            let input = format!("{lat},{lng}");
            prop_assert_eq!(parse_coordinates(&input), CoordParse::OutOfRange);
        }
    }

    #[tokio::test]
    async fn sentinels_cancel_or_return() {
        let service = MockMapService::new();
        let mut output = Vec::new();

        let mut input = Cursor::new("salir\n");
        let outcome = resolve_origin(&service, &mut input, &mut output, "> ")
            .await
            .unwrap();
        assert_eq!(outcome, Resolution::Cancelled);

        let mut input = Cursor::new("M\n");
        let outcome = resolve_origin(&service, &mut input, &mut output, "> ")
            .await
            .unwrap();
        assert_eq!(outcome, Resolution::ReturnToMenu);
    }

    #[tokio::test]
    async fn eof_cancels() {
        let service = MockMapService::new();
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let outcome = resolve_origin(&service, &mut input, &mut output, "> ")
            .await
            .unwrap();
        assert_eq!(outcome, Resolution::Cancelled);
    }

    #[tokio::test]
    async fn out_of_range_reprompts_until_valid() {
        let service = MockMapService::new();
        let mut input = Cursor::new("200,10\n-33.44,-70.65\n");
        let mut output = Vec::new();

        let outcome = resolve_origin(&service, &mut input, &mut output, "> ")
            .await
            .unwrap();

        let Resolution::Resolved(location) = outcome else {
            panic!("expected resolved origin");
        };
        assert_eq!(location.coords.latitude(), -33.44);

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Coordenadas fuera de rango"));
    }

    #[tokio::test]
    async fn address_is_geocoded() {
        let hit = Location::new(
            Coordinates::new(-33.4378, -70.6504).unwrap(),
            "Plaza de Armas, Santiago",
        );
        let service = MockMapService::new().with_geocode_hit(hit.clone());
        let mut input = Cursor::new("plaza de armas\n");
        let mut output = Vec::new();

        let outcome = resolve_origin(&service, &mut input, &mut output, "> ")
            .await
            .unwrap();
        assert_eq!(outcome, Resolution::Resolved(hit));

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Buscando dirección..."));
    }

    #[tokio::test]
    async fn failed_geocode_reprompts() {
        let service = MockMapService::new(); // answers NoHits
        let mut input = Cursor::new("no existe\n-33.44,-70.65\n");
        let mut output = Vec::new();

        let outcome = resolve_origin(&service, &mut input, &mut output, "> ")
            .await
            .unwrap();
        assert!(matches!(outcome, Resolution::Resolved(_)));

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("No se encontró la dirección"));
    }
}
