//! Interactive session state machine.
//!
//! Drives the main menu loop: route planning (resolve origin, compare
//! modes, select one, show instructions), the library information
//! screen, and exit. Generic over the map service and the console
//! handles so the whole flow is testable with a mock service and
//! scripted input.

use std::io::{self, BufRead, Write};

use crate::domain::{Location, RouteResult, TransportMode, result_for};
use crate::graphhopper::MapService;

use super::compare::compare_modes;
use super::present::{show_instructions, show_library_info, show_transit_info};
use super::resolver::{Resolution, resolve_origin};

/// A main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    PlanRoute,
    LibraryInfo,
    Exit,
}

/// One interactive planning session.
///
/// Holds the map service, the fixed destination and the console
/// handles. Constructed with explicit configuration; nothing is read
/// from ambient globals.
#[derive(Debug)]
pub struct Session<S, R, W> {
    service: S,
    destination: Location,
    reader: R,
    writer: W,
}

impl<S, R, W> Session<S, R, W>
where
    S: MapService,
    R: BufRead,
    W: Write,
{
    /// Create a session over the given service and console handles.
    pub fn new(service: S, destination: Location, reader: R, writer: W) -> Self {
        Self {
            service,
            destination,
            reader,
            writer,
        }
    }

    /// Run the session until the user exits or input ends.
    ///
    /// Only console I/O errors propagate; service failures are handled
    /// inside the individual flows.
    pub async fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.writer,
            "Sistema de Navegación a la Biblioteca Nacional"
        )?;
        writeln!(self.writer, "Conectado al servicio de mapas...")?;

        loop {
            match self.main_menu_choice()? {
                MenuChoice::PlanRoute => {
                    self.plan_route().await?;
                    self.pause()?;
                }
                MenuChoice::LibraryInfo => {
                    show_library_info(&mut self.writer)?;
                    self.pause()?;
                }
                MenuChoice::Exit => {
                    writeln!(self.writer, "\nGracias por usar el sistema de navegación")?;
                    writeln!(self.writer, "¡Esperamos verlo en la Biblioteca Nacional!")?;
                    return Ok(());
                }
            }
        }
    }

    /// Read one input line. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Show the main menu and read a choice, re-prompting on invalid
    /// input. End of input behaves like exit.
    fn main_menu_choice(&mut self) -> io::Result<MenuChoice> {
        writeln!(self.writer, "\n=== SISTEMA DE NAVEGACIÓN ===")?;
        writeln!(
            self.writer,
            "Bienvenido al sistema de rutas a la Biblioteca Nacional"
        )?;
        writeln!(self.writer, "\nOpciones disponibles:")?;
        writeln!(self.writer, "1. Calcular ruta a la Biblioteca Nacional")?;
        writeln!(self.writer, "2. Información sobre la Biblioteca")?;
        writeln!(self.writer, "3. Salir del sistema")?;

        loop {
            let Some(choice) = self.prompt("\nSeleccione una opción (1-3): ")? else {
                return Ok(MenuChoice::Exit);
            };

            match choice.as_str() {
                "1" => return Ok(MenuChoice::PlanRoute),
                "2" => return Ok(MenuChoice::LibraryInfo),
                "3" => return Ok(MenuChoice::Exit),
                _ => {
                    writeln!(self.writer, "Opción inválida. Por favor seleccione 1, 2 o 3")?;
                }
            }
        }
    }

    /// The full route-planning flow. Returns to the menu early when
    /// the origin prompt is cancelled or no mode could be routed.
    async fn plan_route(&mut self) -> io::Result<()> {
        writeln!(self.writer, "\n--- RUTA A LA BIBLIOTECA NACIONAL ---")?;
        writeln!(self.writer, "Destino: Biblioteca Nacional de Chile")?;
        writeln!(
            self.writer,
            "Ubicación: Av. Libertador Bernardo O'Higgins 651, Santiago"
        )?;
        writeln!(self.writer, "{}", "-".repeat(50))?;

        let outcome = resolve_origin(
            &self.service,
            &mut self.reader,
            &mut self.writer,
            "\n¿Desde dónde parte? (dirección o coordenadas): ",
        )
        .await?;

        let origin = match outcome {
            Resolution::Cancelled | Resolution::ReturnToMenu => return Ok(()),
            Resolution::Resolved(origin) => origin,
        };

        writeln!(self.writer, "\nUbicación de partida: {}", origin.name)?;

        let results =
            compare_modes(&self.service, &mut self.writer, &origin, &self.destination).await?;

        if results.is_empty() {
            writeln!(
                self.writer,
                "No se pudieron calcular rutas. Intente con otra ubicación."
            )?;
            return Ok(());
        }

        if let Some(result) = self.select_mode(&results)? {
            show_instructions(&mut self.writer, result, &origin, &self.destination)?;
        }

        Ok(())
    }

    /// Mode selection menu. Options map to modes only when that mode's
    /// route request succeeded; a mode without a result is rejected
    /// and never silently substituted. Option 4 shows the public
    /// transit screen and returns without a selection.
    fn select_mode<'a>(
        &mut self,
        results: &'a [RouteResult],
    ) -> io::Result<Option<&'a RouteResult>> {
        writeln!(self.writer, "\n--- SELECCIÓN DE MEDIO DE TRANSPORTE ---")?;
        writeln!(
            self.writer,
            "1. En auto (más rápido para distancias largas)"
        )?;
        writeln!(self.writer, "2. En bicicleta (ecológico y saludable)")?;
        writeln!(self.writer, "3. Caminando (ideal para distancias cortas)")?;
        writeln!(self.writer, "4. Información de transporte público")?;

        loop {
            let Some(choice) = self.prompt("\nSeleccione cómo quiere viajar (1-4): ")? else {
                return Ok(None);
            };

            let mode = match choice.as_str() {
                "1" => TransportMode::Car,
                "2" => TransportMode::Bike,
                "3" => TransportMode::Walk,
                "4" => {
                    show_transit_info(&mut self.writer)?;
                    return Ok(None);
                }
                _ => {
                    writeln!(
                        self.writer,
                        "Opción inválida o no disponible. Seleccione 1, 2, 3 o 4"
                    )?;
                    continue;
                }
            };

            match result_for(results, mode) {
                Some(result) => return Ok(Some(result)),
                None => {
                    writeln!(
                        self.writer,
                        "Opción inválida o no disponible. Seleccione 1, 2, 3 o 4"
                    )?;
                }
            }
        }
    }

    /// Pause until the user presses Enter. End of input just continues.
    fn pause(&mut self) -> io::Result<()> {
        self.prompt("\nPresione Enter para continuar...")?;
        Ok(())
    }
}
