use std::io;

use tracing_subscriber::EnvFilter;

use trip_planner::domain::Location;
use trip_planner::graphhopper::{GraphHopperClient, GraphHopperConfig};
use trip_planner::session::Session;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Get credentials from environment
    let api_key = std::env::var("GRAPHHOPPER_API_KEY").unwrap_or_else(|_| {
        eprintln!("Advertencia: GRAPHHOPPER_API_KEY no está definida. Las consultas al servicio fallarán.");
        String::new()
    });

    let config = GraphHopperConfig::new(api_key);
    let client = match GraphHopperClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error crítico: {e}");
            std::process::exit(1);
        }
    };

    // Ctrl-C ends the whole session with a farewell, from anywhere
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nPrograma finalizado por el usuario");
            std::process::exit(0);
        }
    });

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut session = Session::new(client, Location::national_library(), stdin, stdout);

    if let Err(e) = session.run().await {
        eprintln!("Error crítico: {e}");
        std::process::exit(1);
    }
}
