use crate::config::Config;
use crate::dataset::DatasetLoader;
use crate::geocode::{CachedGeocoder, GoogleGeocoder};
use crate::prompt::{select_mode, LinePrompt};
use crate::router::respond;
use crate::state::{AppState, PageSettings};
use astra::Server;
use std::io;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod dataset;
mod domain;
mod errors;
mod geocode;
mod prompt;
mod responses;
mod router;
mod search;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Read configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Ask who is looking before anything is served
    let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
    let mode = match select_mode(&mut prompt) {
        Ok(mode) => mode,
        Err(e) => {
            error!("❌ Could not choose a view mode: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Load (and, for clients, redact) the dataset up front
    let dataset = DatasetLoader::new(config.dataset.clone(), mode);
    if let Err(e) = dataset.load() {
        error!("❌ Dataset load failed: {e}");
        std::process::exit(1);
    }

    let geocoder = match GoogleGeocoder::new(config.maps_api_key.clone(), config.region.clone()) {
        Ok(g) => CachedGeocoder::new(g),
        Err(e) => {
            error!("❌ Geocoder initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(
        dataset,
        Box::new(geocoder),
        PageSettings {
            maps_api_key: config.maps_api_key.clone(),
            map_id: config.map_id.clone(),
        },
    ));

    // 4️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
