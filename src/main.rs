use crate::catalog::load_catalog;
use crate::config::AppConfig;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod errors;
mod params;
mod responses;
mod router;
mod state;
mod store;
mod templates;
mod view;


fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "premier_estates=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Pick the store and fetch the catalog once
    let store = store::connect(config.store.as_ref());
    let catalog = load_catalog(&*store);
    tracing::info!(
        "Catalog ready: {} listings ({})",
        catalog.listings().len(),
        catalog.origin().as_str()
    );

    let state = AppState::new(catalog, store);

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::debug!("Request failed: {err}");
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
