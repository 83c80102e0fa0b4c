use anyhow::Result;
use axum::{extract::FromRef, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::VehicleCatalog;
use crate::config::Settings;

// Declare modules
mod catalog;
mod compare;
mod config;
mod data;
mod error;
mod filter;
mod loan;
mod models;
mod routes;
mod sort;

// Shared application state: configuration plus the read-only catalog.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub catalog: Arc<VehicleCatalog>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "automart_rust=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing AutoMart server...");

    // Load configuration
    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!("Configuration loaded successfully.");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    // Build the static catalog once; it is read-only from here on.
    let catalog = VehicleCatalog::seeded();
    tracing::info!("Catalog loaded with {} listings.", catalog.len());

    let app_state = AppState {
        settings: Arc::new(settings),
        catalog: Arc::new(catalog),
    };

    let router: Router = routes::create_router(app_state.clone());

    // Combine the router with static file serving
    let app = router.nest_service("/static", ServeDir::new("static"));

    // Parse the server address from settings
    let addr: SocketAddr = match app_state.settings.server_address.parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(
                "Invalid server address format in configuration ('{}'): {}",
                app_state.settings.server_address,
                e
            );
            return Err(anyhow::anyhow!("Invalid server address format: {}", e));
        }
    };

    // Create a TCP listener
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Server listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    // Run the server
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
