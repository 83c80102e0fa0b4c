// Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

// Declare submodules for different route groups
mod pages;
pub mod api;

// create_router accepts the AppState and returns a Router; the state is
// provided here rather than when the router is consumed in main.rs.
pub fn create_router(app_state: AppState) -> Router {
    // JSON API routes. These handlers expect AppState via the State extractor.
    let api_router = Router::new()
        .route("/vehicles", get(api::list_vehicles))
        .route("/vehicles/:slug", get(api::get_vehicle))
        .route("/makes", get(api::get_makes))
        .route("/compare", post(api::compare_vehicles))
        .route("/emi", post(api::calculate_emi))
        .route("/sell", post(api::submit_sell_listing))
        // Provide the state to the API router
        .with_state(app_state.clone());

    // Combine page and API routes.
    Router::new()
        .route("/", get(pages::landing_page))
        .route("/vehicles", get(pages::vehicles_page))
        .route("/vehicles/:slug", get(pages::vehicle_detail_page))
        // Nest the API router which already has state
        .nest("/api", api_router)
        // Provide the state to the top-level router for the page handlers
        .with_state(app_state)
}
