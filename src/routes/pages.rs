use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::filter;
use crate::models::Vehicle;
use crate::routes::api::ListingQuery;
use crate::sort;
use crate::AppState;

// Template struct for the landing page (featured prefix of the catalog)
#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    featured: Vec<Vehicle>,
    total: usize,
}

// Template struct for the browse page
#[derive(Template)]
#[template(path = "vehicles.html")]
struct VehiclesTemplate {
    vehicles: Vec<Vehicle>,
    makes: Vec<String>,
    body_types: Vec<String>,
    fuel_types: Vec<String>,
    total: usize,
}

// Template struct for the vehicle detail page
#[derive(Template)]
#[template(path = "vehicle_detail.html")]
struct VehicleDetailTemplate {
    vehicle: Vehicle,
    similar: Vec<Vehicle>,
}

// Rendered "Vehicle Not Found" state for unknown slugs
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

fn render<T: Template>(template: &T, name: &str) -> AppResult<Html<String>> {
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render {} template: {}", name, e);
            Err(AppError::InternalServerError(anyhow::Error::new(e)))
        }
    }
}

// Handler function to render the landing page
pub async fn landing_page(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let template = LandingTemplate {
        featured: app_state
            .catalog
            .featured(app_state.settings.featured_count)
            .to_vec(),
        total: app_state.catalog.len(),
    };
    render(&template, "landing")
}

// Handler function to render the browse page. Filter and sort query
// parameters are the same ones /api/vehicles accepts.
pub async fn vehicles_page(
    State(app_state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filtered = filter::apply(app_state.catalog.all(), &query.criteria());
    let vehicles = sort::sort(&filtered, query.sort_key());
    tracing::debug!(
        "Browse page: {} of {} vehicles shown.",
        vehicles.len(),
        app_state.catalog.len()
    );

    let template = VehiclesTemplate {
        vehicles,
        makes: app_state.catalog.makes(),
        body_types: app_state.catalog.body_types(),
        fuel_types: app_state.catalog.fuel_types(),
        total: app_state.catalog.len(),
    };
    render(&template, "vehicles")
}

// Handler function to render the vehicle detail page; unknown slugs render
// the not-found state with a 404 status.
pub async fn vehicle_detail_page(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(vehicle) = app_state.catalog.find_by_slug(&slug).cloned() else {
        tracing::debug!("Detail page: no vehicle with slug '{}'.", slug);
        let html = render(&NotFoundTemplate, "not_found")?;
        return Ok((StatusCode::NOT_FOUND, html).into_response());
    };

    // Same body type, excluding the vehicle itself, capped at three cards.
    let similar: Vec<Vehicle> = app_state
        .catalog
        .all()
        .iter()
        .filter(|v| v.body_type == vehicle.body_type && v.id != vehicle.id)
        .take(3)
        .cloned()
        .collect();

    let template = VehicleDetailTemplate { vehicle, similar };
    Ok(render(&template, "vehicle_detail")?.into_response())
}
