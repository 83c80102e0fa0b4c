// Handlers for backend API endpoints

use axum::{
    extract::{Json as JsonExtract, Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    compare::ComparisonSet,
    error::AppError,
    filter, loan,
    models::{
        BodyType, FilterCriteria, FuelType, LoanParameters, SellCarRequest, SortKey, Transmission,
        Vehicle,
    },
    sort,
};

// Import the AppState struct defined in main.rs
use crate::AppState;

// --- Response Wrappers ---

#[derive(Serialize)]
struct GenericResponse {
    success: bool,
    message: Option<String>,
    id: Option<String>,
    error: Option<String>,
}

// --- Request Structs ---

/// Browse query parameters, shared with the HTML browse page. List-valued
/// filters arrive comma-separated (`?make=Honda,Toyota&fuelType=Petrol`).
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQuery {
    pub make: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub certified: Option<bool>,
    pub sort: Option<SortKey>,
}

impl ListingQuery {
    /// Build the filter criteria this query describes. Unrecognized tokens in
    /// list values are dropped; the UI controls are the source of these
    /// strings and numeric sanitization stays on that side of the boundary.
    /// A parameter whose every token drops (or an empty `make=`) leaves that
    /// category unconstrained rather than unsatisfiable.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            makes: split_list(&self.make, |s| Ok::<_, ()>(s.to_string())),
            body_types: split_list(&self.body_type, BodyType::from_str),
            fuel_types: split_list(&self.fuel_type, FuelType::from_str),
            transmissions: split_list(&self.transmission, Transmission::from_str),
            price_range: (
                self.price_min.unwrap_or(0),
                self.price_max.unwrap_or(u64::MAX),
            ),
            certified_only: self.certified.unwrap_or(false),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort.unwrap_or_default()
    }
}

fn split_list<T, E>(
    raw: &Option<String>,
    parse: impl Fn(&str) -> Result<T, E>,
) -> Option<Vec<T>> {
    let raw = raw.as_ref()?;
    let values: Vec<T> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| parse(s).ok())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    vehicle_ids: Vec<String>,
}

// --- API Handlers ---

/// GET /api/vehicles: the filtered, sorted catalog.
pub async fn list_vehicles(
    State(app_state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("[HANDLER] /api/vehicles - query: {:?}", query);

    let criteria = query.criteria();
    let filtered = filter::apply(app_state.catalog.all(), &criteria);
    let sorted = sort::sort(&filtered, query.sort_key());

    tracing::info!(
        "[HANDLER] /api/vehicles - {} of {} listings match.",
        sorted.len(),
        app_state.catalog.len()
    );
    Ok(Json(sorted))
}

/// GET /api/vehicles/:slug: one listing, or 404.
pub async fn get_vehicle(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    tracing::info!("[HANDLER] /api/vehicles/:slug - slug: {}", slug);
    app_state
        .catalog
        .find_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no vehicle with slug '{slug}'")))
}

/// GET /api/makes: distinct makes for the filter sidebar.
pub async fn get_makes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("[HANDLER] /api/makes - Request received.");
    let makes = app_state.catalog.makes();
    tracing::debug!("[HANDLER] /api/makes - {} distinct makes.", makes.len());
    Ok(Json(makes))
}

/// POST /api/compare: resolve the requested ids into a comparison set,
/// enforcing the capacity and duplicate rules, and return its members in
/// column order.
pub async fn compare_vehicles(
    State(app_state): State<AppState>,
    JsonExtract(request): JsonExtract<CompareRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        "[HANDLER] /api/compare - {} ids requested.",
        request.vehicle_ids.len()
    );

    let mut set = ComparisonSet::new();
    for id in &request.vehicle_ids {
        let vehicle = app_state
            .catalog
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no vehicle with id '{id}'")))?;
        set.add(vehicle)?;
    }

    Ok(Json(set.members().to_vec()))
}

/// POST /api/emi: loan schedule for the financing calculator.
pub async fn calculate_emi(
    JsonExtract(params): JsonExtract<LoanParameters>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("[HANDLER] /api/emi - params: {:?}", params);
    let schedule = loan::compute_schedule(&params)?;
    tracing::debug!(
        "[HANDLER] /api/emi - installment: {}",
        schedule.monthly_installment
    );
    Ok(Json(schedule))
}

/// POST /api/sell: log the submission and acknowledge. There is no listing
/// pipeline behind this; the form has no effect beyond the log line.
pub async fn submit_sell_listing(
    JsonExtract(request): JsonExtract<SellCarRequest>,
) -> Result<impl IntoResponse, AppError> {
    let received_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    tracing::info!(
        received_at = %received_at,
        make = %request.make,
        model = %request.model,
        year = %request.year,
        asking_price = %request.asking_price,
        contact = %request.phone,
        "[HANDLER] /api/sell - Sell listing submitted."
    );

    Ok(Json(GenericResponse {
        success: true,
        message: Some(
            "Your listing has been submitted successfully. Our team will review it and get back to you within 2 hours.".to_string(),
        ),
        id: None,
        error: None,
    }))
}
