//! EcoNest - servicio de huella de carbono de viajes
//!
//! Catálogo de vehículos, calculador de emisiones por trayecto, historial
//! de viajes y presupuesto de carbono doméstico expuestos por HTTP.

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer, extract::State, response::Json, routing::get, BoxError,
    Router,
};
use serde_json::json;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use middleware::{cors_layer, rate_limit_middleware, RateLimitState};
use state::AppState;
use utils::errors::AppError;

/// Construir el router completo de la API con sus capas
pub fn create_app(state: AppState) -> Router {
    let rate_limit_state = RateLimitState::new(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/trip", routes::trip_routes::create_trip_router())
        .nest("/api/destination", routes::trip_routes::create_destination_router())
        .nest(
            "/api/carbon-budget",
            routes::carbon_budget_routes::create_carbon_budget_router(),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit_state,
            rate_limit_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .timeout(timeout),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check con el tamaño del catálogo cargado
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "econest-trips",
        "status": "healthy",
        "vehicle_models": state.catalog().model_count(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn handle_layer_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Internal(err.to_string())
    }
}
