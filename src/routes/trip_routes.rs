use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::api_response::ApiResponse;
use crate::dto::trip_dto::{
    CalculateTripRequest, ClearTripsResponse, DestinationListResponse, LogTripRequest,
    TripCalculationResponse, TripHistoryQuery, TripRecordResponse, TripSummaryResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(log_trip).get(list_trips).delete(clear_trips))
        .route("/calculate", post(calculate_trip))
        .route("/summary", get(trip_summary))
}

pub fn create_destination_router() -> Router<AppState> {
    Router::new().route("/", get(list_destinations))
}

async fn calculate_trip(
    State(state): State<AppState>,
    AppJson(request): AppJson<CalculateTripRequest>,
) -> Result<Json<ApiResponse<TripCalculationResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.calculate(request)?;
    Ok(Json(ApiResponse::success(response)))
}

async fn log_trip(
    State(state): State<AppState>,
    AppJson(request): AppJson<LogTripRequest>,
) -> Result<Json<ApiResponse<TripRecordResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.log_trip(request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<TripHistoryQuery>,
) -> Json<ApiResponse<Vec<TripRecordResponse>>> {
    let controller = TripController::new(&state);
    Json(ApiResponse::success(controller.list(query.limit).await))
}

async fn trip_summary(State(state): State<AppState>) -> Json<ApiResponse<TripSummaryResponse>> {
    let controller = TripController::new(&state);
    Json(ApiResponse::success(controller.summary().await))
}

async fn clear_trips(State(state): State<AppState>) -> Json<ApiResponse<ClearTripsResponse>> {
    let controller = TripController::new(&state);
    let removed = controller.clear().await;
    Json(ApiResponse::success_with_message(
        ClearTripsResponse { removed },
        "Trip history cleared".to_string(),
    ))
}

async fn list_destinations(
    State(state): State<AppState>,
) -> Json<ApiResponse<DestinationListResponse>> {
    let controller = TripController::new(&state);
    Json(ApiResponse::success(controller.destinations()))
}
