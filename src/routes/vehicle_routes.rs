use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{VehicleCategoryResponse, VehicleModelResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/:category/models", get(list_models))
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleCategoryResponse>>>, AppError> {
    let controller = VehicleController::new(state.catalog());
    let response = controller.list_categories()?;
    Ok(Json(ApiResponse::success(response)))
}

async fn list_models(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<Vec<VehicleModelResponse>>>, AppError> {
    let controller = VehicleController::new(state.catalog());
    let response = controller.list_models(&category)?;
    Ok(Json(ApiResponse::success(response)))
}
