use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::carbon_budget_controller::CarbonBudgetController;
use crate::dto::api_response::ApiResponse;
use crate::dto::carbon_budget_dto::{CarbonBudgetRequest, CarbonBudgetResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_carbon_budget_router() -> Router<AppState> {
    Router::new().route("/", post(calculate_budget))
}

async fn calculate_budget(
    State(state): State<AppState>,
    AppJson(request): AppJson<CarbonBudgetRequest>,
) -> Result<Json<ApiResponse<CarbonBudgetResponse>>, AppError> {
    let controller = CarbonBudgetController::new(&state.carbon_budget);
    let response = controller.calculate(request)?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Carbon budget calculated".to_string(),
    )))
}
