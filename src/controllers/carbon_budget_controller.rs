use tracing::info;
use validator::Validate;

use crate::dto::carbon_budget_dto::{CarbonBudgetRequest, CarbonBudgetResponse};
use crate::services::carbon_budget_service::CarbonBudgetService;
use crate::utils::decimal::decimal_from_f64;
use crate::utils::errors::{bad_request_error, AppResult};

pub struct CarbonBudgetController<'a> {
    service: &'a CarbonBudgetService,
}

impl<'a> CarbonBudgetController<'a> {
    pub fn new(service: &'a CarbonBudgetService) -> Self {
        Self { service }
    }

    pub fn calculate(&self, request: CarbonBudgetRequest) -> AppResult<CarbonBudgetResponse> {
        request.validate()?;

        let usage_kwh = decimal_from_f64(request.usage_kwh)
            .ok_or_else(|| bad_request_error("usage_kwh must be a finite number"))?;
        let budget = self.service.calculate(usage_kwh, request.reduction_percent);

        info!(
            "⚡ Presupuesto de carbono: {} kWh → {} kg CO₂ (objetivo {} kg, -{}%)",
            budget.usage_kwh, budget.original_credits, budget.target_credits, budget.reduction_percent
        );

        Ok(budget.into())
    }
}
