use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::carbon_budget::CarbonBudget;
use crate::utils::decimal::decimal_to_f64;

// Request con el consumo extraído de la factura
#[derive(Debug, Deserialize, Validate)]
pub struct CarbonBudgetRequest {
    #[validate(range(min = 0.0, max = 1000000.0))]
    pub usage_kwh: f64,

    #[validate(range(min = 1, max = 100))]
    pub reduction_percent: u32,
}

// Response del presupuesto
#[derive(Debug, Serialize)]
pub struct CarbonBudgetResponse {
    pub usage_kwh: f64,
    pub original_credits: f64,
    pub target_credits: f64,
    pub savings: f64,
    pub reduction_percent: u32,
    pub suggestions: Vec<String>,
}

impl From<CarbonBudget> for CarbonBudgetResponse {
    fn from(budget: CarbonBudget) -> Self {
        Self {
            usage_kwh: decimal_to_f64(budget.usage_kwh),
            original_credits: decimal_to_f64(budget.original_credits),
            target_credits: decimal_to_f64(budget.target_credits),
            savings: decimal_to_f64(budget.savings),
            reduction_percent: budget.reduction_percent,
            suggestions: budget.suggestions,
        }
    }
}
