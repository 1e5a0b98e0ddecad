//! Servicio de presupuesto de carbono
//!
//! Convierte el consumo eléctrico de una factura en créditos de carbono y
//! calcula el objetivo tras aplicar el porcentaje de reducción. La extracción
//! del consumo desde la factura la hace un servicio externo.

use rust_decimal::Decimal;

use crate::models::carbon_budget::CarbonBudget;
use crate::utils::decimal::round_2dp;

/// Sugerencias fijas para reducir el consumo eléctrico
pub const SUGGESTIONS: [&str; 5] = [
    "Switch to LED lighting",
    "Unplug idle appliances",
    "Use energy-efficient AC settings",
    "Consider rooftop solar",
    "Reduce peak-time electricity use",
];

#[derive(Debug, Clone)]
pub struct CarbonBudgetService {
    /// kg de CO₂ por kWh de la red eléctrica
    grid_emission_factor: Decimal,
}

impl CarbonBudgetService {
    pub fn new(grid_emission_factor: Decimal) -> Self {
        Self {
            grid_emission_factor,
        }
    }

    pub fn grid_emission_factor(&self) -> Decimal {
        self.grid_emission_factor
    }

    pub fn calculate(&self, usage_kwh: Decimal, reduction_percent: u32) -> CarbonBudget {
        let original = usage_kwh * self.grid_emission_factor;
        let remaining_share = Decimal::ONE - Decimal::from(reduction_percent) / Decimal::ONE_HUNDRED;
        let target = original * remaining_share;

        let original_credits = round_2dp(original);
        let target_credits = round_2dp(target);

        CarbonBudget {
            usage_kwh,
            original_credits,
            target_credits,
            savings: round_2dp(original_credits - target_credits),
            reduction_percent,
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CarbonBudgetService {
        CarbonBudgetService::new(Decimal::new(92, 2))
    }

    #[test]
    fn test_budget_for_typical_bill() {
        let budget = service().calculate(Decimal::from(250), 20);

        assert_eq!(budget.original_credits, Decimal::from(230));
        assert_eq!(budget.target_credits, Decimal::from(184));
        assert_eq!(budget.savings, Decimal::from(46));
        assert_eq!(budget.reduction_percent, 20);
        assert_eq!(budget.suggestions.len(), 5);
    }

    #[test]
    fn test_budget_is_rounded() {
        let budget = service().calculate(Decimal::new(1234, 1), 15);

        // 123.4 * 0.92 = 113.528
        assert_eq!(budget.original_credits, Decimal::new(11353, 2));
        // 113.528 * 0.85 = 96.4988
        assert_eq!(budget.target_credits, Decimal::new(9650, 2));
        assert_eq!(budget.savings, Decimal::new(1703, 2));
    }

    #[test]
    fn test_full_reduction_reaches_zero() {
        let budget = service().calculate(Decimal::from(100), 100);
        assert_eq!(budget.target_credits, Decimal::ZERO);
        assert_eq!(budget.savings, budget.original_credits);
    }

    #[test]
    fn test_zero_usage() {
        let budget = service().calculate(Decimal::ZERO, 30);
        assert_eq!(budget.original_credits, Decimal::ZERO);
        assert_eq!(budget.target_credits, Decimal::ZERO);
    }
}
