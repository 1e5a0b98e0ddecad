//! Modelo del presupuesto de carbono doméstico

use rust_decimal::Decimal;

/// Presupuesto calculado a partir del consumo eléctrico de una factura
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonBudget {
    pub usage_kwh: Decimal,
    pub original_credits: Decimal,
    pub target_credits: Decimal,
    pub savings: Decimal,
    pub reduction_percent: u32,
    pub suggestions: Vec<String>,
}
