use serde::Serialize;

use crate::models::vehicle::{ConsumptionUnit, VehicleCategory, VehicleModel};
use crate::utils::decimal::decimal_to_f64;

// Response de categoría con su modelo por defecto
#[derive(Debug, Serialize)]
pub struct VehicleCategoryResponse {
    pub category: VehicleCategory,
    pub default_model: String,
    pub model_count: usize,
}

// Response de modelo de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleModelResponse {
    pub name: String,
    pub efficiency_per_unit: Option<f64>,
    pub consumption_unit: ConsumptionUnit,
    pub emission_factor: f64,
    pub is_default: bool,
}

impl VehicleModelResponse {
    pub fn from_model(model: &VehicleModel, is_default: bool) -> Self {
        Self {
            name: model.name.clone(),
            efficiency_per_unit: model.efficiency_per_unit.map(decimal_to_f64),
            consumption_unit: model.consumption_unit,
            emission_factor: decimal_to_f64(model.emission_factor),
            is_default,
        }
    }
}
