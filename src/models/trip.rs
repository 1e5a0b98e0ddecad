//! Modelos de viaje
//!
//! Entrada y salida del calculador de emisiones, y el registro de viajes
//! que se guarda en el historial.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::destination::Coordinates;
use crate::models::vehicle::{ConsumptionUnit, VehicleCategory};

/// Datos de un tramo de viaje a calcular
#[derive(Debug, Clone, PartialEq)]
pub struct TripCalculationInput {
    pub distance_km: Decimal,
    pub vehicle_category: VehicleCategory,
    pub requested_model_name: String,
}

/// Resultado del cálculo: consumo y emisiones redondeados a 2 decimales
#[derive(Debug, Clone, PartialEq)]
pub struct TripCalculationResult {
    pub fuel_or_energy_used: Decimal,
    pub consumption_unit: ConsumptionUnit,
    pub carbon_emitted_kg: Decimal,
    /// Modelo realmente usado (el pedido o el modelo por defecto de la categoría)
    pub resolved_model_name: String,
}

impl TripCalculationResult {
    /// Indica si el modelo pedido no existía y se usó el de la categoría
    pub fn fallback_used(&self, requested_model_name: &str) -> bool {
        self.resolved_model_name != requested_model_name
    }
}

/// Viaje registrado en el historial
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub id: u64,
    pub start: String,
    pub end: String,
    pub distance_km: Decimal,
    pub vehicle_category: VehicleCategory,
    pub model: String,
    pub fuel_used: Decimal,
    pub consumption_unit: ConsumptionUnit,
    pub carbon_kg: Decimal,
    pub coordinates: Option<Coordinates>,
    pub recorded_at: DateTime<Utc>,
}

/// Totales del historial de viajes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripSummary {
    pub trip_count: usize,
    pub total_distance_km: Decimal,
    pub total_carbon_kg: Decimal,
}
