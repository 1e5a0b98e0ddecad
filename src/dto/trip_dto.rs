use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::destination::{Coordinates, Destination};
use crate::models::trip::{TripRecord, TripSummary};
use crate::models::vehicle::{ConsumptionUnit, VehicleCategory};
use crate::utils::decimal::decimal_to_f64;
use crate::utils::validation::validate_vehicle_category;

// Request para calcular un tramo sin registrarlo
#[derive(Debug, Deserialize, Validate)]
pub struct CalculateTripRequest {
    #[validate(range(min = 0.0, max = 100000.0))]
    pub distance_km: f64,

    #[validate(custom = "validate_vehicle_category")]
    pub vehicle_category: String,

    #[validate(length(max = 100))]
    pub model_name: Option<String>,
}

// Request para registrar un viaje ("terminar viaje")
#[derive(Debug, Deserialize, Validate)]
pub struct LogTripRequest {
    #[validate(length(max = 200))]
    pub destination: Option<String>,

    // Si viene, sustituye la distancia del destino
    #[validate(range(min = 0.0, max = 100000.0))]
    pub distance_km: Option<f64>,

    #[validate(custom = "validate_vehicle_category")]
    pub vehicle_category: String,

    #[validate(length(max = 100))]
    pub model_name: Option<String>,
}

// Query del historial
#[derive(Debug, Deserialize)]
pub struct TripHistoryQuery {
    pub limit: Option<usize>,
}

// Response del cálculo
#[derive(Debug, Serialize)]
pub struct TripCalculationResponse {
    pub distance_km: f64,
    pub vehicle_category: VehicleCategory,
    pub requested_model_name: String,
    pub resolved_model_name: String,
    pub fallback_used: bool,
    pub fuel_or_energy_used: f64,
    pub consumption_unit: ConsumptionUnit,
    pub carbon_emitted_kg: f64,
}

// Response de un viaje del historial
#[derive(Debug, Serialize)]
pub struct TripRecordResponse {
    pub id: u64,
    pub start: String,
    pub end: String,
    pub distance_km: f64,
    pub vehicle_category: VehicleCategory,
    pub model: String,
    pub fuel_used: f64,
    pub consumption_unit: ConsumptionUnit,
    pub fuel_used_label: String,
    pub carbon_kg: f64,
    pub carbon_label: String,
    pub coordinates: Option<Coordinates>,
    pub recorded_at: DateTime<Utc>,
    pub date: String,
}

impl From<TripRecord> for TripRecordResponse {
    fn from(trip: TripRecord) -> Self {
        Self {
            id: trip.id,
            fuel_used_label: format!("{:.2} {}", trip.fuel_used, trip.consumption_unit),
            carbon_label: format!("{:.2} kg CO₂e", trip.carbon_kg),
            start: trip.start,
            end: trip.end,
            distance_km: decimal_to_f64(trip.distance_km),
            vehicle_category: trip.vehicle_category,
            model: trip.model,
            fuel_used: decimal_to_f64(trip.fuel_used),
            consumption_unit: trip.consumption_unit,
            carbon_kg: decimal_to_f64(trip.carbon_kg),
            coordinates: trip.coordinates,
            date: trip.recorded_at.format("%Y-%m-%d").to_string(),
            recorded_at: trip.recorded_at,
        }
    }
}

// Response de los totales del historial
#[derive(Debug, Serialize)]
pub struct TripSummaryResponse {
    pub trip_count: usize,
    pub total_distance_km: f64,
    pub total_carbon_kg: f64,
}

impl From<TripSummary> for TripSummaryResponse {
    fn from(summary: TripSummary) -> Self {
        Self {
            trip_count: summary.trip_count,
            total_distance_km: decimal_to_f64(summary.total_distance_km),
            total_carbon_kg: decimal_to_f64(summary.total_carbon_kg),
        }
    }
}

// Response de un destino conocido
#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    pub label: String,
    pub distance_km: f64,
    pub coordinates: Option<Coordinates>,
}

impl From<&Destination> for DestinationResponse {
    fn from(destination: &Destination) -> Self {
        Self {
            label: destination.label.clone(),
            distance_km: decimal_to_f64(destination.distance_km),
            coordinates: destination.coordinates,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DestinationListResponse {
    pub start_location: String,
    pub default_distance_km: f64,
    pub destinations: Vec<DestinationResponse>,
}

#[derive(Debug, Serialize)]
pub struct ClearTripsResponse {
    pub removed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_calculate_request_validation() {
        let valid = CalculateTripRequest {
            distance_km: 12.0,
            vehicle_category: "car".to_string(),
            model_name: Some("Maruti Swift Petrol".to_string()),
        };
        assert!(valid.validate().is_ok());

        let negative = CalculateTripRequest {
            distance_km: -1.0,
            vehicle_category: "car".to_string(),
            model_name: None,
        };
        assert!(negative.validate().is_err());

        let unknown = CalculateTripRequest {
            distance_km: 1.0,
            vehicle_category: "plane".to_string(),
            model_name: None,
        };
        assert!(unknown.validate().is_err());
    }

    #[test]
    fn test_record_labels() {
        let record = TripRecord {
            id: 1,
            start: "MPSTME, Vile Parle".to_string(),
            end: "CSMT Station".to_string(),
            distance_km: Decimal::from(22),
            vehicle_category: VehicleCategory::Bus,
            model: "BEST City Bus".to_string(),
            fuel_used: Decimal::from(22),
            consumption_unit: ConsumptionUnit::Km,
            carbon_kg: Decimal::new(231, 2),
            coordinates: None,
            recorded_at: Utc::now(),
        };

        let response = TripRecordResponse::from(record);
        assert_eq!(response.fuel_used_label, "22.00 km");
        assert_eq!(response.carbon_label, "2.31 kg CO₂e");
        assert_eq!(response.fuel_used, 22.0);
    }
}
