use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::trip_dto::{
    CalculateTripRequest, DestinationListResponse, DestinationResponse, LogTripRequest,
    TripCalculationResponse, TripRecordResponse, TripSummaryResponse,
};
use crate::models::vehicle::VehicleCategory;
use crate::repositories::trip_history_repository::{NewTripRecord, TripHistoryRepository};
use crate::services::destination_service::DestinationService;
use crate::services::trip_calculator::TripCalculator;
use crate::state::AppState;
use crate::utils::decimal::{decimal_from_f64, decimal_to_f64};
use crate::utils::errors::{bad_request_error, AppResult};

pub struct TripController {
    calculator: TripCalculator,
    destinations: Arc<DestinationService>,
    history: Arc<dyn TripHistoryRepository>,
}

fn parse_distance(distance_km: f64) -> AppResult<Decimal> {
    decimal_from_f64(distance_km).ok_or_else(|| bad_request_error("distance_km must be a finite number"))
}

impl TripController {
    pub fn new(state: &AppState) -> Self {
        Self {
            calculator: state.calculator.clone(),
            destinations: state.destinations.clone(),
            history: state.trip_history.clone(),
        }
    }

    pub fn calculate(&self, request: CalculateTripRequest) -> AppResult<TripCalculationResponse> {
        request.validate()?;

        let category: VehicleCategory = request.vehicle_category.parse()?;
        let distance_km = parse_distance(request.distance_km)?;
        let requested_model_name = request.model_name.unwrap_or_default();

        let result = self
            .calculator
            .calculate_trip(distance_km, category, &requested_model_name)?;

        Ok(TripCalculationResponse {
            distance_km: decimal_to_f64(distance_km),
            vehicle_category: category,
            fallback_used: result.fallback_used(&requested_model_name),
            requested_model_name,
            resolved_model_name: result.resolved_model_name,
            fuel_or_energy_used: decimal_to_f64(result.fuel_or_energy_used),
            consumption_unit: result.consumption_unit,
            carbon_emitted_kg: decimal_to_f64(result.carbon_emitted_kg),
        })
    }

    pub async fn log_trip(&self, request: LogTripRequest) -> AppResult<ApiResponse<TripRecordResponse>> {
        request.validate()?;

        let category: VehicleCategory = request.vehicle_category.parse()?;
        let destination = self
            .destinations
            .resolve(request.destination.as_deref().unwrap_or_default());
        let distance_km = match request.distance_km {
            Some(distance) => parse_distance(distance)?,
            None => destination.distance_km,
        };
        let model_name = request.model_name.unwrap_or_default();

        let result = self.calculator.calculate_trip(distance_km, category, &model_name)?;

        let record = self
            .history
            .insert(NewTripRecord {
                start: self.destinations.start_location().to_string(),
                end: destination.label,
                distance_km,
                vehicle_category: category,
                model: result.resolved_model_name,
                fuel_used: result.fuel_or_energy_used,
                consumption_unit: result.consumption_unit,
                carbon_kg: result.carbon_emitted_kg,
                coordinates: destination.coordinates,
            })
            .await;

        info!(
            "🌱 Viaje registrado: {} km en {} ({}) → {} kg CO₂e",
            record.distance_km, record.vehicle_category, record.model, record.carbon_kg
        );

        Ok(ApiResponse::success_with_message(
            TripRecordResponse::from(record),
            "Trip logged successfully".to_string(),
        ))
    }

    pub async fn list(&self, limit: Option<usize>) -> Vec<TripRecordResponse> {
        self.history
            .list(limit)
            .await
            .into_iter()
            .map(TripRecordResponse::from)
            .collect()
    }

    pub async fn summary(&self) -> TripSummaryResponse {
        self.history.summary().await.into()
    }

    pub async fn clear(&self) -> usize {
        self.history.clear().await
    }

    pub fn destinations(&self) -> DestinationListResponse {
        DestinationListResponse {
            start_location: self.destinations.start_location().to_string(),
            default_distance_km: decimal_to_f64(self.destinations.default_distance_km()),
            destinations: self
                .destinations
                .destinations()
                .iter()
                .map(DestinationResponse::from)
                .collect(),
        }
    }
}
