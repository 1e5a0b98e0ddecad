//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo lo que contiene es inmutable salvo el
//! historial de viajes, que se protege con su propio lock.

use std::sync::Arc;

use crate::catalog::{CatalogError, VehicleCatalog};
use crate::config::environment::EnvironmentConfig;
use crate::repositories::trip_history_repository::{InMemoryTripHistory, TripHistoryRepository};
use crate::services::carbon_budget_service::CarbonBudgetService;
use crate::services::destination_service::DestinationService;
use crate::services::trip_calculator::TripCalculator;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub calculator: TripCalculator,
    pub destinations: Arc<DestinationService>,
    pub carbon_budget: CarbonBudgetService,
    pub trip_history: Arc<dyn TripHistoryRepository>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        catalog: Arc<VehicleCatalog>,
        trip_history: Arc<dyn TripHistoryRepository>,
    ) -> Self {
        let destinations = DestinationService::new(
            config.trip_start_location.clone(),
            config.default_trip_distance_km,
        );
        let carbon_budget = CarbonBudgetService::new(config.grid_emission_factor);

        Self {
            config,
            calculator: TripCalculator::new(catalog),
            destinations: Arc::new(destinations),
            carbon_budget,
            trip_history,
        }
    }

    /// Estado con el catálogo de referencia y el historial en memoria
    pub fn with_reference_catalog(config: EnvironmentConfig) -> Result<Self, CatalogError> {
        let catalog = VehicleCatalog::reference()?;
        Ok(Self::new(
            config,
            Arc::new(catalog),
            Arc::new(InMemoryTripHistory::new()),
        ))
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        self.calculator.catalog()
    }
}
