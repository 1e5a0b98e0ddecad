//! Servicios del sistema
//!
//! Este módulo contiene el calculador de emisiones de viaje, la resolución
//! de destinos y el presupuesto de carbono.

pub mod carbon_budget_service;
pub mod destination_service;
pub mod trip_calculator;

pub use trip_calculator::TripCalculator;
