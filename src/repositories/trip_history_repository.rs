//! Repositorio del historial de viajes
//!
//! El historial vive en memoria, ordenado del más reciente al más antiguo.
//! La persistencia externa, si existe, se conecta implementando el trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::models::destination::Coordinates;
use crate::models::trip::{TripRecord, TripSummary};
use crate::models::vehicle::{ConsumptionUnit, VehicleCategory};
use crate::utils::decimal::round_2dp;

/// Datos de un viaje antes de asignarle id y fecha
#[derive(Debug, Clone)]
pub struct NewTripRecord {
    pub start: String,
    pub end: String,
    pub distance_km: Decimal,
    pub vehicle_category: VehicleCategory,
    pub model: String,
    pub fuel_used: Decimal,
    pub consumption_unit: ConsumptionUnit,
    pub carbon_kg: Decimal,
    pub coordinates: Option<Coordinates>,
}

#[async_trait]
pub trait TripHistoryRepository: Send + Sync {
    /// Guardar un viaje al principio del historial
    async fn insert(&self, trip: NewTripRecord) -> TripRecord;

    /// Viajes del más reciente al más antiguo
    async fn list(&self, limit: Option<usize>) -> Vec<TripRecord>;

    async fn summary(&self) -> TripSummary;

    /// Vaciar el historial, devuelve cuántos viajes se eliminaron
    async fn clear(&self) -> usize;
}

#[derive(Debug, Default)]
struct HistoryInner {
    trips: Vec<TripRecord>,
    next_id: u64,
}

/// Historial en memoria compartido entre requests
#[derive(Debug, Clone, Default)]
pub struct InMemoryTripHistory {
    inner: Arc<RwLock<HistoryInner>>,
}

impl InMemoryTripHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TripHistoryRepository for InMemoryTripHistory {
    async fn insert(&self, trip: NewTripRecord) -> TripRecord {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let record = TripRecord {
            id: inner.next_id,
            start: trip.start,
            end: trip.end,
            distance_km: trip.distance_km,
            vehicle_category: trip.vehicle_category,
            model: trip.model,
            fuel_used: trip.fuel_used,
            consumption_unit: trip.consumption_unit,
            carbon_kg: trip.carbon_kg,
            coordinates: trip.coordinates,
            recorded_at: Utc::now(),
        };

        inner.trips.insert(0, record.clone());
        log::info!(
            "💾 Viaje #{} almacenado: {} → {} ({} km, {} kg CO₂e). Total: {}",
            record.id,
            record.start,
            record.end,
            record.distance_km,
            record.carbon_kg,
            inner.trips.len()
        );
        record
    }

    async fn list(&self, limit: Option<usize>) -> Vec<TripRecord> {
        let inner = self.inner.read().await;
        let take = limit.unwrap_or(inner.trips.len());
        inner.trips.iter().take(take).cloned().collect()
    }

    async fn summary(&self) -> TripSummary {
        let inner = self.inner.read().await;
        let total_distance_km = inner.trips.iter().map(|t| t.distance_km).sum::<Decimal>();
        let total_carbon_kg = inner.trips.iter().map(|t| t.carbon_kg).sum::<Decimal>();

        TripSummary {
            trip_count: inner.trips.len(),
            total_distance_km: round_2dp(total_distance_km),
            total_carbon_kg: round_2dp(total_carbon_kg),
        }
    }

    async fn clear(&self) -> usize {
        let mut inner = self.inner.write().await;
        let removed = inner.trips.len();
        inner.trips.clear();
        log::info!("🧹 Historial de viajes vaciado ({} viajes eliminados)", removed);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_trip(end: &str, distance: i64, carbon_hundredths: i64) -> NewTripRecord {
        NewTripRecord {
            start: "MPSTME, Vile Parle".to_string(),
            end: end.to_string(),
            distance_km: Decimal::from(distance),
            vehicle_category: VehicleCategory::Car,
            model: "Maruti Swift Petrol".to_string(),
            fuel_used: Decimal::ZERO,
            consumption_unit: ConsumptionUnit::Litre,
            carbon_kg: Decimal::new(carbon_hundredths, 2),
            coordinates: None,
        }
    }

    #[tokio::test]
    async fn test_history_is_most_recent_first() {
        let history = InMemoryTripHistory::new();
        history.insert(new_trip("Juhu Beach", 5, 77)).await;
        history.insert(new_trip("Marine Drive", 21, 324)).await;

        let trips = history.list(None).await;
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].end, "Marine Drive");
        assert_eq!(trips[0].id, 2);
        assert_eq!(trips[1].end, "Juhu Beach");
        assert_eq!(trips[1].id, 1);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let history = InMemoryTripHistory::new();
        for i in 0..5 {
            history.insert(new_trip("Juhu Beach", i, 10)).await;
        }
        let trips = history.list(Some(2)).await;
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, 5);
    }

    #[tokio::test]
    async fn test_summary_totals() {
        let history = InMemoryTripHistory::new();
        history.insert(new_trip("Juhu Beach", 5, 77)).await;
        history.insert(new_trip("CSMT Station", 22, 339)).await;

        let summary = history.summary().await;
        assert_eq!(summary.trip_count, 2);
        assert_eq!(summary.total_distance_km, Decimal::from(27));
        assert_eq!(summary.total_carbon_kg, Decimal::new(416, 2));
    }

    #[tokio::test]
    async fn test_clear_keeps_ids_increasing() {
        let history = InMemoryTripHistory::new();
        history.insert(new_trip("Juhu Beach", 5, 77)).await;
        assert_eq!(history.clear().await, 1);
        assert!(history.list(None).await.is_empty());

        let record = history.insert(new_trip("Marine Drive", 21, 324)).await;
        assert_eq!(record.id, 2);
        assert_eq!(history.summary().await, TripSummary {
            trip_count: 1,
            total_distance_km: Decimal::from(21),
            total_carbon_kg: Decimal::new(324, 2),
        });
    }
}
