pub mod trip_history_repository;

pub use trip_history_repository::{InMemoryTripHistory, NewTripRecord, TripHistoryRepository};
