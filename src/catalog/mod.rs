//! Catálogo de vehículos y datos de referencia

pub mod reference_data;
pub mod vehicle_catalog;

pub use vehicle_catalog::{CatalogError, CategoryEntry, VehicleCatalog};
