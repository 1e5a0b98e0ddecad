//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio: vehículos, viajes, destinos
//! y presupuestos de carbono.

pub mod carbon_budget;
pub mod destination;
pub mod trip;
pub mod vehicle;
