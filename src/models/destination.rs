//! Destinos conocidos del registrador de viajes

use rust_decimal::Decimal;
use serde::Serialize;

/// Coordenadas geográficas (latitud, longitud)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Destino con distancia fija desde el punto de partida
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub label: String,
    pub distance_km: Decimal,
    pub coordinates: Option<Coordinates>,
}

impl Destination {
    pub fn known(label: &str, distance_km: i64, lat: f64, lng: f64) -> Self {
        Self {
            label: label.to_string(),
            distance_km: Decimal::from(distance_km),
            coordinates: Some(Coordinates { lat, lng }),
        }
    }
}
