//! Resolución de destinos
//!
//! Traduce el destino escrito por el usuario a una distancia desde el punto
//! de partida. Los destinos desconocidos usan la distancia por defecto.

use lazy_static::lazy_static;
use rust_decimal::Decimal;

use crate::models::destination::Destination;

/// Etiqueta usada cuando el usuario no escribe ningún destino
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

lazy_static! {
    static ref KNOWN_DESTINATIONS: Vec<Destination> = vec![
        Destination::known("Juhu Beach", 5, 19.0988, 72.8265),
        Destination::known("Bandra-Worli Sea Link", 9, 19.0169, 72.8161),
        Destination::known("Siddhivinayak Temple", 13, 19.0176, 72.8305),
        Destination::known("IIT Bombay, Powai", 12, 19.1334, 72.9133),
        Destination::known("CSMT Station", 22, 18.9402, 72.8355),
        Destination::known("Marine Drive", 21, 18.9432, 72.8238),
    ];
}

/// Directorio de destinos con distancia fija
#[derive(Debug, Clone)]
pub struct DestinationService {
    start_location: String,
    default_distance_km: Decimal,
    destinations: Vec<Destination>,
}

impl DestinationService {
    pub fn new(start_location: String, default_distance_km: Decimal) -> Self {
        Self::with_destinations(start_location, default_distance_km, KNOWN_DESTINATIONS.clone())
    }

    pub fn with_destinations(
        start_location: String,
        default_distance_km: Decimal,
        destinations: Vec<Destination>,
    ) -> Self {
        Self {
            start_location,
            default_distance_km,
            destinations,
        }
    }

    pub fn start_location(&self) -> &str {
        &self.start_location
    }

    pub fn default_distance_km(&self) -> Decimal {
        self.default_distance_km
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Buscar un destino conocido sin distinguir mayúsculas
    pub fn find(&self, query: &str) -> Option<&Destination> {
        let query = query.trim();
        self.destinations
            .iter()
            .find(|destination| destination.label.to_lowercase() == query.to_lowercase())
    }

    /// Resolver el destino; los desconocidos usan la distancia por defecto
    pub fn resolve(&self, query: &str) -> Destination {
        if let Some(destination) = self.find(query) {
            return destination.clone();
        }

        let label = match query.trim() {
            "" => UNKNOWN_LOCATION.to_string(),
            typed => typed.to_string(),
        };

        Destination {
            label,
            distance_km: self.default_distance_km,
            coordinates: None,
        }
    }
}
