//! Modelo de Vehicle
//!
//! Este módulo contiene las categorías de vehículos, las unidades de consumo
//! y el modelo de vehículo que usa el catálogo de emisiones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categoría de vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Bike,
    Rickshaw,
    Bus,
    Metro,
}

impl VehicleCategory {
    /// Todas las categorías conocidas, en orden de presentación
    pub const ALL: [VehicleCategory; 5] = [
        VehicleCategory::Car,
        VehicleCategory::Bike,
        VehicleCategory::Rickshaw,
        VehicleCategory::Bus,
        VehicleCategory::Metro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Bike => "bike",
            VehicleCategory::Rickshaw => "rickshaw",
            VehicleCategory::Bus => "bus",
            VehicleCategory::Metro => "metro",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error al interpretar una categoría desconocida
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for VehicleCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "car" => Ok(VehicleCategory::Car),
            "bike" => Ok(VehicleCategory::Bike),
            "rickshaw" => Ok(VehicleCategory::Rickshaw),
            "bus" => Ok(VehicleCategory::Bus),
            "metro" => Ok(VehicleCategory::Metro),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Unidad en la que se mide el consumo de un vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConsumptionUnit {
    Litre,
    Kwh,
    /// Transporte público facturado por kilómetro recorrido
    Km,
}

impl ConsumptionUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumptionUnit::Litre => "litre",
            ConsumptionUnit::Kwh => "kwh",
            ConsumptionUnit::Km => "km",
        }
    }

    /// El consumo escala con la eficiencia del vehículo (litre, kwh)
    pub fn uses_efficiency(&self) -> bool {
        !matches!(self, ConsumptionUnit::Km)
    }
}

impl fmt::Display for ConsumptionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modelo concreto de vehículo dentro de una categoría
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleModel {
    /// Nombre único dentro de su categoría
    pub name: String,
    /// Km recorridos por unidad de consumo; `None` para categorías facturadas por km
    pub efficiency_per_unit: Option<Decimal>,
    pub consumption_unit: ConsumptionUnit,
    /// kg de CO₂e por unidad de consumo
    pub emission_factor: Decimal,
}

impl VehicleModel {
    /// Modelo cuyo consumo depende de la eficiencia (litros o kWh)
    pub fn metered(
        name: &str,
        efficiency_per_unit: Decimal,
        consumption_unit: ConsumptionUnit,
        emission_factor: Decimal,
    ) -> Self {
        Self {
            name: name.to_string(),
            efficiency_per_unit: Some(efficiency_per_unit),
            consumption_unit,
            emission_factor,
        }
    }

    /// Modelo facturado directamente por kilómetro
    pub fn per_km(name: &str, emission_factor: Decimal) -> Self {
        Self {
            name: name.to_string(),
            efficiency_per_unit: None,
            consumption_unit: ConsumptionUnit::Km,
            emission_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in VehicleCategory::ALL {
            assert_eq!(category.as_str().parse::<VehicleCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!("Car".parse::<VehicleCategory>().is_err());
        assert_eq!(
            "scooter".parse::<VehicleCategory>(),
            Err(UnknownCategory("scooter".to_string()))
        );
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&VehicleCategory::Rickshaw).unwrap();
        assert_eq!(json, "\"rickshaw\"");
        let unit = serde_json::to_string(&ConsumptionUnit::Kwh).unwrap();
        assert_eq!(unit, "\"kwh\"");
    }

    #[test]
    fn test_only_km_skips_efficiency() {
        assert!(ConsumptionUnit::Litre.uses_efficiency());
        assert!(ConsumptionUnit::Kwh.uses_efficiency());
        assert!(!ConsumptionUnit::Km.uses_efficiency());
    }
}
