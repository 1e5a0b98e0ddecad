//! Calculador de emisiones de viaje
//!
//! Calcula el combustible/energía consumido y el CO₂e emitido en un tramo de
//! viaje a partir del catálogo de vehículos. Si el modelo pedido no existe se
//! usa el modelo por defecto de la categoría; el resultado devuelve el nombre
//! del modelo realmente usado para que el llamador detecte la sustitución.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::{CatalogError, VehicleCatalog};
use crate::models::trip::{TripCalculationInput, TripCalculationResult};
use crate::models::vehicle::{ConsumptionUnit, VehicleCategory, VehicleModel};
use crate::utils::decimal::round_2dp;

/// Calculador sin estado sobre un catálogo inmutable
#[derive(Debug, Clone)]
pub struct TripCalculator {
    catalog: Arc<VehicleCatalog>,
}

impl TripCalculator {
    pub fn new(catalog: Arc<VehicleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    /// Resolver el modelo pedido o, si no existe, el de la categoría
    pub fn resolve_model(
        &self,
        category: VehicleCategory,
        model_name: &str,
    ) -> Result<&VehicleModel, CatalogError> {
        match self.catalog.find_model(category, model_name) {
            Some(model) => Ok(model),
            None => {
                let fallback = self.catalog.default_model(category)?;
                debug!(
                    "🔁 Modelo '{}' no encontrado en '{}', usando '{}'",
                    model_name, category, fallback.name
                );
                Ok(fallback)
            }
        }
    }

    /// Calcular consumo y emisiones de un tramo
    ///
    /// Las distancias negativas se aceptan tal cual; la validación de rango
    /// corresponde a la capa que recibe la petición.
    pub fn calculate_trip(
        &self,
        distance_km: Decimal,
        category: VehicleCategory,
        model_name: &str,
    ) -> Result<TripCalculationResult, CatalogError> {
        let model = self.resolve_model(category, model_name)?;

        let (fuel_or_energy_used, carbon_emitted_kg) = match model.consumption_unit {
            ConsumptionUnit::Km => {
                let fuel = round_2dp(distance_km);
                let carbon = round_2dp(distance_km * model.emission_factor);
                (fuel, carbon)
            }
            ConsumptionUnit::Litre | ConsumptionUnit::Kwh => {
                let fuel = model
                    .efficiency_per_unit
                    .and_then(|efficiency| distance_km.checked_div(efficiency))
                    .map(round_2dp)
                    .ok_or_else(|| CatalogError::MissingEfficiency {
                        category,
                        name: model.name.clone(),
                    })?;
                // Emisiones sobre el consumo ya redondeado: ambas cifras cuadran
                let carbon = round_2dp(fuel * model.emission_factor);
                (fuel, carbon)
            }
        };

        Ok(TripCalculationResult {
            fuel_or_energy_used,
            consumption_unit: model.consumption_unit,
            carbon_emitted_kg,
            resolved_model_name: model.name.clone(),
        })
    }

    pub fn calculate(&self, input: &TripCalculationInput) -> Result<TripCalculationResult, CatalogError> {
        self.calculate_trip(
            input.distance_km,
            input.vehicle_category,
            &input.requested_model_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_data::reference_entries;

    fn calculator() -> TripCalculator {
        TripCalculator::new(Arc::new(VehicleCatalog::reference().unwrap()))
    }

    fn dec(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn test_car_petrol_trip() {
        let result = calculator()
            .calculate_trip(Decimal::from(12), VehicleCategory::Car, "Maruti Swift Petrol")
            .unwrap();

        assert_eq!(result.fuel_or_energy_used, dec(80, 2));
        assert_eq!(result.consumption_unit, ConsumptionUnit::Litre);
        assert_eq!(result.carbon_emitted_kg, dec(185, 2));
        assert_eq!(result.resolved_model_name, "Maruti Swift Petrol");
        assert!(!result.fallback_used("Maruti Swift Petrol"));
    }

    #[test]
    fn test_bus_trip_is_billed_per_km() {
        let result = calculator()
            .calculate_trip(Decimal::from(22), VehicleCategory::Bus, "BEST City Bus")
            .unwrap();

        assert_eq!(result.fuel_or_energy_used, Decimal::from(22));
        assert_eq!(result.consumption_unit, ConsumptionUnit::Km);
        assert_eq!(result.carbon_emitted_kg, dec(231, 2));
    }

    #[test]
    fn test_electric_rickshaw_trip() {
        let result = calculator()
            .calculate_trip(Decimal::from(9), VehicleCategory::Rickshaw, "Mahindra Treo EV Auto")
            .unwrap();

        assert_eq!(result.fuel_or_energy_used, dec(100, 2));
        assert_eq!(result.consumption_unit, ConsumptionUnit::Kwh);
        assert_eq!(result.carbon_emitted_kg, dec(70, 2));
        assert_eq!(result.resolved_model_name, "Mahindra Treo EV Auto");
    }

    #[test]
    fn test_unknown_model_falls_back_to_category_default() {
        let result = calculator()
            .calculate_trip(Decimal::from(5), VehicleCategory::Car, "Nonexistent Model")
            .unwrap();

        assert_eq!(result.resolved_model_name, "Maruti Swift Petrol");
        assert!(result.fallback_used("Nonexistent Model"));
        assert_eq!(result.fuel_or_energy_used, dec(33, 2));
        assert_eq!(result.carbon_emitted_kg, dec(76, 2));
    }

    #[test]
    fn test_fallback_resolves_default_for_every_category() {
        let calculator = calculator();
        for category in VehicleCategory::ALL {
            let result = calculator
                .calculate_trip(Decimal::from(7), category, "nonexistent-model")
                .unwrap();
            let default = calculator.catalog().default_model(category).unwrap();
            assert_eq!(result.resolved_model_name, default.name);
        }
    }

    #[test]
    fn test_zero_distance() {
        let result = calculator()
            .calculate_trip(Decimal::ZERO, VehicleCategory::Car, "Maruti Swift Petrol")
            .unwrap();

        assert_eq!(result.fuel_or_energy_used, Decimal::ZERO);
        assert_eq!(result.carbon_emitted_kg, Decimal::ZERO);
    }

    #[test]
    fn test_negative_distance_is_accepted() {
        let result = calculator()
            .calculate_trip(Decimal::from(-12), VehicleCategory::Car, "Maruti Swift Petrol")
            .unwrap();

        assert_eq!(result.fuel_or_energy_used, dec(-80, 2));
        assert_eq!(result.carbon_emitted_kg, dec(-185, 2));
    }

    #[test]
    fn test_formulas_hold_for_every_model() {
        let calculator = calculator();
        let distance = dec(173, 1);

        for category in VehicleCategory::ALL {
            for model in calculator.catalog().models(category).unwrap() {
                let result = calculator
                    .calculate_trip(distance, category, &model.name)
                    .unwrap();
                assert_eq!(result.resolved_model_name, model.name);

                match model.efficiency_per_unit {
                    None => {
                        assert_eq!(result.fuel_or_energy_used, distance);
                        assert_eq!(
                            result.carbon_emitted_kg,
                            round_2dp(distance * model.emission_factor)
                        );
                    }
                    Some(efficiency) => {
                        assert_eq!(result.fuel_or_energy_used, round_2dp(distance / efficiency));
                        assert_eq!(
                            result.carbon_emitted_kg,
                            round_2dp(result.fuel_or_energy_used * model.emission_factor)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_model_name_match_is_case_sensitive() {
        let result = calculator()
            .calculate_trip(Decimal::from(14), VehicleCategory::Car, "honda city petrol")
            .unwrap();
        assert_eq!(result.resolved_model_name, "Maruti Swift Petrol");
    }

    #[test]
    fn test_missing_category_propagates_configuration_error() {
        let catalog = VehicleCatalog::new(
            reference_entries()
                .into_iter()
                .filter(|(category, _)| *category != VehicleCategory::Bus),
        )
        .unwrap();
        let calculator = TripCalculator::new(Arc::new(catalog));

        let error = calculator
            .calculate_trip(Decimal::from(3), VehicleCategory::Bus, "BEST City Bus")
            .unwrap_err();
        assert_eq!(error, CatalogError::MissingCategory(VehicleCategory::Bus));
    }

    #[test]
    fn test_calculate_from_input() {
        let input = TripCalculationInput {
            distance_km: Decimal::from(10),
            vehicle_category: VehicleCategory::Metro,
            requested_model_name: "Mumbai Metro Line 1".to_string(),
        };
        let result = calculator().calculate(&input).unwrap();
        assert_eq!(result.fuel_or_energy_used, Decimal::from(10));
        assert_eq!(result.carbon_emitted_kg, dec(41, 2));
    }
}
