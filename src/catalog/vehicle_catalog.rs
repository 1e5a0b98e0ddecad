//! Catálogo de vehículos
//!
//! Catálogo inmutable de modelos por categoría, con un modelo por defecto
//! para cada categoría. Se construye una sola vez al arrancar y se comparte
//! por referencia; `VehicleCatalog::complete` exige además todas las categorías.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::vehicle::{VehicleCategory, VehicleModel};

use super::reference_data::reference_entries;

/// Errores de configuración del catálogo (datos estáticos inconsistentes)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("no catalog entry for vehicle category '{0}'")]
    MissingCategory(VehicleCategory),

    #[error("vehicle category '{0}' has no models")]
    EmptyCategory(VehicleCategory),

    #[error("default model index {index} is out of range for category '{category}'")]
    DefaultOutOfRange { category: VehicleCategory, index: usize },

    #[error("duplicate model '{name}' in category '{category}'")]
    DuplicateModel { category: VehicleCategory, name: String },

    #[error("model '{name}' in category '{category}' has no positive efficiency")]
    MissingEfficiency { category: VehicleCategory, name: String },

    #[error("model '{name}' in category '{category}' is billed per km but has an efficiency")]
    UnexpectedEfficiency { category: VehicleCategory, name: String },

    #[error("model '{name}' in category '{category}' has a non-positive emission factor")]
    InvalidEmissionFactor { category: VehicleCategory, name: String },
}

/// Modelos de una categoría y el índice de su modelo por defecto
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    models: Vec<VehicleModel>,
    default_index: usize,
}

impl CategoryEntry {
    pub fn new(models: Vec<VehicleModel>, default_index: usize) -> Self {
        Self {
            models,
            default_index,
        }
    }

    pub fn models(&self) -> &[VehicleModel] {
        &self.models
    }

    fn default_model(&self) -> Option<&VehicleModel> {
        self.models.get(self.default_index)
    }

    fn validate(&self, category: VehicleCategory) -> Result<(), CatalogError> {
        if self.models.is_empty() {
            return Err(CatalogError::EmptyCategory(category));
        }
        if self.default_index >= self.models.len() {
            return Err(CatalogError::DefaultOutOfRange {
                category,
                index: self.default_index,
            });
        }

        for (position, model) in self.models.iter().enumerate() {
            if self.models[..position].iter().any(|m| m.name == model.name) {
                return Err(CatalogError::DuplicateModel {
                    category,
                    name: model.name.clone(),
                });
            }
            if model.emission_factor <= Decimal::ZERO {
                return Err(CatalogError::InvalidEmissionFactor {
                    category,
                    name: model.name.clone(),
                });
            }
            match (model.consumption_unit.uses_efficiency(), model.efficiency_per_unit) {
                (true, Some(efficiency)) if efficiency > Decimal::ZERO => {}
                (true, _) => {
                    return Err(CatalogError::MissingEfficiency {
                        category,
                        name: model.name.clone(),
                    })
                }
                (false, Some(_)) => {
                    return Err(CatalogError::UnexpectedEfficiency {
                        category,
                        name: model.name.clone(),
                    })
                }
                (false, None) => {}
            }
        }

        Ok(())
    }
}

/// Catálogo de vehículos validado
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    entries: BTreeMap<VehicleCategory, CategoryEntry>,
}

impl VehicleCatalog {
    /// Construir y validar un catálogo a partir de sus entradas
    pub fn new(
        entries: impl IntoIterator<Item = (VehicleCategory, CategoryEntry)>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            entries: entries.into_iter().collect(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Catálogo que además debe cubrir todas las categorías conocidas
    pub fn complete(
        entries: impl IntoIterator<Item = (VehicleCategory, CategoryEntry)>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::new(entries)?;
        catalog.ensure_all_categories()?;
        Ok(catalog)
    }

    /// Catálogo de referencia (Mumbai)
    pub fn reference() -> Result<Self, CatalogError> {
        Self::complete(reference_entries())
    }

    /// Verificar las invariantes de todas las categorías
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (category, entry) in &self.entries {
            entry.validate(*category)?;
        }
        Ok(())
    }

    /// Cada categoría de `VehicleCategory::ALL` necesita una entrada
    pub fn ensure_all_categories(&self) -> Result<(), CatalogError> {
        match VehicleCategory::ALL
            .into_iter()
            .find(|category| !self.entries.contains_key(category))
        {
            Some(missing) => Err(CatalogError::MissingCategory(missing)),
            None => Ok(()),
        }
    }

    /// Buscar un modelo por nombre exacto (sensible a mayúsculas)
    pub fn find_model(&self, category: VehicleCategory, name: &str) -> Option<&VehicleModel> {
        self.entries
            .get(&category)?
            .models
            .iter()
            .find(|model| model.name == name)
    }

    /// Modelo por defecto de una categoría
    pub fn default_model(&self, category: VehicleCategory) -> Result<&VehicleModel, CatalogError> {
        self.entries
            .get(&category)
            .and_then(CategoryEntry::default_model)
            .ok_or(CatalogError::MissingCategory(category))
    }

    /// Modelos de una categoría, en el orden del catálogo
    pub fn models(&self, category: VehicleCategory) -> Result<&[VehicleModel], CatalogError> {
        self.entries
            .get(&category)
            .map(CategoryEntry::models)
            .ok_or(CatalogError::MissingCategory(category))
    }

    pub fn categories(&self) -> impl Iterator<Item = VehicleCategory> + '_ {
        self.entries.keys().copied()
    }

    /// Número total de modelos
    pub fn model_count(&self) -> usize {
        self.entries.values().map(|entry| entry.models.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::ConsumptionUnit;

    fn reference() -> VehicleCatalog {
        VehicleCatalog::reference().expect("reference catalog must be valid")
    }

    #[test]
    fn test_reference_catalog_covers_every_category() {
        let catalog = reference();
        let categories: Vec<_> = catalog.categories().collect();
        assert_eq!(categories.len(), VehicleCategory::ALL.len());
        for category in VehicleCategory::ALL {
            assert!(categories.contains(&category));
        }
        assert_eq!(catalog.model_count(), 16);
    }

    #[test]
    fn test_find_model_returns_the_same_entry_for_every_model() {
        let catalog = reference();
        for category in VehicleCategory::ALL {
            for model in catalog.models(category).unwrap() {
                let found = catalog.find_model(category, &model.name).unwrap();
                assert!(std::ptr::eq(found, model));
            }
        }
    }

    #[test]
    fn test_default_model_is_member_of_its_category() {
        let catalog = reference();
        for category in VehicleCategory::ALL {
            let default = catalog.default_model(category).unwrap();
            let models = catalog.models(category).unwrap();
            assert!(models.iter().any(|m| std::ptr::eq(m, default)));
        }
    }

    #[test]
    fn test_default_model_is_first_listed() {
        let catalog = reference();
        assert_eq!(
            catalog.default_model(VehicleCategory::Car).unwrap().name,
            "Maruti Swift Petrol"
        );
        assert_eq!(
            catalog.default_model(VehicleCategory::Bike).unwrap().name,
            "Honda Shine 125"
        );
        assert_eq!(
            catalog.default_model(VehicleCategory::Rickshaw).unwrap().name,
            "Bajaj RE CNG Auto"
        );
        assert_eq!(
            catalog.default_model(VehicleCategory::Bus).unwrap().name,
            "BEST City Bus"
        );
        assert_eq!(
            catalog.default_model(VehicleCategory::Metro).unwrap().name,
            "Mumbai Metro Line 1"
        );
    }

    #[test]
    fn test_find_model_is_exact_match() {
        let catalog = reference();
        assert!(catalog
            .find_model(VehicleCategory::Car, "maruti swift petrol")
            .is_none());
        assert!(catalog
            .find_model(VehicleCategory::Car, " Maruti Swift Petrol")
            .is_none());
        // El modelo existe pero en otra categoría
        assert!(catalog
            .find_model(VehicleCategory::Bike, "Maruti Swift Petrol")
            .is_none());
    }

    #[test]
    fn test_transit_models_are_billed_per_km() {
        let catalog = reference();
        let bus = catalog.default_model(VehicleCategory::Bus).unwrap();
        assert_eq!(bus.consumption_unit, ConsumptionUnit::Km);
        assert_eq!(bus.efficiency_per_unit, None);
        assert_eq!(bus.emission_factor, Decimal::new(105, 3));
    }

    #[test]
    fn test_missing_category_is_configuration_error() {
        let catalog = VehicleCatalog::new(
            reference_entries()
                .into_iter()
                .filter(|(category, _)| *category != VehicleCategory::Metro),
        )
        .unwrap();

        assert_eq!(
            catalog.default_model(VehicleCategory::Metro),
            Err(CatalogError::MissingCategory(VehicleCategory::Metro))
        );
        assert!(catalog
            .find_model(VehicleCategory::Metro, "Mumbai Metro Line 1")
            .is_none());
    }

    #[test]
    fn test_complete_catalog_requires_every_category() {
        let result = VehicleCatalog::complete(
            reference_entries()
                .into_iter()
                .filter(|(category, _)| *category != VehicleCategory::Metro),
        );
        assert_eq!(
            result.unwrap_err(),
            CatalogError::MissingCategory(VehicleCategory::Metro)
        );
        assert!(reference().ensure_all_categories().is_ok());
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let result = VehicleCatalog::new(vec![(VehicleCategory::Bus, CategoryEntry::new(vec![], 0))]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyCategory(VehicleCategory::Bus)
        );
    }

    #[test]
    fn test_default_out_of_range_is_rejected() {
        let models = vec![VehicleModel::per_km("BEST City Bus", Decimal::new(105, 3))];
        let result = VehicleCatalog::new(vec![(VehicleCategory::Bus, CategoryEntry::new(models, 1))]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DefaultOutOfRange {
                category: VehicleCategory::Bus,
                index: 1
            }
        );
    }

    #[test]
    fn test_metered_model_without_efficiency_is_rejected() {
        let broken = VehicleModel {
            name: "Ghost Petrol".to_string(),
            efficiency_per_unit: None,
            consumption_unit: ConsumptionUnit::Litre,
            emission_factor: Decimal::new(231, 2),
        };
        let result = VehicleCatalog::new(vec![(VehicleCategory::Car, CategoryEntry::new(vec![broken], 0))]);
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::MissingEfficiency { .. }
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let models = vec![
            VehicleModel::per_km("Line 1", Decimal::new(41, 3)),
            VehicleModel::per_km("Line 1", Decimal::new(41, 3)),
        ];
        let result = VehicleCatalog::new(vec![(VehicleCategory::Metro, CategoryEntry::new(models, 0))]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateModel {
                category: VehicleCategory::Metro,
                name: "Line 1".to_string()
            }
        );
    }
}
