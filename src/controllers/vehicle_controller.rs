use crate::catalog::VehicleCatalog;
use crate::dto::vehicle_dto::{VehicleCategoryResponse, VehicleModelResponse};
use crate::models::vehicle::VehicleCategory;
use crate::utils::errors::AppResult;

pub struct VehicleController<'a> {
    catalog: &'a VehicleCatalog,
}

impl<'a> VehicleController<'a> {
    pub fn new(catalog: &'a VehicleCatalog) -> Self {
        Self { catalog }
    }

    pub fn list_categories(&self) -> AppResult<Vec<VehicleCategoryResponse>> {
        self.catalog
            .categories()
            .map(|category| -> AppResult<VehicleCategoryResponse> {
                let default = self.catalog.default_model(category)?;
                Ok(VehicleCategoryResponse {
                    category,
                    default_model: default.name.clone(),
                    model_count: self.catalog.models(category)?.len(),
                })
            })
            .collect()
    }

    pub fn list_models(&self, category: &str) -> AppResult<Vec<VehicleModelResponse>> {
        let category: VehicleCategory = category.parse()?;
        let default = self.catalog.default_model(category)?;

        let response = self
            .catalog
            .models(category)?
            .iter()
            .map(|model| VehicleModelResponse::from_model(model, std::ptr::eq(model, default)))
            .collect();

        Ok(response)
    }
}
