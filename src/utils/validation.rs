//! Utilidades de validación
//!
//! Validadores custom usados por los DTOs de la API.

use serde::Serialize;
use validator::ValidationError;

use crate::models::vehicle::VehicleCategory;

/// Validar que la categoría sea una de las conocidas
pub fn validate_vehicle_category(value: &str) -> Result<(), ValidationError> {
    let allowed: Vec<&str> = VehicleCategory::ALL.iter().map(|c| c.as_str()).collect();
    validate_enum(value, &allowed)
}

/// Validar que un valor esté en una lista de valores permitidos
pub fn validate_enum<T: PartialEq + std::fmt::Display + std::fmt::Debug + Serialize>(
    value: T,
    allowed_values: &[T],
) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value);
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}
