//! Datos de referencia del catálogo de vehículos
//!
//! Valores de eficiencia y factores de emisión para Mumbai. El primer modelo
//! de cada categoría es su modelo por defecto.

use rust_decimal::Decimal;

use crate::models::vehicle::{ConsumptionUnit, VehicleCategory, VehicleModel};

use super::vehicle_catalog::CategoryEntry;

/// Factor de emisión en centésimas de kg CO₂e por unidad
fn factor(hundredths: i64) -> Decimal {
    Decimal::new(hundredths, 2)
}

fn litre(name: &str, km_per_litre: i64, emission_hundredths: i64) -> VehicleModel {
    VehicleModel::metered(
        name,
        Decimal::from(km_per_litre),
        ConsumptionUnit::Litre,
        factor(emission_hundredths),
    )
}

fn kwh(name: &str, km_per_kwh: i64, emission_hundredths: i64) -> VehicleModel {
    VehicleModel::metered(
        name,
        Decimal::from(km_per_kwh),
        ConsumptionUnit::Kwh,
        factor(emission_hundredths),
    )
}

/// Tabla completa: categoría, modelos y modelo por defecto (índice 0)
pub fn reference_entries() -> Vec<(VehicleCategory, CategoryEntry)> {
    vec![
        (
            VehicleCategory::Car,
            CategoryEntry::new(
                vec![
                    litre("Maruti Swift Petrol", 15, 231),
                    litre("Hyundai Creta Diesel", 17, 268),
                    litre("Honda City Petrol", 14, 231),
                    litre("Toyota Innova Diesel", 12, 268),
                    kwh("Tata Nexon EV", 8, 70),
                    kwh("MG ZS EV", 7, 70),
                    litre("Kia Seltos Petrol", 16, 231),
                ],
                0,
            ),
        ),
        (
            VehicleCategory::Bike,
            CategoryEntry::new(
                vec![
                    litre("Honda Shine 125", 45, 231),
                    litre("Bajaj Pulsar 150", 40, 231),
                    litre("Royal Enfield Classic 350", 35, 231),
                    litre("TVS Apache RTR 160", 42, 231),
                    litre("Yamaha FZ-S V3", 44, 231),
                ],
                0,
            ),
        ),
        (
            VehicleCategory::Rickshaw,
            CategoryEntry::new(
                vec![
                    // GNC ~ 2.1 kg CO₂ por kg
                    litre("Bajaj RE CNG Auto", 30, 210),
                    kwh("Mahindra Treo EV Auto", 9, 70),
                ],
                0,
            ),
        ),
        (
            VehicleCategory::Bus,
            CategoryEntry::new(
                vec![VehicleModel::per_km("BEST City Bus", Decimal::new(105, 3))],
                0,
            ),
        ),
        (
            VehicleCategory::Metro,
            CategoryEntry::new(
                vec![VehicleModel::per_km("Mumbai Metro Line 1", Decimal::new(41, 3))],
                0,
            ),
        ),
    ]
}
