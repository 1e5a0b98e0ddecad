//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    pub request_timeout_secs: u64,
    // Registro de viajes
    pub trip_start_location: String,
    pub default_trip_distance_km: Decimal,
    // Presupuesto de carbono (kg CO₂ por kWh)
    pub grid_emission_factor: Decimal,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            rate_limit_requests: 120,
            rate_limit_window: 60,
            request_timeout_secs: 10,
            trip_start_location: "MPSTME, Vile Parle".to_string(),
            default_trip_distance_km: Decimal::from(10),
            grid_emission_factor: Decimal::new(92, 2),
        }
    }
}

/// Leer una variable opcional y parsearla, con el nombre en el error
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{} must be a valid value, got '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración del entorno; las variables ausentes usan el valor por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            rate_limit_requests: parse_var("RATE_LIMIT_REQUESTS")?
                .unwrap_or(defaults.rate_limit_requests),
            rate_limit_window: parse_var("RATE_LIMIT_WINDOW")?.unwrap_or(defaults.rate_limit_window),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
            trip_start_location: env::var("TRIP_START_LOCATION")
                .unwrap_or(defaults.trip_start_location),
            default_trip_distance_km: parse_var("DEFAULT_TRIP_DISTANCE_KM")?
                .unwrap_or(defaults.default_trip_distance_km),
            grid_emission_factor: parse_var("GRID_EMISSION_FACTOR")?
                .unwrap_or(defaults.grid_emission_factor),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
