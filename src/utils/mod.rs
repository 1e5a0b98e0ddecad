//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y redondeo de decimales.

pub mod decimal;
pub mod errors;
pub mod extract;
pub mod validation;
