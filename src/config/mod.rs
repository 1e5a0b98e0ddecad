//! Configuración del proyecto
//!
//! Este módulo contiene la configuración cargada de las variables de entorno.

pub mod environment;

pub use environment::*;
