//! Extractores propios
//!
//! `AppJson` envuelve `axum::Json` para que un cuerpo mal formado se
//! responda con el mismo formato de error que el resto de la API.

use axum::extract::FromRequest;

use super::errors::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
