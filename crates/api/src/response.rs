//! Shared response envelope for API handlers.
//!
//! Every `/api` response uses `{ "exito", "mensaje", "datos"? }`; errors add
//! an `"error"` code and are produced by [`crate::error::AppError`]. Use the
//! helpers here instead of ad-hoc `serde_json::json!` bodies.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub exito: bool,
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datos: Option<T>,
}

/// `200 OK` with a payload.
pub fn ok<T: Serialize>(mensaje: impl Into<String>, datos: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        exito: true,
        mensaje: mensaje.into(),
        datos: Some(datos),
    })
}

/// `201 Created` with a payload.
pub fn created<T: Serialize>(
    mensaje: impl Into<String>,
    datos: T,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, ok(mensaje, datos))
}

/// `200 OK` with only a message, for deletions.
pub fn message(mensaje: impl Into<String>) -> Json<ApiResponse<()>> {
    Json(ApiResponse {
        exito: true,
        mensaje: mensaje.into(),
        datos: None,
    })
}
