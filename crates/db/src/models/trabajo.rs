//! Job posting model, read models, and DTOs.

use bolsa_core::estados::EstadoTrabajo;
use bolsa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `trabajos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trabajo {
    pub id: DbId,
    pub empleador_id: DbId,
    pub categoria_id: DbId,
    pub tipo_trabajo_id: DbId,
    pub departamento_id: DbId,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub salario: Option<String>,
    pub requisitos: Option<String>,
    pub beneficios: Option<String>,
    pub estado: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A job joined with its lookup names, company, and application count.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoDetalle {
    pub id: DbId,
    pub empleador_id: DbId,
    pub categoria_id: DbId,
    pub tipo_trabajo_id: DbId,
    pub departamento_id: DbId,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub salario: Option<String>,
    pub requisitos: Option<String>,
    pub beneficios: Option<String>,
    pub estado: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub categoria_nombre: String,
    pub tipo_trabajo_nombre: String,
    pub departamento_nombre: String,
    pub empresa_nombre: String,
    pub empresa_telefono: Option<String>,
    pub total_postulaciones: i64,
}

/// Ownership facts needed before mutating a job or applying to it.
#[derive(Debug, Clone, FromRow)]
pub struct TrabajoPropiedad {
    pub id: DbId,
    pub empleador_id: DbId,
    pub empleador_usuario_id: DbId,
    pub estado: String,
}

/// DTO for `POST /trabajos`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrabajo {
    #[serde(deserialize_with = "super::trim::string")]
    #[validate(length(min = 3, max = 200, message = "debe tener entre 3 y 200 caracteres"))]
    pub titulo: String,
    #[serde(deserialize_with = "super::trim::string")]
    #[validate(length(min = 10, max = 10000, message = "debe tener entre 10 y 10000 caracteres"))]
    pub descripcion: String,
    #[serde(deserialize_with = "super::trim::string")]
    #[validate(length(min = 2, max = 255, message = "debe tener entre 2 y 255 caracteres"))]
    pub ubicacion: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    #[validate(length(max = 100, message = "no puede superar 100 caracteres"))]
    pub salario: Option<String>,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub requisitos: Option<String>,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub beneficios: Option<String>,
    pub categoria_id: DbId,
    pub tipo_trabajo_id: DbId,
    pub departamento_id: DbId,
    pub estado: Option<EstadoTrabajo>,
}

/// DTO for `PUT /trabajos/{id}`. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrabajo {
    #[serde(default, deserialize_with = "super::trim::option")]
    #[validate(length(min = 3, max = 200, message = "debe tener entre 3 y 200 caracteres"))]
    pub titulo: Option<String>,
    #[serde(default, deserialize_with = "super::trim::option")]
    #[validate(length(min = 10, max = 10000, message = "debe tener entre 10 y 10000 caracteres"))]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "super::trim::option")]
    #[validate(length(min = 2, max = 255, message = "debe tener entre 2 y 255 caracteres"))]
    pub ubicacion: Option<String>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    #[validate(length(max = 100, message = "no puede superar 100 caracteres"))]
    pub salario: Option<String>,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub requisitos: Option<String>,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub beneficios: Option<String>,
    pub categoria_id: Option<DbId>,
    pub tipo_trabajo_id: Option<DbId>,
    pub departamento_id: Option<DbId>,
    pub estado: Option<EstadoTrabajo>,
}

/// Query parameters for `GET /trabajos`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoListParams {
    pub categoria_id: Option<DbId>,
    pub tipo_trabajo_id: Option<DbId>,
    pub departamento_id: Option<DbId>,
    pub empleador_id: Option<DbId>,
    /// Substring matched against `ubicacion`.
    pub ubicacion: Option<String>,
    /// Substring matched against `titulo` and `descripcion`.
    #[serde(alias = "q")]
    pub busqueda: Option<String>,
    /// `ACTIVO` when absent; `TODOS` disables the filter.
    pub estado: Option<String>,
    pub pagina: Option<i64>,
    pub limite: Option<i64>,
}

/// Resolved listing filter handed to the repository.
#[derive(Debug, Default, Clone)]
pub struct TrabajoFiltro {
    pub categoria_id: Option<DbId>,
    pub tipo_trabajo_id: Option<DbId>,
    pub departamento_id: Option<DbId>,
    pub empleador_id: Option<DbId>,
    pub ubicacion: Option<String>,
    pub busqueda: Option<String>,
    pub estado: Option<EstadoTrabajo>,
}

/// Query parameters for `GET /trabajos/mis-publicaciones`.
#[derive(Debug, Default, Deserialize)]
pub struct MisPublicacionesParams {
    pub estado: Option<String>,
}

/// Query parameters for `GET /trabajos/sugerencias`.
#[derive(Debug, Default, Deserialize)]
pub struct SugerenciasParams {
    pub q: Option<String>,
}

/// Job counters for an employer, grouped by status.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConteoTrabajos {
    pub total: i64,
    pub activos: i64,
    pub cerrados: i64,
    pub borradores: i64,
}
