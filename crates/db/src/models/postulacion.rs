//! Application model, read models, and DTOs.

use bolsa_core::estados::EstadoPostulacion;
use bolsa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `postulaciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Postulacion {
    pub id: DbId,
    pub trabajo_id: DbId,
    pub empleado_id: DbId,
    pub carta_presentacion: Option<String>,
    pub estado: String,
    pub fecha_postulacion: Timestamp,
    pub fecha_revision: Option<Timestamp>,
    pub updated_at: Timestamp,
}

/// An application joined with its job, company, and candidate.
///
/// The two owner ids drive visibility checks and are not serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostulacionDetalle {
    pub id: DbId,
    pub trabajo_id: DbId,
    pub empleado_id: DbId,
    pub carta_presentacion: Option<String>,
    pub estado: String,
    pub fecha_postulacion: Timestamp,
    pub fecha_revision: Option<Timestamp>,
    pub trabajo_titulo: String,
    pub trabajo_estado: String,
    pub trabajo_ubicacion: String,
    pub empresa_nombre: String,
    pub empleado_nombre: String,
    pub empleado_apellido: String,
    pub empleado_email: String,
    pub empleado_telefono: Option<String>,
    #[serde(skip)]
    pub empleado_usuario_id: DbId,
    #[serde(skip)]
    pub empleador_usuario_id: DbId,
}

/// DTO for `POST /postulaciones`. The applicant comes from the token.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostulacion {
    pub trabajo_id: DbId,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub carta_presentacion: Option<String>,
}

/// DTO for `PATCH /postulaciones/{id}/estado`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEstadoPostulacion {
    pub estado: EstadoPostulacion,
}

/// Query parameters for the employee and employer application listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostulacionListParams {
    pub estado: Option<String>,
    pub trabajo_id: Option<DbId>,
}

/// Application counters for an employer, grouped by status.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConteoPostulaciones {
    pub total: i64,
    pub pendientes: i64,
    pub revisadas: i64,
    pub aceptadas: i64,
    pub rechazadas: i64,
}
