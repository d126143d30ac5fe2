//! Employee and employer profile models and DTOs.

use bolsa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `perfiles_empleado` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfilEmpleado {
    pub id: DbId,
    pub usuario_id: DbId,
    pub nombre: String,
    pub apellido: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub biografia: Option<String>,
    pub experiencia: Option<String>,
    pub educacion: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `perfiles_empleador` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfilEmpleador {
    pub id: DbId,
    pub usuario_id: DbId,
    pub nombre_empresa: String,
    pub descripcion: Option<String>,
    pub email_contacto: Option<String>,
    pub telefono_contacto: Option<String>,
    pub sitio_web: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields required to create an employee profile at registration.
#[derive(Debug)]
pub struct CreatePerfilEmpleado {
    pub nombre: String,
    pub apellido: String,
}

/// Fields required to create an employer profile at registration.
#[derive(Debug)]
pub struct CreatePerfilEmpleador {
    pub nombre_empresa: String,
}

/// Profile data captured at registration, matching the requested role.
#[derive(Debug)]
pub enum CreatePerfil {
    Empleado(CreatePerfilEmpleado),
    Empleador(CreatePerfilEmpleador),
}

/// DTO for `PUT /perfil/empleado`. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerfilEmpleado {
    #[serde(default, deserialize_with = "super::trim::option")]
    #[validate(length(min = 1, max = 100, message = "debe tener entre 1 y 100 caracteres"))]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "super::trim::option")]
    #[validate(length(min = 1, max = 100, message = "debe tener entre 1 y 100 caracteres"))]
    pub apellido: Option<String>,
    #[validate(length(max = 255, message = "no puede superar 255 caracteres"))]
    pub direccion: Option<String>,
    #[validate(length(max = 30, message = "no puede superar 30 caracteres"))]
    pub telefono: Option<String>,
    #[validate(length(max = 2000, message = "no puede superar 2000 caracteres"))]
    pub biografia: Option<String>,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub experiencia: Option<String>,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub educacion: Option<String>,
}

/// DTO for `PUT /perfil/empleador`. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerfilEmpleador {
    #[serde(default, deserialize_with = "super::trim::option")]
    #[validate(length(min = 1, max = 200, message = "debe tener entre 1 y 200 caracteres"))]
    pub nombre_empresa: Option<String>,
    #[validate(length(max = 5000, message = "no puede superar 5000 caracteres"))]
    pub descripcion: Option<String>,
    #[validate(email(message = "debe ser un email válido"))]
    pub email_contacto: Option<String>,
    #[validate(length(max = 30, message = "no puede superar 30 caracteres"))]
    pub telefono_contacto: Option<String>,
    #[validate(url(message = "debe ser una URL válida"))]
    pub sitio_web: Option<String>,
}

/// Publicly visible slice of an employee profile. Contact details stay private.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfilEmpleadoPublico {
    pub id: DbId,
    pub nombre: String,
    pub apellido: String,
    pub biografia: Option<String>,
    pub experiencia: Option<String>,
    pub educacion: Option<String>,
}

/// Publicly visible employer profile with job counters.
///
/// Contact fields are whatever the owner chose to fill in; empty ones are
/// omitted from the output.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfilEmpleadorPublico {
    pub id: DbId,
    pub nombre_empresa: String,
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_contacto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono_contacto: Option<String>,
    pub sitio_web: Option<String>,
    pub trabajos_activos: i64,
    pub trabajos_totales: i64,
    pub created_at: Timestamp,
}
