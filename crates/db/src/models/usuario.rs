//! User entity model and DTOs.

use bolsa_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::perfil::{PerfilEmpleado, PerfilEmpleador};

/// Full user row from the `usuarios` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UsuarioResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub rol: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Minimal user record returned next to a token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioResponse {
    pub id: DbId,
    pub email: String,
    pub rol: String,
    pub created_at: Timestamp,
}

impl From<&Usuario> for UsuarioResponse {
    fn from(u: &Usuario) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            rol: u.rol.clone(),
            created_at: u.created_at,
        }
    }
}

/// A user joined with whichever profile matches its role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioConPerfil {
    #[serde(flatten)]
    pub usuario: UsuarioResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfil_empleado: Option<PerfilEmpleado>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfil_empleador: Option<PerfilEmpleador>,
}

/// DTO for inserting a user row. The email must already be normalized.
#[derive(Debug)]
pub struct CreateUsuario {
    pub email: String,
    pub password_hash: String,
    pub rol: String,
}

/// Normalize an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
