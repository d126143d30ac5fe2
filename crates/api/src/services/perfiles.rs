//! Own-profile reads and updates, password change, and public profiles.

use bolsa_core::error::CoreError;
use bolsa_core::types::DbId;
use bolsa_db::models::perfil::{
    PerfilEmpleado, PerfilEmpleadoPublico, PerfilEmpleador, PerfilEmpleadorPublico,
    UpdatePerfilEmpleado, UpdatePerfilEmpleador,
};
use bolsa_db::repositories::{PerfilEmpleadoRepo, PerfilEmpleadorRepo, UsuarioRepo};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};

/// Request body for `PUT /perfil/contrasena`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CambiarContrasenaRequest {
    #[validate(length(min = 1, message = "es obligatoria"))]
    pub contrasena_actual: String,
    pub contrasena_nueva: String,
}

pub struct PerfilService;

impl PerfilService {
    pub async fn obtener_empleado(pool: &PgPool, usuario_id: DbId) -> AppResult<PerfilEmpleado> {
        PerfilEmpleadoRepo::find_by_usuario_id(pool, usuario_id)
            .await?
            .ok_or_else(perfil_empleado_missing)
    }

    pub async fn actualizar_empleado(
        pool: &PgPool,
        usuario_id: DbId,
        input: UpdatePerfilEmpleado,
    ) -> AppResult<PerfilEmpleado> {
        let perfil = PerfilEmpleadoRepo::update_by_usuario_id(pool, usuario_id, &input)
            .await?
            .ok_or_else(perfil_empleado_missing)?;
        tracing::info!(perfil_id = perfil.id, user_id = usuario_id, "Employee profile updated");
        Ok(perfil)
    }

    pub async fn obtener_empleador(pool: &PgPool, usuario_id: DbId) -> AppResult<PerfilEmpleador> {
        PerfilEmpleadorRepo::find_by_usuario_id(pool, usuario_id)
            .await?
            .ok_or_else(perfil_empleador_missing)
    }

    pub async fn actualizar_empleador(
        pool: &PgPool,
        usuario_id: DbId,
        input: UpdatePerfilEmpleador,
    ) -> AppResult<PerfilEmpleador> {
        let perfil = PerfilEmpleadorRepo::update_by_usuario_id(pool, usuario_id, &input)
            .await?
            .ok_or_else(perfil_empleador_missing)?;
        tracing::info!(perfil_id = perfil.id, user_id = usuario_id, "Employer profile updated");
        Ok(perfil)
    }

    /// Replace the caller's password after checking the current one.
    pub async fn cambiar_contrasena(
        pool: &PgPool,
        usuario_id: DbId,
        input: CambiarContrasenaRequest,
    ) -> AppResult<()> {
        let usuario = UsuarioRepo::find_by_id(pool, usuario_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Usuario",
                id: usuario_id,
            })?;

        let current_ok = verify_password(&input.contrasena_actual, &usuario.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if !current_ok {
            return Err(
                CoreError::Unauthorized("La contraseña actual es incorrecta".into()).into(),
            );
        }
        if input.contrasena_nueva == input.contrasena_actual {
            return Err(CoreError::Validation(
                "La nueva contraseña debe ser diferente a la actual".into(),
            )
            .into());
        }
        validate_password_strength(&input.contrasena_nueva, MIN_PASSWORD_LENGTH)
            .map_err(CoreError::Validation)?;

        let password_hash = hash_password(&input.contrasena_nueva)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
        UsuarioRepo::update_password(pool, usuario_id, &password_hash).await?;

        tracing::info!(user_id = usuario_id, "Password changed");
        Ok(())
    }

    /// Public employee profile by profile id. Contact details are never exposed.
    pub async fn obtener_publico_empleado(
        pool: &PgPool,
        id: DbId,
    ) -> AppResult<PerfilEmpleadoPublico> {
        PerfilEmpleadoRepo::find_publico(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Perfil de empleado",
                id,
            }))
    }

    /// Public employer profile by profile id, with job counters.
    pub async fn obtener_publico_empleador(
        pool: &PgPool,
        id: DbId,
    ) -> AppResult<PerfilEmpleadorPublico> {
        PerfilEmpleadorRepo::find_publico(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Perfil de empleador",
                id,
            }))
    }
}

fn perfil_empleado_missing() -> AppError {
    AppError::Core(CoreError::Missing("Perfil de empleado no encontrado".into()))
}

fn perfil_empleador_missing() -> AppError {
    AppError::Core(CoreError::Missing("Perfil de empleador no encontrado".into()))
}
