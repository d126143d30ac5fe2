//! Repository for the `perfiles_empleado` table.

use bolsa_core::types::DbId;
use sqlx::PgPool;

use crate::models::perfil::{
    CreatePerfilEmpleado, PerfilEmpleado, PerfilEmpleadoPublico, UpdatePerfilEmpleado,
};

const COLUMNS: &str = "id, usuario_id, nombre, apellido, direccion, telefono, \
                       biografia, experiencia, educacion, created_at, updated_at";

/// Provides persistence operations for employee profiles.
pub struct PerfilEmpleadoRepo;

impl PerfilEmpleadoRepo {
    /// Insert the profile row inside the registration transaction.
    pub(crate) async fn create_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        usuario_id: DbId,
        input: &CreatePerfilEmpleado,
    ) -> Result<PerfilEmpleado, sqlx::Error> {
        let query = format!(
            "INSERT INTO perfiles_empleado (usuario_id, nombre, apellido)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerfilEmpleado>(&query)
            .bind(usuario_id)
            .bind(&input.nombre)
            .bind(&input.apellido)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PerfilEmpleado>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM perfiles_empleado WHERE id = $1");
        sqlx::query_as::<_, PerfilEmpleado>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_usuario_id(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> Result<Option<PerfilEmpleado>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM perfiles_empleado WHERE usuario_id = $1");
        sqlx::query_as::<_, PerfilEmpleado>(&query)
            .bind(usuario_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the profile owned by `usuario_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the user has no employee profile.
    pub async fn update_by_usuario_id(
        pool: &PgPool,
        usuario_id: DbId,
        input: &UpdatePerfilEmpleado,
    ) -> Result<Option<PerfilEmpleado>, sqlx::Error> {
        let query = format!(
            "UPDATE perfiles_empleado SET
                nombre = COALESCE($2, nombre),
                apellido = COALESCE($3, apellido),
                direccion = COALESCE($4, direccion),
                telefono = COALESCE($5, telefono),
                biografia = COALESCE($6, biografia),
                experiencia = COALESCE($7, experiencia),
                educacion = COALESCE($8, educacion)
             WHERE usuario_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerfilEmpleado>(&query)
            .bind(usuario_id)
            .bind(&input.nombre)
            .bind(&input.apellido)
            .bind(&input.direccion)
            .bind(&input.telefono)
            .bind(&input.biografia)
            .bind(&input.experiencia)
            .bind(&input.educacion)
            .fetch_optional(pool)
            .await
    }

    /// Public slice of a profile, by profile id.
    pub async fn find_publico(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PerfilEmpleadoPublico>, sqlx::Error> {
        sqlx::query_as::<_, PerfilEmpleadoPublico>(
            "SELECT id, nombre, apellido, biografia, experiencia, educacion
             FROM perfiles_empleado WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
