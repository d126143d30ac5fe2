//! Repository for the `perfiles_empleador` table.

use bolsa_core::estados::EstadoTrabajo;
use bolsa_core::types::DbId;
use sqlx::PgPool;

use crate::models::perfil::{
    CreatePerfilEmpleador, PerfilEmpleador, PerfilEmpleadorPublico, UpdatePerfilEmpleador,
};

const COLUMNS: &str = "id, usuario_id, nombre_empresa, descripcion, email_contacto, \
                       telefono_contacto, sitio_web, created_at, updated_at";

/// Provides persistence operations for employer profiles.
pub struct PerfilEmpleadorRepo;

impl PerfilEmpleadorRepo {
    /// Insert the profile row inside the registration transaction.
    pub(crate) async fn create_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        usuario_id: DbId,
        input: &CreatePerfilEmpleador,
    ) -> Result<PerfilEmpleador, sqlx::Error> {
        let query = format!(
            "INSERT INTO perfiles_empleador (usuario_id, nombre_empresa)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerfilEmpleador>(&query)
            .bind(usuario_id)
            .bind(&input.nombre_empresa)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PerfilEmpleador>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM perfiles_empleador WHERE id = $1");
        sqlx::query_as::<_, PerfilEmpleador>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_usuario_id(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> Result<Option<PerfilEmpleador>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM perfiles_empleador WHERE usuario_id = $1");
        sqlx::query_as::<_, PerfilEmpleador>(&query)
            .bind(usuario_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the profile owned by `usuario_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the user has no employer profile.
    pub async fn update_by_usuario_id(
        pool: &PgPool,
        usuario_id: DbId,
        input: &UpdatePerfilEmpleador,
    ) -> Result<Option<PerfilEmpleador>, sqlx::Error> {
        let query = format!(
            "UPDATE perfiles_empleador SET
                nombre_empresa = COALESCE($2, nombre_empresa),
                descripcion = COALESCE($3, descripcion),
                email_contacto = COALESCE($4, email_contacto),
                telefono_contacto = COALESCE($5, telefono_contacto),
                sitio_web = COALESCE($6, sitio_web)
             WHERE usuario_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerfilEmpleador>(&query)
            .bind(usuario_id)
            .bind(&input.nombre_empresa)
            .bind(&input.descripcion)
            .bind(&input.email_contacto)
            .bind(&input.telefono_contacto)
            .bind(&input.sitio_web)
            .fetch_optional(pool)
            .await
    }

    /// Public employer profile with active and total job counters.
    ///
    /// Blank contact fields come back as `NULL` so they are omitted from output.
    pub async fn find_publico(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PerfilEmpleadorPublico>, sqlx::Error> {
        sqlx::query_as::<_, PerfilEmpleadorPublico>(
            "SELECT pe.id, pe.nombre_empresa, pe.descripcion,
                    NULLIF(TRIM(pe.email_contacto), '') AS email_contacto,
                    NULLIF(TRIM(pe.telefono_contacto), '') AS telefono_contacto,
                    pe.sitio_web,
                    COUNT(t.id) FILTER (WHERE t.estado = $2) AS trabajos_activos,
                    COUNT(t.id) AS trabajos_totales,
                    pe.created_at
             FROM perfiles_empleador pe
             LEFT JOIN trabajos t ON t.empleador_id = pe.id
             WHERE pe.id = $1
             GROUP BY pe.id",
        )
        .bind(id)
        .bind(EstadoTrabajo::Activo.as_str())
        .fetch_optional(pool)
        .await
    }
}
