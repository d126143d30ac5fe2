//! Repository for the `postulaciones` table.

use bolsa_core::estados::EstadoPostulacion;
use bolsa_core::types::DbId;
use sqlx::PgPool;

use crate::models::postulacion::{ConteoPostulaciones, Postulacion, PostulacionDetalle};

const COLUMNS: &str = "\
    id, trabajo_id, empleado_id, carta_presentacion, estado, \
    fecha_postulacion, fecha_revision, updated_at";

/// Joined projection backing [`PostulacionDetalle`].
const DETALLE_SELECT: &str = "\
    SELECT p.id, p.trabajo_id, p.empleado_id, p.carta_presentacion, p.estado, \
           p.fecha_postulacion, p.fecha_revision, \
           t.titulo AS trabajo_titulo, \
           t.estado AS trabajo_estado, \
           t.ubicacion AS trabajo_ubicacion, \
           pe.nombre_empresa AS empresa_nombre, \
           em.nombre AS empleado_nombre, \
           em.apellido AS empleado_apellido, \
           u.email AS empleado_email, \
           em.telefono AS empleado_telefono, \
           em.usuario_id AS empleado_usuario_id, \
           pe.usuario_id AS empleador_usuario_id \
    FROM postulaciones p \
    JOIN trabajos t ON t.id = p.trabajo_id \
    JOIN perfiles_empleador pe ON pe.id = t.empleador_id \
    JOIN perfiles_empleado em ON em.id = p.empleado_id \
    JOIN usuarios u ON u.id = em.usuario_id";

/// Provides CRUD operations for job applications.
pub struct PostulacionRepo;

impl PostulacionRepo {
    /// Insert a new application in `PENDIENTE` status.
    ///
    /// A second application for the same job and employee violates
    /// `uq_postulaciones_trabajo_empleado`.
    pub async fn create(
        pool: &PgPool,
        trabajo_id: DbId,
        empleado_id: DbId,
        carta_presentacion: Option<&str>,
    ) -> Result<Postulacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO postulaciones (trabajo_id, empleado_id, carta_presentacion, estado) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Postulacion>(&query)
            .bind(trabajo_id)
            .bind(empleado_id)
            .bind(carta_presentacion)
            .bind(EstadoPostulacion::Pendiente.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Postulacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM postulaciones WHERE id = $1");
        sqlx::query_as::<_, Postulacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an application with its job, company, and candidate details.
    pub async fn find_detalle(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PostulacionDetalle>, sqlx::Error> {
        let query = format!("{DETALLE_SELECT} WHERE p.id = $1");
        sqlx::query_as::<_, PostulacionDetalle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_trabajo_y_empleado(
        pool: &PgPool,
        trabajo_id: DbId,
        empleado_id: DbId,
    ) -> Result<Option<Postulacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM postulaciones WHERE trabajo_id = $1 AND empleado_id = $2"
        );
        sqlx::query_as::<_, Postulacion>(&query)
            .bind(trabajo_id)
            .bind(empleado_id)
            .fetch_optional(pool)
            .await
    }

    /// Applications sent by one employee, newest first.
    pub async fn list_by_empleado(
        pool: &PgPool,
        empleado_id: DbId,
        estado: Option<EstadoPostulacion>,
    ) -> Result<Vec<PostulacionDetalle>, sqlx::Error> {
        let query = format!(
            "{DETALLE_SELECT} \
             WHERE p.empleado_id = $1 AND ($2::TEXT IS NULL OR p.estado = $2) \
             ORDER BY p.fecha_postulacion DESC, p.id DESC"
        );
        sqlx::query_as::<_, PostulacionDetalle>(&query)
            .bind(empleado_id)
            .bind(estado.map(EstadoPostulacion::as_str))
            .fetch_all(pool)
            .await
    }

    /// Applications received on the jobs of one employer, newest first.
    pub async fn list_recibidas(
        pool: &PgPool,
        empleador_id: DbId,
        trabajo_id: Option<DbId>,
        estado: Option<EstadoPostulacion>,
    ) -> Result<Vec<PostulacionDetalle>, sqlx::Error> {
        let query = format!(
            "{DETALLE_SELECT} \
             WHERE t.empleador_id = $1 \
               AND ($2::BIGINT IS NULL OR p.trabajo_id = $2) \
               AND ($3::TEXT IS NULL OR p.estado = $3) \
             ORDER BY p.fecha_postulacion DESC, p.id DESC"
        );
        sqlx::query_as::<_, PostulacionDetalle>(&query)
            .bind(empleador_id)
            .bind(trabajo_id)
            .bind(estado.map(EstadoPostulacion::as_str))
            .fetch_all(pool)
            .await
    }

    /// Set the review status. `marca_revision` stamps `fecha_revision`;
    /// otherwise the previous stamp is kept.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_estado(
        pool: &PgPool,
        id: DbId,
        estado: EstadoPostulacion,
        marca_revision: bool,
    ) -> Result<Option<Postulacion>, sqlx::Error> {
        let query = format!(
            "UPDATE postulaciones SET \
                estado = $2, \
                fecha_revision = CASE WHEN $3 THEN NOW() ELSE fecha_revision END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Postulacion>(&query)
            .bind(id)
            .bind(estado.as_str())
            .bind(marca_revision)
            .fetch_optional(pool)
            .await
    }

    /// Delete an application. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM postulaciones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Counters of applications received by one employer, grouped by status.
    pub async fn count_by_estado(
        pool: &PgPool,
        empleador_id: DbId,
    ) -> Result<ConteoPostulaciones, sqlx::Error> {
        sqlx::query_as::<_, ConteoPostulaciones>(
            "SELECT COUNT(p.id) AS total, \
                    COUNT(p.id) FILTER (WHERE p.estado = 'PENDIENTE') AS pendientes, \
                    COUNT(p.id) FILTER (WHERE p.estado = 'REVISADA') AS revisadas, \
                    COUNT(p.id) FILTER (WHERE p.estado = 'ACEPTADA') AS aceptadas, \
                    COUNT(p.id) FILTER (WHERE p.estado = 'RECHAZADA') AS rechazadas \
             FROM postulaciones p \
             JOIN trabajos t ON t.id = p.trabajo_id \
             WHERE t.empleador_id = $1",
        )
        .bind(empleador_id)
        .fetch_one(pool)
        .await
    }
}
