//! Repository for the `trabajos` table.
//!
//! Listing builds its `WHERE` clause dynamically from [`TrabajoFiltro`]; the
//! same filter feeds the page query and the total count so both agree.

use bolsa_core::estados::EstadoTrabajo;
use bolsa_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::contains_pattern;
use crate::models::trabajo::{
    ConteoTrabajos, CreateTrabajo, Trabajo, TrabajoDetalle, TrabajoFiltro, TrabajoPropiedad,
    UpdateTrabajo,
};

/// Column list for plain `trabajos` queries.
const COLUMNS: &str = "\
    id, empleador_id, categoria_id, tipo_trabajo_id, departamento_id, \
    titulo, descripcion, ubicacion, latitud, longitud, salario, requisitos, \
    beneficios, estado, created_at, updated_at";

/// Joined projection backing [`TrabajoDetalle`].
const DETALLE_SELECT: &str = "\
    SELECT t.id, t.empleador_id, t.categoria_id, t.tipo_trabajo_id, t.departamento_id, \
           t.titulo, t.descripcion, t.ubicacion, t.latitud, t.longitud, t.salario, \
           t.requisitos, t.beneficios, t.estado, t.created_at, t.updated_at, \
           c.nombre AS categoria_nombre, \
           tt.nombre AS tipo_trabajo_nombre, \
           d.nombre AS departamento_nombre, \
           pe.nombre_empresa AS empresa_nombre, \
           pe.telefono_contacto AS empresa_telefono, \
           (SELECT COUNT(*) FROM postulaciones p WHERE p.trabajo_id = t.id) AS total_postulaciones \
    FROM trabajos t \
    JOIN categorias c ON c.id = t.categoria_id \
    JOIN tipos_trabajo tt ON tt.id = t.tipo_trabajo_id \
    JOIN departamentos d ON d.id = t.departamento_id \
    JOIN perfiles_empleador pe ON pe.id = t.empleador_id";

/// Provides CRUD and search operations for job postings.
pub struct TrabajoRepo;

impl TrabajoRepo {
    /// Insert a job owned by `empleador_id` (an employer profile id).
    pub async fn create(
        pool: &PgPool,
        empleador_id: DbId,
        input: &CreateTrabajo,
        estado: EstadoTrabajo,
    ) -> Result<Trabajo, sqlx::Error> {
        let query = format!(
            "INSERT INTO trabajos \
                (empleador_id, categoria_id, tipo_trabajo_id, departamento_id, titulo, \
                 descripcion, ubicacion, latitud, longitud, salario, requisitos, beneficios, estado) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trabajo>(&query)
            .bind(empleador_id)
            .bind(input.categoria_id)
            .bind(input.tipo_trabajo_id)
            .bind(input.departamento_id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.ubicacion)
            .bind(input.latitud)
            .bind(input.longitud)
            .bind(&input.salario)
            .bind(&input.requisitos)
            .bind(&input.beneficios)
            .bind(estado.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trabajo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trabajos WHERE id = $1");
        sqlx::query_as::<_, Trabajo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a job with its joined display names.
    pub async fn find_detalle(pool: &PgPool, id: DbId) -> Result<Option<TrabajoDetalle>, sqlx::Error> {
        let query = format!("{DETALLE_SELECT} WHERE t.id = $1");
        sqlx::query_as::<_, TrabajoDetalle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the owning user of a job, for authorization checks.
    pub async fn find_propiedad(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrabajoPropiedad>, sqlx::Error> {
        sqlx::query_as::<_, TrabajoPropiedad>(
            "SELECT t.id, t.empleador_id, pe.usuario_id AS empleador_usuario_id, t.estado \
             FROM trabajos t \
             JOIN perfiles_empleador pe ON pe.id = t.empleador_id \
             WHERE t.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// One page of jobs matching `filtro`, newest first.
    pub async fn list(
        pool: &PgPool,
        filtro: &TrabajoFiltro,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TrabajoDetalle>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(DETALLE_SELECT);
        push_filters(&mut qb, filtro);
        qb.push(" ORDER BY t.created_at DESC, t.id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        qb.build_query_as::<TrabajoDetalle>().fetch_all(pool).await
    }

    /// Total number of jobs matching `filtro`.
    pub async fn count(pool: &PgPool, filtro: &TrabajoFiltro) -> Result<i64, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM trabajos t");
        push_filters(&mut qb, filtro);
        qb.build_query_scalar::<i64>().fetch_one(pool).await
    }

    /// All jobs of one employer (any status unless `estado` is given), newest first.
    pub async fn list_by_empleador(
        pool: &PgPool,
        empleador_id: DbId,
        estado: Option<EstadoTrabajo>,
    ) -> Result<Vec<TrabajoDetalle>, sqlx::Error> {
        let query = format!(
            "{DETALLE_SELECT} \
             WHERE t.empleador_id = $1 AND ($2::TEXT IS NULL OR t.estado = $2) \
             ORDER BY t.created_at DESC, t.id DESC"
        );
        sqlx::query_as::<_, TrabajoDetalle>(&query)
            .bind(empleador_id)
            .bind(estado.map(EstadoTrabajo::as_str))
            .fetch_all(pool)
            .await
    }

    /// Update a job. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrabajo,
    ) -> Result<Option<Trabajo>, sqlx::Error> {
        let query = format!(
            "UPDATE trabajos SET \
                titulo = COALESCE($2, titulo), \
                descripcion = COALESCE($3, descripcion), \
                ubicacion = COALESCE($4, ubicacion), \
                latitud = COALESCE($5, latitud), \
                longitud = COALESCE($6, longitud), \
                salario = COALESCE($7, salario), \
                requisitos = COALESCE($8, requisitos), \
                beneficios = COALESCE($9, beneficios), \
                categoria_id = COALESCE($10, categoria_id), \
                tipo_trabajo_id = COALESCE($11, tipo_trabajo_id), \
                departamento_id = COALESCE($12, departamento_id), \
                estado = COALESCE($13, estado) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trabajo>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.descripcion)
            .bind(&input.ubicacion)
            .bind(input.latitud)
            .bind(input.longitud)
            .bind(&input.salario)
            .bind(&input.requisitos)
            .bind(&input.beneficios)
            .bind(input.categoria_id)
            .bind(input.tipo_trabajo_id)
            .bind(input.departamento_id)
            .bind(input.estado.map(EstadoTrabajo::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Delete a job. Its applications are removed by `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trabajos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct active titles containing `fragment`, most recently posted first.
    pub async fn suggest_titles(
        pool: &PgPool,
        fragment: &str,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT titulo FROM trabajos \
             WHERE estado = $1 AND titulo ILIKE $2 \
             GROUP BY titulo \
             ORDER BY MAX(created_at) DESC \
             LIMIT $3",
        )
        .bind(EstadoTrabajo::Activo.as_str())
        .bind(contains_pattern(fragment))
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Job counters for one employer, grouped by status.
    pub async fn count_by_estado(
        pool: &PgPool,
        empleador_id: DbId,
    ) -> Result<ConteoTrabajos, sqlx::Error> {
        sqlx::query_as::<_, ConteoTrabajos>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE estado = 'ACTIVO') AS activos, \
                    COUNT(*) FILTER (WHERE estado = 'CERRADO') AS cerrados, \
                    COUNT(*) FILTER (WHERE estado = 'BORRADOR') AS borradores \
             FROM trabajos WHERE empleador_id = $1",
        )
        .bind(empleador_id)
        .fetch_one(pool)
        .await
    }
}

/// Append the `WHERE` clause for `filtro` with bound parameters.
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filtro: &TrabajoFiltro) {
    qb.push(" WHERE TRUE");

    if let Some(id) = filtro.categoria_id {
        qb.push(" AND t.categoria_id = ").push_bind(id);
    }
    if let Some(id) = filtro.tipo_trabajo_id {
        qb.push(" AND t.tipo_trabajo_id = ").push_bind(id);
    }
    if let Some(id) = filtro.departamento_id {
        qb.push(" AND t.departamento_id = ").push_bind(id);
    }
    if let Some(id) = filtro.empleador_id {
        qb.push(" AND t.empleador_id = ").push_bind(id);
    }
    if let Some(ubicacion) = &filtro.ubicacion {
        qb.push(" AND t.ubicacion ILIKE ")
            .push_bind(contains_pattern(ubicacion));
    }
    if let Some(busqueda) = &filtro.busqueda {
        let pattern = contains_pattern(busqueda);
        qb.push(" AND (t.titulo ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR t.descripcion ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(estado) = filtro.estado {
        qb.push(" AND t.estado = ").push_bind(estado.as_str());
    }
}
