//! Repository for the lookup tables `categorias`, `tipos_trabajo`, and
//! `departamentos`.
//!
//! Table and column names come from the closed [`Catalogo`] enum, never from
//! user input, so interpolating them into SQL is safe.

use bolsa_core::estados::EstadoTrabajo;
use bolsa_core::types::DbId;
use sqlx::PgPool;

use crate::models::catalogo::{Catalogo, ItemCatalogo, ItemCatalogoConConteo};

const COLUMNS: &str = "id, nombre, slug, descripcion, created_at, updated_at";

/// Provides CRUD operations for the reference tables.
pub struct CatalogoRepo;

impl CatalogoRepo {
    /// List every row alphabetically with its active job count.
    pub async fn list(
        pool: &PgPool,
        catalogo: Catalogo,
    ) -> Result<Vec<ItemCatalogoConConteo>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.nombre, c.slug, c.descripcion,
                    COUNT(t.id) AS trabajos_activos
             FROM {table} c
             LEFT JOIN trabajos t ON t.{fk} = c.id AND t.estado = $1
             GROUP BY c.id
             ORDER BY c.nombre",
            table = catalogo.table(),
            fk = catalogo.fk_column(),
        );
        sqlx::query_as::<_, ItemCatalogoConConteo>(&query)
            .bind(EstadoTrabajo::Activo.as_str())
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        catalogo: Catalogo,
        id: DbId,
    ) -> Result<Option<ItemCatalogo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", catalogo.table());
        sqlx::query_as::<_, ItemCatalogo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        catalogo: Catalogo,
        slug: &str,
    ) -> Result<Option<ItemCatalogo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE slug = $1", catalogo.table());
        sqlx::query_as::<_, ItemCatalogo>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, catalogo: Catalogo, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            catalogo.table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether `slug` is used by a row other than `exclude_id`.
    pub async fn slug_taken(
        pool: &PgPool,
        catalogo: Catalogo,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
            catalogo.table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(slug)
            .bind(exclude_id)
            .fetch_one(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        catalogo: Catalogo,
        nombre: &str,
        slug: &str,
        descripcion: Option<&str>,
    ) -> Result<ItemCatalogo, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (nombre, slug, descripcion)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}",
            catalogo.table()
        );
        sqlx::query_as::<_, ItemCatalogo>(&query)
            .bind(nombre)
            .bind(slug)
            .bind(descripcion)
            .fetch_one(pool)
            .await
    }

    /// Update a row. `None` arguments keep the current value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        catalogo: Catalogo,
        id: DbId,
        nombre: Option<&str>,
        slug: Option<&str>,
        descripcion: Option<&str>,
    ) -> Result<Option<ItemCatalogo>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET
                nombre = COALESCE($2, nombre),
                slug = COALESCE($3, slug),
                descripcion = COALESCE($4, descripcion)
             WHERE id = $1
             RETURNING {COLUMNS}",
            catalogo.table()
        );
        sqlx::query_as::<_, ItemCatalogo>(&query)
            .bind(id)
            .bind(nombre)
            .bind(slug)
            .bind(descripcion)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, catalogo: Catalogo, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", catalogo.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of jobs (any status) referencing the row.
    pub async fn count_trabajos(
        pool: &PgPool,
        catalogo: Catalogo,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM trabajos WHERE {} = $1",
            catalogo.fk_column()
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
