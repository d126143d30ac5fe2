//! Reference data shared by categories, job types, and departments.

use bolsa_core::error::CoreError;
use bolsa_core::slug::resolve_slug;
use bolsa_core::types::DbId;
use bolsa_db::models::catalogo::{
    Catalogo, CreateItemCatalogo, ItemCatalogo, ItemCatalogoConConteo, UpdateItemCatalogo,
};
use bolsa_db::repositories::CatalogoRepo;
use sqlx::PgPool;

use super::non_blank;
use crate::error::{AppError, AppResult};

pub struct CatalogoService;

impl CatalogoService {
    pub async fn listar(
        pool: &PgPool,
        catalogo: Catalogo,
    ) -> AppResult<Vec<ItemCatalogoConConteo>> {
        Ok(CatalogoRepo::list(pool, catalogo).await?)
    }

    pub async fn obtener_por_id(
        pool: &PgPool,
        catalogo: Catalogo,
        id: DbId,
    ) -> AppResult<ItemCatalogo> {
        CatalogoRepo::find_by_id(pool, catalogo, id)
            .await?
            .ok_or_else(|| not_found(catalogo, id))
    }

    pub async fn obtener_por_slug(
        pool: &PgPool,
        catalogo: Catalogo,
        slug: &str,
    ) -> AppResult<ItemCatalogo> {
        CatalogoRepo::find_by_slug(pool, catalogo, slug)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Missing(format!(
                    "No se encontró {} con slug '{slug}'",
                    catalogo.entity()
                )))
            })
    }

    /// Create a row. The slug is derived from the name when not given.
    pub async fn crear(
        pool: &PgPool,
        catalogo: Catalogo,
        input: CreateItemCatalogo,
    ) -> AppResult<ItemCatalogo> {
        let nombre = input.nombre;
        let slug = resolve_slug(input.slug.as_deref(), &nombre)?;
        ensure_slug_free(pool, catalogo, &slug, None).await?;

        let descripcion = non_blank(input.descripcion);
        let item = CatalogoRepo::create(pool, catalogo, &nombre, &slug, descripcion.as_deref())
            .await?;

        tracing::info!(table = catalogo.table(), id = item.id, slug = %item.slug, "Lookup row created");
        Ok(item)
    }

    /// Update a row. The slug only changes when one is given explicitly.
    pub async fn actualizar(
        pool: &PgPool,
        catalogo: Catalogo,
        id: DbId,
        input: UpdateItemCatalogo,
    ) -> AppResult<ItemCatalogo> {
        let actual = Self::obtener_por_id(pool, catalogo, id).await?;

        let nombre = non_blank(input.nombre);
        let slug = match non_blank(input.slug) {
            Some(explicit) => {
                let slug = resolve_slug(Some(&explicit), nombre.as_deref().unwrap_or(&actual.nombre))?;
                ensure_slug_free(pool, catalogo, &slug, Some(id)).await?;
                Some(slug)
            }
            None => None,
        };
        let descripcion = non_blank(input.descripcion);

        let item = CatalogoRepo::update(
            pool,
            catalogo,
            id,
            nombre.as_deref(),
            slug.as_deref(),
            descripcion.as_deref(),
        )
        .await?
        .ok_or_else(|| not_found(catalogo, id))?;

        tracing::info!(table = catalogo.table(), id, "Lookup row updated");
        Ok(item)
    }

    /// Delete a row unless jobs still reference it.
    pub async fn eliminar(pool: &PgPool, catalogo: Catalogo, id: DbId) -> AppResult<()> {
        let actual = Self::obtener_por_id(pool, catalogo, id).await?;

        let asociados = CatalogoRepo::count_trabajos(pool, catalogo, id).await?;
        if asociados > 0 {
            return Err(CoreError::Validation(format!(
                "No se puede eliminar {} '{}' porque tiene {asociados} trabajo(s) asociado(s)",
                catalogo.entity(),
                actual.nombre
            ))
            .into());
        }

        if !CatalogoRepo::delete(pool, catalogo, id).await? {
            return Err(not_found(catalogo, id));
        }

        tracing::info!(table = catalogo.table(), id, "Lookup row deleted");
        Ok(())
    }
}

fn not_found(catalogo: Catalogo, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: catalogo.entity(),
        id,
    })
}

async fn ensure_slug_free(
    pool: &PgPool,
    catalogo: Catalogo,
    slug: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if CatalogoRepo::slug_taken(pool, catalogo, slug, exclude_id).await? {
        return Err(CoreError::Conflict(format!(
            "Ya existe {} con el slug '{slug}'",
            catalogo.entity()
        ))
        .into());
    }
    Ok(())
}
