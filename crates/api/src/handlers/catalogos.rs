//! Handlers shared by `/categorias`, `/tipos-trabajo`, and `/departamentos`.
//!
//! The three resources behave identically, so each handler is generic over a
//! marker type naming the table. Routes instantiate them per resource, e.g.
//! `get(catalogos::list::<Categorias>)`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bolsa_core::types::DbId;
use bolsa_db::models::catalogo::{
    Catalogo, CreateItemCatalogo, ItemCatalogo, ItemCatalogoConConteo, UpdateItemCatalogo,
};

use crate::error::AppResult;
use crate::extract::{AppPath, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{self, ApiResponse};
use crate::services::CatalogoService;
use crate::state::AppState;

/// Binds a marker type to the lookup table its routes serve.
pub trait RecursoCatalogo: Send + Sync + 'static {
    const CATALOGO: Catalogo;
}

pub struct Categorias;
pub struct TiposTrabajo;
pub struct Departamentos;

impl RecursoCatalogo for Categorias {
    const CATALOGO: Catalogo = Catalogo::Categorias;
}

impl RecursoCatalogo for TiposTrabajo {
    const CATALOGO: Catalogo = Catalogo::TiposTrabajo;
}

impl RecursoCatalogo for Departamentos {
    const CATALOGO: Catalogo = Catalogo::Departamentos;
}

/// GET /api/{recurso}
pub async fn list<R: RecursoCatalogo>(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ItemCatalogoConConteo>>>> {
    let items = CatalogoService::listar(&state.pool, R::CATALOGO).await?;
    Ok(response::ok("Registros obtenidos exitosamente", items))
}

/// GET /api/{recurso}/{id}
pub async fn get_by_id<R: RecursoCatalogo>(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<ItemCatalogo>>> {
    let item = CatalogoService::obtener_por_id(&state.pool, R::CATALOGO, id).await?;
    Ok(response::ok("Registro obtenido exitosamente", item))
}

/// GET /api/{recurso}/slug/{slug}
pub async fn get_by_slug<R: RecursoCatalogo>(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<ApiResponse<ItemCatalogo>>> {
    let item = CatalogoService::obtener_por_slug(&state.pool, R::CATALOGO, &slug).await?;
    Ok(response::ok("Registro obtenido exitosamente", item))
}

/// POST /api/{recurso}
pub async fn create<R: RecursoCatalogo>(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateItemCatalogo>,
) -> AppResult<(StatusCode, Json<ApiResponse<ItemCatalogo>>)> {
    let item = CatalogoService::crear(&state.pool, R::CATALOGO, input).await?;
    Ok(response::created("Registro creado exitosamente", item))
}

/// PUT /api/{recurso}/{id}
pub async fn update<R: RecursoCatalogo>(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateItemCatalogo>,
) -> AppResult<Json<ApiResponse<ItemCatalogo>>> {
    let item = CatalogoService::actualizar(&state.pool, R::CATALOGO, id, input).await?;
    Ok(response::ok("Registro actualizado exitosamente", item))
}

/// DELETE /api/{recurso}/{id}
pub async fn delete<R: RecursoCatalogo>(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    CatalogoService::eliminar(&state.pool, R::CATALOGO, id).await?;
    Ok(response::message("Registro eliminado exitosamente"))
}
