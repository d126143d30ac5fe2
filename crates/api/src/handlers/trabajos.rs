//! Handlers for the `/trabajos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bolsa_core::types::DbId;
use bolsa_db::models::trabajo::{
    CreateTrabajo, MisPublicacionesParams, SugerenciasParams, TrabajoDetalle, TrabajoListParams,
    UpdateTrabajo,
};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::middleware::rbac::RequireEmpleador;
use crate::response::{self, ApiResponse};
use crate::services::trabajos::{EstadisticasEmpleador, ListaTrabajos};
use crate::services::TrabajoService;
use crate::state::AppState;

/// GET /api/trabajos
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TrabajoListParams>,
) -> AppResult<Json<ApiResponse<ListaTrabajos>>> {
    let lista = TrabajoService::listar(&state.pool, params).await?;
    Ok(response::ok("Trabajos obtenidos exitosamente", lista))
}

/// GET /api/trabajos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<TrabajoDetalle>>> {
    let trabajo = TrabajoService::obtener_por_id(&state.pool, id).await?;
    Ok(response::ok("Trabajo obtenido exitosamente", trabajo))
}

/// POST /api/trabajos
pub async fn create(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
    ValidatedJson(input): ValidatedJson<CreateTrabajo>,
) -> AppResult<(StatusCode, Json<ApiResponse<TrabajoDetalle>>)> {
    let trabajo = TrabajoService::crear(&state.pool, user.usuario_id, input).await?;
    Ok(response::created("Trabajo creado exitosamente", trabajo))
}

/// PUT /api/trabajos/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
    AppPath(id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTrabajo>,
) -> AppResult<Json<ApiResponse<TrabajoDetalle>>> {
    let trabajo = TrabajoService::actualizar(&state.pool, &user.actor(), id, input).await?;
    Ok(response::ok("Trabajo actualizado exitosamente", trabajo))
}

/// DELETE /api/trabajos/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    TrabajoService::eliminar(&state.pool, &user.actor(), id).await?;
    Ok(response::message("Trabajo eliminado exitosamente"))
}

/// GET /api/trabajos/mis-publicaciones
pub async fn mis_publicaciones(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
    AppQuery(params): AppQuery<MisPublicacionesParams>,
) -> AppResult<Json<ApiResponse<Vec<TrabajoDetalle>>>> {
    let trabajos = TrabajoService::obtener_mis_publicaciones(
        &state.pool,
        user.usuario_id,
        params.estado.as_deref(),
    )
    .await?;
    Ok(response::ok("Publicaciones obtenidas exitosamente", trabajos))
}

/// GET /api/trabajos/estadisticas
pub async fn estadisticas(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
) -> AppResult<Json<ApiResponse<EstadisticasEmpleador>>> {
    let stats = TrabajoService::obtener_estadisticas(&state.pool, user.usuario_id).await?;
    Ok(response::ok("Estadísticas obtenidas exitosamente", stats))
}

/// GET /api/trabajos/sugerencias?q=
pub async fn sugerencias(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SugerenciasParams>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let titulos = TrabajoService::buscar_sugerencias(&state.pool, params.q).await?;
    Ok(response::ok("Sugerencias obtenidas exitosamente", titulos))
}
