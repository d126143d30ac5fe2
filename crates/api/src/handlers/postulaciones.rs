//! Handlers for the `/postulaciones` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bolsa_core::types::DbId;
use bolsa_db::models::postulacion::{
    ConteoPostulaciones, CreatePostulacion, Postulacion, PostulacionDetalle, PostulacionListParams,
    UpdateEstadoPostulacion,
};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireEmpleado, RequireEmpleador};
use crate::response::{self, ApiResponse};
use crate::services::postulaciones::VerificacionPostulacion;
use crate::services::PostulacionService;
use crate::state::AppState;

/// POST /api/postulaciones
///
/// Open to any authenticated user; the service rejects employers applying
/// to their own jobs and callers without an employee profile.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreatePostulacion>,
) -> AppResult<(StatusCode, Json<ApiResponse<Postulacion>>)> {
    let postulacion = PostulacionService::crear(&state.pool, &user.actor(), input).await?;
    Ok(response::created("Postulación enviada exitosamente", postulacion))
}

/// GET /api/postulaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<PostulacionDetalle>>> {
    let postulacion = PostulacionService::obtener_por_id(&state.pool, &user.actor(), id).await?;
    Ok(response::ok("Postulación obtenida exitosamente", postulacion))
}

/// PATCH /api/postulaciones/{id}/estado
pub async fn update_estado(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateEstadoPostulacion>,
) -> AppResult<Json<ApiResponse<Postulacion>>> {
    let postulacion =
        PostulacionService::actualizar_estado(&state.pool, &user.actor(), id, input.estado)
            .await?;
    Ok(response::ok("Estado de la postulación actualizado", postulacion))
}

/// DELETE /api/postulaciones/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    PostulacionService::eliminar(&state.pool, &user.actor(), id).await?;
    Ok(response::message("Postulación eliminada exitosamente"))
}

/// GET /api/postulaciones/mis-postulaciones
pub async fn mis_postulaciones(
    State(state): State<AppState>,
    RequireEmpleado(user): RequireEmpleado,
    AppQuery(params): AppQuery<PostulacionListParams>,
) -> AppResult<Json<ApiResponse<Vec<PostulacionDetalle>>>> {
    let postulaciones = PostulacionService::obtener_mis_postulaciones(
        &state.pool,
        user.usuario_id,
        params.estado.as_deref(),
    )
    .await?;
    Ok(response::ok("Postulaciones obtenidas exitosamente", postulaciones))
}

/// GET /api/postulaciones/recibidas
pub async fn recibidas(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
    AppQuery(params): AppQuery<PostulacionListParams>,
) -> AppResult<Json<ApiResponse<Vec<PostulacionDetalle>>>> {
    let postulaciones =
        PostulacionService::obtener_recibidas(&state.pool, &user.actor(), params).await?;
    Ok(response::ok("Postulaciones recibidas obtenidas exitosamente", postulaciones))
}

/// GET /api/postulaciones/estadisticas
pub async fn estadisticas(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
) -> AppResult<Json<ApiResponse<ConteoPostulaciones>>> {
    let stats = PostulacionService::obtener_estadisticas(&state.pool, user.usuario_id).await?;
    Ok(response::ok("Estadísticas obtenidas exitosamente", stats))
}

/// GET /api/postulaciones/verificar/{trabajo_id}
pub async fn verificar(
    State(state): State<AppState>,
    RequireEmpleado(user): RequireEmpleado,
    AppPath(trabajo_id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<VerificacionPostulacion>>> {
    let verificacion =
        PostulacionService::verificar_postulacion(&state.pool, user.usuario_id, trabajo_id)
            .await?;
    Ok(response::ok("Verificación completada", verificacion))
}
