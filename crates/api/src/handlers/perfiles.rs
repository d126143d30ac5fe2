//! Handlers for the `/perfil` resource (own profiles, password, public views).

use axum::extract::State;
use axum::Json;
use bolsa_core::types::DbId;
use bolsa_db::models::perfil::{
    PerfilEmpleado, PerfilEmpleadoPublico, PerfilEmpleador, PerfilEmpleadorPublico,
    UpdatePerfilEmpleado, UpdatePerfilEmpleador,
};

use crate::error::AppResult;
use crate::extract::{AppPath, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireEmpleado, RequireEmpleador};
use crate::response::{self, ApiResponse};
use crate::services::perfiles::CambiarContrasenaRequest;
use crate::services::PerfilService;
use crate::state::AppState;

/// GET /api/perfil/empleado
pub async fn get_empleado(
    State(state): State<AppState>,
    RequireEmpleado(user): RequireEmpleado,
) -> AppResult<Json<ApiResponse<PerfilEmpleado>>> {
    let perfil = PerfilService::obtener_empleado(&state.pool, user.usuario_id).await?;
    Ok(response::ok("Perfil obtenido exitosamente", perfil))
}

/// PUT /api/perfil/empleado
pub async fn update_empleado(
    State(state): State<AppState>,
    RequireEmpleado(user): RequireEmpleado,
    ValidatedJson(input): ValidatedJson<UpdatePerfilEmpleado>,
) -> AppResult<Json<ApiResponse<PerfilEmpleado>>> {
    let perfil = PerfilService::actualizar_empleado(&state.pool, user.usuario_id, input).await?;
    Ok(response::ok("Perfil actualizado exitosamente", perfil))
}

/// GET /api/perfil/empleador
pub async fn get_empleador(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
) -> AppResult<Json<ApiResponse<PerfilEmpleador>>> {
    let perfil = PerfilService::obtener_empleador(&state.pool, user.usuario_id).await?;
    Ok(response::ok("Perfil obtenido exitosamente", perfil))
}

/// PUT /api/perfil/empleador
pub async fn update_empleador(
    State(state): State<AppState>,
    RequireEmpleador(user): RequireEmpleador,
    ValidatedJson(input): ValidatedJson<UpdatePerfilEmpleador>,
) -> AppResult<Json<ApiResponse<PerfilEmpleador>>> {
    let perfil = PerfilService::actualizar_empleador(&state.pool, user.usuario_id, input).await?;
    Ok(response::ok("Perfil actualizado exitosamente", perfil))
}

/// PUT /api/perfil/contrasena
pub async fn cambiar_contrasena(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<CambiarContrasenaRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    PerfilService::cambiar_contrasena(&state.pool, user.usuario_id, input).await?;
    Ok(response::message("Contraseña actualizada exitosamente"))
}

/// GET /api/perfil/publico/empleado/{id}
pub async fn publico_empleado(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<PerfilEmpleadoPublico>>> {
    let perfil = PerfilService::obtener_publico_empleado(&state.pool, id).await?;
    Ok(response::ok("Perfil obtenido exitosamente", perfil))
}

/// GET /api/perfil/publico/empleador/{id}
pub async fn publico_empleador(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<PerfilEmpleadorPublico>>> {
    let perfil = PerfilService::obtener_publico_empleador(&state.pool, id).await?;
    Ok(response::ok("Perfil obtenido exitosamente", perfil))
}
