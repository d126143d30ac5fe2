//! Handlers for the `/auth` resource (registration, login, identity).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bolsa_core::roles::Rol;
use bolsa_core::types::DbId;
use bolsa_db::models::usuario::UsuarioConPerfil;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::{self, ApiResponse};
use crate::services::auth::{AuthResponse, LoginRequest, RegistroRequest};
use crate::services::AuthService;
use crate::state::AppState;

/// Identity carried by a valid token.
#[derive(Debug, Serialize)]
pub struct IdentidadToken {
    pub id: DbId,
    pub email: String,
    pub rol: Rol,
}

/// POST /api/auth/registro
pub async fn registro(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegistroRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthResponse>>)> {
    let auth = AuthService::registrar(&state.pool, &state.config.jwt, input).await?;
    Ok(response::created("Usuario registrado exitosamente", auth))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let auth = AuthService::login(&state.pool, &state.config.jwt, input).await?;
    Ok(response::ok("Inicio de sesión exitoso", auth))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UsuarioConPerfil>>> {
    let usuario = AuthService::obtener_usuario(&state.pool, user.usuario_id).await?;
    Ok(response::ok("Usuario obtenido exitosamente", usuario))
}

/// GET /api/auth/verificar
///
/// Answers from the token alone; no database round trip.
pub async fn verificar(user: AuthUser) -> Json<ApiResponse<IdentidadToken>> {
    response::ok(
        "Token válido",
        IdentidadToken {
            id: user.usuario_id,
            email: user.email,
            rol: user.rol,
        },
    )
}
