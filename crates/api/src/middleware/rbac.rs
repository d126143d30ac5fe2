//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! match. Use these in route handlers to enforce authorization at the type
//! level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bolsa_core::access;
use bolsa_core::roles::Rol;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn require_rol(parts: &mut Parts, state: &AppState, rol: Rol) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    access::require_rol(&user.actor(), rol)?;
    Ok(user)
}

/// Requires the `ADMIN` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_rol(parts, state, Rol::Admin).await.map(RequireAdmin)
    }
}

/// Requires the `EMPLEADOR` role. Rejects with 403 Forbidden otherwise.
pub struct RequireEmpleador(pub AuthUser);

impl FromRequestParts<AppState> for RequireEmpleador {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_rol(parts, state, Rol::Empleador)
            .await
            .map(RequireEmpleador)
    }
}

/// Requires the `EMPLEADO` role. Rejects with 403 Forbidden otherwise.
pub struct RequireEmpleado(pub AuthUser);

impl FromRequestParts<AppState> for RequireEmpleado {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_rol(parts, state, Rol::Empleado)
            .await
            .map(RequireEmpleado)
    }
}
