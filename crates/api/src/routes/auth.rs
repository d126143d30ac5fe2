//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /registro       -> registro
/// POST   /login          -> login
/// GET    /me             -> me
/// GET    /verificar      -> verificar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registro", post(auth::registro))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
        .route("/verificar", get(auth::verificar))
}
