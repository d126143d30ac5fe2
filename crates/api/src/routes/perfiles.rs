//! Route definitions for the `/perfil` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::perfiles;
use crate::state::AppState;

/// Routes mounted at `/perfil`.
///
/// ```text
/// GET    /empleado                    -> get_empleado
/// PUT    /empleado                    -> update_empleado
/// GET    /empleador                   -> get_empleador
/// PUT    /empleador                   -> update_empleador
/// PUT    /contrasena                  -> cambiar_contrasena
/// GET    /publico/empleado/{id}       -> publico_empleado
/// GET    /publico/empleador/{id}      -> publico_empleador
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/empleado",
            get(perfiles::get_empleado).put(perfiles::update_empleado),
        )
        .route(
            "/empleador",
            get(perfiles::get_empleador).put(perfiles::update_empleador),
        )
        .route("/contrasena", put(perfiles::cambiar_contrasena))
        .route("/publico/empleado/{id}", get(perfiles::publico_empleado))
        .route("/publico/empleador/{id}", get(perfiles::publico_empleador))
}
