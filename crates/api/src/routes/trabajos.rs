//! Route definitions for the `/trabajos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::trabajos;
use crate::state::AppState;

/// Routes mounted at `/trabajos`.
///
/// Static segments take priority over `/{id}`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /mis-publicaciones      -> mis_publicaciones
/// GET    /estadisticas           -> estadisticas
/// GET    /sugerencias            -> sugerencias
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trabajos::list).post(trabajos::create))
        .route("/mis-publicaciones", get(trabajos::mis_publicaciones))
        .route("/estadisticas", get(trabajos::estadisticas))
        .route("/sugerencias", get(trabajos::sugerencias))
        .route(
            "/{id}",
            get(trabajos::get_by_id)
                .put(trabajos::update)
                .delete(trabajos::delete),
        )
}
