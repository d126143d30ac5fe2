//! Route definitions for the `/postulaciones` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::postulaciones;
use crate::state::AppState;

/// Routes mounted at `/postulaciones`.
///
/// ```text
/// POST   /                            -> create
/// GET    /mis-postulaciones           -> mis_postulaciones
/// GET    /recibidas                   -> recibidas
/// GET    /estadisticas                -> estadisticas
/// GET    /verificar/{trabajo_id}      -> verificar
/// GET    /{id}                        -> get_by_id
/// DELETE /{id}                        -> delete
/// PATCH  /{id}/estado                 -> update_estado
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(postulaciones::create))
        .route("/mis-postulaciones", get(postulaciones::mis_postulaciones))
        .route("/recibidas", get(postulaciones::recibidas))
        .route("/estadisticas", get(postulaciones::estadisticas))
        .route("/verificar/{trabajo_id}", get(postulaciones::verificar))
        .route(
            "/{id}",
            get(postulaciones::get_by_id).delete(postulaciones::delete),
        )
        .route("/{id}/estado", patch(postulaciones::update_estado))
}
