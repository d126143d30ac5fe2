//! Route definitions shared by the three lookup resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalogos::{self, RecursoCatalogo};
use crate::state::AppState;

/// Routes mounted at `/categorias`, `/tipos-trabajo`, or `/departamentos`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create (ADMIN)
/// GET    /slug/{slug}       -> get_by_slug
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update (ADMIN)
/// DELETE /{id}              -> delete (ADMIN)
/// ```
pub fn router<R: RecursoCatalogo>() -> Router<AppState> {
    Router::new()
        .route("/", get(catalogos::list::<R>).post(catalogos::create::<R>))
        .route("/slug/{slug}", get(catalogos::get_by_slug::<R>))
        .route(
            "/{id}",
            get(catalogos::get_by_id::<R>)
                .put(catalogos::update::<R>)
                .delete(catalogos::delete::<R>),
        )
}
