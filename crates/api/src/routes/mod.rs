pub mod auth;
pub mod catalogos;
pub mod health;
pub mod perfiles;
pub mod postulaciones;
pub mod trabajos;

use axum::Router;

use crate::handlers::catalogos::{Categorias, Departamentos, TiposTrabajo};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/registro                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user with profile
/// /auth/verificar                                  token identity
///
/// /trabajos                                        list (public), create (EMPLEADOR)
/// /trabajos/mis-publicaciones                      own jobs (EMPLEADOR)
/// /trabajos/estadisticas                           dashboard counters (EMPLEADOR)
/// /trabajos/sugerencias                            title suggestions (public)
/// /trabajos/{id}                                   get (public), update, delete (owner)
///
/// /postulaciones                                   apply (authenticated)
/// /postulaciones/mis-postulaciones                 own applications (EMPLEADO)
/// /postulaciones/recibidas                         received applications (EMPLEADOR)
/// /postulaciones/estadisticas                      counters (EMPLEADOR)
/// /postulaciones/verificar/{trabajo_id}            already applied? (EMPLEADO)
/// /postulaciones/{id}                              get, withdraw
/// /postulaciones/{id}/estado                       review (owning employer)
///
/// /perfil/empleado                                 get, update (EMPLEADO)
/// /perfil/empleador                                get, update (EMPLEADOR)
/// /perfil/contrasena                               change password
/// /perfil/publico/empleado/{id}                    public employee profile
/// /perfil/publico/empleador/{id}                   public employer profile
///
/// /categorias                                      list (public), create (ADMIN)
/// /categorias/slug/{slug}                          get by slug (public)
/// /categorias/{id}                                 get (public), update, delete (ADMIN)
/// /tipos-trabajo[...]                              same as /categorias
/// /departamentos[...]                              same as /categorias
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/trabajos", trabajos::router())
        .nest("/postulaciones", postulaciones::router())
        .nest("/perfil", perfiles::router())
        .nest("/categorias", catalogos::router::<Categorias>())
        .nest("/tipos-trabajo", catalogos::router::<TiposTrabajo>())
        .nest("/departamentos", catalogos::router::<Departamentos>())
}
