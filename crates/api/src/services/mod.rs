//! Business rules, one service per resource.
//!
//! Services are zero-sized structs whose async functions take the pool (and
//! the caller, where it matters), apply ownership and state rules from
//! `bolsa_core`, and call the repositories. Handlers stay thin wrappers that
//! extract, delegate, and shape the response envelope.

pub mod auth;
pub mod catalogos;
pub mod perfiles;
pub mod postulaciones;
pub mod trabajos;

pub use auth::AuthService;
pub use catalogos::CatalogoService;
pub use perfiles::PerfilService;
pub use postulaciones::PostulacionService;
pub use trabajos::TrabajoService;

use bolsa_core::error::CoreError;
use bolsa_core::estados::ESTADO_TODOS;

/// Trim an optional string, treating blank input as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional `estado` query filter. Blank and `TODOS` mean no filter.
pub(crate) fn estado_opcional<E>(
    value: Option<&str>,
    parse: fn(&str) -> Result<E, CoreError>,
) -> Result<Option<E>, CoreError> {
    match value.map(str::trim) {
        None | Some("") | Some(ESTADO_TODOS) => Ok(None),
        Some(other) => parse(other).map(Some),
    }
}
