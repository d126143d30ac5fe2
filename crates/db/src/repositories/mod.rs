//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod catalogo_repo;
pub mod perfil_empleado_repo;
pub mod perfil_empleador_repo;
pub mod postulacion_repo;
pub mod trabajo_repo;
pub mod usuario_repo;

pub use catalogo_repo::CatalogoRepo;
pub use perfil_empleado_repo::PerfilEmpleadoRepo;
pub use perfil_empleador_repo::PerfilEmpleadorRepo;
pub use postulacion_repo::PostulacionRepo;
pub use trabajo_repo::TrabajoRepo;
pub use usuario_repo::UsuarioRepo;

/// Escape `LIKE` wildcards in user input and wrap it for a substring match.
pub(crate) fn contains_pattern(input: &str) -> String {
    let escaped = input
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
