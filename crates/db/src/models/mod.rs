//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `FromRow` read models joining display names for API output
//! - `Deserialize` + `Validate` DTOs for request bodies (updates use `Option` fields)

pub mod catalogo;
pub mod perfil;
pub mod postulacion;
pub mod trabajo;
pub mod trim;
pub mod usuario;
