//! Reference tables (categories, job types, departments) and their DTOs.
//!
//! The three tables share one shape, so a single [`Catalogo`] selector picks
//! the table and the matching foreign-key column on `trabajos`.

use bolsa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Which lookup table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalogo {
    Categorias,
    TiposTrabajo,
    Departamentos,
}

impl Catalogo {
    pub fn table(self) -> &'static str {
        match self {
            Catalogo::Categorias => "categorias",
            Catalogo::TiposTrabajo => "tipos_trabajo",
            Catalogo::Departamentos => "departamentos",
        }
    }

    /// Column on `trabajos` referencing this table.
    pub fn fk_column(self) -> &'static str {
        match self {
            Catalogo::Categorias => "categoria_id",
            Catalogo::TiposTrabajo => "tipo_trabajo_id",
            Catalogo::Departamentos => "departamento_id",
        }
    }

    /// Singular display name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Catalogo::Categorias => "Categoría",
            Catalogo::TiposTrabajo => "Tipo de trabajo",
            Catalogo::Departamentos => "Departamento",
        }
    }
}

/// A row from any of the lookup tables.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCatalogo {
    pub id: DbId,
    pub nombre: String,
    pub slug: String,
    pub descripcion: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lookup row enriched with the number of active jobs referencing it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCatalogoConConteo {
    pub id: DbId,
    pub nombre: String,
    pub slug: String,
    pub descripcion: Option<String>,
    pub trabajos_activos: i64,
}

/// DTO for creating a lookup row. The slug is derived from `nombre` when omitted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemCatalogo {
    #[serde(deserialize_with = "super::trim::string")]
    #[validate(length(min = 2, max = 100, message = "debe tener entre 2 y 100 caracteres"))]
    pub nombre: String,
    pub slug: Option<String>,
    #[validate(length(max = 1000, message = "no puede superar 1000 caracteres"))]
    pub descripcion: Option<String>,
}

/// DTO for updating a lookup row. All fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemCatalogo {
    #[serde(default, deserialize_with = "super::trim::option")]
    #[validate(length(min = 2, max = 100, message = "debe tener entre 2 y 100 caracteres"))]
    pub nombre: Option<String>,
    pub slug: Option<String>,
    #[validate(length(max = 1000, message = "no puede superar 1000 caracteres"))]
    pub descripcion: Option<String>,
}
