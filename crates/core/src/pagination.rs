//! Page-based pagination helpers.
//!
//! The public listing speaks in `pagina` (1-based) and `limite`; the
//! repositories speak in `LIMIT`/`OFFSET`.

use serde::Serialize;

/// Default page size for job listings.
pub const DEFAULT_LIMITE: i64 = 10;

/// Maximum page size for job listings.
pub const MAX_LIMITE: i64 = 50;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagina {
    pub pagina: i64,
    pub limite: i64,
}

impl Pagina {
    pub fn new(pagina: Option<i64>, limite: Option<i64>) -> Self {
        Self {
            pagina: pagina.unwrap_or(1).max(1),
            limite: clamp_limit(limite, DEFAULT_LIMITE, MAX_LIMITE),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.pagina - 1).saturating_mul(self.limite)
    }

    /// Build the metadata block returned next to a page of rows.
    pub fn paginacion(&self, total: i64) -> Paginacion {
        Paginacion {
            total,
            pagina: self.pagina,
            limite: self.limite,
            total_paginas: (total + self.limite - 1) / self.limite,
        }
    }
}

/// Pagination metadata serialized in list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginacion {
    pub total: i64,
    pub pagina: i64,
    pub limite: i64,
    pub total_paginas: i64,
}
