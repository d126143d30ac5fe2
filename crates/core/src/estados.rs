//! Status enums for jobs and applications.
//!
//! Statuses are stored as upper-case `TEXT` guarded by a `CHECK` constraint,
//! so each enum maps one-to-one onto its database literal.

use crate::error::CoreError;

macro_rules! define_estado_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the database literal.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }

            /// Parse a database literal, rejecting unknown values with a
            /// validation error that lists the accepted ones.
            pub fn parse(value: &str) -> Result<Self, CoreError> {
                match value {
                    $( $val => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "{} inválido '{}'. Valores permitidos: {}",
                        $label,
                        other,
                        [$($val),+].join(", ")
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_estado_enum! {
    /// Job posting lifecycle. Owners may move between any two values.
    EstadoTrabajo, "Estado de trabajo" {
        Activo = "ACTIVO",
        Cerrado = "CERRADO",
        Borrador = "BORRADOR",
    }
}

define_estado_enum! {
    /// Application review status, set exclusively by the employer.
    EstadoPostulacion, "Estado de postulación" {
        Pendiente = "PENDIENTE",
        Revisada = "REVISADA",
        Aceptada = "ACEPTADA",
        Rechazada = "RECHAZADA",
    }
}

impl EstadoPostulacion {
    /// Whether moving into this status stamps `fecha_revision`.
    pub fn marca_revision(self) -> bool {
        self != EstadoPostulacion::Pendiente
    }
}

/// Sentinel accepted by the job listing to disable the status filter.
pub const ESTADO_TODOS: &str = "TODOS";

/// Resolve the `estado` filter of the public job listing.
///
/// Absent means `ACTIVO`; `TODOS` means no filter.
pub fn filtro_estado_trabajo(value: Option<&str>) -> Result<Option<EstadoTrabajo>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(Some(EstadoTrabajo::Activo)),
        Some(ESTADO_TODOS) => Ok(None),
        Some(other) => EstadoTrabajo::parse(other).map(Some),
    }
}
