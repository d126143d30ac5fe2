//! Well-known role names.
//!
//! These must match the `CHECK` constraint on `usuarios.rol` in
//! `20250301000001_create_usuarios.sql`.

use crate::error::CoreError;

pub const ROLE_EMPLEADO: &str = "EMPLEADO";
pub const ROLE_EMPLEADOR: &str = "EMPLEADOR";
pub const ROLE_ADMIN: &str = "ADMIN";

/// Role carried by every user and embedded in the token payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rol {
    Empleado,
    Empleador,
    Admin,
}

impl Rol {
    pub fn as_str(self) -> &'static str {
        match self {
            Rol::Empleado => ROLE_EMPLEADO,
            Rol::Empleador => ROLE_EMPLEADOR,
            Rol::Admin => ROLE_ADMIN,
        }
    }

    /// Parse a role string as stored in the database or a token.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            ROLE_EMPLEADO => Some(Rol::Empleado),
            ROLE_EMPLEADOR => Some(Rol::Empleador),
            ROLE_ADMIN => Some(Rol::Admin),
            _ => None,
        }
    }

    /// Parse the role requested at registration. Administrators are never
    /// created through the public endpoint.
    pub fn parse_registrable(value: &str) -> Result<Self, CoreError> {
        match Self::parse(value) {
            Some(rol @ (Rol::Empleado | Rol::Empleador)) => Ok(rol),
            _ => Err(CoreError::Validation(format!(
                "Rol inválido '{value}'. Valores permitidos: {ROLE_EMPLEADO}, {ROLE_EMPLEADOR}"
            ))),
        }
    }
}

impl std::fmt::Display for Rol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parse_known_roles() {
        assert_eq!(Rol::parse("EMPLEADO"), Some(Rol::Empleado));
        assert_eq!(Rol::parse("EMPLEADOR"), Some(Rol::Empleador));
        assert_eq!(Rol::parse("ADMIN"), Some(Rol::Admin));
        assert_eq!(Rol::parse("empleado"), None);
    }

    #[test]
    fn admin_cannot_self_register() {
        assert_matches!(Rol::parse_registrable("ADMIN"), Err(CoreError::Validation(_)));
        assert_matches!(Rol::parse_registrable("JEFE"), Err(CoreError::Validation(_)));
        assert_eq!(Rol::parse_registrable("EMPLEADOR").unwrap(), Rol::Empleador);
    }

    #[test]
    fn serializes_as_uppercase() {
        let json = serde_json::to_string(&Rol::Empleador).unwrap();
        assert_eq!(json, "\"EMPLEADOR\"");
    }
}
