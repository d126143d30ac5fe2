//! Ownership and visibility rules shared by the job and application services.
//!
//! Every function here is pure: callers load the relevant rows first and pass
//! the owning user ids in, so the rules can be unit-tested without a database.

use crate::error::CoreError;
use crate::estados::{EstadoPostulacion, EstadoTrabajo};
use crate::roles::Rol;
use crate::types::DbId;

/// The authenticated caller, as seen by the business rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub usuario_id: DbId,
    pub rol: Rol,
}

impl Actor {
    pub fn new(usuario_id: DbId, rol: Rol) -> Self {
        Self { usuario_id, rol }
    }

    pub fn is_admin(&self) -> bool {
        self.rol == Rol::Admin
    }
}

/// Reject callers whose role differs from `required`.
pub fn require_rol(actor: &Actor, required: Rol) -> Result<(), CoreError> {
    if actor.rol != required {
        return Err(CoreError::Forbidden(format!(
            "Acceso denegado. Se requiere el rol {required}"
        )));
    }
    Ok(())
}

/// Only the employer that published a job may modify it or act on its
/// applications.
pub fn require_job_owner(
    actor: &Actor,
    empleador_usuario_id: DbId,
    action: &str,
) -> Result<(), CoreError> {
    if actor.usuario_id != empleador_usuario_id {
        return Err(CoreError::Forbidden(format!(
            "No tienes permiso para {action} este trabajo"
        )));
    }
    Ok(())
}

/// A job accepts applications only while `ACTIVO`, and never from the
/// employer that published it.
pub fn check_can_apply(
    actor: &Actor,
    estado_trabajo: EstadoTrabajo,
    empleador_usuario_id: DbId,
) -> Result<(), CoreError> {
    if estado_trabajo != EstadoTrabajo::Activo {
        return Err(CoreError::Validation(
            "Este trabajo no está aceptando postulaciones".into(),
        ));
    }
    if actor.usuario_id == empleador_usuario_id {
        return Err(CoreError::Validation(
            "No puedes postularte a tu propio trabajo".into(),
        ));
    }
    Ok(())
}

/// An application is visible to the applicant, the employer owning the job,
/// and administrators.
pub fn can_view_application(
    actor: &Actor,
    empleado_usuario_id: DbId,
    empleador_usuario_id: DbId,
) -> bool {
    actor.is_admin()
        || actor.usuario_id == empleado_usuario_id
        || actor.usuario_id == empleador_usuario_id
}

/// Only the applicant may withdraw an application, and never once accepted.
pub fn check_can_withdraw(
    actor: &Actor,
    empleado_usuario_id: DbId,
    estado: EstadoPostulacion,
) -> Result<(), CoreError> {
    if actor.usuario_id != empleado_usuario_id {
        return Err(CoreError::Forbidden(
            "No tienes permiso para eliminar esta postulación".into(),
        ));
    }
    if estado == EstadoPostulacion::Aceptada {
        return Err(CoreError::Validation(
            "No se puede eliminar una postulación que ya fue aceptada".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const EMPLOYEE: Actor = Actor {
        usuario_id: 10,
        rol: Rol::Empleado,
    };
    const EMPLOYER: Actor = Actor {
        usuario_id: 20,
        rol: Rol::Empleador,
    };
    const ADMIN: Actor = Actor {
        usuario_id: 99,
        rol: Rol::Admin,
    };

    #[test]
    fn require_rol_rejects_other_roles() {
        assert!(require_rol(&EMPLOYER, Rol::Empleador).is_ok());
        assert!(require_rol(&ADMIN, Rol::Admin).is_ok());
        assert_matches!(
            require_rol(&EMPLOYEE, Rol::Empleador),
            Err(CoreError::Forbidden(msg)) if msg.contains("EMPLEADOR")
        );
    }

    #[test]
    fn only_owner_passes_job_check() {
        assert!(require_job_owner(&EMPLOYER, 20, "editar").is_ok());
        assert_matches!(
            require_job_owner(&EMPLOYER, 21, "editar"),
            Err(CoreError::Forbidden(_))
        );
        // Administrators get no implicit ownership of jobs.
        assert_matches!(
            require_job_owner(&ADMIN, 20, "editar"),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn cannot_apply_to_inactive_job() {
        assert_matches!(
            check_can_apply(&EMPLOYEE, EstadoTrabajo::Cerrado, 20),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            check_can_apply(&EMPLOYEE, EstadoTrabajo::Borrador, 20),
            Err(CoreError::Validation(_))
        );
        assert!(check_can_apply(&EMPLOYEE, EstadoTrabajo::Activo, 20).is_ok());
    }

    #[test]
    fn cannot_apply_to_own_job() {
        assert_matches!(
            check_can_apply(&EMPLOYER, EstadoTrabajo::Activo, 20),
            Err(CoreError::Validation(msg)) if msg.contains("propio")
        );
    }

    #[test]
    fn application_visibility() {
        assert!(can_view_application(&EMPLOYEE, 10, 20));
        assert!(can_view_application(&EMPLOYER, 10, 20));
        assert!(can_view_application(&ADMIN, 10, 20));
        let stranger = Actor::new(30, Rol::Empleador);
        assert!(!can_view_application(&stranger, 10, 20));
    }

    #[test]
    fn withdraw_rules() {
        assert!(check_can_withdraw(&EMPLOYEE, 10, EstadoPostulacion::Pendiente).is_ok());
        assert!(check_can_withdraw(&EMPLOYEE, 10, EstadoPostulacion::Rechazada).is_ok());
        assert_matches!(
            check_can_withdraw(&EMPLOYEE, 10, EstadoPostulacion::Aceptada),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            check_can_withdraw(&EMPLOYER, 10, EstadoPostulacion::Pendiente),
            Err(CoreError::Forbidden(_))
        );
    }
}
