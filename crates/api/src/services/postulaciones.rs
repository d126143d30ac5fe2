//! Job applications: applying, reviewing, withdrawing, and listings.

use bolsa_core::access::{
    can_view_application, check_can_apply, check_can_withdraw, require_job_owner, Actor,
};
use bolsa_core::error::CoreError;
use bolsa_core::estados::{EstadoPostulacion, EstadoTrabajo};
use bolsa_core::types::DbId;
use bolsa_db::models::postulacion::{
    ConteoPostulaciones, CreatePostulacion, Postulacion, PostulacionDetalle, PostulacionListParams,
};
use bolsa_db::repositories::{PerfilEmpleadoRepo, PostulacionRepo, TrabajoRepo};
use serde::Serialize;
use sqlx::PgPool;

use super::trabajos::perfil_empleador_id;
use super::{estado_opcional, non_blank};
use crate::error::{AppError, AppResult};

/// Whether the caller already applied to a job.
#[derive(Debug, Serialize)]
pub struct VerificacionPostulacion {
    pub postulado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postulacion: Option<Postulacion>,
}

pub struct PostulacionService;

impl PostulacionService {
    /// Apply to a job.
    ///
    /// Checks run in order: the job exists (404), accepts applications and is
    /// not the caller's own (400), the caller has an employee profile (403),
    /// and has not applied already (409).
    pub async fn crear(
        pool: &PgPool,
        actor: &Actor,
        input: CreatePostulacion,
    ) -> AppResult<Postulacion> {
        let trabajo = TrabajoRepo::find_propiedad(pool, input.trabajo_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Trabajo",
                id: input.trabajo_id,
            })?;
        let estado_trabajo = EstadoTrabajo::parse(&trabajo.estado)?;
        check_can_apply(actor, estado_trabajo, trabajo.empleador_usuario_id)?;

        let empleado = PerfilEmpleadoRepo::find_by_usuario_id(pool, actor.usuario_id)
            .await?
            .ok_or_else(|| {
                CoreError::Forbidden(
                    "Solo los usuarios con perfil de empleado pueden postularse".into(),
                )
            })?;

        if PostulacionRepo::find_by_trabajo_y_empleado(pool, trabajo.id, empleado.id)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("Ya te has postulado a este trabajo".into()).into());
        }

        let carta = non_blank(input.carta_presentacion);
        let postulacion =
            PostulacionRepo::create(pool, trabajo.id, empleado.id, carta.as_deref()).await?;

        tracing::info!(
            postulacion_id = postulacion.id,
            trabajo_id = trabajo.id,
            user_id = actor.usuario_id,
            "Application created",
        );

        Ok(postulacion)
    }

    /// Change the review status. Only the employer owning the job may do so.
    pub async fn actualizar_estado(
        pool: &PgPool,
        actor: &Actor,
        id: DbId,
        estado: EstadoPostulacion,
    ) -> AppResult<Postulacion> {
        let detalle = find_detalle(pool, id).await?;
        require_job_owner(actor, detalle.empleador_usuario_id, "gestionar postulaciones de")?;

        let postulacion = PostulacionRepo::update_estado(pool, id, estado, estado.marca_revision())
            .await?
            .ok_or_else(|| postulacion_not_found(id))?;

        tracing::info!(
            postulacion_id = id,
            estado = %estado,
            user_id = actor.usuario_id,
            "Application status updated",
        );

        Ok(postulacion)
    }

    /// Withdraw an application. Only the applicant may, and never once accepted.
    pub async fn eliminar(pool: &PgPool, actor: &Actor, id: DbId) -> AppResult<()> {
        let detalle = find_detalle(pool, id).await?;
        let estado = EstadoPostulacion::parse(&detalle.estado)?;
        check_can_withdraw(actor, detalle.empleado_usuario_id, estado)?;

        if !PostulacionRepo::delete(pool, id).await? {
            return Err(postulacion_not_found(id));
        }

        tracing::info!(postulacion_id = id, user_id = actor.usuario_id, "Application deleted");
        Ok(())
    }

    /// Visible to the applicant, the owning employer, and administrators.
    pub async fn obtener_por_id(
        pool: &PgPool,
        actor: &Actor,
        id: DbId,
    ) -> AppResult<PostulacionDetalle> {
        let detalle = find_detalle(pool, id).await?;
        if !can_view_application(actor, detalle.empleado_usuario_id, detalle.empleador_usuario_id)
        {
            return Err(CoreError::Forbidden(
                "No tienes permiso para ver esta postulación".into(),
            )
            .into());
        }
        Ok(detalle)
    }

    /// Applications sent by the calling employee.
    pub async fn obtener_mis_postulaciones(
        pool: &PgPool,
        usuario_id: DbId,
        estado: Option<&str>,
    ) -> AppResult<Vec<PostulacionDetalle>> {
        let estado = estado_opcional(estado, EstadoPostulacion::parse)?;
        let empleado_id = perfil_empleado_id(pool, usuario_id).await?;
        Ok(PostulacionRepo::list_by_empleado(pool, empleado_id, estado).await?)
    }

    /// Applications received on the calling employer's jobs.
    ///
    /// Filtering by a job the caller does not own is forbidden.
    pub async fn obtener_recibidas(
        pool: &PgPool,
        actor: &Actor,
        params: PostulacionListParams,
    ) -> AppResult<Vec<PostulacionDetalle>> {
        let estado = estado_opcional(params.estado.as_deref(), EstadoPostulacion::parse)?;
        let empleador_id = perfil_empleador_id(pool, actor.usuario_id).await?;

        if let Some(trabajo_id) = params.trabajo_id {
            let trabajo = TrabajoRepo::find_propiedad(pool, trabajo_id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Trabajo",
                    id: trabajo_id,
                })?;
            require_job_owner(actor, trabajo.empleador_usuario_id, "ver las postulaciones de")?;
        }

        Ok(PostulacionRepo::list_recibidas(pool, empleador_id, params.trabajo_id, estado).await?)
    }

    /// Received-application counters for the calling employer.
    pub async fn obtener_estadisticas(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> AppResult<ConteoPostulaciones> {
        let empleador_id = perfil_empleador_id(pool, usuario_id).await?;
        Ok(PostulacionRepo::count_by_estado(pool, empleador_id).await?)
    }

    /// Whether the calling employee already applied to `trabajo_id`.
    pub async fn verificar_postulacion(
        pool: &PgPool,
        usuario_id: DbId,
        trabajo_id: DbId,
    ) -> AppResult<VerificacionPostulacion> {
        let empleado_id = perfil_empleado_id(pool, usuario_id).await?;
        let postulacion =
            PostulacionRepo::find_by_trabajo_y_empleado(pool, trabajo_id, empleado_id).await?;
        Ok(VerificacionPostulacion {
            postulado: postulacion.is_some(),
            postulacion,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn postulacion_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Postulación",
        id,
    })
}

async fn find_detalle(pool: &PgPool, id: DbId) -> AppResult<PostulacionDetalle> {
    PostulacionRepo::find_detalle(pool, id)
        .await?
        .ok_or_else(|| postulacion_not_found(id))
}

async fn perfil_empleado_id(pool: &PgPool, usuario_id: DbId) -> AppResult<DbId> {
    PerfilEmpleadoRepo::find_by_usuario_id(pool, usuario_id)
        .await?
        .map(|p| p.id)
        .ok_or_else(|| {
            AppError::Core(CoreError::Missing(
                "Perfil de empleado no encontrado".into(),
            ))
        })
}
