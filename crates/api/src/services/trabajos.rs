//! Job postings: public listing and search, employer CRUD, employer dashboard.

use bolsa_core::access::{require_job_owner, Actor};
use bolsa_core::error::CoreError;
use bolsa_core::estados::{filtro_estado_trabajo, EstadoTrabajo};
use bolsa_core::geo::validate_coordinates;
use bolsa_core::pagination::{Pagina, Paginacion};
use bolsa_core::types::DbId;
use bolsa_db::models::catalogo::Catalogo;
use bolsa_db::models::postulacion::ConteoPostulaciones;
use bolsa_db::models::trabajo::{
    ConteoTrabajos, CreateTrabajo, TrabajoDetalle, TrabajoFiltro, TrabajoListParams,
    TrabajoPropiedad, UpdateTrabajo,
};
use bolsa_db::repositories::{CatalogoRepo, PerfilEmpleadorRepo, PostulacionRepo, TrabajoRepo};
use serde::Serialize;
use sqlx::PgPool;

use super::{estado_opcional, non_blank};
use crate::error::{AppError, AppResult};

/// Maximum number of title suggestions returned.
pub const MAX_SUGERENCIAS: i64 = 10;

/// Minimum query length, in characters, before suggestions are searched.
pub const MIN_SUGERENCIA_CHARS: usize = 2;

/// One page of the public job listing.
#[derive(Debug, Serialize)]
pub struct ListaTrabajos {
    pub trabajos: Vec<TrabajoDetalle>,
    pub paginacion: Paginacion,
}

/// Employer dashboard counters.
#[derive(Debug, Serialize)]
pub struct EstadisticasEmpleador {
    pub trabajos: ConteoTrabajos,
    pub postulaciones: ConteoPostulaciones,
}

pub struct TrabajoService;

impl TrabajoService {
    /// Public listing with filters and pagination. Defaults to `ACTIVO` jobs.
    pub async fn listar(pool: &PgPool, params: TrabajoListParams) -> AppResult<ListaTrabajos> {
        let filtro = TrabajoFiltro {
            categoria_id: params.categoria_id,
            tipo_trabajo_id: params.tipo_trabajo_id,
            departamento_id: params.departamento_id,
            empleador_id: params.empleador_id,
            ubicacion: non_blank(params.ubicacion),
            busqueda: non_blank(params.busqueda),
            estado: filtro_estado_trabajo(params.estado.as_deref())?,
        };
        let pagina = Pagina::new(params.pagina, params.limite);

        let trabajos = TrabajoRepo::list(pool, &filtro, pagina.limite, pagina.offset()).await?;
        let total = TrabajoRepo::count(pool, &filtro).await?;

        Ok(ListaTrabajos {
            trabajos,
            paginacion: pagina.paginacion(total),
        })
    }

    pub async fn obtener_por_id(pool: &PgPool, id: DbId) -> AppResult<TrabajoDetalle> {
        TrabajoRepo::find_detalle(pool, id)
            .await?
            .ok_or_else(|| trabajo_not_found(id))
    }

    /// Publish a job for the employer profile owned by `usuario_id`.
    pub async fn crear(
        pool: &PgPool,
        usuario_id: DbId,
        input: CreateTrabajo,
    ) -> AppResult<TrabajoDetalle> {
        let empleador_id = perfil_empleador_id(pool, usuario_id).await?;
        validate_coordinates(input.latitud, input.longitud)?;
        ensure_referencias(
            pool,
            Some(input.categoria_id),
            Some(input.tipo_trabajo_id),
            Some(input.departamento_id),
        )
        .await?;

        let estado = input.estado.unwrap_or(EstadoTrabajo::Activo);
        let trabajo = TrabajoRepo::create(pool, empleador_id, &input, estado).await?;

        tracing::info!(
            trabajo_id = trabajo.id,
            empleador_id,
            user_id = usuario_id,
            estado = %estado,
            "Job created",
        );

        Self::obtener_por_id(pool, trabajo.id).await
    }

    /// Update a job. Only its owner may do so.
    pub async fn actualizar(
        pool: &PgPool,
        actor: &Actor,
        id: DbId,
        input: UpdateTrabajo,
    ) -> AppResult<TrabajoDetalle> {
        let propiedad = find_propiedad(pool, id).await?;
        require_job_owner(actor, propiedad.empleador_usuario_id, "editar")?;

        if input.latitud.is_some() || input.longitud.is_some() {
            let actual = TrabajoRepo::find_by_id(pool, id)
                .await?
                .ok_or_else(|| trabajo_not_found(id))?;
            validate_coordinates(
                input.latitud.or(actual.latitud),
                input.longitud.or(actual.longitud),
            )?;
        }
        ensure_referencias(
            pool,
            input.categoria_id,
            input.tipo_trabajo_id,
            input.departamento_id,
        )
        .await?;

        TrabajoRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| trabajo_not_found(id))?;

        tracing::info!(trabajo_id = id, user_id = actor.usuario_id, "Job updated");

        Self::obtener_por_id(pool, id).await
    }

    /// Delete a job and, by cascade, its applications. Only its owner may do so.
    pub async fn eliminar(pool: &PgPool, actor: &Actor, id: DbId) -> AppResult<()> {
        let propiedad = find_propiedad(pool, id).await?;
        require_job_owner(actor, propiedad.empleador_usuario_id, "eliminar")?;

        if !TrabajoRepo::delete(pool, id).await? {
            return Err(trabajo_not_found(id));
        }

        tracing::info!(trabajo_id = id, user_id = actor.usuario_id, "Job deleted");
        Ok(())
    }

    /// Every job of the calling employer, any status unless `estado` is given.
    pub async fn obtener_mis_publicaciones(
        pool: &PgPool,
        usuario_id: DbId,
        estado: Option<&str>,
    ) -> AppResult<Vec<TrabajoDetalle>> {
        let estado = estado_opcional(estado, EstadoTrabajo::parse)?;
        let empleador_id = perfil_empleador_id(pool, usuario_id).await?;
        Ok(TrabajoRepo::list_by_empleador(pool, empleador_id, estado).await?)
    }

    /// Job and received-application counters for the calling employer.
    pub async fn obtener_estadisticas(
        pool: &PgPool,
        usuario_id: DbId,
    ) -> AppResult<EstadisticasEmpleador> {
        let empleador_id = perfil_empleador_id(pool, usuario_id).await?;
        Ok(EstadisticasEmpleador {
            trabajos: TrabajoRepo::count_by_estado(pool, empleador_id).await?,
            postulaciones: PostulacionRepo::count_by_estado(pool, empleador_id).await?,
        })
    }

    /// Distinct active titles containing `q`. Short queries return nothing.
    pub async fn buscar_sugerencias(pool: &PgPool, q: Option<String>) -> AppResult<Vec<String>> {
        let Some(q) = non_blank(q) else {
            return Ok(Vec::new());
        };
        if q.chars().count() < MIN_SUGERENCIA_CHARS {
            return Ok(Vec::new());
        }
        Ok(TrabajoRepo::suggest_titles(pool, &q, MAX_SUGERENCIAS).await?)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn trabajo_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Trabajo",
        id,
    })
}

async fn find_propiedad(pool: &PgPool, id: DbId) -> AppResult<TrabajoPropiedad> {
    TrabajoRepo::find_propiedad(pool, id)
        .await?
        .ok_or_else(|| trabajo_not_found(id))
}

/// Resolve the employer profile id of a user.
pub(crate) async fn perfil_empleador_id(pool: &PgPool, usuario_id: DbId) -> AppResult<DbId> {
    PerfilEmpleadorRepo::find_by_usuario_id(pool, usuario_id)
        .await?
        .map(|p| p.id)
        .ok_or_else(|| {
            AppError::Core(CoreError::Missing(
                "Perfil de empleador no encontrado".into(),
            ))
        })
}

/// Each referenced lookup row that is given must exist.
async fn ensure_referencias(
    pool: &PgPool,
    categoria_id: Option<DbId>,
    tipo_trabajo_id: Option<DbId>,
    departamento_id: Option<DbId>,
) -> AppResult<()> {
    let referencias = [
        (Catalogo::Categorias, categoria_id),
        (Catalogo::TiposTrabajo, tipo_trabajo_id),
        (Catalogo::Departamentos, departamento_id),
    ];
    for (catalogo, id) in referencias {
        let Some(id) = id else { continue };
        if !CatalogoRepo::exists(pool, catalogo, id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: catalogo.entity(),
                id,
            }));
        }
    }
    Ok(())
}
