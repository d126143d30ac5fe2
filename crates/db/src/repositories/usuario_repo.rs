//! Repository for the `usuarios` table.

use bolsa_core::types::DbId;
use sqlx::PgPool;

use crate::models::perfil::CreatePerfil;
use crate::models::usuario::{CreateUsuario, Usuario};
use crate::repositories::{PerfilEmpleadoRepo, PerfilEmpleadorRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, rol, created_at, updated_at";

/// Provides persistence operations for users.
pub struct UsuarioRepo;

impl UsuarioRepo {
    /// Insert a user together with its role profile in one transaction.
    ///
    /// Either both rows exist afterwards or neither does.
    pub async fn create_with_perfil(
        pool: &PgPool,
        input: &CreateUsuario,
        perfil: &CreatePerfil,
    ) -> Result<Usuario, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO usuarios (email, password_hash, rol)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let usuario = sqlx::query_as::<_, Usuario>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.rol)
            .fetch_one(&mut *tx)
            .await?;

        match perfil {
            CreatePerfil::Empleado(p) => {
                PerfilEmpleadoRepo::create_in_tx(&mut tx, usuario.id, p).await?;
            }
            CreatePerfil::Empleador(p) => {
                PerfilEmpleadorRepo::create_in_tx(&mut tx, usuario.id, p).await?;
            }
        }

        tx.commit().await?;
        Ok(usuario)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE id = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by normalized (lower-cased) email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Usuario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM usuarios WHERE email = $1");
        sqlx::query_as::<_, Usuario>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether an account already uses this normalized email.
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM usuarios WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE usuarios SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
