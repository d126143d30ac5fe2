//! Registration, login, and identity lookup.

use bolsa_core::error::CoreError;
use bolsa_core::roles::Rol;
use bolsa_core::types::DbId;
use bolsa_db::models::perfil::{CreatePerfil, CreatePerfilEmpleado, CreatePerfilEmpleador};
use bolsa_db::models::usuario::{normalize_email, CreateUsuario, UsuarioConPerfil, UsuarioResponse};
use bolsa_db::repositories::{PerfilEmpleadoRepo, PerfilEmpleadorRepo, UsuarioRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use super::non_blank;
use crate::auth::jwt::{generate_token, JwtConfig};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_dummy_password, verify_password,
    MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};

/// Message for every failed login, whether or not the email exists.
const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/registro`.
///
/// `nombre` and `apellido` are required for `EMPLEADO`; `nombreEmpresa` for
/// `EMPLEADOR`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistroRequest {
    #[validate(email(message = "debe ser un email válido"))]
    pub email: String,
    pub contrasena: String,
    pub rol: String,
    #[validate(length(max = 100, message = "no puede superar 100 caracteres"))]
    pub nombre: Option<String>,
    #[validate(length(max = 100, message = "no puede superar 100 caracteres"))]
    pub apellido: Option<String>,
    #[validate(length(max = 200, message = "no puede superar 200 caracteres"))]
    pub nombre_empresa: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "debe ser un email válido"))]
    pub email: String,
    #[validate(length(min = 1, message = "es obligatoria"))]
    pub contrasena: String,
}

/// Token plus the minimal user record, returned by registration and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub usuario: UsuarioResponse,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct AuthService;

impl AuthService {
    /// Create a user and its role profile, then issue a token.
    pub async fn registrar(
        pool: &PgPool,
        jwt: &JwtConfig,
        input: RegistroRequest,
    ) -> AppResult<AuthResponse> {
        let rol = Rol::parse_registrable(input.rol.trim())?;
        validate_password_strength(&input.contrasena, MIN_PASSWORD_LENGTH)
            .map_err(CoreError::Validation)?;

        let perfil = if rol == Rol::Empleado {
            match (non_blank(input.nombre), non_blank(input.apellido)) {
                (Some(nombre), Some(apellido)) => {
                    CreatePerfil::Empleado(CreatePerfilEmpleado { nombre, apellido })
                }
                _ => {
                    return Err(CoreError::Validation(
                        "Nombre y apellido son obligatorios para empleados".into(),
                    )
                    .into())
                }
            }
        } else {
            match non_blank(input.nombre_empresa) {
                Some(nombre_empresa) => {
                    CreatePerfil::Empleador(CreatePerfilEmpleador { nombre_empresa })
                }
                None => {
                    return Err(CoreError::Validation(
                        "El nombre de la empresa es obligatorio para empleadores".into(),
                    )
                    .into())
                }
            }
        };

        let email = normalize_email(&input.email);
        if UsuarioRepo::email_exists(pool, &email).await? {
            return Err(CoreError::Conflict("El email ya está registrado".into()).into());
        }

        let password_hash = hash_password(&input.contrasena)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let usuario = UsuarioRepo::create_with_perfil(
            pool,
            &CreateUsuario {
                email,
                password_hash,
                rol: rol.as_str().to_string(),
            },
            &perfil,
        )
        .await?;

        tracing::info!(user_id = usuario.id, rol = %rol, "User registered");

        let token = issue_token(jwt, usuario.id, &usuario.email, rol)?;
        Ok(AuthResponse {
            token,
            usuario: UsuarioResponse::from(&usuario),
        })
    }

    /// Check credentials and issue a token.
    ///
    /// Unknown email and wrong password produce the same 401, and both pay
    /// for one Argon2 verification.
    pub async fn login(pool: &PgPool, jwt: &JwtConfig, input: LoginRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&input.email);
        let Some(usuario) = UsuarioRepo::find_by_email(pool, &email).await? else {
            verify_dummy_password(&input.contrasena);
            tracing::debug!("Login rejected: unknown email");
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
        };

        let password_valid = verify_password(&input.contrasena, &usuario.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if !password_valid {
            tracing::debug!(user_id = usuario.id, "Login rejected: wrong password");
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
        }

        let rol = parse_stored_rol(&usuario.rol)?;
        let token = issue_token(jwt, usuario.id, &usuario.email, rol)?;

        tracing::info!(user_id = usuario.id, "User logged in");

        Ok(AuthResponse {
            token,
            usuario: UsuarioResponse::from(&usuario),
        })
    }

    /// Load a user joined with whichever profile matches its role.
    pub async fn obtener_usuario(pool: &PgPool, id: DbId) -> AppResult<UsuarioConPerfil> {
        let usuario = UsuarioRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Usuario",
                id,
            })?;

        let (perfil_empleado, perfil_empleador) = match parse_stored_rol(&usuario.rol)? {
            Rol::Empleado => (PerfilEmpleadoRepo::find_by_usuario_id(pool, id).await?, None),
            Rol::Empleador => (None, PerfilEmpleadorRepo::find_by_usuario_id(pool, id).await?),
            Rol::Admin => (None, None),
        };

        Ok(UsuarioConPerfil {
            usuario: UsuarioResponse::from(&usuario),
            perfil_empleado,
            perfil_empleador,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn issue_token(jwt: &JwtConfig, usuario_id: DbId, email: &str, rol: Rol) -> AppResult<String> {
    generate_token(usuario_id, email, rol, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}

fn parse_stored_rol(value: &str) -> AppResult<Rol> {
    Rol::parse(value).ok_or_else(|| AppError::InternalError(format!("Unknown stored role '{value}'")))
}
