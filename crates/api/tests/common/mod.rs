#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use bolsa_api::auth::jwt::{generate_token, JwtConfig};
use bolsa_api::auth::password::hash_password;
use bolsa_api::config::{Environment, ServerConfig};
use bolsa_api::router::build_app_router;
use bolsa_api::state::AppState;
use bolsa_core::roles::Rol;
use bolsa_core::types::DbId;
use bolsa_db::models::catalogo::Catalogo;
use bolsa_db::repositories::CatalogoRepo;

/// Password used for every user created through these helpers.
pub const TEST_PASSWORD: &str = "secreto123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        environment: Environment::Test,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            expires_in_secs: 3600,
        },
    }
}

/// Build the full application router, the same one `main.rs` serves.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A registered user as seen by the tests.
pub struct TestUser {
    pub id: DbId,
    pub token: String,
}

/// Register an employee through the API.
pub async fn register_empleado(pool: &PgPool, email: &str) -> TestUser {
    let body = json!({
        "email": email,
        "contrasena": TEST_PASSWORD,
        "rol": "EMPLEADO",
        "nombre": "Ana",
        "apellido": "Díaz",
    });
    register(pool, body).await
}

/// Register an employer through the API.
pub async fn register_empleador(pool: &PgPool, email: &str) -> TestUser {
    let body = json!({
        "email": email,
        "contrasena": TEST_PASSWORD,
        "rol": "EMPLEADOR",
        "nombreEmpresa": "Panadería Sur",
    });
    register(pool, body).await
}

async fn register(pool: &PgPool, body: Value) -> TestUser {
    let response = post_json(build_test_app(pool.clone()), "/api/auth/registro", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    TestUser {
        id: json["datos"]["usuario"]["id"].as_i64().unwrap(),
        token: json["datos"]["token"].as_str().unwrap().to_string(),
    }
}

/// Administrators cannot self-register; insert one directly and sign a token.
pub async fn create_admin(pool: &PgPool, email: &str) -> TestUser {
    let hash = hash_password(TEST_PASSWORD).unwrap();
    let id: DbId = sqlx::query_scalar(
        "INSERT INTO usuarios (email, password_hash, rol) VALUES ($1, $2, 'ADMIN') RETURNING id",
    )
    .bind(email)
    .bind(hash)
    .fetch_one(pool)
    .await
    .unwrap();
    let token = generate_token(id, email, Rol::Admin, &test_config().jwt).unwrap();
    TestUser { id, token }
}

/// Ids of one row in each lookup table.
pub struct Catalogos {
    pub categoria_id: DbId,
    pub tipo_trabajo_id: DbId,
    pub departamento_id: DbId,
}

pub async fn seed_catalogos(pool: &PgPool) -> Catalogos {
    let categoria =
        CatalogoRepo::create(pool, Catalogo::Categorias, "Gastronomía", "gastronomia", None)
            .await
            .unwrap();
    let tipo = CatalogoRepo::create(
        pool,
        Catalogo::TiposTrabajo,
        "Tiempo completo",
        "tiempo-completo",
        None,
    )
    .await
    .unwrap();
    let departamento =
        CatalogoRepo::create(pool, Catalogo::Departamentos, "Capital", "capital", None)
            .await
            .unwrap();
    Catalogos {
        categoria_id: categoria.id,
        tipo_trabajo_id: tipo.id,
        departamento_id: departamento.id,
    }
}

/// Request body for a valid job posting.
pub fn trabajo_body(titulo: &str, catalogos: &Catalogos) -> Value {
    json!({
        "titulo": titulo,
        "descripcion": "Atención al público y preparación de pedidos.",
        "ubicacion": "Centro",
        "categoriaId": catalogos.categoria_id,
        "tipoTrabajoId": catalogos.tipo_trabajo_id,
        "departamentoId": catalogos.departamento_id,
    })
}

/// Publish a job through the API and return its id.
pub async fn create_trabajo(
    pool: &PgPool,
    empleador: &TestUser,
    body: Value,
) -> DbId {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/trabajos",
        body,
        &empleador.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["datos"]["id"].as_i64().unwrap()
}

/// Apply to a job through the API and return the raw response.
pub async fn postular(pool: &PgPool, user: &TestUser, trabajo_id: DbId) -> Response {
    post_json_auth(
        build_test_app(pool.clone()),
        "/api/postulaciones",
        json!({ "trabajoId": trabajo_id, "cartaPresentacion": "Tengo experiencia." }),
        &user.token,
    )
    .await
}
