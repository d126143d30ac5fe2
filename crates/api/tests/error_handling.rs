//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly or drive the middleware stack around
//! throwaway routes; no database is needed. Internal details are never
//! exposed here because nothing enables them.

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use bolsa_api::error::AppError;
use bolsa_api::router::apply_middleware;
use bolsa_core::error::CoreError;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_envelope() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Trabajo",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["exito"], false);
    assert_eq!(json["error"], "NOT_FOUND");
    assert_eq!(json["mensaje"], "No se encontró Trabajo con id 42");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("La contraseña es muy corta".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert_eq!(json["mensaje"], "La contraseña es muy corta");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Cuerpo JSON inválido".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("El email ya está registrado".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "CONFLICT");
    assert_eq!(json["mensaje"], "El email ya está registrado");
}

#[tokio::test]
async fn unauthorized_and_forbidden_map_to_401_and_403() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("Token inválido".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "UNAUTHORIZED");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("Acceso denegado".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("connection string postgres://secret".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "INTERNAL_ERROR");
    assert_eq!(json["mensaje"], "Error interno del servidor");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_are_sanitized() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["mensaje"], "Error interno del servidor");
}

// ---------------------------------------------------------------------------
// Middleware-produced errors
// ---------------------------------------------------------------------------

async fn lento() -> &'static str {
    tokio::time::sleep(Duration::from_secs(60)).await;
    "tarde"
}

async fn rompe() -> &'static str {
    panic!("fallo inesperado en el handler")
}

fn middleware_app(request_timeout_secs: u64) -> Router {
    let mut config = common::test_config();
    config.request_timeout_secs = request_timeout_secs;
    let router = Router::new()
        .route("/lento", get(lento))
        .route("/rompe", get(rompe));
    apply_middleware(router, &config)
}

async fn send_get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn timed_out_request_returns_408_envelope() {
    let response = send_get(middleware_app(0), "/lento").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let json = common::body_json(response).await;
    assert_eq!(json["exito"], false);
    assert_eq!(json["error"], "REQUEST_TIMEOUT");
    assert_eq!(json["mensaje"], "La solicitud excedió el tiempo de espera");
}

#[tokio::test]
async fn handler_panic_returns_sanitized_500_envelope() {
    let response = send_get(middleware_app(30), "/rompe").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let json = common::body_json(response).await;
    assert_eq!(json["exito"], false);
    assert_eq!(json["error"], "INTERNAL_ERROR");
    assert_eq!(json["mensaje"], "Error interno del servidor");
}

#[tokio::test]
async fn middleware_errors_keep_the_request_id_header() {
    let response = send_get(middleware_app(0), "/lento").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(response.headers().contains_key("x-request-id"));
}
