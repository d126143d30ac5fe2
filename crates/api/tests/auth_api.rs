//! HTTP-level integration tests for registration, login, and identity.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

async fn count_usuarios(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_employee_returns_token_and_role(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = json!({
        "email": "a@a.com",
        "contrasena": "123456",
        "rol": "EMPLEADO",
        "nombre": "Ana",
        "apellido": "Diaz",
    });

    let response = post_json(app, "/api/auth/registro", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["exito"], true);
    assert!(json["datos"]["token"].is_string());
    assert_eq!(json["datos"]["usuario"]["rol"], "EMPLEADO");
    assert_eq!(json["datos"]["usuario"]["email"], "a@a.com");
    assert!(json["datos"]["usuario"].get("passwordHash").is_none());

    let perfiles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM perfiles_empleado")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(perfiles, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_returns_409_and_creates_nothing(pool: PgPool) {
    common::register_empleador(&pool, "dueno@panaderia.com").await;
    assert_eq!(count_usuarios(&pool).await, 1);

    let body = json!({
        "email": "Dueno@Panaderia.com",
        "contrasena": TEST_PASSWORD,
        "rol": "EMPLEADO",
        "nombre": "Otro",
        "apellido": "Usuario",
    });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/registro", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["exito"], false);
    assert_eq!(json["error"], "CONFLICT");
    assert_eq!(count_usuarios(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_cannot_self_register(pool: PgPool) {
    let body = json!({
        "email": "root@bolsa.com",
        "contrasena": TEST_PASSWORD,
        "rol": "ADMIN",
    });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/registro", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_usuarios(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn registration_requires_role_specific_names(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = json!({
        "email": "sin@empresa.com",
        "contrasena": TEST_PASSWORD,
        "rol": "EMPLEADOR",
    });
    let response = post_json(app, "/api/auth/registro", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let body = json!({
        "email": "sin@apellido.com",
        "contrasena": TEST_PASSWORD,
        "rol": "EMPLEADO",
        "nombre": "Ana",
    });
    let response = post_json(app, "/api/auth/registro", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_usuarios(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_password_and_bad_email_are_rejected(pool: PgPool) {
    let body = json!({
        "email": "corta@a.com",
        "contrasena": "12345",
        "rol": "EMPLEADO",
        "nombre": "Ana",
        "apellido": "Diaz",
    });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/registro", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "VALIDATION_ERROR");

    let body = json!({
        "email": "no-es-email",
        "contrasena": TEST_PASSWORD,
        "rol": "EMPLEADO",
        "nombre": "Ana",
        "apellido": "Diaz",
    });
    let response = post_json(common::build_test_app(pool), "/api/auth/registro", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["mensaje"].as_str().unwrap().contains("email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_succeeds_case_insensitively(pool: PgPool) {
    common::register_empleado(&pool, "ana@correo.com").await;

    let body = json!({ "email": "ANA@correo.com", "contrasena": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["datos"]["token"].is_string());
    assert_eq!(json["datos"]["usuario"]["email"], "ana@correo.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_logins_share_one_generic_message(pool: PgPool) {
    common::register_empleado(&pool, "ana@correo.com").await;

    let wrong_password = post_json(
        common::build_test_app(pool.clone()),
        "/api/auth/login",
        json!({ "email": "ana@correo.com", "contrasena": "incorrecta" }),
    )
    .await;
    let unknown_email = post_json(
        common::build_test_app(pool),
        "/api/auth/login",
        json!({ "email": "nadie@correo.com", "contrasena": "incorrecta" }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let a = body_json(wrong_password).await;
    let b = body_json(unknown_email).await;
    assert_eq!(a["mensaje"], "Credenciales inválidas");
    assert_eq!(a["mensaje"], b["mensaje"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_user_with_profile(pool: PgPool) {
    let empleador = common::register_empleador(&pool, "dueno@panaderia.com").await;

    let response = get_auth(common::build_test_app(pool), "/api/auth/me", &empleador.token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["datos"]["id"], empleador.id);
    assert_eq!(json["datos"]["rol"], "EMPLEADOR");
    assert_eq!(json["datos"]["perfilEmpleador"]["nombreEmpresa"], "Panadería Sur");
    assert!(json["datos"].get("perfilEmpleado").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verificar_echoes_token_identity(pool: PgPool) {
    let empleado = common::register_empleado(&pool, "ana@correo.com").await;

    let response =
        get_auth(common::build_test_app(pool), "/api/auth/verificar", &empleado.token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["datos"]["id"], empleado.id);
    assert_eq!(json["datos"]["email"], "ana@correo.com");
    assert_eq!(json["datos"]["rol"], "EMPLEADO");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_routes_reject_missing_or_bad_tokens(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "UNAUTHORIZED");

    let response = get_auth(common::build_test_app(pool), "/api/auth/me", "no.es.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
