//! HTTP-level integration tests for the `/postulaciones` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, patch_json_auth, trabajo_body, TestUser};
use serde_json::json;
use sqlx::PgPool;

/// One employer with one active job, and one employee.
struct Escenario {
    empleador: TestUser,
    empleado: TestUser,
    trabajo_id: i64,
}

async fn escenario(pool: &PgPool) -> Escenario {
    let catalogos = common::seed_catalogos(pool).await;
    let empleador = common::register_empleador(pool, "dueno@panaderia.com").await;
    let empleado = common::register_empleado(pool, "ana@correo.com").await;
    let trabajo_id = common::create_trabajo(pool, &empleador, trabajo_body("Mozo", &catalogos)).await;
    Escenario {
        empleador,
        empleado,
        trabajo_id,
    }
}

async fn apply(pool: &PgPool, user: &TestUser, trabajo_id: i64) -> i64 {
    let response = common::postular(pool, user, trabajo_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["datos"]["id"].as_i64().unwrap()
}

async fn count_postulaciones(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM postulaciones")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_application_returns_409(pool: PgPool) {
    let e = escenario(&pool).await;

    let first = common::postular(&pool, &e.empleado, e.trabajo_id).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let json = body_json(first).await;
    assert_eq!(json["datos"]["estado"], "PENDIENTE");
    assert_eq!(json["datos"]["cartaPresentacion"], "Tengo experiencia.");

    let second = common::postular(&pool, &e.empleado, e.trabajo_id).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["mensaje"], "Ya te has postulado a este trabajo");
    assert_eq!(count_postulaciones(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employer_cannot_apply_to_own_job(pool: PgPool) {
    let e = escenario(&pool).await;

    let response = common::postular(&pool, &e.empleador, e.trabajo_id).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "No puedes postularte a tu propio trabajo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_employer_without_employee_profile_gets_403(pool: PgPool) {
    let e = escenario(&pool).await;
    let otro = common::register_empleador(&pool, "otro@empresa.com").await;

    let response = common::postular(&pool, &otro, e.trabajo_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn applying_to_missing_or_inactive_job_fails(pool: PgPool) {
    let catalogos = common::seed_catalogos(&pool).await;
    let empleador = common::register_empleador(&pool, "dueno@panaderia.com").await;
    let empleado = common::register_empleado(&pool, "ana@correo.com").await;
    let mut body = trabajo_body("Mozo", &catalogos);
    body["estado"] = json!("CERRADO");
    let cerrado = common::create_trabajo(&pool, &empleador, body).await;

    let response = common::postular(&pool, &empleado, 999_999).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = common::postular(&pool, &empleado, cerrado).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_owning_employer_changes_estado(pool: PgPool) {
    let e = escenario(&pool).await;
    let otro = common::register_empleador(&pool, "otro@empresa.com").await;
    let id = apply(&pool, &e.empleado, e.trabajo_id).await;
    let uri = format!("/api/postulaciones/{id}/estado");

    for intruso in [&otro, &e.empleado] {
        let response = patch_json_auth(
            common::build_test_app(pool.clone()),
            &uri,
            json!({ "estado": "ACEPTADA" }),
            &intruso.token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "estado": "REVISADA" }),
        &e.empleador.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["datos"]["estado"], "REVISADA");
    assert!(json["datos"]["fechaRevision"].is_string());

    let response = patch_json_auth(
        common::build_test_app(pool),
        &uri,
        json!({ "estado": "INVENTADO" }),
        &e.empleador.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn accepted_application_cannot_be_withdrawn(pool: PgPool) {
    let e = escenario(&pool).await;
    let id = apply(&pool, &e.empleado, e.trabajo_id).await;

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/postulaciones/{id}/estado"),
        json!({ "estado": "ACEPTADA" }),
        &e.empleador.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/postulaciones/{id}"),
        &e.empleado.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_postulaciones(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn applicant_withdraws_pending_application(pool: PgPool) {
    let e = escenario(&pool).await;
    let id = apply(&pool, &e.empleado, e.trabajo_id).await;
    let uri = format!("/api/postulaciones/{id}");

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &e.empleador.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &e.empleado.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(count_postulaciones(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_is_visible_to_parties_and_admin_only(pool: PgPool) {
    let e = escenario(&pool).await;
    let otro = common::register_empleado(&pool, "otro@correo.com").await;
    let admin = common::create_admin(&pool, "admin@bolsa.com").await;
    let id = apply(&pool, &e.empleado, e.trabajo_id).await;
    let uri = format!("/api/postulaciones/{id}");

    for permitido in [&e.empleado, &e.empleador, &admin] {
        let response = get_auth(common::build_test_app(pool.clone()), &uri, &permitido.token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["datos"]["trabajoTitulo"], "Mozo");
        assert!(json["datos"].get("empleadoUsuarioId").is_none());
    }

    let response = get_auth(common::build_test_app(pool), &uri, &otro.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listings_for_each_side(pool: PgPool) {
    let e = escenario(&pool).await;
    apply(&pool, &e.empleado, e.trabajo_id).await;

    let json = body_json(
        get_auth(
            common::build_test_app(pool.clone()),
            "/api/postulaciones/mis-postulaciones",
            &e.empleado.token,
        )
        .await,
    )
    .await;
    let mias = json["datos"].as_array().unwrap();
    assert_eq!(mias.len(), 1);
    assert_eq!(mias[0]["empresaNombre"], "Panadería Sur");

    let json = body_json(
        get_auth(
            common::build_test_app(pool.clone()),
            &format!("/api/postulaciones/recibidas?trabajoId={}", e.trabajo_id),
            &e.empleador.token,
        )
        .await,
    )
    .await;
    let recibidas = json["datos"].as_array().unwrap();
    assert_eq!(recibidas.len(), 1);
    assert_eq!(recibidas[0]["empleadoEmail"], "ana@correo.com");

    let json = body_json(
        get_auth(
            common::build_test_app(pool.clone()),
            "/api/postulaciones/recibidas?estado=ACEPTADA",
            &e.empleador.token,
        )
        .await,
    )
    .await;
    assert_eq!(json["datos"].as_array().unwrap().len(), 0);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/postulaciones/recibidas",
        &e.empleado.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn received_filter_on_foreign_job_is_forbidden(pool: PgPool) {
    let e = escenario(&pool).await;
    let otro = common::register_empleador(&pool, "otro@empresa.com").await;

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/postulaciones/recibidas?trabajoId={}", e.trabajo_id),
        &otro.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn estadisticas_and_verificar(pool: PgPool) {
    let e = escenario(&pool).await;
    let verificar = format!("/api/postulaciones/verificar/{}", e.trabajo_id);

    let json = body_json(
        get_auth(common::build_test_app(pool.clone()), &verificar, &e.empleado.token).await,
    )
    .await;
    assert_eq!(json["datos"]["postulado"], false);
    assert!(json["datos"].get("postulacion").is_none());

    let id = apply(&pool, &e.empleado, e.trabajo_id).await;

    let json = body_json(
        get_auth(common::build_test_app(pool.clone()), &verificar, &e.empleado.token).await,
    )
    .await;
    assert_eq!(json["datos"]["postulado"], true);
    assert_eq!(json["datos"]["postulacion"]["id"], id);

    let json = body_json(
        get_auth(
            common::build_test_app(pool),
            "/api/postulaciones/estadisticas",
            &e.empleador.token,
        )
        .await,
    )
    .await;
    assert_eq!(json["datos"]["total"], 1);
    assert_eq!(json["datos"]["pendientes"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_job_removes_its_applications(pool: PgPool) {
    let e = escenario(&pool).await;
    apply(&pool, &e.empleado, e.trabajo_id).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/trabajos/{}", e.trabajo_id),
        &e.empleador.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(count_postulaciones(&pool).await, 0);
}
