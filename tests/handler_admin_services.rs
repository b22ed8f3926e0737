mod common;

use axum::http::{StatusCode, header::COOKIE};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

struct Admin {
    server: TestServer,
    token: String,
}

impl Admin {
    async fn new(pool: PgPool) -> Self {
        common::create_admin(&pool).await;
        let state = common::create_test_state(pool);
        let token = common::login_token(&state).await;
        let server = TestServer::new(common::api_app(state)).unwrap();
        Self { server, token }
    }

    fn cookie(&self) -> axum::http::HeaderValue {
        common::session_cookie(&self.token)
    }
}

#[sqlx::test]
async fn test_admin_services_require_session(pool: PgPool) {
    let server = TestServer::new(common::api_app(common::create_test_state(pool))).unwrap();

    server
        .get("/api/admin/services")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post("/api/admin/services")
        .json(&json!({ "name": "X", "durationMinutes": 10, "priceCents": 0 }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_services_pagination(pool: PgPool) {
    for (name, price) in [("Classic Cut", 2500), ("Beard Trim", 1500), ("Skin Fade", 3500)] {
        common::create_service(&pool, name, price, true).await;
    }
    common::create_service(&pool, "Old Perm", 9000, false).await;
    let admin = Admin::new(pool).await;

    let response = admin
        .server
        .get("/api/admin/services?status=active&sort=price&page=2&pageSize=2")
        .add_header(COOKIE, admin.cookie())
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 3);
    assert_eq!(json["page"], 2);
    assert_eq!(json["pageSize"], 2);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Skin Fade");
    assert!(items[0].get("updatedAt").is_some());
}

#[sqlx::test]
async fn test_list_services_defaults(pool: PgPool) {
    common::create_service(&pool, "Classic Cut", 2500, true).await;
    common::create_service(&pool, "Old Perm", 9000, false).await;
    let admin = Admin::new(pool).await;

    let json = admin
        .server
        .get("/api/admin/services")
        .add_header(COOKIE, admin.cookie())
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["total"], 2);
    assert_eq!(json["page"], 1);
    assert_eq!(json["pageSize"], 12);
    assert_eq!(json["items"][0]["name"], "Classic Cut");
}

#[sqlx::test]
async fn test_list_services_rejects_bad_params(pool: PgPool) {
    let admin = Admin::new(pool).await;

    let long_query = "q".repeat(121);
    for query in [
        "status=archived".to_string(),
        "sort=popularity".to_string(),
        "page=0".to_string(),
        "pageSize=101".to_string(),
        format!("query={long_query}"),
    ] {
        admin
            .server
            .get(&format!("/api/admin/services?{query}"))
            .add_header(COOKIE, admin.cookie())
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

// ─── CREATE / UPDATE / DELETE ────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_service(pool: PgPool) {
    let haircuts = common::create_category(&pool, "Haircuts", "haircuts", 0).await;
    let admin = Admin::new(pool).await;

    let response = admin
        .server
        .post("/api/admin/services")
        .add_header(COOKIE, admin.cookie())
        .json(&json!({
            "name": "Skin Fade",
            "description": "Tight fade",
            "durationMinutes": 45,
            "priceCents": 3500,
            "categoryIds": [haircuts]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Skin Fade");
    assert_eq!(body["isActive"], true);
    assert_eq!(body["categories"][0]["id"], haircuts);
}

#[sqlx::test]
async fn test_create_service_errors(pool: PgPool) {
    let admin = Admin::new(pool).await;

    admin
        .server
        .post("/api/admin/services")
        .add_header(COOKIE, admin.cookie())
        .json(&json!({ "name": "Bad", "durationMinutes": 0, "priceCents": 100 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    admin
        .server
        .post("/api/admin/services")
        .add_header(COOKIE, admin.cookie())
        .json(&json!({
            "name": "Orphan",
            "durationMinutes": 30,
            "priceCents": 100,
            "categoryIds": ["missing"]
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_update_service(pool: PgPool) {
    let id = common::create_service(&pool, "Classic Cut", 2500, true).await;
    sqlx::query("UPDATE services SET description = 'Scissors' WHERE id = $1")
        .bind(&id)
        .execute(&pool)
        .await
        .unwrap();
    let admin = Admin::new(pool).await;

    let response = admin
        .server
        .patch(&format!("/api/admin/services/{id}"))
        .add_header(COOKIE, admin.cookie())
        .json(&json!({ "description": null, "isActive": false }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["description"].is_null());
    assert_eq!(body["isActive"], false);
    assert_eq!(body["name"], "Classic Cut");

    admin
        .server
        .patch("/api/admin/services/missing")
        .add_header(COOKIE, admin.cookie())
        .json(&json!({ "name": "Ghost" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_delete_service(pool: PgPool) {
    let unused = common::create_service(&pool, "Unused", 1000, true).await;
    let booked = common::create_service(&pool, "Booked", 1000, true).await;
    let slot =
        common::create_slot(&pool, None, common::at(common::date("2030-08-01"), 9), false).await;
    common::create_appointment(&pool, &booked, &slot, "PENDING").await;
    let admin = Admin::new(pool).await;

    admin
        .server
        .delete(&format!("/api/admin/services/{unused}"))
        .add_header(COOKIE, admin.cookie())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    admin
        .server
        .delete(&format!("/api/admin/services/{unused}"))
        .add_header(COOKIE, admin.cookie())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    admin
        .server
        .delete(&format!("/api/admin/services/{booked}"))
        .add_header(COOKIE, admin.cookie())
        .await
        .assert_status(StatusCode::CONFLICT);
}
