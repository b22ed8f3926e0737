mod common;

use axum::http::{StatusCode, header::COOKIE};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

struct Fixture {
    server: TestServer,
    service: String,
    barber: String,
    slot: String,
}

async fn setup(pool: PgPool) -> Fixture {
    let service = common::create_service(&pool, "Classic Cut", 2500, true).await;
    let barber = common::create_barber(&pool, "Alex", &[&service]).await;
    let slot = common::create_slot(
        &pool,
        Some(&barber),
        common::at(common::date("2030-07-01"), 9),
        false,
    )
    .await;
    common::create_admin(&pool).await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(common::api_app(state)).unwrap();

    Fixture {
        server,
        service,
        barber,
        slot,
    }
}

fn booking_body(service_id: &str, slot_id: &str) -> serde_json::Value {
    json!({
        "clientName": "Jane Doe",
        "clientEmail": "jane@example.com",
        "clientPhone": "+1 555 0100",
        "serviceId": service_id,
        "slotId": slot_id
    })
}

// ─── BOOKING ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_book_slot_success(pool: PgPool) {
    let f = setup(pool).await;

    let response = f
        .server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &f.slot))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["source"], "web");
    assert_eq!(body["clientName"], "Jane Doe");
    assert_eq!(body["service"]["id"], f.service);
    assert_eq!(body["service"]["priceCents"], 2500);
    assert_eq!(body["barber"]["id"], f.barber);
    assert_eq!(body["slot"]["id"], f.slot);
    assert!(body.get("createdAt").is_some());

    let fetched = f
        .server
        .get(&format!("/api/appointments/{}", body["id"].as_str().unwrap()))
        .await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<serde_json::Value>()["id"], body["id"]);
}

#[sqlx::test]
async fn test_book_keeps_custom_source(pool: PgPool) {
    let f = setup(pool).await;

    let mut body = booking_body(&f.service, &f.slot);
    body["source"] = json!("phone");

    let response = f.server.post("/api/appointments").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["source"], "phone");
}

#[sqlx::test]
async fn test_book_same_slot_twice_conflicts(pool: PgPool) {
    let f = setup(pool).await;

    f.server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &f.slot))
        .await
        .assert_status(StatusCode::CREATED);

    let response = f
        .server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &f.slot))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Time slot already booked");
}

#[sqlx::test]
async fn test_book_validation_errors(pool: PgPool) {
    let f = setup(pool).await;

    let cases = [
        json!({ "clientName": "", "serviceId": f.service, "slotId": f.slot }),
        json!({ "clientName": "Jane", "clientEmail": "nope", "serviceId": f.service, "slotId": f.slot }),
        json!({ "clientName": "Jane", "clientPhone": "123", "serviceId": f.service, "slotId": f.slot }),
        json!({ "clientName": "Jane", "serviceId": "", "slotId": f.slot }),
        json!({ "serviceId": f.service, "slotId": f.slot }),
        json!({ "clientName": "Jane", "serviceId": 42, "slotId": f.slot }),
    ];

    for case in cases {
        let response = f.server.post("/api/appointments").json(&case).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "validation_error"
        );
    }
}

#[sqlx::test]
async fn test_book_missing_field_reports_reason(pool: PgPool) {
    let f = setup(pool).await;

    let response = f
        .server
        .post("/api/appointments")
        .json(&json!({ "serviceId": f.service, "slotId": f.slot }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Invalid request body");
    assert!(
        body["error"]["details"]["reason"]
            .as_str()
            .unwrap()
            .contains("clientName")
    );
}

#[sqlx::test]
async fn test_book_inactive_service(pool: PgPool) {
    let inactive = common::create_service(&pool, "Retired", 100, false).await;
    let f = setup(pool).await;

    let response = f
        .server
        .post("/api/appointments")
        .json(&booking_body(&inactive, &f.slot))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Service not found or inactive"
    );
}

#[sqlx::test]
async fn test_book_blocked_slot(pool: PgPool) {
    let blocked =
        common::create_slot(&pool, None, common::at(common::date("2030-07-02"), 9), true).await;
    let f = setup(pool).await;

    let response = f
        .server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &blocked))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Time slot not available"
    );
}

#[sqlx::test]
async fn test_book_slot_without_barber(pool: PgPool) {
    let unassigned =
        common::create_slot(&pool, None, common::at(common::date("2030-07-03"), 9), false).await;
    let f = setup(pool).await;

    let response = f
        .server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &unassigned))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[sqlx::test]
async fn test_get_unknown_appointment(pool: PgPool) {
    let f = setup(pool).await;

    f.server
        .get("/api/appointments/missing")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ─── ADMIN ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_appointments_requires_session(pool: PgPool) {
    let f = setup(pool).await;

    f.server
        .get("/api/appointments")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_admin_lists_and_updates_status(pool: PgPool) {
    let service = common::create_service(&pool, "Classic Cut", 2500, true).await;
    let barber = common::create_barber(&pool, "Alex", &[&service]).await;
    let slot =
        common::create_slot(&pool, Some(&barber), common::at(common::date("2030-07-04"), 9), false)
            .await;
    common::create_admin(&pool).await;

    let state = common::create_test_state(pool);
    let token = common::login_token(&state).await;
    let server = TestServer::new(common::api_app(state)).unwrap();

    let created = server
        .post("/api/appointments")
        .json(&booking_body(&service, &slot))
        .await
        .json::<serde_json::Value>();
    let id = created["id"].as_str().unwrap();

    let list = server
        .get("/api/appointments?status=PENDING")
        .add_header(COOKIE, common::session_cookie(&token))
        .await;
    list.assert_status_ok();
    assert_eq!(list.json::<serde_json::Value>().as_array().unwrap().len(), 1);

    let updated = server
        .patch(&format!("/api/appointments/{id}/status"))
        .add_header(COOKIE, common::session_cookie(&token))
        .json(&json!({ "status": "CONFIRMED" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<serde_json::Value>()["status"], "CONFIRMED");

    let pending = server
        .get("/api/appointments?status=PENDING")
        .add_header(COOKIE, common::session_cookie(&token))
        .await;
    assert!(pending.json::<serde_json::Value>().as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_admin_status_errors(pool: PgPool) {
    let f = setup(pool.clone()).await;
    let state = common::create_test_state(pool);
    let token = common::login_token(&state).await;

    let created = f
        .server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &f.slot))
        .await
        .json::<serde_json::Value>();
    let id = created["id"].as_str().unwrap();

    f.server
        .patch(&format!("/api/appointments/{id}/status"))
        .add_header(COOKIE, common::session_cookie(&token))
        .json(&json!({ "status": "DONE" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    f.server
        .patch("/api/appointments/missing/status")
        .add_header(COOKIE, common::session_cookie(&token))
        .json(&json!({ "status": "CANCELLED" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    f.server
        .get("/api/appointments?status=bogus")
        .add_header(COOKIE, common::session_cookie(&token))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_reactivating_rebooked_slot_conflicts(pool: PgPool) {
    let f = setup(pool.clone()).await;
    let state = common::create_test_state(pool);
    let token = common::login_token(&state).await;

    let first = f
        .server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &f.slot))
        .await
        .json::<serde_json::Value>();
    let first_id = first["id"].as_str().unwrap();

    f.server
        .patch(&format!("/api/appointments/{first_id}/status"))
        .add_header(COOKIE, common::session_cookie(&token))
        .json(&json!({ "status": "CANCELLED" }))
        .await
        .assert_status_ok();

    f.server
        .post("/api/appointments")
        .json(&booking_body(&f.service, &f.slot))
        .await
        .assert_status(StatusCode::CREATED);

    f.server
        .patch(&format!("/api/appointments/{first_id}/status"))
        .add_header(COOKIE, common::session_cookie(&token))
        .json(&json!({ "status": "PENDING" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}
