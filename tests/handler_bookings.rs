mod common;

use axum::http::StatusCode;
use common::InMemoryDb;
use serde_json::{Value, json};

/// Airplane, flight and a passenger owned by `owner`; returns `(passenger, flight)`.
async fn itinerary(db: &InMemoryDb, owner: &str) -> (i64, i64) {
    let airplane_id = common::create_test_airplane(db).await;
    let flight_id = common::create_test_flight(db, airplane_id).await;
    let passenger_id = common::create_test_passenger(db, owner).await;
    (passenger_id, flight_id)
}

#[tokio::test]
async fn test_create_booking_single_leg() {
    let db = InMemoryDb::default();
    let (passenger_id, flight_id) = itinerary(&db, "alice").await;
    let server = common::make_server(&db);

    let response = server
        .post("/api/booking")
        .add_header("Authorization", common::user("alice"))
        .json(&common::booking_body(passenger_id, flight_id))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["passengerId"], passenger_id);
    assert_eq!(json["firstFlightId"], flight_id);
    assert!(json["secondFlightId"].is_null());
    assert!(json["thirdFlightId"].is_null());
    assert_eq!(json["bookingDate"], "2025-01-15T12:00:00");
    assert_eq!(json["createdBy"], "alice");
}

#[tokio::test]
async fn test_create_booking_with_connections() {
    let db = InMemoryDb::default();
    let (passenger_id, first) = itinerary(&db, "alice").await;
    let airplane_id = common::create_test_airplane(&db).await;
    let second = common::create_test_flight(&db, airplane_id).await;
    let server = common::make_server(&db);

    let mut body = common::booking_body(passenger_id, first);
    body["secondFlightId"] = json!(second);

    let response = server
        .post("/api/booking")
        .add_header("Authorization", common::user("alice"))
        .json(&body)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["secondFlightId"], second);
}

#[tokio::test]
async fn test_create_booking_unknown_flight_conflicts() {
    let db = InMemoryDb::default();
    let (passenger_id, flight_id) = itinerary(&db, "alice").await;
    let server = common::make_server(&db);

    let mut body = common::booking_body(passenger_id, flight_id);
    body["thirdFlightId"] = json!(9999);

    let response = server
        .post("/api/booking")
        .add_header("Authorization", common::user("alice"))
        .json(&body)
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_create_booking_unknown_passenger_conflicts() {
    let db = InMemoryDb::default();
    let (_, flight_id) = itinerary(&db, "alice").await;
    let server = common::make_server(&db);

    server
        .post("/api/booking")
        .add_header("Authorization", common::user("alice"))
        .json(&common::booking_body(9999, flight_id))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_booking_validation_error() {
    let db = InMemoryDb::default();
    let (passenger_id, flight_id) = itinerary(&db, "alice").await;
    let server = common::make_server(&db);

    let mut body = common::booking_body(passenger_id, flight_id);
    body["origin"] = json!("");

    server
        .post("/api/booking")
        .add_header("Authorization", common::user("alice"))
        .json(&body)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bookings_are_isolated_per_owner() {
    let db = InMemoryDb::default();
    let own = common::create_test_booking(&db, "alice").await;
    let foreign = common::create_test_booking(&db, "bob").await;
    let server = common::make_server(&db);

    let list = server
        .get("/api/booking")
        .add_header("Authorization", common::user("alice"))
        .await;
    list.assert_status_ok();

    let items = list.json::<Value>();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], own);

    for request in [
        server.get(&format!("/api/booking/{foreign}")),
        server.delete(&format!("/api/booking/{foreign}")),
    ] {
        request
            .add_header("Authorization", common::user("alice"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    server
        .get(&format!("/api/admin/booking/{foreign}"))
        .add_header("Authorization", common::admin())
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_user_update_booking_keeps_owner() {
    let db = InMemoryDb::default();
    let (passenger_id, flight_id) = itinerary(&db, "alice").await;
    let server = common::make_server(&db);

    let created = server
        .post("/api/booking")
        .add_header("Authorization", common::user("alice"))
        .json(&common::booking_body(passenger_id, flight_id))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let mut body = common::booking_body(passenger_id, flight_id);
    body["destination"] = json!("CDG");
    body["createdBy"] = json!("bob");

    let response = server
        .put(&format!("/api/booking/{id}"))
        .add_header("Authorization", common::user("alice"))
        .json(&body)
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["destination"], "CDG");
    assert_eq!(json["createdBy"], "alice");
}

#[tokio::test]
async fn test_user_update_foreign_booking_not_found() {
    let db = InMemoryDb::default();
    let (passenger_id, flight_id) = itinerary(&db, "alice").await;
    let foreign = common::create_test_booking(&db, "bob").await;
    let server = common::make_server(&db);

    server
        .put(&format!("/api/booking/{foreign}"))
        .add_header("Authorization", common::user("alice"))
        .json(&common::booking_body(passenger_id, flight_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_creates_and_reassigns_booking() {
    let db = InMemoryDb::default();
    let (passenger_id, flight_id) = itinerary(&db, "alice").await;
    let server = common::make_server(&db);

    let mut body = common::booking_body(passenger_id, flight_id);
    body["createdBy"] = json!("alice");

    let created = server
        .post("/api/admin/booking")
        .add_header("Authorization", common::admin())
        .json(&body)
        .await;
    created.assert_status_ok();
    let id = created.json::<Value>()["id"].as_i64().unwrap();
    assert_eq!(created.json::<Value>()["createdBy"], "alice");

    body["createdBy"] = json!("bob");
    let updated = server
        .put(&format!("/api/admin/booking/{id}"))
        .add_header("Authorization", common::admin())
        .json(&body)
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["createdBy"], "bob");

    let bobs = server
        .get("/api/booking")
        .add_header("Authorization", common::user("bob"))
        .await
        .json::<Value>();
    assert_eq!(bobs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_booking_forbidden_for_users() {
    let server = common::make_server(&InMemoryDb::default());

    server
        .get("/api/admin/booking")
        .add_header("Authorization", common::user("alice"))
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_delete_booking() {
    let db = InMemoryDb::default();
    let id = common::create_test_booking(&db, "alice").await;
    let server = common::make_server(&db);

    server
        .delete(&format!("/api/admin/booking/{id}"))
        .add_header("Authorization", common::admin())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/admin/booking/{id}"))
        .add_header("Authorization", common::admin())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
