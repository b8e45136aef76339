//! Integration tests for the client, session handling and resource services
//! against a mock SmartBox backend.

use std::sync::Arc;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smartbox_admin::auth;
use smartbox_admin::errors::ApiError;
use smartbox_admin::models::user::Role;
use smartbox_admin::models::{SizePayload, UserPayload};
use smartbox_admin::services::{LockerService, RentalService, SizeService, UserService};
use smartbox_admin::{ApiClient, AppConfig};

fn client_for(server: &MockServer) -> Arc<ApiClient> {
    let config = AppConfig {
        api_base_url: format!("{}/api/", server.uri()),
        ..AppConfig::default()
    };
    Arc::new(ApiClient::new(&config).unwrap())
}

#[tokio::test]
async fn enveloped_collections_are_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"rent_id": 1, "user_id": 2, "compartment_id": 3, "status": 1,
                 "total_cost": "12000.50"}
            ]
        })))
        .mount(&server)
        .await;

    let rentals = RentalService::new(client_for(&server));
    let list = rentals.list().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].rent_id, 1);
    assert!(list[0].is_active());
    assert_eq!(list[0].total_cost, Some(dec!(12000.50)));
}

#[tokio::test]
async fn bare_arrays_decode_without_an_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sizes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"size_id": 1, "name": "S", "price_per_hour": 2000},
            {"size_id": 2, "name": "M", "price_per_hour": "not-a-number"}
        ])))
        .mount(&server)
        .await;

    let sizes = SizeService::new(client_for(&server));
    let list = sizes.list().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].price_per_hour, Some(dec!(2000)));
    // A garbage amount decodes as absent rather than failing the whole list.
    assert_eq!(list[1].price_per_hour, None);
}

#[tokio::test]
async fn login_installs_the_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "op@smartbox.vn", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "user": {"user_id": 7, "name": "Op", "role_id": 1}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session = auth::login(&client, "op@smartbox.vn", "secret").await.unwrap();
    assert!(session.is_admin());

    let users = UserService::new(Arc::clone(&client));
    users.list().await.unwrap();
}

#[tokio::test]
async fn login_without_a_profile_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-123"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = auth::login(&client, "op@smartbox.vn", "secret").await.unwrap_err();
    assert_matches!(err, ApiError::AuthFailed(_));
    assert!(client.session().is_none());
}

#[tokio::test]
async fn logout_drops_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "user": {"user_id": 7, "name": "Op", "role_id": 2}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    auth::login(&client, "op@smartbox.vn", "secret").await.unwrap();
    assert!(client.session().is_some());
    auth::logout(&client);
    assert!(client.session().is_none());
}

#[tokio::test]
async fn expired_token_maps_to_session_expired() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rents"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})),
        )
        .mount(&server)
        .await;

    let rentals = RentalService::new(client_for(&server));
    let err = rentals.list().await.unwrap_err();
    assert_matches!(err, ApiError::SessionExpired);
    assert!(err.is_auth());
}

#[tokio::test]
async fn duplicate_name_maps_to_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sizes"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "size name already exists"
        })))
        .mount(&server)
        .await;

    let sizes = SizeService::new(client_for(&server));
    let payload = SizePayload {
        name: "M".to_string(),
        price_per_hour: dec!(5000),
        width_cm: 30.0,
        height_cm: 40.0,
        depth_cm: 50.0,
    };
    let err = sizes.create(&payload).await.unwrap_err();
    assert_matches!(err, ApiError::Conflict(msg) if msg == "size name already exists");
}

#[tokio::test]
async fn invalid_payloads_never_reach_the_network() {
    // No mocks mounted: a request hitting the server would 404 and the
    // error would not be a Validation one.
    let server = MockServer::start().await;
    let users = UserService::new(client_for(&server));
    let payload = UserPayload {
        name: "An".to_string(),
        phone_number: "12345".to_string(),
        email: "not-an-email".to_string(),
        password: "123".to_string(),
        role_id: Role::Customer,
        status: None,
    };
    let err = users.create(&payload).await.unwrap_err();
    assert_matches!(err, ApiError::Validation(_));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn lifecycle_transitions_use_bodyless_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/rents/9/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"rent_id": 9, "user_id": 2, "compartment_id": 3,
                     "status": 0, "total_cost": 36000}
        })))
        .mount(&server)
        .await;

    let rentals = RentalService::new(client_for(&server));
    let rental = rentals.complete(9).await.unwrap();
    assert_eq!(rental.rent_id, 9);
    assert!(!rental.is_active());
    assert_eq!(rental.total_cost, Some(dec!(36000)));
}

#[tokio::test]
async fn delete_ignores_the_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/sizes/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "message": "deleted"
        })))
        .mount(&server)
        .await;

    let sizes = SizeService::new(client_for(&server));
    sizes.delete(4).await.unwrap();
}

#[tokio::test]
async fn stats_fall_back_to_the_locker_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/locker/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/locker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"locker_id": 1, "code": "LK-01", "status": 1, "compartments": [
                {"compartment_id": 1, "status": 1},
                {"compartment_id": 2, "status": 0}
            ]},
            {"locker_id": 2, "code": "LK-02", "status": 0, "compartments": []}
        ])))
        .mount(&server)
        .await;

    let lockers = LockerService::new(client_for(&server));
    let stats = lockers.stats().await.unwrap();
    assert_eq!(stats.total_lockers, 2);
    assert_eq!(stats.active_lockers, 1);
    assert_eq!(stats.total_compartments, 2);
    assert_eq!(stats.available_compartments, 1);
    assert_eq!(stats.occupied_compartments, 1);
}

#[tokio::test]
async fn auth_failures_do_not_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/locker/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_string(""))
        .mount(&server)
        .await;

    let lockers = LockerService::new(client_for(&server));
    let err = lockers.stats().await.unwrap_err();
    assert_matches!(err, ApiError::SessionExpired);
}
