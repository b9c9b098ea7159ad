//! End-to-end tests for the session lifecycle against a mock server.
//!
//! Network-interaction guarantees (zero calls on local rejection, re-auth
//! strictly before mutation, store cleared on token rejection) are verified
//! with wiremock call-count expectations.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kidscare_client::{
    AuthorizedClient, AuthorizedError, ClientConfig, IdentityClient, LoginError,
    MemorySessionStore, PasswordChangeError, PasswordService, ProtectedRequest, ScreenSet,
    SessionStore, resolve_entry_screen,
};
use kidscare_core::{Credentials, Role, Session};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(&server.uri()).unwrap()
}

fn login_success_body() -> serde_json::Value {
    json!({
        "accessToken": "tok",
        "nicNo": "123",
        "userName": "alice",
        "userType": "PARENT",
    })
}

async fn stored_session(token: &str) -> Arc<MemorySessionStore> {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session::new(token, "123", "alice", Role::Parent).unwrap();
    store.save(&session).await.unwrap();
    store
}

#[tokio::test]
async fn login_success_yields_session_routed_to_parent_screens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"userName": "alice", "password": "pw1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = IdentityClient::new(config_for(&server));
    let session = client
        .login(&Credentials::new("alice", "pw1"))
        .await
        .unwrap();

    assert_eq!(session.role, Role::Parent);
    assert_eq!(session.access_token, "tok");

    let entry = resolve_entry_screen(&session).unwrap();
    assert_eq!(entry.screen_set, ScreenSet::Parent);
    assert_eq!(entry.user_name, "alice");
}

#[tokio::test]
async fn login_wrong_password_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let client = IdentityClient::new(config_for(&server));
    let err = client
        .login(&Credentials::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::InvalidCredentials));
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn login_response_missing_token_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nicNo": "123",
            "userName": "alice",
            "userType": "PARENT",
        })))
        .mount(&server)
        .await;

    let client = IdentityClient::new(config_for(&server));
    let err = client
        .login(&Credentials::new("alice", "pw1"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::MalformedResponse { .. }));
}

#[tokio::test]
async fn login_response_with_third_role_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "tok",
            "nicNo": "123",
            "userName": "alice",
            "userType": "ADMIN",
        })))
        .mount(&server)
        .await;

    let client = IdentityClient::new(config_for(&server));
    let err = client
        .login(&Credentials::new("alice", "pw1"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::MalformedResponse { message } if message.contains("ADMIN")));
}

#[tokio::test]
async fn login_against_dead_endpoint_is_unreachable() {
    // Nothing listens here.
    let config = ClientConfig::new("http://127.0.0.1:9").unwrap();
    let client = IdentityClient::new(config);
    let err = client
        .login(&Credentials::new("alice", "pw1"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::Unreachable { .. }));
}

#[tokio::test]
async fn login_server_error_is_not_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = IdentityClient::new(config_for(&server));
    let err = client
        .login(&Credentials::new("alice", "pw1"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::UnexpectedStatus { status } if status.as_u16() == 500));
}

#[tokio::test]
async fn same_password_rotation_issues_zero_network_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/change-password"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = PasswordService::new(config_for(&server));
    let err = service
        .change_password("alice", "pw1", "pw1")
        .await
        .unwrap_err();
    assert!(matches!(err, PasswordChangeError::SameAsCurrent));
}

#[tokio::test]
async fn failed_reauthentication_never_reaches_change_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/change-password"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = PasswordService::new(config_for(&server));
    let err = service
        .change_password("alice", "wrong", "pw2")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PasswordChangeError::ReauthenticationFailed(LoginError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn successful_rotation_revalidates_then_mutates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"userName": "alice", "password": "pw1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/change-password"))
        .and(body_json(json!({
            "userName": "alice",
            "password": "pw1",
            "newPassword": "pw2",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let service = PasswordService::new(config_for(&server));
    service.change_password("alice", "pw1", "pw2").await.unwrap();
}

#[tokio::test]
async fn rotation_rejected_by_change_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/change-password"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let service = PasswordService::new(config_for(&server));
    let err = service
        .change_password("alice", "pw1", "pw2")
        .await
        .unwrap_err();
    assert!(matches!(err, PasswordChangeError::Rejected { status } if status.as_u16() == 400));
}

#[tokio::test]
async fn execute_without_session_issues_zero_network_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/vaccines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let client = AuthorizedClient::new(config_for(&server), store);
    let err = client
        .execute(&ProtectedRequest::get("auth/vaccines"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthorizedError::NoSession));
}

#[tokio::test]
async fn token_rejection_clears_the_stored_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/vaccines"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let store = stored_session("stale-tok").await;
    let client = AuthorizedClient::new(config_for(&server), store.clone());
    let err = client
        .execute(&ProtectedRequest::get("auth/vaccines"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthorizedError::Unauthorized));
    assert_eq!(store.load().await, None);

    // With the session gone, the next call fails before the network.
    let err = client
        .execute(&ProtectedRequest::get("auth/vaccines"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthorizedError::NoSession));
}

#[tokio::test]
async fn execute_attaches_bearer_token_from_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/vaccines"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "v1",
            "name": "MMR",
            "details": "Measles, mumps and rubella",
            "dose": "1st dose",
            "route": "Subcutaneous",
            "date": "2025-03-14",
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let store = stored_session("tok").await;
    let client = AuthorizedClient::new(config_for(&server), store);
    let vaccines = client.vaccines().await.unwrap();
    assert_eq!(vaccines.len(), 1);
    assert_eq!(vaccines[0].name, "MMR");
}

#[tokio::test]
async fn execute_rereads_store_on_every_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/patients"))
        .and(header("Authorization", "Bearer first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/patients"))
        .and(header("Authorization", "Bearer second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = stored_session("first").await;
    let client = AuthorizedClient::new(config_for(&server), store.clone());
    client.patients().await.unwrap();

    // Replace the session; the next call must use the new token.
    let replacement = Session::new("second", "123", "alice", Role::Parent).unwrap();
    store.save(&replacement).await.unwrap();
    client.patients().await.unwrap();
}

#[tokio::test]
async fn patient_listing_decodes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Sam", "index": "C-104"},
            {"id": "p2", "name": "Maya", "index": "C-105"},
        ])))
        .mount(&server)
        .await;

    let store = stored_session("tok").await;
    let client = AuthorizedClient::new(config_for(&server), store);
    let patients = client.patients().await.unwrap();
    assert_eq!(patients.len(), 2);
    assert_eq!(patients[1].name, "Maya");
}

#[tokio::test]
async fn malformed_record_body_is_reported_as_such() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/vaccines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": "shape"})))
        .mount(&server)
        .await;

    let store = stored_session("tok").await;
    let client = AuthorizedClient::new(config_for(&server), store);
    let err = client.vaccines().await.unwrap_err();
    assert!(matches!(err, AuthorizedError::MalformedBody { .. }));
}
