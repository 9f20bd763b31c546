//! Contract tests for AuthClient against the backend auth surface.
//!
//! Uses wiremock to simulate `/api/auth/*`. Request and response shapes
//! mirror the live backend JSON.

use adhikar_client::auth::{ProfileUpdate, SignupRequest};
use adhikar_client::{ApiClient, ApiConfig, ApiError};
use adhikar_core::{OtpCode, Phone, Role};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> ApiClient {
    let config = ApiConfig::for_base_url(&mock_server.uri()).unwrap();
    ApiClient::new(config).unwrap()
}

fn phone() -> Phone {
    Phone::new("9876543210").unwrap()
}

// ── POST /api/auth/signup ────────────────────────────────────────────

#[tokio::test]
async fn signup_sends_phone_and_role() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(serde_json::json!({
            "phone": "9876543210",
            "role": "volunteer"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "OTP sent",
            "otp": "1234"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client
        .auth()
        .signup(&SignupRequest {
            phone: phone(),
            role: Role::Volunteer,
        })
        .await
        .unwrap();

    assert_eq!(resp.message, "OTP sent");
    assert_eq!(resp.otp.as_deref(), Some("1234"));
}

#[tokio::test]
async fn signup_surfaces_backend_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string(r#"{"message":"phone already registered"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .auth()
        .signup(&SignupRequest {
            phone: phone(),
            role: Role::Leader,
        })
        .await;

    match result.unwrap_err() {
        ApiError::Api { status, body, .. } => {
            assert_eq!(status, 409);
            assert!(body.contains("already registered"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── POST /api/auth/login ─────────────────────────────────────────────

#[tokio::test]
async fn login_stores_token_for_subsequent_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "session-token-1",
            "user": { "phone": "9876543210", "role": "volunteer" },
            "isNewUser": false
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", "Bearer session-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": { "name": "Asha Devi", "phone": "9876543210", "role": "volunteer" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(!client.tokens().is_authenticated());

    let login = client
        .auth()
        .login(&phone(), &OtpCode::new("1234").unwrap())
        .await
        .unwrap();
    assert_eq!(login.is_new_user, Some(false));
    assert_eq!(login.user.parsed_role(), Some(Role::Volunteer));
    assert!(client.tokens().is_authenticated());

    let profile = client.auth().profile().await.unwrap();
    assert_eq!(profile.user.name.as_deref(), Some("Asha Devi"));
}

#[tokio::test]
async fn login_rejection_leaves_store_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"message":"invalid OTP"}"#))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .auth()
        .login(&phone(), &OtpCode::new("0000").unwrap())
        .await;

    assert!(result.is_err());
    assert!(!client.tokens().is_authenticated());
}

// ── GET /api/auth/profile ────────────────────────────────────────────

#[tokio::test]
async fn profile_401_tears_down_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.tokens().set("expired-token");

    let result = client.auth().profile().await;
    match result.unwrap_err() {
        ApiError::Unauthorized { .. } => {}
        other => panic!("expected Unauthorized, got: {other:?}"),
    }
    // The dead token must not linger.
    assert!(!client.tokens().is_authenticated());
}

#[tokio::test]
async fn server_error_preserves_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.tokens().set("still-good");

    let err = client.auth().profile().await.unwrap_err();
    assert!(err.is_remote_unavailable());
    assert!(client.tokens().is_authenticated());
}

// ── PUT /api/auth/profile ────────────────────────────────────────────

#[tokio::test]
async fn update_profile_sends_camel_case_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/auth/profile"))
        .and(body_json(serde_json::json!({
            "name": "Asha Devi",
            "role": "volunteer",
            "religion": "हिंदू",
            "caste": "यादव",
            "pc": "पटना साहिब",
            "ac": "कुम्हरार",
            "panchayat": "सबलपुर",
            "leaderPhone": "9876543211"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "profile updated",
            "user": { "name": "Asha Devi", "leaderPhone": "9876543211" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client
        .auth()
        .update_profile(&ProfileUpdate {
            name: "Asha Devi".into(),
            role: Role::Volunteer,
            religion: Some("हिंदू".into()),
            caste: Some("यादव".into()),
            pc: Some("पटना साहिब".into()),
            ac: Some("कुम्हरार".into()),
            panchayat: Some("सबलपुर".into()),
            leader_phone: Some(Phone::new("9876543211").unwrap()),
        })
        .await
        .unwrap();

    assert_eq!(resp.user.leader_phone.as_deref(), Some("9876543211"));
}

// ── POST /api/auth/resend-otp ────────────────────────────────────────

#[tokio::test]
async fn resend_otp_posts_phone() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/resend-otp"))
        .and(body_json(serde_json::json!({ "phone": "9876543210" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "OTP resent" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.auth().resend_otp(&phone()).await.unwrap();
    assert_eq!(resp.message, "OTP resent");
}

// ── Session lifecycle ────────────────────────────────────────────────

#[tokio::test]
async fn logout_clears_token_locally() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    client.tokens().set("some-token");
    client.auth().logout();
    assert!(!client.tokens().is_authenticated());
}
