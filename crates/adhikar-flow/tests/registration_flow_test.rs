//! End-to-end registration scenarios over a mocked backend.
//!
//! Drives the real client, resolver, validator, and flow together:
//! collect → verify (OTP or miss-call) → submit, plus the phone-edit and
//! AC-loading behaviors that cut across components.

use adhikar_client::beneficiaries::BeneficiaryRegistration;
use adhikar_client::{ApiClient, ApiConfig};
use adhikar_core::{Gender, OtpCode, Phone};
use adhikar_flow::{
    load_assembly_options, FlowState, MissCallVerifier, OtpVerifier, RegistrationFlow,
    VerificationMethod, VerificationOutcome, Verifier,
};
use adhikar_form::{CascadeResolver, FormKind, FormState};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> ApiClient {
    let config = ApiConfig::for_base_url(&mock_server.uri()).unwrap();
    ApiClient::new(config).unwrap()
}

fn filled_form() -> (FormState, CascadeResolver) {
    let mut resolver = CascadeResolver::new();
    resolver.set_religion("मुस्लिम");
    let category = resolver.category_options()[0].clone();
    resolver.set_category(&category).unwrap();
    let caste = resolver.caste_options()[0].clone();
    resolver.set_caste(&caste).unwrap();

    let form = FormState {
        name: "नसीम अख्तर".into(),
        age: "34".into(),
        gender: Some(Gender::Female),
        phone: "9876543220".into(),
        leader_phone: "9876543211".into(),
        ..FormState::default()
    };
    (form, resolver)
}

fn registration_from(form: &FormState, resolver: &CascadeResolver) -> BeneficiaryRegistration {
    let selection = resolver.selection();
    BeneficiaryRegistration {
        name: form.name.clone(),
        age: form.age.parse().unwrap(),
        gender: form.gender.unwrap(),
        phone: Phone::new(form.phone.clone()).unwrap(),
        religion: selection.religion.clone().unwrap(),
        category: selection.category.clone().unwrap(),
        caste: selection.caste.clone().unwrap(),
        voter_id_help: form.voter_id_help,
        congress_work: form.congress_work,
        leader_mobile: Phone::new(form.leader_phone.clone()).unwrap(),
        schemes: form.schemes.clone(),
    }
}

// ── OTP path ─────────────────────────────────────────────────────────

#[tokio::test]
async fn otp_registration_reaches_succeeded_with_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/verify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/initiate"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "registrationNumber": "REG-2025-000123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (form, resolver) = filled_form();
    let mut flow = RegistrationFlow::new(VerificationMethod::Otp);

    assert!(flow.submit(FormKind::Beneficiary, &form, &resolver).unwrap());
    assert_eq!(flow.state(), FlowState::Verifying);

    let verifier = Verifier::Otp(OtpVerifier::new(
        client.beneficiaries().clone(),
        client.auth().clone(),
        Phone::new(form.phone.clone()).unwrap(),
    ));
    let code = OtpCode::new("1234").unwrap();
    let outcome = flow.run_verification(&verifier, Some(&code)).await.unwrap();
    assert!(matches!(outcome, VerificationOutcome::Confirmed));
    assert_eq!(flow.state(), FlowState::Submitting);

    let registration = registration_from(&form, &resolver);
    flow.run_submission(client.beneficiaries(), &registration)
        .await
        .unwrap();

    assert_eq!(flow.state(), FlowState::Succeeded);
    let number = flow.registration_number().unwrap();
    assert!(!number.as_str().is_empty());
}

#[tokio::test]
async fn wrong_otp_returns_to_collecting_and_retry_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/verify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/verify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (form, resolver) = filled_form();
    let mut flow = RegistrationFlow::new(VerificationMethod::Otp);
    let verifier = Verifier::Otp(OtpVerifier::new(
        client.beneficiaries().clone(),
        client.auth().clone(),
        Phone::new(form.phone.clone()).unwrap(),
    ));

    flow.submit(FormKind::Beneficiary, &form, &resolver).unwrap();
    let wrong = OtpCode::new("0000").unwrap();
    let outcome = flow.run_verification(&verifier, Some(&wrong)).await.unwrap();
    assert!(matches!(outcome, VerificationOutcome::Rejected));
    assert_eq!(flow.state(), FlowState::Collecting);
    assert!(flow.banner().is_some());

    // The user resubmits the untouched form and verifies with the right
    // code.
    flow.submit(FormKind::Beneficiary, &form, &resolver).unwrap();
    let right = OtpCode::new("1234").unwrap();
    let outcome = flow.run_verification(&verifier, Some(&right)).await.unwrap();
    assert!(matches!(outcome, VerificationOutcome::Confirmed));
}

#[tokio::test]
async fn unreachable_backend_keeps_flow_in_verifying() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/verify"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (form, resolver) = filled_form();
    let mut flow = RegistrationFlow::new(VerificationMethod::Otp);
    let verifier = Verifier::Otp(OtpVerifier::new(
        client.beneficiaries().clone(),
        client.auth().clone(),
        Phone::new(form.phone.clone()).unwrap(),
    ));

    flow.submit(FormKind::Beneficiary, &form, &resolver).unwrap();
    let code = OtpCode::new("1234").unwrap();
    let outcome = flow.run_verification(&verifier, Some(&code)).await.unwrap();
    assert!(matches!(outcome, VerificationOutcome::Unreachable(_)));

    // Still verifying, banner showing, session intact: the user retries.
    assert_eq!(flow.state(), FlowState::Verifying);
    assert!(flow.banner().is_some());
    assert!(flow.verification().is_some());
}

// ── Miss-call path ───────────────────────────────────────────────────

#[tokio::test]
async fn miss_call_registration_reaches_succeeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/verify-miss-call"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "verified": true })),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/initiate"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "registrationNumber": "REG-2025-000456"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (form, resolver) = filled_form();
    let mut flow = RegistrationFlow::new(VerificationMethod::MissCall);
    let verifier = Verifier::MissCall(MissCallVerifier::new(
        client.beneficiaries().clone(),
        Phone::new(form.phone.clone()).unwrap(),
    ));

    flow.submit(FormKind::Beneficiary, &form, &resolver).unwrap();
    let outcome = flow.run_verification(&verifier, None).await.unwrap();
    assert!(matches!(outcome, VerificationOutcome::Confirmed));

    let registration = registration_from(&form, &resolver);
    flow.run_submission(client.beneficiaries(), &registration)
        .await
        .unwrap();
    assert_eq!(flow.state(), FlowState::Succeeded);
}

// ── Rejected submission ──────────────────────────────────────────────

#[tokio::test]
async fn rejected_submission_returns_to_collecting_then_phone_edit_forces_reverification() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/verify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/beneficiaries/initiate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "duplicate phone"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (mut form, resolver) = filled_form();
    let mut flow = RegistrationFlow::new(VerificationMethod::Otp);
    let verifier = Verifier::Otp(OtpVerifier::new(
        client.beneficiaries().clone(),
        client.auth().clone(),
        Phone::new(form.phone.clone()).unwrap(),
    ));

    flow.submit(FormKind::Beneficiary, &form, &resolver).unwrap();
    let code = OtpCode::new("1234").unwrap();
    flow.run_verification(&verifier, Some(&code)).await.unwrap();
    let registration = registration_from(&form, &resolver);
    flow.run_submission(client.beneficiaries(), &registration)
        .await
        .unwrap();

    assert_eq!(flow.state(), FlowState::Collecting);
    assert_eq!(flow.banner(), Some("duplicate phone"));
    assert!(flow.is_verified(), "verification survives a backend rejection");

    // Editing the phone invalidates the verification before the next
    // submit.
    form.phone = "9876543299".into();
    flow.phone_changed(&form.phone);
    assert!(!flow.is_verified());
    flow.submit(FormKind::Beneficiary, &form, &resolver).unwrap();
    assert_eq!(flow.state(), FlowState::Verifying);
}

// ── AC loading through the directory ─────────────────────────────────

#[tokio::test]
async fn load_assembly_options_populates_resolver() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reference/acs"))
        .and(query_param("pc", "पटना साहिब"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 181, "name": "कुम्हरार"},
            {"id": 182, "name": "फतुहा"}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let directory = client.directory();
    let mut resolver = CascadeResolver::new();

    let applied = load_assembly_options(&mut resolver, &directory, "पटना साहिब")
        .await
        .unwrap();
    assert!(applied);
    assert!(resolver.ac_enabled());
    resolver.set_ac("कुम्हरार").unwrap();
    assert_eq!(resolver.selection().ac.as_deref(), Some("कुम्हरार"));
}

#[tokio::test]
async fn load_assembly_options_surfaces_failure_distinctly_from_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reference/acs"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let directory = client.directory();
    let mut resolver = CascadeResolver::new();

    let result = load_assembly_options(&mut resolver, &directory, "पटना साहिब").await;
    assert!(result.is_err(), "a failed fetch must not read as empty options");
    // The field is re-enabled with no options; the banner is the
    // caller's job.
    assert!(!resolver.ac_pending());
    assert!(resolver.ac_options().is_empty());
}
