//! Typed client for the beneficiary API surface.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/beneficiaries/initiate` | Register, pending verification |
//! | POST   | `/api/beneficiaries/verify` | Confirm via OTP code |
//! | POST   | `/api/beneficiaries/register` | Register directly, no OTP |
//! | POST   | `/api/beneficiaries/verify-miss-call` | Confirm via miss-call |
//! | GET    | `/api/beneficiaries` | List beneficiaries created by this user |

use serde::{Deserialize, Serialize};

use adhikar_core::{Gender, Phone};

use crate::error::ApiError;
use crate::http::{decode, transport, API_PREFIX};
use crate::session::TokenStore;

// -- Request/Response types matching the backend JSON -------------------------

/// A beneficiary registration as submitted by the schemes form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryRegistration {
    /// Beneficiary's full name.
    pub name: String,
    /// Age in years (1-100, validated upstream).
    pub age: u8,
    /// Gender wire value.
    pub gender: Gender,
    /// Beneficiary's mobile number.
    pub phone: Phone,
    /// Religion name from the catalog.
    pub religion: String,
    /// Category name from the religion's dataset.
    pub category: String,
    /// Caste name from the category's list.
    pub caste: String,
    /// Whether the beneficiary wants voter-ID registration help.
    pub voter_id_help: bool,
    /// Whether the beneficiary wants to work at panchayat/ward level.
    pub congress_work: bool,
    /// The registering volunteer's leader phone, auto-filled from profile.
    pub leader_mobile: Phone,
    /// Scheme names the beneficiary enrolls in.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
}

/// Response to an initiate call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateResponse {
    /// Whether the registration was accepted.
    #[serde(default)]
    pub success: bool,
    /// Issued registration number, when accepted.
    #[serde(default)]
    pub registration_number: Option<String>,
    /// Status message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Request to confirm a pending registration with an OTP code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// The beneficiary's phone.
    pub phone: Phone,
    /// The 4-digit code the beneficiary received.
    pub verification_code: String,
}

/// Response to an OTP verification call.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    /// Whether the code was accepted.
    #[serde(default)]
    pub success: bool,
    /// The verified beneficiary record, when accepted.
    #[serde(default)]
    pub beneficiary: Option<serde_json::Value>,
}

/// Response to a direct (no-OTP) registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Issued registration number.
    pub registration_number: String,
}

/// Response to a miss-call verification poll.
#[derive(Debug, Clone, Deserialize)]
pub struct MissCallResponse {
    /// Whether the backend has received the call.
    #[serde(default)]
    pub verified: bool,
    /// Status message.
    #[serde(default)]
    pub message: Option<String>,
}

/// A beneficiary as returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryRecord {
    /// Beneficiary's name.
    #[serde(default)]
    pub name: Option<String>,
    /// Beneficiary's phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether verification completed.
    #[serde(default)]
    pub verified: bool,
    /// Registration number, if issued.
    #[serde(default)]
    pub registration_number: Option<String>,
    /// Name of the volunteer who registered this beneficiary.
    #[serde(default)]
    pub creator_name: Option<String>,
    /// Phone of the volunteer who registered this beneficiary.
    #[serde(default)]
    pub creator_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    beneficiaries: Vec<BeneficiaryRecord>,
}

// -- Client -------------------------------------------------------------------

/// Client for the beneficiary API surface.
#[derive(Debug, Clone)]
pub struct BeneficiaryClient {
    http: reqwest::Client,
    base_url: url::Url,
    tokens: TokenStore,
}

impl BeneficiaryClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, tokens: TokenStore) -> Self {
        Self {
            http,
            base_url,
            tokens,
        }
    }

    /// Register a beneficiary, leaving it pending phone verification.
    ///
    /// Calls `POST {base_url}/api/beneficiaries/initiate` with the bearer
    /// token.
    pub async fn initiate(
        &self,
        registration: &BeneficiaryRegistration,
    ) -> Result<InitiateResponse, ApiError> {
        let endpoint = "POST /beneficiaries/initiate";
        let url = format!("{}{}/beneficiaries/initiate", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .tokens
            .authorize(self.http.post(&url).json(registration))
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// Confirm a pending registration with the OTP the beneficiary received.
    ///
    /// Calls `POST {base_url}/api/beneficiaries/verify`.
    pub async fn verify(&self, phone: &Phone, code: &str) -> Result<VerifyResponse, ApiError> {
        let endpoint = "POST /beneficiaries/verify";
        let url = format!("{}{}/beneficiaries/verify", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .http
            .post(&url)
            .json(&VerifyRequest {
                phone: phone.clone(),
                verification_code: code.to_string(),
            })
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// Register a beneficiary directly, without a verification step.
    ///
    /// Calls `POST {base_url}/api/beneficiaries/register` with the bearer
    /// token.
    pub async fn register(
        &self,
        registration: &BeneficiaryRegistration,
    ) -> Result<RegisterResponse, ApiError> {
        let endpoint = "POST /beneficiaries/register";
        let url = format!("{}{}/beneficiaries/register", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .tokens
            .authorize(self.http.post(&url).json(registration))
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// Ask the backend whether the verification miss-call has been received.
    ///
    /// Calls `POST {base_url}/api/beneficiaries/verify-miss-call`.
    pub async fn verify_miss_call(&self, phone: &Phone) -> Result<MissCallResponse, ApiError> {
        let endpoint = "POST /beneficiaries/verify-miss-call";
        let url = format!("{}{}/beneficiaries/verify-miss-call", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "phone": phone }))
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// List beneficiaries registered by the logged-in user.
    ///
    /// Calls `GET {base_url}/api/beneficiaries` with the bearer token.
    pub async fn list(&self) -> Result<Vec<BeneficiaryRecord>, ApiError> {
        let endpoint = "GET /beneficiaries";
        let url = format!("{}{}/beneficiaries", self.base_url, API_PREFIX);

        let resp = self
            .tokens
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(transport(endpoint))?;
        let list: ListResponse = decode(endpoint, resp, &self.tokens).await?;
        Ok(list.beneficiaries)
    }
}
