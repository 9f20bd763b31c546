//! Typed client for the auth API surface.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/auth/signup` | Initiate OTP-based registration |
//! | POST   | `/api/auth/login` | Exchange verified OTP for a token |
//! | GET    | `/api/auth/profile` | Fetch the logged-in user |
//! | PUT    | `/api/auth/profile` | Update the logged-in user |
//! | POST   | `/api/auth/resend-otp` | Re-send the login/signup OTP |
//!
//! `login` stores the issued bearer token in the shared [`TokenStore`];
//! `logout` clears it locally (the backend holds no server-side session).

use serde::{Deserialize, Serialize};

use adhikar_core::{OtpCode, Phone, Role};

use crate::error::ApiError;
use crate::http::{decode, transport, API_PREFIX};
use crate::session::TokenStore;

// -- Request/Response types matching the backend JSON -------------------------

/// Request to initiate signup for a phone number.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    /// The mobile number to register.
    pub phone: Phone,
    /// Requested role.
    pub role: Role,
}

/// Response to a signup request.
///
/// Fields use `#[serde(default)]` for resilience against schema evolution
/// in the live backend; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// Echoed OTP on development deployments; absent in production.
    #[serde(default)]
    pub otp: Option<String>,
}

/// Request to exchange a verified OTP for a session token.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// The mobile number being logged in.
    pub phone: Phone,
    /// The OTP the user received.
    pub otp: OtpCode,
}

/// Response to a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated requests.
    pub token: String,
    /// The logged-in user.
    pub user: UserProfile,
    /// Whether this phone completed signup but has no profile yet.
    #[serde(default)]
    pub is_new_user: Option<bool>,
}

/// A user as returned by the auth API.
///
/// Everything except the phone is optional: first-time users have a bare
/// record until they complete their profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier; shape varies across deployments.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Registered mobile number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Role wire value (`volunteer` / `leader`).
    #[serde(default)]
    pub role: Option<String>,
    /// Religion name.
    #[serde(default)]
    pub religion: Option<String>,
    /// Caste name.
    #[serde(default)]
    pub caste: Option<String>,
    /// Parliamentary constituency name.
    #[serde(default)]
    pub pc: Option<String>,
    /// Assembly constituency name.
    #[serde(default)]
    pub ac: Option<String>,
    /// Panchayat name.
    #[serde(default)]
    pub panchayat: Option<String>,
    /// Leader's phone number (volunteers only).
    #[serde(default)]
    pub leader_phone: Option<String>,
}

impl UserProfile {
    /// The role parsed into the domain enum, where recognized.
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| Role::parse(r).ok())
    }
}

/// Profile fields for a `PUT /auth/profile` update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Full name.
    pub name: String,
    /// Role wire value.
    pub role: Role,
    /// Religion name, if selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    /// Caste name, if selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caste: Option<String>,
    /// Parliamentary constituency, if selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pc: Option<String>,
    /// Assembly constituency, if selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<String>,
    /// Panchayat, if selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panchayat: Option<String>,
    /// Leader's phone (required for volunteers, validated upstream).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_phone: Option<Phone>,
}

/// Response carrying a user record.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    /// Status message, when the backend sends one.
    #[serde(default)]
    pub message: Option<String>,
    /// The current user record.
    pub user: UserProfile,
}

/// Response to an OTP resend.
#[derive(Debug, Clone, Deserialize)]
pub struct ResendOtpResponse {
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
}

// -- Client -------------------------------------------------------------------

/// Client for the auth API surface.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: url::Url,
    tokens: TokenStore,
}

impl AuthClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, tokens: TokenStore) -> Self {
        Self {
            http,
            base_url,
            tokens,
        }
    }

    /// Initiate signup: the backend issues an OTP to the phone.
    ///
    /// Calls `POST {base_url}/api/auth/signup`.
    pub async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let endpoint = "POST /auth/signup";
        let url = format!("{}{}/auth/signup", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// Exchange a verified OTP for a session token.
    ///
    /// Calls `POST {base_url}/api/auth/login` and stores the returned
    /// token in the shared [`TokenStore`] on success.
    pub async fn login(&self, phone: &Phone, otp: &OtpCode) -> Result<LoginResponse, ApiError> {
        let endpoint = "POST /auth/login";
        let url = format!("{}{}/auth/login", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .http
            .post(&url)
            .json(&LoginRequest {
                phone: phone.clone(),
                otp: otp.clone(),
            })
            .send()
            .await
            .map_err(transport(endpoint))?;

        let login: LoginResponse = decode(endpoint, resp, &self.tokens).await?;
        self.tokens.set(login.token.clone());
        Ok(login)
    }

    /// Fetch the logged-in user's profile.
    ///
    /// Calls `GET {base_url}/api/auth/profile` with the bearer token.
    pub async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        let endpoint = "GET /auth/profile";
        let url = format!("{}{}/auth/profile", self.base_url, API_PREFIX);

        let resp = self
            .tokens
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// Update the logged-in user's profile.
    ///
    /// Calls `PUT {base_url}/api/auth/profile` with the bearer token.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<ProfileResponse, ApiError> {
        let endpoint = "PUT /auth/profile";
        let url = format!("{}{}/auth/profile", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .tokens
            .authorize(self.http.put(&url).json(update))
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// Re-send the login OTP to a phone.
    ///
    /// Calls `POST {base_url}/api/auth/resend-otp`.
    pub async fn resend_otp(&self, phone: &Phone) -> Result<ResendOtpResponse, ApiError> {
        let endpoint = "POST /auth/resend-otp";
        let url = format!("{}{}/auth/resend-otp", self.base_url, API_PREFIX);
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

    /// Drop the local session. No backend call is made.
    pub fn logout(&self) {
        self.tokens.clear();
    }
}
