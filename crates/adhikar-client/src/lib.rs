//! # adhikar-client -- Typed Rust client for the Adhikar registration backend
//!
//! Provides ergonomic, typed access to the three backend surfaces:
//! - **Auth** via `/api/auth/*` (phone+OTP signup/login, profile)
//! - **Reference data** via `/api/reference/*` (religions, castes, PCs,
//!   ACs, panchayats, schemes)
//! - **Beneficiaries** via `/api/beneficiaries/*` (initiate, OTP and
//!   miss-call verification, direct registration, listing)
//!
//! Plus the [`RemoteDirectory`], a per-key caching accessor over the
//! constituency lists, which the cascade resolver consumes.
//!
//! ## Session model
//!
//! A [`TokenStore`] holds the bearer token for the lifetime of the client.
//! Login writes it, logout clears it, and any 401 response clears it as
//! well; an expired session never lingers. All sub-clients share the one
//! store, so an authenticated call made after teardown goes out
//! unauthenticated rather than with a dead token.

pub mod auth;
pub mod beneficiaries;
pub mod config;
pub mod directory;
pub mod error;
pub mod reference;
pub mod session;

pub(crate) mod http;

pub use config::ApiConfig;
pub use directory::RemoteDirectory;
pub use error::ApiError;
pub use reference::ReferenceEntry;
pub use session::TokenStore;

use std::time::Duration;

/// Top-level backend client. Holds sub-clients for each API surface over
/// one shared HTTP connection pool and token store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    auth: auth::AuthClient,
    reference: reference::ReferenceClient,
    beneficiaries: beneficiaries::BeneficiaryClient,
    tokens: TokenStore,
}

impl ApiClient {
    /// Create a new backend client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let tokens = TokenStore::new();
        Ok(Self {
            auth: auth::AuthClient::new(http.clone(), config.base_url.clone(), tokens.clone()),
            reference: reference::ReferenceClient::new(
                http.clone(),
                config.base_url.clone(),
                tokens.clone(),
            ),
            beneficiaries: beneficiaries::BeneficiaryClient::new(
                http,
                config.base_url,
                tokens.clone(),
            ),
            tokens,
        })
    }

    /// Access the auth client.
    pub fn auth(&self) -> &auth::AuthClient {
        &self.auth
    }

    /// Access the reference-data client.
    pub fn reference(&self) -> &reference::ReferenceClient {
        &self.reference
    }

    /// Access the beneficiaries client.
    pub fn beneficiaries(&self) -> &beneficiaries::BeneficiaryClient {
        &self.beneficiaries
    }

    /// Access the shared token store.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Build a caching constituency directory over this client's
    /// reference surface.
    pub fn directory(&self) -> RemoteDirectory {
        RemoteDirectory::new(self.reference.clone())
    }
}
