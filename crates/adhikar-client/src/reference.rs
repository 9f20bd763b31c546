//! Typed client for the reference-data API surface.
//!
//! Every endpoint returns an array of `{id|code, name}` entries. The
//! backend is inconsistent about the identifier key and its type across
//! deployments, so [`ReferenceEntry`] keeps it loose and the `name` is the
//! value the forms actually select on.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{decode, transport, API_PREFIX};
use crate::session::TokenStore;

/// One reference-data entry as returned by `/api/reference/*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Backend identifier; numeric on some deployments, string on others.
    #[serde(default, alias = "code")]
    pub id: Option<serde_json::Value>,
    /// Display name; the value submitted back to the backend.
    pub name: String,
}

/// Client for the reference-data API surface.
#[derive(Debug, Clone)]
pub struct ReferenceClient {
    http: reqwest::Client,
    base_url: url::Url,
    tokens: TokenStore,
}

impl ReferenceClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, tokens: TokenStore) -> Self {
        Self {
            http,
            base_url,
            tokens,
        }
    }

    async fn fetch(
        &self,
        endpoint: &str,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<ReferenceEntry>, ApiError> {
        let url = format!("{}{}/reference/{resource}", self.base_url, API_PREFIX);
        tracing::debug!(endpoint, "dispatching");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(transport(endpoint))?;
        decode(endpoint, resp, &self.tokens).await
    }

    /// List religions. Calls `GET /api/reference/religions`.
    pub async fn religions(&self) -> Result<Vec<ReferenceEntry>, ApiError> {
        self.fetch("GET /reference/religions", "religions", &[]).await
    }

    /// List categories, optionally scoped to a religion.
    /// Calls `GET /api/reference/categories`.
    pub async fn categories(&self, religion: Option<&str>) -> Result<Vec<ReferenceEntry>, ApiError> {
        let query: Vec<(&str, &str)> = religion.map(|r| ("religion", r)).into_iter().collect();
        self.fetch("GET /reference/categories", "categories", &query).await
    }

    /// List castes for a category. Calls `GET /api/reference/castes`.
    pub async fn castes(&self, category: &str) -> Result<Vec<ReferenceEntry>, ApiError> {
        self.fetch("GET /reference/castes", "castes", &[("category", category)])
            .await
    }

    /// List parliamentary constituencies. Calls `GET /api/reference/pcs`.
    pub async fn pcs(&self) -> Result<Vec<ReferenceEntry>, ApiError> {
        self.fetch("GET /reference/pcs", "pcs", &[]).await
    }

    /// List assembly constituencies for a PC.
    /// Calls `GET /api/reference/acs?pc={pc}`.
    pub async fn acs(&self, pc: &str) -> Result<Vec<ReferenceEntry>, ApiError> {
        self.fetch("GET /reference/acs", "acs", &[("pc", pc)]).await
    }

    /// List panchayats, optionally scoped to a state.
    /// Calls `GET /api/reference/panchayats`.
    pub async fn panchayats(&self, state: Option<&str>) -> Result<Vec<ReferenceEntry>, ApiError> {
        let query: Vec<(&str, &str)> = state.map(|s| ("state", s)).into_iter().collect();
        self.fetch("GET /reference/panchayats", "panchayats", &query).await
    }

    /// List welfare schemes. Calls `GET /api/reference/schemes`.
    pub async fn schemes(&self) -> Result<Vec<ReferenceEntry>, ApiError> {
        self.fetch("GET /reference/schemes", "schemes", &[]).await
    }
}
