//! Shared response handling for all sub-clients.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::session::TokenStore;

/// API version path segment joined onto the configured base URL.
pub(crate) const API_PREFIX: &str = "api";

/// Decode a response, mapping status classes onto [`ApiError`].
///
/// A 401 clears the token store before returning; session teardown is
/// the one side effect an error path is allowed.
pub(crate) async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
    tokens: &TokenStore,
) -> Result<T, ApiError> {
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        tracing::warn!(endpoint, "session rejected; clearing token");
        tokens.clear();
        return Err(ApiError::Unauthorized {
            endpoint: endpoint.to_string(),
        });
    }

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(endpoint, status, "backend returned error status");
        return Err(ApiError::Api {
            endpoint: endpoint.to_string(),
            status,
            body,
        });
    }

    resp.json().await.map_err(|e| ApiError::Deserialization {
        endpoint: endpoint.to_string(),
        source: e,
    })
}

/// Map a transport failure onto [`ApiError::Http`] with its endpoint label.
pub(crate) fn transport(endpoint: &str) -> impl FnOnce(reqwest::Error) -> ApiError + '_ {
    move |source| ApiError::Http {
        endpoint: endpoint.to_string(),
        source,
    }
}
