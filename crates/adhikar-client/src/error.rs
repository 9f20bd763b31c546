//! Backend client error types.
//!
//! The error taxonomy the rest of the stack keys off:
//!
//! - [`ApiError::Http`] and [`ApiError::Api`] are the remote-unavailable
//!   class: the backend was unreachable or answered non-2xx. Form state is
//!   preserved and retry is user-initiated.
//! - [`ApiError::Unauthorized`] is the only class that tears down the
//!   session; the token store is already cleared by the time the caller
//!   sees it.
//! - A failed fetch is never conflated with a legitimately empty result:
//!   empty lists arrive as `Ok(vec![])`, failures as `Err`.

/// Errors from backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, DNS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// Label of the endpoint that failed, e.g. `POST /auth/login`.
        endpoint: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status other than 401.
    #[error("backend {endpoint} returned {status}: {body}")]
    Api {
        /// Label of the endpoint that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// The backend rejected the session (401). The token store has been
    /// cleared; the caller must re-authenticate.
    #[error("session rejected by {endpoint}; login required")]
    Unauthorized {
        /// Label of the endpoint that rejected the session.
        endpoint: String,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// Label of the endpoint whose response failed to parse.
        endpoint: String,
        /// Underlying decode error.
        source: reqwest::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl ApiError {
    /// Whether this error means the backend was unreachable or unhealthy:
    /// the dismissible-banner, user-retries class.
    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Api { .. } | Self::Deserialization { .. })
    }

    /// Whether this error forces a session teardown.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The HTTP status, where one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }
}
