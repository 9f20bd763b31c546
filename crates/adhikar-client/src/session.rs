//! Bearer-token session store.
//!
//! One store is shared by all sub-clients. The token lives in
//! [`zeroize::Zeroizing`] so it is wiped from memory when replaced or
//! dropped, and the `Debug` impl redacts it.

use std::sync::Arc;

use parking_lot::RwLock;
use zeroize::Zeroizing;

/// Shared holder for the backend bearer token.
///
/// Cloning is cheap and all clones see the same token. Absence of a token
/// means requests go out on the unauthenticated path.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<Zeroizing<String>>>>,
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token, replacing (and zeroizing) any previous one.
    pub fn set(&self, token: impl Into<String>) {
        *self.inner.write() = Some(Zeroizing::new(token.into()));
    }

    /// Clear the token. Called on logout and on any 401 response.
    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    /// Whether a session token is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Attach the bearer token to a request, if one is present.
    pub fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.inner.read().as_ref() {
            Some(token) => req.bearer_auth(token.as_str()),
            None => req,
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field(
                "token",
                &if self.is_authenticated() { "[REDACTED]" } else { "[none]" },
            )
            .finish()
    }
}
