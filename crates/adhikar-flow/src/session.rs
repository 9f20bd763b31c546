//! Verification sessions.
//!
//! A session binds a verification attempt to the exact phone value being
//! verified. It is created when verification is initiated and cleared on
//! successful submission or on any phone change; a stale verification
//! must never be reusable for a different phone number.

use serde::{Deserialize, Serialize};

use adhikar_core::{Phone, Timestamp};

use crate::verify::VerificationMethod;

/// How long a verification stays usable once initiated.
const SESSION_VALIDITY_SECS: i64 = 300;

/// One verification attempt bound to a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    /// The phone this verification is bound to.
    pub phone: Phone,
    /// The strategy in use.
    pub method: VerificationMethod,
    /// Whether the backend has confirmed the verification.
    pub verified: bool,
    /// When the session stops being usable.
    pub expires_at: Timestamp,
}

impl VerificationSession {
    /// Begin an unverified session for a phone.
    pub fn begin(phone: Phone, method: VerificationMethod) -> Self {
        Self {
            phone,
            method,
            verified: false,
            expires_at: Timestamp::now().plus_seconds(SESSION_VALIDITY_SECS),
        }
    }

    /// Record backend confirmation.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }

    /// Whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_past()
    }

    /// Whether this session's verification can stand in for `phone`:
    /// same number, confirmed, and not expired.
    pub fn covers(&self, phone: &Phone) -> bool {
        self.verified && !self.is_expired() && &self.phone == phone
    }
}
