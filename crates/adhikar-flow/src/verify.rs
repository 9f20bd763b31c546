//! Verification strategies.
//!
//! Two interchangeable ways to confirm a beneficiary's phone:
//!
//! - **OTP**: the backend texts a 4-digit code, the user types it back,
//!   `POST /beneficiaries/verify` confirms it.
//! - **Miss-call**: the user places a call to a published number and the
//!   client polls `POST /beneficiaries/verify-miss-call` until the
//!   backend reports the call received.
//!
//! The flow needs only `verify` and `resend`; [`Verifier`] dispatches to
//! whichever strategy the deployment uses. Both coexist; the backend
//! exposes both endpoints and neither supersedes the other.

use serde::{Deserialize, Serialize};

use adhikar_client::auth::AuthClient;
use adhikar_client::beneficiaries::BeneficiaryClient;
use adhikar_client::ApiError;
use adhikar_core::{OtpCode, Phone};

/// Which verification strategy a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationMethod {
    /// 4-digit code sent by SMS.
    Otp,
    /// Confirmation of a call to a published number.
    MissCall,
}

impl std::fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Otp => "otp",
            Self::MissCall => "miss-call",
        };
        f.write_str(s)
    }
}

/// OTP-code verification over the backend.
#[derive(Debug, Clone)]
pub struct OtpVerifier {
    beneficiaries: BeneficiaryClient,
    auth: AuthClient,
    phone: Phone,
}

impl OtpVerifier {
    /// A verifier for one phone number.
    pub fn new(beneficiaries: BeneficiaryClient, auth: AuthClient, phone: Phone) -> Self {
        Self {
            beneficiaries,
            auth,
            phone,
        }
    }

    /// Ask the backend to confirm a code the user entered.
    pub async fn verify(&self, code: &OtpCode) -> Result<bool, ApiError> {
        let resp = self.beneficiaries.verify(&self.phone, code.as_str()).await?;
        Ok(resp.success)
    }

    /// Ask the backend to send a fresh code.
    pub async fn resend(&self) -> Result<(), ApiError> {
        self.auth.resend_otp(&self.phone).await.map(|_| ())
    }
}

/// Miss-call verification over the backend.
#[derive(Debug, Clone)]
pub struct MissCallVerifier {
    beneficiaries: BeneficiaryClient,
    phone: Phone,
}

impl MissCallVerifier {
    /// A verifier for one phone number.
    pub fn new(beneficiaries: BeneficiaryClient, phone: Phone) -> Self {
        Self {
            beneficiaries,
            phone,
        }
    }

    /// Ask the backend whether the call has been received.
    pub async fn verify(&self) -> Result<bool, ApiError> {
        let resp = self.beneficiaries.verify_miss_call(&self.phone).await?;
        Ok(resp.verified)
    }
}

/// A verification capability, agnostic to strategy.
#[derive(Debug, Clone)]
pub enum Verifier {
    /// OTP-code entry.
    Otp(OtpVerifier),
    /// Miss-call confirmation.
    MissCall(MissCallVerifier),
}

impl Verifier {
    /// The strategy this verifier implements.
    pub fn method(&self) -> VerificationMethod {
        match self {
            Self::Otp(_) => VerificationMethod::Otp,
            Self::MissCall(_) => VerificationMethod::MissCall,
        }
    }

    /// Attempt verification. The OTP strategy needs the entered code;
    /// without one it reports unverified instead of calling the backend.
    pub async fn verify(&self, code: Option<&OtpCode>) -> Result<bool, ApiError> {
        match self {
            Self::Otp(v) => match code {
                Some(code) => v.verify(code).await,
                None => {
                    tracing::debug!("otp verification attempted without a code");
                    Ok(false)
                }
            },
            Self::MissCall(v) => v.verify().await,
        }
    }

    /// Re-initiate verification: resend the OTP, or re-poll the
    /// miss-call status. Callers gate this behind a
    /// [`crate::ResendCooldown`].
    pub async fn resend(&self) -> Result<(), ApiError> {
        match self {
            Self::Otp(v) => v.resend().await,
            Self::MissCall(v) => v.verify().await.map(|_| ()),
        }
    }
}
