#![deny(missing_docs)]

//! # adhikar-flow -- The Multi-Step Registration Flow
//!
//! The controller that sequences a registration from collection through
//! verification to submission:
//!
//! ```text
//! Collecting ──submit(valid)──▶ Verifying ──ok──▶ Submitting ──accept──▶ Succeeded
//!     ▲  ▲                         │                  │
//!     │  └───── verification fails ┘                  │
//!     └──────────── remote rejects ───────────────────┘      (Failed: abandoned)
//! ```
//!
//! Verification is a pluggable capability: OTP code entry or miss-call
//! confirmation, both backed by the backend client. The flow only needs
//! `verify` and `resend`; it does not care which strategy is active.
//!
//! A failed verification or a rejected submission returns to
//! `Collecting` with the error surfaced; entered form data is never
//! cleared by an error path. Editing the phone invalidates any existing
//! verification, because a verification is bound to the exact phone value
//! that was verified.

pub mod cooldown;
pub mod flow;
pub mod session;
pub mod verify;

pub use cooldown::{ResendCooldown, RESEND_COOLDOWN_SECS};
pub use flow::{FlowError, FlowState, RegistrationFlow, TransitionRecord, VerificationOutcome};
pub use session::VerificationSession;
pub use verify::{MissCallVerifier, OtpVerifier, VerificationMethod, Verifier};

use adhikar_client::{ApiError, RemoteDirectory};
use adhikar_form::CascadeResolver;

/// Select a PC on the resolver and load its AC options from the
/// directory, honoring the resolver's stale-response policy.
///
/// Returns `Ok(true)` if the fetched list was applied, `Ok(false)` if a
/// later PC edit superseded this fetch while it was in flight. On fetch
/// failure the AC field is re-enabled with no options and the error is
/// returned for the caller to surface; a failed fetch is not an empty
/// option list.
pub async fn load_assembly_options(
    resolver: &mut CascadeResolver,
    directory: &RemoteDirectory,
    pc: &str,
) -> Result<bool, ApiError> {
    let fetch = resolver.set_pc(pc);
    match directory.list_assembly_constituencies(&fetch.pc).await {
        Ok(entries) => {
            let names = entries.into_iter().map(|entry| entry.name).collect();
            Ok(resolver.apply_ac_options(&fetch, names))
        }
        Err(err) => {
            resolver.ac_fetch_failed(&fetch);
            Err(err)
        }
    }
}
