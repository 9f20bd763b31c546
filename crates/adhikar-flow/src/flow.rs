//! The registration flow state machine.
//!
//! ## States
//!
//! ```text
//! Collecting ──▶ Verifying ──▶ Submitting ──▶ Succeeded (terminal)
//!     ▲ ▲            │             │
//!     │ └────────────┘             │          Failed (terminal, abandoned)
//!     └────────────────────────────┘
//! ```
//!
//! The machine holds no form fields of its own; the form data stays with
//! the caller, so no transition can lose it. Errors attach to the machine
//! as field errors (validation) or a banner (remote), and rejected
//! submissions land back in `Collecting` with everything the user typed
//! intact.

use serde::Serialize;
use thiserror::Error;

use adhikar_client::beneficiaries::{BeneficiaryClient, BeneficiaryRegistration};
use adhikar_client::ApiError;
use adhikar_core::{Phone, RegistrationNumber, Timestamp};
use adhikar_form::{validate, CascadeResolver, FieldError, FormKind, FormState};

use crate::session::VerificationSession;
use crate::verify::{VerificationMethod, Verifier};

// ─── Flow State ──────────────────────────────────────────────────────

/// The lifecycle state of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlowState {
    /// Collecting form input; submission has not passed validation yet.
    Collecting,
    /// Form accepted; waiting for phone verification.
    Verifying,
    /// Verification confirmed; submission to the backend in progress.
    Submitting,
    /// The backend accepted the registration (terminal).
    Succeeded,
    /// The attempt was abandoned (terminal).
    Failed,
}

impl FlowState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Collecting => "COLLECTING",
            Self::Verifying => "VERIFYING",
            Self::Submitting => "SUBMITTING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from flow transitions.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Attempted transition is not valid from the current state.
    #[error("invalid flow transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },

    /// The flow is in a terminal state.
    #[error("flow is in terminal state {state}")]
    TerminalState {
        /// The terminal state.
        state: String,
    },
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of one flow state transition.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRecord {
    /// State before the transition.
    pub from_state: FlowState,
    /// State after the transition.
    pub to_state: FlowState,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// What drove the transition.
    pub note: String,
}

/// Outcome of one driven verification attempt.
#[derive(Debug)]
pub enum VerificationOutcome {
    /// The backend confirmed; the flow advanced to `Submitting`.
    Confirmed,
    /// The backend rejected; the flow returned to `Collecting`.
    Rejected,
    /// The backend was unreachable; the flow stayed in `Verifying` and
    /// the attempt can be retried.
    Unreachable(ApiError),
}

// ─── Registration Flow ───────────────────────────────────────────────

/// The multi-step registration controller.
///
/// Sequences collect → verify → submit, mapping verification and backend
/// outcomes onto UI-visible state: field errors, a page-level banner, and
/// the registration number on success.
#[derive(Debug)]
pub struct RegistrationFlow {
    state: FlowState,
    method: VerificationMethod,
    field_errors: Vec<FieldError>,
    banner: Option<String>,
    registration_number: Option<RegistrationNumber>,
    session: Option<VerificationSession>,
    transitions: Vec<TransitionRecord>,
}

impl RegistrationFlow {
    /// A new flow in `Collecting`, using the given verification strategy.
    pub fn new(method: VerificationMethod) -> Self {
        Self {
            state: FlowState::Collecting,
            method,
            field_errors: Vec::new(),
            banner: None,
            registration_number: None,
            session: None,
            transitions: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Field errors from the last rejected submission attempt.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Page-level error banner, if one is showing.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// The registration number, once the flow has succeeded.
    pub fn registration_number(&self) -> Option<&RegistrationNumber> {
        self.registration_number.as_ref()
    }

    /// The active verification session, if any.
    pub fn verification(&self) -> Option<&VerificationSession> {
        self.session.as_ref()
    }

    /// Whether the current phone is covered by a confirmed verification.
    pub fn is_verified(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.verified && !s.is_expired())
    }

    /// Ordered log of all state transitions.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Submit the form (COLLECTING → VERIFYING, or straight to
    /// SUBMITTING when a confirmed verification already covers the
    /// phone).
    ///
    /// With validation errors the flow stays in `Collecting`, the errors
    /// attach to the machine, and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] if called outside `Collecting`.
    pub fn submit(
        &mut self,
        kind: FormKind,
        form: &FormState,
        resolver: &CascadeResolver,
    ) -> Result<bool, FlowError> {
        self.require_state(FlowState::Collecting, "VERIFYING")?;

        let mut errors = validate(kind, form, resolver);
        let phone = match Phone::new(form.phone.clone()) {
            Ok(phone) => Some(phone),
            Err(_) => {
                // The phone rule already fired for forms that require it;
                // a flow submission always needs a verifiable phone.
                if !errors.iter().any(|e| e.field == adhikar_form::FormField::Phone) {
                    errors.push(FieldError {
                        field: adhikar_form::FormField::Phone,
                        message: "Please enter a valid 10-digit phone number".into(),
                    });
                }
                None
            }
        };

        if !errors.is_empty() {
            self.field_errors = errors;
            return Ok(false);
        }
        let Some(phone) = phone else {
            return Ok(false);
        };

        self.field_errors.clear();
        self.banner = None;

        if self.session.as_ref().is_some_and(|s| s.covers(&phone)) {
            self.do_transition(FlowState::Submitting, "verification already covers this phone");
            return Ok(true);
        }

        self.session = Some(VerificationSession::begin(phone, self.method));
        self.do_transition(FlowState::Verifying, "form validated, verification initiated");
        Ok(true)
    }

    /// Record backend confirmation (VERIFYING → SUBMITTING).
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] if called outside `Verifying`.
    pub fn verification_succeeded(&mut self) -> Result<(), FlowError> {
        self.require_state(FlowState::Verifying, "SUBMITTING")?;
        if let Some(session) = self.session.as_mut() {
            session.mark_verified();
        }
        self.do_transition(FlowState::Submitting, "verification confirmed");
        Ok(())
    }

    /// Record a verification rejection (VERIFYING → COLLECTING).
    ///
    /// The session stays bound to the phone so the user can retry or
    /// resend; the form data is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] if called outside `Verifying`.
    pub fn verification_failed(&mut self, reason: &str) -> Result<(), FlowError> {
        self.require_state(FlowState::Verifying, "COLLECTING")?;
        self.banner = Some(reason.to_string());
        self.do_transition(FlowState::Collecting, "verification rejected");
        Ok(())
    }

    /// Record backend acceptance (SUBMITTING → SUCCEEDED).
    ///
    /// Clears the verification session; it has served its purpose and
    /// must not cover a later registration.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] if called outside `Submitting`.
    pub fn submission_accepted(&mut self, number: RegistrationNumber) -> Result<(), FlowError> {
        self.require_state(FlowState::Submitting, "SUCCEEDED")?;
        self.registration_number = Some(number);
        self.session = None;
        self.do_transition(FlowState::Succeeded, "registration accepted");
        Ok(())
    }

    /// Record a backend rejection (SUBMITTING → COLLECTING).
    ///
    /// The error is surfaced as a banner and the form data is retained so
    /// the user does not re-enter everything.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] if called outside `Submitting`.
    pub fn submission_rejected(&mut self, reason: &str) -> Result<(), FlowError> {
        self.require_state(FlowState::Submitting, "COLLECTING")?;
        self.banner = Some(reason.to_string());
        self.do_transition(FlowState::Collecting, "submission rejected");
        Ok(())
    }

    /// React to an edit of the phone field.
    ///
    /// A verification is bound to the exact phone value that was
    /// verified: any change to a different value drops the session, and
    /// if the flow was mid-verification it returns to `Collecting`.
    pub fn phone_changed(&mut self, new_phone: &str) {
        if self.state.is_terminal() {
            return;
        }
        let stale = self
            .session
            .as_ref()
            .is_some_and(|s| s.phone.as_str() != new_phone);
        if !stale {
            return;
        }
        tracing::debug!("phone edited; dropping verification session");
        self.session = None;
        if self.state == FlowState::Verifying {
            self.do_transition(FlowState::Collecting, "phone changed during verification");
        }
    }

    /// Abandon the attempt (any non-terminal state → FAILED).
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::TerminalState`] if the flow already ended.
    pub fn abandon(&mut self, reason: &str) -> Result<(), FlowError> {
        if self.state.is_terminal() {
            return Err(FlowError::TerminalState {
                state: self.state.to_string(),
            });
        }
        self.banner = Some(reason.to_string());
        self.do_transition(FlowState::Failed, "abandoned");
        Ok(())
    }

    // ── Async drivers ────────────────────────────────────────────────

    /// Drive the verification step against a strategy.
    ///
    /// Maps the outcome onto the machine: confirmation advances to
    /// `Submitting`, a rejection returns to `Collecting` with a banner,
    /// and a transport failure leaves the flow in `Verifying` with a
    /// retryable banner.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] if called outside `Verifying`.
    pub async fn run_verification(
        &mut self,
        verifier: &Verifier,
        code: Option<&adhikar_core::OtpCode>,
    ) -> Result<VerificationOutcome, FlowError> {
        self.require_state(FlowState::Verifying, "SUBMITTING")?;

        match verifier.verify(code).await {
            Ok(true) => {
                self.verification_succeeded()?;
                Ok(VerificationOutcome::Confirmed)
            }
            Ok(false) => {
                self.verification_failed("Verification failed. Please retry or resend.")?;
                Ok(VerificationOutcome::Rejected)
            }
            Err(err) => {
                // Retryable: stay in Verifying, keep everything entered.
                self.banner = Some("Could not reach the server. Please try again.".to_string());
                Ok(VerificationOutcome::Unreachable(err))
            }
        }
    }

    /// Drive the submission step against the backend.
    ///
    /// Acceptance lands in `Succeeded` with the registration number; any
    /// rejection or failure returns to `Collecting` with a banner and the
    /// form data retained.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError`] if called outside `Submitting`.
    pub async fn run_submission(
        &mut self,
        client: &BeneficiaryClient,
        registration: &BeneficiaryRegistration,
    ) -> Result<(), FlowError> {
        self.require_state(FlowState::Submitting, "SUCCEEDED")?;

        match client.initiate(registration).await {
            Ok(resp) if resp.success => match resp
                .registration_number
                .and_then(|n| RegistrationNumber::new(n).ok())
            {
                Some(number) => self.submission_accepted(number),
                None => self.submission_rejected("Registration accepted without a number"),
            },
            Ok(resp) => {
                let reason = resp
                    .message
                    .unwrap_or_else(|| "Failed to submit form".to_string());
                self.submission_rejected(&reason)
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.submission_rejected("Could not reach the server. Please try again.")
            }
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Validate that the flow is in the expected state.
    fn require_state(&self, expected: FlowState, target: &str) -> Result<(), FlowError> {
        if self.state.is_terminal() {
            return Err(FlowError::TerminalState {
                state: self.state.to_string(),
            });
        }
        if self.state != expected {
            return Err(FlowError::InvalidTransition {
                from: self.state.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    /// Record a state transition.
    fn do_transition(&mut self, to: FlowState, note: &str) {
        self.transitions.push(TransitionRecord {
            from_state: self.state,
            to_state: to,
            timestamp: Timestamp::now(),
            note: note.to_string(),
        });
        self.state = to;
    }
}
