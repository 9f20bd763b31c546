//! Form session state.
//!
//! The non-cascading fields of the active form plus its UI-only state.
//! The cascading fields (religion/category/caste, PC/AC) live in the
//! [`crate::CascadeResolver`]'s [`crate::Selection`]; one owner per
//! value, per the no-ambient-state rule.

use serde::{Deserialize, Serialize};

use adhikar_core::{Gender, Role};

/// The fields of the active form session.
///
/// Owned exclusively by that session and dropped when it ends. Raw user
/// input stays raw (`age` is the string as typed); validation interprets
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormState {
    /// Full name as typed.
    pub name: String,
    /// Age as typed; interpreted as an integer at validation time.
    pub age: String,
    /// Selected gender, if any.
    pub gender: Option<Gender>,
    /// Phone number as typed.
    pub phone: String,
    /// Selected role.
    pub role: Role,
    /// Leader phone as typed (auto-filled from the profile for
    /// volunteers).
    pub leader_phone: String,
    /// Selected panchayat, if any.
    pub panchayat: Option<String>,
    /// Whether the beneficiary wants voter-ID registration help.
    pub voter_id_help: bool,
    /// Whether the beneficiary wants to work at panchayat/ward level.
    pub congress_work: bool,
    /// Scheme names the beneficiary enrolls in.
    pub schemes: Vec<String>,
    /// OTP input as typed.
    pub otp: String,

    // UI-only state.
    /// Whether a request is in flight.
    pub loading: bool,
    /// Page-level error banner, if showing.
    pub error: Option<String>,
    /// Page-level success banner, if showing.
    pub success: Option<String>,
    /// Current step of a multi-step form (0-based).
    pub step: u8,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            gender: None,
            phone: String::new(),
            role: Role::Volunteer,
            leader_phone: String::new(),
            panchayat: None,
            voter_id_help: false,
            congress_work: false,
            schemes: Vec::new(),
            otp: String::new(),
            loading: false,
            error: None,
            success: None,
            step: 0,
        }
    }
}

impl FormState {
    /// A fresh form with the leader phone pre-filled from the profile.
    pub fn with_leader_phone(leader_phone: impl Into<String>) -> Self {
        Self {
            leader_phone: leader_phone.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank_volunteer_form() {
        let state = FormState::default();
        assert!(state.name.is_empty());
        assert_eq!(state.role, Role::Volunteer);
        assert!(!state.loading);
        assert_eq!(state.step, 0);
    }

    #[test]
    fn leader_phone_prefill() {
        let state = FormState::with_leader_phone("9876543211");
        assert_eq!(state.leader_phone, "9876543211");
        assert!(state.phone.is_empty());
    }
}
