//! Stateless form validation.
//!
//! [`validate`] evaluates every rule independently and returns all
//! violations, ordered by [`FormField`] declaration order so error output
//! is deterministic. Nothing here touches the backend: these are the
//! local, field-scoped checks that gate submission.

use adhikar_core::{OtpCode, Phone};

use crate::cascade::CascadeResolver;
use crate::state::FormState;

/// Form fields, in declaration order. Error output follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Full name.
    Name,
    /// Age (beneficiary form only).
    Age,
    /// Gender.
    Gender,
    /// Phone number.
    Phone,
    /// Leader phone number.
    LeaderPhone,
    /// Religion.
    Religion,
    /// Category.
    Category,
    /// Caste.
    Caste,
    /// Assembly constituency.
    Ac,
    /// One-time password.
    Otp,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::LeaderPhone => "leaderPhone",
            Self::Religion => "religion",
            Self::Category => "category",
            Self::Caste => "caste",
            Self::Ac => "ac",
            Self::Otp => "otp",
        };
        f.write_str(s)
    }
}

/// One field-level violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: FormField,
    /// Message rendered inline next to the field.
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Which form's rule set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// The volunteer/leader profile form: name + role + optional
    /// selections; no age or beneficiary phone.
    Profile,
    /// The beneficiary registration form: everything is required.
    Beneficiary,
}

/// Evaluate every rule for the form, collecting all violations in field
/// declaration order.
///
/// Cascading selections are read from the resolver and checked for
/// membership in their current option lists, so a selection invalidated
/// by an upstream edit fails here instead of reaching the backend.
pub fn validate(
    kind: FormKind,
    state: &FormState,
    resolver: &CascadeResolver,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let selection = resolver.selection();

    if state.name.trim().is_empty() {
        errors.push(FieldError::new(FormField::Name, "Name is required"));
    }

    if kind == FormKind::Beneficiary {
        match state.age.trim().parse::<u32>() {
            Ok(age) if (1..=100).contains(&age) => {}
            _ => errors.push(FieldError::new(
                FormField::Age,
                "Please enter a valid age between 1 and 100",
            )),
        }

        if state.gender.is_none() {
            errors.push(FieldError::new(FormField::Gender, "Please select gender"));
        }

        if !Phone::is_valid(&state.phone) {
            errors.push(FieldError::new(
                FormField::Phone,
                "Please enter a valid 10-digit phone number",
            ));
        }

        if !Phone::is_valid(&state.leader_phone) {
            errors.push(FieldError::new(
                FormField::LeaderPhone,
                "Leader mobile number is missing or invalid",
            ));
        }
    } else {
        // Profile: leader phone is required for volunteers only, and must
        // be well-formed whenever present.
        let leader_phone = state.leader_phone.trim();
        if state.role.requires_leader_phone() && leader_phone.is_empty() {
            errors.push(FieldError::new(
                FormField::LeaderPhone,
                "Leader phone number is required for volunteers",
            ));
        } else if !leader_phone.is_empty() && !Phone::is_valid(leader_phone) {
            errors.push(FieldError::new(
                FormField::LeaderPhone,
                "Please enter a valid 10-digit leader phone number",
            ));
        }
    }

    let require_selection = kind == FormKind::Beneficiary;

    match selection.religion.as_deref() {
        None if require_selection => {
            errors.push(FieldError::new(FormField::Religion, "Please select religion"));
        }
        _ => {}
    }

    match selection.category.as_deref() {
        None if require_selection => {
            errors.push(FieldError::new(FormField::Category, "Please select category"));
        }
        Some(category) if !resolver.category_options().iter().any(|c| c == category) => {
            errors.push(FieldError::new(
                FormField::Category,
                format!("Category \"{category}\" is no longer valid for the selected religion"),
            ));
        }
        _ => {}
    }

    match selection.caste.as_deref() {
        None if require_selection => {
            errors.push(FieldError::new(FormField::Caste, "Please select caste"));
        }
        Some(caste) if !resolver.caste_options().iter().any(|c| c == caste) => {
            errors.push(FieldError::new(
                FormField::Caste,
                format!("Caste \"{caste}\" is no longer valid for the selected category"),
            ));
        }
        _ => {}
    }

    if let Some(ac) = selection.ac.as_deref() {
        if !resolver.ac_options().iter().any(|a| a == ac) {
            errors.push(FieldError::new(
                FormField::Ac,
                format!("Assembly constituency \"{ac}\" is no longer valid for the selected PC"),
            ));
        }
    }

    errors
}

/// Validate OTP input for the verification step.
pub fn validate_otp(otp: &str) -> Option<FieldError> {
    let otp = otp.trim();
    if otp.is_empty() {
        return Some(FieldError::new(FormField::Otp, "Please enter OTP"));
    }
    if !OtpCode::is_valid(otp) {
        return Some(FieldError::new(
            FormField::Otp,
            "Please enter a valid 4-digit OTP",
        ));
    }
    None
}
