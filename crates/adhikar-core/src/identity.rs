//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the values that identify a person or a
//! registration throughout the stack. Each is a distinct type: you cannot
//! pass an [`OtpCode`] where a [`Phone`] is expected.
//!
//! ## Validation
//!
//! All three types validate format at construction time:
//!
//! - [`Phone`]: 10-digit Indian mobile, first digit 6-9
//! - [`OtpCode`]: exactly 4 ASCII digits
//! - [`RegistrationNumber`]: non-empty after trimming

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A 10-digit Indian mobile number.
///
/// # Validation
///
/// - Exactly 10 ASCII digits
/// - First digit in 6..=9
///
/// Stored as entered (no country-code prefix); display formatting is a
/// presentation concern handled by [`Phone::formatted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Create a phone number from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhone`] if the string is not ten
    /// digits with a leading 6-9.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Self::is_valid(&s) {
            return Err(ValidationError::InvalidPhone(s));
        }
        Ok(Self(s))
    }

    /// Whether a string satisfies the 10-digit mobile format.
    ///
    /// Exposed so form validators can test raw input without constructing.
    pub fn is_valid(s: &str) -> bool {
        s.len() == 10
            && s.bytes().all(|b| b.is_ascii_digit())
            && matches!(s.as_bytes()[0], b'6'..=b'9')
    }

    /// Access the raw digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number split for display, e.g. `"98765-43210"`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 4-digit one-time password as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    /// Create an OTP from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOtp`] unless the string is exactly
    /// four ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Self::is_valid(&s) {
            return Err(ValidationError::InvalidOtp(s));
        }
        Ok(Self(s))
    }

    /// Whether a string is exactly four ASCII digits.
    pub fn is_valid(s: &str) -> bool {
        s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Access the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A backend-issued beneficiary registration number.
///
/// Opaque to the client; the only constraint is non-emptiness. Carried on
/// the success path of a completed registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// Create a registration number, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRegistrationNumber`] if the string
    /// is empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidRegistrationNumber);
        }
        Ok(Self(s))
    }

    /// Access the registration number string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
