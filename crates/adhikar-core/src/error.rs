//! # Error Hierarchy
//!
//! Structured validation errors for domain primitives, built with
//! `thiserror`. Each variant carries the rejected input and the expected
//! format so callers can surface a precise field-level message without
//! string matching.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
///
/// Each newtype enforces its format constraint at construction time; these
/// errors are the only way construction can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Mobile number does not conform to the 10-digit Indian format
    /// (first digit 6-9, then nine more digits).
    #[error("invalid mobile number: \"{0}\" (expected 10 digits starting with 6-9)")]
    InvalidPhone(String),

    /// OTP is not exactly four ASCII digits.
    #[error("invalid OTP: \"{0}\" (expected exactly 4 digits)")]
    InvalidOtp(String),

    /// Registration number is empty or whitespace-only.
    #[error("invalid registration number: must be non-empty")]
    InvalidRegistrationNumber,

    /// Gender value is not one of the accepted wire values.
    #[error("unknown gender: \"{0}\" (expected male, female, or other)")]
    UnknownGender(String),

    /// Role value is not one of the accepted wire values.
    #[error("unknown role: \"{0}\" (expected volunteer or leader)")]
    UnknownRole(String),
}
