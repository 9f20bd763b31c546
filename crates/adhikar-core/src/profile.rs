//! # Profile Attribute Enums
//!
//! Closed enums for the profile attributes the backend accepts as fixed
//! wire values: [`Gender`] and [`Role`]. Both serialize to the lowercase
//! strings the REST API expects.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Gender of a registrant or beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (पुरुष).
    Male,
    /// Female (महिला).
    Female,
    /// Other (अन्य).
    Other,
}

impl Gender {
    /// All gender values in dropdown order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Parse a wire value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownGender`] for anything other than
    /// `male`, `female`, or `other`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ValidationError::UnknownGender(value.to_string())),
        }
    }

    /// The lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Hindi display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "पुरुष",
            Self::Female => "महिला",
            Self::Other => "अन्य",
        }
    }

    /// English display label.
    pub fn label_en(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a registered user.
///
/// Volunteers work under a leader and must supply that leader's phone
/// number in their profile; leaders do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A field volunteer, attached to a leader.
    Volunteer,
    /// A leader coordinating volunteers.
    Leader,
}

impl Role {
    /// Parse a wire value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownRole`] for anything other than
    /// `volunteer` or `leader`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "volunteer" => Ok(Self::Volunteer),
            "leader" => Ok(Self::Leader),
            _ => Err(ValidationError::UnknownRole(value.to_string())),
        }
    }

    /// The lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Leader => "leader",
        }
    }

    /// Whether this role requires a leader phone number on the profile.
    pub fn requires_leader_phone(&self) -> bool {
        matches!(self, Self::Volunteer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
