#![deny(missing_docs)]

//! # adhikar-core -- Foundational Types for the Adhikar Registration Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies, only `serde`, `thiserror`,
//! and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`Phone`] is not a
//!    `String`. You cannot pass an [`OtpCode`] where a
//!    [`RegistrationNumber`] is expected, and an invalid mobile number
//!    cannot be constructed in the first place.
//!
//! 2. **Closed attribute enums.** [`Gender`] and [`Role`] are exhaustive
//!    enums matching the backend wire values. No free-form strings that can
//!    drift from what the registration backend accepts.
//!
//! 3. **[`ValidationError`] hierarchy.** Structured errors with `thiserror`
//!    with no `Box<dyn Error>` and no `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod profile;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use identity::{OtpCode, Phone, RegistrationNumber};
pub use profile::{Gender, Role};
pub use temporal::Timestamp;
