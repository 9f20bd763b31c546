#![deny(missing_docs)]

//! # adhikar-form -- Cascading Selection & Validation
//!
//! The form-state core of the registration stack:
//!
//! - [`Selection`]: the cascading fields (religion → category → caste,
//!   PC → AC) as an explicit value object. No ambient mutation: every
//!   transition goes through [`CascadeResolver`] or the pure
//!   [`derive_downstream`] function.
//! - [`CascadeResolver`]: keeps the selection and its dependent option
//!   lists consistent as the user edits, including the discard-stale-fetch
//!   policy for the asynchronous AC list.
//! - [`FormState`] + [`validate`]: the non-cascading fields and the
//!   stateless rule evaluator producing ordered field-level errors.
//!
//! ## Consistency model
//!
//! Changing an upstream field clears every downstream field in its chain,
//! because downstream validity is defined purely in terms of the upstream
//! value. Setting a downstream field is rejected unless the value is in
//! the option list currently offered for it; the UI should never have
//! offered anything else, and a submit with a stale value must fail
//! validation rather than reach the backend.

pub mod cascade;
pub mod selection;
pub mod state;
pub mod validator;

pub use cascade::{AcFetch, CascadeResolver, SelectionError};
pub use selection::{derive_downstream, Selection, SelectionField};
pub use state::FormState;
pub use validator::{validate, validate_otp, FieldError, FormField, FormKind};
