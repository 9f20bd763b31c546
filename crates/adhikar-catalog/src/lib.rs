#![deny(missing_docs)]

//! # adhikar-catalog -- Static Reference Catalog
//!
//! Pure, synchronous lookups over the reference data that ships with the
//! application rather than coming from the backend: the closed religion
//! list, the religion→category→caste hierarchy, and the gender options.
//!
//! ## The two caste datasets
//!
//! The caste hierarchy is served from two named static tables: a general
//! table shared by most religions and a Muslim-specific table selected by
//! exact religion match. [`CasteDataset`] is the explicit tag; callers
//! never compare religion strings themselves.
//!
//! All lookups return empty slices for unknown or absent keys; the
//! catalog never fails and never panics.

pub mod catalog;
pub mod data;

pub use catalog::{
    castes_for, categories_for, dataset_for, gender_options, is_known_religion, religions,
    CasteDataset, GenderOption,
};
